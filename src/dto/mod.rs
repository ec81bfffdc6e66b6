pub mod dealership_dto;
pub mod report_dto;
pub mod vehicle_dto;
