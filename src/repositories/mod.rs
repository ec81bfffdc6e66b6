pub mod fixture_data;
pub mod vehicle_repository;
