pub mod dealership_controller;
pub mod report_controller;
pub mod shop_controller;
pub mod vehicle_controller;
