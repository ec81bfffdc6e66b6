//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos del inventario y de las
//! entidades fixture (concesionarios y mantenimiento).

pub mod dealership;
pub mod maintenance;
pub mod vehicle;
