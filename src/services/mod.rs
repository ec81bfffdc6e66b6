//! Servicios del sistema
//!
//! Lógica de negocio pura, separada del transporte HTTP: el motor de
//! consultas y los servicios de reportes y concesionarios.

pub mod dealership_service;
pub mod query_engine;
pub mod report_service;
