//! Configuración del proyecto

pub mod environment;

pub use environment::*;
