//! Datos fixture de concesionarios y mantenimiento
//!
//! Entidades de solo lectura fuera del inventario: se cargan una vez
//! al construir el estado y no mutan.

use std::collections::HashMap;

use chrono::{Duration, Utc};

use crate::models::dealership::Dealership;
use crate::models::maintenance::MaintenanceRecord;
use crate::models::vehicle::Coordinates;

pub fn dealerships() -> Vec<Dealership> {
    vec![
        Dealership {
            id: 1,
            name: "Auto Center Moscow".to_string(),
            location: Coordinates { x: 110.0, y: 210.0 },
            address: "Moscow, Lenina st. 123".to_string(),
            working_hours: "9:00-21:00".to_string(),
            phone: "+7-495-123-4567".to_string(),
            rating: 4.5,
        },
        Dealership {
            id: 2,
            name: "Car Market SPb".to_string(),
            location: Coordinates { x: 200.0, y: 300.0 },
            address: "St. Petersburg, Nevsky st. 45".to_string(),
            working_hours: "8:00-20:00".to_string(),
            phone: "+7-812-987-6543".to_string(),
            rating: 4.2,
        },
    ]
}

pub fn maintenance_records() -> HashMap<i64, Vec<MaintenanceRecord>> {
    let now = Utc::now();
    let mut records = HashMap::new();
    records.insert(
        1,
        vec![
            MaintenanceRecord {
                id: 1,
                date: now - Duration::days(30),
                mileage: 15000,
                description: "Regular maintenance".to_string(),
                parts_replaced: vec![
                    "Oil filter".to_string(),
                    "Air filter".to_string(),
                    "Spark plugs".to_string(),
                ],
                technician: "John Smith".to_string(),
                cost: 2500.00,
                duration_hours: 2.5,
            },
            MaintenanceRecord {
                id: 2,
                date: now - Duration::days(60),
                mileage: 10000,
                description: "Brake system check".to_string(),
                parts_replaced: vec!["Brake pads".to_string()],
                technician: "Mike Johnson".to_string(),
                cost: 1800.50,
                duration_hours: 1.5,
            },
        ],
    );
    records
}
