//! Servicio de concesionarios
//!
//! Búsqueda del concesionario más cercano por distancia euclidiana
//! sobre los fixtures, más el armado de la oferta de vehículos. La
//! búsqueda "asíncrona" devuelve estados fabricados, como el original.

use rand::Rng;
use uuid::Uuid;

use crate::dto::dealership_dto::{
    ContactInfo, NearestDealershipResponse, SearchStatus, VehicleOffer,
};
use crate::models::dealership::Dealership;
use crate::models::vehicle::{Coordinates, FuelType, Vehicle};

pub const DEFAULT_MAX_DISTANCE: f64 = 100.0;

/// Escaneo lineal: el más cercano dentro de `max_distance`
pub fn find_nearest<'a>(
    dealerships: &'a [Dealership],
    location: &Coordinates,
    max_distance: f64,
) -> Option<(&'a Dealership, f64)> {
    let mut nearest: Option<(&Dealership, f64)> = None;
    for dealership in dealerships {
        let distance = dealership.distance_to(location);
        if distance <= max_distance && nearest.map_or(true, |(_, best)| distance < best) {
            nearest = Some((dealership, distance));
        }
    }
    nearest
}

/// Precio derivado: potencia × 100, con recargo por combustible
pub fn vehicle_price(vehicle: &Vehicle) -> i64 {
    let mut price = vehicle.engine_power.unwrap_or(0) as f64 * 100.0;
    match vehicle.fuel_type {
        FuelType::Electricity => price *= 1.2,
        FuelType::Nuclear => price *= 2.5,
        _ => {}
    }
    price.round() as i64
}

pub fn build_response(
    dealership: &Dealership,
    distance: f64,
    vehicles: &[Vehicle],
) -> NearestDealershipResponse {
    let mut rng = rand::thread_rng();
    let offers: Vec<VehicleOffer> = vehicles
        .iter()
        .take(3)
        .map(|vehicle| VehicleOffer {
            vehicle: vehicle.clone(),
            price: vehicle_price(vehicle),
            available_count: rng.gen_range(1..=3),
            discount: if rng.gen::<f64>() > 0.8 { 0.1 } else { 0.0 },
            delivery_time: "2-3 days".to_string(),
        })
        .collect();

    let slug = dealership.name.to_lowercase().replace(' ', "");
    NearestDealershipResponse {
        dealership: dealership.clone(),
        distance: (distance * 10.0).round() / 10.0,
        available_vehicles: offers,
        estimated_travel_time: format!("{} minutes", (distance * 3.0).round() as i64),
        contact_info: ContactInfo {
            phone: dealership.phone.clone(),
            email: format!("info@{}.ru", slug),
            website: format!("https://{}.ru", slug),
        },
        rating: dealership.rating,
    }
}

/// Estado inicial de una búsqueda en background
pub fn start_search() -> SearchStatus {
    SearchStatus {
        search_id: format!("search_{}", Uuid::new_v4()),
        status: "SEARCHING".to_string(),
        results_count: 0,
        estimated_time_remaining: "30 seconds".to_string(),
    }
}

/// Estado fabricado de una búsqueda previa
pub fn poll_search(search_id: &str) -> SearchStatus {
    let mut rng = rand::thread_rng();
    let completed = rng.gen::<f64>() > 0.5;
    SearchStatus {
        search_id: search_id.to_string(),
        status: if completed { "COMPLETED" } else { "SEARCHING" }.to_string(),
        results_count: if completed { rng.gen_range(1..=5) } else { 0 },
        estimated_time_remaining: if completed { "5 seconds" } else { "25 seconds" }.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{fixture_data, vehicle_repository::VehicleRepository};

    #[test]
    fn nearest_picks_closest_within_max_distance() {
        let dealerships = fixture_data::dealerships();
        let (nearest, distance) = find_nearest(
            &dealerships,
            &Coordinates { x: 100.0, y: 200.0 },
            DEFAULT_MAX_DISTANCE,
        )
        .unwrap();
        assert_eq!(nearest.name, "Auto Center Moscow");
        assert!((distance - 200f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn nearest_is_none_when_everything_is_too_far() {
        let dealerships = fixture_data::dealerships();
        let result = find_nearest(
            &dealerships,
            &Coordinates { x: 5000.0, y: 5000.0 },
            DEFAULT_MAX_DISTANCE,
        );
        assert!(result.is_none());
    }

    #[test]
    fn price_applies_fuel_surcharges() {
        let repo = VehicleRepository::with_fixtures();
        // Tesla: 1020 * 100 * 1.2
        assert_eq!(vehicle_price(repo.find_by_id(1).unwrap()), 122400);
        // Ford: 400 * 100
        assert_eq!(vehicle_price(repo.find_by_id(2).unwrap()), 40000);
        // Submarine: 50000 * 100 * 2.5
        assert_eq!(vehicle_price(repo.find_by_id(4).unwrap()), 12_500_000);
    }

    #[test]
    fn response_offers_at_most_three_vehicles() {
        let dealerships = fixture_data::dealerships();
        let vehicles = VehicleRepository::with_fixtures().list().to_vec();
        let response = build_response(&dealerships[0], 14.1421, &vehicles);
        assert_eq!(response.available_vehicles.len(), 3);
        assert_eq!(response.distance, 14.1);
        assert_eq!(response.contact_info.email, "info@autocentermoscow.ru");
    }
}
