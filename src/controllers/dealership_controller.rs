//! Controller de concesionarios

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::dto::dealership_dto::{
    NearestDealershipRequest, NearestDealershipResponse, SearchStatus,
};
use crate::models::dealership::Dealership;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::dealership_service;
use crate::utils::errors::{AppError, AppResult};

pub struct DealershipController {
    repository: Arc<RwLock<VehicleRepository>>,
    dealerships: Arc<Vec<Dealership>>,
}

impl DealershipController {
    pub fn new(
        repository: Arc<RwLock<VehicleRepository>>,
        dealerships: Arc<Vec<Dealership>>,
    ) -> Self {
        Self {
            repository,
            dealerships,
        }
    }

    pub fn list(&self) -> Vec<Dealership> {
        self.dealerships.as_ref().clone()
    }

    pub async fn nearest_with_vehicles(
        &self,
        request: NearestDealershipRequest,
    ) -> AppResult<NearestDealershipResponse> {
        let location = request.current_location.ok_or_else(|| {
            AppError::BadRequest("Missing or invalid currentLocation".to_string())
        })?;
        let max_distance = request
            .max_distance
            .unwrap_or(dealership_service::DEFAULT_MAX_DISTANCE);

        let (dealership, distance) =
            dealership_service::find_nearest(&self.dealerships, &location, max_distance)
                .ok_or_else(|| {
                    AppError::NotFound(
                        "No dealerships found within the specified distance".to_string(),
                    )
                })?;

        let repository = self.repository.read().await;
        Ok(dealership_service::build_response(
            dealership,
            distance,
            repository.list(),
        ))
    }

    pub fn start_search(&self) -> SearchStatus {
        dealership_service::start_search()
    }

    pub fn poll_search(&self, search_id: &str) -> SearchStatus {
        dealership_service::poll_search(search_id)
    }
}
