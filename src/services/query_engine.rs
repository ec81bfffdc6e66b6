//! Motor de consultas de vehículos
//!
//! Función pura sobre un snapshot del inventario: filtra, ordena y
//! pagina en ese orden fijo, sin mutar la colección. Las consultas
//! derivadas (estadísticas y búsquedas) comparten la misma semántica
//! de filtrado sin ordenación.

use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use crate::dto::vehicle_dto::{PagedVehicleResponse, VehicleQueryParams};
use crate::models::vehicle::{FuelType, Vehicle};
use crate::utils::errors::AppError;

/// Campo de ordenación soportado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    CreationDate,
    EnginePower,
    NumberOfWheels,
    Capacity,
    FuelType,
}

impl SortField {
    /// Un campo desconocido no es un error: la ordenación simplemente
    /// no se aplica, igual que en el servidor original.
    fn parse(value: &str) -> Option<Self> {
        match value {
            "id" => Some(SortField::Id),
            "name" => Some(SortField::Name),
            "creationDate" => Some(SortField::CreationDate),
            "enginePower" => Some(SortField::EnginePower),
            "numberOfWheels" => Some(SortField::NumberOfWheels),
            "capacity" => Some(SortField::Capacity),
            "fuelType" => Some(SortField::FuelType),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Especificación tipada de una consulta paginada
#[derive(Debug, Clone)]
pub struct VehicleQuery {
    pub page: i64,
    pub size: i64,
    pub sort: Option<SortField>,
    pub order: SortOrder,
    pub name: Option<String>,
    pub fuel_type: Option<FuelType>,
    pub min_engine_power: Option<i64>,
    pub max_engine_power: Option<i64>,
    pub min_wheels: Option<i64>,
    pub max_wheels: Option<i64>,
    pub min_capacity: Option<f64>,
    pub max_capacity: Option<f64>,
}

impl Default for VehicleQuery {
    fn default() -> Self {
        Self {
            page: 1,
            size: 20,
            sort: None,
            order: SortOrder::Asc,
            name: None,
            fuel_type: None,
            min_engine_power: None,
            max_engine_power: None,
            min_wheels: None,
            max_wheels: None,
            min_capacity: None,
            max_capacity: None,
        }
    }
}

impl VehicleQuery {
    /// Convierte los query params crudos en una consulta tipada
    ///
    /// Un valor numérico mal formado se rechaza como BadRequest con el
    /// mensaje del parseo; nunca debe tumbar el proceso.
    pub fn from_params(params: &VehicleQueryParams) -> Result<Self, AppError> {
        let query = Self {
            page: parse_number("page", &params.page)?.unwrap_or(1),
            size: parse_number("size", &params.size)?.unwrap_or(20),
            sort: params.sort.as_deref().and_then(SortField::parse),
            order: match params.order.as_deref() {
                Some("desc") => SortOrder::Desc,
                _ => SortOrder::Asc,
            },
            name: params.name.clone(),
            fuel_type: params
                .fuel_type
                .as_deref()
                .map(FuelType::parse)
                .transpose()?,
            min_engine_power: parse_number("minEnginePower", &params.min_engine_power)?,
            max_engine_power: parse_number("maxEnginePower", &params.max_engine_power)?,
            min_wheels: parse_number("minWheels", &params.min_wheels)?,
            max_wheels: parse_number("maxWheels", &params.max_wheels)?,
            min_capacity: parse_number("minCapacity", &params.min_capacity)?,
            max_capacity: parse_number("maxCapacity", &params.max_capacity)?,
        };

        if query.size < 1 {
            return Err(AppError::BadRequest("size must be positive".to_string()));
        }
        Ok(query)
    }
}

fn parse_number<T>(field: &str, value: &Option<String>) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    match value {
        None => Ok(None),
        Some(raw) => raw.parse::<T>().map(Some).map_err(|e| {
            AppError::BadRequest(format!("Invalid value '{}' for '{}': {}", raw, field, e))
        }),
    }
}

/// Ejecuta la consulta: filtro → ordenación estable → paginación
pub fn query(vehicles: &[Vehicle], spec: &VehicleQuery) -> PagedVehicleResponse {
    let mut filtered: Vec<Vehicle> = vehicles
        .iter()
        .filter(|v| matches_filters(v, spec))
        .cloned()
        .collect();

    if let Some(field) = spec.sort {
        // sort_by es estable: los empates (incluidos los campos
        // ausentes, que comparan como iguales) conservan el orden
        // relativo original tanto en asc como en desc.
        filtered.sort_by(|a, b| {
            let ordering = compare_by(a, b, field);
            match spec.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }

    let total_elements = filtered.len();
    // size >= 1 garantizado en from_params; la aritmética va en u64
    // saturante para que valores extremos de page/size recorten a
    // página vacía en lugar de desbordar.
    let size = spec.size as u64;
    let total_pages = if total_elements == 0 {
        0
    } else {
        (total_elements as u64).div_ceil(size) as i64
    };

    // Recorte natural: una página fuera de rango produce contenido
    // vacío, no un error.
    let content = if spec.page < 1 {
        Vec::new()
    } else {
        let start = (spec.page as u64 - 1).saturating_mul(size);
        match usize::try_from(start) {
            Ok(start) if start < total_elements => {
                let end = start
                    .saturating_add(spec.size as usize)
                    .min(total_elements);
                filtered[start..end].to_vec()
            }
            _ => Vec::new(),
        }
    };

    PagedVehicleResponse {
        content,
        total_elements,
        total_pages,
        current_page: spec.page,
    }
}

/// Conjunción de todos los predicados presentes
///
/// Un campo opcional ausente en el registro nunca satisface una cota
/// min/max: el registro se excluye.
fn matches_filters(vehicle: &Vehicle, spec: &VehicleQuery) -> bool {
    if let Some(name) = &spec.name {
        if !vehicle
            .name
            .to_lowercase()
            .contains(&name.to_lowercase())
        {
            return false;
        }
    }
    if let Some(fuel_type) = spec.fuel_type {
        if vehicle.fuel_type != fuel_type {
            return false;
        }
    }
    if let Some(min) = spec.min_engine_power {
        if !vehicle.engine_power.is_some_and(|p| p >= min) {
            return false;
        }
    }
    if let Some(max) = spec.max_engine_power {
        if !vehicle.engine_power.is_some_and(|p| p <= max) {
            return false;
        }
    }
    if let Some(min) = spec.min_wheels {
        if !vehicle.number_of_wheels.is_some_and(|w| w >= min) {
            return false;
        }
    }
    if let Some(max) = spec.max_wheels {
        if !vehicle.number_of_wheels.is_some_and(|w| w <= max) {
            return false;
        }
    }
    if let Some(min) = spec.min_capacity {
        if vehicle.capacity < min {
            return false;
        }
    }
    if let Some(max) = spec.max_capacity {
        if vehicle.capacity > max {
            return false;
        }
    }
    true
}

fn compare_by(a: &Vehicle, b: &Vehicle, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => a.name.cmp(&b.name),
        SortField::CreationDate => a.creation_date.cmp(&b.creation_date),
        SortField::EnginePower => compare_options(a.engine_power, b.engine_power),
        SortField::NumberOfWheels => compare_options(a.number_of_wheels, b.number_of_wheels),
        SortField::Capacity => a.capacity.partial_cmp(&b.capacity).unwrap_or(Ordering::Equal),
        SortField::FuelType => a.fuel_type.as_str().cmp(b.fuel_type.as_str()),
    }
}

/// Si cualquiera de los dos valores está ausente el par compara como
/// igual: sin preferencia, se conserva el orden relativo original.
fn compare_options(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => Ordering::Equal,
    }
}

/// Media aritmética de la potencia sobre los registros que la tienen
pub fn average_engine_power(vehicles: &[Vehicle]) -> Result<f64, AppError> {
    let powers: Vec<i64> = vehicles.iter().filter_map(|v| v.engine_power).collect();
    if powers.is_empty() {
        return Err(AppError::NotFound("No data for calculation".to_string()));
    }
    Ok(powers.iter().sum::<i64>() as f64 / powers.len() as f64)
}

/// Conteo exacto por número de ruedas
pub fn count_by_wheels(vehicles: &[Vehicle], wheels: i64) -> Result<usize, AppError> {
    if wheels < 1 {
        return Err(AppError::BadRequest("Invalid number of wheels".to_string()));
    }
    Ok(vehicles
        .iter()
        .filter(|v| v.number_of_wheels == Some(wheels))
        .count())
}

/// Búsqueda por prefijo de nombre, sin distinguir mayúsculas
pub fn search_by_name_prefix(
    vehicles: &[Vehicle],
    prefix: &str,
) -> Result<Vec<Vehicle>, AppError> {
    if prefix.is_empty() {
        return Err(AppError::BadRequest("Invalid prefix".to_string()));
    }
    let prefix = prefix.to_lowercase();
    let results: Vec<Vehicle> = vehicles
        .iter()
        .filter(|v| v.name.to_lowercase().starts_with(&prefix))
        .cloned()
        .collect();
    if results.is_empty() {
        return Err(AppError::NotFound("No vehicles found".to_string()));
    }
    Ok(results)
}

/// Búsqueda por rango inclusivo de potencia de motor
pub fn search_by_engine_power(
    vehicles: &[Vehicle],
    from: i64,
    to: i64,
) -> Result<Vec<Vehicle>, AppError> {
    if from > to {
        return Err(AppError::BadRequest(
            "Invalid power range (from > to)".to_string(),
        ));
    }
    let results: Vec<Vehicle> = vehicles
        .iter()
        .filter(|v| v.engine_power.is_some_and(|p| p >= from && p <= to))
        .cloned()
        .collect();
    if results.is_empty() {
        return Err(AppError::NotFound(
            "No vehicles found in this range".to_string(),
        ));
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::vehicle_repository::VehicleRepository;

    fn fixtures() -> Vec<Vehicle> {
        VehicleRepository::with_fixtures().list().to_vec()
    }

    #[test]
    fn default_query_returns_everything_on_one_page() {
        let result = query(&fixtures(), &VehicleQuery::default());
        assert_eq!(result.total_elements, 5);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.current_page, 1);
        assert_eq!(result.content.len(), 5);
    }

    #[test]
    fn name_filter_is_case_insensitive_substring() {
        let spec = VehicleQuery {
            name: Some("TESLA".to_string()),
            ..Default::default()
        };
        let result = query(&fixtures(), &spec);
        assert_eq!(result.total_elements, 1);
        assert_eq!(result.content[0].name, "Tesla Model S");
    }

    #[test]
    fn filters_combine_with_logical_and() {
        let spec = VehicleQuery {
            min_wheels: Some(4),
            max_capacity: Some(10.0),
            ..Default::default()
        };
        let result = query(&fixtures(), &spec);
        // Tesla, Ford y Race Car; el Boeing queda fuera por capacidad
        assert_eq!(result.total_elements, 3);
    }

    #[test]
    fn adding_a_filter_never_increases_total_elements() {
        let vehicles = fixtures();
        let broad = VehicleQuery {
            min_engine_power: Some(400),
            ..Default::default()
        };
        let narrow = VehicleQuery {
            min_engine_power: Some(400),
            max_wheels: Some(4),
            ..Default::default()
        };
        assert!(
            query(&vehicles, &narrow).total_elements
                <= query(&vehicles, &broad).total_elements
        );
    }

    #[test]
    fn absent_optional_field_never_satisfies_a_bound() {
        let mut vehicles = fixtures();
        vehicles[1].engine_power = None;

        let spec = VehicleQuery {
            min_engine_power: Some(0),
            ..Default::default()
        };
        let result = query(&vehicles, &spec);
        assert_eq!(result.total_elements, 4);
        assert!(result.content.iter().all(|v| v.engine_power.is_some()));
    }

    #[test]
    fn sort_desc_by_engine_power_with_pagination() {
        let spec = VehicleQuery {
            page: 1,
            size: 2,
            sort: Some(SortField::EnginePower),
            order: SortOrder::Desc,
            ..Default::default()
        };
        let result = query(&fixtures(), &spec);
        assert_eq!(result.total_elements, 5);
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.current_page, 1);
        assert_eq!(result.content[0].engine_power, Some(60000));
        assert_eq!(result.content[1].engine_power, Some(50000));
    }

    #[test]
    fn sort_is_stable_for_equal_and_absent_keys() {
        let mut vehicles = fixtures();
        vehicles[0].engine_power = None;
        vehicles[2].engine_power = None;
        vehicles[4].engine_power = None;
        // Quedan: Ford(400) y Submarine(50000) con valor; el resto sin él.
        let unsorted_absent: Vec<i64> = vehicles
            .iter()
            .filter(|v| v.engine_power.is_none())
            .map(|v| v.id)
            .collect();

        for order in [SortOrder::Asc, SortOrder::Desc] {
            let spec = VehicleQuery {
                sort: Some(SortField::EnginePower),
                order,
                ..Default::default()
            };
            let result = query(&vehicles, &spec);
            let sorted_absent: Vec<i64> = result
                .content
                .iter()
                .filter(|v| v.engine_power.is_none())
                .map(|v| v.id)
                .collect();
            assert_eq!(sorted_absent, unsorted_absent);
        }
    }

    #[test]
    fn pagination_partitions_the_filtered_sequence() {
        let vehicles = fixtures();
        let full = query(
            &vehicles,
            &VehicleQuery {
                sort: Some(SortField::Name),
                ..Default::default()
            },
        );

        let mut concatenated = Vec::new();
        let size = 2;
        let spec = VehicleQuery {
            size,
            sort: Some(SortField::Name),
            ..Default::default()
        };
        let total_pages = query(&vehicles, &spec).total_pages;
        for page in 1..=total_pages {
            let mut paged = query(&vehicles, &VehicleQuery { page, ..spec.clone() });
            concatenated.append(&mut paged.content);
        }
        assert_eq!(concatenated, full.content);
    }

    #[test]
    fn out_of_range_page_yields_empty_content() {
        let spec = VehicleQuery {
            page: 99,
            ..Default::default()
        };
        let result = query(&fixtures(), &spec);
        assert!(result.content.is_empty());
        assert_eq!(result.total_elements, 5);
        assert_eq!(result.current_page, 99);
    }

    #[test]
    fn extreme_page_value_yields_empty_content() {
        let spec = VehicleQuery {
            page: i64::MAX,
            size: 2,
            ..Default::default()
        };
        let result = query(&fixtures(), &spec);
        assert!(result.content.is_empty());
        assert_eq!(result.total_elements, 5);
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.current_page, i64::MAX);
    }

    #[test]
    fn extreme_size_value_returns_everything_on_one_page() {
        let spec = VehicleQuery {
            size: i64::MAX,
            ..Default::default()
        };
        let result = query(&fixtures(), &spec);
        assert_eq!(result.content.len(), 5);
        assert_eq!(result.total_pages, 1);
    }

    #[test]
    fn empty_collection_has_zero_total_pages() {
        let result = query(&[], &VehicleQuery::default());
        assert_eq!(result.total_elements, 0);
        assert_eq!(result.total_pages, 0);
        assert!(result.content.is_empty());
    }

    #[test]
    fn unknown_sort_field_preserves_original_order() {
        let spec = VehicleQuery {
            sort: SortField::parse("unknownField"),
            ..Default::default()
        };
        assert_eq!(spec.sort, None);
        let result = query(&fixtures(), &spec);
        let ids: Vec<i64> = result.content.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn malformed_numeric_param_is_bad_request() {
        let params = crate::dto::vehicle_dto::VehicleQueryParams {
            min_engine_power: Some("lots".to_string()),
            ..Default::default()
        };
        let err = VehicleQuery::from_params(&params).unwrap_err();
        match err {
            AppError::BadRequest(msg) => {
                assert!(msg.contains("minEnginePower"));
                assert!(msg.contains("lots"));
            }
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn zero_size_is_bad_request() {
        let params = crate::dto::vehicle_dto::VehicleQueryParams {
            size: Some("0".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            VehicleQuery::from_params(&params),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn average_engine_power_over_fixtures() {
        assert_eq!(average_engine_power(&fixtures()).unwrap(), 22444.0);
    }

    #[test]
    fn average_engine_power_without_data_is_not_found() {
        let mut vehicles = fixtures();
        for v in &mut vehicles {
            v.engine_power = None;
        }
        assert!(matches!(
            average_engine_power(&vehicles),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn count_by_wheels_exact_match() {
        assert_eq!(count_by_wheels(&fixtures(), 4).unwrap(), 3);
        assert_eq!(count_by_wheels(&fixtures(), 18).unwrap(), 1);
    }

    #[test]
    fn count_by_wheels_rejects_non_positive_target() {
        assert!(matches!(
            count_by_wheels(&fixtures(), 0),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn name_prefix_search_is_case_insensitive() {
        let results = search_by_name_prefix(&fixtures(), "teSLa").unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Tesla Model S");
    }

    #[test]
    fn name_prefix_search_signals_empty_results() {
        assert!(matches!(
            search_by_name_prefix(&fixtures(), "Zeppelin"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            search_by_name_prefix(&fixtures(), ""),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn engine_power_range_is_inclusive_and_order_preserving() {
        let results = search_by_engine_power(&fixtures(), 500, 1000).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].engine_power, Some(800));

        let bounds = search_by_engine_power(&fixtures(), 400, 1020).unwrap();
        let powers: Vec<i64> = bounds.iter().filter_map(|v| v.engine_power).collect();
        assert_eq!(powers, vec![1020, 400, 800]);
    }

    #[test]
    fn engine_power_range_rejects_inverted_bounds() {
        assert!(matches!(
            search_by_engine_power(&fixtures(), 1000, 500),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            search_by_engine_power(&fixtures(), 70000, 80000),
            Err(AppError::NotFound(_))
        ));
    }
}
