use std::collections::HashMap;

use actix_web::http::Method;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::models::plant::{Plant, PlantOptions, SharedPlant};

/// Serialises an `actix_web::http::Method` as its uppercase string.
fn serialize_method<S: Serializer>(method: &Method, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(method.as_str())
}

/// A single HAL-style hyperlink.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Link {
    pub href: String,
    #[serde(serialize_with = "serialize_method")]
    #[schema(value_type = String, example = "GET")]
    pub method: Method,
}

/// Map of relation name → link, serialised as the `_links` field in responses.
pub type Links = HashMap<String, Link>;

/// Helper to build a `Link` from an href and an HTTP method.
pub fn link(href: impl Into<String>, method: Method) -> Link {
    Link {
        href: href.into(),
        method,
    }
}

/// Pagination metadata included in responses that return lists.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl Pagination {
    /// Everything on one page.
    pub fn single_page(total: usize) -> Self {
        Self {
            page: 1,
            per_page: total,
            total,
            total_pages: 1,
        }
    }
}

/// Generic single-item response envelope.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[aliases(
    PlantApiResponse = ApiResponse<PlantEntry>,
    TallestPlantApiResponse = ApiResponse<Option<PlantEntry>>,
    GrowthApiResponse = ApiResponse<GrowthReport>,
    PlotSummaryApiResponse = ApiResponse<PlotSummary>,
    PlotGrowthApiResponse = ApiResponse<PlotGrowthReport>
)]
pub struct ApiResponse<T> {
    pub payload: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: HashMap<String, Link>,
}

impl<T> ApiResponse<T> {
    pub fn new(payload: T, links: Links) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
        }
    }
}

/// Generic paginated list response envelope.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[aliases(PlantListResponse = PaginatedResponse<PlantApiResponse>)]
pub struct PaginatedResponse<T> {
    pub payload: Vec<T>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(rename = "_links")]
    pub links: HashMap<String, Link>,
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    pub fn new(payload: Vec<T>, links: Links, pagination: Pagination) -> Self {
        Self {
            payload,
            errors: vec![],
            links,
            pagination,
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// A plant together with its position in the plot, which is its id in the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlantEntry {
    pub index: usize,
    #[serde(flatten)]
    pub plant: Plant,
}

impl PlantEntry {
    pub fn new(index: usize, plant: &SharedPlant) -> Self {
        Self {
            index,
            plant: plant.snapshot(),
        }
    }
}

/// Request body for registering a plant. Omitted fields take the plant defaults.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPlantRequest {
    pub name: String,
    pub height: Option<u32>,
    pub watered: Option<bool>,
    pub sunlight_hours: Option<u32>,
}

impl NewPlantRequest {
    pub fn options(&self) -> PlantOptions {
        let defaults = PlantOptions::default();
        PlantOptions {
            height: self.height.unwrap_or(defaults.height),
            watered: self.watered.unwrap_or(defaults.watered),
            sunlight_hours: self.sunlight_hours.unwrap_or(defaults.sunlight_hours),
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SunlightRequest {
    pub hours: u32,
}

/// Result of one grow cycle on a single plant.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GrowthReport {
    pub plant: PlantEntry,
    pub grown_by: u32,
    pub grown_at: DateTime<Utc>,
}

/// Result of one grow cycle over the whole plot.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlotGrowthReport {
    pub total_growth: u32,
    pub plants: Vec<PlantEntry>,
    pub grown_at: DateTime<Utc>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlotSummary {
    pub plant_count: usize,
    pub all_watered: bool,
    /// Absent when the plot is empty.
    pub tallest: Option<PlantEntry>,
}
