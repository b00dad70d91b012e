use actix_web::{get, http::header, http::Method, post, web, HttpResponse, Responder};
use chrono::Utc;
use log::info;

use crate::{
    api::{error::ApiError, state::AppState},
    models::{
        plant::{Plant, SharedPlant},
        request::{
            link, ApiResponse, GrowthReport, Links, NewPlantRequest, PaginatedResponse,
            Pagination, PlantEntry, SunlightRequest,
        },
    },
};

/// Links shared by every representation of a single plant.
pub fn plant_links(index: usize) -> Links {
    let href = format!("/api/plants/{index}");
    let mut links = Links::new();
    links.insert("self".into(), link(href.clone(), Method::GET));
    links.insert("water".into(), link(format!("{href}/water"), Method::POST));
    links.insert("sunlight".into(), link(format!("{href}/sunlight"), Method::POST));
    links.insert("grow".into(), link(format!("{href}/grow"), Method::POST));
    links.insert("collection".into(), link("/api/plants", Method::GET));
    links
}

/// Clones the handle out of the plot so the plot lock is released before the plant is touched.
fn find_plant(state: &AppState, index: usize) -> Result<SharedPlant, ApiError> {
    state
        .plot()
        .get(index)
        .cloned()
        .ok_or(ApiError::PlantNotFound(index))
}

fn entry_response(index: usize, plant: &SharedPlant) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::new(
        PlantEntry::new(index, plant),
        plant_links(index),
    ))
}

/// GET /api/plants
/// Returns every plant in the plot, in the order they were added.
#[utoipa::path(
    get,
    path = "/api/plants",
    tag = "plants",
    responses(
        (status = 200, description = "All plants in insertion order", body = PlantListResponse)
    )
)]
#[get("/plants")]
pub async fn list_plants(state: web::Data<AppState>) -> impl Responder {
    let items: Vec<ApiResponse<PlantEntry>> = state
        .plot()
        .plants()
        .iter()
        .enumerate()
        .map(|(index, plant)| ApiResponse::new(PlantEntry::new(index, plant), plant_links(index)))
        .collect();
    let total = items.len();
    let mut collection_links = Links::new();
    collection_links.insert("self".into(), link("/api/plants", Method::GET));
    collection_links.insert("plot".into(), link("/api/plot", Method::GET));
    HttpResponse::Ok().json(PaginatedResponse::new(
        items,
        collection_links,
        Pagination::single_page(total),
    ))
}

/// POST /api/plants
/// Adds a new plant at the end of the plot.
#[utoipa::path(
    post,
    path = "/api/plants",
    tag = "plants",
    request_body = NewPlantRequest,
    responses(
        (status = 201, description = "Plant added", body = PlantApiResponse),
        (status = 400, description = "Blank name or malformed body", body = ErrorResponse)
    )
)]
#[post("/plants")]
pub async fn add_plant(
    state: web::Data<AppState>,
    body: web::Json<NewPlantRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ApiError::InvalidRequest("Plant name must not be blank.".into()));
    }

    let (index, entry) = {
        let mut plot = state.plot_mut();
        let plant = plot.plant(Plant::with_options(name, request.options()));
        let index = plot.len() - 1;
        (index, PlantEntry::new(index, &plant))
    };
    info!("Planted {name} at index {index}");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/plants/{index}")))
        .json(ApiResponse::new(entry, plant_links(index))))
}

/// GET /api/plants/{index}
#[utoipa::path(
    get,
    path = "/api/plants/{index}",
    tag = "plants",
    params(("index" = usize, Path, description = "Position of the plant in the plot")),
    responses(
        (status = 200, description = "The plant", body = PlantApiResponse),
        (status = 404, description = "No plant at this index", body = ErrorResponse)
    )
)]
#[get("/plants/{index}")]
pub async fn get_plant(
    state: web::Data<AppState>,
    path: web::Path<usize>,
) -> Result<HttpResponse, ApiError> {
    let index = path.into_inner();
    let plant = find_plant(&state, index)?;
    Ok(entry_response(index, &plant))
}

/// POST /api/plants/{index}/water
#[utoipa::path(
    post,
    path = "/api/plants/{index}/water",
    tag = "plants",
    params(("index" = usize, Path, description = "Position of the plant in the plot")),
    responses(
        (status = 200, description = "The watered plant", body = PlantApiResponse),
        (status = 404, description = "No plant at this index", body = ErrorResponse)
    )
)]
#[post("/plants/{index}/water")]
pub async fn water_plant(
    state: web::Data<AppState>,
    path: web::Path<usize>,
) -> Result<HttpResponse, ApiError> {
    let index = path.into_inner();
    let plant = find_plant(&state, index)?;
    plant.water();
    info!("Watered plant {index}");
    Ok(entry_response(index, &plant))
}

/// POST /api/plants/{index}/sunlight
/// Adds sunlight hours to the plant's running total for the current cycle.
#[utoipa::path(
    post,
    path = "/api/plants/{index}/sunlight",
    tag = "plants",
    params(("index" = usize, Path, description = "Position of the plant in the plot")),
    request_body = SunlightRequest,
    responses(
        (status = 200, description = "The plant with its updated sunlight total", body = PlantApiResponse),
        (status = 400, description = "Hours missing, negative or not an integer", body = ErrorResponse),
        (status = 404, description = "No plant at this index", body = ErrorResponse)
    )
)]
#[post("/plants/{index}/sunlight")]
pub async fn give_sunlight(
    state: web::Data<AppState>,
    path: web::Path<usize>,
    body: web::Json<SunlightRequest>,
) -> Result<HttpResponse, ApiError> {
    let index = path.into_inner();
    let hours = body.into_inner().hours;
    let plant = find_plant(&state, index)?;
    plant.give_sunlight(hours);
    info!("Gave {hours}h of sunlight to plant {index}");
    Ok(entry_response(index, &plant))
}

/// POST /api/plants/{index}/grow
/// Runs one grow cycle on a single plant.
#[utoipa::path(
    post,
    path = "/api/plants/{index}/grow",
    tag = "plants",
    params(("index" = usize, Path, description = "Position of the plant in the plot")),
    responses(
        (status = 200, description = "Growth report", body = GrowthApiResponse),
        (status = 404, description = "No plant at this index", body = ErrorResponse)
    )
)]
#[post("/plants/{index}/grow")]
pub async fn grow_plant(
    state: web::Data<AppState>,
    path: web::Path<usize>,
) -> Result<HttpResponse, ApiError> {
    let index = path.into_inner();
    let plant = find_plant(&state, index)?;
    let grown_by = plant.grow();
    info!("Plant {index} grew by {grown_by}");
    let report = GrowthReport {
        plant: PlantEntry::new(index, &plant),
        grown_by,
        grown_at: Utc::now(),
    };
    Ok(HttpResponse::Ok().json(ApiResponse::new(report, plant_links(index))))
}
