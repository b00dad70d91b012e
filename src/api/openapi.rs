use utoipa::OpenApi;

use crate::models::{
    plant::Plant,
    request::{
        ErrorResponse, GrowthApiResponse, GrowthReport, Link, NewPlantRequest, Pagination,
        PlantApiResponse, PlantEntry, PlantListResponse, PlotGrowthApiResponse,
        PlotGrowthReport, PlotSummary, PlotSummaryApiResponse, SunlightRequest,
        TallestPlantApiResponse,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Garden Plot API",
        description = "In-memory garden plot: register plants, water them, give them sunlight and run grow cycles.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::plants::list_plants,
        crate::api::handlers::plants::add_plant,
        crate::api::handlers::plants::get_plant,
        crate::api::handlers::plants::water_plant,
        crate::api::handlers::plants::give_sunlight,
        crate::api::handlers::plants::grow_plant,
        crate::api::handlers::plot::get_summary,
        crate::api::handlers::plot::get_tallest,
        crate::api::handlers::plot::grow_plot,
    ),
    components(
        schemas(
            // Domain
            Plant, PlantEntry,
            // Requests
            NewPlantRequest, SunlightRequest,
            // Reports
            GrowthReport, PlotGrowthReport, PlotSummary,
            // Shared
            Link, Pagination, ErrorResponse,
            // Concrete response envelopes (via #[aliases])
            PlantApiResponse,
            PlantListResponse,
            TallestPlantApiResponse,
            GrowthApiResponse,
            PlotSummaryApiResponse,
            PlotGrowthApiResponse,
        )
    ),
    tags(
        (name = "plants", description = "Individual plants: register, water, sunlight, grow"),
        (name = "plot",   description = "Whole plot: summary, tallest plant, grow cycle"),
    )
)]
pub struct ApiDoc;
