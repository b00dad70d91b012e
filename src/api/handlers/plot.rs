use actix_web::{get, http::Method, post, web, HttpResponse, Responder};
use chrono::Utc;
use log::info;

use crate::{
    api::state::AppState,
    models::request::{
        link, ApiResponse, Links, PlantEntry, PlotGrowthReport, PlotSummary,
    },
};

fn plot_links() -> Links {
    let mut links = Links::new();
    links.insert("self".into(), link("/api/plot", Method::GET));
    links.insert("tallest".into(), link("/api/plot/tallest", Method::GET));
    links.insert("grow".into(), link("/api/plot/grow", Method::POST));
    links.insert("plants".into(), link("/api/plants", Method::GET));
    links
}

/// GET /api/plot
/// Aggregate view of the plot: size, watering status and tallest plant.
#[utoipa::path(
    get,
    path = "/api/plot",
    tag = "plot",
    responses(
        (status = 200, description = "Plot summary", body = PlotSummaryApiResponse)
    )
)]
#[get("/plot")]
pub async fn get_summary(state: web::Data<AppState>) -> impl Responder {
    let summary = {
        let plot = state.plot();
        PlotSummary {
            plant_count: plot.len(),
            all_watered: plot.all_watered(),
            tallest: plot
                .tallest_entry()
                .map(|(index, plant)| PlantEntry::new(index, plant)),
        }
    };
    HttpResponse::Ok().json(ApiResponse::new(summary, plot_links()))
}

/// GET /api/plot/tallest
/// The payload is `null` when the plot is empty.
#[utoipa::path(
    get,
    path = "/api/plot/tallest",
    tag = "plot",
    responses(
        (status = 200, description = "Tallest plant, first added wins ties", body = TallestPlantApiResponse)
    )
)]
#[get("/plot/tallest")]
pub async fn get_tallest(state: web::Data<AppState>) -> impl Responder {
    let tallest = state
        .plot()
        .tallest_entry()
        .map(|(index, plant)| PlantEntry::new(index, plant));

    let mut links = Links::new();
    links.insert("self".into(), link("/api/plot/tallest", Method::GET));
    links.insert("plot".into(), link("/api/plot", Method::GET));
    if let Some(entry) = &tallest {
        links.insert(
            "plant".into(),
            link(format!("/api/plants/{}", entry.index), Method::GET),
        );
    }
    HttpResponse::Ok().json(ApiResponse::new(tallest, links))
}

/// POST /api/plot/grow
/// Runs one grow cycle on every plant, in insertion order.
#[utoipa::path(
    post,
    path = "/api/plot/grow",
    tag = "plot",
    responses(
        (status = 200, description = "Growth report for the whole plot", body = PlotGrowthApiResponse)
    )
)]
#[post("/plot/grow")]
pub async fn grow_plot(state: web::Data<AppState>) -> impl Responder {
    let report = {
        let plot = state.plot();
        let total_growth = plot.grow_all();
        PlotGrowthReport {
            total_growth,
            plants: plot
                .plants()
                .iter()
                .enumerate()
                .map(|(index, plant)| PlantEntry::new(index, plant))
                .collect(),
            grown_at: Utc::now(),
        }
    };
    info!(
        "Plot grew by {} across {} plant(s)",
        report.total_growth,
        report.plants.len()
    );
    HttpResponse::Ok().json(ApiResponse::new(report, plot_links()))
}
