use actix_web::{error::InternalError, web, HttpResponse};

use crate::{
    api::handlers::{
        plants::{add_plant, get_plant, give_sunlight, grow_plant, list_plants, water_plant},
        plot::{get_summary, get_tallest, grow_plot},
    },
    models::request::ErrorResponse,
};

/// JSON extractor config that turns body errors into the usual `{ "error": ... }` 400 response.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("JSON deserialization error: {err}");
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(ErrorResponse { error: message }),
        )
        .into()
    })
}

/// Path extractor config: an index segment that is not a non-negative integer
/// can never name a plant, so it gets the same JSON 404 as an unknown index.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        let message = format!("No plant at '{}': {err}", req.path());
        InternalError::from_response(
            err,
            HttpResponse::NotFound().json(ErrorResponse { error: message }),
        )
        .into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(path_config()).service(
        web::scope("/api")
            .service(list_plants)
            .service(add_plant)
            .service(get_plant)
            .service(water_plant)
            .service(give_sunlight)
            .service(grow_plant)
            .service(get_summary)
            .service(get_tallest)
            .service(grow_plot),
    );
}
