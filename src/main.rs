use actix_web::{middleware, web, App, HttpServer};
use garden_plot::{
    api::{openapi::ApiDoc, routes::configure, state::AppState},
    config::ServerConfig,
};
use log::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env();
    let bind_addr = config.bind_addr.clone();
    let state = web::Data::new(AppState::default());
    let openapi = ApiDoc::openapi();

    info!("🌱 Garden plot API started at http://{bind_addr}");
    info!("   GET  /api/plants");
    info!("   POST /api/plants/{{index}}/water | sunlight | grow");
    info!("   GET  /api/plot | /api/plot/tallest");
    info!("   POST /api/plot/grow");
    info!("   📖 Swagger UI → http://{bind_addr}/swagger-ui/");
    info!("   📌 OpenAPI spec → http://{bind_addr}/api-docs/openapi.json");

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }
    server.bind(bind_addr)?.run().await
}
