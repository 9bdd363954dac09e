use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quizforge_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let bind_address = (config.web_server_host.clone(), config.web_server_port);

    let state = AppState::new(config).map_err(|err| {
        log::error!("failed to start: {}", err);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string())
    })?;

    log::info!(
        "starting HTTP server on {}:{} (model: {})",
        bind_address.0,
        bind_address.1,
        state.config.openai_model
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
