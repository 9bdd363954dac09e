use actix_web::{post, web, HttpRequest, HttpResponse};
use chrono::Local;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{GenerateTournamentRequest, ParseCompletionRequest, ReviewTournamentRequest},
        response::ApiResponse,
    },
    parsers::parse_tournament,
    services::tournament_service::web_design_template,
};

#[post("/api/tournaments/generate")]
pub async fn generate_tournament(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: Option<web::Json<GenerateTournamentRequest>>,
) -> Result<HttpResponse, AppError> {
    let request = request.map(web::Json::into_inner).unwrap_or_default();
    request.validate()?;

    log::info!(
        "[{}] generating tournament (custom description: {})",
        get_request_id(&req).unwrap_or_default(),
        request.description.is_some()
    );

    let tournament = state
        .tournament_service
        .generate_tournament(request.description.as_deref())
        .await;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        tournament,
        "Tournament generated successfully",
    )))
}

#[post("/api/tournaments/template")]
pub async fn web_design_tournament() -> HttpResponse {
    let tournament = web_design_template(&mut rand::thread_rng(), Local::now().naive_local());

    HttpResponse::Ok().json(ApiResponse::new(
        tournament,
        "Web design tournament generated",
    ))
}

#[post("/api/tournaments/parse")]
pub async fn parse_tournament_completion(
    request: web::Json<ParseCompletionRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(
        parse_tournament(&request.completion),
        "Completion parsed",
    )))
}

#[post("/api/tournaments/review")]
pub async fn review_tournament(
    state: web::Data<AppState>,
    request: web::Json<ReviewTournamentRequest>,
) -> Result<HttpResponse, AppError> {
    let tournament = state
        .tournament_service
        .review_tournament(request.into_inner())?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(tournament, "Tournament is ready to save")))
}
