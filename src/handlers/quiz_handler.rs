use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{GenerateChallengeRequest, GenerateQuizRequest, ParseCompletionRequest},
        response::{QuestionSetDto, QuestionSetResponse},
    },
    parsers::parse_question_blocks,
};

#[post("/api/quizzes/generate")]
pub async fn generate_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    log::info!(
        "[{}] generating quiz from {} chars of slide text",
        get_request_id(&req).unwrap_or_default(),
        request.slide_text.len()
    );

    let questions = state
        .question_service
        .generate_quiz(&request.slide_text)
        .await?;

    Ok(HttpResponse::Ok().json(QuestionSetResponse::new(
        QuestionSetDto::from(questions),
        "Questions generated successfully",
    )))
}

#[post("/api/challenges/generate")]
pub async fn generate_challenge(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateChallengeRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let set_numbers: Vec<u32> = request
        .prerequisite_sets
        .iter()
        .map(|set| set.set_number)
        .collect();
    log::info!(
        "[{}] generating challenge from prerequisite sets {:?}",
        get_request_id(&req).unwrap_or_default(),
        set_numbers
    );

    let questions = state
        .question_service
        .generate_challenge(&request.prerequisite_sets)
        .await?;

    Ok(HttpResponse::Ok().json(QuestionSetResponse::new(
        QuestionSetDto::from(questions),
        "Challenge questions generated successfully",
    )))
}

#[post("/api/questions/parse")]
pub async fn parse_questions(
    request: web::Json<ParseCompletionRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let questions = parse_question_blocks(&request.completion);

    Ok(HttpResponse::Ok().json(QuestionSetResponse::new(
        QuestionSetDto::from(questions),
        "Completion parsed",
    )))
}
