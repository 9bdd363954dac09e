pub mod health_handler;
pub mod quiz_handler;
pub mod tournament_handler;

use actix_web::web;

pub use health_handler::health_check;
pub use quiz_handler::{generate_challenge, generate_quiz, parse_questions};
pub use tournament_handler::{
    generate_tournament, parse_tournament_completion, review_tournament, web_design_tournament,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(generate_quiz)
        .service(generate_challenge)
        .service(parse_questions)
        .service(generate_tournament)
        .service(web_design_tournament)
        .service(parse_tournament_completion)
        .service(review_tournament);
}
