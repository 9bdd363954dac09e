pub mod model_service;
pub mod question_service;
pub mod tournament_service;
