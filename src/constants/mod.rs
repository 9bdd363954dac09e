pub mod question_prompt;
pub mod tournament_prompt;
