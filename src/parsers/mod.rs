pub mod question_parser;
pub mod tournament_normalizer;
pub mod tournament_parser;

pub use question_parser::parse_question_blocks;
pub use tournament_normalizer::normalize_tournament;
pub use tournament_parser::{parse_tournament, parse_tournament_at, TournamentDraft};
