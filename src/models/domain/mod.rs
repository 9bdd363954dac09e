pub mod question;
pub mod tournament;
pub use question::{EditableQuestion, PrerequisiteQuestion, PrerequisiteSet, QuestionRecord};
pub use tournament::{Judge, MinimumRank, TournamentRecord};
