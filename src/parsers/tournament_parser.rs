//! Recovers tournament fields from a model completion.
//!
//! The completion is first searched for a JSON object (the prompt asks for
//! one). When none decodes, the text is read as `Header: value` sections
//! where a section runs until the next recognised header.

use chrono::{Local, NaiveDateTime};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::models::domain::TournamentRecord;
use crate::parsers::tournament_normalizer::normalize_tournament;

/// Loosely typed tournament fields exactly as the model produced them.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TournamentDraft {
    pub title: Option<Value>,
    pub description: Option<Value>,
    pub date_time: Option<Value>,
    pub location: Option<Value>,
    pub eligibility: Option<Value>,
    pub minimum_rank: Option<Value>,
    pub team_size: Option<Value>,
    pub deadline: Option<Value>,
    pub rules: Option<Value>,
    pub judging_criteria: Option<Value>,
    pub project_submission: Option<Value>,
    pub judges: Option<Value>,
    #[serde(flatten)]
    pub unknown: Map<String, Value>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TournamentField {
    Title,
    Description,
    DateTime,
    Location,
    Eligibility,
    MinimumRank,
    TeamSize,
    Deadline,
    Rules,
    JudgingCriteria,
    ProjectSubmission,
    Judges,
}

/// Header keywords per field, checked in this order.
const FIELD_HEADERS: [(TournamentField, &[&str]); 12] = [
    (TournamentField::Title, &["title"]),
    (TournamentField::Description, &["description"]),
    (TournamentField::DateTime, &["date", "time", "date and time"]),
    (TournamentField::Location, &["location"]),
    (TournamentField::Eligibility, &["eligibility"]),
    (TournamentField::MinimumRank, &["minimum rank"]),
    (TournamentField::TeamSize, &["team size"]),
    (TournamentField::Deadline, &["deadline", "submission deadline"]),
    (TournamentField::Rules, &["rules", "tournament rules"]),
    (TournamentField::JudgingCriteria, &["judging criteria"]),
    (
        TournamentField::ProjectSubmission,
        &["project submission", "submission guidelines"],
    ),
    (TournamentField::Judges, &["judges", "list of judges"]),
];

impl TournamentField {
    /// Field whose header opens `line`, if any.
    pub fn from_header(line: &str) -> Option<Self> {
        let lowered = line.to_lowercase();
        FIELD_HEADERS.iter().find_map(|(field, keywords)| {
            keywords
                .iter()
                .any(|keyword| {
                    lowered
                        .strip_prefix(*keyword)
                        .is_some_and(|rest| rest.starts_with(':'))
                })
                .then_some(*field)
        })
    }
}

impl TournamentDraft {
    pub fn set(&mut self, field: TournamentField, value: Value) {
        let slot = match field {
            TournamentField::Title => &mut self.title,
            TournamentField::Description => &mut self.description,
            TournamentField::DateTime => &mut self.date_time,
            TournamentField::Location => &mut self.location,
            TournamentField::Eligibility => &mut self.eligibility,
            TournamentField::MinimumRank => &mut self.minimum_rank,
            TournamentField::TeamSize => &mut self.team_size,
            TournamentField::Deadline => &mut self.deadline,
            TournamentField::Rules => &mut self.rules,
            TournamentField::JudgingCriteria => &mut self.judging_criteria,
            TournamentField::ProjectSubmission => &mut self.project_submission,
            TournamentField::Judges => &mut self.judges,
        };
        *slot = Some(value);
    }
}

/// Parses a tournament completion, filling gaps from the default record.
pub fn parse_tournament(text: &str) -> TournamentRecord {
    parse_tournament_at(text, Local::now().naive_local())
}

pub fn parse_tournament_at(text: &str, now: NaiveDateTime) -> TournamentRecord {
    let draft = match parse_json_draft(text) {
        Some(draft) => {
            log::debug!("tournament completion decoded as JSON");
            draft
        }
        None => {
            log::debug!("tournament completion parsed as headed text");
            parse_tournament_fields(text)
        }
    };

    normalize_tournament(draft, now)
}

/// Slice from the first `{` to the last `}` inclusive.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Decodes through a generic [`Value`] first so a repeated key keeps its last
/// value instead of failing the whole object.
pub fn parse_json_draft(text: &str) -> Option<TournamentDraft> {
    let candidate = extract_json_object(text)?;
    let decoded = serde_json::from_str::<Value>(candidate)
        .and_then(serde_json::from_value::<TournamentDraft>);
    match decoded {
        Ok(draft) => Some(draft),
        Err(err) => {
            log::debug!("tournament JSON rejected: {}", err);
            None
        }
    }
}

/// Reads `Header: value` sections; lines after a header belong to it until
/// the next header. Text before the first header is dropped.
pub fn parse_tournament_fields(text: &str) -> TournamentDraft {
    let mut draft = TournamentDraft::default();
    let mut open: Option<(TournamentField, Vec<String>)> = None;

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match TournamentField::from_header(line) {
            Some(field) => {
                if let Some((previous, content)) = open.take() {
                    close_field(&mut draft, previous, &content);
                }
                let seed = line
                    .split_once(':')
                    .map(|(_, rest)| rest.trim())
                    .unwrap_or_default();
                open = Some((field, vec![seed.to_string()]));
            }
            None => {
                if let Some((_, content)) = open.as_mut() {
                    content.push(line.to_string());
                }
            }
        }
    }

    if let Some((field, content)) = open {
        close_field(&mut draft, field, &content);
    }

    draft
}

fn close_field(draft: &mut TournamentDraft, field: TournamentField, content: &[String]) {
    let joined = content.join("\n");
    draft.set(field, Value::String(joined.trim().to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{fixed_now, TOURNAMENT_HEADED_COMPLETION};
    use serde_json::json;

    #[test]
    fn extracts_outermost_braces() {
        let text = "Sure! Here it is:\n{\"title\": \"T\", \"judges\": [{\"name\": \"A\"}]}\nEnjoy.";

        assert_eq!(
            extract_json_object(text),
            Some("{\"title\": \"T\", \"judges\": [{\"name\": \"A\"}]}")
        );
    }

    #[test]
    fn no_braces_or_reversed_braces_yield_nothing() {
        assert_eq!(extract_json_object("Title: plain"), None);
        assert_eq!(extract_json_object("} backwards {"), None);
        assert_eq!(extract_json_object("{ unterminated"), None);
    }

    #[test]
    fn json_draft_keeps_known_fields_and_collects_unknown() {
        let draft = parse_json_draft(r#"{"title": "T", "team_size": 3, "venue": "Hall"}"#)
            .expect("valid JSON draft");

        assert_eq!(draft.title, Some(json!("T")));
        assert_eq!(draft.team_size, Some(json!(3)));
        assert_eq!(draft.description, None);
        assert_eq!(draft.unknown.get("venue"), Some(&json!("Hall")));
    }

    #[test]
    fn repeated_json_key_keeps_last_value() {
        let draft = parse_json_draft(r#"{"title": "A", "title": "B", "location": "Lab"}"#)
            .expect("repeated key still decodes");

        assert_eq!(draft.title, Some(json!("B")));
        assert_eq!(draft.location, Some(json!("Lab")));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert_eq!(parse_json_draft("{ title: T, }"), None);
        assert_eq!(parse_json_draft("{\"title\": \"T\""), None);
    }

    #[test]
    fn header_matching_is_case_insensitive_and_ordered() {
        assert_eq!(TournamentField::from_header("TITLE: x"), Some(TournamentField::Title));
        assert_eq!(
            TournamentField::from_header("Date and Time: tomorrow"),
            Some(TournamentField::DateTime)
        );
        assert_eq!(
            TournamentField::from_header("Submission Deadline: soon"),
            Some(TournamentField::Deadline)
        );
        assert_eq!(
            TournamentField::from_header("Submission Guidelines: zip it"),
            Some(TournamentField::ProjectSubmission)
        );
        assert_eq!(TournamentField::from_header("Titles: no"), None);
        assert_eq!(TournamentField::from_header("Title - no colon"), None);
        assert_eq!(TournamentField::from_header("Alice: Judge"), None);
    }

    #[test]
    fn headed_text_collects_multiline_sections() {
        let draft = parse_tournament_fields(TOURNAMENT_HEADED_COMPLETION);

        assert_eq!(draft.title, Some(json!("Whisker Web Sprint")));
        assert_eq!(
            draft.rules,
            Some(json!("1. Original work only.\n2. Responsive layouts required."))
        );
        assert_eq!(draft.team_size, Some(json!("1-4 members per team")));
        assert_eq!(
            draft.judges,
            Some(json!("Alice Moreau: Lead Designer\nBob Kim"))
        );
        assert_eq!(draft.eligibility, None);
    }

    #[test]
    fn text_before_first_header_is_dropped() {
        let draft = parse_tournament_fields("Here is your tournament!\n\nTitle: Cat Clash");

        assert_eq!(draft.title, Some(json!("Cat Clash")));
        assert_eq!(draft.description, None);
    }

    #[test]
    fn repeated_header_overwrites_earlier_section() {
        let draft = parse_tournament_fields("Title: First\nTitle: Second");

        assert_eq!(draft.title, Some(json!("Second")));
    }

    #[test]
    fn header_with_empty_seed_keeps_following_lines() {
        let draft = parse_tournament_fields("Judges:\nAlice: Chair\nBob");

        assert_eq!(draft.judges, Some(json!("Alice: Chair\nBob")));
    }

    #[test]
    fn json_completion_takes_priority_over_headers() {
        let text = "Title: Ignored\n{\"title\": \"From JSON\"}";
        let record = parse_tournament_at(text, fixed_now());

        assert_eq!(record.title, "From JSON");
    }

    #[test]
    fn broken_json_falls_back_to_headed_text() {
        let text = "{ not json }\nTitle: Fallback Cup\nLocation: Room 101";
        let record = parse_tournament_at(text, fixed_now());

        assert_eq!(record.title, "Fallback Cup");
        assert_eq!(record.location, "Room 101");
    }
}
