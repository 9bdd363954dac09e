use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::models::domain::tournament::{schedule_from, DEFAULT_JUDGE_ROLE};
use crate::models::domain::{Judge, TournamentRecord};
use crate::parsers::tournament_parser::TournamentDraft;

/// Team size used when a present value holds no usable number.
pub const FALLBACK_TEAM_SIZE: u32 = 2;

static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("DIGIT_RUN is a valid regex pattern"));

/// Fills every missing or empty draft field from the default record and
/// coerces the loosely typed values into a [`TournamentRecord`].
///
/// `date_time` and `deadline` are always rescheduled from `now`; whatever the
/// model wrote for them is discarded.
pub fn normalize_tournament(draft: TournamentDraft, now: NaiveDateTime) -> TournamentRecord {
    let defaults = TournamentRecord::default_at(now);
    let mut defaulted: Vec<&'static str> = Vec::new();

    if !draft.unknown.is_empty() {
        let keys: Vec<&str> = draft.unknown.keys().map(String::as_str).collect();
        log::debug!("ignoring unrecognised tournament keys: {:?}", keys);
    }

    let mut fill_text = |value: Option<Value>, default: String, name: &'static str| {
        value.as_ref().and_then(value_to_text).unwrap_or_else(|| {
            defaulted.push(name);
            default
        })
    };

    let title = fill_text(draft.title, defaults.title, "title");
    let description = fill_text(draft.description, defaults.description, "description");
    let location = fill_text(draft.location, defaults.location, "location");
    let eligibility = fill_text(draft.eligibility, defaults.eligibility, "eligibility");
    let minimum_rank = fill_text(draft.minimum_rank, defaults.minimum_rank, "minimum_rank");
    let rules = fill_text(draft.rules, defaults.rules, "rules");
    let judging_criteria = fill_text(
        draft.judging_criteria,
        defaults.judging_criteria,
        "judging_criteria",
    );
    let project_submission = fill_text(
        draft.project_submission,
        defaults.project_submission,
        "project_submission",
    );

    let team_size = match draft.team_size.filter(is_truthy) {
        Some(value) => normalize_team_size(&value),
        None => {
            defaulted.push("team_size");
            defaults.team_size
        }
    };

    let judges = match draft.judges.filter(is_truthy) {
        Some(value) => {
            let judges = normalize_judges(&value);
            if judges.is_empty() {
                defaulted.push("judges");
                defaults.judges
            } else {
                judges
            }
        }
        None => {
            defaulted.push("judges");
            defaults.judges
        }
    };

    if !defaulted.is_empty() {
        log::debug!("tournament fields filled from defaults: {:?}", defaulted);
    }

    let (date_time, deadline) = schedule_from(now);

    TournamentRecord {
        title,
        description,
        date_time,
        location,
        eligibility,
        minimum_rank,
        team_size,
        deadline,
        rules,
        judging_criteria,
        project_submission,
        judges,
    }
}

/// Missing-equivalent values: null, false, zero, blank text, empty containers.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Renders a JSON value as display text; `None` when it carries nothing.
fn value_to_text(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }

    let text = match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .filter_map(value_to_text)
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Object(map) => map
            .iter()
            .filter_map(|(key, value)| value_to_text(value).map(|text| format!("{}: {}", key, text)))
            .collect::<Vec<_>>()
            .join("\n"),
        other => other.to_string(),
    };

    (!text.trim().is_empty()).then_some(text)
}

/// Integer as-is, then a whole-string parse, then the first digit run.
pub fn normalize_team_size(value: &Value) -> u32 {
    let recovered = match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .or_else(|| first_number(&n.to_string())),
        Value::Bool(true) => Some(1),
        Value::String(s) => s.trim().parse::<u32>().ok().or_else(|| first_number(s)),
        other => first_number(&other.to_string()),
    };

    match recovered {
        Some(size) if size > 0 => size,
        _ => {
            log::debug!(
                "team size {} has no positive number, using {}",
                value,
                FALLBACK_TEAM_SIZE
            );
            FALLBACK_TEAM_SIZE
        }
    }
}

fn first_number(text: &str) -> Option<u32> {
    let digits = DIGIT_RUN.find(text)?.as_str();
    match digits.parse() {
        Ok(number) => Some(number),
        Err(err) => {
            log::debug!("digit run {} is not a team size: {}", digits, err);
            None
        }
    }
}

/// Accepts a `Name: Role` line list or a list of judge objects/strings.
/// Names are kept even when empty; only blank lines and other item shapes
/// produce no judge.
pub fn normalize_judges(value: &Value) -> Vec<Judge> {
    match value {
        Value::String(text) => parse_judge_lines(text),
        Value::Array(items) => items.iter().filter_map(judge_from_value).collect(),
        Value::Object(_) => judge_from_value(value).into_iter().collect(),
        _ => Vec::new(),
    }
}

pub fn parse_judge_lines(text: &str) -> Vec<Judge> {
    text.lines().filter_map(parse_judge_line).collect()
}

fn parse_judge_line(line: &str) -> Option<Judge> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (name, role) = match line.split_once(':') {
        Some((name, role)) => (name.trim(), role.trim()),
        None => (line, ""),
    };
    Some(make_judge(name, role))
}

fn judge_from_value(value: &Value) -> Option<Judge> {
    match value {
        Value::String(line) => parse_judge_line(line),
        Value::Object(map) => {
            let name = map.get("name").and_then(value_to_text).unwrap_or_default();
            let role = map.get("role").and_then(value_to_text).unwrap_or_default();
            Some(make_judge(name.trim(), role.trim()))
        }
        _ => None,
    }
}

fn make_judge(name: &str, role: &str) -> Judge {
    let role = if role.is_empty() { DEFAULT_JUDGE_ROLE } else { role };
    Judge::new(name, role)
}
