use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::tournament::timestamp_format;
use crate::models::domain::{Judge, MinimumRank, PrerequisiteSet, TournamentRecord};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, message = "Slide text must not be empty"))]
    pub slide_text: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateChallengeRequest {
    #[validate(length(min = 2, message = "Select at least 2 prerequisite quiz sets"))]
    pub prerequisite_sets: Vec<PrerequisiteSet>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GenerateTournamentRequest {
    #[serde(default)]
    #[validate(length(max = 4000))]
    pub description: Option<String>,
}

/// A completion pasted back for re-parsing without calling the model.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ParseCompletionRequest {
    #[validate(length(max = 100000))]
    pub completion: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JudgeRequest {
    pub name: String,
    #[serde(default)]
    pub role: String,
}

/// Tournament as submitted from the lecturer editing form.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_schedule"))]
pub struct ReviewTournamentRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,
    #[serde(with = "timestamp_format")]
    pub date_time: NaiveDateTime,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub eligibility: String,
    #[validate(custom(function = "validate_minimum_rank"))]
    pub minimum_rank: String,
    #[validate(range(min = 1, max = 5, message = "Team size must be between 1 and 5"))]
    pub team_size: u32,
    #[serde(with = "timestamp_format")]
    pub deadline: NaiveDateTime,
    #[serde(default)]
    pub rules: String,
    #[serde(default)]
    pub judging_criteria: String,
    #[serde(default)]
    pub project_submission: String,
    #[validate(custom(function = "validate_judges"))]
    pub judges: Vec<JudgeRequest>,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn validate_minimum_rank(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<MinimumRank>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("unknown_rank"))
}

fn validate_judges(judges: &[JudgeRequest]) -> Result<(), ValidationError> {
    if judges.iter().all(|judge| judge.name.trim().is_empty()) {
        return Err(ValidationError::new("at_least_one_judge"));
    }
    Ok(())
}

fn validate_schedule(request: &ReviewTournamentRequest) -> Result<(), ValidationError> {
    if request.deadline > request.date_time {
        return Err(ValidationError::new("deadline_after_start"));
    }
    Ok(())
}

impl From<ReviewTournamentRequest> for TournamentRecord {
    fn from(request: ReviewTournamentRequest) -> Self {
        // Unnamed judge rows are empty form slots.
        let judges = request
            .judges
            .into_iter()
            .filter(|judge| !judge.name.trim().is_empty())
            .map(|judge| Judge::new(judge.name.trim(), judge.role.trim()))
            .collect();

        let minimum_rank = request
            .minimum_rank
            .parse::<MinimumRank>()
            .map(|rank| rank.to_string())
            .unwrap_or(request.minimum_rank);

        TournamentRecord {
            title: request.title.trim().to_string(),
            description: request.description.trim().to_string(),
            date_time: request.date_time,
            location: request.location,
            eligibility: request.eligibility,
            minimum_rank,
            team_size: request.team_size,
            deadline: request.deadline,
            rules: request.rules,
            judging_criteria: request.judging_criteria,
            project_submission: request.project_submission,
            judges,
        }
    }
}
