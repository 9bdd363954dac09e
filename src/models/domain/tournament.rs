use std::{fmt, str::FromStr};

use chrono::{Duration, NaiveDateTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOURNAMENT_TITLE: &str = "Purr-fect Web Design Challenge";
pub const DEFAULT_JUDGE_ROLE: &str = "Judge";

/// Days from generation until the tournament starts.
pub const TOURNAMENT_START_OFFSET_DAYS: i64 = 30;
/// Days from generation until submissions close.
pub const SUBMISSION_DEADLINE_OFFSET_DAYS: i64 = 25;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Judge {
    pub name: String,
    pub role: String,
}

impl Judge {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct TournamentRecord {
    pub title: String,
    pub description: String,
    #[serde(with = "timestamp_format")]
    #[schemars(with = "String")]
    pub date_time: NaiveDateTime,
    pub location: String,
    pub eligibility: String,
    pub minimum_rank: String,
    pub team_size: u32,
    #[serde(with = "timestamp_format")]
    #[schemars(with = "String")]
    pub deadline: NaiveDateTime,
    pub rules: String,
    pub judging_criteria: String,
    pub project_submission: String,
    pub judges: Vec<Judge>,
}

impl TournamentRecord {
    /// The fixed fallback announcement, dated relative to `now`.
    pub fn default_at(now: NaiveDateTime) -> Self {
        let (date_time, deadline) = schedule_from(now);

        TournamentRecord {
            title: DEFAULT_TOURNAMENT_TITLE.to_string(),
            description: "Join the Purr-fect Web Design Challenge and showcase your creativity in redesigning the website for Purr-fect Designs, a leading cat product company. This competition challenges university students to create an innovative, user-friendly website that captures the essence of the feline-focused brand while implementing modern web design principles.".to_string(),
            date_time,
            location: "Virtual event + University Main Auditorium".to_string(),
            eligibility: "Open to all university students with an interest in web design and development. Participants must be currently enrolled in an undergraduate or graduate program.".to_string(),
            minimum_rank: MinimumRank::Bronze.to_string(),
            team_size: 3,
            deadline,
            rules: "1. All submissions must be original work.\n2. Designs must be responsive and work on mobile devices.\n3. Submissions must include at least 5 pages (home, about, products, contact, and blog).\n4. Teams must use HTML, CSS, and JavaScript for their implementation.\n5. Use of frameworks like React, Vue, or Angular is permitted.\n6. Submissions must be accessible and follow WCAG guidelines.\n7. All assets used must be original or properly licensed.".to_string(),
            judging_criteria: "1. Visual Design (30%): Aesthetics, color scheme, typography, and overall visual appeal.\n2. User Experience (25%): Navigation, information architecture, and ease of use.\n3. Technical Implementation (20%): Code quality, performance, and proper implementation.\n4. Creativity (15%): Originality and innovative approach to the brand.\n5. Accessibility (10%): Compliance with accessibility standards.".to_string(),
            project_submission: "Teams must submit:\n1. A GitHub repository with all source code.\n2. A working URL where the website is deployed.\n3. A brief (500 words max) design document explaining the concept and implementation.\n4. A 3-minute video walkthrough of the website highlighting key features.".to_string(),
            judges: default_judges(),
        }
    }

    pub fn minimum_rank_level(&self) -> Option<MinimumRank> {
        self.minimum_rank.parse().ok()
    }
}

pub fn default_judges() -> Vec<Judge> {
    vec![
        Judge::new("Professor Emma Chen", "Department of Design Head"),
        Judge::new("Michael Rodriguez", "Senior UX Designer at TechCorp"),
        Judge::new("Sarah Patel", "Frontend Development Expert"),
        Judge::new("Dr. James Wilson", "Web Accessibility Specialist"),
    ]
}

/// Start date and submission deadline for a tournament generated at `now`.
pub fn schedule_from(now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    (
        now + Duration::days(TOURNAMENT_START_OFFSET_DAYS),
        now + Duration::days(SUBMISSION_DEADLINE_OFFSET_DAYS),
    )
}

/// Ordered rank ladder a participant must reach to enter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MinimumRank {
    Unranked,
    Bronze,
    Silver,
    Gold,
    Master,
    GrandMaster,
    OneAboveAll,
}

impl MinimumRank {
    pub const ALL: [MinimumRank; 7] = [
        MinimumRank::Unranked,
        MinimumRank::Bronze,
        MinimumRank::Silver,
        MinimumRank::Gold,
        MinimumRank::Master,
        MinimumRank::GrandMaster,
        MinimumRank::OneAboveAll,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MinimumRank::Unranked => "Unranked",
            MinimumRank::Bronze => "Bronze",
            MinimumRank::Silver => "Silver",
            MinimumRank::Gold => "Gold",
            MinimumRank::Master => "Master",
            MinimumRank::GrandMaster => "Grand Master",
            MinimumRank::OneAboveAll => "One Above All",
        }
    }
}

impl fmt::Display for MinimumRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MinimumRank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MinimumRank::ALL
            .into_iter()
            .find(|rank| rank.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown rank '{}'", wanted))
    }
}

pub mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(raw.trim(), FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .expect("valid fixed timestamp")
    }

    #[test]
    fn default_record_is_dated_relative_to_now() {
        let record = TournamentRecord::default_at(fixed_now());

        assert_eq!(record.title, DEFAULT_TOURNAMENT_TITLE);
        assert_eq!(record.team_size, 3);
        assert_eq!(record.judges.len(), 4);
        assert_eq!(record.date_time.to_string(), "2025-03-31 09:30:00");
        assert_eq!(record.deadline.to_string(), "2025-03-26 09:30:00");
    }

    #[test]
    fn timestamps_serialize_in_fixed_format() {
        let record = TournamentRecord::default_at(fixed_now());
        let json = serde_json::to_value(&record).expect("record serializes");

        assert_eq!(json["date_time"], "2025-03-31 09:30:00");
        assert_eq!(json["deadline"], "2025-03-26 09:30:00");

        let back: TournamentRecord = serde_json::from_value(json).expect("record deserializes");
        assert_eq!(back, record);
    }

    #[test]
    fn timestamp_in_other_format_is_rejected() {
        let mut json = serde_json::to_value(TournamentRecord::default_at(fixed_now()))
            .expect("record serializes");
        json["deadline"] = serde_json::json!("next Friday");

        assert!(serde_json::from_value::<TournamentRecord>(json).is_err());
    }

    #[test]
    fn minimum_rank_parses_case_insensitively() {
        assert_eq!("grand master".parse::<MinimumRank>(), Ok(MinimumRank::GrandMaster));
        assert_eq!(" Bronze ".parse::<MinimumRank>(), Ok(MinimumRank::Bronze));
        assert!("Diamond".parse::<MinimumRank>().is_err());
    }

    #[test]
    fn minimum_rank_ladder_is_ordered() {
        assert!(MinimumRank::Unranked < MinimumRank::Bronze);
        assert!(MinimumRank::Master < MinimumRank::OneAboveAll);
        assert_eq!(MinimumRank::OneAboveAll.to_string(), "One Above All");
    }

    #[test]
    fn default_rank_is_in_vocabulary() {
        let record = TournamentRecord::default_at(fixed_now());
        assert_eq!(record.minimum_rank_level(), Some(MinimumRank::Bronze));
    }
}
