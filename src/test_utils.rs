#[cfg(test)]
pub mod fixtures {
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::models::domain::{
        tournament::schedule_from, Judge, PrerequisiteQuestion, PrerequisiteSet,
        TournamentRecord,
    };

    /// Three well-formed question blocks with the usual model chatter around them.
    pub const QUIZ_COMPLETION: &str = "Sure! Here are your questions.

Question 1: What is the capital of France?
Options: A: Paris, B: London, C: Rome, D: Berlin
Answer: A
Reason: Paris is the capital of France.

Question 2: Which planet is known as the Red Planet?
Options: A: Venus, B: Mars, C: Jupiter, D: Saturn
Answer: B
Reason: Iron oxide gives Mars its red colour.

Question 3: What is H2O commonly called?
Options: A: Salt, B: Oxygen, C: Water, D: Hydrogen
Answer: C
Reason: H2O is the chemical formula for water.
";

    pub const TOURNAMENT_HEADED_COMPLETION: &str = "Here is the tournament you asked for.

Title: Whisker Web Sprint
Description: Redesign the Whisker Web Solutions storefront.
Date and Time: 2025-05-01 10:00
Location: Online
Minimum Rank: Silver
Team Size: 1-4 members per team
Submission Deadline: 2025-04-25
Rules: 1. Original work only.
2. Responsive layouts required.
Judging Criteria: Design and usability.
Project Submission: Repository link and live URL.
Judges:
Alice Moreau: Lead Designer
Bob Kim
";

    pub const TOURNAMENT_JSON_COMPLETION: &str = r#"```json
{
  "title": "Paws & Pixels Showdown",
  "description": "Rebuild the Paws & Pixels site.",
  "date_time": "2025-06-01 09:00:00",
  "location": "Virtual + Room 12",
  "eligibility": "Enrolled students",
  "minimum_rank": "Gold",
  "team_size": 3,
  "deadline": "2025-05-25 23:59:59",
  "rules": "Be original.",
  "judging_criteria": "Design, usability, creativity.",
  "project_submission": "Repository and demo link.",
  "judges": [
    {"name": "Ivy Lane", "role": "Design Lead"},
    {"name": "Omar Haddad", "role": "Accessibility Expert"}
  ]
}
```"#;

    pub fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .expect("valid fixed timestamp")
    }

    /// A complete, valid tournament unlike the default record.
    pub fn sample_tournament(now: NaiveDateTime) -> TournamentRecord {
        let (date_time, deadline) = schedule_from(now);
        TournamentRecord {
            title: "Feline Frameworks Cup".to_string(),
            description: "Build a storefront for Feline Frameworks.".to_string(),
            date_time,
            location: "Design Lab 2".to_string(),
            eligibility: "Second-year students and above".to_string(),
            minimum_rank: "Gold".to_string(),
            team_size: 4,
            deadline,
            rules: "1. No templates.\n2. Ship on time.".to_string(),
            judging_criteria: "Polish and accessibility".to_string(),
            project_submission: "Zip archive plus hosted URL".to_string(),
            judges: vec![
                Judge::new("Nadia Costa", "Chair"),
                Judge::new("Leo Park", "Industry Mentor"),
            ],
        }
    }

    pub fn prerequisite_sets() -> Vec<PrerequisiteSet> {
        let question = |number: u32, text: &str, options: &[(&str, &str)], answer: &str| {
            PrerequisiteQuestion {
                question_number: number,
                question_text: text.to_string(),
                options: options
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                correct_answer: answer.to_string(),
                reason: format!("{} is correct.", answer),
            }
        };

        vec![
            PrerequisiteSet {
                set_number: 1,
                questions: vec![question(1, "What is 2 + 2?", &[("A", "3"), ("B", "4")], "B")],
            },
            PrerequisiteSet {
                set_number: 2,
                questions: vec![question(
                    1,
                    "Boiling point of water at sea level?",
                    &[("A", "100C"), ("B", "90C")],
                    "A",
                )],
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::parsers::{parse_question_blocks, parse_tournament_at};

    #[test]
    fn test_quiz_fixture_has_three_blocks() {
        assert_eq!(parse_question_blocks(QUIZ_COMPLETION).len(), 3);
    }

    #[test]
    fn test_json_fixture_is_read_as_json() {
        let record = parse_tournament_at(TOURNAMENT_JSON_COMPLETION, fixed_now());

        assert_eq!(record.title, "Paws & Pixels Showdown");
        assert_eq!(record.judges.len(), 2);
    }

    #[test]
    fn test_prerequisite_fixture_has_two_sets() {
        assert_eq!(prerequisite_sets().len(), 2);
    }
}
