use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use once_cell::sync::Lazy;
use rand::{seq::SliceRandom, Rng};
use validator::Validate;

use crate::{
    constants::tournament_prompt::{
        CAT_COMPANIES, DEFAULT_TOURNAMENT_DESCRIPTION, TOURNAMENT_GENERATION_PROMPT,
        TOURNAMENT_SYSTEM_PROMPT,
    },
    errors::AppResult,
    models::{
        domain::{
            tournament::schedule_from, Judge, MinimumRank, TournamentRecord,
        },
        dto::request::ReviewTournamentRequest,
    },
    parsers::parse_tournament_at,
    services::model_service::{CompletionClient, CompletionRequest},
};

static TOURNAMENT_SCHEMA: Lazy<String> = Lazy::new(|| {
    serde_json::to_string_pretty(&schemars::schema_for!(TournamentRecord)).unwrap_or_default()
});

pub struct TournamentService {
    client: Arc<dyn CompletionClient>,
    max_tokens: u32,
    temperature: f32,
}

impl TournamentService {
    pub fn new(client: Arc<dyn CompletionClient>, max_tokens: u32, temperature: f32) -> Self {
        Self {
            client,
            max_tokens,
            temperature,
        }
    }

    pub async fn generate_tournament(&self, description: Option<&str>) -> TournamentRecord {
        self.generate_tournament_at(description, Local::now().naive_local())
            .await
    }

    /// Drafts a tournament with the model. Never fails: a failed completion
    /// yields the default record.
    pub async fn generate_tournament_at(
        &self,
        description: Option<&str>,
        now: NaiveDateTime,
    ) -> TournamentRecord {
        let description = description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(DEFAULT_TOURNAMENT_DESCRIPTION);

        let request = CompletionRequest {
            system_prompt: TOURNAMENT_SYSTEM_PROMPT.to_string(),
            user_prompt: tournament_prompt(description),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        match self.client.complete(request).await {
            Ok(completion) => {
                log::info!(
                    "parsing tournament completion ({} chars)",
                    completion.len()
                );
                parse_tournament_at(&completion, now)
            }
            Err(err) => {
                log::warn!("tournament generation failed, using default: {}", err);
                TournamentRecord::default_at(now)
            }
        }
    }

    /// Checks a lecturer-edited tournament the way the editing form does.
    pub fn review_tournament(&self, request: ReviewTournamentRequest) -> AppResult<TournamentRecord> {
        request.validate()?;
        Ok(request.into())
    }
}

pub fn tournament_prompt(description: &str) -> String {
    TOURNAMENT_GENERATION_PROMPT
        .replace("{schema}", &TOURNAMENT_SCHEMA)
        .replace("{description}", description)
}

/// The non-AI web design tournament for a randomly picked cat company.
pub fn web_design_template<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime) -> TournamentRecord {
    let company = CAT_COMPANIES
        .choose(rng)
        .copied()
        .unwrap_or(CAT_COMPANIES[0]);
    let (date_time, deadline) = schedule_from(now);

    TournamentRecord {
        title: format!("{} Website Redesign Challenge", company),
        description: format!("Design a modern, user-friendly website for {}, a fictional cat-focused company looking to improve their online presence. The company specializes in premium cat products and needs a website that appeals to cat owners and showcases their unique brand identity.", company),
        date_time,
        location: "Virtual event + University Design Lab".to_string(),
        eligibility: "Open to all university students studying web design, computer science, graphic design, or related fields.".to_string(),
        minimum_rank: MinimumRank::Bronze.to_string(),
        team_size: 2,
        deadline,
        rules: format!("1. Create a complete responsive website for {}.\n2. All code and design assets must be original or properly licensed.\n3. Website must include at least 5 main pages.\n4. Designs must be optimized for both desktop and mobile devices.\n5. Teams must use modern web technologies and follow best practices.", company),
        judging_criteria: "1. Visual Design (30%): Brand alignment, aesthetics, and visual appeal.\n2. User Experience (25%): Intuitive navigation and overall usability.\n3. Technical Execution (20%): Code quality and performance.\n4. Creativity and Innovation (15%): Original ideas and unique approaches.\n5. Presentation (10%): How well the solution is presented and explained.".to_string(),
        project_submission: "Submit a GitHub repository link containing all code, a live demo URL, and a presentation PDF explaining your design choices.".to_string(),
        judges: vec![
            Judge::new("Alex Morgan", "Senior Web Designer"),
            Judge::new("Dr. Priya Sharma", "Professor of Digital Media"),
            Judge::new("Jason Chen", "UX Research Lead"),
            Judge::new("Olivia Thompson", "Frontend Developer"),
        ],
    }
}
