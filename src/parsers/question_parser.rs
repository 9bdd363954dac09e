//! Turns a multi-question completion into ordered [`QuestionRecord`]s.
//!
//! The model is asked to answer in blocks of the form
//!
//! ```text
//! Question 1: What is the capital of France?
//! Options: A: Paris, B: London, C: Rome, D: Berlin
//! Answer: A
//! Reason: Paris has been the capital since 987.
//! ```
//!
//! Parsing is a single forward pass over trimmed, non-blank lines. Lines that
//! match none of the four prefixes are dropped, so a question body wrapped
//! over several lines keeps only its first line.

use std::collections::BTreeMap;

use crate::models::domain::QuestionRecord;

const QUESTION_PREFIX: &str = "Question";
const OPTIONS_PREFIX: &str = "Options:";
const ANSWER_PREFIX: &str = "Answer:";
const REASON_PREFIX: &str = "Reason:";

pub fn parse_question_blocks(text: &str) -> Vec<QuestionRecord> {
    let mut questions = Vec::new();
    let mut current: Option<QuestionRecord> = None;

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if line.starts_with(QUESTION_PREFIX) {
            if let Some(finished) = current.take() {
                questions.push(finished);
            }
            let question_text = line
                .split_once(':')
                .map(|(_, rest)| rest.trim())
                .unwrap_or_default();
            current = Some(QuestionRecord::new(question_text));
        } else if let Some(rest) = line.strip_prefix(OPTIONS_PREFIX) {
            if let Some(question) = current.as_mut() {
                question.options = parse_options(rest);
            }
        } else if let Some(rest) = line.strip_prefix(ANSWER_PREFIX) {
            if let Some(question) = current.as_mut() {
                question.answer = Some(rest.trim().to_string());
            }
        } else if let Some(rest) = line.strip_prefix(REASON_PREFIX) {
            if let Some(question) = current.as_mut() {
                question.reason = Some(rest.trim().to_string());
            }
        }
    }

    if let Some(finished) = current {
        questions.push(finished);
    }

    log::debug!("parsed {} question blocks", questions.len());
    questions
}

/// `A: Paris, B: London` -> {A: Paris, B: London}. Last duplicate label wins;
/// tokens without a colon are dropped.
fn parse_options(list: &str) -> BTreeMap<String, String> {
    list.split(',')
        .map(str::trim)
        .filter_map(|token| token.split_once(':'))
        .map(|(label, value)| (label.trim().to_string(), value.trim().to_string()))
        .collect()
}
