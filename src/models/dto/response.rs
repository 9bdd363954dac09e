use serde::Serialize;

use crate::models::domain::{EditableQuestion, QuestionRecord};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }
}

/// Parsed questions alongside their editing-form shape.
#[derive(Debug, Serialize)]
pub struct QuestionSetDto {
    pub question_count: usize,
    pub questions: Vec<QuestionRecord>,
    pub editable: Vec<EditableQuestion>,
}

impl From<Vec<QuestionRecord>> for QuestionSetDto {
    fn from(questions: Vec<QuestionRecord>) -> Self {
        let editable = questions
            .iter()
            .cloned()
            .map(QuestionRecord::into_editable)
            .collect();

        QuestionSetDto {
            question_count: questions.len(),
            questions,
            editable,
        }
    }
}

pub type QuestionSetResponse = ApiResponse<QuestionSetDto>;
