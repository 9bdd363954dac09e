use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Labels offered by the lecturer editing form.
pub const EDITABLE_OPTION_LABELS: [&str; 4] = ["A", "B", "C", "D"];

/// One multiple-choice question recovered from a model completion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionRecord {
    pub question_text: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl QuestionRecord {
    pub fn new(question_text: impl Into<String>) -> Self {
        Self {
            question_text: question_text.into(),
            ..Self::default()
        }
    }

    /// Options as the JSON object text stored alongside a saved question.
    pub fn options_json(&self) -> String {
        serde_json::to_string(&self.options).unwrap_or_else(|_| "{}".to_string())
    }

    /// Shapes the record for the editing form: exactly the labels A to D and
    /// an answer drawn from them.
    pub fn into_editable(self) -> EditableQuestion {
        let options = EDITABLE_OPTION_LABELS
            .iter()
            .map(|label| {
                let text = self.options.get(*label).cloned().unwrap_or_default();
                (label.to_string(), text)
            })
            .collect();

        let answer = self
            .answer
            .filter(|answer| EDITABLE_OPTION_LABELS.contains(&answer.as_str()))
            .unwrap_or_else(|| EDITABLE_OPTION_LABELS[0].to_string());

        EditableQuestion {
            question_text: self.question_text,
            options,
            answer,
            reason: self.reason.unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct EditableQuestion {
    pub question_text: String,
    pub options: BTreeMap<String, String>,
    pub answer: String,
    pub reason: String,
}

/// A saved quiz question fed back as context for a challenge set.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PrerequisiteQuestion {
    pub question_number: u32,
    pub question_text: String,
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    pub correct_answer: String,
    #[serde(default)]
    pub reason: String,
}

impl PrerequisiteQuestion {
    pub fn context_block(&self) -> String {
        let mut block = format!("Question: {}\n", self.question_text);
        for (label, text) in &self.options {
            block.push_str(&format!("{}: {}\n", label, text));
        }
        block.push_str(&format!("Answer: {}\n", self.correct_answer));
        block.push_str(&format!("Reason: {}\n\n", self.reason));
        block
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PrerequisiteSet {
    pub set_number: u32,
    pub questions: Vec<PrerequisiteQuestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(options: &[(&str, &str)], answer: Option<&str>) -> QuestionRecord {
        QuestionRecord {
            question_text: "Capital of France?".to_string(),
            options: options
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            answer: answer.map(str::to_string),
            reason: None,
        }
    }

    #[test]
    fn options_json_is_an_object_keyed_by_label() {
        let record = record_with(&[("A", "Paris"), ("B", "London")], Some("A"));

        assert_eq!(record.options_json(), r#"{"A":"Paris","B":"London"}"#);
    }

    #[test]
    fn into_editable_fills_missing_labels_and_keeps_valid_answer() {
        let editable = record_with(&[("A", "Paris"), ("C", "Rome")], Some("C")).into_editable();

        assert_eq!(editable.options.len(), 4);
        assert_eq!(editable.options["B"], "");
        assert_eq!(editable.options["C"], "Rome");
        assert_eq!(editable.answer, "C");
        assert_eq!(editable.reason, "");
    }

    #[test]
    fn into_editable_replaces_unknown_answer_with_first_label() {
        let editable = record_with(&[("A", "Paris")], Some("Paris")).into_editable();
        assert_eq!(editable.answer, "A");

        let editable = record_with(&[], None).into_editable();
        assert_eq!(editable.answer, "A");
    }

    #[test]
    fn into_editable_drops_labels_outside_the_form() {
        let editable = record_with(&[("A", "1"), ("E", "5")], Some("A")).into_editable();

        assert!(!editable.options.contains_key("E"));
    }

    #[test]
    fn missing_optional_fields_are_not_serialized() {
        let json = serde_json::to_value(QuestionRecord::new("Bare")).expect("record serializes");

        assert_eq!(json, serde_json::json!({ "question_text": "Bare" }));
    }

    #[test]
    fn prerequisite_context_block_lists_options_answer_and_reason() {
        let question = PrerequisiteQuestion {
            question_number: 1,
            question_text: "2 + 2?".to_string(),
            options: [("A", "3"), ("B", "4")]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            correct_answer: "B".to_string(),
            reason: "Arithmetic".to_string(),
        };

        assert_eq!(
            question.context_block(),
            "Question: 2 + 2?\nA: 3\nB: 4\nAnswer: B\nReason: Arithmetic\n\n"
        );
    }
}
