use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Label used when the payload does not name a topic.
pub const DEFAULT_TOPIC: &str = "Topic Shuffle";

//
// ─── VALIDATION ERRORS ─────────────────────────────────────────────────────────
//

/// Named string fields of a question object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionField {
    Text,
    Translation,
    Tip,
}

impl QuestionField {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            QuestionField::Text => "text",
            QuestionField::Translation => "translation",
            QuestionField::Tip => "tip",
        }
    }
}

impl fmt::Display for QuestionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionSetError {
    #[error("Root JSON value must be an object with a \"questions\" array.")]
    NotAnObject,

    #[error("\"questions\" must be a non-empty array of question objects.")]
    MissingQuestions,

    #[error("Question at index {index} is not a valid object.")]
    QuestionNotObject { index: usize },

    #[error("Question at index {index} is missing a \"text\" string.")]
    MissingText { index: usize },

    #[error("Question \"{question}\" is missing a \"{field}\" string.")]
    MissingField {
        question: String,
        field: QuestionField,
    },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A prompt with its translation and tip, all trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    translation: String,
    tip: String,
}

impl Question {
    /// Build a question from raw strings, trimming each one.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSetError::MissingText` (index 0) for blank text and
    /// `QuestionSetError::MissingField` for a blank translation or tip.
    pub fn new(
        text: impl AsRef<str>,
        translation: impl AsRef<str>,
        tip: impl AsRef<str>,
    ) -> Result<Self, QuestionSetError> {
        let text = non_blank(Some(text.as_ref())).ok_or(QuestionSetError::MissingText { index: 0 })?;
        let translation = non_blank(Some(translation.as_ref())).ok_or_else(|| {
            QuestionSetError::MissingField {
                question: text.clone(),
                field: QuestionField::Translation,
            }
        })?;
        let tip = non_blank(Some(tip.as_ref())).ok_or_else(|| QuestionSetError::MissingField {
            question: text.clone(),
            field: QuestionField::Tip,
        })?;

        Ok(Self {
            text,
            translation,
            tip,
        })
    }

    fn from_object(index: usize, item: &Map<String, Value>) -> Result<Self, QuestionSetError> {
        let text = non_blank(string_field(item, QuestionField::Text))
            .ok_or(QuestionSetError::MissingText { index })?;

        let field = |field: QuestionField| {
            non_blank(string_field(item, field)).ok_or_else(|| QuestionSetError::MissingField {
                question: text.clone(),
                field,
            })
        };
        let translation = field(QuestionField::Translation)?;
        let tip = field(QuestionField::Tip)?;

        Ok(Self {
            text,
            translation,
            tip,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn translation(&self) -> &str {
        &self.translation
    }

    #[must_use]
    pub fn tip(&self) -> &str {
        &self.tip
    }
}

//
// ─── QUESTION SET ──────────────────────────────────────────────────────────────
//

/// Validated, immutable list of questions plus the topic label.
///
/// Always holds at least one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    topic: String,
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Build a set from already-validated questions.
    ///
    /// A blank or missing `topic` falls back to [`DEFAULT_TOPIC`].
    ///
    /// # Errors
    ///
    /// Returns `QuestionSetError::MissingQuestions` if `questions` is empty.
    pub fn new(topic: Option<&str>, questions: Vec<Question>) -> Result<Self, QuestionSetError> {
        if questions.is_empty() {
            return Err(QuestionSetError::MissingQuestions);
        }
        Ok(Self {
            topic: non_blank(topic).unwrap_or_else(|| DEFAULT_TOPIC.to_owned()),
            questions,
        })
    }

    /// Validate a parsed JSON payload.
    ///
    /// Validation is all-or-nothing: the first offending element aborts the load.
    ///
    /// # Errors
    ///
    /// Returns the `QuestionSetError` describing the first structural problem found.
    pub fn from_value(raw: &Value) -> Result<Self, QuestionSetError> {
        let root = raw.as_object().ok_or(QuestionSetError::NotAnObject)?;

        let items = root
            .get("questions")
            .and_then(Value::as_array)
            .filter(|items| !items.is_empty())
            .ok_or(QuestionSetError::MissingQuestions)?;

        let questions = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let item = item
                    .as_object()
                    .ok_or(QuestionSetError::QuestionNotObject { index })?;
                Question::from_object(index, item)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(root.get("topic").and_then(Value::as_str), questions)
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed set; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

fn string_field(item: &Map<String, Value>, field: QuestionField) -> Option<&str> {
    item.get(field.key()).and_then(Value::as_str)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_payload_is_trimmed() {
        let raw = json!({
            "topic": "  Kitchen  ",
            "questions": [
                { "text": " What do you cook? ", "translation": " Was kochst du? ", "tip": " Think dinner " }
            ]
        });

        let set = QuestionSet::from_value(&raw).unwrap();

        assert_eq!(set.topic(), "Kitchen");
        assert_eq!(set.len(), 1);
        let question = set.get(0).unwrap();
        assert_eq!(question.text(), "What do you cook?");
        assert_eq!(question.translation(), "Was kochst du?");
        assert_eq!(question.tip(), "Think dinner");
    }

    #[test]
    fn blank_or_missing_topic_uses_default() {
        let question = json!({ "text": "Q", "translation": "T", "tip": "H" });

        let missing = QuestionSet::from_value(&json!({ "questions": [question.clone()] })).unwrap();
        let blank =
            QuestionSet::from_value(&json!({ "topic": "   ", "questions": [question.clone()] }))
                .unwrap();
        let wrong_type =
            QuestionSet::from_value(&json!({ "topic": 42, "questions": [question] })).unwrap();

        assert_eq!(missing.topic(), DEFAULT_TOPIC);
        assert_eq!(blank.topic(), DEFAULT_TOPIC);
        assert_eq!(wrong_type.topic(), DEFAULT_TOPIC);
    }

    #[test]
    fn root_must_be_an_object() {
        assert_eq!(
            QuestionSet::from_value(&json!([{ "questions": [] }])).unwrap_err(),
            QuestionSetError::NotAnObject
        );
        assert_eq!(
            QuestionSet::from_value(&Value::Null).unwrap_err(),
            QuestionSetError::NotAnObject
        );
    }

    #[test]
    fn missing_or_empty_questions_fails() {
        let missing = QuestionSet::from_value(&json!({ "topic": "x" })).unwrap_err();
        let empty = QuestionSet::from_value(&json!({ "questions": [] })).unwrap_err();
        let not_array = QuestionSet::from_value(&json!({ "questions": "nope" })).unwrap_err();

        assert_eq!(missing, QuestionSetError::MissingQuestions);
        assert_eq!(empty, QuestionSetError::MissingQuestions);
        assert_eq!(not_array, QuestionSetError::MissingQuestions);
    }

    #[test]
    fn non_object_question_reports_index() {
        let raw = json!({
            "questions": [
                { "text": "Q", "translation": "T", "tip": "H" },
                "oops"
            ]
        });

        let err = QuestionSet::from_value(&raw).unwrap_err();

        assert_eq!(err, QuestionSetError::QuestionNotObject { index: 1 });
        assert_eq!(err.to_string(), "Question at index 1 is not a valid object.");
    }

    #[test]
    fn blank_text_reports_index() {
        let raw = json!({ "questions": [{ "text": "  ", "translation": "T", "tip": "H" }] });

        let err = QuestionSet::from_value(&raw).unwrap_err();

        assert_eq!(err, QuestionSetError::MissingText { index: 0 });
        assert_eq!(
            err.to_string(),
            "Question at index 0 is missing a \"text\" string."
        );
    }

    #[test]
    fn empty_tip_names_the_question() {
        let raw = json!({ "questions": [{ "text": "Where is it?", "translation": "Wo ist es?", "tip": "" }] });

        let err = QuestionSet::from_value(&raw).unwrap_err();

        assert_eq!(
            err,
            QuestionSetError::MissingField {
                question: "Where is it?".into(),
                field: QuestionField::Tip,
            }
        );
        assert_eq!(
            err.to_string(),
            "Question \"Where is it?\" is missing a \"tip\" string."
        );
    }

    #[test]
    fn non_string_translation_is_missing() {
        let raw = json!({ "questions": [{ "text": "Q", "translation": 7, "tip": "H" }] });

        let err = QuestionSet::from_value(&raw).unwrap_err();

        assert!(matches!(
            err,
            QuestionSetError::MissingField {
                field: QuestionField::Translation,
                ..
            }
        ));
    }

    #[test]
    fn new_rejects_empty_list() {
        assert_eq!(
            QuestionSet::new(Some("x"), Vec::new()).unwrap_err(),
            QuestionSetError::MissingQuestions
        );
    }

    #[test]
    fn question_new_trims_and_validates() {
        let q = Question::new(" a ", " b ", " c ").unwrap();
        assert_eq!((q.text(), q.translation(), q.tip()), ("a", "b", "c"));

        let err = Question::new("a", "b", "   ").unwrap_err();
        assert!(matches!(
            err,
            QuestionSetError::MissingField {
                field: QuestionField::Tip,
                ..
            }
        ));
    }
}
