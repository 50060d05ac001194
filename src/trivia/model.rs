use serde::{Deserialize, Serialize};

pub type QuestionId = u32;
pub type CategoryId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl Category {
    pub fn new(id: CategoryId, type_name: impl Into<String>) -> Self {
        Self {
            id,
            type_name: type_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: u8,
}

/// Fields for a question that has not been stored yet.
///
/// Every field is optional so that incomplete submissions reach validation
/// instead of failing at decode time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<CategoryId>,
    pub difficulty: Option<u8>,
}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: u8,
    ) -> Self {
        Self {
            question: Some(question.into()),
            answer: Some(answer.into()),
            category: Some(category),
            difficulty: Some(difficulty),
        }
    }
}

/// A question whose fields have passed validation, ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: u8,
}

impl QuestionDraft {
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Category selector of a quiz request.
///
/// `Any` is its own variant so a real category can never be mistaken for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    Any,
    Category(CategoryId),
}

impl QuizCategory {
    /// Wire id that clients send to ask for any category.
    pub const ANY_ID: CategoryId = 0;

    pub fn from_wire_id(id: CategoryId) -> Self {
        if id == Self::ANY_ID {
            QuizCategory::Any
        } else {
            QuizCategory::Category(id)
        }
    }
}

/// Store-side filter for question listings. Empty filter means all questions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    pub category: Option<CategoryId>,
    pub substring: Option<String>,
}

impl QuestionFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_category(category: CategoryId) -> Self {
        Self {
            category: Some(category),
            substring: None,
        }
    }

    pub fn by_substring(term: impl Into<String>) -> Self {
        Self {
            category: None,
            substring: Some(term.into()),
        }
    }

    /// Case-insensitive match against the question text.
    pub fn matches(&self, question: &Question) -> bool {
        if let Some(category) = self.category {
            if question.category != category {
                return false;
            }
        }
        match &self.substring {
            Some(term) => question
                .question
                .to_lowercase()
                .contains(&term.to_lowercase()),
            None => true,
        }
    }
}
