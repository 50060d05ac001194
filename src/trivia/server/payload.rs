//! Request bodies and response payloads of the HTTP API.
//!
//! Field names follow what the existing frontend sends and reads, which is why
//! the search count is `totalQuestions` while listings use `total_questions`.

use crate::categories::CategoryMap;
use crate::commands::{CategoryQuestions, Created, Deleted, QuestionPage, QuizResult, SearchResult};
use crate::model::{NewQuestion, Question, QuestionId, QuizCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Forms post numeric fields as strings; both spellings are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(u64),
    Text(String),
}

impl NumberOrString {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            NumberOrString::Number(n) => Some(*n),
            NumberOrString::Text(s) => s.trim().parse().ok(),
        }
    }

    fn narrow<T: TryFrom<u64>>(&self) -> Option<T> {
        self.as_u64().and_then(|n| T::try_from(n).ok())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    page: Option<String>,
}

impl PageQuery {
    /// Missing or non-numeric values fall back to the first page. Numbers too
    /// large for `usize` saturate, which pages past every question.
    pub fn number(&self) -> usize {
        let Some(page) = self.page.as_deref().map(str::trim) else {
            return 1;
        };
        if page.is_empty() || !page.bytes().all(|b| b.is_ascii_digit()) {
            return 1;
        }
        page.parse().unwrap_or(usize::MAX)
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBody {
    #[serde(rename = "searchTerm", alias = "search_term")]
    pub search_term: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionBody {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub category: Option<NumberOrString>,
    #[serde(default)]
    pub difficulty: Option<NumberOrString>,
}

impl From<CreateQuestionBody> for NewQuestion {
    fn from(body: CreateQuestionBody) -> Self {
        NewQuestion {
            question: body.question,
            answer: body.answer,
            category: body.category.as_ref().and_then(NumberOrString::narrow),
            difficulty: body.difficulty.as_ref().and_then(NumberOrString::narrow),
        }
    }
}

/// Only the id is read; the frontend's `type` label is ignored.
#[derive(Debug, Deserialize)]
pub struct QuizCategoryBody {
    pub id: NumberOrString,
}

#[derive(Debug, Deserialize)]
pub struct QuizBody {
    #[serde(alias = "quizCategory")]
    pub quiz_category: QuizCategoryBody,
    #[serde(alias = "previousQuestions")]
    pub previous_questions: Vec<QuestionId>,
}

impl QuizBody {
    /// `None` when the category id is not a valid number.
    pub fn selector(&self) -> Option<QuizCategory> {
        self.quiz_category
            .id
            .narrow()
            .map(QuizCategory::from_wire_id)
    }

    pub fn previous_ids(&self) -> HashSet<QuestionId> {
        self.previous_questions.iter().copied().collect()
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

impl From<CategoryMap> for CategoriesResponse {
    fn from(categories: CategoryMap) -> Self {
        Self {
            success: true,
            categories,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
    pub categories: CategoryMap,
}

impl From<QuestionPage> for ListResponse {
    fn from(page: QuestionPage) -> Self {
        Self {
            success: true,
            questions: page.questions,
            total_questions: page.total_questions,
            current_category: page.current_category,
            categories: page.categories,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
}

impl From<SearchResult> for SearchResponse {
    fn from(result: SearchResult) -> Self {
        Self {
            success: true,
            questions: result.questions,
            total_questions: result.total_questions,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

impl From<CategoryQuestions> for CategoryQuestionsResponse {
    fn from(result: CategoryQuestions) -> Self {
        Self {
            success: true,
            questions: result.questions,
            total_questions: result.total_questions,
            current_category: result.current_category,
        }
    }
}

/// An exhausted quiz answers with the category mapping instead of a question.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QuizResponse {
    Question { success: bool, question: Question },
    Exhausted { success: bool, categories: CategoryMap },
}

impl From<QuizResult> for QuizResponse {
    fn from(result: QuizResult) -> Self {
        match result {
            QuizResult::Question(question) => QuizResponse::Question {
                success: true,
                question,
            },
            QuizResult::Exhausted { categories } => QuizResponse::Exhausted {
                success: true,
                categories,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: QuestionId,
}

impl From<Created> for CreatedResponse {
    fn from(Created(id): Created) -> Self {
        Self {
            success: true,
            created: id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: QuestionId,
}

impl From<Deleted> for DeletedResponse {
    fn from(Deleted(id): Deleted) -> Self {
        Self {
            success: true,
            deleted: id,
        }
    }
}
