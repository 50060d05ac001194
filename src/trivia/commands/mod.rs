use crate::categories::CategoryMap;
use crate::model::{Question, QuestionId};

pub mod by_category;
pub mod categories;
pub mod create;
pub mod delete;
pub mod list;
pub mod quiz;
pub mod search;

/// One page of the full question listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<String>,
    pub categories: CategoryMap,
}

/// One page of search matches. `total_questions` counts every match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// One page of a single category's questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizResult {
    Question(Question),
    /// Every question of the pool was served. Carries the category mapping so
    /// the client can offer a new round.
    Exhausted { categories: CategoryMap },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Created(pub QuestionId);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deleted(pub QuestionId);
