//! # Storage Layer
//!
//! The [`DataStore`] trait is the only way the core reaches questions and
//! categories. The core never caches what it reads: every operation fetches
//! what it needs for that request.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON files in a data directory
//!   - `categories.json`: array of categories
//!   - `questions.json`: array of questions
//!
//! - [`memory::InMemoryStore`]: no persistence, used by tests
//!
//! ## Ordering
//!
//! Listings are always returned ordered by id. Pagination and the quiz pool
//! rely on that.

use crate::error::{Result, TriviaError};
use crate::model::{Category, Question, QuestionDraft, QuestionFilter, QuestionId};

pub mod fs;
pub mod memory;
pub mod seed;

/// Abstract interface for trivia storage.
pub trait DataStore {
    /// All categories, ordered by id
    fn list_categories(&self) -> Result<Vec<Category>>;

    /// Questions matching `filter`, ordered by id
    fn list_questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>>;

    /// Remove a question. Returns whether it existed.
    fn delete_question(&mut self, id: QuestionId) -> Result<bool>;

    /// Store a validated question and return its new id
    fn insert_question(&mut self, draft: QuestionDraft) -> Result<QuestionId>;
}

pub(crate) fn next_question_id(questions: &[Question]) -> Result<QuestionId> {
    let max = questions.iter().map(|q| q.id).max().unwrap_or(0);
    max.checked_add(1)
        .ok_or_else(|| TriviaError::Store(format!("no question id left after {}", max)))
}

pub(crate) fn filter_sorted(questions: &[Question], filter: &QuestionFilter) -> Vec<Question> {
    let mut listed: Vec<Question> = questions
        .iter()
        .filter(|q| filter.matches(q))
        .cloned()
        .collect();
    listed.sort_by_key(|q| q.id);
    listed
}
