//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every trivia operation, whatever the transport.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns** the store, the page size and the random source
//! - **Returns structured types** (`Result<T>`), never response bodies
//!
//! Business logic belongs in `commands/*.rs`; status codes and JSON shapes
//! belong in `server/`.
//!
//! ## Generic Over DataStore
//!
//! `TriviaApi<S: DataStore>` is generic over the storage backend:
//! - Production: `TriviaApi<FileStore>`
//! - Testing: `TriviaApi<InMemoryStore>`
//!
//! ## Randomness
//!
//! Quiz selection draws from an owned `StdRng`. Production seeds it from the
//! OS; [`TriviaApi::with_seed`] makes the draws reproducible.

use crate::categories::CategoryMap;
use crate::commands;
use crate::error::Result;
use crate::model::{CategoryId, NewQuestion, QuestionId, QuizCategory};
use crate::pager::DEFAULT_PAGE_SIZE;
use crate::store::DataStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

pub use crate::commands::{
    CategoryQuestions, Created, Deleted, QuestionPage, QuizResult, SearchResult,
};

pub struct TriviaApi<S: DataStore> {
    store: S,
    page_size: usize,
    rng: StdRng,
}

impl<S: DataStore> TriviaApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            page_size: DEFAULT_PAGE_SIZE,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Zero is ignored; every page must be able to hold a question.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        if page_size > 0 {
            self.page_size = page_size;
        }
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn categories(&self) -> Result<CategoryMap> {
        commands::categories::run(&self.store)
    }

    pub fn list_questions(&self, page: usize) -> Result<QuestionPage> {
        commands::list::run(&self.store, page, self.page_size)
    }

    pub fn search_questions(&self, term: &str, page: usize) -> Result<SearchResult> {
        commands::search::run(&self.store, term, page, self.page_size)
    }

    pub fn questions_by_category(
        &self,
        category: CategoryId,
        page: usize,
    ) -> Result<CategoryQuestions> {
        commands::by_category::run(&self.store, category, page, self.page_size)
    }

    pub fn next_quiz_question(
        &mut self,
        category: QuizCategory,
        previous: &HashSet<QuestionId>,
    ) -> Result<QuizResult> {
        commands::quiz::run(&self.store, category, previous, &mut self.rng)
    }

    pub fn create_question(&mut self, new_question: NewQuestion) -> Result<Created> {
        commands::create::run(&mut self.store, new_question)
    }

    pub fn delete_question(&mut self, id: QuestionId) -> Result<Deleted> {
        commands::delete::run(&mut self.store, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TriviaError;
    use crate::store::memory::InMemoryStore;

    fn api() -> TriviaApi<InMemoryStore> {
        TriviaApi::new(InMemoryStore::seeded()).with_seed(5)
    }

    #[test]
    fn page_size_applies_to_listing() {
        let api = api().with_page_size(4);
        assert_eq!(api.list_questions(1).unwrap().questions.len(), 4);
        assert_eq!(api.list_questions(5).unwrap().questions.len(), 3);
    }

    #[test]
    fn zero_page_size_keeps_default() {
        assert_eq!(api().with_page_size(0).page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn quiz_draws_are_reproducible_with_seed() {
        let mut a = api();
        let mut b = api();
        let none = HashSet::new();
        for _ in 0..5 {
            assert_eq!(
                a.next_quiz_question(QuizCategory::Any, &none).unwrap(),
                b.next_quiz_question(QuizCategory::Any, &none).unwrap()
            );
        }
    }

    #[test]
    fn delete_then_category_listing() {
        let mut api = api();
        api.delete_question(10).unwrap();
        api.delete_question(11).unwrap();
        assert!(matches!(
            api.questions_by_category(6, 1).unwrap_err(),
            TriviaError::NoQuestions(_)
        ));
    }

    #[test]
    fn create_dispatches_to_store() {
        let mut api = api();
        let Created(id) = api
            .create_question(NewQuestion::new("Which planet is the largest?", "Jupiter", 1, 1))
            .unwrap();
        assert_eq!(api.questions_by_category(1, 1).unwrap().total_questions, 4);
        assert_eq!(api.delete_question(id).unwrap(), Deleted(id));
    }
}
