use super::{filter_sorted, next_question_id, DataStore};
use crate::error::Result;
use crate::model::{Category, CategoryId, Question, QuestionDraft, QuestionFilter, QuestionId};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    categories: Vec<Category>,
    questions: Vec<Question>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with the sample catalog.
    pub fn seeded() -> Self {
        Self {
            categories: super::seed::categories(),
            questions: super::seed::questions(),
        }
    }

    pub fn with_category(mut self, id: CategoryId, type_name: &str) -> Self {
        self.categories.retain(|c| c.id != id);
        self.categories.push(Category::new(id, type_name));
        self.categories.sort_by_key(|c| c.id);
        self
    }

    /// Adds a question with an explicit id, replacing any existing one.
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.retain(|q| q.id != question.id);
        self.questions.push(question);
        self
    }
}

impl DataStore for InMemoryStore {
    fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.categories.clone())
    }

    fn list_questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>> {
        Ok(filter_sorted(&self.questions, filter))
    }

    fn delete_question(&mut self, id: QuestionId) -> Result<bool> {
        let before = self.questions.len();
        self.questions.retain(|q| q.id != id);
        Ok(self.questions.len() != before)
    }

    fn insert_question(&mut self, draft: QuestionDraft) -> Result<QuestionId> {
        let id = next_question_id(&self.questions)?;
        self.questions.push(draft.into_question(id));
        Ok(id)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn question(id: QuestionId, category: CategoryId, text: &str) -> Question {
        Question {
            id,
            question: text.to_string(),
            answer: format!("Answer to {}", id),
            category,
            difficulty: 1,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_categories(mut self, names: &[&str]) -> Self {
            for (i, name) in names.iter().enumerate() {
                self.store = self.store.with_category(i as CategoryId + 1, name);
            }
            self
        }

        /// Adds `count` questions to `category`, numbered after the current maximum id.
        pub fn with_questions(mut self, count: usize, category: CategoryId) -> Self {
            for _ in 0..count {
                let id = next_question_id(&self.store.questions).expect("question ids exhausted");
                let text = format!("Test question {}", id);
                self.store = self.store.with_question(question(id, category, &text));
            }
            self
        }
    }
}
