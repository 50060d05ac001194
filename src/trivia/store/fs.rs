use super::{filter_sorted, next_question_id, DataStore};
use crate::error::{Result, TriviaError};
use crate::model::{Category, Question, QuestionDraft, QuestionFilter, QuestionId};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

const CATEGORIES_FILE: &str = "categories.json";
const QUESTIONS_FILE: &str = "questions.json";

/// JSON file storage rooted at a data directory.
///
/// Every call reads the files again, so edits made on disk between requests
/// are picked up without a restart.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// True when either data file exists.
    pub fn has_data(&self) -> bool {
        self.root.join(CATEGORIES_FILE).exists() || self.root.join(QUESTIONS_FILE).exists()
    }

    /// Overwrites both data files.
    pub fn replace_catalog(&mut self, categories: &[Category], questions: &[Question]) -> Result<()> {
        self.ensure_dir()?;
        let mut categories = categories.to_vec();
        categories.sort_by_key(|c| c.id);
        self.save(CATEGORIES_FILE, &categories)?;
        self.save_questions(questions)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TriviaError::Io)?;
        }
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.root.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(TriviaError::Io)?;
        let items: Vec<T> = serde_json::from_str(&content).map_err(TriviaError::Serialization)?;
        Ok(items)
    }

    fn save<T: Serialize>(&self, file: &str, items: &[T]) -> Result<()> {
        let content = serde_json::to_string_pretty(items).map_err(TriviaError::Serialization)?;
        fs::write(self.root.join(file), content).map_err(TriviaError::Io)?;
        Ok(())
    }

    fn load_questions(&self) -> Result<Vec<Question>> {
        self.load(QUESTIONS_FILE)
    }

    fn save_questions(&self, questions: &[Question]) -> Result<()> {
        let mut questions = questions.to_vec();
        questions.sort_by_key(|q| q.id);
        self.save(QUESTIONS_FILE, &questions)
    }
}

impl DataStore for FileStore {
    fn list_categories(&self) -> Result<Vec<Category>> {
        let mut categories: Vec<Category> = self.load(CATEGORIES_FILE)?;
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    fn list_questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>> {
        Ok(filter_sorted(&self.load_questions()?, filter))
    }

    fn delete_question(&mut self, id: QuestionId) -> Result<bool> {
        let mut questions = self.load_questions()?;
        let before = questions.len();
        questions.retain(|q| q.id != id);
        if questions.len() == before {
            return Ok(false);
        }
        self.save_questions(&questions)?;
        Ok(true)
    }

    fn insert_question(&mut self, draft: QuestionDraft) -> Result<QuestionId> {
        self.ensure_dir()?;
        let mut questions = self.load_questions()?;
        let id = next_question_id(&questions)?;
        questions.push(draft.into_question(id));
        self.save_questions(&questions)?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    fn draft(text: &str) -> QuestionDraft {
        QuestionDraft {
            question: text.into(),
            answer: "answer".into(),
            category: 1,
            difficulty: 1,
        }
    }

    #[test]
    fn missing_files_read_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nothing-here"));
        assert!(!store.has_data());
        assert!(store.list_categories().unwrap().is_empty());
        assert!(store
            .list_questions(&QuestionFilter::all())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn insert_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        assert_eq!(store.insert_question(draft("first")).unwrap(), 1);
        assert_eq!(store.insert_question(draft("second")).unwrap(), 2);

        let reopened = FileStore::new(dir.path());
        let questions = reopened.list_questions(&QuestionFilter::all()).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].question, "second");
    }

    #[test]
    fn delete_removes_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.insert_question(draft("gone soon")).unwrap();

        assert!(store.delete_question(1).unwrap());
        assert!(!store.delete_question(1).unwrap());
        assert!(FileStore::new(dir.path())
            .list_questions(&QuestionFilter::all())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn replace_catalog_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store
            .replace_catalog(&seed::categories(), &seed::questions())
            .unwrap();

        assert!(store.has_data());
        assert_eq!(store.list_categories().unwrap(), seed::categories());
        let science = store.list_questions(&QuestionFilter::by_category(1)).unwrap();
        assert!(science.iter().all(|q| q.category == 1));
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(QUESTIONS_FILE), "{not json").unwrap();
        let store = FileStore::new(dir.path());
        let err = store.list_questions(&QuestionFilter::all()).unwrap_err();
        assert!(matches!(err, TriviaError::Serialization(_)));
    }
}
