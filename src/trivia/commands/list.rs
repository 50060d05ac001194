use crate::categories::as_mapping;
use crate::commands::QuestionPage;
use crate::error::{Result, TriviaError};
use crate::pager::paginate;
use crate::queries;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, page: usize, page_size: usize) -> Result<QuestionPage> {
    let all = queries::list_all(store)?;
    let questions = paginate(page, page_size, &all).to_vec();
    if questions.is_empty() {
        return Err(TriviaError::NoQuestions(format!("page {}", page)));
    }

    let categories = store.list_categories()?;
    // The listing is not scoped to a category; clients display the last one.
    let current_category = categories.last().map(|c| c.type_name.clone());

    Ok(QuestionPage {
        questions,
        total_questions: all.len(),
        current_category,
        categories: as_mapping(&categories),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pager::DEFAULT_PAGE_SIZE;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn first_page_of_seeded_store() {
        let result = run(&InMemoryStore::seeded(), 1, DEFAULT_PAGE_SIZE).unwrap();
        assert_eq!(result.questions.len(), 10);
        assert_eq!(result.total_questions, 19);
        assert_eq!(result.questions[0].id, 2);
        assert_eq!(result.current_category.as_deref(), Some("Sports"));
        assert_eq!(result.categories.len(), 6);
    }

    #[test]
    fn last_page_is_partial() {
        let result = run(&InMemoryStore::seeded(), 2, DEFAULT_PAGE_SIZE).unwrap();
        assert_eq!(result.questions.len(), 9);
    }

    #[test]
    fn page_beyond_range_is_not_found() {
        let err = run(&InMemoryStore::seeded(), 1000, DEFAULT_PAGE_SIZE).unwrap_err();
        assert!(matches!(err, TriviaError::NoQuestions(_)));
    }

    #[test]
    fn empty_store_is_not_found() {
        let store = StoreFixture::new().with_categories(&["Science"]).store;
        assert!(run(&store, 1, DEFAULT_PAGE_SIZE).is_err());
    }

    #[test]
    fn lists_without_categories() {
        let store = StoreFixture::new().with_questions(3, 1).store;
        let result = run(&store, 1, 2).unwrap();
        assert_eq!(result.questions.len(), 2);
        assert_eq!(result.total_questions, 3);
        assert!(result.current_category.is_none());
    }
}
