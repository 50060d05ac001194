use crate::commands::Deleted;
use crate::error::Result;
use crate::model::QuestionId;
use crate::queries;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: QuestionId) -> Result<Deleted> {
    queries::delete_by_id(store, id)?;
    Ok(Deleted(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::error::TriviaError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_question_from_listing() {
        let mut store = InMemoryStore::seeded();
        assert_eq!(run(&mut store, 4).unwrap(), Deleted(4));

        let page = list::run(&store, 1, 100).unwrap();
        assert_eq!(page.total_questions, 18);
        assert!(page.questions.iter().all(|q| q.id != 4));
    }

    #[test]
    fn repeated_delete_is_not_found() {
        let mut store = InMemoryStore::seeded();
        run(&mut store, 4).unwrap();
        assert!(matches!(
            run(&mut store, 4).unwrap_err(),
            TriviaError::QuestionNotFound(4)
        ));
        assert!(matches!(
            run(&mut store, 4).unwrap_err(),
            TriviaError::QuestionNotFound(4)
        ));
    }
}
