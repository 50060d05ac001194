use crate::categories::{self, as_mapping};
use crate::commands::QuizResult;
use crate::error::Result;
use crate::model::{QuestionId, QuizCategory};
use crate::queries;
use crate::quiz::{select_next, QuizOutcome};
use crate::store::DataStore;
use rand::Rng;
use std::collections::HashSet;

pub fn run<S: DataStore, R: Rng + ?Sized>(
    store: &S,
    selector: QuizCategory,
    previous: &HashSet<QuestionId>,
    rng: &mut R,
) -> Result<QuizResult> {
    let all_categories = store.list_categories()?;
    let category_id = categories::resolve(selector, &all_categories, rng)?;
    let pool = queries::filter_by_category(store, category_id)?;

    Ok(match select_next(&pool, previous, rng)? {
        QuizOutcome::Question(question) => QuizResult::Question(question),
        QuizOutcome::Exhausted => QuizResult::Exhausted {
            categories: as_mapping(&all_categories),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TriviaError;
    use crate::store::memory::fixtures::{question, StoreFixture};
    use crate::store::memory::InMemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn history_store() -> InMemoryStore {
        StoreFixture::new()
            .with_categories(&["Science", "Art", "Geography", "History"])
            .store
            .with_question(question(10, 4, "Ten"))
            .with_question(question(11, 4, "Eleven"))
            .with_question(question(12, 4, "Twelve"))
            .with_question(question(13, 1, "Thirteen"))
    }

    #[test]
    fn returns_only_remaining_question() {
        let store = history_store();
        let previous: HashSet<_> = [10, 11].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(9);

        let result = run(&store, QuizCategory::Category(4), &previous, &mut rng).unwrap();
        match result {
            QuizResult::Question(q) => assert_eq!(q.id, 12),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn exhausted_carries_categories() {
        let store = history_store();
        let previous: HashSet<_> = [10, 11, 12].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(9);

        let result = run(&store, QuizCategory::Category(4), &previous, &mut rng).unwrap();
        match result {
            QuizResult::Exhausted { categories } => assert_eq!(categories.len(), 4),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn unknown_category_is_not_found() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = run(
            &InMemoryStore::seeded(),
            QuizCategory::Category(8),
            &HashSet::new(),
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, TriviaError::CategoryNotFound(8)));
    }

    #[test]
    fn category_without_questions_is_not_found() {
        let store = history_store();
        let mut rng = StdRng::seed_from_u64(0);
        let err = run(&store, QuizCategory::Category(2), &HashSet::new(), &mut rng).unwrap_err();
        assert!(matches!(err, TriviaError::NoQuestions(_)));
    }

    #[test]
    fn any_category_picks_from_a_real_category() {
        let store = InMemoryStore::seeded();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            match run(&store, QuizCategory::Any, &HashSet::new(), &mut rng).unwrap() {
                QuizResult::Question(q) => assert!((1..=6).contains(&q.category)),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn same_seed_gives_same_question() {
        let store = InMemoryStore::seeded();
        let pick = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            run(&store, QuizCategory::Any, &HashSet::new(), &mut rng).unwrap()
        };
        assert_eq!(pick(1234), pick(1234));
    }
}
