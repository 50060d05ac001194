//! Sample catalog used by `trivia seed` and by tests.

use super::fs::FileStore;
use crate::error::Result;
use crate::model::{Category, CategoryId, Question, QuestionId};

const CATEGORIES: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

const QUESTIONS: &[(QuestionId, &str, &str, CategoryId, u8)] = &[
    (2, "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    (4, "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
    (5, "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    (6, "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
    (9, "What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    (10, "Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    (11, "Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
    (12, "Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    (13, "What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    (14, "In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    (15, "The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    (16, "Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
    (17, "La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    (18, "How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    (19, "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2, 2),
    (20, "What is the heaviest organ in the human body?", "The Liver", 1, 4),
    (21, "Who discovered penicillin?", "Alexander Fleming", 1, 3),
    (22, "Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    (23, "Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
];

pub fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, name)| Category::new(i as CategoryId + 1, *name))
        .collect()
}

pub fn questions() -> Vec<Question> {
    QUESTIONS
        .iter()
        .map(|&(id, question, answer, category, difficulty)| Question {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
            category,
            difficulty,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Written { categories: usize, questions: usize },
    SkippedExisting,
}

/// Writes the sample catalog into `store` unless it already holds data.
pub fn seed_store(store: &mut FileStore, force: bool) -> Result<SeedOutcome> {
    if store.has_data() && !force {
        return Ok(SeedOutcome::SkippedExisting);
    }
    let categories = categories();
    let questions = questions();
    store.replace_catalog(&categories, &questions)?;
    Ok(SeedOutcome::Written {
        categories: categories.len(),
        questions: questions.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DataStore;
    use std::collections::HashSet;

    #[test]
    fn every_question_references_a_category() {
        let ids: HashSet<_> = categories().into_iter().map(|c| c.id).collect();
        assert!(questions().iter().all(|q| ids.contains(&q.category)));
    }

    #[test]
    fn question_ids_are_unique() {
        let ids: HashSet<_> = questions().into_iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), QUESTIONS.len());
    }

    #[test]
    fn seeding_skips_existing_data_unless_forced() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        let first = seed_store(&mut store, false).unwrap();
        assert!(matches!(first, SeedOutcome::Written { categories: 6, .. }));
        assert_eq!(seed_store(&mut store, false).unwrap(), SeedOutcome::SkippedExisting);

        assert!(store.delete_question(2).unwrap());
        assert!(matches!(
            seed_store(&mut store, true).unwrap(),
            SeedOutcome::Written { .. }
        ));
        let restored = store
            .list_questions(&crate::model::QuestionFilter::all())
            .unwrap();
        assert!(restored.iter().any(|q| q.id == 2));
    }
}
