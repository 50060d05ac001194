//! # Quiz Selection
//!
//! Picks the next question of a quiz session without ever repeating one.
//!
//! The session carries the ids it has already been served. The selector takes
//! the set difference between the category pool and those ids, then draws
//! uniformly from what is left, so coverage of the remaining questions does not
//! depend on how the pool is ordered.
//!
//! Running out of questions is a normal end of a session, reported as
//! [`QuizOutcome::Exhausted`] rather than as an error.

use crate::error::{Result, TriviaError};
use crate::model::{Question, QuestionId};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    Question(Question),
    Exhausted,
}

pub fn select_next<R: Rng + ?Sized>(
    pool: &[Question],
    previous: &HashSet<QuestionId>,
    rng: &mut R,
) -> Result<QuizOutcome> {
    if pool.is_empty() {
        return Err(TriviaError::NoQuestions(
            "category has no questions".to_string(),
        ));
    }

    let candidates: Vec<&Question> = pool.iter().filter(|q| !previous.contains(&q.id)).collect();

    Ok(match candidates.choose(rng) {
        Some(question) => QuizOutcome::Question((*question).clone()),
        None => QuizOutcome::Exhausted,
    })
}
