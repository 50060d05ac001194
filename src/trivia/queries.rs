//! Question queries used by the commands.
//!
//! Thin pass-throughs to [`DataStore`]. The only logic here is turning store
//! answers into typed failures: a missing question on delete, and an incomplete
//! question on insert.

use crate::categories;
use crate::error::{Result, TriviaError};
use crate::model::{CategoryId, NewQuestion, Question, QuestionDraft, QuestionFilter, QuestionId};
use crate::store::DataStore;

pub fn list_all<S: DataStore>(store: &S) -> Result<Vec<Question>> {
    store.list_questions(&QuestionFilter::all())
}

pub fn filter_by_category<S: DataStore>(store: &S, category: CategoryId) -> Result<Vec<Question>> {
    store.list_questions(&QuestionFilter::by_category(category))
}

pub fn search_by_substring<S: DataStore>(store: &S, term: &str) -> Result<Vec<Question>> {
    store.list_questions(&QuestionFilter::by_substring(term))
}

pub fn delete_by_id<S: DataStore>(store: &mut S, id: QuestionId) -> Result<()> {
    if store.delete_question(id)? {
        Ok(())
    } else {
        Err(TriviaError::QuestionNotFound(id))
    }
}

pub fn insert<S: DataStore>(store: &mut S, new_question: NewQuestion) -> Result<QuestionId> {
    let draft = validate(new_question)?;
    categories::find(&store.list_categories()?, draft.category).map_err(|_| {
        TriviaError::InvalidQuestion(format!("unknown category {}", draft.category))
    })?;
    store.insert_question(draft)
}

fn validate(new_question: NewQuestion) -> Result<QuestionDraft> {
    let question = required_text(new_question.question, "question")?;
    let answer = required_text(new_question.answer, "answer")?;
    let category = new_question
        .category
        .filter(|&c| c != 0)
        .ok_or_else(|| missing("category"))?;
    let difficulty = new_question
        .difficulty
        .filter(|&d| d != 0)
        .ok_or_else(|| missing("difficulty"))?;

    Ok(QuestionDraft {
        question,
        answer,
        category,
        difficulty,
    })
}

fn required_text(value: Option<String>, field: &str) -> Result<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| missing(field))
}

fn missing(field: &str) -> TriviaError {
    TriviaError::InvalidQuestion(format!("{} is required", field))
}
