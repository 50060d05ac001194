use crate::model::{CategoryId, QuestionId};
use thiserror::Error;

/// Coarse classification of failures, shared by the core and the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    UnprocessableRequest,
    MethodNotAllowed,
    InternalError,
}

#[derive(Error, Debug)]
pub enum TriviaError {
    #[error("Question not found: {0}")]
    QuestionNotFound(QuestionId),

    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    #[error("No categories available")]
    NoCategories,

    #[error("No questions found: {0}")]
    NoQuestions(String),

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TriviaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TriviaError::QuestionNotFound(_)
            | TriviaError::CategoryNotFound(_)
            | TriviaError::NoCategories
            | TriviaError::NoQuestions(_) => ErrorKind::NotFound,
            // Store failures surface as unprocessable, never as 500.
            TriviaError::InvalidQuestion(_)
            | TriviaError::Io(_)
            | TriviaError::Serialization(_)
            | TriviaError::Store(_) => ErrorKind::UnprocessableRequest,
            TriviaError::Internal(_) => ErrorKind::InternalError,
        }
    }
}

pub type Result<T> = std::result::Result<T, TriviaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_failures_are_unprocessable() {
        let io = TriviaError::from(std::io::Error::other("disk gone"));
        assert_eq!(io.kind(), ErrorKind::UnprocessableRequest);
        assert_eq!(
            TriviaError::Store("locked".into()).kind(),
            ErrorKind::UnprocessableRequest
        );
    }

    #[test]
    fn missing_entities_are_not_found() {
        assert_eq!(TriviaError::QuestionNotFound(3).kind(), ErrorKind::NotFound);
        assert_eq!(TriviaError::CategoryNotFound(9).kind(), ErrorKind::NotFound);
        assert_eq!(TriviaError::NoCategories.kind(), ErrorKind::NotFound);
    }
}
