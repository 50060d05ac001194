use super::error::ApiError;
use super::payload::{
    CategoriesResponse, CategoryQuestionsResponse, CreateQuestionBody, CreatedResponse,
    DeletedResponse, ListResponse, PageQuery, QuizBody, QuizResponse, SearchBody, SearchResponse,
};
use super::AppState;
use crate::api::TriviaApi;
use crate::error::{self, ErrorKind};
use crate::model::{CategoryId, NewQuestion, QuestionId};
use crate::store::DataStore;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;

type ApiResult<T> = Result<Json<T>, ApiError>;

fn page_of(query: Result<Query<PageQuery>, QueryRejection>) -> usize {
    query.map(|Query(q)| q.number()).unwrap_or(1)
}

/// Runs `op` against the facade on the blocking pool, holding the lock until
/// it returns.
async fn with_api<S, T, F>(state: &AppState<S>, op: F) -> Result<T, ApiError>
where
    S: DataStore + Send + 'static,
    T: Send + 'static,
    F: FnOnce(&mut TriviaApi<S>) -> error::Result<T> + Send + 'static,
{
    let mut api = state.api.clone().lock_owned().await;
    let outcome = tokio::task::spawn_blocking(move || op(&mut *api))
        .await
        .map_err(|e| ApiError::new(ErrorKind::InternalError, e.to_string()))?;
    Ok(outcome?)
}

pub async fn categories<S: DataStore + Send + 'static>(
    State(state): State<AppState<S>>,
) -> ApiResult<CategoriesResponse> {
    let categories = with_api(&state, |api| api.categories()).await?;
    Ok(Json(categories.into()))
}

pub async fn list_questions<S: DataStore + Send + 'static>(
    State(state): State<AppState<S>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<ListResponse> {
    let page = page_of(query);
    let listing = with_api(&state, move |api| api.list_questions(page)).await?;
    Ok(Json(listing.into()))
}

pub async fn create_question<S: DataStore + Send + 'static>(
    State(state): State<AppState<S>>,
    body: Result<Json<CreateQuestionBody>, JsonRejection>,
) -> ApiResult<CreatedResponse> {
    let Json(body) = body?;
    let new_question = NewQuestion::from(body);
    let created = with_api(&state, move |api| api.create_question(new_question)).await?;
    tracing::info!(id = created.0, "question created");
    Ok(Json(created.into()))
}

pub async fn delete_question<S: DataStore + Send + 'static>(
    State(state): State<AppState<S>>,
    id: Result<Path<QuestionId>, PathRejection>,
) -> ApiResult<DeletedResponse> {
    let Path(id) = id.map_err(|e| ApiError::not_found(e.body_text()))?;
    let deleted = with_api(&state, move |api| api.delete_question(id)).await?;
    tracing::info!(id, "question deleted");
    Ok(Json(deleted.into()))
}

pub async fn search_questions<S: DataStore + Send + 'static>(
    State(state): State<AppState<S>>,
    query: Result<Query<PageQuery>, QueryRejection>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> ApiResult<SearchResponse> {
    let page = page_of(query);
    let Json(body) = body?;
    let term = body.search_term;
    let found = with_api(&state, move |api| api.search_questions(&term, page)).await?;
    Ok(Json(found.into()))
}

pub async fn questions_by_category<S: DataStore + Send + 'static>(
    State(state): State<AppState<S>>,
    id: Result<Path<CategoryId>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<CategoryQuestionsResponse> {
    let Path(id) = id.map_err(|e| ApiError::not_found(e.body_text()))?;
    let page = page_of(query);
    let listing = with_api(&state, move |api| api.questions_by_category(id, page)).await?;
    Ok(Json(listing.into()))
}

pub async fn next_quiz_question<S: DataStore + Send + 'static>(
    State(state): State<AppState<S>>,
    body: Result<Json<QuizBody>, JsonRejection>,
) -> ApiResult<QuizResponse> {
    let Json(body) = body?;
    let selector = body
        .selector()
        .ok_or_else(|| ApiError::unprocessable("quiz category id is not a number"))?;
    let previous = body.previous_ids();

    let next = with_api(&state, move |api| api.next_quiz_question(selector, &previous)).await?;
    Ok(Json(next.into()))
}

pub async fn not_found() -> ApiError {
    ApiError::new(ErrorKind::NotFound, "no such route")
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::new(ErrorKind::MethodNotAllowed, "method not allowed on this route")
}
