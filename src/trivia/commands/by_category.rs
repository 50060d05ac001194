use crate::categories;
use crate::commands::CategoryQuestions;
use crate::error::{Result, TriviaError};
use crate::model::CategoryId;
use crate::pager::paginate;
use crate::queries;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    store: &S,
    category_id: CategoryId,
    page: usize,
    page_size: usize,
) -> Result<CategoryQuestions> {
    let all_categories = store.list_categories()?;
    let category = categories::find(&all_categories, category_id)?;

    let in_category = queries::filter_by_category(store, category.id)?;
    let questions = paginate(page, page_size, &in_category).to_vec();
    if questions.is_empty() {
        return Err(TriviaError::NoQuestions(format!(
            "category {} page {}",
            category.type_name, page
        )));
    }

    Ok(CategoryQuestions {
        questions,
        total_questions: in_category.len(),
        current_category: category.type_name.clone(),
    })
}
