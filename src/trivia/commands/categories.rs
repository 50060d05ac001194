use crate::categories::{as_mapping, CategoryMap};
use crate::error::{Result, TriviaError};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CategoryMap> {
    let categories = store.list_categories()?;
    if categories.is_empty() {
        return Err(TriviaError::NoCategories);
    }
    Ok(as_mapping(&categories))
}
