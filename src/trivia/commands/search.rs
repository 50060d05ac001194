use crate::commands::SearchResult;
use crate::error::Result;
use crate::pager::paginate;
use crate::queries;
use crate::store::DataStore;

/// Never fails for lack of matches: no hits is an empty, successful result.
pub fn run<S: DataStore>(store: &S, term: &str, page: usize, page_size: usize) -> Result<SearchResult> {
    let matches = queries::search_by_substring(store, term)?;
    Ok(SearchResult {
        questions: paginate(page, page_size, &matches).to_vec(),
        total_questions: matches.len(),
    })
}
