use crate::commands::Created;
use crate::error::Result;
use crate::model::NewQuestion;
use crate::queries;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, new_question: NewQuestion) -> Result<Created> {
    queries::insert(store, new_question).map(Created)
}
