use crate::commands::{CmdMessage, CmdResult};
use crate::store::CarStore;

/// Re-fetches the collection into the result, the step every mutation
/// finishes with so the caller can re-render the list view. A refresh
/// failure is reported as a warning rather than an error: the mutation
/// itself already succeeded.
pub fn refresh_list<S: CarStore>(store: &S, mut result: CmdResult) -> CmdResult {
    match store.list_cars() {
        Ok(cars) => result.listed_cars = Some(cars),
        Err(e) => result.add_message(CmdMessage::warning(format!(
            "The collection could not be reloaded: {}",
            e
        ))),
    }
    result
}
