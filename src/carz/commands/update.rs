use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::CarForm;
use crate::store::CarStore;
use crate::validate::validate_draft;

use super::helpers::refresh_list;

/// Edit works like the original form did: fetch the record, prefill a form
/// from it, overlay whatever fields the user supplied, then PUT the whole
/// merged record back.
pub fn run<S: CarStore>(store: &mut S, id: i64, overrides: CarForm) -> Result<CmdResult> {
    let current = store.get_car(id)?;
    let merged = CarForm::prefill(&current).merged_with(overrides);
    let draft = merged.into_draft();
    validate_draft(&draft)?;

    let updated = store.update_car(id, &draft)?;

    let mut result = CmdResult::default();
    // Report the echoed id when the server returned the record, the
    // requested one otherwise.
    let reported = updated.as_ref().map_or(id, |car| car.id);
    result.add_message(CmdMessage::success(format!(
        "Car (id {}) updated.",
        reported
    )));
    if let Some(car) = updated {
        result.affected_cars.push(car);
    }

    Ok(refresh_list(store, result))
}
