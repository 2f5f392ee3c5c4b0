use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::CarForm;
use crate::store::CarStore;
use crate::validate::validate_draft;

use super::helpers::refresh_list;

pub fn run<S: CarStore>(store: &mut S, form: CarForm) -> Result<CmdResult> {
    let draft = form.into_draft();
    validate_draft(&draft)?;

    let created = store.create_car(&draft)?;

    let mut result = CmdResult::default();
    match created {
        Some(car) => {
            result.add_message(CmdMessage::success(format!(
                "Car added (id {}): {} {}",
                car.id, car.brand, car.model
            )));
            result.affected_cars.push(car);
        }
        // A 2xx without a body still means the car was created.
        None => result.add_message(CmdMessage::success("Car added.")),
    }

    Ok(refresh_list(store, result))
}
