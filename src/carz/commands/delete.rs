use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CarzError, Result};
use crate::store::CarStore;
use log::debug;
use std::io::{self, Write};

use super::helpers::refresh_list;

pub fn run<S: CarStore>(store: &mut S, id: i64, skip_confirm: bool) -> Result<CmdResult> {
    if !skip_confirm {
        print!("Really delete car {}? [Y] to confirm: ", id);
        io::stdout().flush().map_err(CarzError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(CarzError::Io)?;

        if input.trim() != "Y" {
            debug!("deletion of car {} cancelled", id);
            let mut res = CmdResult::default();
            res.add_message(CmdMessage::info("Operation cancelled."));
            return Ok(res);
        }
    }

    debug!("deleting car {}", id);
    store.delete_car(id)?;
    debug!("car {} deleted, reloading the collection", id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Car (id {}) deleted.", id)));
    Ok(refresh_list(store, result))
}
