use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CarStore;

pub fn run<S: CarStore>(store: &S) -> Result<CmdResult> {
    let cars = store.list_cars()?;
    Ok(CmdResult::default().with_listed_cars(cars))
}
