use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CarStore;

pub fn run<S: CarStore>(store: &S, id: i64) -> Result<CmdResult> {
    let car = store.get_car(id)?;
    Ok(CmdResult::default().with_listed_cars(vec![car]))
}
