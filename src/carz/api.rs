//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for every carz operation, regardless of the UI driving it.
//!
//! The facade **dispatches** to the right command function and **returns
//! structured types** (`Result<CmdResult>`). It holds no business logic
//! (that lives in `commands/*.rs`), performs no I/O of its own, and never
//! formats output.
//!
//! ## Generic Over CarStore
//!
//! `CarzApi<S: CarStore>` is generic over the storage backend:
//! - Production: `CarzApi<HttpStore>` talking to the registry server
//! - Testing: `CarzApi<InMemoryStore>` simulating it
//!
//! This enables exercising every command without a network.

use crate::commands;
use crate::error::Result;
use crate::form::CarForm;
use crate::store::CarStore;
use std::path::PathBuf;

/// The main API facade for carz operations.
///
/// Generic over `CarStore` to allow different backends. The config
/// directory rides along for the config command, which never touches the
/// store.
pub struct CarzApi<S: CarStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: CarStore> CarzApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn list_cars(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_car(&self, id: i64) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn add_car(&mut self, form: CarForm) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, form)
    }

    pub fn edit_car(&mut self, id: i64, overrides: CarForm) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, overrides)
    }

    pub fn delete_car(&mut self, id: i64, skip_confirm: bool) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id, skip_confirm)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
