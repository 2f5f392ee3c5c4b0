//! # Remote Store Layer
//!
//! This module defines the storage abstraction for carz. Car records live on
//! a remote REST collection; the [`CarStore`] trait captures the five
//! operations the server offers so the rest of the crate never touches HTTP
//! directly.
//!
//! ## Implementations
//!
//! - [`http::HttpStore`]: the production backend. Five thin wrappers over
//!   the collection endpoint with unified error normalization.
//! - [`memory::InMemoryStore`]: a server simulation for tests. Sequential
//!   id assignment, not-found on unknown ids, insertion order preserved.
//!
//! ## Contract notes
//!
//! The wire contract is the playground server's, not a textbook REST one:
//! update is a full-record PUT against the collection root with the id in
//! the body, while get-one and delete address `{endpoint}/{id}`. Mutating
//! operations may answer 2xx without a JSON body, which is why create and
//! update return `Option<Car>`.

use crate::error::Result;
use crate::model::{Car, CarDraft};

pub mod http;
pub mod memory;

/// Abstract interface to the car collection.
pub trait CarStore {
    /// Fetch every record in the collection
    fn list_cars(&self) -> Result<Vec<Car>>;

    /// Fetch one record by id
    fn get_car(&self, id: i64) -> Result<Car>;

    /// Create a record; the server assigns the id. Returns the created
    /// record when the server echoes one back.
    fn create_car(&mut self, draft: &CarDraft) -> Result<Option<Car>>;

    /// Replace the record with the given id. Returns the updated record
    /// when the server echoes one back.
    fn update_car(&mut self, id: i64, draft: &CarDraft) -> Result<Option<Car>>;

    /// Remove the record with the given id
    fn delete_car(&mut self, id: i64) -> Result<()>;
}
