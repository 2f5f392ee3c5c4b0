//! # Carz Architecture
//!
//! Carz is a **UI-agnostic client library** for a remote car registry. This
//! is not a CLI application that happens to have some library code—it's a
//! library that happens to have a CLI client.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, renders views, handles terminal I/O    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic: extract form, validate, call the store,  │
//! │    re-fetch the list after every mutation                   │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store Layer (store/)                                       │
//! │  - Abstract CarStore trait: the five registry operations    │
//! │  - HttpStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The View Model
//!
//! Every invocation renders exactly one view: the list, one car's details,
//! or plain messages. Mutating commands re-fetch the collection before
//! returning so the CLI can re-render the list—there is no client-side
//! cache to keep consistent.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr (the delete confirmation prompt is
//!   the one deliberate exception)
//! - **Never** calls `std::process::exit`
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests against `InMemoryStore`,
//!    which simulates the server. The lion's share of testing lives here.
//! 2. **HTTP store** (`tests/http_store_test.rs`): the real wire behavior
//!    against an in-process mock of the registry API.
//! 3. **CLI** (`tests/cli_test.rs`): end-to-end runs of the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`config`]: Server URL and collection code configuration
//! - [`error`]: Error types
//! - [`form`]: Field flags → draft record extraction and edit prefill
//! - [`model`]: Core data types (`Car`, `CarDraft`)
//! - [`store`]: Storage abstraction and implementations
//! - [`validate`]: Draft validation rules

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod store;
pub mod validate;
