//! # Libris Architecture
//!
//! Libris is a **UI-agnostic book-catalog library**. The interactive menu
//! is one client of the library, not the other way around.
//!
//! ## The Layer Stack
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (menu.rs, args.rs, wired by main.rs)             │
//! │  - Login prompts, menu loop, terminal I/O                   │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the live catalog         │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic per menu operation                        │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (catalog.rs, model.rs, wire.rs, store/)               │
//! │  - Slot-arena catalog with owning/view semantics            │
//! │  - Length-prefixed binary format, file/in-memory backends   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Owning Catalogs and Search Views
//!
//! The central contract lives in [`catalog`]: inserting into a catalog
//! deep-copies the record (mutating the caller's value later changes
//! nothing), while the `find_by_*` searches produce *view* catalogs whose
//! slots alias the records of the source. Editing a search hit therefore
//! edits the live catalog entry, which is exactly what the "find, then act
//! on a result" menu flow needs. Views can be dropped freely; shared
//! handles keep record lifetimes correct by construction.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result` values, never writes to stdout/stderr, never calls
//! `std::process::exit`, and never assumes a terminal.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each menu operation
//! - [`catalog`]: The ordered slot-arena record store
//! - [`model`]: Core data types (`Entry`, `Field`)
//! - [`wire`]: The binary catalog format
//! - [`store`]: Persistence backends (file and in-memory)
//! - [`session`]: Credentials parsing and login
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
pub mod wire;
