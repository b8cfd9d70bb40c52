//! # Bitacora Architecture
//!
//! Bitacora is a **UI-agnostic media-log library**: a personal record of
//! films, series, and concerts. The CLI binary (`bita`) is one client of
//! the library, not the library itself.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, renders output, prompts for            │
//! │    confirmation — the only place that touches the terminal  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (display indexes → entries)            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Form (form.rs)             │
//! │  - Business logic over Rust types, no I/O assumptions       │
//! │  - The form holds the transient edit-session state          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Journal + Storage (journal.rs, store/)                     │
//! │  - Journal owns the entry collection and the theme flag     │
//! │  - Storage is a string-keyed slot trait: FileStore in       │
//! │    production, InMemoryStore in tests                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result` types, and never touches stdout, stderr, or the process exit
//! code. Even delete confirmation is a callback the CLI fills in with a
//! prompt. The same core could back a TUI or a web client.
//!
//! ## Persistence Model
//!
//! The whole collection loads once at startup and is serialized back to
//! its storage slot synchronously after every mutation. There is no
//! partial write, no transaction log; an unreadable payload is discarded
//! with a warning and the journal starts empty.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade — entry point for all operations
//! - [`commands`]: business logic for each command
//! - [`form`]: the edit-session state machine and delete confirmation
//! - [`journal`]: the authoritative entry collection
//! - [`store`]: the storage slot abstraction and its backends
//! - [`model`]: core data types (`Entry`, `Category`, `Theme`)
//! - [`dataset`]: the static reference catalog behind title suggestions
//! - [`index`]: display indexing (1 = newest entry)
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod dataset;
pub mod error;
pub mod form;
pub mod index;
pub mod journal;
pub mod model;
pub mod store;
