//! # Phonebook Architecture
//!
//! Phonebook is an in-memory contact book driven by line-based commands.
//! Contacts exist only for the lifetime of the process.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Process args, logging, the prompt loop, rendering        │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session's AddressBook                           │
//! │  - Takes raw input lines, returns CmdResult                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Parsing, the command table, one handler per command      │
//! │  - Errors rendered to user text in one place                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage + Model (store/, model.rs)                         │
//! │  - AddressBook: records in insertion order, unique names    │
//! │  - Record, Name, Phone (10-digit validation)                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Everything returns [`error::Result`]. Handlers never let an error reach the
//! prompt loop: [`commands::dispatch`] turns each one into a message via
//! [`commands::render_error`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Parsing, dispatch and one handler per command
//! - [`store`]: The in-memory address book
//! - [`model`]: `Name`, `Phone`, `Record`
//! - [`config`]: The optional JSON config file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
