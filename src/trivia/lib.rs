//! # Trivia Architecture
//!
//! Trivia is the REST backend of a quiz game: it stores questions grouped in
//! categories, lists and searches them page by page, and hands out quiz
//! questions one at a time without repeating any within a session.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  HTTP Layer (server/, wired by main.rs)                     │
//! │  - Routes, request decoding, JSON payloads, status codes    │
//! │  - The ONLY place that knows about HTTP                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the store, page size and random source              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation: list, search, quiz, ...        │
//! │  - Built from pager, categories, quiz and queries           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quiz Sessions Are Stateless
//!
//! The server keeps no session. Each quiz request carries the ids it has
//! already been served, and [`quiz::select_next`] draws from the rest of the
//! category pool. An empty remainder ends the session successfully.
//!
//! ## Testing Strategy
//!
//! 1. **Components and commands**: unit tests next to the code, on
//!    `InMemoryStore` with seeded random sources.
//! 2. **HTTP**: `tests/http_api.rs` drives the router in-process.
//! 3. **Binary**: `tests/cli_seed.rs` runs `trivia seed`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`pager`]: Fixed-size page windows
//! - [`categories`]: Category mapping and "any category" resolution
//! - [`quiz`]: Non-repeating quiz question selection
//! - [`queries`]: Question queries over the store
//! - [`store`]: Storage abstraction, implementations and sample catalog
//! - [`model`]: Core data types (`Question`, `Category`, `QuizCategory`)
//! - [`config`]: Configuration management
//! - [`server`]: axum router and HTTP payloads
//! - [`error`]: Error types

pub mod api;
pub mod categories;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod pager;
pub mod queries;
pub mod quiz;
pub mod server;
pub mod store;
