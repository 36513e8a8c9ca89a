//! # Storidx Architecture
//!
//! Storidx is a **UI-agnostic story-index library** with a CLI client on
//! top. Stories are short texts tokenized into a positional index
//! (`"storyId,position"` → token) and persisted as one JSON document.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
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
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
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
//! ## The positional index
//!
//! Each story's text is normalized (control characters stripped, punctuation
//! blanked, whitespace collapsed, accents optionally folded) and split into
//! tokens; token `i` (1-based) is stored under the composite key
//! `"{story_id},{i}"`. Reconstruction sorts keys numerically and re-joins.
//! Story ids are dense (`0..N-1`); deleting a story renumbers the survivors
//! and rewrites their key prefixes to keep the ids dense.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns
//! `Result<CmdResult>`, and never touches stdout/stderr or exits the
//! process. The same core could serve a TUI or a web UI.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Story`, `StoryId`, `PositionKey`, `Scope`)
//! - [`tokenizer`]: Normalization and positional tokenization
//! - [`config`]: Configuration management
//! - [`editor`]: External editor integration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod store;
pub mod tokenizer;
