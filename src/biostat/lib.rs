//! # Biostat Architecture
//!
//! Biostat keeps a small collection of biographical records in a CSV
//! file and edits it from the command line. The whole file is read on
//! every invocation, mutated in memory, and written back; there is no
//! long-running process and no concurrent access.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI layer (main.rs + args.rs, binary only)                │
//! │  - Parses flags, picks the operation, prints output        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes│
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command layer (commands/*.rs)                             │
//! │  - One module per operation (create, read, update, delete) │
//! │  - Pure logic over the in-memory Store                     │
//! │  - Returns structured Result types, never prints           │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Core (model, validate, store, codec)                      │
//! │  - Record type and field validation                        │
//! │  - Insertion-ordered Store keyed by normalized name        │
//! │  - CSV codec with atomic whole-file replace                │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! From the command layer inward, code never writes to stdout/stderr and
//! never calls `std::process::exit`. Errors flow out as
//! [`error::BiostatError`], and the binary maps each kind to its own exit
//! code.
//!
//! ## Module Overview
//!
//! - [`model`]: the `Record` type, `Sex`, and name normalization
//! - [`validate`]: raw input → validated `Record`
//! - [`store`]: the in-memory collection for one invocation
//! - [`codec`]: CSV persistence of the whole store
//! - [`commands`]: one module per CRUD operation
//! - [`error`]: error enum and exit-code mapping

pub mod codec;
pub mod commands;
pub mod error;
pub mod model;
pub mod store;
pub mod validate;
