//! # Tsugi Architecture
//!
//! Tsugi is a **UI-agnostic media-tracking library**. The interactive shell
//! is one client of it; the same core could sit behind a TUI or a remote
//! control surface without touching the lower layers.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - The shell loop, rendering, colors, terminal I/O          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, one module per shell command        │
//! │  - Validates input, returns structured CmdResult values     │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine Layer (engine/)                                     │
//! │  - Abstract Engine trait over the tracked list              │
//! │  - LocalEngine (production), MemoryEngine (testing)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two failure channels
//!
//! Commands distinguish local validation failures (bad arguments, unknown
//! filter names) from engine failures (show not found, out-of-range
//! episode, storage trouble). The former come back as error-level messages
//! inside an `Ok(CmdResult)`; the latter are `Err(TsugiError)` values the
//! shell catches and renders at the command boundary. Only a startup
//! failure is fatal.
//!
//! ## Messages
//!
//! Engine work is chatty: long operations report progress through a
//! [`message::MessageHandler`] callback instead of printing. The binary
//! installs a relay that colorizes by source; tests install a null handler.
//!
//! ## Module Overview
//!
//! - [`commands`]: Business logic for each shell command
//! - [`engine`]: The engine trait and its implementations
//! - [`model`]: Core data types (`Show`, statuses, sort keys)
//! - [`session`]: Per-session filter, sort and prompt state
//! - [`tokenize`]: Quoted-argument splitting for command input
//! - [`config`]: Configuration management
//! - [`message`]: Engine-to-UI message callbacks
//! - [`error`]: Error types
//! - [`cli`]: The shell, rendering and styling for the binary

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod message;
pub mod model;
pub mod session;
pub mod tokenize;
