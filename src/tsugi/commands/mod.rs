//! # Command layer
//!
//! Pure command logic: each module exposes a `run` function that takes the
//! engine and session state, and returns a [`CmdResult`] (or a command-
//! specific outcome). No terminal I/O happens here; the shell decides how
//! to render results, prompt for confirmation, and report errors.
//!
//! Two failure channels:
//! - local validation ("Missing arguments.", "Invalid filter.") comes back
//!   as error-level messages inside an `Ok` result, and
//! - engine domain errors come back as `Err`, caught at the shell's
//!   command boundary.

use crate::model::Show;

pub mod filter;
pub mod list;
pub mod play;
pub mod search;
pub mod sort;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command produced: rows to render and/or messages to print.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub shows: Option<Vec<Show>>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn message(message: CmdMessage) -> Self {
        Self {
            shows: None,
            messages: vec![message],
        }
    }

    pub fn listing(shows: Vec<Show>) -> Self {
        Self {
            shows: Some(shows),
            messages: Vec::new(),
        }
    }
}

pub(crate) const MISSING_ARGUMENTS: &str = "Missing arguments.";
