//! # Engine layer
//!
//! The shell talks to a stateful engine that owns the tracking list. The
//! [`Engine`] trait is that contract: the shell never stores or mutates a
//! [`Show`] itself, it only asks the engine for snapshots and requests
//! mutations through the trait.
//!
//! ## Implementations
//!
//! - [`local::LocalEngine`]: list kept in a JSON file on disk
//! - [`memory::MemoryEngine`]: in-memory list for tests
//!
//! Engines report progress through the [`MessageHandler`] callback given at
//! construction; the shell wires that callback to the message relay.

use std::collections::{BTreeMap, HashMap};

use regex::{Regex, RegexBuilder};

use crate::error::{Result, TsugiError};
use crate::model::{Show, STATUSES};

pub mod local;
pub mod memory;

/// Compiles a user-supplied pattern for case-insensitive title matching.
/// A malformed pattern is a domain error, surfaced like any other engine
/// failure.
pub(crate) fn title_pattern(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| TsugiError::Engine(format!("Invalid pattern: {}", e)))
}

/// Rejects an episode number beyond a show's known total. Shows with an
/// unknown total accept any episode.
pub(crate) fn check_range(show: &Show, episode: u32) -> Result<()> {
    if let Some(total) = show.episodes {
        if episode > total {
            return Err(TsugiError::Engine(format!(
                "Episode {} is out of range for {} (1-{})",
                episode, show.title, total
            )));
        }
    }
    Ok(())
}

/// Resolves an identifier to a show: a numeric identifier matches on id,
/// anything else matches titles case-insensitively (exact match first,
/// then first substring match).
pub(crate) fn resolve<'a>(shows: &'a [Show], identifier: &str) -> Result<&'a Show> {
    if let Ok(id) = identifier.parse::<u32>() {
        return shows
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| TsugiError::Engine(format!("Show not found: {}", identifier)));
    }

    let needle = identifier.to_lowercase();
    shows
        .iter()
        .find(|s| s.title.to_lowercase() == needle)
        .or_else(|| shows.iter().find(|s| s.title.to_lowercase().contains(&needle)))
        .ok_or_else(|| TsugiError::Engine(format!("Show not found: {}", identifier)))
}

pub trait Engine {
    /// Loads the tracking list. An `Err` here is fatal: the shell refuses
    /// to start its loop.
    fn start(&mut self) -> Result<()>;

    /// Ordered mapping of status code to display label.
    fn statuses(&self) -> BTreeMap<i32, String> {
        STATUSES
            .iter()
            .map(|&(code, _, label)| (code, label.to_string()))
            .collect()
    }

    /// Mapping of user-typed status key to code.
    fn statuses_keys(&self) -> HashMap<String, i32> {
        STATUSES
            .iter()
            .map(|&(code, key, _)| (key.to_string(), code))
            .collect()
    }

    /// All shows with the given status code.
    fn filter_list(&self, status: i32) -> Result<Vec<Show>>;

    /// Shows whose title matches the regular expression `pattern`.
    fn regex_list(&self, pattern: &str) -> Result<Vec<Show>>;

    /// Titles matching `fragment`, for completion.
    fn regex_list_titles(&self, fragment: &str) -> Result<Vec<String>>;

    /// Resolves a numeric id or a (fuzzy) title to a show.
    fn get_show_info(&self, identifier: &str) -> Result<Show>;

    /// Plays `episode` of `show`, or the next unwatched episode when `None`.
    /// Returns the episode actually played, or `None` if playback did not
    /// occur (e.g. no episode file).
    fn play_episode(&mut self, show: &Show, episode: Option<u32>) -> Result<Option<u32>>;

    /// Sets the watched-episode count of the show named by `identifier`.
    fn set_episode(&mut self, identifier: &str, episode: u32) -> Result<()>;

    /// Orderly shutdown: flush pending changes.
    fn unload(&mut self) -> Result<()>;
}
