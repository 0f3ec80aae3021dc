use crate::commands::{CmdMessage, CmdResult, MISSING_ARGUMENTS};
use crate::engine::Engine;
use crate::error::Result;
use crate::session::SessionState;

/// Regex search over the whole list, sorted by the session sort key.
/// Pattern matching itself is the engine's business; an invalid pattern
/// surfaces as a domain error from there.
pub fn run<E: Engine>(engine: &E, session: &SessionState, pattern: &str) -> Result<CmdResult> {
    if pattern.is_empty() {
        return Ok(CmdResult::message(CmdMessage::error(MISSING_ARGUMENTS)));
    }

    let mut shows = engine.regex_list(pattern)?;
    session.sort.sort(&mut shows);
    Ok(CmdResult::listing(shows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::memory::MemoryEngine;
    use crate::message::null_handler;
    use crate::model::Show;

    fn engine() -> MemoryEngine {
        MemoryEngine::with_shows(
            vec![
                Show::new(1, "Mushishi"),
                Show::new(2, "Monster"),
                Show::new(3, "Akira"),
            ],
            null_handler(),
        )
    }

    #[test]
    fn matches_are_listed_sorted() {
        let session = SessionState::default();
        let shows = run(&engine(), &session, "^m").unwrap().shows.unwrap();
        assert_eq!(shows.len(), 2);
        assert_eq!(shows[0].title, "Monster");
    }

    #[test]
    fn empty_pattern_is_missing_arguments() {
        let session = SessionState::default();
        let result = run(&engine(), &session, "").unwrap();
        assert!(result.shows.is_none());
        assert_eq!(result.messages[0].content, "Missing arguments.");
    }

    #[test]
    fn invalid_pattern_surfaces_as_domain_error() {
        let session = SessionState::default();
        let err = run(&engine(), &session, "[").unwrap_err();
        assert_eq!(err.kind(), "EngineError");
    }
}
