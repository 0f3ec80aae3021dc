use crate::engine::Engine;
use crate::error::{Result, TsugiError};
use crate::model::Show;
use crate::tokenize::tokenize;

/// What a `play` request did, and whether the shell should offer to bump
/// the watched count afterwards.
#[derive(Debug)]
pub struct PlayOutcome {
    pub show: Show,
    /// Episode the engine reports as actually played; `None` if playback
    /// did not occur.
    pub played: Option<u32>,
    /// True when this counted as "playing the next episode": no episode
    /// was requested, or the requested one equals `my_episodes + 1`.
    /// Derived from the requested number, not the played one.
    pub playing_next: bool,
}

/// Resolves the show, works out the target episode, and asks the engine
/// to play it. The caller handles the update confirmation.
pub fn run<E: Engine>(engine: &mut E, arg: &str) -> Result<PlayOutcome> {
    let tokens = tokenize(arg);
    let identifier = tokens
        .first()
        .ok_or_else(|| TsugiError::Engine("No show given".to_string()))?;
    let show = engine.get_show_info(identifier)?;

    let (requested, playing_next) = match tokens.get(1) {
        Some(token) => {
            let episode: u32 = token
                .parse()
                .map_err(|_| TsugiError::Engine(format!("Invalid episode number: {}", token)))?;
            (Some(episode), episode == show.my_episodes.saturating_add(1))
        }
        None => (None, true),
    };

    let played = engine.play_episode(&show, requested)?;
    Ok(PlayOutcome {
        show,
        played,
        playing_next,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::memory::MemoryEngine;
    use crate::message::null_handler;

    fn engine() -> MemoryEngine {
        let mut show = Show::new(1, "Cowboy Bebop");
        show.my_episodes = 3;
        show.episodes = Some(26);
        MemoryEngine::with_shows(vec![show], null_handler())
    }

    #[test]
    fn no_episode_argument_plays_the_next_episode() {
        let outcome = run(&mut engine(), "1").unwrap();
        assert_eq!(outcome.played, Some(4));
        assert!(outcome.playing_next);
    }

    #[test]
    fn explicit_next_episode_counts_as_next() {
        let outcome = run(&mut engine(), "1 4").unwrap();
        assert_eq!(outcome.played, Some(4));
        assert!(outcome.playing_next);
    }

    #[test]
    fn explicit_replay_is_not_next() {
        let outcome = run(&mut engine(), "1 1").unwrap();
        assert_eq!(outcome.played, Some(1));
        assert!(!outcome.playing_next);
    }

    #[test]
    fn quoted_titles_resolve() {
        let outcome = run(&mut engine(), r#""Cowboy Bebop" 2"#).unwrap();
        assert_eq!(outcome.show.id, 1);
        assert_eq!(outcome.played, Some(2));
    }

    #[test]
    fn failed_playback_reports_none_but_keeps_next_flag() {
        let mut engine = engine();
        engine.playable = false;
        let outcome = run(&mut engine, "1").unwrap();
        assert_eq!(outcome.played, None);
        assert!(outcome.playing_next);
    }

    #[test]
    fn saturated_watched_count_does_not_overflow() {
        let mut show = Show::new(9, "Endless Eight");
        show.my_episodes = u32::MAX;
        let mut engine = MemoryEngine::with_shows(vec![show], null_handler());

        let outcome = run(&mut engine, "9").unwrap();
        assert_eq!(outcome.played, Some(u32::MAX));
        assert!(outcome.playing_next);
    }

    #[test]
    fn unknown_show_is_a_domain_error() {
        let err = run(&mut engine(), "nadesico").unwrap_err();
        assert_eq!(err.kind(), "EngineError");
    }

    #[test]
    fn garbage_episode_number_is_a_domain_error() {
        let err = run(&mut engine(), "1 four").unwrap_err();
        assert_eq!(err.kind(), "EngineError");
    }
}
