use crate::engine::{check_range, resolve, title_pattern, Engine};
use crate::error::Result;
use crate::message::{MessageHandler, Severity};
use crate::model::Show;

/// In-memory engine for tests. Same matching and validation behavior as
/// the file-backed engine, no persistence.
pub struct MemoryEngine {
    shows: Vec<Show>,
    /// Whether episode files are "present"; when false, `play_episode`
    /// reports that playback did not occur.
    pub playable: bool,
    handler: MessageHandler,
}

impl MemoryEngine {
    pub fn new(handler: MessageHandler) -> Self {
        Self {
            shows: Vec::new(),
            playable: true,
            handler,
        }
    }

    pub fn with_shows(shows: Vec<Show>, handler: MessageHandler) -> Self {
        Self {
            shows,
            playable: true,
            handler,
        }
    }
}

impl Engine for MemoryEngine {
    fn start(&mut self) -> Result<()> {
        (self.handler)("Engine", Severity::Info, "Using in-memory list.");
        Ok(())
    }

    fn filter_list(&self, status: i32) -> Result<Vec<Show>> {
        Ok(self
            .shows
            .iter()
            .filter(|s| s.status == status)
            .cloned()
            .collect())
    }

    fn regex_list(&self, pattern: &str) -> Result<Vec<Show>> {
        let re = title_pattern(pattern)?;
        Ok(self
            .shows
            .iter()
            .filter(|s| re.is_match(&s.title))
            .cloned()
            .collect())
    }

    fn regex_list_titles(&self, fragment: &str) -> Result<Vec<String>> {
        let re = title_pattern(fragment)?;
        Ok(self
            .shows
            .iter()
            .filter(|s| re.is_match(&s.title))
            .map(|s| s.title.clone())
            .collect())
    }

    fn get_show_info(&self, identifier: &str) -> Result<Show> {
        resolve(&self.shows, identifier).cloned()
    }

    fn play_episode(&mut self, show: &Show, episode: Option<u32>) -> Result<Option<u32>> {
        if !self.playable {
            return Ok(None);
        }
        let target = episode.unwrap_or_else(|| show.my_episodes.saturating_add(1));
        check_range(show, target)?;
        Ok(Some(target))
    }

    fn set_episode(&mut self, identifier: &str, episode: u32) -> Result<()> {
        let id = resolve(&self.shows, identifier)?.id;
        let show = self
            .shows
            .iter_mut()
            .find(|s| s.id == id)
            .expect("resolved id is present");
        check_range(show, episode)?;
        show.my_episodes = episode;
        Ok(())
    }

    fn unload(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::null_handler;

    #[test]
    fn unplayable_engine_reports_no_playback() {
        let show = Show::new(1, "Texhnolyze");
        let mut engine = MemoryEngine::with_shows(vec![show.clone()], null_handler());
        engine.playable = false;
        assert_eq!(engine.play_episode(&show, None).unwrap(), None);
    }

    #[test]
    fn set_episode_updates_the_list() {
        let mut engine = MemoryEngine::with_shows(vec![Show::new(7, "Kaiba")], null_handler());
        engine.set_episode("Kaiba", 3).unwrap();
        assert_eq!(engine.get_show_info("7").unwrap().my_episodes, 3);
    }
}
