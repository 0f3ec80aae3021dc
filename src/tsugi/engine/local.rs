use std::fs;
use std::path::PathBuf;

use crate::engine::{check_range, resolve, title_pattern, Engine};
use crate::error::{Result, TsugiError};
use crate::message::{MessageHandler, Severity};
use crate::model::Show;

/// Engine backed by a JSON list file on disk.
///
/// The list is loaded once at `start` and written back at `unload` when
/// anything changed. Playback is acknowledged rather than performed; a
/// full engine backend would locate and launch the episode file here.
pub struct LocalEngine {
    path: PathBuf,
    shows: Vec<Show>,
    dirty: bool,
    handler: MessageHandler,
}

impl LocalEngine {
    pub fn new(path: PathBuf, handler: MessageHandler) -> Self {
        Self {
            path,
            shows: Vec::new(),
            dirty: false,
            handler,
        }
    }

    fn emit(&self, severity: Severity, body: &str) {
        (self.handler)("Engine", severity, body);
    }

    fn emit_data(&self, severity: Severity, body: &str) {
        (self.handler)("Data", severity, body);
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.shows)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl Engine for LocalEngine {
    fn start(&mut self) -> Result<()> {
        self.emit(Severity::Info, "Reading list...");

        if !self.path.exists() {
            self.emit(Severity::Info, "No list file found; starting empty.");
            return Ok(());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| TsugiError::Fatal(format!("Cannot read {}: {}", self.path.display(), e)))?;
        self.shows = serde_json::from_str(&content)
            .map_err(|e| TsugiError::Fatal(format!("Corrupt list file {}: {}", self.path.display(), e)))?;

        self.emit(Severity::Info, &format!("{} shows loaded.", self.shows.len()));
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
        // The list file is external input; a saturated count must not
        // overflow the "next episode" arithmetic.
        let target = match episode {
            Some(n) => n,
            None => show.my_episodes.saturating_add(1),
        };
        check_range(show, target)?;

        self.emit(
            Severity::Debug,
            &format!("Looking up episode {} of {}", target, show.title),
        );
        self.emit(
            Severity::Info,
            &format!("Playing episode {} of {}.", target, show.title),
        );
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
        self.dirty = true;
        let title = show.title.clone();
        self.emit_data(
            Severity::Info,
            &format!("Set {} to episode {}.", title, episode),
        );
        Ok(())
    }

    fn unload(&mut self) -> Result<()> {
        if self.dirty {
            self.emit(Severity::Info, "Saving list...");
            self.save()?;
            self.dirty = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::null_handler;
    use crate::model::{STATUS_AIRING, STATUS_WATCHING};

    fn seeded(path: PathBuf) -> LocalEngine {
        let mut engine = LocalEngine::new(path, null_handler());
        engine.shows = vec![
            Show {
                id: 1,
                title: "Cowboy Bebop".into(),
                my_episodes: 3,
                episodes: Some(26),
                status: STATUS_WATCHING,
            },
            Show {
                id: 2,
                title: "Planetes".into(),
                my_episodes: 0,
                episodes: None,
                status: STATUS_AIRING,
            },
        ];
        engine
    }

    fn tmp_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("list.json")
    }

    #[test]
    fn starts_empty_without_a_list_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = LocalEngine::new(tmp_path(&dir), null_handler());
        engine.start().unwrap();
        assert!(engine.filter_list(STATUS_WATCHING).unwrap().is_empty());
    }

    #[test]
    fn corrupt_list_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = tmp_path(&dir);
        fs::write(&path, "not json").unwrap();

        let mut engine = LocalEngine::new(path, null_handler());
        let err = engine.start().unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn unload_persists_episode_updates() {
        let dir = tempfile::tempdir().unwrap();
        let path = tmp_path(&dir);

        let mut engine = seeded(path.clone());
        engine.set_episode("1", 4).unwrap();
        engine.unload().unwrap();

        let mut reloaded = LocalEngine::new(path, null_handler());
        reloaded.start().unwrap();
        assert_eq!(reloaded.get_show_info("1").unwrap().my_episodes, 4);
    }

    #[test]
    fn unload_without_changes_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = tmp_path(&dir);
        let mut engine = seeded(path.clone());
        engine.unload().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn set_episode_rejects_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = seeded(tmp_path(&dir));
        let err = engine.set_episode("Cowboy Bebop", 27).unwrap_err();
        assert_eq!(err.kind(), "EngineError");
        // State unchanged.
        assert_eq!(engine.get_show_info("1").unwrap().my_episodes, 3);
    }

    #[test]
    fn set_episode_accepts_any_count_for_unknown_totals() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = seeded(tmp_path(&dir));
        engine.set_episode("Planetes", 99).unwrap();
        assert_eq!(engine.get_show_info("2").unwrap().my_episodes, 99);
    }

    #[test]
    fn play_defaults_to_the_next_episode() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = seeded(tmp_path(&dir));
        let show = engine.get_show_info("1").unwrap();
        assert_eq!(engine.play_episode(&show, None).unwrap(), Some(4));
        assert_eq!(engine.play_episode(&show, Some(1)).unwrap(), Some(1));
    }

    #[test]
    fn play_with_saturated_watched_count_does_not_overflow() {
        let dir = tempfile::tempdir().unwrap();
        let mut engine = seeded(tmp_path(&dir));
        engine.shows[1].my_episodes = u32::MAX;

        let show = engine.get_show_info("2").unwrap();
        assert_eq!(engine.play_episode(&show, None).unwrap(), Some(u32::MAX));
    }

    #[test]
    fn regex_list_matches_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let engine = seeded(tmp_path(&dir));
        let hits = engine.regex_list("^cowboy").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Cowboy Bebop");
    }

    #[test]
    fn regex_list_rejects_bad_patterns() {
        let dir = tempfile::tempdir().unwrap();
        let engine = seeded(tmp_path(&dir));
        assert_eq!(engine.regex_list("[").unwrap_err().kind(), "EngineError");
    }

    #[test]
    fn titles_are_listed_for_completion() {
        let dir = tempfile::tempdir().unwrap();
        let engine = seeded(tmp_path(&dir));
        assert_eq!(engine.regex_list_titles("plan").unwrap(), vec!["Planetes"]);
    }
}
