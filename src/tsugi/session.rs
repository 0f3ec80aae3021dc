use crate::model::{SortKey, STATUS_WATCHING};

const PROMPT_PREFIX: &str = "tsugi";

/// Per-session shell state: the active status filter, the active sort key,
/// and the prompt derived from the filter's label.
///
/// Created once at shell start with defaults and mutated only by the
/// `filter` and `sort` commands. Never persisted.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub filter: i32,
    pub sort: SortKey,
    pub prompt: String,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            filter: STATUS_WATCHING,
            sort: SortKey::default(),
            prompt: prompt_for("Watching"),
        }
    }
}

impl SessionState {
    /// Switches the active filter and re-derives the prompt from its label.
    pub fn set_filter(&mut self, code: i32, label: &str) {
        self.filter = code;
        self.prompt = prompt_for(label);
    }
}

fn prompt_for(label: &str) -> String {
    format!("{} {}> ", PROMPT_PREFIX, label)
}
