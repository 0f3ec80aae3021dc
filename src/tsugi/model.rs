use serde::{Deserialize, Serialize};

pub const STATUS_WATCHING: i32 = 1;
pub const STATUS_COMPLETED: i32 = 2;
pub const STATUS_ON_HOLD: i32 = 3;
pub const STATUS_DROPPED: i32 = 4;
pub const STATUS_PLANNED: i32 = 5;
pub const STATUS_AIRING: i32 = 6;

/// The status table shared by the bundled engine backends:
/// (code, key the user types, display label).
pub const STATUSES: &[(i32, &str, &str)] = &[
    (STATUS_WATCHING, "watching", "Watching"),
    (STATUS_COMPLETED, "completed", "Completed"),
    (STATUS_ON_HOLD, "on_hold", "On Hold"),
    (STATUS_DROPPED, "dropped", "Dropped"),
    (STATUS_PLANNED, "plan_to_watch", "Plan to Watch"),
    (STATUS_AIRING, "airing", "Airing"),
];

/// One tracked show. Owned by the engine; the shell only ever holds
/// snapshots returned per query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Show {
    pub id: u32,
    pub title: String,
    /// Episodes watched so far.
    pub my_episodes: u32,
    /// Total episodes, if known.
    pub episodes: Option<u32>,
    /// Status code understood by the engine (see [`STATUSES`]).
    pub status: i32,
}

impl Show {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            my_episodes: 0,
            episodes: None,
            status: STATUS_WATCHING,
        }
    }
}

/// Field a rendered listing is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Id,
    #[default]
    Title,
    MyEpisodes,
    Episodes,
}

impl SortKey {
    /// Parses one of the four fixed literals accepted by the `sort` command.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(SortKey::Id),
            "title" => Some(SortKey::Title),
            "my_episodes" => Some(SortKey::MyEpisodes),
            "episodes" => Some(SortKey::Episodes),
            _ => None,
        }
    }

    /// Sorts shows ascending by this key.
    pub fn sort(&self, shows: &mut [Show]) {
        match self {
            SortKey::Id => shows.sort_by_key(|s| s.id),
            SortKey::Title => shows.sort_by(|a, b| a.title.cmp(&b.title)),
            SortKey::MyEpisodes => shows.sort_by_key(|s| s.my_episodes),
            SortKey::Episodes => shows.sort_by_key(|s| s.episodes),
        }
    }
}
