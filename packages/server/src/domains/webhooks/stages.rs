//! Workflow stages and their board list bindings.

use std::fmt;
use std::str::FromStr;

/// Logical workflow position a board list can stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Todo,
    InProgress,
    Review,
    Done,
    BugTracker,
}

impl Stage {
    /// Lookup order when a list matches more than one stage. First match wins.
    pub const PRIORITY: [Stage; 5] = [
        Stage::Todo,
        Stage::InProgress,
        Stage::Review,
        Stage::Done,
        Stage::BugTracker,
    ];

    /// Phrase completing "<actor> just <verb> <card>".
    pub fn verb_phrase(self) -> &'static str {
        match self {
            Stage::Todo => "put back",
            Stage::InProgress => "started working on",
            Stage::Review => "finished coding",
            Stage::Done => "finished",
            // Trailing space is intentional: messages read "bug:  <card>".
            Stage::BugTracker => "created a new bug: ",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Todo => "todo",
            Stage::InProgress => "in-progress",
            Stage::Review => "review",
            Stage::Done => "done",
            Stage::BugTracker => "bug-tracker",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which field of a Trello list reference is compared against configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListKey {
    #[default]
    Name,
    Id,
}

impl FromStr for ListKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(ListKey::Name),
            "id" => Ok(ListKey::Id),
            other => anyhow::bail!("unknown list key '{}', expected 'name' or 'id'", other),
        }
    }
}

/// Stage → list identifier bindings, loaded once at startup.
///
/// A stage may be left unbound, and several stages may share one list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStageMap {
    pub key: ListKey,
    pub todo: Option<String>,
    pub in_progress: Option<String>,
    pub review: Option<String>,
    pub done: Option<String>,
    pub bug_tracker: Option<String>,
}

impl WorkflowStageMap {
    pub fn new(key: ListKey) -> Self {
        Self {
            key,
            ..Default::default()
        }
    }

    pub fn with(mut self, stage: Stage, list: impl Into<String>) -> Self {
        *self.slot_mut(stage) = Some(list.into());
        self
    }

    pub fn list_for(&self, stage: Stage) -> Option<&str> {
        match stage {
            Stage::Todo => self.todo.as_deref(),
            Stage::InProgress => self.in_progress.as_deref(),
            Stage::Review => self.review.as_deref(),
            Stage::Done => self.done.as_deref(),
            Stage::BugTracker => self.bug_tracker.as_deref(),
        }
    }

    fn slot_mut(&mut self, stage: Stage) -> &mut Option<String> {
        match stage {
            Stage::Todo => &mut self.todo,
            Stage::InProgress => &mut self.in_progress,
            Stage::Review => &mut self.review,
            Stage::Done => &mut self.done,
            Stage::BugTracker => &mut self.bug_tracker,
        }
    }

    /// First stage in [`Stage::PRIORITY`] order bound to `list`.
    pub fn resolve(&self, list: &str) -> Option<Stage> {
        Stage::PRIORITY
            .into_iter()
            .find(|stage| self.list_for(*stage) == Some(list))
    }

    /// Bound lists in priority order, for the startup log.
    pub fn describe(&self) -> String {
        Stage::PRIORITY
            .iter()
            .map(|stage| self.list_for(*stage).unwrap_or("<unset>"))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_earlier_stage() {
        let map = WorkflowStageMap::new(ListKey::Name)
            .with(Stage::Review, "Shared")
            .with(Stage::Done, "Shared");
        assert_eq!(map.resolve("Shared"), Some(Stage::Review));
    }

    #[test]
    fn test_resolve_unbound_list() {
        let map = WorkflowStageMap::new(ListKey::Name).with(Stage::Todo, "Backlog");
        assert_eq!(map.resolve("Icebox"), None);
    }

    #[test]
    fn test_unset_stage_never_matches_empty_name() {
        let map = WorkflowStageMap::new(ListKey::Name);
        assert_eq!(map.resolve(""), None);
    }

    #[test]
    fn test_list_key_parsing() {
        assert_eq!("ID".parse::<ListKey>().unwrap(), ListKey::Id);
        assert_eq!(" name ".parse::<ListKey>().unwrap(), ListKey::Name);
        assert!("title".parse::<ListKey>().is_err());
    }

    #[test]
    fn test_describe_marks_unset_stages() {
        let map = WorkflowStageMap::new(ListKey::Name)
            .with(Stage::Todo, "Backlog")
            .with(Stage::Done, "Shipped");
        assert_eq!(
            map.describe(),
            "Backlog -> <unset> -> <unset> -> Shipped -> <unset>"
        );
    }
}
