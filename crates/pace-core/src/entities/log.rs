use serde::{Deserialize, Serialize};

use super::GameEvent;

/// A retained event annotated for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// 1-based running count in chronological order.
    pub sequence_number: u32,
    /// `MM-DD` rendering of the event date.
    pub short_date: String,
    /// Resolved name of the opposing participant, empty when unknown.
    pub counterparty_name: String,
    #[serde(flatten)]
    pub event: GameEvent,
}

/// Chronologically ordered, gaplessly numbered log for one player, one event
/// type and one date window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilteredLog {
    entries: Vec<LogEntry>,
}

impl FilteredLog {
    /// Number the given events `1..=n` in the order supplied.
    ///
    /// Callers must pass events already filtered and sorted; numbering is the
    /// last step so it can never have gaps.
    pub(crate) fn number<F>(events: Vec<GameEvent>, mut annotate: F) -> Self
    where
        F: FnMut(&GameEvent) -> (String, String),
    {
        let entries = events
            .into_iter()
            .zip(1u32..)
            .map(|(event, sequence_number)| {
                let (short_date, counterparty_name) = annotate(&event);
                LogEntry {
                    sequence_number,
                    short_date,
                    counterparty_name,
                    event,
                }
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Final running count, or 0 for an empty log.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.entries.last().map_or(0, |e| e.sequence_number)
    }

    /// The underlying events in log order, suitable for filtering again.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.entries.iter().map(|e| e.event.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a FilteredLog {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
