//! Cumulative event logs.
//!
//! Restricts a player's raw event stream to the season window and a caller
//! date range, keeps one event type, orders chronologically and numbers the
//! result `1..=n`.

use chrono::NaiveDate;

use crate::entities::{FilteredLog, GameEvent};
use crate::enums::EventType;
use crate::ids::TeamId;
use crate::names::NameResolver;
use crate::season::SeasonWindow;

/// `MM-DD` rendering used for `LogEntry::short_date`.
pub const SHORT_DATE_FORMAT: &str = "%m-%d";

/// Parameters of a single log query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    /// Inclusive lower bound.
    pub start: NaiveDate,
    /// Inclusive upper bound.
    pub end: NaiveDate,
    /// Club of the tracked player; decides the eligible window.
    pub subject_team: TeamId,
    pub target: EventType,
}

impl LogQuery {
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate, subject_team: TeamId, target: EventType) -> Self {
        Self {
            start,
            end,
            subject_team,
            target,
        }
    }

    /// Whether `date` lies in `[start, end]` and in the team's eligible window.
    #[must_use]
    pub fn admits(&self, season: &SeasonWindow, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date) && season.is_eligible(&self.subject_team, date)
    }
}

/// Build the numbered log for one player.
///
/// An empty input returns an empty log before any window or sort work. Events
/// sharing a date keep their input order.
pub fn filter_events<R>(
    events: &[GameEvent],
    query: &LogQuery,
    season: &SeasonWindow,
    names: &R,
) -> FilteredLog
where
    R: NameResolver + ?Sized,
{
    if events.is_empty() {
        return FilteredLog::default();
    }

    let mut retained: Vec<GameEvent> = events
        .iter()
        .filter(|e| e.event_type == query.target && query.admits(season, e.date))
        .cloned()
        .collect();

    // Stable: same-date events have no secondary key.
    retained.sort_by_key(|e| e.date);

    tracing::debug!(
        team = %query.subject_team,
        target = %query.target,
        input = events.len(),
        retained = retained.len(),
        "filtered event log"
    );

    FilteredLog::number(retained, |event| {
        let short_date = event.date.format(SHORT_DATE_FORMAT).to_string();
        let counterparty_name = event
            .counterparty_id
            .map(|id| names.resolve(id))
            .unwrap_or_default();
        (short_date, counterparty_name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::PersonId;
    use crate::names::{PersonName, StaticDirectory};
    use pretty_assertions::assert_eq;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).unwrap()
    }

    fn event(date: NaiveDate, kind: EventType) -> GameEvent {
        GameEvent::new(date, kind, TeamId::new("CHC"), TeamId::new("LAD"))
    }

    fn query(team: &str) -> LogQuery {
        LogQuery::new(d(3, 1), d(10, 1), TeamId::new(team), EventType::HomeRun)
    }

    #[test]
    fn empty_input_gives_empty_log() {
        let log = filter_events(&[], &query("LAD"), &SeasonWindow::default(), &StaticDirectory::new());
        assert!(log.is_empty());
        assert_eq!(log.total(), 0);
    }

    #[test]
    fn same_date_events_keep_input_order() {
        let events = vec![
            event(d(4, 2), EventType::HomeRun).with_counterparty(PersonId(2)),
            event(d(4, 1), EventType::HomeRun).with_counterparty(PersonId(1)),
            event(d(4, 2), EventType::HomeRun).with_counterparty(PersonId(3)),
        ];
        let log = filter_events(&events, &query("NYY"), &SeasonWindow::default(), &StaticDirectory::new());
        let order: Vec<_> = log.iter().map(|e| e.event.counterparty_id).collect();
        assert_eq!(
            order,
            vec![Some(PersonId(1)), Some(PersonId(2)), Some(PersonId(3))]
        );
    }

    #[test]
    fn annotates_short_date_and_names() {
        let names: StaticDirectory = [(PersonId(7), PersonName::new("Shota", "Imanaga"))]
            .into_iter()
            .collect();
        let events = vec![
            event(d(4, 5), EventType::HomeRun).with_counterparty(PersonId(7)),
            event(d(4, 9), EventType::HomeRun),
            event(d(4, 12), EventType::HomeRun).with_counterparty(PersonId(99)),
        ];
        let log = filter_events(&events, &query("LAD"), &SeasonWindow::default(), &names);
        let rows: Vec<_> = log
            .iter()
            .map(|e| (e.sequence_number, e.short_date.as_str(), e.counterparty_name.as_str()))
            .collect();
        assert_eq!(
            rows,
            vec![(1, "04-05", "Shota Imanaga"), (2, "04-09", ""), (3, "04-12", "99")]
        );
    }

    #[test]
    fn caller_range_is_inclusive() {
        let events = vec![
            event(d(4, 1), EventType::HomeRun),
            event(d(4, 10), EventType::HomeRun),
            event(d(4, 11), EventType::HomeRun),
        ];
        let q = LogQuery::new(d(4, 1), d(4, 10), TeamId::new("NYY"), EventType::HomeRun);
        let log = filter_events(&events, &q, &SeasonWindow::default(), &StaticDirectory::new());
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn reversed_range_retains_nothing() {
        let events = vec![event(d(4, 5), EventType::HomeRun)];
        let q = LogQuery::new(d(5, 1), d(4, 1), TeamId::new("NYY"), EventType::HomeRun);
        let log = filter_events(&events, &q, &SeasonWindow::default(), &StaticDirectory::new());
        assert!(log.is_empty());
    }
}
