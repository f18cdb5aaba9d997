//! Scenario tests for event-log construction against the 2025 season window.

use chrono::NaiveDate;
use pace_core::entities::{FilteredLog, GameEvent};
use pace_core::enums::{EventType, Tracker};
use pace_core::event_log::{LogQuery, filter_events};
use pace_core::ids::{PersonId, TeamId};
use pace_core::names::{NameResolver, PersonName, StaticDirectory};
use pace_core::season::SeasonWindow;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn d(m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, m, day).unwrap()
}

fn ev(date: NaiveDate, label: &str, team: &str) -> GameEvent {
    GameEvent::new(
        date,
        EventType::from_label(label),
        TeamId::new(team),
        TeamId::new("OPP"),
    )
}

fn run(events: &[GameEvent], team: &str, tracker: Tracker, start: NaiveDate, end: NaiveDate) -> FilteredLog {
    let query = LogQuery::new(start, end, TeamId::new(team), tracker.target());
    filter_events(events, &query, &SeasonWindow::default(), &StaticDirectory::new())
}

/// A season of mixed outcomes, deliberately out of order.
fn season_events(team: &str) -> Vec<GameEvent> {
    vec![
        ev(d(5, 2), "home_run", team),
        ev(d(3, 18), "home_run", team),
        ev(d(3, 19), "strikeout", team),
        ev(d(3, 22), "home_run", team),
        ev(d(4, 11), "field_out", team),
        ev(d(3, 27), "home_run", team),
        ev(d(4, 11), "strikeout", team),
        ev(d(3, 19), "home_run", team),
        ev(d(6, 30), "home_run", team),
    ]
}

#[test]
fn overseas_opener_scenario() {
    let events = vec![
        ev(d(3, 19), "home_run", "LAD"),
        ev(d(3, 25), "strikeout", "LAD"),
        ev(d(3, 28), "home_run", "LAD"),
    ];
    let log = run(&events, "LAD", Tracker::HomeRuns, d(3, 18), d(10, 1));

    let rows: Vec<_> = log.iter().map(|e| (e.sequence_number, e.event.date)).collect();
    assert_eq!(rows, vec![(1, d(3, 19)), (2, d(3, 28))]);
}

#[rstest]
#[case("LAD", Tracker::HomeRuns)]
#[case("CHC", Tracker::Strikeouts)]
#[case("NYY", Tracker::HomeRuns)]
#[case("SEA", Tracker::Strikeouts)]
fn sequence_numbers_are_gapless(#[case] team: &str, #[case] tracker: Tracker) {
    let log = run(&season_events(team), team, tracker, d(1, 1), d(12, 31));
    let numbers: Vec<u32> = log.iter().map(|e| e.sequence_number).collect();
    let expected: Vec<u32> = (1..=u32::try_from(log.len()).unwrap()).collect();
    assert_eq!(numbers, expected);
    assert_eq!(log.total() as usize, log.len());

    let dates: Vec<_> = log.iter().map(|e| e.event.date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[test]
fn regular_team_never_counts_pre_opening_dates() {
    // Caller range deliberately covers the overseas series.
    let log = run(&season_events("NYY"), "NYY", Tracker::HomeRuns, d(3, 1), d(12, 31));
    assert!(log.iter().all(|e| e.event.date >= d(3, 27)));
    assert_eq!(log.len(), 3);
}

#[test]
fn overseas_team_counts_overseas_dates_but_not_the_gap() {
    let log = run(&season_events("LAD"), "LAD", Tracker::HomeRuns, d(3, 1), d(12, 31));
    let dates: Vec<_> = log.iter().map(|e| e.event.date).collect();
    assert_eq!(dates, vec![d(3, 18), d(3, 19), d(3, 27), d(5, 2), d(6, 30)]);
}

#[test]
fn overseas_dates_still_respect_caller_range() {
    let log = run(&season_events("CHC"), "CHC", Tracker::HomeRuns, d(3, 19), d(4, 30));
    let dates: Vec<_> = log.iter().map(|e| e.event.date).collect();
    assert_eq!(dates, vec![d(3, 19), d(3, 27)]);
}

#[rstest]
#[case("LAD")]
#[case("NYY")]
fn refiltering_is_idempotent(#[case] team: &str) {
    let first = run(&season_events(team), team, Tracker::HomeRuns, d(3, 1), d(9, 30));
    let second = run(&first.events(), team, Tracker::HomeRuns, d(3, 1), d(9, 30));
    assert_eq!(first, second);
}

#[test]
fn strikeout_log_names_batters() {
    let directory: StaticDirectory = [(PersonId(665_742), PersonName::new("Juan", "Soto"))]
        .into_iter()
        .collect();
    let events = vec![
        ev(d(4, 1), "strikeout", "LAD").with_counterparty(PersonId(665_742)),
        ev(d(4, 1), "strikeout", "LAD").with_counterparty(PersonId(-1)),
        ev(d(4, 2), "strikeout", "LAD"),
    ];
    let query = LogQuery::new(d(3, 18), d(10, 1), TeamId::new("LAD"), EventType::Strikeout);
    let log = filter_events(&events, &query, &SeasonWindow::default(), &directory);

    let names: Vec<_> = log.iter().map(|e| e.counterparty_name.as_str()).collect();
    assert_eq!(names, vec!["Juan Soto", "-1", ""]);
}

#[test]
fn unresolvable_ids_resolve_to_their_text() {
    let directory = StaticDirectory::new();
    for id in [-1_i64, 0, 999_999_999] {
        let name = directory.resolve(PersonId(id));
        assert_eq!(name, id.to_string());
        assert!(!name.is_empty());
    }
}

#[test]
fn hypothetical_season_window() {
    // 2024 Seoul Series: LAD and SD on March 20-21, opening day March 28.
    let seoul = SeasonWindow::new(
        vec![
            NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 21).unwrap(),
        ],
        NaiveDate::from_ymd_opt(2024, 3, 28).unwrap(),
        vec![TeamId::new("LAD"), TeamId::new("SD")],
    )
    .unwrap();
    let events = vec![
        GameEvent::new(
            NaiveDate::from_ymd_opt(2024, 3, 21).unwrap(),
            EventType::HomeRun,
            TeamId::new("SD"),
            TeamId::new("LAD"),
        ),
        GameEvent::new(
            NaiveDate::from_ymd_opt(2024, 4, 3).unwrap(),
            EventType::HomeRun,
            TeamId::new("SD"),
            TeamId::new("SF"),
        ),
    ];
    let query = LogQuery::new(
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
        TeamId::new("SD"),
        EventType::HomeRun,
    );

    let sd = filter_events(&events, &query, &seoul, &StaticDirectory::new());
    assert_eq!(sd.len(), 2);

    let chc_query = LogQuery {
        subject_team: TeamId::new("CHC"),
        ..query
    };
    let chc = filter_events(&events, &chc_query, &seoul, &StaticDirectory::new());
    assert_eq!(chc.len(), 1);
    assert_eq!(chc.entries()[0].short_date, "04-03");
}
