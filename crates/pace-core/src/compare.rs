//! Head-to-head series across players.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::FilteredLog;

/// One point of a player's cumulative series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonPoint {
    pub player: String,
    pub date: NaiveDate,
    pub sequence_number: u32,
    pub counterparty_name: String,
}

/// Merge labelled logs into one long-form series.
///
/// Returns `None` unless every log has at least one entry, since a comparison
/// against an empty series carries nothing to plot. Points are grouped by log
/// in argument order.
#[must_use]
pub fn head_to_head(logs: &[(&str, &FilteredLog)]) -> Option<Vec<ComparisonPoint>> {
    if logs.is_empty() || logs.iter().any(|(_, log)| log.is_empty()) {
        return None;
    }

    let points = logs
        .iter()
        .flat_map(|(player, log)| {
            log.iter().map(move |entry| ComparisonPoint {
                player: (*player).to_string(),
                date: entry.event.date,
                sequence_number: entry.sequence_number,
                counterparty_name: entry.counterparty_name.clone(),
            })
        })
        .collect();
    Some(points)
}
