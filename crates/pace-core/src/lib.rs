//! # pace-core
//!
//! Pure transformations behind the pace MLB tracker.
//!
//! This crate turns raw records into display-ready ones without performing any
//! I/O of its own:
//! - Cumulative event logs (home runs, strikeouts) restricted to a season window
//! - Fail-soft person name resolution over a pluggable directory
//! - Teaser filtering and link de-duplication for news articles
//! - Publication timestamp conversion to a display timezone
//! - Head-to-head series built from two or more logs
//!
//! Every operation is synchronous and stateless; season boundaries are passed
//! in as a [`season::SeasonWindow`] value rather than read from globals.

pub mod compare;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod event_log;
pub mod ids;
pub mod names;
pub mod news;
pub mod season;
pub mod time;
