//! Records flowing through the pace pipeline.
//!
//! `GameEvent` and `NewsArticle` are inputs and derive `JsonSchema` so the CLI
//! can publish the expected shape of its input files. `FilteredLog` is derived
//! output and is rebuilt per query.

mod game_event;
mod log;
mod news;

pub use game_event::GameEvent;
pub use log::{FilteredLog, LogEntry};
pub use news::NewsArticle;
