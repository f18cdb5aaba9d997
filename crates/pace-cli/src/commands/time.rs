use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TimeArgs;
use crate::context::AppContext;
use crate::output::{Tabular, header_row, output};

#[derive(Debug, Serialize)]
struct TimeResponse {
    raw: String,
    timezone: String,
    formatted: String,
}

impl Tabular for TimeResponse {
    fn headers(&self) -> Vec<String> {
        header_row(&["raw", "timezone", "formatted"])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![self.raw.clone(), self.timezone.clone(), self.formatted.clone()]]
    }
}

/// Handle `pace time`.
pub fn handle(args: &TimeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(
        &TimeResponse {
            raw: args.raw.clone(),
            timezone: ctx.formatter.zone().name().to_string(),
            formatted: ctx.formatter.format(&args.raw),
        },
        flags.format,
    )
}
