use pace_core::entities::{GameEvent, NewsArticle};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaTarget};

/// JSON Schema for the array a `--events` or `--articles` file holds.
pub fn input_schema(target: SchemaTarget) -> serde_json::Value {
    let schema = match target {
        SchemaTarget::Events => schema_for!(Vec<GameEvent>),
        SchemaTarget::Articles => schema_for!(Vec<NewsArticle>),
    };
    schema.to_value()
}

/// Handle `pace schema`. Always JSON; `--format raw` drops the indentation.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = input_schema(args.target);
    let rendered = if flags.format == crate::cli::OutputFormat::Raw {
        serde_json::to_string(&schema)?
    } else {
        serde_json::to_string_pretty(&schema)?
    };
    println!("{rendered}");
    Ok(())
}
