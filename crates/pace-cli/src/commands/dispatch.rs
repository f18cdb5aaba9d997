use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Log(args) => commands::log::handle(&args, ctx, flags).await,
        Commands::Compare(args) => commands::compare::handle(&args, ctx, flags).await,
        Commands::News(args) => commands::news::handle(&args, ctx, flags),
        Commands::Time(args) => commands::time::handle(&args, ctx, flags),
        Commands::Teams => commands::teams::handle(ctx, flags).await,
        Commands::Roster(args) => commands::roster::handle(&args, ctx, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
