use crate::cli::core::CommandResult;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::{output, views};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "stats",
        "Show items, money, CO₂, and water saved",
        "stats",
        cmd_stats,
    )]
}

fn cmd_stats(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::lines(views::stats(&context.pantry.stats(), &context.config));
    Ok(())
}
