use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::config::CONFIG_KEYS;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "config",
            "Show or change settings",
            "config [show | set <key> <value>]",
            cmd_config,
        ),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            output::section("Settings");
            for (key, value) in context.config.entries() {
                output::line(format!("{key:<20} {value}"));
            }
            output::line(format!(
                "{:<20} {}",
                "file",
                context.config_manager.path().display()
            ));
            Ok(())
        }
        ["set", key, value @ ..] if !value.is_empty() => {
            let mut updated = context.config.clone();
            updated.set(&key.to_ascii_lowercase(), &value.join(" "))?;
            context.config = updated;
            context.persist_config()?;
            output::success(format!("Updated `{key}`."));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(format!(
            "usage: config [show | set <key> <value>] (keys: {})",
            CONFIG_KEYS.join(", ")
        ))),
    }
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first().map(|name| name.to_lowercase()) {
        match context.registry.get(&name) {
            Some(entry) => {
                output::line(format!("{} - {}", entry.name, entry.description));
                output::line(format!("usage: {}", entry.usage));
            }
            None => return Err(CommandError::UnknownCommand(name)),
        }
        return Ok(());
    }

    output::section("Commands");
    for entry in context.registry.list() {
        output::line(format!("{:<12} {}", entry.name, entry.description));
    }
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("FoodSave {}", meta.version));
    let rows = [
        ("Build hash", meta.git_hash),
        ("Built at", meta.timestamp),
        ("Target", meta.target),
        ("Profile", meta.profile),
    ];
    for (label, value) in rows {
        output::line(format!("{label:<12} {value}"));
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
