use dialoguer::Confirm;

use crate::cli::core::{join_args, CommandError, CommandResult};
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::cli::{output, views};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "recipes",
            "Rank recipes by how much of them you can make",
            "recipes",
            cmd_recipes,
        ),
        CommandEntry::new(
            "recipe",
            "Show ingredients and steps for a recipe",
            "recipe <number|name>",
            cmd_recipe,
        ),
        CommandEntry::new(
            "cook",
            "Mark the inventory items a recipe uses as used",
            "cook <number|name>",
            cmd_cook,
        ),
    ]
}

fn cmd_recipes(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::lines(views::recipes(&context.pantry.ranked_recipes()));
    Ok(())
}

fn cmd_recipe(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let matched = context.resolve_recipe(&recipe_reference(args, "recipe")?)?;
    output::lines(views::recipe_detail(&matched));
    Ok(())
}

fn cmd_cook(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let matched = context.resolve_recipe(&recipe_reference(args, "cook")?)?;
    let consumed = matched.food_ids().len();
    if consumed == 0 {
        return Err(CommandError::InvalidArguments(format!(
            "you have none of the ingredients for `{}`",
            matched.recipe.name
        )));
    }

    if context.mode() == CliMode::Interactive {
        let confirmed = Confirm::with_theme(&context.theme)
            .with_prompt(format!(
                "I cooked {}! Mark {} item(s) as used?",
                matched.recipe.name, consumed
            ))
            .default(true)
            .interact()?;
        if !confirmed {
            output::info("Nothing changed.");
            return Ok(());
        }
    }

    let changed = context.pantry.cook(matched.recipe.id)?;
    output::success(format!(
        "🎉 Cooked {}. {} item(s) saved from the bin.",
        matched.recipe.name, changed
    ));
    Ok(())
}

fn recipe_reference(args: &[&str], command: &str) -> Result<String, CommandError> {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(format!(
            "usage: {command} <number|name>"
        )));
    }
    Ok(join_args(args))
}
