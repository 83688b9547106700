use crate::cli::core::{join_args, parse_date, parse_price, CommandError, CommandResult};
use crate::cli::forms::AddItemForm;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::cli::{output, views};
use crate::domain::{FoodCategory, FoodItemDraft};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "home",
            "Show the dashboard and numbered inventory",
            "home",
            cmd_home,
        ),
        CommandEntry::new(
            "add",
            "Log a food item",
            "add [<name> <category> <YYYY-MM-DD> [price]]",
            cmd_add,
        ),
        CommandEntry::new("use", "Mark an item as used", "use <number|name>", cmd_use),
        CommandEntry::new(
            "waste",
            "Mark an item as wasted",
            "waste <number|name>",
            cmd_waste,
        ),
        CommandEntry::new(
            "categories",
            "List food categories",
            "categories",
            cmd_categories,
        ),
    ]
}

fn cmd_home(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let pantry = &context.pantry;
    let lines = views::home(
        &pantry.urgent_items(),
        &pantry.fresh_items(),
        &pantry.stats(),
        &context.config,
        pantry.today(),
    );
    output::lines(lines);
    Ok(())
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = if args.is_empty() {
        if context.mode() != CliMode::Interactive {
            return Err(CommandError::InvalidArguments(
                "usage: add <name> <category> <YYYY-MM-DD> [price]".into(),
            ));
        }
        AddItemForm::new(&context.theme).run()?
    } else {
        draft_from_args(args)?
    };

    let name = draft.name.clone();
    let id = context.pantry.add_item(draft)?;
    let price = context
        .pantry
        .item(id)
        .map(|item| item.estimated_price)
        .unwrap_or(context.config.default_price);
    output::success(format!(
        "Added `{}` ({:.2} {}).",
        name, price, context.config.currency
    ));
    Ok(())
}

/// Script form: `<name...> <category> <date> [price]`. Names may span several
/// words, so the category is located as the first token that parses as one.
fn draft_from_args(args: &[&str]) -> Result<FoodItemDraft, CommandError> {
    let usage = || {
        CommandError::InvalidArguments("usage: add <name> <category> <YYYY-MM-DD> [price]".into())
    };
    if args.len() < 3 {
        return Err(usage());
    }
    let category_index = (1..args.len())
        .find(|index| args[*index].parse::<FoodCategory>().is_ok())
        .ok_or_else(|| {
            CommandError::InvalidArguments(format!(
                "missing category (one of: {})",
                category_names()
            ))
        })?;
    let name = join_args(&args[..category_index]);
    let category: FoodCategory = args[category_index].parse().map_err(|_| usage())?;
    let rest = &args[category_index + 1..];
    let (date, price) = match rest {
        [date] => (*date, None),
        [date, price] => (*date, parse_price(price)?),
        _ => return Err(usage()),
    };

    let mut draft = FoodItemDraft::new(name, category, parse_date(date)?);
    if let Some(price) = price {
        draft = draft.with_price(price);
    }
    Ok(draft)
}

fn category_names() -> String {
    FoodCategory::ALL
        .iter()
        .map(|category| category.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn cmd_use(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let reference = required_reference(args, "use")?;
    let id = context.resolve_item(&reference)?;
    context.pantry.mark_used(id)?;
    let name = item_name(context, id);
    output::success(format!("✅ `{name}` marked as used."));
    Ok(())
}

fn cmd_waste(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let reference = required_reference(args, "waste")?;
    let id = context.resolve_item(&reference)?;
    context.pantry.mark_wasted(id)?;
    let name = item_name(context, id);
    output::warning(format!("🗑️ `{name}` marked as wasted."));
    Ok(())
}

fn cmd_categories(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::lines(views::categories());
    Ok(())
}

fn required_reference(args: &[&str], command: &str) -> Result<String, CommandError> {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments(format!(
            "usage: {command} <number|name>"
        )));
    }
    Ok(join_args(args))
}

fn item_name(context: &ShellContext, id: uuid::Uuid) -> String {
    context
        .pantry
        .item(id)
        .map(|item| item.name.clone())
        .unwrap_or_default()
}
