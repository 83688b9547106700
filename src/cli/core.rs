//! Command dispatch, error reporting, and argument helpers shared by handlers.

use chrono::NaiveDate;
use strsim::levenshtein;
use thiserror::Error;
use uuid::Uuid;

use crate::cli::{output, shell_context::ShellContext};
use crate::core::errors::{CliError, FoodError};
use crate::core::services::{RecipeMatch, ServiceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error(transparent)]
    Core(#[from] FoodError),
    #[error(transparent)]
    Cli(#[from] CliError),
    /// Raised by `exit`; the shell loop turns it into [`LoopControl::Exit`].
    #[error("exit requested")]
    ExitRequested,
}

impl From<ServiceError> for CommandError {
    fn from(err: ServiceError) -> Self {
        CommandError::Core(err.into())
    }
}

impl From<dialoguer::Error> for CommandError {
    fn from(err: dialoguer::Error) -> Self {
        CommandError::Cli(err.into())
    }
}

pub type CommandResult = Result<(), CommandError>;

/// Largest edit distance still offered as a "did you mean" suggestion.
const SUGGESTION_DISTANCE: usize = 2;

impl ShellContext {
    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let handler = self
            .registry
            .handler(command)
            .ok_or_else(|| CommandError::UnknownCommand(command.to_string()))?;
        tracing::debug!(command, ?args, "dispatching command");
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        tracing::warn!(error = %err, "command failed");
        match &err {
            CommandError::UnknownCommand(name) => {
                output::error(&err);
                if let Some(suggestion) = self.suggest_command(name) {
                    output::info(format!("Did you mean `{suggestion}`?"));
                } else {
                    output::info("Type `help` to list commands.");
                }
            }
            _ => output::error(&err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) -> Option<&'static str> {
        let needle = input.to_ascii_lowercase();
        self.registry
            .names()
            .map(|name| (name, levenshtein(name, &needle)))
            .filter(|(_, distance)| *distance <= SUGGESTION_DISTANCE)
            .min_by_key(|(_, distance)| *distance)
            .map(|(name, _)| name)
    }

    /// Resolves an item reference: a 1-based position in the home listing, or an
    /// active item's name (case-insensitive).
    pub(crate) fn resolve_item(&self, reference: &str) -> Result<Uuid, CommandError> {
        let listing = self.pantry.home_listing();
        if let Ok(position) = reference.parse::<usize>() {
            return listing
                .get(position.wrapping_sub(1))
                .map(|item| item.id)
                .ok_or_else(|| {
                    CommandError::InvalidArguments(format!(
                        "no item #{position}; run `home` to see the numbered inventory"
                    ))
                });
        }
        listing
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(reference.trim()))
            .map(|item| item.id)
            .ok_or_else(|| CommandError::Core(FoodError::ItemNotFound(reference.to_string())))
    }

    /// Resolves a recipe reference: a 1-based position in the ranked list, or a recipe name.
    pub(crate) fn resolve_recipe(&self, reference: &str) -> Result<RecipeMatch, CommandError> {
        let mut ranked = self.pantry.ranked_recipes();
        let index = if let Ok(position) = reference.parse::<usize>() {
            if position == 0 || position > ranked.len() {
                return Err(CommandError::InvalidArguments(format!(
                    "no recipe #{position}; run `recipes` to see the ranked list"
                )));
            }
            position - 1
        } else {
            ranked
                .iter()
                .position(|m| m.recipe.name.eq_ignore_ascii_case(reference.trim()))
                .ok_or_else(|| FoodError::RecipeNotFound(reference.to_string()))?
        };
        Ok(ranked.swap_remove(index))
    }
}

pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("`{value}` is not a date (expected YYYY-MM-DD)"))
    })
}

/// Parses an optional price; blank input means "use the default".
pub(crate) fn parse_price(value: &str) -> Result<Option<f64>, CommandError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(Some(price)),
        _ => Err(CommandError::InvalidArguments(format!(
            "`{value}` is not a valid price"
        ))),
    }
}

pub(crate) fn join_args(args: &[&str]) -> String {
    args.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(
            parse_date("2025-06-02").unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
        );
        assert!(parse_date("02/06/2025").is_err());
    }

    #[test]
    fn price_parsing_allows_blank() {
        assert_eq!(parse_price("").unwrap(), None);
        assert_eq!(parse_price("12.5").unwrap(), Some(12.5));
        assert!(parse_price("abc").is_err());
        assert!(parse_price("-2").is_err());
    }
}
