pub mod data;
pub mod report;
pub mod transaction;

use crate::cli::core::{CommandError, LoopControl};
use crate::cli::output;
use crate::cli::registry;
use crate::cli::shell_context::ShellContext;

pub fn dispatch(
    context: &mut ShellContext,
    tokens: &[String],
) -> Result<LoopControl, CommandError> {
    let Some((name, args)) = tokens.split_first() else {
        return Ok(LoopControl::Continue);
    };

    match name.as_str() {
        "add" => transaction::add(context, args)?,
        "list" => transaction::list(context, args)?,
        "filter" => transaction::filter(context, args)?,
        "remove" | "rm" | "delete" => transaction::remove(context, args)?,
        "edit" => transaction::edit(context, args)?,
        "totals" | "summary" => report::totals(context),
        "chart" => report::chart(context),
        "categories" => report::categories(context),
        "export" => data::export(context, args)?,
        "import" => data::import(context, args)?,
        "help" => help(),
        "exit" | "quit" => return Ok(LoopControl::Exit),
        other => {
            let hint = registry::suggest(other)
                .map(|name| format!(" Did you mean `{name}`?"))
                .unwrap_or_default();
            return Err(CommandError::Input(format!(
                "unknown command `{other}`.{hint} Type `help` for the command list."
            )));
        }
    }
    Ok(LoopControl::Continue)
}

fn help() {
    let usage_width = registry::COMMANDS
        .iter()
        .map(|spec| spec.usage.len())
        .max()
        .unwrap_or(0);
    for spec in registry::COMMANDS {
        output::info(format!(
            "  {usage:<usage_width$}  {summary}",
            usage = spec.usage,
            summary = spec.summary,
        ));
    }
}
