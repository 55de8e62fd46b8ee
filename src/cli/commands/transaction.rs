//! Transaction entry, listing, removal, and the confirm-before-replace edit
//! flow.

use colored::Colorize;

use tally_core::{SummaryService, TransactionDraft, TransactionService};
use tally_domain::{CategoryFilter, Transaction};

use crate::cli::core::{CliMode, CommandError};
use crate::cli::forms;
use crate::cli::output;
use crate::cli::shell_context::ShellContext;

pub fn add(context: &mut ShellContext, args: &[String]) -> Result<(), CommandError> {
    let draft = draft_from(context, args, None)?;
    let id = TransactionService::add(&mut context.ledger, draft)?;
    context.save()?;
    output::success(format!("Recorded transaction {id}."));
    Ok(())
}

pub fn list(context: &ShellContext, args: &[String]) -> Result<(), CommandError> {
    let filter = args
        .first()
        .map(|label| CategoryFilter::parse(label))
        .unwrap_or(CategoryFilter::All);
    print_view(context, &filter);
    Ok(())
}

pub fn filter(context: &ShellContext, args: &[String]) -> Result<(), CommandError> {
    let Some(label) = args.first() else {
        return Err(CommandError::Usage("filter <category|All>".into()));
    };
    print_view(context, &CategoryFilter::parse(label));
    Ok(())
}

pub fn remove(context: &mut ShellContext, args: &[String]) -> Result<(), CommandError> {
    let id = parse_id(args)?;
    if TransactionService::remove(&mut context.ledger, id) {
        context.save()?;
        output::success(format!("Removed transaction {id}."));
    } else {
        // Lookup miss is a no-op, not an error.
        output::warning(format!("No transaction with id {id}."));
    }
    Ok(())
}

/// Revise a transaction. The stored entry is only replaced once the new
/// values validate; abandoning the form leaves it untouched.
pub fn edit(context: &mut ShellContext, args: &[String]) -> Result<(), CommandError> {
    let id = parse_id(args)?;
    let Some(prefill) = TransactionService::begin_edit(&context.ledger, id) else {
        output::warning(format!("No transaction with id {id}."));
        return Ok(());
    };

    let draft = draft_from(context, &args[1..], Some(&prefill))?;
    TransactionService::commit_edit(&mut context.ledger, id, draft)?;
    context.save()?;
    output::success(format!("Updated transaction {id}."));
    Ok(())
}

/// Builds a draft from positional arguments, or the interactive form when
/// none are given. Script mode has no terminal to prompt on.
fn draft_from(
    context: &ShellContext,
    args: &[String],
    prefill: Option<&TransactionDraft>,
) -> Result<TransactionDraft, CommandError> {
    if !args.is_empty() {
        return parse_draft(args);
    }
    if context.mode == CliMode::Script {
        return Err(CommandError::Usage(
            "<date> <description> <amount> <income|expense> <category>".into(),
        ));
    }
    forms::transaction_form(context, prefill)
}

fn parse_draft(args: &[String]) -> Result<TransactionDraft, CommandError> {
    if args.len() != 5 {
        return Err(CommandError::Usage(
            "<date> <description> <amount> <income|expense> <category>".into(),
        ));
    }
    let amount: f64 = args[2]
        .parse()
        .map_err(|_| CommandError::Input(format!("`{}` is not a number", args[2])))?;
    let kind = args[3].parse().map_err(CommandError::Input)?;
    Ok(TransactionDraft {
        date: args[0].clone(),
        description: args[1].clone(),
        amount,
        kind,
        category: args[4].clone(),
    })
}

fn parse_id(args: &[String]) -> Result<u64, CommandError> {
    let Some(raw) = args.first() else {
        return Err(CommandError::Usage("<id>".into()));
    };
    raw.parse()
        .map_err(|_| CommandError::Input(format!("`{raw}` is not a transaction id")))
}

fn print_view(context: &ShellContext, filter: &CategoryFilter) {
    let rows = SummaryService::filtered_view(&context.ledger, filter);
    if rows.is_empty() {
        output::info(match filter {
            CategoryFilter::All => "No transactions recorded yet.".to_string(),
            CategoryFilter::Category(label) => format!("No transactions in `{label}`."),
        });
        return;
    }
    for txn in rows {
        output::info(format_row(txn, &context.config.currency));
    }
}

fn format_row(txn: &Transaction, currency: &str) -> String {
    let amount = format!("{:.2} {currency}", txn.amount);
    let amount = if txn.is_income() {
        format!("+{amount}").green()
    } else {
        format!("-{amount}").red()
    };
    format!("  {:>15}  {}: {amount}", txn.id, txn.display_label())
}
