//! Interactive entry forms for add and edit, built on dialoguer.

use dialoguer::{Input, Select};

use tally_core::TransactionDraft;
use tally_domain::TransactionKind;

use crate::cli::core::CommandError;
use crate::cli::shell_context::ShellContext;

const KINDS: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

/// Prompts for all transaction fields, prefilled from `prefill` when
/// revising an existing entry. Validation happens in the core service, not
/// here; the form only guarantees the amount parses as a number.
pub fn transaction_form(
    context: &ShellContext,
    prefill: Option<&TransactionDraft>,
) -> Result<TransactionDraft, CommandError> {
    let theme = context.theme();

    let date: String = Input::with_theme(theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .with_initial_text(prefill.map(|d| d.date.clone()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let description: String = Input::with_theme(theme)
        .with_prompt("Description")
        .with_initial_text(prefill.map(|d| d.description.clone()).unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let amount_text: String = Input::with_theme(theme)
        .with_prompt("Amount")
        .with_initial_text(
            prefill
                .map(|d| d.amount.to_string())
                .unwrap_or_default(),
        )
        .interact_text()?;
    let amount: f64 = amount_text
        .trim()
        .parse()
        .map_err(|_| CommandError::Input(format!("`{amount_text}` is not a number")))?;

    let default_kind = prefill
        .map(|d| KINDS.iter().position(|k| *k == d.kind).unwrap_or(1))
        .unwrap_or(1);
    let kind_index = Select::with_theme(theme)
        .with_prompt("Type")
        .items(&KINDS)
        .default(default_kind)
        .interact()?;

    // The configured list drives the selector; an edited transaction may
    // carry a category outside it, so keep that choice available.
    let mut categories = context.config.categories.clone();
    if let Some(draft) = prefill {
        if !categories.contains(&draft.category) {
            categories.push(draft.category.clone());
        }
    }
    let default_category = prefill
        .and_then(|d| categories.iter().position(|c| *c == d.category))
        .unwrap_or(0);
    let category_index = Select::with_theme(theme)
        .with_prompt("Category")
        .items(&categories)
        .default(default_category)
        .interact()?;

    Ok(TransactionDraft {
        date,
        description,
        amount,
        kind: KINDS[kind_index],
        category: categories[category_index].clone(),
    })
}
