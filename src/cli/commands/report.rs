//! Read-only reports: running totals, the expense chart, category list.

use colored::Colorize;

use tally_core::SummaryService;

use crate::cli::chart;
use crate::cli::output;
use crate::cli::shell_context::ShellContext;

pub fn totals(context: &ShellContext) {
    let totals = SummaryService::totals(&context.ledger);
    let currency = &context.config.currency;
    output::info(format!(
        "Income:  {}",
        format!("{:.2} {currency}", totals.income).green()
    ));
    output::info(format!(
        "Expense: {}",
        format!("{:.2} {currency}", totals.expense).red()
    ));
    output::info(format!(
        "Balance: {}",
        format!("{:.2} {currency}", totals.balance).bold()
    ));
}

pub fn chart(context: &ShellContext) {
    let breakdown = SummaryService::expense_by_category(&context.ledger);
    if breakdown.is_empty() {
        output::info("No expenses recorded yet.");
        return;
    }
    for line in chart::render(&breakdown, &context.config.currency) {
        output::info(line);
    }
}

pub fn categories(context: &ShellContext) {
    for category in &context.config.categories {
        output::info(format!("  {category}"));
    }
}
