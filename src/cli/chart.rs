//! Terminal bar breakdown of expenses by category. Stands in for the pie
//! chart of the original UI, fed by the same aggregation.

use std::collections::BTreeMap;

const BAR_WIDTH: usize = 40;

/// Renders one aligned line per category: label, proportional bar, share,
/// and amount. Returns plain strings; callers decide how to print them.
pub fn render(breakdown: &BTreeMap<String, f64>, currency: &str) -> Vec<String> {
    let total: f64 = breakdown.values().sum();
    let label_width = breakdown
        .keys()
        .map(|label| label.len())
        .max()
        .unwrap_or(0);

    breakdown
        .iter()
        .map(|(label, amount)| {
            let share = if total > 0.0 { amount / total } else { 0.0 };
            let filled = ((share * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
            format!(
                "{label:<label_width$}  {bar:<bar_width$}  {percent:>5.1}%  {amount:.2} {currency}",
                bar = "#".repeat(filled),
                bar_width = BAR_WIDTH,
                percent = share * 100.0,
            )
        })
        .collect()
}
