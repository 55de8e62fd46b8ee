//! Command table used for help output, completion, and typo suggestions.

pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "add",
        usage: "add [<date> <description> <amount> <income|expense> <category>]",
        summary: "Record a transaction (interactive form when no arguments are given)",
    },
    CommandSpec {
        name: "list",
        usage: "list [category]",
        summary: "List transactions, optionally restricted to one category",
    },
    CommandSpec {
        name: "filter",
        usage: "filter <category|All>",
        summary: "Same as `list` with an explicit category",
    },
    CommandSpec {
        name: "remove",
        usage: "remove <id>",
        summary: "Delete a transaction by id",
    },
    CommandSpec {
        name: "edit",
        usage: "edit <id> [<date> <description> <amount> <income|expense> <category>]",
        summary: "Revise a transaction; nothing changes until the new values are confirmed",
    },
    CommandSpec {
        name: "totals",
        usage: "totals",
        summary: "Show income, expense, and balance over the whole ledger",
    },
    CommandSpec {
        name: "chart",
        usage: "chart",
        summary: "Show the expense breakdown by category",
    },
    CommandSpec {
        name: "categories",
        usage: "categories",
        summary: "List the categories offered by the entry form",
    },
    CommandSpec {
        name: "export",
        usage: "export [path]",
        summary: "Write the ledger snapshot as pretty-printed JSON",
    },
    CommandSpec {
        name: "import",
        usage: "import <path>",
        summary: "Replace the ledger with a JSON snapshot file",
    },
    CommandSpec {
        name: "help",
        usage: "help",
        summary: "Show this command list",
    },
    CommandSpec {
        name: "exit",
        usage: "exit",
        summary: "Leave the shell",
    },
];

pub fn command_names() -> Vec<String> {
    COMMANDS.iter().map(|spec| spec.name.to_string()).collect()
}

/// Closest command name for a typo, if any is close enough to be useful.
pub fn suggest(input: &str) -> Option<&'static str> {
    COMMANDS
        .iter()
        .map(|spec| (spec.name, strsim::jaro_winkler(input, spec.name)))
        .filter(|(_, score)| *score > 0.8)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::suggest;

    #[test]
    fn suggest_finds_near_misses() {
        assert_eq!(suggest("tots"), Some("totals"));
        assert_eq!(suggest("exprot"), Some("export"));
        assert_eq!(suggest("zzzzzz"), None);
    }
}
