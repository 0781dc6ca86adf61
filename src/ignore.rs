//! Idempotent `.gitignore` reconciliation.
//!
//! Compares a canonical rule list against the rules already present in the
//! repository's ignore file and appends whatever subset the user selects.
//! Running twice in a row with no intervening edits reports "already up to
//! date" on the second run.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::output::{print_info, print_success, print_warning};
use crate::prompt;

/// File name of the ignore file at the repository root.
pub const IGNORE_FILE: &str = ".gitignore";

/// Built-in rules offered on every run.
pub const CANONICAL_RULES: &[&str] = &[
    "node_modules/",
    "dist/",
    ".env",
    "*.log",
    "coverage/",
    ".DS_Store",
    "git_history.json",
];

/// The canonical list extended with configured extras, duplicates removed,
/// order preserved.
pub fn canonical_with_extras(extras: &[String]) -> Vec<String> {
    let mut rules: Vec<String> = CANONICAL_RULES.iter().map(|r| r.to_string()).collect();
    for extra in extras {
        if !rules.iter().any(|r| r == extra) {
            rules.push(extra.clone());
        }
    }
    rules
}

/// Parse ignore-file text into its non-empty rule lines.
pub fn parse_rules(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Rules from `canonical` not yet present in `existing`, in canonical order.
pub fn missing_rules<'a>(canonical: &'a [String], existing: &[String]) -> Vec<&'a str> {
    canonical
        .iter()
        .filter(|rule| !existing.iter().any(|e| e == *rule))
        .map(String::as_str)
        .collect()
}

/// Write the selected rules to the ignore file: a fresh file containing
/// exactly the selection, or an append preserving prior content.
pub fn apply_selection(path: &Path, selected: &[&str], file_existed: bool) -> Result<()> {
    let content = selected.join("\n");
    if file_existed {
        let mut existing = fs::read_to_string(path)?;
        existing.push('\n');
        existing.push_str(&content);
        fs::write(path, existing)?;
    } else {
        fs::write(path, content)?;
    }
    Ok(())
}

/// Reconcile the repository's ignore file against `canonical`.
///
/// When the file is absent the user is asked whether to create one; declining
/// still offers the selection, and the file is only written if the selection
/// is non-empty.
pub fn reconcile(repo_root: &Path, canonical: &[String]) -> Result<()> {
    let path = repo_root.join(IGNORE_FILE);
    let file_exists = path.exists();

    if !file_exists {
        // Selection is offered either way; nothing is written until rules
        // are actually chosen below.
        let _ = prompt::confirm("No .gitignore file found. Would you like to create one?", true);
    }

    let existing = if file_exists {
        parse_rules(&fs::read_to_string(&path)?)
    } else {
        Vec::new()
    };

    let missing = missing_rules(canonical, &existing);
    if missing.is_empty() {
        print_info(".gitignore is already up to date.");
        return Ok(());
    }

    let picked = prompt::multi_select("Select rules to add to .gitignore:", &missing);
    if picked.is_empty() {
        print_warning("No new entries were added to .gitignore.");
        return Ok(());
    }

    let selected: Vec<&str> = picked.iter().map(|&i| missing[i]).collect();
    apply_selection(&path, &selected, file_exists)?;

    if file_exists {
        print_success("Updated .gitignore.");
    } else {
        print_success("Created .gitignore with selected entries.");
    }
    Ok(())
}
