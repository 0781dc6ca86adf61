//! Interactive stdin prompts.
//!
//! The widgets mirror a conventional prompt toolkit: yes/no confirmation,
//! single choice from a numbered list, multi-selection, and free-form input
//! with a default. Selections are entered as numbers, so there is no cursor
//! wraparound to disable; a multi-select never loops past its last entry.

use std::io::{self, Write};

use crate::output::{BOLD, CYAN, GRAY, GREEN, RESET, YELLOW};

/// Ask a yes/no question and return the user's choice.
pub fn confirm(question: &str, default: bool) -> bool {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    print!("{CYAN}?{RESET} {} {GRAY}{}{RESET} ", question, hint);
    io::stdout().flush().unwrap();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return default;
    }

    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

/// Ask user to select one option from a list.
/// Returns the index of the selected option (0-based).
pub fn select(question: &str, options: &[&str], default: usize) -> usize {
    println!("{CYAN}?{RESET} {}", question);
    println!();

    for (i, option) in options.iter().enumerate() {
        let marker = if i == default {
            format!("{GREEN}>{RESET}")
        } else {
            " ".to_string()
        };
        println!("  {} {BOLD}{}{RESET}. {}", marker, i + 1, option);
    }

    loop {
        println!();
        print!("{GRAY}Enter choice [{}]:{RESET} ", default + 1);
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return default;
        }

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return default;
        }

        match trimmed.parse::<usize>() {
            Ok(n) if n >= 1 && n <= options.len() => return n - 1,
            _ => {
                println!(
                    "{YELLOW}Please enter a number between 1 and {}{RESET}",
                    options.len()
                );
            }
        }
    }
}

/// Ask user to select any subset of options.
/// Returns the 0-based indices of the selected options, in list order.
pub fn multi_select(question: &str, options: &[&str]) -> Vec<usize> {
    println!("{CYAN}?{RESET} {}", question);
    println!();

    for (i, option) in options.iter().enumerate() {
        println!("    {BOLD}{}{RESET}. {}", i + 1, option);
    }

    loop {
        println!();
        print!("{GRAY}Enter numbers separated by commas (empty for none):{RESET} ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return Vec::new();
        }

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        match parse_multi_selection(trimmed, options.len()) {
            Some(indices) => return indices,
            None => {
                println!(
                    "{YELLOW}Please enter numbers between 1 and {}, separated by commas{RESET}",
                    options.len()
                );
            }
        }
    }
}

/// Ask for a line of text, falling back to `default` on empty input.
pub fn input(question: &str, default: &str) -> String {
    print!("{CYAN}?{RESET} {} {GRAY}[{}]{RESET} ", question, default);
    io::stdout().flush().unwrap();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return default.to_string();
    }

    let trimmed = line.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parse a comma-separated selection like "1,3" against a list of `len` options.
///
/// Returns `None` if any token is not a number in range. Duplicates are
/// collapsed and the result is sorted so it follows the displayed order.
fn parse_multi_selection(input: &str, len: usize) -> Option<Vec<usize>> {
    let mut indices = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<usize>() {
            Ok(n) if n >= 1 && n <= len => indices.push(n - 1),
            _ => return None,
        }
    }
    indices.sort_unstable();
    indices.dedup();
    Some(indices)
}
