//! Terminal output formatting for autogit.
//!
//! Small helpers for consistent, colored output across the workflow steps.
//! Every user-visible failure goes through [`print_error`] so the tool never
//! surfaces a raw stack trace.

// ANSI color codes
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const RED: &str = "\x1b[31m";
pub const GRAY: &str = "\x1b[90m";

pub fn print_header() {
    println!("{CYAN}{BOLD}autogit v{}{RESET}", env!("CARGO_PKG_VERSION"));
    println!();
}

/// Print a clearly marked error message.
pub fn print_error(message: &str) {
    eprintln!("{RED}Error:{RESET} {}", message);
}

pub fn print_warning(message: &str) {
    println!("{YELLOW}{}{RESET}", message);
}

pub fn print_info(message: &str) {
    println!("{BLUE}{}{RESET}", message);
}

pub fn print_success(message: &str) {
    println!("{GREEN}{}{RESET}", message);
}

/// Print one group of working-tree paths under a colored label.
///
/// Skips the group entirely when `paths` is empty.
pub fn print_file_group(label: &str, paths: &[String]) {
    if paths.is_empty() {
        return;
    }
    println!("{YELLOW}{}:{RESET}", label);
    for path in paths {
        println!("  {}", path);
    }
}

/// Print a staged file with its diff stats as `path [+N -M]`.
pub fn print_file_stat(path: &str, insertions: usize, deletions: usize) {
    println!(
        "  {} [{GREEN}+{}{RESET} {RED}-{}{RESET}]",
        path, insertions, deletions
    );
}

/// Print the final push report line:
/// `{ Branch: "main", SHA: "abc1234", Commit: "Fix bugs" }`.
pub fn print_push_report(branch: &str, short_sha: &str, message: &str) {
    println!(
        "\n{{ Branch: \"{GREEN}{}{RESET}\", SHA: \"{GREEN}{}{RESET}\", Commit: \"{GREEN}{}{RESET}\" }}",
        branch, short_sha, message
    );
}
