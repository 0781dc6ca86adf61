//! Staging step: automatic or manual selection of candidate files.

use crate::error::Result;
use crate::git::Git;
use crate::inspect;
use crate::output::{print_file_stat, print_info, print_success, print_warning};
use crate::prompt;

/// Stage candidate files, either all of them or a user-selected subset, and
/// return the list of paths that were actually staged.
///
/// Prints each staged file's diff stats afterwards unless `show_stats` is
/// off. Whether the run proceeds to commit is not decided here.
pub fn plan(git: &Git, candidates: &[String], show_stats: bool) -> Result<Vec<String>> {
    if candidates.is_empty() {
        print_info("Project is up to date.");
        return Ok(Vec::new());
    }

    let automatic = prompt::confirm("Add files automatically (y) or manually (n)?", true);

    let staged = if automatic {
        resolve_selection(candidates, true, &[])
    } else {
        let options: Vec<&str> = candidates.iter().map(String::as_str).collect();
        let picked = prompt::multi_select("Select files to add:", &options);
        resolve_selection(candidates, false, &picked)
    };

    if staged.is_empty() {
        print_warning("No files selected.");
        return Ok(Vec::new());
    }

    git.add(&staged)?;
    if automatic {
        print_success("Files added automatically.");
    } else {
        print_success("Files added manually.");
    }

    if show_stats {
        println!("Adding files:");
        for stat in inspect::diff_stats_batch(git, &staged)? {
            print_file_stat(&stat.path, stat.insertions, stat.deletions);
        }
    }

    Ok(staged)
}

/// Files to stage for the chosen method: every candidate in automatic mode,
/// or the picked indices mapped back to their paths.
fn resolve_selection(candidates: &[String], automatic: bool, picked: &[usize]) -> Vec<String> {
    if automatic {
        candidates.to_vec()
    } else {
        picked.iter().map(|&i| candidates[i].clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestRepo;

    fn candidate_list() -> Vec<String> {
        ["f1.txt", "f2.txt", "f3.txt"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_resolve_selection_automatic_takes_all_candidates() {
        let candidates = candidate_list();
        let staged = resolve_selection(&candidates, true, &[]);
        assert_eq!(staged, candidates);
    }

    #[test]
    fn test_resolve_selection_manual_maps_picked_indices() {
        let candidates = candidate_list();
        let staged = resolve_selection(&candidates, false, &[1]);
        assert_eq!(staged, vec!["f2.txt"]);
    }

    #[test]
    fn test_resolve_selection_manual_empty_pick_stages_nothing() {
        let candidates = candidate_list();
        assert!(resolve_selection(&candidates, false, &[]).is_empty());
    }

    fn staged_paths(repo: &TestRepo) -> Vec<String> {
        repo.run_git(&["diff", "--cached", "--name-only"])
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_staging_all_candidates() {
        let Some(repo) = TestRepo::init() else {
            return;
        };
        repo.write_file("f1.txt", "1\n");
        repo.write_file("f2.txt", "2\n");
        repo.write_file("f3.txt", "3\n");

        let git = repo.git();
        let files: Vec<String> = ["f1.txt", "f2.txt", "f3.txt"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        git.add(&files).unwrap();

        assert_eq!(staged_paths(&repo), vec!["f1.txt", "f2.txt", "f3.txt"]);
    }

    #[test]
    fn test_staging_selected_subset_only() {
        let Some(repo) = TestRepo::init() else {
            return;
        };
        repo.write_file("f1.txt", "1\n");
        repo.write_file("f2.txt", "2\n");
        repo.write_file("f3.txt", "3\n");

        let git = repo.git();
        git.add(&["f2.txt".to_string()]).unwrap();

        assert_eq!(staged_paths(&repo), vec!["f2.txt"]);
    }
}
