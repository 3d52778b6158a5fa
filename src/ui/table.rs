use std::path::Path;

use crate::repo::models::Repository;
use crate::util::paths::minimal_paths;

const COLUMN_GAP: usize = 2;

/// Plain-text repository table for non-interactive output.
///
/// Columns are minimized path, GitHub linkage and open PR count (blank when
/// zero), padded to the widest cell plus two spaces.
pub fn render_table(repos: &[Repository], base: &Path) -> String {
    let dirs: Vec<&Path> = repos.iter().map(|r| r.directory.as_path()).collect();
    let paths = minimal_paths(&dirs, base);

    let mut rows: Vec<[String; 3]> = vec![
        ["DIRECTORY".into(), "GITHUB".into(), "PRS".into()],
        ["---------".into(), "------".into(), "---".into()],
    ];
    for (repo, path) in repos.iter().zip(paths) {
        let github = if repo.github.is_github() { "Yes" } else { "No" };
        let prs = if repo.open_pr_count > 0 {
            repo.open_pr_count.to_string()
        } else {
            String::new()
        };
        rows.push([path, github.to_string(), prs]);
    }

    let widths: Vec<usize> = (0..2)
        .map(|col| rows.iter().map(|r| r[col].chars().count()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for [path, github, prs] in &rows {
        let line = format!(
            "{path:<w0$}{github:<w1$}{prs}",
            w0 = widths[0] + COLUMN_GAP,
            w1 = widths[1] + COLUMN_GAP,
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
