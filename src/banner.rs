use console::{measure_text_width, style};
use std::iter;

use crate::output::ArtifactKind;

/// Prints a boxed, colorized summary of what was generated and how to use it.
///
/// The box is sized to the widest **visible** line using
/// [`console::measure_text_width`], so ANSI codes embedded in the content do
/// not throw off the padding. Borders are styled separately from the content.
///
/// # Parameters
///
/// * `rule_count` – Number of unique translation rules baked into the scripts.
/// * `entry_count` – Number of rows in the comparison table.
///
/// # Examples
///
/// ```no_run
/// use commit_translate::banner::print_banner;
///
/// print_banner(31, 32);
/// ```
pub fn print_banner(rule_count: usize, entry_count: usize) {
    let lines = banner_lines(rule_count, entry_count);

    let max_width = lines
        .iter()
        .map(|l| measure_text_width(l))
        .max()
        .unwrap_or(0)
        + 2;

    let border = "═".repeat(max_width);
    let top = style(format!("╔{}╗", border)).blue().bold();
    let bottom = style(format!("╚{}╝", border)).blue().bold();
    let left = style("║ ").blue().bold().to_string();
    let right = style("║").blue().bold().to_string();

    println!();
    println!("{top}");
    for line in lines {
        let visible = measure_text_width(&line);
        let pad = max_width - visible;
        println!("{}{}{}{}", left, line, " ".repeat(pad - 1), right);
    }
    println!("{bottom}");
    println!();
}

/// Builds the banner content: title, counts, how to run each script, warning.
///
/// The warning lines carry ANSI styling; measure them with
/// `console::measure_text_width` rather than `str::len()`.
fn banner_lines(rule_count: usize, entry_count: usize) -> Vec<String> {
    let top = [
        "Rewrite commit messages in the conventional commits style".to_string(),
        String::new(),
        format!("{rule_count} rules from {entry_count} reviewed commits"),
        String::new(),
    ]
    .into_iter();

    let usage = [
        "From the root of the repository to rewrite, run one of:".to_string(),
        format!("  ./{}", ArtifactKind::FilterBranch.file_name()),
        format!(
            "  ./{}  (pip install git-filter-repo)",
            ArtifactKind::FilterRepo.file_name()
        ),
        format!(
            "Review {} before running either script.",
            ArtifactKind::Comparison.file_name()
        ),
    ]
    .into_iter();

    let warning = iter::once(String::new()).chain(
        [
            style("Both scripts rewrite every commit on every branch.")
                .yellow()
                .bold()
                .to_string(),
            style("Work on a clone, then `git push --force` if needed.")
                .yellow()
                .to_string(),
        ]
        .into_iter(),
    );

    top.chain(usage).chain(warning).collect()
}

#[cfg(test)]
mod tests {
    use super::banner_lines;
    use console::measure_text_width;

    #[test]
    fn banner_mentions_counts_and_files() {
        let lines = banner_lines(31, 32);
        let s = lines.join("\n");

        assert!(s.contains("Rewrite commit messages in the conventional commits style"));
        assert!(s.contains("31 rules from 32 reviewed commits"));
        assert!(s.contains("./rewrite_with_filter_branch.sh"));
        assert!(s.contains("./rewrite_with_filter_repo.py"));
        assert!(s.contains("Review commit_comparison.md before running either script."));
        assert!(s.contains("Both scripts rewrite every commit on every branch."));
    }

    #[test]
    fn banner_width_ignores_styling() {
        let lines = banner_lines(1, 1);
        let max_visible = lines
            .iter()
            .map(|l| measure_text_width(l))
            .max()
            .unwrap_or(0);

        assert!(max_visible >= "Rewrite commit messages in the conventional commits style".len());
        assert!(lines.iter().all(|l| measure_text_width(l) <= l.len()));
    }
}
