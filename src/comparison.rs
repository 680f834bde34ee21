use crate::translation::TranslationTable;

/// File name of the generated comparison document.
pub const FILE_NAME: &str = "commit_comparison.md";

const HEADER: &str = "\
# Commit message comparison

| Hash | Original message | Reformatted message |
|------|------------------|---------------------|
";

/// Escapes characters that would break a Markdown table cell.
fn cell(s: &str) -> String {
    s.replace('\\', "\\\\").replace('|', "\\|")
}

/// Renders a Markdown table with one row per entry, duplicates included.
pub fn render(table: &TranslationTable) -> String {
    let rows = table
        .entries()
        .iter()
        .map(|e| {
            format!(
                "| {} | {} | {} |\n",
                cell(&e.id),
                cell(&e.original),
                cell(&e.reformatted)
            )
        })
        .collect::<String>();

    format!("{HEADER}{rows}")
}
