use crate::translation::TranslationTable;

/// File name of the generated filter-branch script.
pub const FILE_NAME: &str = "rewrite_with_filter_branch.sh";

const HEADER: &str = r#"#!/usr/bin/env bash
#
# Rewrites the Git history to reformat commit messages in the conventional commits style.
# Generated by commit-translate.
#
# WARNING: this script rewrites Git history.
# Make sure you have a backup or a clone of the repository before running it.

set -e

# Reads a commit message on stdin and prints it with its first line translated.
filter_commit() {
    local msg first_line new_line
    msg="$(cat)"
    first_line="${msg%%$'\n'*}"
    new_line="$first_line"
"#;

// git filter-branch runs the msg-filter from a temporary directory through
// `sh`, so the script hands it an absolute path to itself.
const FOOTER: &str = r#"
    printf '%s\n' "${new_line}${msg:${#first_line}}"
}

if [[ "${1:-}" == "--msg-filter" ]]; then
    filter_commit
    exit 0
fi

script="$(cd "$(dirname "${BASH_SOURCE[0]}")" && pwd)/$(basename "${BASH_SOURCE[0]}")"

git filter-branch --force --msg-filter "\"$script\" --msg-filter" -- --all

echo "Done! Git history has been rewritten with the reformatted messages."
echo "Use 'git push --force' to update the remote repository (if needed)."
"#;

/// Escapes `s` for use inside a bash double-quoted string.
///
/// Backslash, double quote, dollar and backtick are the only characters bash
/// still interprets between double quotes in a script.
pub(crate) fn bash_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if matches!(c, '\\' | '"' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Renders the bash script driving `git filter-branch --msg-filter`.
///
/// One `if` branch is emitted per unique rule, comparing the first line of
/// the message literally against the original text.
pub fn render(table: &TranslationTable) -> String {
    let branches = table
        .rules()
        .map(|(original, reformatted)| {
            format!(
                "\n    if [[ \"$first_line\" == {} ]]; then\n        new_line={}\n    fi\n",
                bash_quote(original),
                bash_quote(reformatted)
            )
        })
        .collect::<String>();

    format!("{HEADER}{branches}{FOOTER}")
}
