use crate::translation::TranslationTable;

/// File name of the generated git-filter-repo script.
pub const FILE_NAME: &str = "rewrite_with_filter_repo.py";

const HEADER: &str = r#"#!/usr/bin/env python3
# -*- coding: utf-8 -*-
#
# Rewrites the Git history to reformat commit messages in the conventional commits style.
# Uses git-filter-repo (https://github.com/newren/git-filter-repo).
# Generated by commit-translate.
#
# WARNING: this script rewrites Git history.
# Make sure you have a backup or a clone of the repository before running it.

import sys

# Original first line -> reformatted first line
COMMIT_TRANSLATIONS = {
"#;

const FOOTER: &str = r#"}


def commit_callback(commit, metadata):
    message = commit.message.decode("utf-8")
    first_line = message.split("\n")[0]
    replacement = COMMIT_TRANSLATIONS.get(first_line)
    if replacement is not None:
        commit.message = message.replace(first_line, replacement, 1).encode("utf-8")


def main():
    try:
        from git_filter_repo import FilteringOptions, RepoFilter
    except ImportError:
        print("Error: git-filter-repo is not installed or not on the PYTHONPATH.", file=sys.stderr)
        print("Install it with: pip install git-filter-repo", file=sys.stderr)
        print("Or download it from https://github.com/newren/git-filter-repo", file=sys.stderr)
        return 1

    args = FilteringOptions.default_options()
    args.force = True
    RepoFilter(args, commit_callback=commit_callback).run()

    print("Done! Git history has been rewritten with the reformatted messages.")
    print("Use 'git push --force' to update the remote repository (if needed).")
    return 0


if __name__ == "__main__":
    sys.exit(main())
"#;

/// Quotes `s` as a Python double-quoted string literal.
pub(crate) fn python_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Renders the Python script driving `git-filter-repo`.
///
/// The rules are embedded as a dict literal; `git_filter_repo` is only
/// imported when the script runs, so generating it needs nothing installed.
pub fn render(table: &TranslationTable) -> String {
    let dict = table
        .rules()
        .map(|(original, reformatted)| {
            format!(
                "    {}: {},\n",
                python_quote(original),
                python_quote(reformatted)
            )
        })
        .collect::<String>();

    format!("{HEADER}{dict}{FOOTER}")
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{python_quote, render};
    use crate::translation::{TranslationEntry, TranslationTable};

    /// Reads the dict entries back out of a rendered script.
    pub(crate) fn parse(script: &str) -> Vec<(String, String)> {
        let start = script
            .find("COMMIT_TRANSLATIONS = {\n")
            .expect("dict literal present")
            + "COMMIT_TRANSLATIONS = {\n".len();
        script[start..]
            .lines()
            .take_while(|l| *l != "}")
            .map(|l| {
                let l = l.trim().strip_suffix(',').expect("trailing comma");
                let (key, rest) = read_literal(l);
                let rest = rest.strip_prefix(": ").expect("key/value separator");
                let (value, tail) = read_literal(rest);
                assert!(tail.is_empty());
                (key, value)
            })
            .collect()
    }

    fn read_literal(s: &str) -> (String, &str) {
        let mut out = String::new();
        let mut chars = s.char_indices().skip(1);
        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => match chars.next().map(|(_, c)| c) {
                    Some('n') => out.push('\n'),
                    Some('r') => out.push('\r'),
                    Some('t') => out.push('\t'),
                    Some(other) => out.push(other),
                    None => break,
                },
                '"' => return (out, &s[i + 1..]),
                _ => out.push(c),
            }
        }
        panic!("unterminated literal: {s}");
    }

    #[test]
    fn python_quote_escapes() {
        assert_eq!(python_quote("l'affichage"), "\"l'affichage\"");
        assert_eq!(python_quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(python_quote("a\\b\nc"), "\"a\\\\b\\nc\"");
    }

    #[test]
    fn script_checks_dependency_inside_main() {
        let table = TranslationTable::builtin().expect("builtin table should validate");
        let script = render(&table);

        assert!(script.starts_with("#!/usr/bin/env python3\n"));
        let main_at = script.find("def main():").expect("main defined");
        let import_at = script
            .find("from git_filter_repo import")
            .expect("import present");
        assert!(import_at > main_at);
        assert!(script.contains("except ImportError:"));
        assert!(script.contains("return 1"));
        assert!(script.contains("RepoFilter(args, commit_callback=commit_callback).run()"));
        assert!(script.ends_with("sys.exit(main())\n"));
    }

    #[test]
    fn callback_applies_first_line_rule() {
        let table = TranslationTable::builtin().expect("builtin table should validate");
        let script = render(&table);
        assert!(script.contains("first_line = message.split(\"\\n\")[0]"));
        assert!(script.contains("message.replace(first_line, replacement, 1)"));
    }

    #[test]
    fn dict_line_is_rendered_verbatim() {
        let table = TranslationTable::new(vec![TranslationEntry::new(
            "5df6b5c",
            "first commit",
            "chore: initial commit",
        )])
        .expect("valid table");
        assert!(render(&table).contains("\n    \"first commit\": \"chore: initial commit\",\n}\n"));
    }

    #[test]
    fn script_round_trips_to_table_rules() {
        let table = TranslationTable::builtin().expect("builtin table should validate");
        let expected = table
            .rules()
            .map(|(o, r)| (o.to_string(), r.to_string()))
            .collect::<Vec<_>>();
        assert_eq!(parse(&render(&table)), expected);
    }

    #[test]
    fn escaped_messages_round_trip() {
        let table = TranslationTable::new(vec![TranslationEntry::new(
            "x",
            "Say \"hi\" \\ bye",
            "chore: greet",
        )])
        .expect("valid table");
        assert_eq!(
            parse(&render(&table)),
            vec![("Say \"hi\" \\ bye".to_string(), "chore: greet".to_string())]
        );
    }
}
