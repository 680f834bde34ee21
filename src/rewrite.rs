use std::borrow::Cow;

use crate::translation::TranslationTable;

/// Returns the text before the first `\n`, or the whole message if there is none.
///
/// No trimming happens here: a `\r` left by CRLF line endings stays part of the line.
pub fn first_line(message: &str) -> &str {
    match message.find('\n') {
        Some(end) => &message[..end],
        None => message,
    }
}

/// Rewrites the subject line of `message` using `table`.
///
/// When the first line equals an original message exactly, it is replaced by
/// the reformatted one and every following byte is kept as-is. Otherwise the
/// message is returned unchanged (borrowed).
///
/// # Examples
///
/// ```
/// use commit_translate::{rewrite::rewrite_message, translation::TranslationTable};
///
/// let table = TranslationTable::builtin().unwrap();
/// assert_eq!(
///     rewrite_message(&table, "first commit\n\nLonger body text."),
///     "chore: initial commit\n\nLonger body text."
/// );
/// assert_eq!(rewrite_message(&table, "Something else"), "Something else");
/// ```
pub fn rewrite_message<'a>(table: &TranslationTable, message: &'a str) -> Cow<'a, str> {
    let subject = first_line(message);

    match table.lookup(subject) {
        Some(replacement) if replacement != subject => {
            let rest = &message[subject.len()..];
            let mut out = String::with_capacity(replacement.len() + rest.len());
            out.push_str(replacement);
            out.push_str(rest);
            Cow::Owned(out)
        }
        _ => Cow::Borrowed(message),
    }
}

#[cfg(test)]
mod tests {
    use super::{first_line, rewrite_message};
    use crate::translation::{TranslationEntry, TranslationTable};
    use proptest::prelude::*;

    fn table() -> TranslationTable {
        TranslationTable::builtin().expect("builtin table should validate")
    }

    #[test]
    fn first_line_without_newline_is_whole_message() {
        assert_eq!(first_line("Add gold theme"), "Add gold theme");
        assert_eq!(first_line(""), "");
    }

    #[test]
    fn first_line_stops_at_first_newline() {
        assert_eq!(first_line("subject\nbody\nmore"), "subject");
        assert_eq!(first_line("\nbody"), "");
        assert_eq!(first_line("subject\r\nbody"), "subject\r");
    }

    #[test]
    fn single_line_message_is_replaced() {
        assert_eq!(rewrite_message(&table(), "Add .gitignore"), "chore: add .gitignore");
    }

    #[test]
    fn body_is_left_untouched() {
        assert_eq!(
            rewrite_message(&table(), "first commit\n\nLonger body text."),
            "chore: initial commit\n\nLonger body text."
        );
    }

    #[test]
    fn trailing_newline_survives() {
        assert_eq!(
            rewrite_message(&table(), "Project renamed\n"),
            "chore: rename project\n"
        );
    }

    #[test]
    fn unknown_message_is_unchanged() {
        let msg = "Unrelated message not in table";
        let out = rewrite_message(&table(), msg);
        assert_eq!(out, msg);
        assert!(matches!(out, std::borrow::Cow::Borrowed(_)));
    }

    #[test]
    fn fixed_point_entry_is_unchanged() {
        let msg = "feat(ui): improve vertical scale rendering in spectrogram display\n\nDetails.";
        assert_eq!(rewrite_message(&table(), msg), msg);
    }

    #[test]
    fn match_is_case_and_whitespace_sensitive() {
        let t = table();
        assert_eq!(rewrite_message(&t, "add .gitignore"), "add .gitignore");
        assert_eq!(rewrite_message(&t, " Add .gitignore"), " Add .gitignore");
        assert_eq!(rewrite_message(&t, "Add .gitignore\r\nbody"), "Add .gitignore\r\nbody");
    }

    #[test]
    fn original_in_body_is_not_rewritten() {
        let msg = "Unrelated\n\nAdd .gitignore";
        assert_eq!(rewrite_message(&table(), msg), msg);
    }

    #[test]
    fn only_first_occurrence_is_replaced() {
        assert_eq!(
            rewrite_message(&table(), "Add gold theme\n\nAdd gold theme"),
            "feat(ui): add gold theme\n\nAdd gold theme"
        );
    }

    #[test]
    fn every_builtin_entry_is_applied() {
        let t = table();
        for entry in t.entries() {
            let msg = format!("{}\n\nbody", entry.original);
            let expected = format!("{}\n\nbody", entry.reformatted);
            assert_eq!(rewrite_message(&t, &msg), expected, "entry {}", entry.id);
        }
    }

    #[test]
    fn custom_table_is_honoured() {
        let t = TranslationTable::new(vec![TranslationEntry::new("x", "wip", "chore: wip")])
            .expect("valid table");
        assert_eq!(rewrite_message(&t, "wip\nmore"), "chore: wip\nmore");
        assert_eq!(rewrite_message(&t, "Add .gitignore"), "Add .gitignore");
    }

    proptest! {
        #[test]
        fn unknown_subjects_are_identity(subject in "[a-z ]{0,12}", body in "(\n[ -~]{0,20}){0,3}") {
            let t = table();
            prop_assume!(t.lookup(&subject).is_none());
            let msg = format!("{subject}{body}");
            prop_assert_eq!(rewrite_message(&t, &msg), msg.as_str());
        }

        #[test]
        fn matched_subject_keeps_body(idx in 0usize..32, body in "(\n[ -~]{0,20}){0,3}") {
            let t = table();
            let entry = &t.entries()[idx];
            let msg = format!("{}{}", entry.original, body);
            let out = rewrite_message(&t, &msg);
            prop_assert_eq!(first_line(&out), entry.reformatted.as_str());
            prop_assert_eq!(&out[entry.reformatted.len()..], body.as_str());
        }

        #[test]
        fn rewriting_is_idempotent(idx in 0usize..32, body in "(\n[ -~]{0,20}){0,3}") {
            let t = table();
            let msg = format!("{}{}", t.entries()[idx].original, body);
            let once = rewrite_message(&t, &msg).into_owned();
            let twice = rewrite_message(&t, &once).into_owned();
            prop_assert_eq!(once, twice);
        }
    }
}
