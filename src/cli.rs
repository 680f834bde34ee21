use crate::{
    banner::print_banner,
    output::{self, ArtifactKind},
    rewrite::rewrite_message,
    translation::TranslationTable,
};

use console::style;
use std::{
    env,
    io::{self, Write},
    path::Path,
};

/// What the process was asked to do.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Help,
    Version,
    /// Act as a `git filter-branch --msg-filter`: stdin to stdout.
    MsgFilter,
    Generate,
    Unknown(String),
}

/// Maps the arguments (without the program name) to a [`Command`].
fn parse_args(args: &[String]) -> Command {
    if args.iter().any(|a| a == "--help" || a == "-h") {
        return Command::Help;
    }
    if args.iter().any(|a| a == "--version" || a == "-V") {
        return Command::Version;
    }

    match args {
        [] => Command::Generate,
        [flag] if flag == "--msg-filter" => Command::MsgFilter,
        [first, ..] if first == "--msg-filter" => Command::Unknown(args[1].clone()),
        [first, ..] => Command::Unknown(first.clone()),
    }
}

/// Prints usage information to stdout.
fn print_help() {
    println!(
        "\
commit-translate {}

Generate scripts that rewrite Git commit messages in the conventional commits style.

USAGE:
    commit-translate [OPTIONS]

OPTIONS:
    -h, --help       Print help information
    -V, --version    Print version information
    --msg-filter     Read a commit message on stdin and print it translated

DESCRIPTION:
    Without options, writes three files to the current directory:
      {}  {}
      {}  {}
      {}  {}

    With --msg-filter the binary can be used directly as
    git filter-branch --msg-filter 'commit-translate --msg-filter' -- --all",
        env!("CARGO_PKG_VERSION"),
        ArtifactKind::FilterBranch.file_name(),
        ArtifactKind::FilterBranch.description(),
        ArtifactKind::FilterRepo.file_name(),
        ArtifactKind::FilterRepo.description(),
        ArtifactKind::Comparison.file_name(),
        ArtifactKind::Comparison.description(),
    );
}

/// Loads the built-in table, reporting validation errors.
fn load_table() -> Result<TranslationTable, ()> {
    match TranslationTable::builtin() {
        Ok(t) => Ok(t),
        Err(e) => {
            eprintln!(
                "{}",
                style(format!("Error: invalid translation table ({})", e))
                    .red()
                    .bold()
            );
            Err(())
        }
    }
}

/// Rewrites one commit message from `input` to `output`.
fn run_msg_filter<R: io::Read, W: Write>(
    table: &TranslationTable,
    input: R,
    mut output: W,
) -> io::Result<()> {
    let message = io::read_to_string(input)?;
    let rewritten = rewrite_message(table, &message);
    output.write_all(rewritten.as_bytes())?;
    output.flush()
}

/// Writes every artifact into `dir` and reports each file.
fn run_generate(dir: &Path, table: &TranslationTable) -> Result<(), ()> {
    let paths = match output::generate(dir, table) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}", style(format!("❌ {}", e)).red().bold());
            return Err(());
        }
    };

    println!("{}", style("Files generated successfully:").green().bold());
    for (i, (path, kind)) in paths.iter().zip(ArtifactKind::ALL).enumerate() {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(kind.file_name());
        println!("{}. {} - {}", i + 1, style(name).cyan(), kind.description());
    }

    print_banner(table.rules().count(), table.len());
    Ok(())
}

/// Main CLI entry point for `commit-translate`.
///
/// This function:
/// 1. Handles `--help` and `--version`.
/// 2. In `--msg-filter` mode, rewrites a single message from stdin to stdout.
/// 3. Otherwise generates the three artifacts into the current directory and
///    prints a summary banner.
///
/// # Exit Codes
///
/// * `0` – Success.
/// * `2` – Unknown argument.
/// * `Err(())` – Table validation, I/O or file generation failed; the error has
///   already been printed.
pub fn entry() -> Result<i32, ()> {
    let args: Vec<String> = env::args().skip(1).collect();

    match parse_args(&args) {
        Command::Help => {
            print_help();
            Ok(0)
        }
        Command::Version => {
            println!("commit-translate {}", env!("CARGO_PKG_VERSION"));
            Ok(0)
        }
        Command::Unknown(arg) => {
            eprintln!(
                "{}",
                style(format!("Error: unexpected argument `{}` (see --help)", arg))
                    .red()
                    .bold()
            );
            Ok(2)
        }
        Command::MsgFilter => {
            let table = load_table()?;
            match run_msg_filter(&table, io::stdin().lock(), io::stdout().lock()) {
                Ok(_) => Ok(0),
                Err(e) => {
                    eprintln!("{}", style(format!("Message filter error: {}", e)).red().bold());
                    Err(())
                }
            }
        }
        Command::Generate => {
            let table = load_table()?;
            let dir = match env::current_dir() {
                Ok(d) => d,
                Err(e) => {
                    eprintln!(
                        "{}",
                        style(format!("Error: cannot resolve current directory ({})", e))
                            .red()
                            .bold()
                    );
                    return Err(());
                }
            };
            run_generate(&dir, &table)?;
            Ok(0)
        }
    }
}
