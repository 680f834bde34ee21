//! # commit-translate
//!
//! Generates scripts that rewrite Git commit messages according to a fixed
//! table of translations into the conventional commits style.
//!
//! This crate provides functionality to:
//! - Hold the reviewed translations as a validated, read-only table
//! - Rewrite the first line of a commit message against that table
//! - Render a `git filter-branch` script, a `git-filter-repo` script and a
//!   Markdown comparison table
//! - Write those files, marking the scripts as executable
//!
//! ## Usage
//!
//! ```bash
//! # Generate the three files in the current directory
//! commit-translate
//!
//! # Use the binary itself as a message filter
//! git filter-branch --msg-filter 'commit-translate --msg-filter' -- --all
//! ```
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface and main entry point
//! - [`translation`] - Translation entries and the validated table
//! - [`catalog`] - The compiled-in translations
//! - [`rewrite`] - First-line message rewriting
//! - [`filter_branch`], [`filter_repo`], [`comparison`] - Artifact renderers
//! - [`output`] - Writing artifacts to disk
//! - [`error`] - Error types
//! - [`banner`] - Decorative CLI banner

pub mod banner;
pub mod catalog;
pub mod cli;
pub mod comparison;
pub mod error;
pub mod filter_branch;
pub mod filter_repo;
pub mod output;
pub mod rewrite;
pub mod translation;
