use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    comparison, error::GenerateError, filter_branch, filter_repo, translation::TranslationTable,
};

/// The three files produced from a translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Bash script for `git filter-branch`.
    FilterBranch,
    /// Python script for `git-filter-repo`.
    FilterRepo,
    /// Markdown comparison table.
    Comparison,
}

impl ArtifactKind {
    /// Generation order.
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::FilterBranch,
        ArtifactKind::FilterRepo,
        ArtifactKind::Comparison,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ArtifactKind::FilterBranch => filter_branch::FILE_NAME,
            ArtifactKind::FilterRepo => filter_repo::FILE_NAME,
            ArtifactKind::Comparison => comparison::FILE_NAME,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ArtifactKind::FilterBranch => "script using git filter-branch (built into git)",
            ArtifactKind::FilterRepo => "script using git-filter-repo (must be installed)",
            ArtifactKind::Comparison => "table comparing original and reformatted messages",
        }
    }

    /// Whether the file gets mode `0o755`.
    pub fn is_executable(self) -> bool {
        !matches!(self, ArtifactKind::Comparison)
    }

    pub fn render(self, table: &TranslationTable) -> String {
        match self {
            ArtifactKind::FilterBranch => filter_branch::render(table),
            ArtifactKind::FilterRepo => filter_repo::render(table),
            ArtifactKind::Comparison => comparison::render(table),
        }
    }
}

/// A rendered file waiting to be written.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub contents: String,
}

/// Renders every artifact kind from `table`, in [`ArtifactKind::ALL`] order.
pub fn render_all(table: &TranslationTable) -> Vec<Artifact> {
    ArtifactKind::ALL
        .into_iter()
        .map(|kind| Artifact {
            kind,
            contents: kind.render(table),
        })
        .collect()
}

/// Writes `artifact` into `dir`, replacing any existing file, and marks
/// scripts as executable.
///
/// # Returns
///
/// * `Ok(PathBuf)` with the path that was written.
/// * `Err(GenerateError)` if creating, writing or chmod-ing the file fails.
pub fn write_artifact(dir: &Path, artifact: &Artifact) -> Result<PathBuf, GenerateError> {
    let path = dir.join(artifact.kind.file_name());

    let mut file = File::create(&path).map_err(|source| GenerateError::Write {
        path: path.clone(),
        source,
    })?;
    file.write_all(artifact.contents.as_bytes())
        .map_err(|source| GenerateError::Write {
            path: path.clone(),
            source,
        })?;

    if artifact.kind.is_executable() {
        make_executable(&path)?;
    }

    Ok(path)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), GenerateError> {
    use std::{fs, os::unix::fs::PermissionsExt};

    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(|source| {
        GenerateError::Permissions {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), GenerateError> {
    Ok(())
}

/// Renders and writes all artifacts into `dir`.
///
/// Stops at the first failure. Files written before it are left in place;
/// rerunning regenerates all of them from the same table.
pub fn generate(dir: &Path, table: &TranslationTable) -> Result<Vec<PathBuf>, GenerateError> {
    render_all(table)
        .iter()
        .map(|artifact| write_artifact(dir, artifact))
        .collect()
}
