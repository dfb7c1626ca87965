//! Input collection.
//!
//! Explicit file arguments are taken as given. Directories are walked with the
//! `ignore` crate and filtered by the configured source extension; each
//! directory's files are sorted so runs are reproducible.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use ignore::WalkBuilder;
use proxen_config::GeneralConfig;

/// Resolve command-line paths into the ordered list of source files.
///
/// `exclude` (typically the output directory) is never descended into.
pub fn collect_sources(
    paths: &[PathBuf],
    general: &GeneralConfig,
    exclude: Option<&Path>,
) -> anyhow::Result<Vec<PathBuf>> {
    let excluded = exclude.and_then(|dir| dir.canonicalize().ok());
    let mut sources = Vec::new();

    for path in paths {
        if path.is_file() {
            sources.push(path.clone());
            continue;
        }
        if !path.is_dir() {
            bail!("input '{}' does not exist", path.display());
        }

        let mut found = Vec::new();
        for entry in build_walker(path, general.respect_gitignore, excluded.clone()) {
            let entry = entry.with_context(|| format!("failed to walk '{}'", path.display()))?;
            let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
            if is_file && has_extension(entry.path(), &general.source_extension) {
                found.push(entry.into_path());
            }
        }
        found.sort();
        tracing::debug!(root = %path.display(), files = found.len(), "walked input directory");
        sources.extend(found);
    }

    Ok(sources)
}

fn build_walker(root: &Path, respect_gitignore: bool, excluded: Option<PathBuf>) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);
    builder.hidden(false);
    if respect_gitignore {
        builder.add_custom_ignore_filename(".proxenignore");
    } else {
        builder.standard_filters(false);
    }

    builder.filter_entry(move |entry| {
        if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
            return true;
        }
        if matches!(entry.file_name().to_str(), Some(".proxen" | ".git")) {
            return false;
        }
        excluded
            .as_ref()
            .is_none_or(|excluded| !entry.path().canonicalize().is_ok_and(|dir| &dir == excluded))
    });

    builder.build()
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension.trim()))
}
