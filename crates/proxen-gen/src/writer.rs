//! Artifact output.
//!
//! One artifact per source file, written to `<output_dir>/<source file name>`
//! and overwriting what is there. Directory creation tolerates a directory
//! created concurrently by another invocation.

use std::path::{Path, PathBuf};

use crate::error::GenError;

/// Where the artifact for `source` lands inside `output_dir`.
///
/// # Errors
/// Returns [`GenError::InvalidSource`] if `source` has no file name.
pub fn output_path(output_dir: &Path, source: &Path) -> Result<PathBuf, GenError> {
    let file_name = source.file_name().ok_or_else(|| GenError::InvalidSource {
        path: source.display().to_string(),
    })?;
    Ok(output_dir.join(file_name))
}

/// Write `contents` as the artifact for `source_file`, creating `output_dir` if
/// missing.
///
/// # Errors
/// Returns [`GenError::InvalidSource`] for a path without file name and
/// [`GenError::Io`] if the directory or file cannot be written.
pub fn write_artifact(
    output_dir: &Path,
    source_file: &Path,
    contents: &str,
) -> Result<PathBuf, GenError> {
    let path = output_path(output_dir, source_file)?;

    // create_dir_all succeeds when the directory already exists.
    std::fs::create_dir_all(output_dir).map_err(|source| GenError::Io {
        path: output_dir.display().to_string(),
        source,
    })?;
    std::fs::write(&path, contents).map_err(|source| GenError::Io {
        path: path.display().to_string(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_keeps_file_name() {
        let path = output_path(Path::new("out"), Path::new("src/Services/IFoo.cs"))
            .expect("should resolve");
        assert_eq!(path, Path::new("out").join("IFoo.cs"));
    }

    #[test]
    fn output_path_rejects_directory_like_source() {
        let error = output_path(Path::new("out"), Path::new("..")).expect_err("no file name");
        assert!(matches!(error, GenError::InvalidSource { .. }));
    }

    #[test]
    fn creates_missing_directory_and_overwrites() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("nested").join("generated");

        let first = write_artifact(&out, Path::new("IFoo.cs"), "first").expect("first write");
        let second = write_artifact(&out, Path::new("IFoo.cs"), "second").expect("second write");

        assert_eq!(first, second);
        assert_eq!(std::fs::read_to_string(&second).expect("read back"), "second");
    }

    #[test]
    fn existing_directory_is_not_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir_all(dir.path().join("out")).expect("pre-create");

        let path = write_artifact(&dir.path().join("out"), Path::new("A.cs"), "x")
            .expect("write into existing directory");
        assert!(path.exists());
    }

    #[test]
    fn concurrent_writers_share_one_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("shared");

        std::thread::scope(|scope| {
            for index in 0..8 {
                let out = &out;
                scope.spawn(move || {
                    let name = format!("File{index}.cs");
                    write_artifact(out, Path::new(&name), "x").expect("concurrent write");
                });
            }
        });

        assert_eq!(std::fs::read_dir(&out).expect("read dir").count(), 8);
    }
}
