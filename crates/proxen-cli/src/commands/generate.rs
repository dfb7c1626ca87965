use std::collections::HashMap;
use std::path::{Path, PathBuf};

use proxen_config::ProxenConfig;
use proxen_gen::{GenError, Generator, writer};
use rayon::prelude::*;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GenerateArgs;
use crate::inputs::collect_sources;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Generated { output: String, classes: usize },
    Skipped,
    Failed { error: String },
}

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub source: String,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

#[derive(Debug, Serialize)]
pub struct GenerateReport {
    pub output_dir: String,
    pub generated: usize,
    pub skipped: usize,
    pub failed: usize,
    pub files: Vec<FileReport>,
}

/// Handle `proxen generate`.
pub fn handle(
    args: &GenerateArgs,
    generator: &Generator,
    config: &ProxenConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let report = run(args, generator, config, !flags.quiet)?;
    output(&report, flags.format)?;

    if report.failed > 0 {
        anyhow::bail!(
            "{} of {} source files failed to generate",
            report.failed,
            report.files.len()
        );
    }
    Ok(())
}

/// Generate every collected source; reports keep input order.
///
/// Sources are parsed and rendered in parallel, output paths are then claimed
/// in input order, and only artifacts holding an uncontested path are
/// written. A path already claimed by an earlier source, or one that resolves
/// to the source itself, fails that source instead of overwriting.
pub fn run(
    args: &GenerateArgs,
    generator: &Generator,
    config: &ProxenConfig,
    show_progress: bool,
) -> anyhow::Result<GenerateReport> {
    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.dir));
    let skip_empty = config.output.skip_empty && !args.all;
    let sources = collect_sources(&args.paths, &config.general, Some(&output_dir))?;

    tracing::info!(
        sources = sources.len(),
        output_dir = %output_dir.display(),
        skip_empty,
        "generating proxies"
    );

    let total = u64::try_from(sources.len()).unwrap_or(u64::MAX);
    let progress = Progress::bar(total, "generating", show_progress);
    let rendered: Vec<Result<Rendered, String>> = sources
        .par_iter()
        .map(|source| {
            let result = render_one(generator, source, &output_dir, skip_empty)
                .map_err(|error| error.to_string());
            progress.inc(1);
            result
        })
        .collect();
    progress.finish_and_clear();

    let staged = claim_outputs(&sources, rendered);
    let files: Vec<FileReport> = sources
        .par_iter()
        .zip(staged)
        .map(|(source, staged)| {
            let written = staged.and_then(|rendered| write_rendered(&output_dir, source, rendered));
            let outcome = match written {
                Ok(outcome) => outcome,
                Err(error) => {
                    tracing::warn!(source = %source.display(), %error, "generation failed");
                    FileOutcome::Failed { error }
                }
            };
            FileReport {
                source: source.display().to_string(),
                outcome,
            }
        })
        .collect();

    let count = |wanted: fn(&FileOutcome) -> bool| files.iter().filter(|f| wanted(&f.outcome)).count();
    Ok(GenerateReport {
        output_dir: output_dir.display().to_string(),
        generated: count(|o| matches!(o, FileOutcome::Generated { .. })),
        skipped: count(|o| matches!(o, FileOutcome::Skipped)),
        failed: count(|o| matches!(o, FileOutcome::Failed { .. })),
        files,
    })
}

/// A source after parsing and rendering, before anything is written.
#[derive(Debug)]
enum Rendered {
    Skipped,
    Artifact {
        target: PathBuf,
        contents: String,
        classes: usize,
    },
}

fn render_one(
    generator: &Generator,
    source: &Path,
    output_dir: &Path,
    skip_empty: bool,
) -> Result<Rendered, GenError> {
    let module = proxen_parser::parse_file(source)?;
    if skip_empty && !generator.has_proxy_interfaces(&module) {
        tracing::debug!(source = %source.display(), "no proxy interfaces, skipping");
        return Ok(Rendered::Skipped);
    }

    let artifact = generator.plan(&module);
    Ok(Rendered::Artifact {
        target: writer::output_path(output_dir, source)?,
        contents: artifact.to_string(),
        classes: artifact.classes().count(),
    })
}

/// Give each output path to the first source that wants it.
fn claim_outputs(
    sources: &[PathBuf],
    rendered: Vec<Result<Rendered, String>>,
) -> Vec<Result<Rendered, String>> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();

    sources
        .iter()
        .zip(rendered)
        .map(|(source, rendered)| {
            let Ok(Rendered::Artifact { target, .. }) = &rendered else {
                return rendered;
            };
            let key = resolved_path(target);

            if source.canonicalize().is_ok_and(|own| own == key) {
                return Err(format!(
                    "output '{}' would overwrite its own source",
                    target.display()
                ));
            }
            if let Some(first) = claimed.get(&key) {
                return Err(format!(
                    "output '{}' is already produced from '{}'",
                    target.display(),
                    first.display()
                ));
            }

            claimed.insert(key, source);
            rendered
        })
        .collect()
}

/// `path` with its directory canonicalized when that directory exists.
fn resolved_path(path: &Path) -> PathBuf {
    let dir = path.parent().and_then(|dir| dir.canonicalize().ok());
    match (dir, path.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}

fn write_rendered(output_dir: &Path, source: &Path, rendered: Rendered) -> Result<FileOutcome, String> {
    match rendered {
        Rendered::Skipped => Ok(FileOutcome::Skipped),
        Rendered::Artifact {
            contents, classes, ..
        } => {
            let written = writer::write_artifact(output_dir, source, &contents)
                .map_err(|error| error.to_string())?;
            Ok(FileOutcome::Generated {
                output: written.display().to_string(),
                classes,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    const MARKED: &str = "using BlazorMobile.Common.Attributes;\nusing System.Threading.Tasks;\n\nnamespace App.Services\n{\n    [ProxyInterface]\n    public interface IFoo\n    {\n        Task Ping();\n    }\n}\n";
    const PLAIN: &str = "namespace App.Models\n{\n    public class Foo { }\n}\n";

    fn args(paths: Vec<PathBuf>, output: &Path, all: bool) -> GenerateArgs {
        GenerateArgs {
            paths,
            output: Some(output.to_path_buf()),
            all,
        }
    }

    #[test]
    fn writes_marked_sources_and_skips_the_rest() {
        let dir = tempfile::tempdir().expect("tempdir");
        let src = dir.path().join("src");
        fs::create_dir_all(&src).expect("src dir");
        fs::write(src.join("IFoo.cs"), MARKED).expect("write");
        fs::write(src.join("Foo.cs"), PLAIN).expect("write");
        let out = dir.path().join("out");

        let report = run(
            &args(vec![src], &out, false),
            &Generator::default(),
            &ProxenConfig::default(),
            false,
        )
        .expect("run");

        assert_eq!(report.generated, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.failed, 0);
        assert!(report.files[0].source.ends_with("Foo.cs"));
        assert_eq!(report.files[0].outcome, FileOutcome::Skipped);

        let written = fs::read_to_string(out.join("IFoo.cs")).expect("artifact");
        assert!(written.contains("public class IFooProxy"));
        assert!(!out.join("Foo.cs").exists());
    }

    #[test]
    fn all_flag_writes_empty_artifacts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = dir.path().join("Foo.cs");
        fs::write(&source, PLAIN).expect("write");
        let out = dir.path().join("out");

        let report = run(
            &args(vec![source], &out, true),
            &Generator::default(),
            &ProxenConfig::default(),
            false,
        )
        .expect("run");

        assert_eq!(report.generated, 1);
        assert_eq!(
            report.files[0].outcome,
            FileOutcome::Generated {
                output: out.join("Foo.cs").display().to_string(),
                classes: 0,
            }
        );
    }

    #[test]
    fn failures_are_reported_per_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let broken = dir.path().join("Broken.cs");
        let good = dir.path().join("IFoo.cs");
        fs::write(&broken, "public interface IFoo { Task Ping(); } }").expect("write");
        fs::write(&good, MARKED).expect("write");
        let out = dir.path().join("out");

        let report = run(
            &args(vec![broken, good], &out, false),
            &Generator::default(),
            &ProxenConfig::default(),
            false,
        )
        .expect("run");

        assert_eq!(report.failed, 1);
        assert_eq!(report.generated, 1);
        let FileOutcome::Failed { error } = &report.files[0].outcome else {
            panic!("expected failure first");
        };
        assert!(error.contains("Broken.cs"));
        assert!(out.join("IFoo.cs").exists());
    }

    #[test]
    fn same_file_name_from_two_directories_is_written_once() {
        let dir = tempfile::tempdir().expect("tempdir");
        let src = dir.path().join("src");
        for sub in ["a", "b"] {
            fs::create_dir_all(src.join(sub)).expect("src dir");
            fs::write(src.join(sub).join("IFoo.cs"), MARKED).expect("write");
        }
        let out = dir.path().join("out");

        let report = run(
            &args(vec![src], &out, false),
            &Generator::default(),
            &ProxenConfig::default(),
            false,
        )
        .expect("run");

        assert_eq!(report.generated, 1);
        assert_eq!(report.failed, 1);
        assert!(matches!(report.files[0].outcome, FileOutcome::Generated { .. }));
        let FileOutcome::Failed { error } = &report.files[1].outcome else {
            panic!("second source should lose the clash");
        };
        assert!(error.contains("already produced from"));
        assert!(error.contains("IFoo.cs"));
        assert!(out.join("IFoo.cs").exists());
    }

    #[test]
    fn skipped_source_does_not_claim_its_output_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("a")).expect("src dir");
        fs::create_dir_all(src.join("b")).expect("src dir");
        fs::write(src.join("a").join("IFoo.cs"), PLAIN).expect("write");
        fs::write(src.join("b").join("IFoo.cs"), MARKED).expect("write");
        let out = dir.path().join("out");

        let report = run(
            &args(vec![src], &out, false),
            &Generator::default(),
            &ProxenConfig::default(),
            false,
        )
        .expect("run");

        assert_eq!(report.skipped, 1);
        assert_eq!(report.generated, 1);
        assert_eq!(report.failed, 0);
    }

    #[test]
    fn output_into_the_source_directory_never_overwrites_the_source() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = dir.path().join("IFoo.cs");
        fs::write(&source, MARKED).expect("write");

        let report = run(
            &args(vec![source.clone()], dir.path(), false),
            &Generator::default(),
            &ProxenConfig::default(),
            false,
        )
        .expect("run");

        assert_eq!(report.generated, 0);
        assert_eq!(report.failed, 1);
        let FileOutcome::Failed { error } = &report.files[0].outcome else {
            panic!("expected failure");
        };
        assert!(error.contains("would overwrite its own source"));
        assert_eq!(fs::read_to_string(&source).expect("source"), MARKED);
    }

    #[test]
    fn report_serializes_with_status_tags() {
        let report = FileReport {
            source: "a.cs".to_string(),
            outcome: FileOutcome::Skipped,
        };
        let value = serde_json::to_value(&report).expect("serialize");
        assert_eq!(value, serde_json::json!({ "source": "a.cs", "status": "skipped" }));
    }
}
