use std::path::PathBuf;

use proxen_config::ProxenConfig;
use proxen_gen::Generator;
use rayon::prelude::*;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::inputs::collect_sources;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct CheckEntry {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_proxy_interfaces: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub with_proxies: usize,
    pub files: Vec<CheckEntry>,
}

/// Handle `proxen check`.
pub fn handle(
    args: &CheckArgs,
    generator: &Generator,
    config: &ProxenConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let sources = collect_sources(&args.paths, &config.general, None)?;
    let report = run(&sources, generator);
    output(&report, flags.format)?;

    let failed = report.files.iter().filter(|f| f.error.is_some()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} source files could not be checked", report.files.len());
    }
    Ok(())
}

/// Probe every source without generating anything.
pub fn run(sources: &[PathBuf], generator: &Generator) -> CheckReport {
    let files: Vec<CheckEntry> = sources
        .par_iter()
        .map(|source| {
            let (has_proxy_interfaces, error) = match generator.has_proxy_interfaces_in_file(source) {
                Ok(found) => (Some(found), None),
                Err(error) => {
                    tracing::warn!(source = %source.display(), %error, "check failed");
                    (None, Some(error.to_string()))
                }
            };
            CheckEntry {
                source: source.display().to_string(),
                has_proxy_interfaces,
                error,
            }
        })
        .collect();

    CheckReport {
        with_proxies: files
            .iter()
            .filter(|f| f.has_proxy_interfaces == Some(true))
            .count(),
        files,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn reports_one_entry_per_source_in_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let marked = dir.path().join("IFoo.cs");
        let plain = dir.path().join("Foo.cs");
        let single_segment = dir.path().join("IBar.cs");
        fs::write(
            &marked,
            "using BlazorMobile.Common.Attributes;\nnamespace A.B { [ProxyInterface] public interface IFoo { } }\n",
        )
        .expect("write");
        fs::write(&plain, "namespace A.B { public class Foo { } }\n").expect("write");
        fs::write(
            &single_segment,
            "using BlazorMobile.Common.Attributes;\nnamespace App { [ProxyInterface] public interface IBar { } }\n",
        )
        .expect("write");

        let report = run(&[marked, plain, single_segment], &Generator::default());
        let found: Vec<Option<bool>> = report.files.iter().map(|f| f.has_proxy_interfaces).collect();
        assert_eq!(found, vec![Some(true), Some(false), Some(false)]);
        assert_eq!(report.with_proxies, 1);
    }

    #[test]
    fn missing_file_is_reported_not_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let report = run(&[dir.path().join("Gone.cs")], &Generator::default());
        assert_eq!(report.files[0].has_proxy_interfaces, None);
        assert!(report.files[0].error.as_deref().is_some_and(|e| e.contains("Gone.cs")));
    }
}
