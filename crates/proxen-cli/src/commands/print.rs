use std::io::Write;

use anyhow::Context;
use proxen_gen::Generator;

use crate::cli::root_commands::PrintArgs;

/// Handle `proxen print`: the artifact text, unwrapped by `--format`.
pub fn handle(args: &PrintArgs, generator: &Generator) -> anyhow::Result<()> {
    let rendered = generator
        .render_file(&args.file)
        .with_context(|| format!("failed to render '{}'", args.file.display()))?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write to stdout")
}
