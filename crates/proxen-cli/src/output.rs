use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::render;
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Sample {
        source: &'static str,
        found: bool,
    }

    #[test]
    fn raw_is_compact_json() {
        let rendered = render(&Sample { source: "a.cs", found: true }, OutputFormat::Raw)
            .expect("render");
        assert_eq!(rendered, r#"{"source":"a.cs","found":true}"#);
    }

    #[test]
    fn json_is_pretty() {
        let rendered = render(&Sample { source: "a.cs", found: false }, OutputFormat::Json)
            .expect("render");
        assert_eq!(rendered, "{\n  \"source\": \"a.cs\",\n  \"found\": false\n}");
    }
}
