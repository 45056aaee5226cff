//! Render command executor

use std::fs::File;
use std::io::{self, BufWriter};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::RenderConfig;
use crate::description::GraphDescription;
use crate::executors::CommandExecutor;

pub struct RenderExecutor;

impl CommandExecutor for RenderExecutor {
    type Config = RenderConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let description = GraphDescription::parse_file(&config.input).wrap_err_with(|| {
            format!(
                "Failed to load graph description '{}'",
                config.input.display()
            )
        })?;
        let graph = description
            .to_graph()
            .wrap_err("Failed to build graph from description")?;

        // Determine output destination
        let mut output_writer: Box<dyn io::Write> =
            if let Some(output_path) = config.output.as_ref() {
                Box::new(BufWriter::new(
                    File::create(output_path)
                        .into_diagnostic()
                        .wrap_err_with(|| {
                            format!("Failed to create output file '{}'", output_path.display())
                        })?,
                ))
            } else {
                Box::new(io::stdout())
            };

        graph
            .write_to(output_writer.as_mut(), &config.render_options())
            .wrap_err("Failed to write DOT output")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_render_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("g.toml");
        let output = temp_dir.path().join("g.dot");
        fs::write(&input, "[[edges]]\nfrom = \"a\"\nto = \"b\"\n").unwrap();

        let config = RenderConfig::builder()
            .with_input(input)
            .with_output(Some(output.clone()))
            .with_indent(4)
            .build()
            .unwrap();
        RenderExecutor::execute(config).unwrap();

        assert_eq!(
            fs::read_to_string(output).unwrap(),
            "digraph \"G\" {\n    node [shape=box];\n    \"a\";\n    \"b\";\n    \"a\" -> \"b\";\n}\n"
        );
    }

    #[test]
    fn test_render_reports_invalid_description() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("g.toml");
        fs::write(&input, "[properties]\nrankdir = \"sideways\"\n").unwrap();

        let config = RenderConfig::builder()
            .with_input(input)
            .with_output(Some(temp_dir.path().join("g.dot")))
            .build()
            .unwrap();

        assert!(RenderExecutor::execute(config).is_err());
    }
}
