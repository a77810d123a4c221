use crate::config::models::OutputConfig;
use crate::error::CliError;
use crate::export;
use atlasfold::core::models::embedding::EmbeddingVector;
use atlasfold::workflows::dispatch::{DisplaySurface, PLDDT_NOTE, StructureView};
use serde_json::Value;
use std::io::{self, Stderr, Stdout, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Arrays longer than this are summarised with their first and last few values.
const ARRAY_SUMMARY_THRESHOLD: usize = 1000;
const ARRAY_EDGE_ITEMS: usize = 3;

/// Terminal rendition of the display surface.
///
/// Results go to `out`, error banners to `err`. Structure payloads are saved
/// according to the output settings rather than printed.
pub struct TerminalDisplay<O: Write, E: Write> {
    out: O,
    err: E,
    output: OutputConfig,
    residue_table: Option<PathBuf>,
    embedding_summary: bool,
}

impl TerminalDisplay<Stdout, Stderr> {
    pub fn stdio(output: OutputConfig) -> Self {
        Self::new(io::stdout(), io::stderr(), output)
    }
}

impl<O: Write, E: Write> TerminalDisplay<O, E> {
    pub fn new(out: O, err: E, output: OutputConfig) -> Self {
        Self {
            out,
            err,
            output,
            residue_table: None,
            embedding_summary: false,
        }
    }

    /// Also writes per-residue confidences of predictions as CSV to `path`.
    pub fn with_residue_table(mut self, path: Option<PathBuf>) -> Self {
        self.residue_table = path;
        self
    }

    /// Follows JSON output with the vector length when the payload is an embedding.
    pub fn with_embedding_summary(mut self, enabled: bool) -> Self {
        self.embedding_summary = enabled;
        self
    }

    #[cfg(test)]
    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> DisplaySurface for TerminalDisplay<O, E> {
    type Error = CliError;

    fn show_structure(&mut self, view: &StructureView) -> Result<(), CliError> {
        // All file writes happen before anything is printed.
        let residue_table = match (&view.prediction, &self.residue_table) {
            (Some(prediction), Some(path)) => {
                export::write_residue_table(path, prediction.structure.residues())?;
                info!("Residue table written to {:?}", path);
                Some(path)
            }
            _ => None,
        };
        let saved = if self.output.save_structures {
            let path = export::write_download(&self.output.directory, &view.download)?;
            info!("Structure saved to {:?}", path);
            Some(path)
        } else {
            None
        };

        writeln!(self.out, "## {}", view.heading)?;
        writeln!(
            self.out,
            "Structure: {} lines, {} bytes",
            view.payload.line_count(),
            view.payload.len()
        )?;

        if let Some(prediction) = &view.prediction {
            let chains: String = prediction.structure.chain_ids().into_iter().collect();
            writeln!(
                self.out,
                "Residues: {} (chains: {})",
                prediction.structure.residue_count(),
                chains
            )?;
            writeln!(self.out, "Sequence: {}", prediction.structure.sequence())?;
            writeln!(self.out)?;
            writeln!(self.out, "## plDDT")?;
            writeln!(self.out, "{}", PLDDT_NOTE)?;
            writeln!(self.out, "plDDT: {}", prediction.confidence)?;
        }

        if let Some(path) = residue_table {
            writeln!(self.out, "Residue table: {}", path.display())?;
        }
        match saved {
            Some(path) => writeln!(
                self.out,
                "Saved {} to {}",
                view.download.file_name,
                path.display()
            )?,
            None => writeln!(
                self.out,
                "Not saving {} (saving is disabled).",
                view.download.file_name
            )?,
        }
        Ok(())
    }

    fn show_json(&mut self, heading: &str, value: &Value) -> Result<(), CliError> {
        writeln!(self.out, "## {}", heading)?;
        writeln!(self.out, "{}", serde_json::to_string_pretty(value)?)?;
        if self.embedding_summary {
            match EmbeddingVector::from_json(value) {
                Ok(embedding) => writeln!(self.out, "({} values)", embedding.len())?,
                Err(e) => debug!("No embedding summary: {}", e),
            }
        }
        Ok(())
    }

    fn show_array(&mut self, heading: &str, values: &EmbeddingVector) -> Result<(), CliError> {
        writeln!(self.out, "## {}", heading)?;
        writeln!(self.out, "{}", format_array(values.values()))?;
        writeln!(self.out, "({} values)", values.len())?;
        Ok(())
    }

    fn show_error(&mut self, message: &str) -> Result<(), CliError> {
        writeln!(self.err, "❌ {}", message)?;
        Ok(())
    }
}

fn format_array(values: &[f32]) -> String {
    let join = |items: &[f32]| {
        items
            .iter()
            .map(|v| format!("{:?}", v))
            .collect::<Vec<_>>()
            .join(", ")
    };

    if values.len() > ARRAY_SUMMARY_THRESHOLD {
        format!(
            "[{}, ..., {}]",
            join(&values[..ARRAY_EDGE_ITEMS]),
            join(&values[values.len() - ARRAY_EDGE_ITEMS..])
        )
    } else {
        format!("[{}]", join(values))
    }
}
