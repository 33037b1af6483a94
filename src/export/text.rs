//! Plain text export implementation.
//!
//! The default terminal output: just the answer, one item per line.

use super::{ExportData, Exporter, QueryReport};
use std::io::{self, Write};

/// Plain text exporter implementation.
pub struct TextExporter;

impl Exporter for TextExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        match &data.report {
            QueryReport::Summary => {
                let summary = &data.summary;
                writeln!(writer, "People:      {}", summary.people)?;
                writeln!(writer, "Friendships: {}", summary.friendships)?;
                writeln!(writer, "Students:    {}", summary.students)?;
                writeln!(writer, "Isolated:    {}", summary.isolated)?;
                writeln!(writer, "Schools:     {}", summary.schools.join(", "))?;
            }
            QueryReport::Chain { from, to, chain } => match chain {
                Some(chain) => writeln!(writer, "{} ({} hops)", chain.path(), chain.hops())?,
                None => writeln!(writer, "No chain: {} and {} are not connected", from, to)?,
            },
            QueryReport::Cliques { school, cliques } => {
                if cliques.is_empty() {
                    writeln!(writer, "No students attend {}", school)?;
                }
                for (i, clique) in cliques.iter().enumerate() {
                    writeln!(
                        writer,
                        "Clique {} ({}): {}",
                        i + 1,
                        clique.len(),
                        clique.members.join(", ")
                    )?;
                }
            }
            QueryReport::Connectors { connectors } => {
                if connectors.is_empty() {
                    writeln!(writer, "No connectors")?;
                }
                for name in connectors {
                    writeln!(writer, "{}", name)?;
                }
            }
        }

        Ok(())
    }
}
