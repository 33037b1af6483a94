//! CSV export implementation.
//!
//! Exports query results in CSV format for spreadsheet use. Each query
//! type has its own header; an empty answer produces the header alone.

use super::{ExportData, Exporter, QueryReport};
use std::io::{self, Write};

/// CSV exporter implementation.
pub struct CsvExporter;

impl CsvExporter {
    /// Escape a field value for CSV format.
    ///
    /// Wraps the value in quotes if it contains commas, quotes, or newlines.
    fn escape_field(value: &str) -> String {
        if value.contains(',') || value.contains('"') || value.contains('\n') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}

impl Exporter for CsvExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        match &data.report {
            QueryReport::Summary => {
                let summary = &data.summary;
                writeln!(writer, "metric,value")?;
                writeln!(writer, "people,{}", summary.people)?;
                writeln!(writer, "friendships,{}", summary.friendships)?;
                writeln!(writer, "students,{}", summary.students)?;
                writeln!(writer, "schools,{}", summary.schools.len())?;
                writeln!(writer, "isolated,{}", summary.isolated)?;
            }
            QueryReport::Chain { chain, .. } => {
                writeln!(writer, "step,name")?;
                for (step, name) in chain.iter().flat_map(|c| c.names.iter()).enumerate() {
                    writeln!(writer, "{},{}", step, Self::escape_field(name))?;
                }
            }
            QueryReport::Cliques { school, cliques } => {
                writeln!(writer, "school,clique,name")?;
                for (i, clique) in cliques.iter().enumerate() {
                    for name in &clique.members {
                        writeln!(
                            writer,
                            "{},{},{}",
                            Self::escape_field(school),
                            i + 1,
                            Self::escape_field(name)
                        )?;
                    }
                }
            }
            QueryReport::Connectors { connectors } => {
                writeln!(writer, "name")?;
                for name in connectors {
                    writeln!(writer, "{}", Self::escape_field(name))?;
                }
            }
        }

        Ok(())
    }
}
