//! Markdown export implementation.
//!
//! Exports query results in Markdown format for documentation and reporting.

use super::{ExportData, Exporter, QueryReport};
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        // Title
        writeln!(writer, "# Friendship Graph Report")?;
        writeln!(writer)?;

        // Summary section
        let summary = &data.summary;
        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Metric | Count |")?;
        writeln!(writer, "|--------|-------|")?;
        writeln!(writer, "| People | {} |", summary.people)?;
        writeln!(writer, "| Friendships | {} |", summary.friendships)?;
        writeln!(writer, "| Students | {} |", summary.students)?;
        writeln!(writer, "| Schools | {} |", summary.schools.len())?;
        writeln!(writer, "| Isolated | {} |", summary.isolated)?;
        writeln!(writer)?;

        match &data.report {
            QueryReport::Summary => {
                if !summary.schools.is_empty() {
                    writeln!(writer, "## Schools")?;
                    writeln!(writer)?;
                    for school in &summary.schools {
                        writeln!(writer, "- {}", school)?;
                    }
                    writeln!(writer)?;
                }
            }
            QueryReport::Chain { from, to, chain } => {
                writeln!(writer, "## Shortest Chain: {} to {}", from, to)?;
                writeln!(writer)?;
                match chain {
                    Some(chain) => {
                        writeln!(writer, "{} hop(s): `{}`", chain.hops(), chain.path())?;
                    }
                    None => {
                        writeln!(writer, "_No chain: {} and {} are not connected._", from, to)?;
                    }
                }
                writeln!(writer)?;
            }
            QueryReport::Cliques { school, cliques } => {
                writeln!(writer, "## Cliques at {} ({})", school, cliques.len())?;
                writeln!(writer)?;
                if cliques.is_empty() {
                    writeln!(writer, "_No students attend {}._", school)?;
                } else {
                    writeln!(writer, "| # | Size | Members |")?;
                    writeln!(writer, "|---|------|---------|")?;
                    for (i, clique) in cliques.iter().enumerate() {
                        writeln!(
                            writer,
                            "| {} | {} | {} |",
                            i + 1,
                            clique.len(),
                            clique.members.join(", ")
                        )?;
                    }
                }
                writeln!(writer)?;
            }
            QueryReport::Connectors { connectors } => {
                writeln!(writer, "## Connectors ({})", connectors.len())?;
                writeln!(writer)?;
                if connectors.is_empty() {
                    writeln!(writer, "_No connectors found._")?;
                } else {
                    for name in connectors {
                        writeln!(writer, "- {}", name)?;
                    }
                }
                writeln!(writer)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::*;

    fn export_md(data: &ExportData) -> String {
        let mut output = Vec::new();
        MarkdownExporter.export(data, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_markdown_export_summary_table() {
        let md = export_md(&summary_data());

        assert!(md.starts_with("# Friendship Graph Report"));
        assert!(md.contains("| People | 5 |"));
        assert!(md.contains("| Friendships | 3 |"));
        assert!(md.contains("## Schools"));
        assert!(md.contains("- y"));
    }

    #[test]
    fn test_markdown_export_chain() {
        let md = export_md(&chain_data("a", "d"));
        assert!(md.contains("## Shortest Chain: a to d"));
        assert!(md.contains("3 hop(s): `a -> b -> c -> d`"));
    }

    #[test]
    fn test_markdown_export_unreachable() {
        let md = export_md(&chain_data("a", "e"));
        assert!(md.contains("_No chain: a and e are not connected._"));
    }

    #[test]
    fn test_markdown_export_cliques() {
        let md = export_md(&cliques_data("x"));
        assert!(md.contains("## Cliques at x (2)"));
        assert!(md.contains("| 1 | 2 | a, b |"));
        assert!(md.contains("| 2 | 1 | e |"));
    }

    #[test]
    fn test_markdown_export_no_cliques() {
        let md = export_md(&cliques_data("z"));
        assert!(md.contains("_No students attend z._"));
    }

    #[test]
    fn test_markdown_export_connectors() {
        let md = export_md(&connectors_data());
        assert!(md.contains("## Connectors (2)"));
        assert!(md.contains("- b\n- c\n"));
    }
}
