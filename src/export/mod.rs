//! Export functionality for query results.
//!
//! This module provides exporters for rendering a query report in
//! various formats: plain text, JSON, CSV, and Markdown.

pub mod csv;
pub mod json;
pub mod markdown;
pub mod text;

use crate::analysis::{Chain, Clique, OutcomeKind};
use crate::graph::{FriendGraph, GraphSummary};
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Plain text - terminal-friendly
    #[default]
    Text,
    /// JSON format - machine-readable, full data
    Json,
    /// CSV format - spreadsheet-friendly
    Csv,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: text, json, csv, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// The answer to a single query, with the arguments that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryReport {
    /// Graph statistics only
    Summary,
    /// Shortest chain between two people; `None` when unreachable
    Chain {
        from: String,
        to: String,
        chain: Option<Chain>,
    },
    /// Cliques of one school
    Cliques { school: String, cliques: Vec<Clique> },
    /// Connectors of the whole graph
    Connectors { connectors: Vec<String> },
}

impl QueryReport {
    /// Returns the query name used in headings and JSON output.
    pub fn query_name(&self) -> &'static str {
        match self {
            QueryReport::Summary => "summary",
            QueryReport::Chain { .. } => "chain",
            QueryReport::Cliques { .. } => "cliques",
            QueryReport::Connectors { .. } => "connectors",
        }
    }

    /// Classifies the answer.
    pub fn outcome(&self) -> OutcomeKind {
        match self {
            QueryReport::Summary => OutcomeKind::Found,
            QueryReport::Chain { chain: None, .. } => OutcomeKind::Unreachable,
            QueryReport::Chain { .. } => OutcomeKind::Found,
            QueryReport::Cliques { cliques, .. } if cliques.is_empty() => OutcomeKind::EmptyResult,
            QueryReport::Connectors { connectors } if connectors.is_empty() => {
                OutcomeKind::EmptyResult
            }
            QueryReport::Cliques { .. } | QueryReport::Connectors { .. } => OutcomeKind::Found,
        }
    }
}

/// Data container for export operations.
#[derive(Debug, Clone)]
pub struct ExportData {
    /// Statistics of the queried graph
    pub summary: GraphSummary,
    /// The query answer
    pub report: QueryReport,
}

impl ExportData {
    /// Create new export data for a report on `graph`.
    pub fn new(graph: &FriendGraph, report: QueryReport) -> Self {
        Self {
            summary: graph.summary(),
            report,
        }
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the data to the given writer.
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()>;
}

/// Export data in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    data: &ExportData,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Text => text::TextExporter.export(data, writer),
        ExportFormat::Json => json::JsonExporter.export(data, writer),
        ExportFormat::Csv => csv::CsvExporter.export(data, writer),
        ExportFormat::Markdown => markdown::MarkdownExporter.export(data, writer),
    }
}

/// Export data to a string.
pub fn export_to_string(format: ExportFormat, data: &ExportData) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("text".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(
            "markdown".parse::<ExportFormat>().unwrap(),
            ExportFormat::Markdown
        );
        assert_eq!(
            "md".parse::<ExportFormat>().unwrap(),
            ExportFormat::Markdown
        );
        assert!("invalid".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_export_format_display() {
        assert_eq!(format!("{}", ExportFormat::Text), "text");
        assert_eq!(format!("{}", ExportFormat::Json), "json");
        assert_eq!(format!("{}", ExportFormat::Csv), "csv");
        assert_eq!(format!("{}", ExportFormat::Markdown), "markdown");
    }

    #[test]
    fn test_report_outcome() {
        assert_eq!(chain_data("a", "d").report.outcome(), OutcomeKind::Found);
        assert_eq!(chain_data("a", "e").report.outcome(), OutcomeKind::Unreachable);
        assert_eq!(cliques_data("x").report.outcome(), OutcomeKind::Found);
        assert_eq!(cliques_data("z").report.outcome(), OutcomeKind::EmptyResult);
        assert_eq!(connectors_data().report.outcome(), OutcomeKind::Found);
        assert_eq!(summary_data().report.outcome(), OutcomeKind::Found);

        let empty = QueryReport::Connectors { connectors: Vec::new() };
        assert_eq!(empty.outcome(), OutcomeKind::EmptyResult);
    }

    #[test]
    fn test_export_data_summary() {
        let data = summary_data();
        assert_eq!(data.summary.people, 5);
        assert_eq!(data.summary.friendships, 3);
        assert_eq!(data.summary.isolated, 1);
        assert_eq!(data.summary.schools, vec!["x", "y"]);
    }

    #[test]
    fn test_export_to_string_every_format() {
        let data = connectors_data();
        for format in [
            ExportFormat::Text,
            ExportFormat::Json,
            ExportFormat::Csv,
            ExportFormat::Markdown,
        ] {
            let out = export_to_string(format, &data).unwrap();
            assert!(out.contains('b'), "{} output missing connector", format);
        }
    }
}
