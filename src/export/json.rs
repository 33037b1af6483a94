//! JSON export implementation.
//!
//! Exports query results in JSON format for machine-readable output.

use super::{ExportData, Exporter, QueryReport};
use crate::analysis::OutcomeKind;
use crate::graph::GraphSummary;
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Serializable chain for JSON output.
#[derive(Serialize)]
struct JsonChain<'a> {
    from: &'a str,
    to: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    hops: Option<usize>,
    names: Vec<&'a str>,
}

/// Serializable clique for JSON output.
#[derive(Serialize)]
struct JsonClique<'a> {
    size: usize,
    members: &'a [String],
}

/// Query-specific part of the JSON output.
#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum JsonResult<'a> {
    Summary,
    Chain(JsonChain<'a>),
    Cliques {
        school: &'a str,
        cliques: Vec<JsonClique<'a>>,
    },
    Connectors(&'a [String]),
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport<'a> {
    query: &'static str,
    outcome: OutcomeKind,
    graph: &'a GraphSummary,
    #[serde(skip_serializing_if = "is_summary")]
    result: JsonResult<'a>,
}

fn is_summary(result: &JsonResult<'_>) -> bool {
    matches!(result, JsonResult::Summary)
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &ExportData, writer: &mut W) -> io::Result<()> {
        let result = match &data.report {
            QueryReport::Summary => JsonResult::Summary,
            QueryReport::Chain { from, to, chain } => JsonResult::Chain(JsonChain {
                from,
                to,
                hops: chain.as_ref().map(|c| c.hops()),
                names: chain
                    .iter()
                    .flat_map(|c| c.names.iter().map(String::as_str))
                    .collect(),
            }),
            QueryReport::Cliques { school, cliques } => JsonResult::Cliques {
                school,
                cliques: cliques
                    .iter()
                    .map(|c| JsonClique {
                        size: c.len(),
                        members: &c.members,
                    })
                    .collect(),
            },
            QueryReport::Connectors { connectors } => JsonResult::Connectors(connectors),
        };

        let export = JsonExport {
            query: data.report.query_name(),
            outcome: data.report.outcome(),
            graph: &data.summary,
            result,
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
