//! Sync report and connector metadata output

use serde::Serialize;

use super::{output_rows, print_json, print_yaml, Tabular};
use crate::cli::OutputFormat;
use crate::connector::{ConnectorMetadata, ResourceType, SyncReport};

/// Flattened sync result: one row per resource, entitlement or grant
#[derive(Debug, Clone, PartialEq, Serialize)]
struct GraphRow {
    kind: &'static str,
    id: String,
    name: String,
    detail: String,
}

fn graph_rows(report: &SyncReport) -> Vec<GraphRow> {
    let resources = report.resources.iter().map(|r| GraphRow {
        kind: "resource",
        id: r.id.to_string(),
        name: r.display_name.clone(),
        detail: r
            .parent_resource_id
            .as_ref()
            .map(|p| format!("parent {}", p))
            .unwrap_or_default(),
    });
    let entitlements = report.entitlements.iter().map(|e| GraphRow {
        kind: "entitlement",
        id: e.id.clone(),
        name: e.display_name.clone(),
        detail: format!("grantable to {}", e.grantable_to.join(" ")),
    });
    let grants = report.grants.iter().map(|g| GraphRow {
        kind: "grant",
        id: g.id.clone(),
        name: g.entitlement_id.clone(),
        detail: g.principal.to_string(),
    });
    resources.chain(entitlements).chain(grants).collect()
}

impl Tabular for GraphRow {
    fn headers() -> Vec<&'static str> {
        vec!["KIND", "ID", "NAME", "DETAIL"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.kind.to_string(),
            self.id.clone(),
            self.name.clone(),
            self.detail.clone(),
        ]
    }
}

/// Output a sync report; JSON and YAML carry the full report
pub fn output_sync_report(report: &SyncReport, format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Yaml => print_yaml(report),
        _ => output_rows(&graph_rows(report), format, no_header),
    }
}

#[derive(Serialize)]
struct MetadataView<'a> {
    display_name: &'a str,
    description: &'a str,
    resource_types: &'a [&'a ResourceType],
}

impl Tabular for &ResourceType {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "TRAITS", "DESCRIPTION"]
    }

    fn row(&self) -> Vec<String> {
        let traits: Vec<String> = self
            .traits
            .iter()
            .map(|t| format!("{:?}", t).to_lowercase())
            .collect();
        vec![
            self.id.to_string(),
            self.display_name.to_string(),
            traits.join(" "),
            self.description.to_string(),
        ]
    }
}

/// Output connector metadata together with the declared resource types
pub fn output_metadata(
    metadata: &ConnectorMetadata,
    resource_types: &[&ResourceType],
    format: OutputFormat,
    no_header: bool,
) {
    let view = MetadataView {
        display_name: &metadata.display_name,
        description: &metadata.description,
        resource_types,
    };
    match format {
        OutputFormat::Json => print_json(&view),
        OutputFormat::Yaml => print_yaml(&view),
        OutputFormat::Table => {
            println!("{}: {}", metadata.display_name, metadata.description);
            println!();
            output_rows(resource_types, format, no_header);
        }
        OutputFormat::Csv => output_rows(resource_types, format, no_header),
    }
}
