use crate::error::Result;
use crate::AuditReport;

use serde::Serialize;

#[derive(Serialize)]
struct JsonOutput<'a> {
    reports: &'a [AuditReport],
}

/// Render audit reports as a JSON document.
pub fn render(reports: &[AuditReport]) -> Result<String> {
    let output = JsonOutput { reports };
    let json = serde_json::to_string_pretty(&output)?;
    Ok(json)
}
