//! Report DTOs

use serde::Deserialize;

/// Query string of `GET /api/reports/export`
#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    /// `csv` (default) or `json`
    pub format: Option<String>,
}
