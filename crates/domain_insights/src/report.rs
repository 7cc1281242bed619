//! Fund report export

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

use core_kernel::FundId;
use domain_fund::{Fund, RiskLevel};

use crate::dashboard::DashboardOverview;
use crate::error::InsightError;

/// Output encoding of a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl ReportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "text/csv; charset=utf-8",
            ReportFormat::Json => "application/json",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = InsightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            other => Err(InsightError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// One line of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundReportRow {
    pub id: FundId,
    pub name: String,
    pub value: Decimal,
    pub performance: Decimal,
    pub risk_level: RiskLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Fund> for FundReportRow {
    fn from(fund: &Fund) -> Self {
        Self {
            id: fund.id,
            name: fund.name.clone(),
            value: fund.value,
            performance: fund.performance,
            risk_level: fund.risk_level,
            created_at: fund.created_at,
            updated_at: fund.updated_at,
        }
    }
}

/// Totals printed with the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub fund_count: usize,
    pub total_assets: Decimal,
    pub average_performance: Decimal,
    pub risk_warning_count: usize,
}

/// Fund report as exported from the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundReport {
    pub generated_at: DateTime<Utc>,
    pub summary: ReportSummary,
    pub funds: Vec<FundReportRow>,
}

impl FundReport {
    /// Builds a report over a fund set
    pub fn build(funds: &[Fund], generated_at: DateTime<Utc>) -> Result<Self, InsightError> {
        let overview = DashboardOverview::compute(funds, Vec::new(), generated_at)?;
        Ok(Self {
            generated_at,
            summary: ReportSummary {
                fund_count: overview.fund_count,
                total_assets: overview.total_assets,
                average_performance: overview.average_performance,
                risk_warning_count: overview.risk_warning_count,
            },
            funds: funds.iter().map(FundReportRow::from).collect(),
        })
    }

    /// Suggested download name, e.g. `sofi-fund-report-20240131.csv`
    pub fn file_name(&self, format: ReportFormat) -> String {
        format!(
            "sofi-fund-report-{}.{}",
            self.generated_at.format("%Y%m%d"),
            format.extension()
        )
    }

    /// Encodes the fund rows as CSV with a header line
    pub fn to_csv(&self) -> Result<Vec<u8>, InsightError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        if self.funds.is_empty() {
            // serde only emits headers alongside the first record
            writer.write_record([
                "id",
                "name",
                "value",
                "performance",
                "risk_level",
                "created_at",
                "updated_at",
            ])?;
        }
        for row in &self.funds {
            writer.serialize(row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| InsightError::Export(e.to_string()))?;
        debug!(rows = self.funds.len(), bytes = bytes.len(), "Encoded fund report as CSV");
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use domain_fund::FundDraft;
    use rust_decimal_macros::dec;

    fn funds() -> Vec<Fund> {
        vec![
            Fund::create(FundDraft::new("Alpha, Growth", dec!(100), dec!(2), RiskLevel::High)).unwrap(),
            Fund::create(FundDraft::new("Beta Bonds", dec!(300), dec!(4), RiskLevel::Low)).unwrap(),
        ]
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("CSV".parse::<ReportFormat>().unwrap(), ReportFormat::Csv);
        assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!(matches!("xlsx".parse::<ReportFormat>(), Err(InsightError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_summary() {
        let report = FundReport::build(&funds(), Utc::now()).unwrap();
        assert_eq!(report.summary.fund_count, 2);
        assert_eq!(report.summary.total_assets, dec!(400));
        assert_eq!(report.summary.average_performance, dec!(3));
        assert_eq!(report.summary.risk_warning_count, 1);
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let report = FundReport::build(&funds(), Utc::now()).unwrap();
        let csv = String::from_utf8(report.to_csv().unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id,name,value,performance,risk_level,created_at,updated_at");
        assert!(lines[1].contains("\"Alpha, Growth\",100.00,2.00,High"));
        assert!(lines[2].contains("Beta Bonds,300.00,4.00,Low"));
    }

    #[test]
    fn test_empty_csv_still_has_header() {
        let report = FundReport::build(&[], Utc::now()).unwrap();
        let csv = String::from_utf8(report.to_csv().unwrap()).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn test_file_name() {
        let at = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap();
        let report = FundReport::build(&[], at).unwrap();
        assert_eq!(report.file_name(ReportFormat::Csv), "sofi-fund-report-20240131.csv");
        assert_eq!(report.file_name(ReportFormat::Json), "sofi-fund-report-20240131.json");
    }
}
