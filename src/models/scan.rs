//! Wire types for the scan pipeline, serialized camelCase to match the
//! public API contract.

use serde::{Deserialize, Serialize};

/// Incoming scan request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    /// Defaults to empty when the field is absent, so a missing `url`
    /// surfaces as a validation error rather than a deserialization
    /// rejection.
    #[serde(default)]
    pub url: String,
}

/// Structured summary the model produces for one page.
///
/// All three fields are required; a completion missing any of them is a
/// response-format error, not a partially filled report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyReport {
    pub summary: String,
    pub findings: Vec<String>,
    pub recommendations: Vec<String>,
}

/// One analyzed page together with its structured summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySummary {
    pub source_url: String,
    pub content: PolicyReport,
}

/// Single-or-list shape for the `policies` field of a scan result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScanPolicies {
    Single(Box<PolicySummary>),
    Many(Vec<PolicySummary>),
}

impl ScanPolicies {
    /// Collapse summaries into the wire shape: exactly one summary
    /// serializes as a bare object, anything else as a list.
    pub fn from_summaries(mut summaries: Vec<PolicySummary>) -> Self {
        if summaries.len() == 1 {
            Self::Single(Box::new(summaries.remove(0)))
        } else {
            Self::Many(summaries)
        }
    }
}

/// Aggregate result returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub url: String,
    pub pages_analyzed: Vec<String>,
    pub policies: ScanPolicies,
}
