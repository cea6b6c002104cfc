//! Per-target outcomes and their rendering.

use colored::*;
use serde::Serialize;

use crate::config::{EXIT_ALL_PUBLIC, EXIT_CHECK_FAILED, EXIT_PRIVATE_FOUND};
use crate::security::AddressVerdict;

/// Result of checking one CLI target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetOutcome {
    /// The target as typed
    pub target: String,
    /// `address`, `hostname`, `url`, or `invalid`
    pub kind: &'static str,
    /// Fail-closed verdict; `None` when the check itself failed
    pub private: Option<bool>,
    /// Every address that took part in the verdict
    pub addresses: Vec<AddressVerdict>,
    /// Why the verdict was reached without addresses, or why the check failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Error message when the check failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TargetOutcome {
    /// Renders the outcome as one JSON line.
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            serde_json::json!({ "target": self.target, "error": e.to_string() }).to_string()
        })
    }

    /// Renders the outcome as one human-readable line.
    pub fn to_plain_line(&self) -> String {
        let label = match self.private {
            Some(true) => "PRIVATE".red().bold(),
            Some(false) => "PUBLIC".green().bold(),
            None => "ERROR".yellow().bold(),
        };

        let mut line = format!("{label:<7} {}", self.target);
        if let Some(error) = &self.error {
            line.push_str(&format!(": {error}"));
            return line;
        }

        let rendered: Vec<String> = self
            .addresses
            .iter()
            .filter(|v| self.kind != "address" || v.is_private())
            .map(render_address)
            .collect();
        if !rendered.is_empty() {
            if self.kind == "address" {
                line.push_str(&format!(" {}", rendered.join(", ")));
            } else {
                line.push_str(&format!(" -> {}", rendered.join(", ")));
            }
        }
        if let Some(note) = &self.note {
            line.push_str(&format!(" ({note})"));
        }
        line
    }
}

fn render_address(verdict: &AddressVerdict) -> String {
    match (&verdict.range, verdict.purpose) {
        (Some(range), Some(purpose)) => format!("{} [{} {}]", verdict.address, range, purpose.code()),
        _ => verdict.address.to_string(),
    }
}

/// Outcomes of a whole run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// One outcome per target, in input order
    pub outcomes: Vec<TargetOutcome>,
}

impl RunReport {
    /// Number of targets judged private.
    pub fn private_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.private == Some(true)).count()
    }

    /// Number of targets whose check failed.
    pub fn error_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.private.is_none()).count()
    }

    /// Process exit code: errors beat private findings, which beat all-public.
    pub fn exit_code(&self) -> i32 {
        if self.error_count() > 0 {
            EXIT_CHECK_FAILED
        } else if self.private_count() > 0 {
            EXIT_PRIVATE_FOUND
        } else {
            EXIT_ALL_PUBLIC
        }
    }
}
