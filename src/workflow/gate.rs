//! The source quality gate.
//!
//! A pure, deterministic classifier over a batch of gathered sources.
//! Rules are evaluated in order and the first failing rule determines
//! the single rejection reason fed back to the researcher.

use crate::types::SourceRecord;
use std::collections::HashSet;
use url::Url;

/// Rejection reason for an undersized source batch.
pub const REASON_TOO_FEW: &str = "Too few sources. Find at least 3.";
/// Rejection reason for a single-domain source batch.
pub const REASON_ONE_DOMAIN: &str = "All sources come from one domain.";
/// Rejection reason for a batch touching a blocklisted domain.
pub const REASON_LOW_QUALITY: &str = "Low-quality domains detected.";

/// Host domains rejected by default.
pub const DEFAULT_BLOCKED_DOMAINS: &[&str] = &["medium.com", "quora.com", "blogspot.com"];

/// The gate's verdict on a batch of sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The batch is good enough to write a report from.
    Accepted,
    /// The batch was rejected; `reason` goes back to the researcher.
    Rejected {
        /// Why the batch was rejected (first failing rule only).
        reason: String,
    },
}

impl Verdict {
    /// Whether this verdict accepts the batch.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    /// The rejection reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Verdict::Accepted => None,
            Verdict::Rejected { reason } => Some(reason),
        }
    }
}

/// Deterministic accept/reject function over gathered sources.
///
/// The blocklist is configuration, not hardcoded logic; see
/// [`DEFAULT_BLOCKED_DOMAINS`] for the default set.
#[derive(Debug, Clone)]
pub struct QualityGate {
    blocked_domains: HashSet<String>,
}

impl Default for QualityGate {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCKED_DOMAINS.iter().map(|d| d.to_string()))
    }
}

impl QualityGate {
    /// Build a gate with the given blocklist of host names.
    pub fn new(blocked_domains: impl IntoIterator<Item = String>) -> Self {
        Self {
            blocked_domains: blocked_domains
                .into_iter()
                .map(|d| d.trim().to_ascii_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }

    /// Classify a batch of sources. Pure and total: exactly one of the
    /// four outcomes, first failing rule wins, later rules are not
    /// evaluated once one has failed.
    pub fn evaluate(&self, sources: &[SourceRecord]) -> Verdict {
        if sources.len() < 3 {
            return Verdict::Rejected {
                reason: REASON_TOO_FEW.to_string(),
            };
        }

        let domains: HashSet<String> = sources.iter().map(|s| host_domain(&s.url)).collect();

        if domains.len() == 1 {
            return Verdict::Rejected {
                reason: REASON_ONE_DOMAIN.to_string(),
            };
        }

        if domains.iter().any(|d| self.blocked_domains.contains(d)) {
            return Verdict::Rejected {
                reason: REASON_LOW_QUALITY.to_string(),
            };
        }

        Verdict::Accepted
    }
}

/// Extract the lowercased host component of `raw`.
///
/// Malformed URLs degrade to the empty-host domain `""`, which still
/// participates in the distinct-domain count but never matches the
/// blocklist.
fn host_domain(raw: &str) -> String {
    Url::parse(raw)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_ascii_lowercase()))
        .unwrap_or_default()
}
