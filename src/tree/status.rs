//! Health status precedence and reduction
//!
//! Statuses combine by "worst wins": reducing a kind's resources down to one
//! representative status must give the same answer no matter how the pairwise
//! reduction is ordered, so the precedence is a total order and reduction is
//! a max over it. Degraded outranks progressing outranks healthy, matching
//! the upstream dashboard; the remaining statuses slot in between.

use std::fmt;

/// Recognized health status values, declared in ascending severity order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HealthStatus {
    Healthy,
    Suspended,
    Unknown,
    Missing,
    Progressing,
    Degraded,
}

impl HealthStatus {
    /// Canonical lowercase form used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Suspended => "suspended",
            HealthStatus::Unknown => "unknown",
            HealthStatus::Missing => "missing",
            HealthStatus::Progressing => "progressing",
            HealthStatus::Degraded => "degraded",
        }
    }

    /// Case-insensitive parse of a status string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "healthy" => Some(HealthStatus::Healthy),
            "suspended" => Some(HealthStatus::Suspended),
            "unknown" => Some(HealthStatus::Unknown),
            "missing" => Some(HealthStatus::Missing),
            "progressing" => Some(HealthStatus::Progressing),
            "degraded" => Some(HealthStatus::Degraded),
            _ => None,
        }
    }

    /// All statuses in ascending severity order
    pub fn all() -> &'static [Self] {
        &[
            HealthStatus::Healthy,
            HealthStatus::Suspended,
            HealthStatus::Unknown,
            HealthStatus::Missing,
            HealthStatus::Progressing,
            HealthStatus::Degraded,
        ]
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity rank of an arbitrary status string
///
/// Empty ranks below everything; strings outside the recognized vocabulary
/// rank above empty but below every recognized status.
fn severity_rank(status: &str) -> u8 {
    if status.is_empty() {
        return 0;
    }
    match HealthStatus::parse(status) {
        Some(known) => known as u8 + 2,
        None => 1,
    }
}

/// Combine two status strings into the worse of the two
///
/// Returns one of the inputs, chosen by severity rank with an exact-string
/// tiebreak. Idempotent, commutative, and associative, so folding a list of
/// statuses gives one order-independent answer. Pass an empty string for a
/// missing status; it never overrides a non-empty one.
pub fn reduce_status(existing: &str, incoming: &str) -> String {
    let existing_key = (severity_rank(existing), existing);
    let incoming_key = (severity_rank(incoming), incoming);
    if incoming_key > existing_key {
        incoming.to_string()
    } else {
        existing.to_string()
    }
}

/// Fold a list of status strings down to one representative status
pub fn reduce_all<'a>(statuses: impl IntoIterator<Item = &'a str>) -> String {
    statuses
        .into_iter()
        .fold(String::new(), |acc, status| reduce_status(&acc, status))
}
