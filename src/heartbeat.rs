//! Heartbeat model
//!
//! The host owns a [`Heartbeat`] per check; the probe fills in its status,
//! message, latency and response payload. Payloads are tagged by monitor
//! type so downstream notification formatting can branch on the variant.

use crate::probe::{ProbeReport, ProbeStatus};
use serde::Serialize;

/// Status of a single heartbeat
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HeartbeatStatus {
    Down,
    Up,
    #[default]
    Pending,
}

impl From<ProbeStatus> for HeartbeatStatus {
    fn from(status: ProbeStatus) -> Self {
        match status {
            ProbeStatus::Up => HeartbeatStatus::Up,
            ProbeStatus::Down => HeartbeatStatus::Down,
        }
    }
}

/// Monitor-specific payload attached to a heartbeat
///
/// Serialized with a `monitorType` discriminator next to the payload fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "monitorType", rename_all = "kebab-case")]
pub enum MonitorResponse {
    /// Result of a media addon probe
    StremioAddon(ProbeReport),
}

impl MonitorResponse {
    /// The discriminator value as serialized
    pub fn monitor_type(&self) -> &'static str {
        match self {
            MonitorResponse::StremioAddon(_) => "stremio-addon",
        }
    }

    /// The addon probe report, if this payload carries one
    pub fn as_probe_report(&self) -> Option<&ProbeReport> {
        match self {
            MonitorResponse::StremioAddon(report) => Some(report),
        }
    }
}

/// A heartbeat as seen by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Heartbeat {
    pub status: HeartbeatStatus,
    /// Human-readable summary
    pub msg: String,
    /// Check latency in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ping: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<MonitorResponse>,
}

impl Heartbeat {
    /// Records a finished (or aborted) probe on this heartbeat
    pub(crate) fn record_probe(&mut self, status: ProbeStatus, msg: &str, report: &ProbeReport) {
        self.status = status.into();
        self.msg = msg.to_string();
        self.ping = Some(report.timing.total);
        self.response = Some(MonitorResponse::StremioAddon(report.clone()));
    }

    /// Records a failure that happened before any probe could run
    pub(crate) fn record_failure(&mut self, msg: &str) {
        self.status = HeartbeatStatus::Down;
        self.msg = msg.to_string();
    }
}
