//! addon_probe - Synthetic health checks for media addons
//!
//! This library verifies that a media addon actually serves usable results:
//! it looks up a real movie and a real TV episode, ranks the quality of the
//! returned streams, and reduces everything to a single up/down verdict with
//! a structured diagnostic report.

mod addon;
mod catalog;
mod config;
mod heartbeat;
mod probe;
mod quality;
mod seed;
mod timed_call;

use rand::thread_rng;
use thiserror::Error;

// Re-export error types
pub use addon::AddonError;
pub use catalog::CatalogError;
pub use probe::ProbeFailure;

// Re-export collaborator seams and their default implementations
pub use addon::{
    AddonClient, HttpAddonClient, MetaDetail, MetaResponse, MetaVideo, StreamCandidate,
    StreamResponse,
};
pub use catalog::{CatalogItem, CatalogProvider, CinemetaProvider, ContentKind};

pub use config::{
    DEFAULT_CATALOG_TIMEOUT_MS, DEFAULT_CATALOG_URL, DEFAULT_MAX_REDIRECTS,
    DEFAULT_META_TIMEOUT_MS, DEFAULT_STREAM_TIMEOUT_MS, ProbeConfig, default_user_agent,
};
pub use heartbeat::{Heartbeat, HeartbeatStatus, MonitorResponse};
pub use probe::{
    AddonInfo, EpisodeInfo, NO_STREAMS_MESSAGE, ProbeOutcome, ProbeReport, ProbeStatus,
    ProbeTarget, ProbeTimings, SeriesProbePath, build_outcome, run_probe,
};
pub use quality::{QualityReport, TierCount, analyze_quality};
pub use seed::{SeedPair, select_seeds};
pub use timed_call::{TimedResult, timed};

/// Progress event emitted during a check
///
/// These events allow library users to follow a check as it runs and
/// provide feedback, or ignore them entirely.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Check started
    Started { addon_url: String },

    /// Fetching the movie and series catalogs
    FetchingSeeds,

    /// Test content chosen
    SeedsSelected { movie: String, series: String },

    /// Querying streams for the movie
    ProbingMovie { id: String },

    /// Movie stream query finished
    MovieProbed { stream_count: usize, elapsed_ms: u64 },

    /// Querying series metadata for its episode list
    FetchingSeriesMeta { id: String },

    /// Series metadata query finished
    SeriesMetaFetched { episode_count: usize, elapsed_ms: u64 },

    /// Querying streams for the series or its first episode
    ProbingSeries { id: String, path: SeriesProbePath },

    /// Series stream query finished
    SeriesProbed { stream_count: usize, elapsed_ms: u64 },

    /// Check complete
    Complete {
        status: ProbeStatus,
        total_streams: usize,
        elapsed_ms: u64,
    },
}

/// Top-level error type for addon checks
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The check was aborted
    #[error("{0}")]
    Probe(#[from] ProbeFailure),

    /// Error setting up the catalog client
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Error setting up the addon client
    #[error("Addon error: {0}")]
    Addon(#[from] AddonError),
}

/// Checks the addon at `addon_url` against the live catalog
///
/// Builds the default Cinemeta catalog provider and HTTP addon client from
/// `config`, runs the full probe, and records the outcome on `heartbeat`.
///
/// Progress events are emitted through the provided callback, allowing
/// library users to track progress, display status, or remain silent.
///
/// # Arguments
///
/// * `addon_url` - Base URL of the addon under test
/// * `config` - Endpoints, timeouts and user agent to use
/// * `heartbeat` - The host's heartbeat to fill in
/// * `progress_callback` - Closure called with progress events
///
/// # Returns
///
/// The full `ProbeReport`, also attached to `heartbeat.response`. An error is
/// returned only when the test content could not be fetched or a client
/// could not be set up; the heartbeat is marked DOWN in both cases.
///
/// # Examples
///
/// ```no_run
/// use addon_probe::{Heartbeat, ProbeConfig, check_addon};
///
/// let mut heartbeat = Heartbeat::default();
/// let report = check_addon(
///     "https://addon.example/manifest-base/",
///     &ProbeConfig::default(),
///     &mut heartbeat,
///     |_| {},
/// )
/// .unwrap();
/// println!("{}", report.message);
/// ```
pub fn check_addon<F>(
    addon_url: &str,
    config: &ProbeConfig,
    heartbeat: &mut Heartbeat,
    progress_callback: F,
) -> Result<ProbeReport, ProbeError>
where
    F: FnMut(ProgressEvent),
{
    let (catalog, addon) = match build_clients(addon_url, config) {
        Ok(clients) => clients,
        Err(e) => {
            heartbeat.record_failure(&e.to_string());
            return Err(e);
        }
    };

    let report = run_probe(
        &catalog,
        &addon,
        &mut thread_rng(),
        heartbeat,
        progress_callback,
    )?;

    Ok(report)
}

/// Creates the default catalog provider and addon client
fn build_clients(
    addon_url: &str,
    config: &ProbeConfig,
) -> Result<(CinemetaProvider, HttpAddonClient), ProbeError> {
    let catalog = CinemetaProvider::new(config)?;
    let addon = HttpAddonClient::new(addon_url, config)?;
    Ok((catalog, addon))
}
