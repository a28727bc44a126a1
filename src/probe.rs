//! Probe orchestration
//!
//! Runs a complete addon check: seed selection, the movie probe, and the
//! series probe with its episode fallback, aggregated into one report and a
//! single up/down verdict.

use crate::ProgressEvent;
use crate::addon::{AddonClient, MetaVideo, StreamCandidate, StreamResponse};
use crate::catalog::{CatalogItem, CatalogProvider, ContentKind};
use crate::heartbeat::Heartbeat;
use crate::quality::{QualityReport, analyze_quality};
use crate::seed::select_seeds;
use crate::timed_call::{TimedResult, timed};
use chrono::{DateTime, Utc};
use log::{info, warn};
use rand::Rng;
use serde::Serialize;
use std::time::Instant;
use thiserror::Error;

/// Message used when neither probe returned a stream
pub const NO_STREAMS_MESSAGE: &str = "No streams found for test content";

/// The only failure that aborts a check
#[derive(Debug, Error)]
pub enum ProbeFailure {
    /// The test content could not be selected
    #[error("Failed to fetch test content: {0}")]
    SeedFetch(String),
}

/// Overall verdict of a check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProbeStatus {
    Up,
    #[default]
    Down,
}

impl ProbeStatus {
    /// UP when at least one probe found streams
    pub fn from_outcomes(movie_working: bool, series_working: bool) -> Self {
        if movie_working || series_working {
            ProbeStatus::Up
        } else {
            ProbeStatus::Down
        }
    }
}

/// Which of the series probe paths was taken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesProbePath {
    /// The meta query listed episodes; the first one was probed
    FirstEpisode,
    /// The meta query succeeded without episodes; the series id was probed
    SeriesWithoutEpisodes,
    /// The meta query failed; the series id was probed
    MetaUnavailable,
}

/// Episode details, present only on episode-level series probes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeInfo {
    /// Identifier of the series the episode belongs to
    pub series_id: String,
    pub episode_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode: Option<u32>,
}

impl EpisodeInfo {
    fn from_video(series_id: &str, video: &MetaVideo) -> Self {
        Self {
            series_id: series_id.to_string(),
            episode_title: video.display_title().to_string(),
            season: video.season,
            episode: video.episode,
        }
    }
}

/// Result of probing one piece of content
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeOutcome {
    /// Identifier the addon was queried with
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    pub stream_count: usize,
    pub streams: Vec<StreamCandidate>,
    pub quality: QualityReport,
    pub working: bool,
    /// Stream query latency in milliseconds
    pub response_time: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub episode: Option<EpisodeInfo>,
}

/// What a probe is about to query
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeTarget {
    pub id: String,
    pub name: String,
    pub poster: Option<String>,
}

impl From<&CatalogItem> for ProbeTarget {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.content_id().to_string(),
            name: item.name.clone(),
            poster: item.poster.clone(),
        }
    }
}

/// Builds the outcome for a stream query
///
/// A failed query yields an outcome with no streams, an empty quality report
/// and the failure message. A successful query is working iff it returned at
/// least one stream.
pub fn build_outcome(
    target: ProbeTarget,
    query: TimedResult<StreamResponse>,
    episode: Option<EpisodeInfo>,
) -> ProbeOutcome {
    let response_time = query.elapsed_ms;
    let (streams, error) = match query.result {
        Ok(response) => (response.streams, None),
        Err(message) => (Vec::new(), Some(message)),
    };

    ProbeOutcome {
        id: target.id,
        name: target.name,
        poster: target.poster,
        stream_count: streams.len(),
        quality: analyze_quality(&streams),
        working: !streams.is_empty(),
        streams,
        response_time,
        error,
        episode,
    }
}

/// The addon being checked
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddonInfo {
    pub url: String,
}

/// Per-stage durations of a check, in milliseconds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeTimings {
    pub total: u64,
    pub seed_fetch: u64,
    pub movie_probe: u64,
    pub series_probe: u64,
    pub meta_probe: u64,
}

/// Complete diagnostic report of one check
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeReport {
    /// Unique identifier of this check run
    pub check_id: String,
    pub addon: AddonInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie: Option<ProbeOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<ProbeOutcome>,
    pub status: ProbeStatus,
    pub total_streams: usize,
    pub message: String,
    pub timing: ProbeTimings,
    pub tested_at: DateTime<Utc>,
}

impl ProbeReport {
    /// Creates an empty DOWN report for `addon_url`
    pub fn new(addon_url: &str) -> Self {
        Self {
            check_id: ulid::Ulid::new().to_string(),
            addon: AddonInfo {
                url: addon_url.to_string(),
            },
            movie: None,
            series: None,
            status: ProbeStatus::Down,
            total_streams: 0,
            message: String::new(),
            timing: ProbeTimings::default(),
            tested_at: Utc::now(),
        }
    }

    /// Stream count of both outcomes, absent outcomes counting as zero
    fn sum_streams(&self) -> usize {
        [&self.movie, &self.series]
            .into_iter()
            .flatten()
            .map(|outcome| outcome.stream_count)
            .sum()
    }

    /// Derives status, total and message from the recorded outcomes
    fn conclude(&mut self) {
        let movie_working = self.movie.as_ref().is_some_and(|o| o.working);
        let series_working = self.series.as_ref().is_some_and(|o| o.working);

        self.total_streams = self.sum_streams();
        self.status = ProbeStatus::from_outcomes(movie_working, series_working);
        self.message = match self.status {
            ProbeStatus::Up => format!(
                "Movie: {} streams, Series: {} streams ({}ms)",
                self.movie.as_ref().map_or(0, |o| o.stream_count),
                self.series.as_ref().map_or(0, |o| o.stream_count),
                self.timing.total
            ),
            ProbeStatus::Down => NO_STREAMS_MESSAGE.to_string(),
        };
    }
}

/// Runs a full check of `addon` and records the result on `heartbeat`
///
/// Probe failures are absorbed into the report. Only a failed seed
/// selection aborts the check; in that case the partial report is still
/// attached to the heartbeat before the error is returned.
pub fn run_probe<C, A, R, F>(
    catalog: &C,
    addon: &A,
    rng: &mut R,
    heartbeat: &mut Heartbeat,
    mut progress: F,
) -> Result<ProbeReport, ProbeFailure>
where
    C: CatalogProvider + ?Sized,
    A: AddonClient + ?Sized,
    R: Rng,
    F: FnMut(ProgressEvent),
{
    let start = Instant::now();
    let mut report = ProbeReport::new(addon.base_url());

    progress(ProgressEvent::Started {
        addon_url: report.addon.url.clone(),
    });

    progress(ProgressEvent::FetchingSeeds);
    let seeds = select_seeds(catalog, rng);
    report.timing.seed_fetch = seeds.elapsed_ms;

    let seeds = match seeds.result {
        Ok(seeds) => seeds,
        Err(message) => {
            warn!("Seed fetch failed for {}: {}", report.addon.url, message);
            report.timing.total = start.elapsed().as_millis() as u64;
            report.message = message.clone();
            heartbeat.record_probe(ProbeStatus::Down, &message, &report);
            progress(ProgressEvent::Complete {
                status: ProbeStatus::Down,
                total_streams: 0,
                elapsed_ms: report.timing.total,
            });
            return Err(ProbeFailure::SeedFetch(message));
        }
    };

    progress(ProgressEvent::SeedsSelected {
        movie: seeds.movie.name.clone(),
        series: seeds.series.name.clone(),
    });

    let movie = probe_movie(addon, &seeds.movie, &mut report.timing, &mut progress);
    report.movie = Some(movie);

    let series = probe_series(addon, &seeds.series, &mut report.timing, &mut progress);
    report.series = Some(series);

    report.timing.total = start.elapsed().as_millis() as u64;
    report.conclude();

    info!("Check of {}: {}", report.addon.url, report.message);
    heartbeat.record_probe(report.status, &report.message, &report);

    progress(ProgressEvent::Complete {
        status: report.status,
        total_streams: report.total_streams,
        elapsed_ms: report.timing.total,
    });

    Ok(report)
}

fn probe_movie<A, F>(
    addon: &A,
    item: &CatalogItem,
    timing: &mut ProbeTimings,
    progress: &mut F,
) -> ProbeOutcome
where
    A: AddonClient + ?Sized,
    F: FnMut(ProgressEvent),
{
    let target = ProbeTarget::from(item);
    progress(ProgressEvent::ProbingMovie {
        id: target.id.clone(),
    });

    let query = timed(|| addon.streams(ContentKind::Movie, &target.id));
    timing.movie_probe = query.elapsed_ms;
    log_soft_failure(ContentKind::Movie, &target.id, &query);

    let outcome = build_outcome(target, query, None);
    progress(ProgressEvent::MovieProbed {
        stream_count: outcome.stream_count,
        elapsed_ms: outcome.response_time,
    });
    outcome
}

/// Probes the series, preferring its first listed episode
fn probe_series<A, F>(
    addon: &A,
    item: &CatalogItem,
    timing: &mut ProbeTimings,
    progress: &mut F,
) -> ProbeOutcome
where
    A: AddonClient + ?Sized,
    F: FnMut(ProgressEvent),
{
    let series = ProbeTarget::from(item);
    progress(ProgressEvent::FetchingSeriesMeta {
        id: series.id.clone(),
    });

    let meta = timed(|| addon.meta(ContentKind::Series, &series.id));
    timing.meta_probe = meta.elapsed_ms;

    let (path, first_episode) = match &meta.result {
        Ok(response) => match response.videos().first() {
            Some(video) => (SeriesProbePath::FirstEpisode, Some(video.clone())),
            None => (SeriesProbePath::SeriesWithoutEpisodes, None),
        },
        Err(message) => {
            warn!("Meta query for series {} failed: {}", series.id, message);
            (SeriesProbePath::MetaUnavailable, None)
        }
    };
    progress(ProgressEvent::SeriesMetaFetched {
        episode_count: meta.value().map_or(0, |m| m.videos().len()),
        elapsed_ms: meta.elapsed_ms,
    });

    let (target, episode) = match first_episode {
        Some(video) => {
            let episode = EpisodeInfo::from_video(&series.id, &video);
            let target = ProbeTarget {
                id: video.id,
                ..series
            };
            (target, Some(episode))
        }
        None => (series, None),
    };

    progress(ProgressEvent::ProbingSeries {
        id: target.id.clone(),
        path,
    });

    let query = timed(|| addon.streams(ContentKind::Series, &target.id));
    timing.series_probe = query.elapsed_ms;
    log_soft_failure(ContentKind::Series, &target.id, &query);

    let outcome = build_outcome(target, query, episode);
    progress(ProgressEvent::SeriesProbed {
        stream_count: outcome.stream_count,
        elapsed_ms: outcome.response_time,
    });
    outcome
}

fn log_soft_failure<T>(kind: ContentKind, id: &str, query: &TimedResult<T>) {
    if let Some(message) = query.error_message() {
        warn!("Stream query for {} {} failed: {}", kind, id, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addon::{AddonError, MetaDetail, MetaResponse};
    use crate::catalog::CatalogError;
    use crate::heartbeat::{HeartbeatStatus, MonitorResponse};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct FakeCatalog {
        movies: Vec<CatalogItem>,
        series: Vec<CatalogItem>,
    }

    impl CatalogProvider for FakeCatalog {
        fn fetch_top(&self, kind: ContentKind) -> Result<Vec<CatalogItem>, CatalogError> {
            Ok(match kind {
                ContentKind::Movie => self.movies.clone(),
                ContentKind::Series => self.series.clone(),
            })
        }
    }

    enum FakeMeta {
        Videos(Vec<MetaVideo>),
        Fails,
    }

    /// Addon serving canned responses and recording every request
    struct FakeAddon {
        streams: HashMap<String, Result<Vec<StreamCandidate>, u16>>,
        meta: FakeMeta,
        requests: RefCell<Vec<String>>,
    }

    impl FakeAddon {
        fn new(meta: FakeMeta) -> Self {
            Self {
                streams: HashMap::new(),
                meta,
                requests: RefCell::new(Vec::new()),
            }
        }

        fn with_streams(mut self, id: &str, titles: &[&str]) -> Self {
            let streams = titles.iter().map(|t| StreamCandidate::new(*t, "")).collect();
            self.streams.insert(id.to_string(), Ok(streams));
            self
        }

        fn with_status(mut self, id: &str, status: u16) -> Self {
            self.streams.insert(id.to_string(), Err(status));
            self
        }

        fn requests(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }
    }

    impl AddonClient for FakeAddon {
        fn base_url(&self) -> &str {
            "https://addon.example"
        }

        fn streams(&self, kind: ContentKind, id: &str) -> Result<StreamResponse, AddonError> {
            self.requests.borrow_mut().push(format!("stream/{}/{}", kind, id));
            match self.streams.get(id) {
                Some(Ok(streams)) => Ok(StreamResponse {
                    streams: streams.clone(),
                }),
                Some(Err(status)) => Err(AddonError::HttpStatus { status: *status }),
                None => Ok(StreamResponse::default()),
            }
        }

        fn meta(&self, kind: ContentKind, id: &str) -> Result<MetaResponse, AddonError> {
            self.requests.borrow_mut().push(format!("meta/{}/{}", kind, id));
            match &self.meta {
                FakeMeta::Videos(videos) => Ok(MetaResponse {
                    meta: Some(MetaDetail {
                        videos: videos.clone(),
                    }),
                }),
                FakeMeta::Fails => Err(AddonError::RequestError("operation timed out".into())),
            }
        }
    }

    fn item(id: &str, name: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            imdb_id: Some(id.to_string()),
            name: name.to_string(),
            poster: Some(format!("https://images.example/{}.jpg", id)),
            year: None,
        }
    }

    fn catalog() -> FakeCatalog {
        FakeCatalog {
            movies: vec![item("tt0111161", "The Shawshank Redemption")],
            series: vec![item("tt0944947", "Game of Thrones")],
        }
    }

    fn pilot() -> MetaVideo {
        MetaVideo {
            id: "tt0944947:1:1".to_string(),
            title: None,
            name: Some("Winter Is Coming".to_string()),
            season: Some(1),
            episode: Some(1),
        }
    }

    fn run(
        catalog: &FakeCatalog,
        addon: &FakeAddon,
    ) -> (Result<ProbeReport, ProbeFailure>, Heartbeat) {
        let mut heartbeat = Heartbeat::default();
        let mut rng = StdRng::seed_from_u64(42);
        let result = run_probe(catalog, addon, &mut rng, &mut heartbeat, |_| {});
        (result, heartbeat)
    }

    #[test]
    fn test_movie_quality_and_episode_probe() {
        let addon = FakeAddon::new(FakeMeta::Videos(vec![pilot()]))
            .with_streams("tt0111161", &["1080p BluRay", "4K HDR REMUX"])
            .with_streams("tt0944947:1:1", &["720p WEB"]);

        let (result, heartbeat) = run(&catalog(), &addon);
        let report = result.unwrap();

        let movie = report.movie.as_ref().unwrap();
        assert_eq!(movie.id, "tt0111161");
        assert_eq!(movie.stream_count, 2);
        assert!(movie.quality.has_4k);
        assert!(movie.quality.has_hdr);
        assert!(movie.working);
        assert_eq!(movie.error, None);

        let series = report.series.as_ref().unwrap();
        assert_eq!(series.id, "tt0944947:1:1");
        assert_eq!(series.name, "Game of Thrones");
        let episode = series.episode.as_ref().unwrap();
        assert_eq!(episode.series_id, "tt0944947");
        assert_eq!(episode.episode_title, "Winter Is Coming");
        assert_eq!(episode.season, Some(1));
        assert_eq!(episode.episode, Some(1));

        assert_eq!(report.status, ProbeStatus::Up);
        assert_eq!(report.total_streams, 3);
        assert!(report.message.starts_with("Movie: 2 streams, Series: 1 streams ("));

        assert_eq!(heartbeat.status, HeartbeatStatus::Up);
        assert_eq!(heartbeat.msg, report.message);
        assert_eq!(heartbeat.ping, Some(report.timing.total));
        assert_eq!(
            heartbeat.response,
            Some(MonitorResponse::StremioAddon(report.clone()))
        );
    }

    #[test]
    fn test_requests_are_sequential_movie_then_meta_then_series() {
        let addon = FakeAddon::new(FakeMeta::Videos(vec![pilot()]));
        let _ = run(&catalog(), &addon);

        assert_eq!(
            addon.requests(),
            vec![
                "stream/movie/tt0111161",
                "meta/series/tt0944947",
                "stream/series/tt0944947:1:1",
            ]
        );
    }

    #[test]
    fn test_series_without_episodes_probes_series_id() {
        let addon = FakeAddon::new(FakeMeta::Videos(vec![]));

        let (result, heartbeat) = run(&catalog(), &addon);
        let report = result.unwrap();
        let series = report.series.as_ref().unwrap();

        assert_eq!(series.id, "tt0944947");
        assert_eq!(series.stream_count, 0);
        assert!(!series.working);
        assert_eq!(series.error, None);
        assert_eq!(series.episode, None);
        assert_eq!(addon.requests()[2], "stream/series/tt0944947");

        assert_eq!(report.status, ProbeStatus::Down);
        assert_eq!(report.message, NO_STREAMS_MESSAGE);
        assert_eq!(heartbeat.status, HeartbeatStatus::Down);
    }

    #[test]
    fn test_failed_meta_probes_series_id() {
        let addon = FakeAddon::new(FakeMeta::Fails).with_streams("tt0944947", &["1080p"]);

        let report = run(&catalog(), &addon).0.unwrap();
        let series = report.series.as_ref().unwrap();

        assert_eq!(series.id, "tt0944947");
        assert_eq!(series.episode, None);
        assert!(series.working);
        assert_eq!(series.error, None);
        assert_eq!(report.status, ProbeStatus::Up);
    }

    #[test]
    fn test_series_path_reported_in_progress() {
        let cases = [
            (FakeMeta::Videos(vec![pilot()]), SeriesProbePath::FirstEpisode),
            (FakeMeta::Videos(vec![]), SeriesProbePath::SeriesWithoutEpisodes),
            (FakeMeta::Fails, SeriesProbePath::MetaUnavailable),
        ];

        for (meta, expected) in cases {
            let addon = FakeAddon::new(meta);
            let mut paths = Vec::new();
            let mut rng = StdRng::seed_from_u64(0);
            let mut heartbeat = Heartbeat::default();
            let _ = run_probe(&catalog(), &addon, &mut rng, &mut heartbeat, |event| {
                if let ProgressEvent::ProbingSeries { path, .. } = event {
                    paths.push(path);
                }
            });
            assert_eq!(paths, vec![expected]);
        }
    }

    #[test]
    fn test_soft_failure_is_recorded_not_raised() {
        let addon = FakeAddon::new(FakeMeta::Videos(vec![pilot()]))
            .with_status("tt0111161", 503)
            .with_streams("tt0944947:1:1", &["480p"]);

        let report = run(&catalog(), &addon).0.unwrap();
        let movie = report.movie.as_ref().unwrap();

        assert!(!movie.working);
        assert_eq!(movie.stream_count, 0);
        assert_eq!(movie.quality, QualityReport::default());
        assert_eq!(movie.error.as_deref(), Some("HTTP 503"));
        assert_eq!(report.status, ProbeStatus::Up);
        assert_eq!(report.total_streams, 1);
    }

    #[test]
    fn test_status_over_all_working_combinations() {
        for (movie_streams, series_streams, expected) in [
            (&["1080p"][..], &["720p"][..], ProbeStatus::Up),
            (&["1080p"][..], &[][..], ProbeStatus::Up),
            (&[][..], &["720p"][..], ProbeStatus::Up),
            (&[][..], &[][..], ProbeStatus::Down),
        ] {
            let addon = FakeAddon::new(FakeMeta::Videos(vec![]))
                .with_streams("tt0111161", movie_streams)
                .with_streams("tt0944947", series_streams);

            let report = run(&catalog(), &addon).0.unwrap();
            assert_eq!(report.status, expected);
            assert_eq!(
                report.total_streams,
                movie_streams.len() + series_streams.len()
            );
        }
    }

    #[test]
    fn test_empty_movie_catalog_is_fatal() {
        let catalog = FakeCatalog {
            movies: vec![],
            series: vec![item("tt0944947", "Game of Thrones")],
        };
        let addon = FakeAddon::new(FakeMeta::Videos(vec![]));

        let (result, heartbeat) = run(&catalog, &addon);
        let error = result.unwrap_err();

        assert!(matches!(error, ProbeFailure::SeedFetch(_)));
        assert!(addon.requests().is_empty());
        assert_eq!(heartbeat.status, HeartbeatStatus::Down);
        assert_eq!(heartbeat.msg, "No movie content available in catalog");

        let report = heartbeat
            .response
            .as_ref()
            .and_then(|r| r.as_probe_report())
            .unwrap();
        assert_eq!(report.movie, None);
        assert_eq!(report.series, None);
        assert_eq!(report.status, ProbeStatus::Down);
        assert_eq!(report.total_streams, 0);
    }

    #[test]
    fn test_fatal_seed_failure_still_completes_progress() {
        let catalog = FakeCatalog {
            movies: vec![],
            series: vec![],
        };
        let addon = FakeAddon::new(FakeMeta::Videos(vec![]));
        let mut heartbeat = Heartbeat::default();
        let mut completed = Vec::new();

        let result = run_probe(
            &catalog,
            &addon,
            &mut StdRng::seed_from_u64(0),
            &mut heartbeat,
            |event| {
                if let ProgressEvent::Complete {
                    status,
                    total_streams,
                    elapsed_ms,
                } = event
                {
                    completed.push((status, total_streams, elapsed_ms));
                }
            },
        );

        assert!(result.is_err());
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].0, ProbeStatus::Down);
        assert_eq!(completed[0].1, 0);
        assert_eq!(Some(completed[0].2), heartbeat.ping);
    }

    #[test]
    fn test_build_outcome_from_failure() {
        let target = ProbeTarget {
            id: "tt1".into(),
            name: "Test".into(),
            poster: None,
        };
        let query = TimedResult {
            result: Err("HTTP 500".to_string()),
            elapsed_ms: 12,
        };

        let outcome = build_outcome(target, query, None);
        assert_eq!(outcome.stream_count, 0);
        assert!(outcome.streams.is_empty());
        assert!(!outcome.working);
        assert_eq!(outcome.response_time, 12);
        assert_eq!(outcome.error.as_deref(), Some("HTTP 500"));
    }

    #[test]
    fn test_report_json_field_names() {
        let addon = FakeAddon::new(FakeMeta::Videos(vec![pilot()]))
            .with_streams("tt0111161", &["1080p"]);
        let report = run(&catalog(), &addon).0.unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["addon"]["url"], "https://addon.example");
        assert_eq!(json["status"], "UP");
        assert_eq!(json["totalStreams"], 1);
        assert_eq!(json["movie"]["streamCount"], 1);
        assert_eq!(json["movie"]["name"], "The Shawshank Redemption");
        assert!(json["movie"].get("episodeTitle").is_none());
        assert!(json["movie"].get("error").is_none());
        assert_eq!(json["series"]["seriesId"], "tt0944947");
        assert_eq!(json["series"]["episodeTitle"], "Winter Is Coming");
        assert_eq!(json["series"]["season"], 1);
        assert!(json["timing"]["seedFetch"].is_u64());
        assert!(json["testedAt"].is_string());
        assert_eq!(json["checkId"].as_str().map(str::len), Some(26));
    }
}
