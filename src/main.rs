use addon_probe::{
    DEFAULT_CATALOG_TIMEOUT_MS, DEFAULT_CATALOG_URL, DEFAULT_META_TIMEOUT_MS,
    DEFAULT_STREAM_TIMEOUT_MS, Heartbeat, HeartbeatStatus, ProbeConfig, ProbeOutcome,
    ProgressEvent, SeriesProbePath, check_addon, default_user_agent,
};
use clap::Parser;
use std::process;
use std::time::Duration;

/// addon-probe - Check that a media addon serves real streams for a movie and a TV episode.
#[derive(Debug, Parser)]
#[command(name = "addon-probe", version, about, long_about = None)]
struct Cli {
    /// Base URL of the addon under test
    addon_url: String,

    /// Base URL of the catalog service used to pick test content
    #[arg(long, default_value = DEFAULT_CATALOG_URL)]
    catalog_url: String,

    /// Timeout for each catalog request in milliseconds
    #[arg(long = "catalog-timeout-ms", default_value_t = DEFAULT_CATALOG_TIMEOUT_MS)]
    catalog_timeout_ms: u64,

    /// Timeout for the addon meta request in milliseconds
    #[arg(long = "meta-timeout-ms", default_value_t = DEFAULT_META_TIMEOUT_MS)]
    meta_timeout_ms: u64,

    /// Timeout for each addon stream request in milliseconds
    #[arg(long = "stream-timeout-ms", default_value_t = DEFAULT_STREAM_TIMEOUT_MS)]
    stream_timeout_ms: u64,

    /// User-Agent header sent with every request
    #[arg(long)]
    user_agent: Option<String>,

    /// Print the resulting heartbeat as pretty JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Suppress progress output
    #[arg(long, short, default_value_t = false)]
    quiet: bool,
}

impl Cli {
    fn probe_config(&self) -> ProbeConfig {
        ProbeConfig {
            catalog_url: self.catalog_url.clone(),
            user_agent: self.user_agent.clone().unwrap_or_else(default_user_agent),
            catalog_timeout: Duration::from_millis(self.catalog_timeout_ms),
            meta_timeout: Duration::from_millis(self.meta_timeout_ms),
            stream_timeout: Duration::from_millis(self.stream_timeout_ms),
            ..ProbeConfig::default()
        }
    }
}

/// Handles progress events and prints formatted output to stderr
fn handle_progress_event(event: ProgressEvent) {
    match event {
        ProgressEvent::Started { addon_url } => {
            eprintln!("Checking addon {}...", addon_url);
        }
        ProgressEvent::FetchingSeeds => {
            eprintln!("Fetching test content from catalog...");
        }
        ProgressEvent::SeedsSelected { movie, series } => {
            eprintln!("  Movie:  {}", movie);
            eprintln!("  Series: {}", series);
        }
        ProgressEvent::ProbingMovie { id } => {
            eprintln!("Probing movie streams ({})...", id);
        }
        ProgressEvent::MovieProbed {
            stream_count,
            elapsed_ms,
        }
        | ProgressEvent::SeriesProbed {
            stream_count,
            elapsed_ms,
        } => {
            eprintln!("  {} stream(s) in {}ms", stream_count, elapsed_ms);
        }
        ProgressEvent::FetchingSeriesMeta { id } => {
            eprintln!("Fetching series metadata ({})...", id);
        }
        ProgressEvent::SeriesMetaFetched {
            episode_count,
            elapsed_ms,
        } => {
            eprintln!("  {} episode(s) listed in {}ms", episode_count, elapsed_ms);
        }
        ProgressEvent::ProbingSeries { id, path } => {
            let target = match path {
                SeriesProbePath::FirstEpisode => "first episode",
                SeriesProbePath::SeriesWithoutEpisodes => "series, no episodes listed",
                SeriesProbePath::MetaUnavailable => "series, metadata unavailable",
            };
            eprintln!("Probing series streams ({}: {})...", target, id);
        }
        ProgressEvent::Complete { .. } => {}
    }
}

fn print_outcome(label: &str, outcome: &ProbeOutcome) {
    let verdict = if outcome.working { "OK" } else { "FAIL" };
    println!("{} [{}] {} ({})", label, verdict, outcome.name, outcome.id);

    if let Some(episode) = &outcome.episode {
        println!(
            "  Episode: S{:02}E{:02} - {}",
            episode.season.unwrap_or_default(),
            episode.episode.unwrap_or_default(),
            episode.episode_title
        );
    }

    println!(
        "  Streams: {} in {}ms",
        outcome.stream_count, outcome.response_time
    );

    if !outcome.quality.tiers.is_empty() {
        let tiers: Vec<String> = outcome
            .quality
            .tiers
            .iter()
            .map(|tier| format!("{} x{}", tier.label, tier.count))
            .collect();
        println!("  Quality: {}", tiers.join(", "));
    }
    if outcome.quality.has_hdr {
        println!("  HDR: yes");
    }
    if let Some(error) = &outcome.error {
        println!("  Error: {}", error);
    }
}

fn print_heartbeat(heartbeat: &Heartbeat) {
    if let Some(report) = heartbeat.response.as_ref().and_then(|r| r.as_probe_report()) {
        println!();
        if let Some(movie) = &report.movie {
            print_outcome("Movie ", movie);
        }
        if let Some(series) = &report.series {
            print_outcome("Series", series);
        }
    }

    println!("\nStatus: {:?}", heartbeat.status);
    println!("{}", heartbeat.msg);
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.probe_config();

    let mut heartbeat = Heartbeat::default();
    let result = if cli.quiet {
        check_addon(&cli.addon_url, &config, &mut heartbeat, |_| {})
    } else {
        check_addon(&cli.addon_url, &config, &mut heartbeat, handle_progress_event)
    };

    if cli.json {
        match serde_json::to_string_pretty(&heartbeat) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize heartbeat: {}", e);
                process::exit(1);
            }
        }
    } else {
        print_heartbeat(&heartbeat);
    }

    if let Err(e) = result {
        eprintln!("\nError during check: {}", e);
        process::exit(1);
    }

    if heartbeat.status != HeartbeatStatus::Up {
        process::exit(1);
    }
}
