use anyhow::{Context, Result, bail};
use clap::{Args as ClapArgs, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

use regionlookup::config::{API_KEY_ENV, FileConfig};
use regionlookup::domain::{
    LookupPlaceType, LookupRegionRequestData, RegionIdentifier, RegionLocation, RegionSearchValue,
    ResponseEnvelope, SearchPlaceType, SearchRegionRequestData,
};
use regionlookup::{RegionClient, ReqwestTransport};

/// Look up and search region Place IDs with the Region Lookup API
///
/// Examples:
///   # Match a locality by name
///   regionlookup lookup --place "newark" -t locality --region-code us --max-candidates 3
///
///   # Match a state by FIPS code
///   regionlookup lookup --unit-code 6 -t administrative_area_level_1 --region-code us
///
///   # Find the postal code containing a point
///   regionlookup search --lat 37.4220656 --lng -122.0862784 -t postal_code --region-code us
///
///   # Fetch the next page of a previous call
///   regionlookup search --address "newark" -t locality --region-code us --page-token <token>
#[derive(Parser, Debug)]
#[command(name = "regionlookup")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches regionlookup.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// API key (falls back to GOOGLE_MAPS_API_KEY, then the config file)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Override the endpoint URL for this call
    #[arg(long, global = true)]
    url: Option<String>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a region by name or unit code
    Lookup(LookupArgs),
    /// Search for the region containing an address, point or place
    Search(SearchArgs),
}

#[derive(ClapArgs, Debug)]
struct PageArgs {
    /// Maximum number of matches per page (service caps at 1000)
    #[arg(long)]
    page_size: Option<u32>,

    /// Token from a previous response to fetch the next page
    #[arg(long)]
    page_token: Option<String>,
}

#[derive(ClapArgs, Debug)]
#[command(group(clap::ArgGroup::new("location").required(true).args(["place", "unit_code"])))]
struct LookupArgs {
    /// Region name, e.g. "Palo Alto, CA" or "94109"
    #[arg(long)]
    place: Option<String>,

    /// FIPS code (US) or ISO-3166-1 country code
    #[arg(long)]
    unit_code: Option<String>,

    /// Place type to match
    #[arg(short = 't', long)]
    place_type: LookupPlaceType,

    /// Two-letter region code (required unless place type is country)
    #[arg(long)]
    region_code: Option<String>,

    /// BCP-47 language code
    #[arg(long)]
    language: Option<String>,

    /// Number of candidate Place IDs to request
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=3))]
    max_candidates: Option<u32>,

    #[command(flatten)]
    page: PageArgs,
}

#[derive(ClapArgs, Debug)]
#[command(group(clap::ArgGroup::new("location").required(true).args(["address", "lat", "place_id"])))]
struct SearchArgs {
    /// Unstructured street address
    #[arg(long)]
    address: Option<String>,

    /// Latitude (use with --lng)
    #[arg(long, requires = "lng", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude (use with --lat)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lng: Option<f64>,

    /// Place ID contained in the region
    #[arg(long)]
    place_id: Option<String>,

    /// Place type to match
    #[arg(short = 't', long)]
    place_type: SearchPlaceType,

    /// Two-letter region code (required unless place type is country)
    #[arg(long)]
    region_code: Option<String>,

    /// BCP-47 language code
    #[arg(long)]
    language_code: Option<String>,

    #[command(flatten)]
    page: PageArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let file_config = match args.config {
        Some(ref path) => FileConfig::load_from(path)?,
        None => FileConfig::load().unwrap_or_default(),
    };

    let api_key = file_config
        .resolve_api_key(args.api_key.clone())
        .with_context(|| {
            format!("No API key: pass --api-key, set {API_KEY_ENV}, or add api_key to regionlookup.toml")
        })?;

    let transport = ReqwestTransport::with_timeout(Duration::from_secs(file_config.timeout_secs))
        .context("Failed to create HTTP client")?;
    let mut client = RegionClient::with_transport(api_key, transport);
    if let Some(ref url) = file_config.lookup_url {
        client = client.with_lookup_url(url);
    }
    if let Some(ref url) = file_config.search_url {
        client = client.with_search_url(url);
    }

    let start = Instant::now();
    let envelope = match args.command {
        Command::Lookup(lookup) => {
            if let Some(url) = args.url {
                client = client.with_lookup_url(url);
            }
            let data = lookup_data(lookup, &file_config);
            let count = data.identifiers.len();
            let spinner = create_spinner("Looking up region...")?;
            let response = client
                .lookup(data)
                .await
                .context("lookupRegion request failed")?;
            spinner.finish_with_message(format!(
                "Received {} match(es) for {} identifier(s) [{:.1}s]",
                response.data.matches.len(),
                count,
                start.elapsed().as_secs_f32()
            ));
            response.data
        }
        Command::Search(search) => {
            if let Some(url) = args.url {
                client = client.with_search_url(url);
            }
            let data = search_data(search, &file_config)?;
            let count = data.search_values.len();
            let spinner = create_spinner("Searching region...")?;
            let response = client
                .search(data)
                .await
                .context("searchRegion request failed")?;
            spinner.finish_with_message(format!(
                "Received {} match(es) for {} search value(s) [{:.1}s]",
                response.data.matches.len(),
                count,
                start.elapsed().as_secs_f32()
            ));
            response.data
        }
    };

    print_envelope(&envelope)
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "regionlookup=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn lookup_data(args: LookupArgs, config: &FileConfig) -> LookupRegionRequestData {
    let location = RegionLocation {
        place: args.place,
        unit_code: args.unit_code,
    };
    let mut identifier = RegionIdentifier::new(location, args.place_type);
    identifier.max_candidates = args.max_candidates;
    identifier.hint.region_code = args.region_code.or_else(|| config.region_code.clone());
    identifier.hint.language = args.language.or_else(|| config.language.clone());

    let mut data = LookupRegionRequestData::new(vec![identifier]);
    data.pagination.page_size = args.page.page_size;
    data.pagination.page_token = args.page.page_token;
    data
}

fn search_data(args: SearchArgs, config: &FileConfig) -> Result<SearchRegionRequestData> {
    let mut value = match (args.address, args.lat.zip(args.lng), args.place_id) {
        (Some(address), _, _) => RegionSearchValue::address(address, args.place_type),
        (None, Some((lat, lng)), _) => RegionSearchValue::latlng(lat, lng, args.place_type),
        (None, None, Some(place_id)) => RegionSearchValue::place_id(place_id, args.place_type),
        (None, None, None) => bail!("Must provide --address, --lat and --lng, or --place-id"),
    };
    value.hint.region_code = args.region_code.or_else(|| config.region_code.clone());
    value.language_code = args.language_code.or_else(|| config.language.clone());

    let mut data = SearchRegionRequestData::new(vec![value]);
    data.pagination.page_size = args.page.page_size;
    data.pagination.page_token = args.page.page_token;
    Ok(data)
}

fn print_envelope(envelope: &ResponseEnvelope) -> Result<()> {
    let json = serde_json::to_string_pretty(envelope).context("Failed to format response")?;
    println!("{}", json);
    if let Some(ref token) = envelope.next_page_token {
        eprintln!();
        eprintln!("More results available: rerun with --page-token {}", token);
    }
    Ok(())
}

fn create_spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")?
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    Ok(pb)
}
