use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use std::path::PathBuf;
use traffic_tiles::{Config, TrafficAggregator};
use traffic_tiles_core::GeoBBox;

/// Extracts traffic severity points from raster traffic tiles and writes them as JSON.
///
/// Without arguments the built-in region (Chisinau, zoom 10) is processed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, disable_help_subcommand = true)]
struct Cli {
	/// YAML config file; command line options override its values
	#[arg(long, short, value_name = "FILE")]
	config: Option<PathBuf>,

	/// region as "west,south,east,north" in degrees
	#[arg(long, value_name = "BBOX", allow_hyphen_values = true)]
	bbox: Option<GeoBBox>,

	/// zoom level of the tiles
	#[arg(long, short, value_parser = clap::value_parser!(u8).range(0..=31))]
	zoom: Option<u8>,

	/// region name, used as prefix of the output file
	#[arg(long)]
	name: Option<String>,

	/// tile URL template with {x}, {y} and {z} placeholders
	#[arg(long, value_name = "TEMPLATE")]
	url: Option<String>,

	/// directory for cached tiles
	#[arg(long, value_name = "DIR")]
	cache_dir: Option<PathBuf>,

	/// directory for the JSON result
	#[arg(long, short, value_name = "DIR")]
	output_dir: Option<PathBuf>,

	/// HTTP request timeout in seconds
	#[arg(long, value_name = "SECONDS")]
	timeout: Option<u64>,

	#[command(flatten)]
	verbose: Verbosity<InfoLevel>,
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	let path = run(&load_config(&cli)?)?;
	println!("Traffic data saved to {}", path.display());
	Ok(())
}

/// Config file (if any) with the command line overrides applied.
fn load_config(cli: &Cli) -> Result<Config> {
	let mut config = match &cli.config {
		Some(path) => Config::from_path(path)?,
		None => Config::default(),
	};

	config.region.override_optional_name(cli.name.clone());
	config.region.override_optional_bbox(cli.bbox);
	config.region.override_optional_zoom(cli.zoom);
	config.fetch.override_optional_url(cli.url.clone());
	config.fetch.override_optional_cache_dir(cli.cache_dir.clone());
	config.fetch.override_optional_timeout_seconds(cli.timeout);
	config.output.override_optional_dir(cli.output_dir.clone());

	Ok(config)
}

#[tokio::main(flavor = "current_thread")]
async fn run(config: &Config) -> Result<PathBuf> {
	let aggregator = TrafficAggregator::new(config.fetch.open_reader()?);
	aggregator.generate_traffic_json(&config.region, &config.output.dir).await
}
