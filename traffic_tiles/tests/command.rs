use assert_fs::TempDir;
use predicates::str;
use rstest::rstest;
use test_utilities::{BINARY_NAME, traffic_tiles_cmd, write_tile};
use traffic_tiles::read_traffic_json;
use traffic_tiles_core::TrafficCategory;

#[test]
fn help() {
	traffic_tiles_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(str::contains(format!("Usage: {BINARY_NAME} [OPTIONS]")))
		.stdout(str::contains("--bbox <BBOX>"))
		.stdout(str::contains("--cache-dir <DIR>"));
}

#[test]
fn version() {
	traffic_tiles_cmd()
		.arg("--version")
		.assert()
		.success()
		.stdout(str::starts_with("traffic_tiles "));
}

#[rstest]
#[case(&["--zoom", "99"])]
#[case(&["--bbox", "1,2,3"])]
#[case(&["--timeout", "soon"])]
#[case(&["--unknown"])]
fn invalid_arguments(#[case] args: &[&str]) {
	traffic_tiles_cmd()
		.args(args)
		.assert()
		.failure()
		.code(2)
		.stdout(str::is_empty());
}

#[test]
fn invalid_url_template() {
	let dir = TempDir::new().unwrap();
	traffic_tiles_cmd()
		.current_dir(dir.path())
		.args(["--url", "https://example.org/tile.png"])
		.assert()
		.failure()
		.stdout(str::is_empty())
		.stderr(str::contains("missing the placeholder {x}"));
}

#[test]
fn cached_tiles_without_network() {
	let dir = TempDir::new().unwrap();
	let cache = dir.path().join("cache");
	std::fs::create_dir(&cache).unwrap();

	// three of the four Chisinau tiles are cached; the fourth can't be fetched
	write_tile(&cache.join("tile_10_593_359.png"), 2, [200, 0, 0]);
	write_tile(&cache.join("tile_10_593_360.png"), 1, [230, 150, 50]);
	write_tile(&cache.join("tile_10_594_359.png"), 3, [50, 200, 50]);

	let output = dir.path().join("out");
	traffic_tiles_cmd()
		.current_dir(dir.path())
		.args(["--url", "http://127.0.0.1:1/{z}/{x}/{y}.png", "--timeout", "5"])
		.arg("--cache-dir")
		.arg(&cache)
		.arg("--output-dir")
		.arg(&output)
		.assert()
		.success()
		.stdout(str::contains("Traffic data saved to"))
		.stdout(str::contains("chisinau_traffic_z10.json"))
		.stderr(str::contains("skipping tile TileCoord(10, [594, 360])"));

	let points = read_traffic_json(&output.join("chisinau_traffic_z10.json")).unwrap();
	let categories: Vec<TrafficCategory> = points.iter().map(|p| p.category()).collect();
	assert_eq!(
		categories,
		vec![
			TrafficCategory::Heavy,
			TrafficCategory::Heavy,
			TrafficCategory::Moderate,
			TrafficCategory::Light,
			TrafficCategory::Light,
			TrafficCategory::Light,
		]
	);
	assert!(!cache.join("tile_10_594_360.png").exists());
}

#[test]
fn config_file_and_name() {
	let dir = TempDir::new().unwrap();
	let cache = dir.path().join("tiles");
	std::fs::create_dir(&cache).unwrap();
	write_tile(&cache.join("tile_10_593_360.png"), 4, [200, 0, 0]);

	let config = dir.path().join("traffic.yml");
	std::fs::write(
		&config,
		"region:\n  bbox: [28.8, 47.0, 28.8, 47.0]\nfetch:\n  url: http://127.0.0.1:1/{z}/{x}/{y}.png\n  cache_dir: tiles\n",
	)
	.unwrap();

	traffic_tiles_cmd()
		.current_dir(dir.path())
		.args(["--config", "traffic.yml", "--name", "centre", "-q"])
		.assert()
		.success()
		.stdout(str::contains("centre_traffic_z10.json"))
		.stderr(str::is_empty());

	let points = read_traffic_json(&dir.path().join("centre_traffic_z10.json")).unwrap();
	assert_eq!(points.len(), 4);
}
