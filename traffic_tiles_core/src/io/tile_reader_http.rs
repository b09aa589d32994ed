//! Reading tiles from an HTTP(S) tile server.
//!
//! `TileReaderHttp` expands a URL template containing the placeholders `{x}`, `{y}` and
//! `{z}` for every requested tile and issues a plain `GET`. Any status outside `2xx` is an
//! error. Requests are not retried.
//!
//! ```rust,no_run
//! use traffic_tiles_core::{TileCoord, io::{TileReaderHttp, TileReaderTrait}};
//! use anyhow::Result;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let reader = TileReaderHttp::from_template("https://tile.example.org/{z}/{x}/{y}.png", None)?;
//!     let blob = reader.read_tile(&TileCoord::new(10, 594, 360)?).await?;
//!     println!("Read {} bytes", blob.len());
//!     Ok(())
//! }
//! ```

use super::TileReaderTrait;
use crate::{Blob, TileCoord};
use anyhow::{Result, bail, ensure};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use traffic_tiles_derive::context;

/// Traffic-layer tile endpoint: road map layer with the traffic overlay, style 15.
pub const DEFAULT_TILE_URL: &str = "http://mts0.googleapis.com/vt/lyrs=m,traffic&x={x}&y={y}&z={z}&style=15";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Reads tiles from an HTTP(S) endpoint described by a URL template.
#[derive(Debug)]
pub struct TileReaderHttp {
	client: Client,
	template: String,
}

impl TileReaderHttp {
	/// Creates a reader for `template`.
	///
	/// Without a `timeout` a hanging request blocks forever.
	///
	/// # Errors
	/// Fails if a placeholder is missing, the expanded URL does not parse, or the scheme is
	/// neither `http` nor `https`.
	#[context("creating HTTP tile reader for '{template}'")]
	pub fn from_template(template: &str, timeout: Option<Duration>) -> Result<TileReaderHttp> {
		for placeholder in ["{x}", "{y}", "{z}"] {
			ensure!(
				template.contains(placeholder),
				"URL template is missing the placeholder {placeholder}"
			);
		}

		let url = Url::parse(&expand_template(template, &TileCoord { level: 0, x: 0, y: 0 }))?;
		match url.scheme() {
			"http" | "https" => (),
			other => bail!("unsupported URL scheme '{other}', expected 'http' or 'https'"),
		}

		let mut builder = Client::builder().user_agent(USER_AGENT);
		if let Some(timeout) = timeout {
			builder = builder.timeout(timeout);
		}

		Ok(TileReaderHttp {
			client: builder.build()?,
			template: template.to_string(),
		})
	}

	/// The request URL for `coord`.
	#[must_use]
	pub fn tile_url(&self, coord: &TileCoord) -> String {
		expand_template(&self.template, coord)
	}

	#[context("fetching tile {coord:?} via HTTP")]
	async fn fetch(&self, coord: &TileCoord) -> Result<Blob> {
		let url = self.tile_url(coord);
		log::trace!("GET {url}");

		let response = self.client.get(&url).send().await?;
		let status = response.status();
		if !status.is_success() {
			bail!("HTTP request to '{url}' failed with status {status}");
		}

		let bytes = response.bytes().await?;
		Ok(Blob::from(&*bytes))
	}
}

fn expand_template(template: &str, coord: &TileCoord) -> String {
	template
		.replace("{x}", &coord.x.to_string())
		.replace("{y}", &coord.y.to_string())
		.replace("{z}", &coord.level.to_string())
}

#[async_trait]
impl TileReaderTrait for TileReaderHttp {
	async fn read_tile(&self, coord: &TileCoord) -> Result<Blob> {
		self.fetch(coord).await
	}

	fn get_name(&self) -> &str {
		&self.template
	}
}
