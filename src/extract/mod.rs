use crate::imdb;
use crate::imdb::models::{FetchError, RawMovie};
use crate::store;
use crate::store::models::MovieRecord;
use crate::store::StorageError;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

// Poster URLs end in a size/variant suffix ("..._V1_SX300.jpg");
// plots end in an author attribution after "::".
const POSTER_MARKER: &str = "._V1";
const PLOT_MARKER: &str = "::";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("movie {movie_id} is missing required field '{field}'")]
    FieldMissing {
        movie_id: String,
        field: &'static str,
    },

    #[error("fetching from the movie API failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("updating the store failed: {0}")]
    Storage(#[from] StorageError),
}

/// Drops the suffix starting at the last occurrence of `marker`.
/// Without the marker the string passes through unchanged.
fn trim_at_marker<'a>(value: &'a str, marker: &str) -> &'a str {
    match value.rfind(marker) {
        Some(index) => &value[..index],
        None => value,
    }
}

/// Builds the persisted record from a fully detailed movie object,
/// validating that every required field is present.
pub fn derive_record(movie: &RawMovie) -> Result<MovieRecord, ExtractError> {
    let missing = |field: &'static str| ExtractError::FieldMissing {
        movie_id: movie.id.clone(),
        field,
    };

    let title = movie.title.as_ref().ok_or_else(|| missing("title"))?;
    let year = movie.year.ok_or_else(|| missing("year"))?;
    let poster = movie.cover_url.as_ref().ok_or_else(|| missing("cover url"))?;
    // Only the first plot entry is used; the rest are alternate synopses.
    let plot = movie
        .plot
        .as_ref()
        .and_then(|plots| plots.first())
        .ok_or_else(|| missing("plot"))?;
    let directors = movie
        .directors
        .as_ref()
        .ok_or_else(|| missing("directors"))?;

    Ok(MovieRecord {
        id: movie.id.clone(),
        title: title.clone(),
        year,
        directors: directors.iter().map(|d| d.name.clone()).collect(),
        poster: trim_at_marker(poster, POSTER_MARKER).to_string(),
        plot: trim_at_marker(plot, PLOT_MARKER).to_string(),
    })
}

/// Drives the full extraction: fetch the ranked chart, then fetch,
/// derive and append one movie at a time, pausing between fetches to
/// stay under the API's rate limit.
pub async fn run(
    client: &Client,
    base_url: &str,
    store_path: &Path,
    delay: Duration,
) -> Result<(), ExtractError> {
    let chart = imdb::fetch_top_chart_with_client(client, base_url).await?;

    // Surface a missing or corrupt store before any per-movie fetches.
    store::read_store(store_path)?;

    let total = chart.len();
    for (i, entry) in chart.iter().enumerate() {
        let movie = imdb::fetch_movie_with_client(client, base_url, &entry.id).await?;
        println!("{}/{}", i + 1, total);
        let record = derive_record(&movie)?;
        store::append_record(store_path, record)?;
        tokio::time::sleep(delay).await;
    }

    Ok(())
}
