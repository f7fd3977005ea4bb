use crate::imdb::models::{ChartEntry, FetchError, RawMovie, TopChartResponse};
use reqwest::{Client, StatusCode};

pub mod models;

pub const API_BASE_URL: &str = "https://api.imdbapi.dev";

/// Fetches the ranked top-250 chart. Client and base_url are injected
/// so tests can point this at a mock server.
pub async fn fetch_top_chart_with_client(
    client: &Client,
    base_url: &str,
) -> Result<Vec<ChartEntry>, FetchError> {
    let url = format!("{}/chart/top", base_url);
    let response = client.get(&url).send().await?;
    if response.status() != StatusCode::OK {
        return Err(FetchError::UnrecoverableStatus(response.status()));
    }
    let chart = response.json::<TopChartResponse>().await?;
    Ok(chart.items)
}

/// Fetches the fully detailed movie object for one identifier.
pub async fn fetch_movie_with_client(
    client: &Client,
    base_url: &str,
    movie_id: &str,
) -> Result<RawMovie, FetchError> {
    let url = format!("{}/title/{}", base_url, movie_id);
    let response = client.get(&url).send().await?;
    if response.status() != StatusCode::OK {
        return Err(FetchError::UnrecoverableStatus(response.status()));
    }
    Ok(response.json::<RawMovie>().await?)
}
