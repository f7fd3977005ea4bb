use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize)]
pub struct TopChartResponse {
    pub items: Vec<ChartEntry>,
}

/// One entry of the ranked top chart. Only the identifier is consumed;
/// the detail fetch supplies everything else.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ChartEntry {
    #[serde(rename = "movieID")]
    pub id: String,
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Person {
    pub name: String,
}

/// The fully detailed movie object as served by the API.
///
/// Every field except the identifier is optional here; required-field
/// presence is enforced when the record is derived, so an absent field
/// surfaces with its name instead of as a decode failure.
#[derive(Debug, Deserialize)]
pub struct RawMovie {
    #[serde(rename = "movieID")]
    pub id: String,
    pub title: Option<String>,
    pub year: Option<u32>,
    #[serde(rename = "cover url")]
    pub cover_url: Option<String>,
    pub plot: Option<Vec<String>>,
    pub directors: Option<Vec<Person>>,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned an unrecoverable status code: {0}")]
    UnrecoverableStatus(StatusCode),
}
