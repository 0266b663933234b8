//! HTTP calls to the tracker backend via `gloo-net`.
//! `FetchError` separates failure kinds for logging; callers handle them all alike.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::{CoordsReply, Direction, DirectionReply, DirectionRequest, StatsReply};

pub const STATS_PATH: &str = "/stats";
pub const COORDS_PATH: &str = "/coords";
pub const DIRECTION_PATH: &str = "/direction";
pub const VIDEO_FEED_PATH: &str = "/video_feed";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("request could not be built: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Transport(String),
    #[error("server answered {0}")]
    Status(u16),
    #[error("malformed body: {0}")]
    Decode(String),
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, FetchError> {
    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| FetchError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let resp = Request::get(path)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    decode(resp).await
}

/// `GET /stats`.
pub async fn fetch_stats() -> Result<StatsReply, FetchError> {
    get_json(STATS_PATH).await
}

/// `GET /coords`.
pub async fn fetch_coords() -> Result<CoordsReply, FetchError> {
    get_json(COORDS_PATH).await
}

/// `POST /direction` with `{"direction": "<TOKEN>"}`.
///
/// A 400 reply carries `{"status": "error"}`; it surfaces here as
/// [`FetchError::Status`].
pub async fn send_direction(direction: Direction) -> Result<DirectionReply, FetchError> {
    let body = DirectionRequest {
        direction: direction.token(),
    };
    let resp = Request::post(DIRECTION_PATH)
        .json(&body)
        .map_err(|e| FetchError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    decode(resp).await
}
