//! Async client for the Gemini `generateContent` endpoint.

use crate::prompt::{build_prompt, request_body};
use crate::response::parse_response;
use crate::{AnalysisConfig, BoardAnalysis};
use checkers_core::Player;
use checkers_engine::Board;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while requesting an analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Analysis is switched off in the configuration.
    #[error("analysis is disabled")]
    Disabled,
    /// No API key was configured or found in the environment.
    #[error("no API key: set `api_key` or the {0} environment variable")]
    MissingApiKey(String),
    /// The HTTP request failed.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },
    /// The request did not finish within the configured timeout.
    #[error("request timed out after {0}s")]
    Timeout(u64),
    /// The caller cancelled the request.
    #[error("request cancelled")]
    Cancelled,
    /// The reply body or payload was not valid JSON of the expected shape.
    #[error("invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),
    /// The reply envelope had no usable content.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Longest error body kept in [`AnalysisError::Status`].
const MAX_ERROR_BODY: usize = 512;

/// Client for remote board analysis.
///
/// The client is cheap to clone and may be shared between tasks. Each request
/// serializes the board before any I/O starts, so no board borrow is held
/// across an await point.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    config: AnalysisConfig,
}

impl AnalysisClient {
    /// Creates a client from configuration.
    pub fn new(config: AnalysisConfig) -> Self {
        AnalysisClient {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Creates a client that sends requests through `http`.
    pub fn with_http_client(config: AnalysisConfig, http: reqwest::Client) -> Self {
        AnalysisClient { http, config }
    }

    /// Returns the client's configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Returns the `generateContent` URL for the configured model.
    pub fn request_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Requests an analysis of `board` with `player` to move.
    ///
    /// # Errors
    ///
    /// Returns an [`AnalysisError`] describing the first failure. Use
    /// [`analyze`](Self::analyze) to collapse failures into `None`.
    pub async fn try_analyze(
        &self,
        board: &Board,
        player: Player,
    ) -> Result<BoardAnalysis, AnalysisError> {
        if !self.config.enabled {
            return Err(AnalysisError::Disabled);
        }
        let key = self
            .config
            .resolve_api_key()
            .ok_or_else(|| AnalysisError::MissingApiKey(self.config.api_key_env.clone()))?;

        let body = request_body(&build_prompt(board, player));
        let timeout = Duration::from_secs(self.config.timeout_secs);

        tracing::debug!(model = %self.config.model, %player, "requesting board analysis");
        match tokio::time::timeout(timeout, self.send(&key, &body)).await {
            Ok(result) => result,
            Err(_) => Err(AnalysisError::Timeout(self.config.timeout_secs)),
        }
    }

    async fn send(&self, key: &str, body: &Value) -> Result<BoardAnalysis, AnalysisError> {
        let response = self
            .http
            .post(self.request_url())
            .header("x-goog-api-key", key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            let mut body = text;
            if body.len() > MAX_ERROR_BODY {
                let mut end = MAX_ERROR_BODY;
                while !body.is_char_boundary(end) {
                    end -= 1;
                }
                body.truncate(end);
            }
            return Err(AnalysisError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_response(&text)
    }

    /// Requests an analysis, logging any failure and returning `None`.
    pub async fn analyze(&self, board: &Board, player: Player) -> Option<BoardAnalysis> {
        report(self.try_analyze(board, player).await)
    }

    /// Like [`analyze`](Self::analyze), but gives up as soon as `cancel`
    /// completes.
    pub async fn analyze_until<F>(
        &self,
        board: &Board,
        player: Player,
        cancel: F,
    ) -> Option<BoardAnalysis>
    where
        F: Future<Output = ()>,
    {
        let result = tokio::select! {
            result = self.try_analyze(board, player) => result,
            () = cancel => Err(AnalysisError::Cancelled),
        };
        report(result)
    }
}

fn report(result: Result<BoardAnalysis, AnalysisError>) -> Option<BoardAnalysis> {
    match result {
        Ok(analysis) => {
            tracing::info!(best_move = %analysis.best_move, confidence = analysis.confidence, "analysis received");
            Some(analysis)
        }
        Err(AnalysisError::Disabled) => {
            tracing::debug!("analysis disabled, skipping");
            None
        }
        Err(e @ (AnalysisError::Cancelled | AnalysisError::MissingApiKey(_))) => {
            tracing::warn!(error = %e, "board analysis unavailable");
            None
        }
        Err(e) => {
            tracing::error!(error = %e, "board analysis failed");
            None
        }
    }
}
