//! Checkers board analysis through a remote generative model.
//!
//! This crate turns a board snapshot into a prompt, sends it to the Gemini
//! `generateContent` endpoint and parses the structured reply. Analysis is
//! strictly advisory: every failure is logged and reported as `None`, and
//! nothing here touches game state.
//!
//! # Overview
//!
//! - [`AnalysisClient`] - async client with timeout and cancellation
//! - [`BoardAnalysis`] - the parsed `{ analysis, bestMove, confidence }` reply
//! - [`CheckersConfig`] - TOML configuration (`checkers.toml`)
//!
//! # Example
//!
//! ```no_run
//! use checkers_analysis::{AnalysisClient, CheckersConfig};
//! use checkers_core::Player;
//! use checkers_engine::INITIAL_BOARD;
//!
//! # async fn run() -> Result<(), checkers_analysis::ConfigError> {
//! let config = CheckersConfig::load()?;
//! let client = AnalysisClient::new(config.analysis);
//! if let Some(analysis) = client.analyze(&INITIAL_BOARD, Player::Red).await {
//!     println!("{} (best: {})", analysis.analysis, analysis.best_move);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod prompt;
pub mod response;

pub use client::{AnalysisClient, AnalysisError};
pub use config::{AnalysisConfig, CheckersConfig, ConfigError};
pub use prompt::build_prompt;
pub use response::{parse_response, BoardAnalysis};
