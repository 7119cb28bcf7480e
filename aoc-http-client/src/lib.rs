//! AOC HTTP Client Library
//!
//! Transport layer for downloading personalized Advent of Code puzzle inputs.
//! The client performs exactly one request per call and reports the raw status
//! and body; deciding what counts as a usable input is left to the caller.
//!
//! # Features
//!
//! - Puzzle input fetching for any year and day
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Async API on top of `reqwest`
//! - Fixed 20 second connect/read/request timeouts, overridable
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use aoc_http_client::AocClient;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//!
//! // Your session cookie from adventofcode.com
//! let session = "your_session_cookie_here";
//!
//! let response = client.fetch_input(2024, 1, session).await?;
//! if response.is_success() {
//!     println!("{}", response.body);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::{AocClient, AocClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, InputResponse};
pub use error::AocError;
