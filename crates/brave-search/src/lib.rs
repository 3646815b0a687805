// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Brave Search API client.
//!
//! Three operations share one request path: web search, query suggestions
//! and spell-check. Each builds a query string from a term plus its own
//! option type, issues a single GET, and returns the JSON body untouched.
//!
//! ```no_run
//! use brave_search::{SearchClient, WebSearchOptions};
//!
//! # async fn run() -> Result<(), brave_search::BraveError> {
//! let client = SearchClient::new("BSA-your-key");
//! let options = WebSearchOptions::new().with_country("jp").with_size(5);
//! let body = client.search("cat", &options).await?;
//! println!("{body}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;
pub mod url;

pub use client::SearchClient;
pub use config::{
	ClientConfig, Endpoints, DEFAULT_SPELLCHECK_URL, DEFAULT_SUGGEST_URL, DEFAULT_WEB_URL,
	REQUEST_TIMEOUT,
};
pub use error::BraveError;
pub use types::{
	ApiResponse, QueryOptions, SearchKind, SpellcheckOptions, SuggestOptions, WebSearchOptions,
};
