// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Brave Search API client implementation.

use brave_common_secret::SecretString;
use reqwest::header::{ACCEPT, ACCEPT_ENCODING};
use reqwest::Client;
use tracing::{debug, error, instrument, trace};

use crate::config::{ClientConfig, Endpoints};
use crate::error::BraveError;
use crate::types::{
	ApiResponse, QueryOptions, SpellcheckOptions, SuggestOptions, WebSearchOptions,
};
use crate::url;

/// Header carrying the API key.
pub const SUBSCRIPTION_TOKEN_HEADER: &str = "X-Subscription-Token";

/// Client for the Brave Search web, suggest and spellcheck endpoints.
///
/// Immutable once built. Cloning is cheap and clones share one connection
/// pool, so a single instance can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct SearchClient {
	http_client: Client,
	api_key: SecretString,
	endpoints: Endpoints,
}

impl SearchClient {
	/// Creates a client for the public Brave endpoints.
	///
	/// Requests time out after [`REQUEST_TIMEOUT`](crate::REQUEST_TIMEOUT)
	/// rather than waiting forever; build through [`SearchClient::from_config`]
	/// with [`ClientConfig::without_timeout`] for unbounded requests.
	pub fn new(api_key: impl Into<SecretString>) -> Self {
		Self::from_config(ClientConfig::new(api_key)).expect("Failed to create HTTP client")
	}

	pub fn from_config(config: ClientConfig) -> Result<Self, BraveError> {
		let http_client = brave_common_http::builder_with_timeout(config.timeout)
			.build()
			.map_err(BraveError::ClientBuild)?;

		Ok(Self {
			http_client,
			api_key: config.api_key,
			endpoints: config.endpoints,
		})
	}

	pub fn endpoints(&self) -> &Endpoints {
		&self.endpoints
	}

	/// Full request URL for `term`; the endpoint is picked by the option type.
	pub fn build_url<O: QueryOptions>(&self, term: &str, options: &O) -> String {
		url::build_url(self.endpoints.get(O::KIND), term, &options.query_pairs())
	}

	/// Web results for `term`.
	pub async fn search(
		&self,
		term: &str,
		options: &WebSearchOptions,
	) -> Result<ApiResponse, BraveError> {
		self.execute(term, options).await
	}

	/// Query completions for a partial `term`.
	pub async fn suggest(
		&self,
		term: &str,
		options: &SuggestOptions,
	) -> Result<ApiResponse, BraveError> {
		self.execute(term, options).await
	}

	/// Spelling corrections for `term`.
	pub async fn spellcheck(
		&self,
		term: &str,
		options: &SpellcheckOptions,
	) -> Result<ApiResponse, BraveError> {
		self.execute(term, options).await
	}

	/// Issues one GET against the endpoint for `O` and returns the parsed body.
	///
	/// A non-2xx status becomes [`BraveError::Status`]; a failed exchange or
	/// an unparseable body keeps the underlying error.
	#[instrument(skip(self, options), fields(kind = O::KIND.as_str()))]
	pub async fn execute<O: QueryOptions>(
		&self,
		term: &str,
		options: &O,
	) -> Result<ApiResponse, BraveError> {
		let url = self.build_url(term, options);
		debug!(url = %url, "Sending request to Brave Search");

		let response = self
			.http_client
			.get(&url)
			.header(ACCEPT, "application/json")
			.header(ACCEPT_ENCODING, "gzip")
			.header(SUBSCRIPTION_TOKEN_HEADER, self.api_key.expose())
			.send()
			.await
			.map_err(|e| {
				error!(error = %e, "Network error during Brave Search request");
				BraveError::Network(e)
			})?;

		let status = response.status();
		debug!(status = %status, "Received response from Brave Search");

		if !status.is_success() {
			error!(status = status.as_u16(), "Brave Search returned an error status");
			return Err(BraveError::from_status(status));
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			BraveError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse Brave Search response");
			BraveError::InvalidResponse(e)
		})
	}
}
