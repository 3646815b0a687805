// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client configuration: credential, endpoint base URLs and timeout.

use std::time::Duration;

use brave_common_secret::SecretString;

use crate::types::SearchKind;

pub const DEFAULT_WEB_URL: &str = "https://api.search.brave.com/res/v1/web/search";
pub const DEFAULT_SUGGEST_URL: &str = "https://api.search.brave.com/res/v1/suggest/search";
pub const DEFAULT_SPELLCHECK_URL: &str = "https://api.search.brave.com/res/v1/spellcheck/search";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Base URL for each operation kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
	pub web: String,
	pub suggest: String,
	pub spellcheck: String,
}

impl Endpoints {
	/// Points all three operations at one host, keeping the upstream paths.
	///
	/// Used for mock servers and proxies: `http://127.0.0.1:9000` becomes
	/// `http://127.0.0.1:9000/res/v1/web/search` and so on.
	pub fn with_origin(origin: &str) -> Self {
		let origin = origin.trim_end_matches('/');
		Self {
			web: format!("{origin}/res/v1/web/search"),
			suggest: format!("{origin}/res/v1/suggest/search"),
			spellcheck: format!("{origin}/res/v1/spellcheck/search"),
		}
	}

	pub fn get(&self, kind: SearchKind) -> &str {
		match kind {
			SearchKind::Web => &self.web,
			SearchKind::Suggest => &self.suggest,
			SearchKind::Spellcheck => &self.spellcheck,
		}
	}

	fn slot_mut(&mut self, kind: SearchKind) -> &mut String {
		match kind {
			SearchKind::Web => &mut self.web,
			SearchKind::Suggest => &mut self.suggest,
			SearchKind::Spellcheck => &mut self.spellcheck,
		}
	}
}

impl Default for Endpoints {
	fn default() -> Self {
		Self {
			web: DEFAULT_WEB_URL.to_string(),
			suggest: DEFAULT_SUGGEST_URL.to_string(),
			spellcheck: DEFAULT_SPELLCHECK_URL.to_string(),
		}
	}
}

/// Everything a [`SearchClient`](crate::SearchClient) needs.
///
/// The key is not validated; a bad key shows up as a 401/403 from upstream.
#[derive(Debug, Clone)]
pub struct ClientConfig {
	pub api_key: SecretString,
	pub endpoints: Endpoints,
	pub timeout: Option<Duration>,
}

impl ClientConfig {
	pub fn new(api_key: impl Into<SecretString>) -> Self {
		Self {
			api_key: api_key.into(),
			endpoints: Endpoints::default(),
			timeout: Some(REQUEST_TIMEOUT),
		}
	}

	pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
		self.endpoints = endpoints;
		self
	}

	/// Overrides the base URL of a single operation.
	pub fn with_base_url(mut self, kind: SearchKind, url: impl Into<String>) -> Self {
		*self.endpoints.slot_mut(kind) = url.into();
		self
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}

	/// Requests wait for as long as the server takes.
	pub fn without_timeout(mut self) -> Self {
		self.timeout = None;
		self
	}
}
