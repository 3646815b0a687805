// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Operation kinds and per-operation query options.

use std::fmt;

/// Upstream JSON body, returned as-is.
pub type ApiResponse = serde_json::Value;

/// Which endpoint a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
	Web,
	Suggest,
	Spellcheck,
}

impl SearchKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			SearchKind::Web => "web",
			SearchKind::Suggest => "suggest",
			SearchKind::Spellcheck => "spellcheck",
		}
	}
}

impl fmt::Display for SearchKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Options that know which endpoint they belong to and how they appear in
/// the query string.
///
/// `query_pairs` returns only the fields that were set, in the fixed order
/// the endpoint documents. Values are raw; encoding happens in
/// [`crate::url::build_url`].
pub trait QueryOptions {
	const KIND: SearchKind;

	fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

/// Options for `GET /res/v1/web/search`.
///
/// Values are passed through unchecked; `size` outside 1..=100 is for the
/// upstream service to reject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebSearchOptions {
	pub language: Option<String>,
	pub country: Option<String>,
	pub size: Option<u32>,
	pub offset: Option<u32>,
	/// Comma-separated result types, e.g. `web,news`.
	pub filters: Option<String>,
}

impl WebSearchOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_language(mut self, language: impl Into<String>) -> Self {
		self.language = Some(language.into());
		self
	}

	pub fn with_country(mut self, country: impl Into<String>) -> Self {
		self.country = Some(country.into());
		self
	}

	pub fn with_size(mut self, size: u32) -> Self {
		self.size = Some(size);
		self
	}

	pub fn with_offset(mut self, offset: u32) -> Self {
		self.offset = Some(offset);
		self
	}

	pub fn with_filters(mut self, filters: impl Into<String>) -> Self {
		self.filters = Some(filters.into());
		self
	}
}

impl QueryOptions for WebSearchOptions {
	const KIND: SearchKind = SearchKind::Web;

	fn query_pairs(&self) -> Vec<(&'static str, String)> {
		let mut pairs = Vec::with_capacity(5);
		push_opt(&mut pairs, "search_lang", &self.language);
		push_opt(&mut pairs, "country", &self.country);
		push_opt(&mut pairs, "count", &self.size);
		push_opt(&mut pairs, "offset", &self.offset);
		push_opt(&mut pairs, "result_filter", &self.filters);
		pairs
	}
}

/// Options for `GET /res/v1/suggest/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestOptions {
	pub language: Option<String>,
	pub country: Option<String>,
}

impl SuggestOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_language(mut self, language: impl Into<String>) -> Self {
		self.language = Some(language.into());
		self
	}

	pub fn with_country(mut self, country: impl Into<String>) -> Self {
		self.country = Some(country.into());
		self
	}
}

impl QueryOptions for SuggestOptions {
	const KIND: SearchKind = SearchKind::Suggest;

	fn query_pairs(&self) -> Vec<(&'static str, String)> {
		let mut pairs = Vec::with_capacity(2);
		push_opt(&mut pairs, "language", &self.language);
		push_opt(&mut pairs, "country", &self.country);
		pairs
	}
}

/// Options for `GET /res/v1/spellcheck/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpellcheckOptions {
	pub language: Option<String>,
}

impl SpellcheckOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_language(mut self, language: impl Into<String>) -> Self {
		self.language = Some(language.into());
		self
	}
}

impl QueryOptions for SpellcheckOptions {
	const KIND: SearchKind = SearchKind::Spellcheck;

	fn query_pairs(&self) -> Vec<(&'static str, String)> {
		let mut pairs = Vec::with_capacity(1);
		push_opt(&mut pairs, "language", &self.language);
		pairs
	}
}

fn push_opt<T: ToString>(
	pairs: &mut Vec<(&'static str, String)>,
	key: &'static str,
	value: &Option<T>,
) {
	if let Some(value) = value {
		pairs.push((key, value.to_string()));
	}
}
