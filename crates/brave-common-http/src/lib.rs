// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared HTTP client construction.
//!
//! Every outbound client carries the same `User-Agent`, in the form
//! `brave-search/{version}`.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

/// Returns a client builder with the standard `User-Agent` already set.
///
/// ```ignore
/// let client = brave_common_http::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Builder with the standard `User-Agent` and an optional request timeout.
///
/// `None` leaves requests unbounded.
pub fn builder_with_timeout(timeout: Option<Duration>) -> ClientBuilder {
	match timeout {
		Some(timeout) => builder().timeout(timeout),
		None => builder(),
	}
}

pub fn user_agent() -> String {
	format!("brave-search/{}", env!("CARGO_PKG_VERSION"))
}
