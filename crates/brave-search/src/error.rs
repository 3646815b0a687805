// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the Brave Search client.

use thiserror::Error;

/// Everything a search call can fail with. Nothing here is retried.
#[derive(Debug, Error)]
pub enum BraveError {
	/// Upstream answered with a non-success status.
	#[error("{status}: {reason}")]
	Status { status: u16, reason: String },

	/// The request did not complete (DNS, connect, timeout, body read).
	#[error(transparent)]
	Network(#[from] reqwest::Error),

	/// The body was not valid JSON.
	#[error(transparent)]
	InvalidResponse(#[from] serde_json::Error),

	#[error("failed to build HTTP client: {0}")]
	ClientBuild(#[source] reqwest::Error),
}

impl BraveError {
	pub(crate) fn from_status(status: reqwest::StatusCode) -> Self {
		BraveError::Status {
			status: status.as_u16(),
			reason: status
				.canonical_reason()
				.unwrap_or("Unknown Status")
				.to_string(),
		}
	}

	/// HTTP status code, when upstream produced one.
	pub fn status(&self) -> Option<u16> {
		match self {
			BraveError::Status { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// True when no usable response came back: network failures and bodies
	/// that failed to parse.
	pub fn is_transport(&self) -> bool {
		matches!(
			self,
			BraveError::Network(_) | BraveError::InvalidResponse(_)
		)
	}
}
