// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Loading secrets with the `VAR` / `VAR_FILE` convention.
//!
//! `VAR_FILE` wins when both are set, so a key mounted as a Docker or
//! Kubernetes secret overrides one left over in the shell environment.

use std::path::PathBuf;
use std::{env, fs};

use brave_common_secret::SecretString;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SecretEnvError {
	#[error("failed to read secret file at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("secret file path in {var} is empty")]
	EmptyPath { var: String },
}

#[derive(Debug, Error)]
pub enum RequiredSecretError {
	#[error("required secret not found: set either {var} or {file_var}")]
	Missing { var: String, file_var: String },

	#[error(transparent)]
	Load(#[from] SecretEnvError),
}

/// Reads `{var}_FILE` (one trailing newline stripped) or else `{var}`.
///
/// Returns `Ok(None)` when neither is set.
///
/// ```no_run
/// use brave_common_config::load_secret_env;
///
/// if let Some(key) = load_secret_env("BRAVE_SEARCH_API_KEY")? {
///     println!("key loaded: {key}"); // prints "[REDACTED]"
/// }
/// # Ok::<(), brave_common_config::SecretEnvError>(())
/// ```
pub fn load_secret_env(var: &str) -> Result<Option<SecretString>, SecretEnvError> {
	let file_var = format!("{var}_FILE");

	if let Ok(path_str) = env::var(&file_var) {
		if path_str.is_empty() {
			return Err(SecretEnvError::EmptyPath { var: file_var });
		}

		let path = PathBuf::from(path_str);
		let content = fs::read_to_string(&path).map_err(|source| SecretEnvError::Io {
			path: path.clone(),
			source,
		})?;

		let value = content.strip_suffix('\n').unwrap_or(&content).to_string();
		return Ok(Some(SecretString::new(value)));
	}

	Ok(env::var(var).ok().map(SecretString::new))
}

/// Like [`load_secret_env`], but a missing secret is an error.
pub fn require_secret_env(var: &str) -> Result<SecretString, RequiredSecretError> {
	load_secret_env(var)?.ok_or_else(|| RequiredSecretError::Missing {
		var: var.to_string(),
		file_var: format!("{var}_FILE"),
	})
}
