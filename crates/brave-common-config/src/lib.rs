// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration helpers shared by Brave Search binaries.
//!
//! The library crate never reads the environment itself; credential
//! provisioning is left to callers, and this crate is what they use for it.

pub mod env;

pub use brave_common_secret::{Secret, SecretString, REDACTED};

pub use env::{load_secret_env, require_secret_env, RequiredSecretError, SecretEnvError};
