// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `brave-search` - query the Brave Search API from the shell.
//!
//! The API key comes from `BRAVE_SEARCH_API_KEY` or the file named by
//! `BRAVE_SEARCH_API_KEY_FILE`. Responses are printed as pretty JSON.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use brave_common_config::{require_secret_env, RequiredSecretError, SecretString};
use brave_search::{
	ApiResponse, ClientConfig, QueryOptions, SearchClient, SpellcheckOptions, SuggestOptions,
	WebSearchOptions,
};

const API_KEY_VAR: &str = "BRAVE_SEARCH_API_KEY";

/// Brave Search from the command line
#[derive(Parser, Debug)]
#[command(name = "brave-search", version, about, long_about = None)]
struct Args {
	/// Log output format
	#[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
	log_format: LogFormat,

	/// Request timeout in seconds; 0 waits indefinitely
	#[arg(long, env = "BRAVE_SEARCH_TIMEOUT_SECS", default_value_t = 10, global = true)]
	timeout_secs: u64,

	/// Print the request URL instead of sending it
	#[arg(long, global = true)]
	dry_run: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Web search results
	Web {
		term: String,
		/// Search language (search_lang)
		#[arg(long)]
		lang: Option<String>,
		#[arg(long)]
		country: Option<String>,
		/// Number of results (1-100)
		#[arg(long)]
		count: Option<u32>,
		#[arg(long)]
		offset: Option<u32>,
		/// Comma-separated result types, e.g. web,news
		#[arg(long)]
		filter: Option<String>,
	},
	/// Query suggestions for a partial term
	Suggest {
		term: String,
		#[arg(long)]
		lang: Option<String>,
		#[arg(long)]
		country: Option<String>,
	},
	/// Spelling corrections
	Spellcheck {
		term: String,
		#[arg(long)]
		lang: Option<String>,
	},
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LogFormat {
	Pretty,
	Compact,
	Json,
}

fn init_tracing(format: LogFormat) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new("brave_search=info"));

	match format {
		LogFormat::Json => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().json().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Compact => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().compact().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Pretty => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().with_writer(std::io::stderr))
				.init();
		}
	}
}

fn client_config(api_key: SecretString, timeout_secs: u64) -> ClientConfig {
	let config = ClientConfig::new(api_key);
	match timeout_secs {
		0 => config.without_timeout(),
		secs => config.with_timeout(Duration::from_secs(secs)),
	}
}

/// Loads the API key from `var` / `{var}_FILE`.
///
/// A dry run never sends the key, so an unset key is fine there; a key file
/// that cannot be read is still an error.
fn load_api_key(var: &str, dry_run: bool) -> Result<SecretString> {
	match require_secret_env(var) {
		Ok(key) => Ok(key),
		Err(RequiredSecretError::Missing { .. }) if dry_run => Ok(SecretString::from("")),
		Err(err) => Err(err).context("failed to load API key"),
	}
}

/// What a subcommand produced.
#[derive(Debug)]
enum Output {
	/// The URL a dry run would have requested.
	Url(String),
	Body(ApiResponse),
}

async fn run<O: QueryOptions>(
	client: &SearchClient,
	term: &str,
	options: &O,
	dry_run: bool,
) -> Result<Output> {
	if dry_run {
		return Ok(Output::Url(client.build_url(term, options)));
	}

	info!(kind = O::KIND.as_str(), "querying Brave Search");
	let body = client
		.execute(term, options)
		.await
		.with_context(|| format!("{} request failed", O::KIND))?;
	Ok(Output::Body(body))
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();
	init_tracing(args.log_format);

	let api_key = load_api_key(API_KEY_VAR, args.dry_run)?;
	debug!(api_key = %api_key, timeout_secs = args.timeout_secs, "loaded configuration");

	let client = SearchClient::from_config(client_config(api_key, args.timeout_secs))?;

	let output = match args.command {
		Command::Web {
			term,
			lang,
			country,
			count,
			offset,
			filter,
		} => {
			let options = WebSearchOptions {
				language: lang,
				country,
				size: count,
				offset,
				filters: filter,
			};
			run(&client, &term, &options, args.dry_run).await?
		}
		Command::Suggest {
			term,
			lang,
			country,
		} => {
			let options = SuggestOptions {
				language: lang,
				country,
			};
			run(&client, &term, &options, args.dry_run).await?
		}
		Command::Spellcheck { term, lang } => {
			let options = SpellcheckOptions { language: lang };
			run(&client, &term, &options, args.dry_run).await?
		}
	};

	match output {
		Output::Url(url) => println!("{url}"),
		Output::Body(body) => println!(
			"{}",
			serde_json::to_string_pretty(&body).context("failed to format response")?
		),
	}

	Ok(())
}
