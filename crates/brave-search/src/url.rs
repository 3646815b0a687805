// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Query string construction.

use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left as-is by `encodeURIComponent`: alphanumerics plus
/// `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')');

/// Percent-encodes one query component the way `encodeURIComponent` does.
///
/// A space becomes `%20` (never `+`) and `&`, `=`, `?` cannot split the
/// component.
pub fn encode_component(value: &str) -> Cow<'_, str> {
	utf8_percent_encode(value, COMPONENT).into()
}

/// Builds `{base_url}?q={term}` followed by each pair in the order given.
pub fn build_url(base_url: &str, term: &str, pairs: &[(&'static str, String)]) -> String {
	let mut url = format!("{base_url}?q={}", encode_component(term));
	for (key, value) in pairs {
		url.push('&');
		url.push_str(key);
		url.push('=');
		url.push_str(&encode_component(value));
	}
	url
}

#[cfg(test)]
mod tests {
	use super::*;
	use percent_encoding::percent_decode_str;
	use proptest::prelude::*;

	const BASE: &str = "https://api.search.brave.com/res/v1/web/search";

	fn q_values(url: &str) -> Vec<String> {
		let (_, query) = url.split_once('?').unwrap();
		query
			.split('&')
			.filter_map(|pair| pair.strip_prefix("q="))
			.map(|v| v.to_string())
			.collect()
	}

	#[test]
	fn plain_term_needs_no_escaping() {
		assert_eq!(build_url(BASE, "panda", &[]), format!("{BASE}?q=panda"));
	}

	#[test]
	fn pairs_are_appended_in_order() {
		let pairs = [("country", "jp".to_string()), ("count", "5".to_string())];
		assert_eq!(
			build_url(BASE, "cat", &pairs),
			format!("{BASE}?q=cat&country=jp&count=5")
		);
	}

	#[test]
	fn reserved_characters_are_escaped() {
		let url = build_url(BASE, "a&b=c?d e", &[]);
		assert_eq!(url, format!("{BASE}?q=a%26b%3Dc%3Fd%20e"));
		assert_eq!(q_values(&url), vec!["a%26b%3Dc%3Fd%20e".to_string()]);
	}

	#[test]
	fn option_values_are_escaped_too() {
		let pairs = [("result_filter", "web,news".to_string())];
		assert_eq!(
			build_url(BASE, "x", &pairs),
			format!("{BASE}?q=x&result_filter=web%2Cnews")
		);
	}

	#[test]
	fn component_marks_stay_unescaped() {
		assert_eq!(
			build_url(BASE, "it's (a) test!*", &[]),
			format!("{BASE}?q=it's%20(a)%20test!*")
		);
		assert_eq!(encode_component("-_.~"), "-_.~");
	}

	#[test]
	fn non_ascii_is_utf8_percent_encoded() {
		assert_eq!(encode_component("café"), "caf%C3%A9");
	}

	#[test]
	fn empty_term_still_yields_q() {
		assert_eq!(build_url(BASE, "", &[]), format!("{BASE}?q="));
	}

	proptest! {
		/// Whatever the term contains, the URL carries exactly one `q` and it
		/// decodes back to the original term.
		#[test]
		fn term_round_trips_through_single_q(term in "[a-z &=?#+/%!*'()]{0,30}") {
			let url = build_url(BASE, &term, &[("country", "us".to_string())]);
			let q = q_values(&url);
			prop_assert_eq!(q.len(), 1);

			let decoded = percent_decode_str(&q[0]).decode_utf8().unwrap();
			prop_assert_eq!(decoded.as_ref(), term.as_str());
			prop_assert!(!q[0].contains(' '));
			prop_assert!(!q[0].contains('&'));
			prop_assert!(!q[0].contains('='));
			prop_assert!(!q[0].contains('?'));
		}
	}
}
