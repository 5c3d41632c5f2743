//! CURIE parsing and normalization.
//!
//! A CURIE is `<prefix><sep><identifier>`; the separator is `:` by default,
//! `/` in identifiers.org-style paths and `_` in OBO PURL local names. Parsing
//! splits on the first separator, normalizes the prefix, and removes at most
//! one redundant leading segment from the identifier:
//!
//! 1. `"{banana}:"`, matched case-sensitively, when the resource has a banana;
//! 2. otherwise `"{prefix}:"`, matched case-insensitively against the prefix
//!    as written, so `go:GO:1234` and `go:go:1234` both become `go:1234`.

use std::fmt;

use crate::context::ResolutionContext;

#[cfg(test)]
mod tests;

/// A normalized `(prefix, identifier)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Curie {
	pub prefix: String,
	pub identifier: String,
}

impl Curie {
	pub fn new(prefix: impl Into<String>, identifier: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			identifier: identifier.into(),
		}
	}

	pub fn into_parts(self) -> (String, String) {
		(self.prefix, self.identifier)
	}
}

impl fmt::Display for Curie {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.prefix, self.identifier)
	}
}

impl ResolutionContext {
	/// Parses `curie` on the first occurrence of `sep` and normalizes both parts.
	///
	/// Returns `None` when the separator is missing or the prefix is unknown;
	/// there is never a partial result.
	pub fn parse_curie(&self, curie: &str, sep: &str) -> Option<Curie> {
		let (prefix, identifier) = curie.split_once(sep)?;
		self.normalize_parsed_curie(prefix, identifier)
	}

	/// Normalizes an already split prefix/identifier pair.
	pub fn normalize_parsed_curie(&self, prefix: &str, identifier: &str) -> Option<Curie> {
		let canonical = self.resolve_prefix(prefix)?;
		let identifier = strip_redundant_prefix(identifier, prefix, self.banana_for(prefix));
		Some(Curie::new(canonical, identifier))
	}

	/// Normalizes a CURIE and rejoins it with `:`, whatever `sep` was.
	pub fn normalize_curie(&self, curie: &str, sep: &str) -> Option<String> {
		self.parse_curie(curie, sep).map(|curie| curie.to_string())
	}
}

/// Removes a leading banana or self-prefix segment; at most one is removed.
fn strip_redundant_prefix<'a>(identifier: &'a str, prefix: &str, banana: Option<&str>) -> &'a str {
	if let Some(banana) = banana
		&& let Some(rest) = identifier.strip_prefix(banana).and_then(|rest| rest.strip_prefix(':'))
	{
		return rest;
	}
	strip_prefix_ignore_case(identifier, prefix)
		.and_then(|rest| rest.strip_prefix(':'))
		.unwrap_or(identifier)
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
	let mut chars = text.char_indices();
	let mut end = 0;
	for expected in prefix.chars() {
		let (at, found) = chars.next()?;
		if !found.to_lowercase().eq(expected.to_lowercase()) {
			return None;
		}
		end = at + found.len_utf8();
	}
	Some(&text[end..])
}
