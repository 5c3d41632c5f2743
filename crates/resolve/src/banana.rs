//! Redundant embedded prefixes ("bananas").
//!
//! Some namespaces repeat a stylized form of their own prefix inside every
//! identifier, e.g. `FBbt:00000001` under `fbbt` or `GO_REF:0000001` under
//! `go.ref`. That repeated part is the banana; it carries no information and
//! is stripped during CURIE normalization.

use bioreg_schema::Resource;

use crate::context::ResolutionContext;
use crate::metaprefix::OBOFOUNDRY;

impl ResolutionContext {
	/// Returns the banana for `prefix`, without any trailing `:`.
	///
	/// The curated banana wins; otherwise the OBO Foundry preferred prefix is
	/// used. Resources with neither have no banana.
	pub fn banana_for(&self, prefix: &str) -> Option<&str> {
		banana_of(self.resource_for(prefix)?)
	}
}

pub(crate) fn banana_of(resource: &Resource) -> Option<&str> {
	resource
		.banana
		.as_deref()
		.or_else(|| resource.external_record(OBOFOUNDRY).get_str("preferredPrefix"))
		.map(|banana| banana.trim_end_matches(':'))
}
