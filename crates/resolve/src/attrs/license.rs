//! License alias table.
//!
//! Authorities publish the same license as a URL, an SPDX-ish id or a free
//! text label. Known spellings collapse to one short code; anything else is
//! passed through untouched.

const LICENSES: &[(&str, &str)] = &[
	("CC BY 4.0", "CC BY 4.0"),
	("CC-BY 4.0", "CC BY 4.0"),
	("CC-BY-4.0", "CC BY 4.0"),
	("http://creativecommons.org/licenses/by/4.0/", "CC BY 4.0"),
	("https://creativecommons.org/licenses/by/4.0/", "CC BY 4.0"),
	("CC BY 3.0", "CC BY 3.0"),
	("CC-BY 3.0", "CC BY 3.0"),
	("CC-BY-3.0", "CC BY 3.0"),
	("http://creativecommons.org/licenses/by/3.0/", "CC BY 3.0"),
	("https://creativecommons.org/licenses/by/3.0/", "CC BY 3.0"),
	("CC BY-SA 4.0", "CC BY-SA 4.0"),
	("http://creativecommons.org/licenses/by-sa/4.0/", "CC BY-SA 4.0"),
	("https://creativecommons.org/licenses/by-sa/4.0/", "CC BY-SA 4.0"),
	("http://creativecommons.org/licenses/by-nc/4.0/", "CC BY-NC 4.0"),
	("https://creativecommons.org/licenses/by-nc/4.0/", "CC BY-NC 4.0"),
	("CC0", "CC0 1.0"),
	("CC-0", "CC0 1.0"),
	("CC0 1.0", "CC0 1.0"),
	("http://creativecommons.org/publicdomain/zero/1.0/", "CC0 1.0"),
	("https://creativecommons.org/publicdomain/zero/1.0/", "CC0 1.0"),
	("GNU GPL 3.0", "GPL-3.0"),
	("https://www.gnu.org/licenses/gpl-3.0.en.html", "GPL-3.0"),
	("Apache 2.0 License", "Apache-2.0"),
	("http://www.apache.org/licenses/LICENSE-2.0", "Apache-2.0"),
	("https://www.apache.org/licenses/LICENSE-2.0", "Apache-2.0"),
];

/// Maps a raw license value to its short code, or returns it unchanged.
pub fn normalize_license(raw: &str) -> &str {
	LICENSES
		.iter()
		.find_map(|&(alias, code)| (alias == raw).then_some(code))
		.unwrap_or(raw)
}
