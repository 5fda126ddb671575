//! Preset regular expressions for the format rules
//!
//! Patterns are known-good literals compiled once on first use. `EMAIL`
//! matches any substring; `PHONE` and `SNILS` are anchored at the start
//! only, so trailing content passes — that permissiveness is inherited
//! behavior and left intact. `BIRTHDAY` is anchored at both ends.

use std::sync::LazyLock;

use regex::Regex;

/// Local part, `@`, domain labels, and one or more alphabetic TLD segments
/// of 2-6 characters.
pub(super) static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9+._%-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9-]{0,64}(\.[a-zA-Z]{2,6})+").unwrap()
});

/// Russian mask `+7 (DDD) DDD-DD-DD`, dash or space between digit groups.
pub(super) static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+7\s*\(\d{3}\)\s*\d{3}[\- ]\d{2}[\- ]\d{2}").unwrap());

/// `DD[-/.]MM[-/.]YYYY` with the year restricted to 19xx/20xx.
pub(super) static BIRTHDAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])[-/.](0[1-9]|1[012])[-/.](19|20)\d\d$").unwrap()
});

/// SNILS mask `DDD-DDD-DDD DD`.
pub(super) static SNILS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}-\d{3}-\d{3} \d{2}").unwrap());

// ============================================================================
// TESTS
// ============================================================================
