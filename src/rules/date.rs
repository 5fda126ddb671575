//! Age check backing the `Birthday18Plus` rule

use chrono::{Local, Months, NaiveDate};

/// Format the original implementation assumed. Kept as the default only —
/// the rule carries its format as a parameter so other locales can opt in.
pub(super) const DEFAULT_BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

const MAJORITY_MONTHS: u32 = 18 * 12;

/// Valid iff `text` parses as a date under `format` and that date is
/// strictly earlier than today minus 18 years. Unparsable text fails.
pub(super) fn over_18(text: &str, format: &str) -> bool {
    let Ok(birthday) = NaiveDate::parse_from_str(text, format) else {
        return false;
    };
    let Some(cutoff) = Local::now()
        .date_naive()
        .checked_sub_months(Months::new(MAJORITY_MONTHS))
    else {
        return false;
    };
    birthday < cutoff
}

// ============================================================================
// TESTS
// ============================================================================
