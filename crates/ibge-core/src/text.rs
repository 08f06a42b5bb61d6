// crates/ibge-core/src/text.rs

//! Key normalization shared by the builder and the lookup side.
//!
//! Both sides must fold keys the same way, otherwise a record that was
//! indexed could never be found again.

use crate::error::{LookupError, LookupResult};

/// Normalize a state abbreviation into its index key.
///
/// Only upper-cases. Whitespace and accents are kept, so `" sp "` or `"PÁ"`
/// never match a state.
///
/// # Examples
///
/// ```rust
/// use ibge_core::text::fold_abbreviation;
///
/// assert_eq!(fold_abbreviation("sp"), "SP");
/// assert_eq!(fold_abbreviation("Rj"), "RJ");
/// assert_ne!(fold_abbreviation(" rj "), "RJ");
/// ```
pub fn fold_abbreviation(s: &str) -> String {
    s.to_uppercase()
}

/// Strictly parse a numeric code coming from the outside world.
///
/// - Anything that is not a well-formed integer is `InvalidArgument`.
/// - A well-formed integer that cannot be a code (negative, or too large for
///   the key type) is `NotFound`: it is a valid question with no answer.
///
/// `field` names the argument in the error, `entity` names what was looked
/// up when the number is out of range.
pub fn parse_code(value: &str, field: &'static str, entity: &'static str) -> LookupResult<u32> {
    let wide: i64 = value.parse().map_err(|_| LookupError::InvalidArgument {
        field,
        value: value.to_owned(),
    })?;
    u32::try_from(wide).map_err(|_| LookupError::not_found(entity, value))
}

/// Returns `true` if `value` is a well-formed integer.
///
/// Used by adapters that route one path segment either to a by-code or a
/// by-abbreviation query.
pub fn is_numeric(value: &str) -> bool {
    value.parse::<i64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_only() {
        assert_eq!(fold_abbreviation("sp"), "SP");
        assert_eq!(fold_abbreviation("mG"), "MG");
        assert_eq!(fold_abbreviation("  mG\t"), "  MG\t");
        assert_eq!(fold_abbreviation("pá"), "PÁ");
    }

    #[test]
    fn parse_code_accepts_integers() {
        assert_eq!(parse_code("35", "codigo_ibge", "estado"), Ok(35));
        assert_eq!(parse_code("0643", "codigo_tom", "cidade"), Ok(643));
        assert_eq!(parse_code("+33", "codigo_ibge", "estado"), Ok(33));
    }

    #[test]
    fn parse_code_rejects_garbage_as_invalid_argument() {
        for bad in ["abc", "", "3.5", "35 ", "1e3", "SP"] {
            let err = parse_code(bad, "codigo_ibge", "estado").unwrap_err();
            assert!(err.is_invalid_argument(), "{bad:?} gave {err:?}");
        }
    }

    #[test]
    fn parse_code_out_of_range_is_not_found() {
        let err = parse_code("-1", "codigo_ibge", "cidade").unwrap_err();
        assert!(err.is_not_found());
        let err = parse_code("99999999999", "codigo_ibge", "cidade").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn numeric_detection_matches_parse() {
        assert!(is_numeric("35"));
        assert!(is_numeric("-7"));
        assert!(!is_numeric("SP"));
        assert!(!is_numeric(""));
    }
}
