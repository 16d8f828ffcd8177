//! National identifier (RUT) normalization.
//!
//! Input formatting is wildly inconsistent across sheets: "12.345.678-9",
//! "12345678-9", "12 345 678" with the check digit in its own column, or a
//! bare number. The canonical form is `body-check` where the body is
//! digits-only and the check character is a single uppercase alphanumeric.
//! The check character is informational: grouping uses only the digit body.

use marcas_map::normalize_text;

/// Normalize a raw identifier, optionally with a separate check-character
/// column, into canonical `body-check` form.
///
/// The fallback order matters and must not be reordered:
/// 1. missing raw value → absent (the check column alone identifies nobody);
/// 2. an explicit non-blank check value always wins over anything embedded
///    in the raw value;
/// 3. an embedded hyphen splits body from check at the first hyphen;
/// 4. a bare value keeps its digits only, with no check character appended —
///    none can be inferred from a plain numeric string.
#[must_use]
pub fn normalize_rut(raw: Option<&str>, dv: Option<&str>) -> Option<String> {
    let raw = raw?;
    let value: String = raw
        .trim()
        .to_uppercase()
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect();

    if let Some(dv) = dv
        && !dv.trim().is_empty()
    {
        let check = dv.trim().to_uppercase().chars().last()?;
        let body = digits_of(&value);
        if body.is_empty() {
            return None;
        }
        return Some(format!("{body}-{check}"));
    }

    if let Some((left, right)) = value.split_once('-') {
        let body = digits_of(left);
        let check = right.chars().last();
        return match (body.is_empty(), check) {
            (false, Some(check)) => Some(format!("{body}-{check}")),
            _ => None,
        };
    }

    let body = digits_of(&value);
    if body.is_empty() { None } else { Some(body) }
}

/// Digit body of a canonical identifier: everything before the hyphen.
#[must_use]
pub fn rut_body(canonical: &str) -> &str {
    canonical.split('-').next().unwrap_or(canonical)
}

/// Grouping key for a record: the identifier's digit body when present,
/// otherwise the normalized name. Name keys use the same normalization as
/// header matching so trivially different spellings of one name land in one
/// group.
#[must_use]
pub fn group_key(rut: Option<&str>, nombre: Option<&str>) -> Option<String> {
    if let Some(rut) = rut {
        return Some(rut_body(rut).to_string());
    }
    let nombre = nombre?;
    let key = normalize_text(nombre);
    if key.is_empty() { None } else { Some(key) }
}

fn digits_of(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_forms_survive() {
        assert_eq!(
            normalize_rut(Some("12345678-9"), None).as_deref(),
            Some("12345678-9")
        );
        assert_eq!(
            normalize_rut(Some("12.345.678-9"), None).as_deref(),
            Some("12345678-9")
        );
    }

    #[test]
    fn bare_value_keeps_digits_only_with_no_check() {
        // No separator and no check column: nothing says "K" is a check
        // character, so the result is body-only.
        assert_eq!(
            normalize_rut(Some("12345678K"), None).as_deref(),
            Some("12345678")
        );
    }

    #[test]
    fn explicit_check_column_wins() {
        assert_eq!(
            normalize_rut(Some("12.345.678"), Some("5")).as_deref(),
            Some("12345678-5")
        );
        // Even over an embedded hyphen.
        assert_eq!(
            normalize_rut(Some("12345678-9"), Some("K")).as_deref(),
            Some("12345678-K")
        );
    }

    #[test]
    fn check_column_takes_last_character_uppercased() {
        assert_eq!(
            normalize_rut(Some("9876543"), Some(" dv: k ")).as_deref(),
            Some("9876543-K")
        );
    }

    #[test]
    fn missing_raw_is_absent_regardless_of_check() {
        assert_eq!(normalize_rut(None, None), None);
        assert_eq!(normalize_rut(None, Some("5")), None);
    }

    #[test]
    fn split_happens_at_first_hyphen() {
        assert_eq!(
            normalize_rut(Some("12-34-5"), None).as_deref(),
            Some("12-5")
        );
    }

    #[test]
    fn degenerate_values_are_absent() {
        assert_eq!(normalize_rut(Some("sin rut"), None), None);
        assert_eq!(normalize_rut(Some("-9"), None), None);
        assert_eq!(normalize_rut(Some("12345678-"), None), None);
        assert_eq!(normalize_rut(Some("abc"), Some("5")), None);
    }

    #[test]
    fn lowercase_check_is_uppercased() {
        assert_eq!(
            normalize_rut(Some("12345678-k"), None).as_deref(),
            Some("12345678-K")
        );
    }

    #[test]
    fn group_key_uses_digit_body() {
        assert_eq!(group_key(Some("11111111-1"), None).as_deref(), Some("11111111"));
        assert_eq!(group_key(Some("11111111-2"), None).as_deref(), Some("11111111"));
        assert_eq!(group_key(Some("11111111"), None).as_deref(), Some("11111111"));
    }

    #[test]
    fn group_key_falls_back_to_normalized_name() {
        assert_eq!(
            group_key(None, Some("JOSÉ PÉREZ")),
            group_key(None, Some("jose perez"))
        );
        assert_eq!(group_key(None, None), None);
        assert_eq!(group_key(None, Some("   ")), None);
    }
}
