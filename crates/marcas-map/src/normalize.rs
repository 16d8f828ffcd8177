//! Text canonicalization for header and name comparison.

use deunicode::deunicode;

/// Characters stripped alongside whitespace. Runs collapse into nothing, not
/// a placeholder, so "r.u.t" and "rut" normalize identically.
const STRIPPED: [char; 6] = ['.', '-', '_', '/', ':', ';'];

/// Canonicalize a string for comparison: transliterate accented characters
/// to ASCII, lowercase, and drop all whitespace and separator punctuation.
///
/// Pure and deterministic. Both sides of every lookup (actual headers,
/// catalog synonyms, worker names used as grouping keys) must go through
/// this same function or matches silently fail.
#[must_use]
pub fn normalize_text(raw: &str) -> String {
    deunicode(raw)
        .to_lowercase()
        .chars()
        .filter(|ch| !ch.is_whitespace() && !STRIPPED.contains(ch))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_case_and_separators() {
        assert_eq!(normalize_text("Dígito Verificador"), "digitoverificador");
        assert_eq!(normalize_text("R.U.T. Trabajador"), "ruttrabajador");
        assert_eq!(normalize_text("relación_laboral"), "relacionlaboral");
    }

    #[test]
    fn collapses_separator_runs_to_nothing() {
        assert_eq!(normalize_text("h.-entrada//salida"), "hentradasalida");
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("  .-_/:; "), "");
    }

    #[test]
    fn matches_the_synonym_side() {
        // Both sides of a lookup normalize identically.
        assert_eq!(normalize_text("RUT EMPLEADOR"), normalize_text("rut empleador"));
        assert_eq!(normalize_text("Ocupación"), normalize_text("ocupacion"));
    }
}
