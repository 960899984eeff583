//! Canonical string form for comparisons, never for display.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Decompose (NFD), strip combining marks, drop all whitespace, lowercase.
///
/// Makes version matching insensitive to accents and spacing, e.g.
/// `"Versão 1.0"` and `"versao1.0"` compare equal.
pub fn normalize(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents_and_spaces() {
        assert_eq!(normalize("Versão 1.0"), "versao1.0");
        assert_eq!(normalize("Versão 1.0"), normalize("versao1.0"));
    }

    #[test]
    fn test_idempotent() {
        for s in ["Versão 1.0", "  MiXeD Case  ", "ação\tfinal", ""] {
            assert_eq!(normalize(s), normalize(&normalize(s)));
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_plain_ascii_passthrough() {
        assert_eq!(normalize("1.0"), "1.0");
        assert_eq!(normalize("Release-2"), "release-2");
    }
}
