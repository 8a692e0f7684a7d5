//! Unicode folding for file names.
//!
//! Compatibility-decomposes text (NFKD) and drops nonspacing combining marks,
//! so accented letters lose their accents and stylized glyphs (fullwidth,
//! mathematical alphanumerics) collapse to the plain letters they decompose to.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static NONSPACING_MARK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{Mn}").unwrap());

/// Decompose `input` and strip every `Mn` code point.
pub fn normalize_unicode(input: &str) -> String {
    let decomposed: String = input.nfkd().collect();
    NONSPACING_MARK.replace_all(&decomposed, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_acute_accent() {
        assert_eq!(normalize_unicode("café"), "cafe");
    }

    #[test]
    fn strips_precomposed_and_combining_forms_alike() {
        assert_eq!(normalize_unicode("Ame\u{0301}lie"), "Amelie");
        assert_eq!(normalize_unicode("Amélie"), "Amelie");
    }

    #[test]
    fn folds_fullwidth_letters() {
        assert_eq!(normalize_unicode("ＡＢＣ１２３"), "ABC123");
    }

    #[test]
    fn folds_mathematical_alphanumerics() {
        assert_eq!(normalize_unicode("𝐁𝐨𝐥𝐝 𝘐𝘵𝘢𝘭𝘪𝘤"), "Bold Italic");
    }

    #[test]
    fn passes_through_plain_ascii() {
        assert_eq!(normalize_unicode("plain-name_01.txt"), "plain-name_01.txt");
    }

    #[test]
    fn keeps_characters_without_decomposition() {
        assert_eq!(normalize_unicode("日本語"), "日本語");
        assert_eq!(normalize_unicode("ß"), "ß");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_unicode(""), "");
    }
}
