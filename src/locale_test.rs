use super::*;

#[test]
fn rtl_languages_detected() {
    for code in ["ar", "ar-AE", "he", "fa-IR", "ur"] {
        assert!(is_rtl(Some(code)), "expected rtl for {code:?}");
    }
}

#[test]
fn ltr_languages_detected() {
    for code in ["en", "en-US", "fr"] {
        assert!(!is_rtl(Some(code)), "expected ltr for {code:?}");
    }
}

#[test]
fn empty_and_absent_are_ltr() {
    assert!(!is_rtl(Some("")));
    assert!(!is_rtl(Some("   ")));
    assert!(!is_rtl(None));
}

#[test]
fn match_is_case_insensitive() {
    assert!(is_rtl(Some("AR")));
    assert!(is_rtl(Some("He-IL")));
}

#[test]
fn primary_subtag_must_match_exactly() {
    // "arn" (Mapudungun) shares a prefix with "ar" but is LTR.
    assert!(!is_rtl(Some("arn")));
    assert!(!is_rtl(Some("arn-CL")));
}

#[test]
fn direction_mirrors_is_rtl() {
    for code in ["ar", "ar-AE", "he", "fa-IR", "ur", "en", "en-US", "fr", ""] {
        let expected = if is_rtl(Some(code)) { Direction::Rtl } else { Direction::Ltr };
        assert_eq!(direction(Some(code)), expected);
    }
    assert_eq!(direction(None), Direction::Ltr);
    assert_eq!(Direction::Rtl.to_string(), "rtl");
    assert_eq!(Direction::Ltr.as_str(), "ltr");
}

#[test]
fn document_attributes_apply_is_idempotent() {
    let mut attrs = DocumentAttributes::new("en");
    assert_eq!(attrs.dir, Direction::Ltr);

    attrs.apply_language("ar-AE");
    let once = attrs.clone();
    attrs.apply_language("ar-AE");
    assert_eq!(attrs, once);
    assert_eq!(attrs.lang, "ar-AE");
    assert_eq!(attrs.dir, Direction::Rtl);

    attrs.apply_language("fr");
    assert_eq!(attrs.dir, Direction::Ltr);
}

fn supported() -> Vec<String> {
    vec!["en".to_owned(), "ar".to_owned(), "he".to_owned()]
}

#[test]
fn path_language_prefix_is_split() {
    assert_eq!(resolve_path_language("/ar/about-us", &supported(), "en"), ("ar".to_owned(), "/about-us".to_owned()));
    assert_eq!(resolve_path_language("/HE/", &supported(), "en"), ("he".to_owned(), "/".to_owned()));
    assert_eq!(resolve_path_language("/ar", &supported(), "en"), ("ar".to_owned(), "/".to_owned()));
}

#[test]
fn path_without_prefix_uses_default() {
    assert_eq!(resolve_path_language("/", &supported(), "en"), ("en".to_owned(), "/".to_owned()));
    assert_eq!(resolve_path_language("", &supported(), "en"), ("en".to_owned(), "/".to_owned()));
    assert_eq!(
        resolve_path_language("/trading/cfds/", &supported(), "en"),
        ("en".to_owned(), "/trading/cfds".to_owned())
    );
    assert_eq!(resolve_path_language("/fr/about", &supported(), "en"), ("en".to_owned(), "/fr/about".to_owned()));
}
