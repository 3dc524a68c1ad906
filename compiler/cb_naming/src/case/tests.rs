use super::*;

fn split(ident: &str) -> Vec<&str> {
    split_camel_case(ident).into_iter().collect()
}

#[test]
fn simple_words() {
    assert_eq!(split("Landscape"), ["Landscape"]);
    assert_eq!(split("PageKind"), ["Page", "Kind"]);
    assert_eq!(split("pageKindValue"), ["page", "Kind", "Value"]);
}

#[test]
fn acronym_runs() {
    assert_eq!(split("HTTPServer"), ["HTTP", "Server"]);
    assert_eq!(split("RGB"), ["RGB"]);
    assert_eq!(split("ToRGB"), ["To", "RGB"]);
    assert_eq!(split("IOError"), ["IO", "Error"]);
}

#[test]
fn digits_and_underscores_stay_attached() {
    assert_eq!(split("Version2Beta"), ["Version2", "Beta"]);
    assert_eq!(split("Pdf17"), ["Pdf17"]);
    assert_eq!(split("Foo_Bar"), ["Foo_", "Bar"]);
}

#[test]
fn unicode_case() {
    assert_eq!(split("ÉtatÜbersicht"), ["État", "Übersicht"]);
}

#[test]
fn empty_identifier_has_no_tokens() {
    assert!(split("").is_empty());
}
