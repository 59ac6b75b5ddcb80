use std::borrow::Cow;

/// Every code point we read as an apostrophe when matching
pub const APOSTROPHES: &[char] = &['\'', '\u{2019}', '\u{02BC}', '\u{02BB}'];

/// Every code point we read as a hyphen when matching
pub const HYPHENS: &[char] = &[
    '-', '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2015}', '\u{2212}',
    '\u{05BE}', '\u{FE58}', '\u{FE63}', '\u{FF0D}',
];

#[inline]
pub fn is_apostrophe(c: char) -> bool {
    APOSTROPHES.contains(&c)
}

#[inline]
pub fn is_hyphen(c: char) -> bool {
    HYPHENS.contains(&c)
}

#[inline]
fn canonical_char(c: char) -> char {
    if is_apostrophe(c) {
        '\''
    } else if is_hyphen(c) {
        '-'
    } else {
        c
    }
}

/// Collapses each punctuation class onto its ASCII member.
///
/// Only used to build comparison keys; display text keeps whatever
/// punctuation the caller supplied.
pub fn canonicalize(text: &str) -> Cow<str> {
    let needs_work = text
        .chars()
        .any(|c| !c.is_ascii() && canonical_char(c) != c);

    if needs_work {
        Cow::Owned(text.chars().map(canonical_char).collect())
    } else {
        Cow::Borrowed(text)
    }
}
