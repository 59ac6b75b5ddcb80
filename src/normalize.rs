use std::borrow::Cow;
use std::fmt;
use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::{
    is_nfc_quick, is_nfd_quick, is_nfkc_quick, is_nfkd_quick, IsNormalized, UnicodeNormalization,
};

/// How exception keys are brought to a canonical Unicode form.
///
/// An [`Engine`](crate::Engine) applies its active normalization to every
/// key it stores and every key it looks up. Changing it only affects
/// registrations and lookups made afterwards, so entries registered under
/// one normalization may stop matching under another.
///
/// # Examples
/// ```
/// use namesplit::{Engine, Normalization};
///
/// let mut engine = Engine::new();
/// let previous = engine.normalize(Normalization::Nfc);
/// assert!(matches!(previous, Normalization::Identity));
/// ```
#[derive(Clone, Copy, Default)]
pub enum Normalization {
    /// Compare code points as given.
    #[default]
    Identity,
    Nfc,
    Nfd,
    Nfkc,
    Nfkd,
    /// Any caller-supplied function.
    Custom(fn(&str) -> String),
}

impl Normalization {
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match *self {
            Normalization::Identity => Cow::Borrowed(text),
            Normalization::Nfc => {
                if is_nfc_quick(text.chars()) == IsNormalized::Yes {
                    Cow::Borrowed(text)
                } else {
                    Cow::Owned(text.nfc().collect())
                }
            }
            Normalization::Nfd => {
                if is_nfd_quick(text.chars()) == IsNormalized::Yes {
                    Cow::Borrowed(text)
                } else {
                    Cow::Owned(text.nfd().collect())
                }
            }
            Normalization::Nfkc => {
                if is_nfkc_quick(text.chars()) == IsNormalized::Yes {
                    Cow::Borrowed(text)
                } else {
                    Cow::Owned(text.nfkc().collect())
                }
            }
            Normalization::Nfkd => {
                if is_nfkd_quick(text.chars()) == IsNormalized::Yes {
                    Cow::Borrowed(text)
                } else {
                    Cow::Owned(text.nfkd().collect())
                }
            }
            Normalization::Custom(f) => Cow::Owned(f(text)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Normalization::Identity => "identity",
            Normalization::Nfc => "nfc",
            Normalization::Nfd => "nfd",
            Normalization::Nfkc => "nfkc",
            Normalization::Nfkd => "nfkd",
            Normalization::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Normalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Particle matching always compares composed forms, independent of the
// engine's key normalization, since the table itself is stored composed
#[inline]
pub fn composed(text: &str) -> Cow<str> {
    Normalization::Nfc.apply(text)
}

#[inline]
pub fn is_combining(c: char) -> bool {
    canonical_combining_class(c) > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_borrows() {
        let text = "Nun\u{303}ez";
        assert!(matches!(Normalization::Identity.apply(text), Cow::Borrowed(_)));
    }

    #[test]
    fn composes_and_decomposes() {
        assert_eq!("Nuñez", Normalization::Nfc.apply("Nun\u{303}ez"));
        assert_eq!("Nun\u{303}ez", Normalization::Nfd.apply("Nuñez"));
        assert!(matches!(Normalization::Nfc.apply("Nuñez"), Cow::Borrowed(_)));
    }

    #[test]
    fn compatibility_forms() {
        assert_eq!("fi", Normalization::Nfkc.apply("\u{FB01}"));
        assert_eq!("fi", Normalization::Nfkd.apply("\u{FB01}"));
    }

    #[test]
    fn custom() {
        fn shout(s: &str) -> String {
            s.to_uppercase()
        }
        assert_eq!("ABC", Normalization::Custom(shout).apply("abc"));
        assert_eq!("custom", format!("{:?}", Normalization::Custom(shout)));
    }

    #[test]
    fn combining() {
        assert!(is_combining('\u{301}'));
        assert!(!is_combining('a'));
    }
}
