use crate::punct::is_hyphen;
use std::borrow::Cow;

/// Tidies the spacing of a name.
///
/// Collapses runs of whitespace into one space and trims both ends, puts
/// exactly one space after each comma and none before it, and removes
/// spaces around hyphens in compound names. Returns the input unchanged
/// (and unallocated) when there is nothing to fix.
///
/// # Examples
/// ```
/// use namesplit::nametrim;
///
/// assert_eq!("Smith, John", nametrim("   Smith   ,  John   "));
/// assert_eq!("Smith-Jones, Mary Ann", nametrim("Smith - Jones,Mary\tAnn"));
/// ```
pub fn nametrim(name: &str) -> Cow<str> {
    let mut result = String::with_capacity(name.len());
    let mut pending_space = false;
    let mut after_hyphen = false;

    for c in name.chars() {
        if c.is_whitespace() {
            pending_space = !result.is_empty() && !after_hyphen;
        } else if c == ',' {
            result.push(c);
            pending_space = true;
            after_hyphen = false;
        } else if is_hyphen(c) {
            result.push(c);
            pending_space = false;
            after_hyphen = true;
        } else {
            if pending_space {
                result.push(' ');
            }
            result.push(c);
            pending_space = false;
            after_hyphen = false;
        }
    }

    if result == name {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(result)
    }
}

/// Puts a family name and given name(s) back into natural order.
///
/// Either side may be missing, in which case the other comes back as it
/// was. A blank side is dropped when the other side has text, and a lone
/// blank side comes back unchanged.
///
/// # Examples
/// ```
/// use namesplit::namejoin;
///
/// assert_eq!(Some("Bram van Haag".to_string()), namejoin(Some("van Haag"), Some("Bram")));
/// assert_eq!(Some("Madonna".to_string()), namejoin(Some("Madonna"), None));
/// assert_eq!(None, namejoin(None, None));
/// ```
pub fn namejoin(family: Option<&str>, given: Option<&str>) -> Option<String> {
    match (family, given) {
        (Some(family), Some(given)) if family.trim().is_empty() => Some(given.to_string()),
        (Some(family), Some(given)) if given.trim().is_empty() => Some(family.to_string()),
        (Some(family), Some(given)) => Some(format!("{} {}", given.trim(), family.trim())),
        (Some(name), None) | (None, Some(name)) => Some(name.to_string()),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace() {
        assert_eq!("John Smith", nametrim("  John \t\n Smith "));
        assert_eq!("John Smith", nametrim("John\u{a0}Smith"));
        assert_eq!("", nametrim("   "));
        assert_eq!("", nametrim(""));
    }

    #[test]
    fn commas() {
        assert_eq!("Smith, John", nametrim("Smith,John"));
        assert_eq!("Smith, John", nametrim("Smith ,John"));
        assert_eq!("Smith,", nametrim("Smith , "));
        assert_eq!(", John", nametrim(" , John"));
    }

    #[test]
    fn hyphens() {
        assert_eq!("Smith-Jones", nametrim("Smith - Jones"));
        assert_eq!("al-Qader", nametrim("al- Qader"));
        assert_eq!("Smith\u{2013}Jones", nametrim("Smith \u{2013} Jones"));
    }

    #[test]
    fn borrowed_when_clean() {
        assert!(matches!(nametrim("van Haag, Bram"), Cow::Borrowed(_)));
        assert!(matches!(nametrim("van Haag,  Bram"), Cow::Owned(_)));
    }

    #[test]
    fn idempotent() {
        for name in ["  a ,, b ", "x -  y , z", "- a", "a -", ",", " , , "] {
            let once = nametrim(name).into_owned();
            assert_eq!(once, nametrim(&once), "{:?}", name);
        }
    }

    #[test]
    fn join() {
        assert_eq!(
            Some("Bram van Haag".to_string()),
            namejoin(Some("van Haag"), Some("Bram"))
        );
        assert_eq!(Some("Bram".to_string()), namejoin(None, Some("Bram")));
        assert_eq!(Some("Bram".to_string()), namejoin(Some(""), Some("Bram")));
        assert_eq!(Some("Smith".to_string()), namejoin(Some("Smith"), Some(" ")));
    }

    #[test]
    fn join_empty_side() {
        assert_eq!(Some(String::new()), namejoin(Some(""), None));
        assert_eq!(Some(" ".to_string()), namejoin(None, Some(" ")));
        assert_eq!(Some(String::new()), namejoin(Some(""), Some("")));
        assert_eq!(None, namejoin(None, None));
    }
}
