use crate::normalize::Normalization;
use crate::punct;
use crate::trim::nametrim;
use compact_str::CompactString;
use log::debug;
use std::collections::HashMap;
use std::fmt;

/// Lowercase, collapse punctuation classes, then apply the engine's
/// normalization. Every key, stored or looked up, goes through here.
pub fn canonical_key(text: &str, normalization: &Normalization) -> String {
    let lower: String = text.chars().flat_map(char::to_lowercase).collect();
    let canonical = punct::canonicalize(&lower);
    normalization.apply(&canonical).into_owned()
}

/// The shapes of lookup a case exception can answer, in the order they
/// take precedence when more than one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionKey<'a> {
    /// A whole trimmed "Family, Given" string
    FullName(&'a str),
    /// A family name looked up alongside the given name it came with
    FamilyWithGiven(&'a str, &'a str),
    /// A family name on its own, whatever the given name
    FamilyOnly(&'a str),
}

impl<'a> ExceptionKey<'a> {
    fn canonical(&self, normalization: &Normalization) -> String {
        match *self {
            ExceptionKey::FullName(text) | ExceptionKey::FamilyOnly(text) => {
                canonical_key(text, normalization)
            }
            ExceptionKey::FamilyWithGiven(family, given) => {
                canonical_key(&format!("{}, {}", family, given), normalization)
            }
        }
    }
}

/// A registered full name, kept exactly as the caller spelled it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName {
    pub family: CompactString,
    pub given: CompactString,
}

impl FullName {
    /// Reads "Family, Given"; both sides must be present.
    pub fn parse(name: &str) -> Option<FullName> {
        let name = nametrim(name);
        let (family, given) = name.split_once(',')?;
        let (family, given) = (family.trim(), given.trim());

        if family.is_empty() || given.is_empty() {
            None
        } else {
            Some(FullName {
                family: CompactString::new(family),
                given: CompactString::new(given),
            })
        }
    }

    pub fn natural(&self) -> String {
        format!("{} {}", self.given, self.family)
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.family, self.given)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum CaseException<'r> {
    Family(&'r str),
    Full(&'r FullName),
}

/// Irregular capitalizations, by family name or by full name.
#[derive(Debug, Clone, Default)]
pub struct CaseExceptions {
    family: HashMap<String, CompactString>,
    full: HashMap<String, FullName>,
}

impl CaseExceptions {
    pub fn register(&mut self, name: &str, normalization: &Normalization) -> usize {
        let display = nametrim(name);
        if display.is_empty() {
            debug!("ignoring empty case exception");
            return 0;
        }

        if display.contains(',') {
            return match FullName::parse(&display) {
                Some(full) => {
                    let key = canonical_key(&full.to_string(), normalization);
                    debug!("case exception {:?} registered as full name", display);
                    self.full.insert(key, full);
                    1
                }
                None => {
                    debug!("rejecting case exception {:?}: missing a name part", display);
                    0
                }
            };
        }

        let key = canonical_key(&display, normalization);
        debug!("case exception {:?} registered as family name", display);
        self.family.insert(key, CompactString::new(&display));
        1
    }

    pub fn lookup(
        &self,
        key: ExceptionKey,
        normalization: &Normalization,
    ) -> Option<CaseException> {
        if self.is_empty() {
            return None;
        }

        let canonical = key.canonical(normalization);
        match key {
            ExceptionKey::FullName(_) | ExceptionKey::FamilyWithGiven(_, _) => {
                self.full.get(&canonical).map(CaseException::Full)
            }
            ExceptionKey::FamilyOnly(_) => self
                .family
                .get(&canonical)
                .map(|display| CaseException::Family(display.as_str())),
        }
    }

    /// Tries each key in turn and returns the first hit.
    pub fn resolve<'k>(
        &self,
        keys: &[ExceptionKey<'k>],
        normalization: &Normalization,
    ) -> Option<CaseException> {
        keys.iter()
            .find_map(|key| self.lookup(*key, normalization))
    }

    pub fn len(&self) -> usize {
        self.family.len() + self.full.len()
    }

    pub fn is_empty(&self) -> bool {
        self.family.is_empty() && self.full.is_empty()
    }
}

/// Full names whose family/given boundary is known, keyed by their
/// natural-order spelling.
#[derive(Debug, Clone, Default)]
pub struct SplitExceptions {
    names: HashMap<String, FullName>,
}

impl SplitExceptions {
    pub fn register(&mut self, name: &str, normalization: &Normalization) -> usize {
        match FullName::parse(name) {
            Some(full) => {
                let key = canonical_key(&full.natural(), normalization);
                debug!("split exception {} registered", full);
                self.names.insert(key, full);
                1
            }
            None => {
                debug!("rejecting split exception {:?}: expected \"Family, Given\"", name);
                0
            }
        }
    }

    pub fn lookup(&self, natural: &str, normalization: &Normalization) -> Option<&FullName> {
        if self.is_empty() {
            return None;
        }
        self.names.get(&canonical_key(natural, normalization))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: Normalization = Normalization::Identity;

    #[test]
    fn keys_ignore_case_and_punctuation_class() {
        assert_eq!(
            canonical_key("fAm d\u{2019}Fam\u{2010}Fam, Giv", &ID),
            canonical_key("FAM D'FAM-FAM, GIV", &ID)
        );
        assert_ne!(
            canonical_key("Nun\u{303}ez", &ID),
            canonical_key("Nuñez", &ID)
        );
        assert_eq!(
            canonical_key("Nun\u{303}ez", &Normalization::Nfc),
            canonical_key("Nuñez", &Normalization::Nfc)
        );
    }

    #[test]
    fn parse_full_name() {
        let full = FullName::parse(" Assis de Queiroz ,Vinicius ").unwrap();
        assert_eq!("Assis de Queiroz", full.family);
        assert_eq!("Vinicius", full.given);
        assert_eq!("Vinicius Assis de Queiroz", full.natural());
        assert_eq!("Assis de Queiroz, Vinicius", full.to_string());

        assert_eq!(None, FullName::parse("Smith,"));
        assert_eq!(None, FullName::parse(", John"));
        assert_eq!(None, FullName::parse("John Smith"));
    }

    #[test]
    fn case_registration() {
        let mut exceptions = CaseExceptions::default();
        assert_eq!(0, exceptions.register("", &ID));
        assert_eq!(0, exceptions.register("   ", &ID));
        assert_eq!(0, exceptions.register("Smith,", &ID));
        assert_eq!(1, exceptions.register("MacDuff", &ID));
        assert_eq!(1, exceptions.register("D'Family, Given", &ID));
        assert_eq!(2, exceptions.len());

        assert_eq!(
            Some(CaseException::Family("MacDuff")),
            exceptions.lookup(ExceptionKey::FamilyOnly("MACDUFF"), &ID)
        );
        assert!(matches!(
            exceptions.lookup(ExceptionKey::FullName("d'family, given"), &ID),
            Some(CaseException::Full(f)) if f.family == "D'Family"
        ));
        assert!(matches!(
            exceptions.lookup(ExceptionKey::FamilyWithGiven("d\u{2019}family", "GIVEN"), &ID),
            Some(CaseException::Full(_))
        ));
        assert_eq!(None, exceptions.lookup(ExceptionKey::FamilyOnly("d'family"), &ID));
        assert_eq!(None, exceptions.lookup(ExceptionKey::FullName("d'family, other"), &ID));
    }

    #[test]
    fn last_registration_wins() {
        let mut exceptions = CaseExceptions::default();
        exceptions.register("Macduff", &ID);
        exceptions.register("MacDuff", &ID);
        assert_eq!(1, exceptions.len());
        assert_eq!(
            Some(CaseException::Family("MacDuff")),
            exceptions.lookup(ExceptionKey::FamilyOnly("macduff"), &ID)
        );
    }

    #[test]
    fn precedence() {
        let mut exceptions = CaseExceptions::default();
        exceptions.register("deVito", &ID);
        exceptions.register("DeVito, Danny", &ID);

        let keys = [
            ExceptionKey::FamilyWithGiven("devito", "danny"),
            ExceptionKey::FamilyOnly("devito"),
        ];
        assert!(matches!(
            exceptions.resolve(&keys, &ID),
            Some(CaseException::Full(f)) if f.family == "DeVito"
        ));

        let keys = [
            ExceptionKey::FamilyWithGiven("devito", "anybody"),
            ExceptionKey::FamilyOnly("devito"),
        ];
        assert_eq!(
            Some(CaseException::Family("deVito")),
            exceptions.resolve(&keys, &ID)
        );
    }

    #[test]
    fn split_registration() {
        let mut exceptions = SplitExceptions::default();
        assert_eq!(0, exceptions.register("Vinicius Assis de Queiroz", &ID));
        assert_eq!(0, exceptions.register("", &ID));
        assert_eq!(1, exceptions.register("Assis de Queiroz, Vinicius", &ID));
        assert_eq!(1, exceptions.len());

        let hit = exceptions.lookup("vinicius assis de queiroz", &ID).unwrap();
        assert_eq!("Assis de Queiroz, Vinicius", hit.to_string());
        assert!(exceptions.lookup("Vinicius Anybody", &ID).is_none());
    }
}
