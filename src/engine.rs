use crate::case::{
    capitalize_family_word, capitalize_given_word, capitalize_into, is_mixed_case, lowercase,
};
use crate::exception::{CaseException, CaseExceptions, ExceptionKey, SplitExceptions};
use crate::normalize::Normalization;
use crate::particle::{conjunction_at, match_chain, particle_display, ParticleRule};
use crate::split::split_index;
use crate::token::{tokenize, NameToken};
use crate::trim::{namejoin, nametrim};
use log::{debug, trace};
use std::io::BufRead;
use std::mem;
use thiserror::Error;

/// What kind of string [`Engine::namecase_as`] is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// A whole name, in either "Given Family" or "Family, Given" order
    #[default]
    Full,
    Family,
    Given,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read exceptions: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: not a valid exception: {text:?}")]
    Rejected { line: usize, text: String },
}

/// The result of [`Engine::nameparts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameParts {
    Empty,
    /// A single word that couldn't be split, like "Madonna"
    Bare(String),
    Split { family: String, given: String },
}

impl NameParts {
    pub fn family(&self) -> Option<&str> {
        match self {
            NameParts::Split { family, .. } => Some(family.as_str()),
            _ => None,
        }
    }

    pub fn given(&self) -> Option<&str> {
        match self {
            NameParts::Split { given, .. } => Some(given.as_str()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            NameParts::Empty => 0,
            NameParts::Bare(_) => 1,
            NameParts::Split { .. } => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, NameParts::Empty)
    }

    /// Family name first, then given name(s).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let (first, second) = match self {
            NameParts::Empty => (None, None),
            NameParts::Bare(name) => (Some(name.as_str()), None),
            NameParts::Split { family, given } => (Some(family.as_str()), Some(given.as_str())),
        };
        first.into_iter().chain(second)
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            NameParts::Empty => Vec::new(),
            NameParts::Bare(name) => vec![name],
            NameParts::Split { family, given } => vec![family, given],
        }
    }
}

/// Capitalizes names and splits them into family and given parts.
///
/// An engine owns its case and split exception registries and the
/// normalization used to key them. Lookups take `&self`, so one engine
/// can be shared freely between threads once it's configured.
///
/// # Examples
/// ```
/// use namesplit::Engine;
///
/// let mut engine = Engine::new();
/// assert_eq!("McAdam, Shaun", engine.namecase("MCADAM, SHAUN"));
/// assert_eq!("van Haag, Bram", engine.namesplit("Bram van Haag"));
///
/// assert_eq!(1, engine.namesplit_exception("Assis de Queiroz, Vinicius"));
/// assert_eq!(
///     "Assis de Queiroz, Vinicius",
///     engine.namesplit("Vinicius Assis de Queiroz")
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    case_exceptions: CaseExceptions,
    split_exceptions: SplitExceptions,
    normalization: Normalization,
}

impl Engine {
    pub fn new() -> Engine {
        Engine::default()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// Switches the normalization applied to exception keys, returning
    /// the previous one.
    ///
    /// Exceptions already registered keep the keys they were stored
    /// under, so an entry may stop matching until it is registered again.
    pub fn normalize(&mut self, normalization: Normalization) -> Normalization {
        debug!(
            "normalization {:?} -> {:?}",
            self.normalization, normalization
        );
        mem::replace(&mut self.normalization, normalization)
    }

    /// Registers an irregular capitalization: a family name on its own
    /// ("MacDuff"), or a full name in "Family, Given" form. Returns the
    /// number of entries registered, which is 0 for an empty name or a
    /// full name missing one side.
    pub fn namecase_exception(&mut self, name: &str) -> usize {
        self.case_exceptions.register(name, &self.normalization)
    }

    /// Registers the correct split of a full name, given as
    /// "Family, Given". Returns 0 unless both sides are present.
    pub fn namesplit_exception(&mut self, name: &str) -> usize {
        self.split_exceptions.register(name, &self.normalization)
    }

    /// Reads case exceptions one per line. Blank lines and lines starting
    /// with `#` are skipped; any other line that doesn't register fails
    /// the load, leaving earlier lines registered.
    pub fn load_case_exceptions<R: BufRead>(&mut self, reader: R) -> Result<usize, LoadError> {
        self.load(reader, Engine::namecase_exception)
    }

    /// Like [`Engine::load_case_exceptions`], for split exceptions.
    pub fn load_split_exceptions<R: BufRead>(&mut self, reader: R) -> Result<usize, LoadError> {
        self.load(reader, Engine::namesplit_exception)
    }

    fn load<R: BufRead>(
        &mut self,
        reader: R,
        register: fn(&mut Engine, &str) -> usize,
    ) -> Result<usize, LoadError> {
        let mut count = 0;

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let text = line.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            match register(self, text) {
                0 => {
                    return Err(LoadError::Rejected {
                        line: i + 1,
                        text: text.to_string(),
                    })
                }
                n => count += n,
            }
        }

        debug!("loaded {} exceptions", count);
        Ok(count)
    }

    /// Canonical capitalization of a whole name, in either order.
    ///
    /// Idempotent, and insensitive to the capitalization of its input.
    ///
    /// # Examples
    /// ```
    /// use namesplit::Engine;
    ///
    /// let engine = Engine::new();
    /// assert_eq!("Bram van Haag", engine.namecase("BRAM VAN HAAG"));
    /// assert_eq!("O'Brian, Sean", engine.namecase("o'brian, sean"));
    /// assert_eq!("", engine.namecase("   "));
    /// ```
    pub fn namecase(&self, name: &str) -> String {
        self.namecase_as(name, Mode::Full)
    }

    pub fn namecase_as(&self, name: &str, mode: Mode) -> String {
        match mode {
            Mode::Full => self.case_full(name),
            Mode::Family => self.fnamecase(name, None),
            Mode::Given => self.gnamecase(name),
        }
    }

    /// Capitalization for given names only. Particles get no special
    /// treatment here.
    pub fn gnamecase(&self, given: &str) -> String {
        let given = nametrim(given);
        let mut result = String::with_capacity(given.len());

        for (i, word) in given.split(' ').enumerate() {
            if i > 0 {
                result.push(' ');
            }
            capitalize_given_word(word, &mut result);
        }

        result
    }

    /// Capitalization for a family name on its own.
    ///
    /// `given` never shows up in the output. It only selects a full-name
    /// case exception registered for this particular family and given
    /// name pair.
    ///
    /// # Examples
    /// ```
    /// use namesplit::Engine;
    ///
    /// let mut engine = Engine::new();
    /// assert_eq!("de la Fuente", engine.fnamecase("DE LA FUENTE", None));
    ///
    /// engine.namecase_exception("De La Fuente, Juan");
    /// assert_eq!("De La Fuente", engine.fnamecase("de la fuente", Some("Juan")));
    /// assert_eq!("de la Fuente", engine.fnamecase("de la fuente", Some("Ana")));
    /// ```
    pub fn fnamecase(&self, family: &str, given: Option<&str>) -> String {
        self.case_family(family, given, true, false)
    }

    /// Splits a natural-order name into "Family, Given".
    ///
    /// The family name starts at the first particle ("van", "de la",
    /// "al-") after the first word, or else is the last word. Input that
    /// already has a comma is only re-capitalized. A single word comes
    /// back trimmed and otherwise as it was.
    ///
    /// Unlike [`Engine::namecase`], mixed-case input is taken at its word:
    /// a particle already written the way one catalog entry spells it
    /// keeps that spelling ("Kiri Te Kanawa" gives "Te Kanawa, Kiri").
    pub fn namesplit(&self, name: &str) -> String {
        let trimmed = nametrim(name);
        if trimmed.is_empty() {
            return String::new();
        }
        let trust_case = is_mixed_case(&trimmed);
        if trimmed.contains(',') {
            return self.case_unambiguous(&trimmed, trust_case);
        }

        if let Some(full) = self.split_exceptions.lookup(&trimmed, &self.normalization) {
            trace!("split exception for {:?}", trimmed);
            return full.to_string();
        }

        let tokens = tokenize(&trimmed);
        if tokens.len() < 2 {
            return trimmed.to_string();
        }

        let index = split_index(&tokens, trust_case);
        let (given, family) = split_at(&trimmed, &tokens, index);
        self.case_unambiguous(&format!("{}, {}", family, given), trust_case)
    }

    /// Like [`Engine::namesplit`], as separate parts.
    ///
    /// # Examples
    /// ```
    /// use namesplit::{Engine, NameParts};
    ///
    /// let engine = Engine::new();
    /// let parts = engine.nameparts("Smith, John Peter");
    /// assert_eq!(vec!["Smith", "John Peter"], parts.iter().collect::<Vec<_>>());
    /// assert_eq!(NameParts::Bare("Madonna".to_string()), engine.nameparts("Madonna"));
    /// assert_eq!(NameParts::Empty, engine.nameparts(""));
    /// ```
    pub fn nameparts(&self, name: &str) -> NameParts {
        let split = self.namesplit(name);

        let (family, given) = match split.split_once(',') {
            Some((family, given)) => (family.trim(), given.trim()),
            None => (split.as_str(), ""),
        };

        match (family.is_empty(), given.is_empty()) {
            (true, true) => NameParts::Empty,
            (false, true) => NameParts::Bare(family.to_string()),
            (true, false) => NameParts::Bare(given.to_string()),
            (false, false) => NameParts::Split {
                family: family.to_string(),
                given: given.to_string(),
            },
        }
    }

    pub fn namejoin(&self, family: Option<&str>, given: Option<&str>) -> Option<String> {
        namejoin(family, given)
    }

    fn case_full(&self, name: &str) -> String {
        let trimmed = nametrim(name);
        if trimmed.is_empty() {
            String::new()
        } else if trimmed.contains(',') {
            self.case_unambiguous(&trimmed, false)
        } else {
            self.case_natural(&trimmed)
        }
    }

    /// `trimmed` is "Family, Given", with either side possibly empty.
    fn case_unambiguous(&self, trimmed: &str, trust_case: bool) -> String {
        if let Some(CaseException::Full(full)) = self
            .case_exceptions
            .lookup(ExceptionKey::FullName(trimmed), &self.normalization)
        {
            trace!("case exception for {:?}", trimmed);
            return full.to_string();
        }

        let (family, given) = trimmed.split_once(',').unwrap_or((trimmed, ""));
        let given = given.trim();

        let mut result = self.case_family(family, Some(given), true, trust_case);
        result.push(',');
        if !given.is_empty() {
            result.push(' ');
            result.push_str(&self.gnamecase(given));
        }
        result
    }

    /// `trimmed` is non-empty and has no comma.
    fn case_natural(&self, trimmed: &str) -> String {
        let tokens = tokenize(trimmed);
        if tokens.len() < 2 {
            return self.case_family(trimmed, None, true, false);
        }

        if !self.case_exceptions.is_empty() {
            for i in 1..tokens.len() {
                let (given, family) = split_at(trimmed, &tokens, i);
                let key = ExceptionKey::FamilyWithGiven(family, given);
                if let Some(CaseException::Full(full)) =
                    self.case_exceptions.lookup(key, &self.normalization)
                {
                    trace!("case exception for {:?}", trimmed);
                    return full.natural();
                }
            }
        }

        // Splitting without regard to case keeps the output independent
        // of the input's capitalization
        let (given, family) = split_at(trimmed, &tokens, split_index(&tokens, false));

        let mut result = self.gnamecase(given);
        result.push(' ');
        result.push_str(&self.case_family(family, Some(given), false, false));
        result
    }

    fn case_family(
        &self,
        family: &str,
        given: Option<&str>,
        leading: bool,
        trust_case: bool,
    ) -> String {
        let family = nametrim(family);
        if family.is_empty() {
            return String::new();
        }

        let given = given.map(nametrim).filter(|g| !g.is_empty());
        let mut keys = Vec::with_capacity(2);
        if let Some(ref given) = given {
            keys.push(ExceptionKey::FamilyWithGiven(&family, given));
        }
        keys.push(ExceptionKey::FamilyOnly(&family));

        match self.case_exceptions.resolve(&keys, &self.normalization) {
            Some(CaseException::Full(full)) => {
                trace!("case exception for family {:?}", family);
                return full.family.to_string();
            }
            Some(CaseException::Family(display)) => {
                trace!("case exception for family {:?}", family);
                return display.to_string();
            }
            None => {}
        }

        let tokens = tokenize(&family);
        self.case_family_tokens(&tokens, leading, trust_case, family.len())
    }

    fn case_family_tokens(
        &self,
        tokens: &[NameToken],
        leading: bool,
        trust_case: bool,
        capacity: usize,
    ) -> String {
        let mut result = String::with_capacity(capacity);
        let mut i = 0;

        // Nothing to anchor the particles to ("de la"), so each keeps its
        // catalog form
        let all_particles = tokens.len() > 1
            && tokens
                .iter()
                .all(|token| particle_display(&token.folded).is_some());

        while i < tokens.len() {
            if i > 0 {
                result.push(' ');
            }
            let token = &tokens[i];

            if let Some(CaseException::Family(display)) = self
                .case_exceptions
                .lookup(ExceptionKey::FamilyOnly(token.text), &self.normalization)
            {
                result.push_str(display);
                i += 1;
                continue;
            }

            if all_particles {
                if let Some(display) = particle_display(&token.folded) {
                    case_like(display, token.text, &mut result);
                    i += 1;
                    continue;
                }
            }

            if let Some(rule) = family_chain(tokens, i, trust_case) {
                for (j, (display, token)) in rule.words().iter().zip(&tokens[i..]).enumerate() {
                    if j > 0 {
                        result.push(' ');
                    }
                    case_like(display, token.text, &mut result);
                }
                i += rule.len();
                continue;
            }

            if conjunction_at(tokens, i, trust_case) {
                result.push_str(&lowercase(token.text));
            } else {
                capitalize_family_word(token.text, leading && i == 0, &mut result);
            }
            i += 1;
        }

        result
    }
}

/// With trustworthy case, a particle spelled the way one rule writes it
/// ("Te" rather than "te") picks that rule.
fn family_chain(
    tokens: &[NameToken],
    i: usize,
    trust_case: bool,
) -> Option<&'static ParticleRule> {
    let trusted = if trust_case {
        match_chain(tokens, i, true)
    } else {
        None
    };
    trusted.or_else(|| match_chain(tokens, i, false))
}

fn case_like(display: &str, text: &str, out: &mut String) {
    if display.starts_with(char::is_uppercase) {
        capitalize_into(text, out);
    } else {
        out.push_str(&lowercase(text));
    }
}

/// Given and family halves of `text`, with the family starting at
/// `tokens[index]`. `index` must be at least 1.
fn split_at<'a>(text: &'a str, tokens: &[NameToken], index: usize) -> (&'a str, &'a str) {
    (
        &text[..tokens[index - 1].end()],
        &text[tokens[index].start..],
    )
}

/// Configures an [`Engine`] up front.
///
/// Exceptions are registered when the engine is built, under the
/// builder's normalization regardless of the order of calls.
///
/// # Examples
/// ```
/// use namesplit::{Engine, Normalization};
///
/// let engine = Engine::builder()
///     .normalization(Normalization::Nfc)
///     .case_exception("DeVito")
///     .split_exception("Assis de Queiroz, Vinicius")
///     .build();
///
/// assert_eq!("DeVito, Danny", engine.namecase("devito, danny"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    normalization: Normalization,
    case_exceptions: Vec<String>,
    split_exceptions: Vec<String>,
}

impl EngineBuilder {
    pub fn normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn case_exception(mut self, name: &str) -> Self {
        self.case_exceptions.push(name.to_string());
        self
    }

    pub fn split_exception(mut self, name: &str) -> Self {
        self.split_exceptions.push(name.to_string());
        self
    }

    pub fn build(self) -> Engine {
        let mut engine = Engine {
            normalization: self.normalization,
            ..Engine::default()
        };

        for name in &self.case_exceptions {
            engine.namecase_exception(name);
        }
        for name in &self.split_exceptions {
            engine.namesplit_exception(name);
        }

        engine
    }
}
