use crate::normalize::composed;
use crate::punct;
use compact_str::CompactString;
use smallvec::SmallVec;

/// Letter case of a word, as far as it tells us anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// First letter is lowercase ("van", "d'Iapico")
    Lower,
    /// First letter is uppercase and the word isn't all caps ("Haag", "McAdam", "O")
    Capitalized,
    /// Two or more letters, all uppercase ("VAN")
    Upper,
    /// Letters without case (Han, Hangul, Arabic script, ...)
    Uncased,
    NoLetters,
}

impl Shape {
    pub fn of(word: &str) -> Shape {
        let mut letters = word.chars().filter(|c| c.is_alphabetic());

        let first = match letters.next() {
            Some(c) => c,
            None => return Shape::NoLetters,
        };

        if first.is_lowercase() {
            Shape::Lower
        } else if !first.is_uppercase() {
            Shape::Uncased
        } else {
            let mut rest = letters.peekable();
            if rest.peek().is_some() && rest.all(|c| !c.is_lowercase()) {
                Shape::Upper
            } else {
                Shape::Capitalized
            }
        }
    }
}

/// One whitespace-delimited word of a trimmed name.
#[derive(Debug, Clone)]
pub struct NameToken<'a> {
    pub text: &'a str,
    pub start: usize,
    pub index: usize,
    /// Composed, lowercased and punctuation-canonical
    pub folded: CompactString,
    pub shape: Shape,
}

impl<'a> NameToken<'a> {
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// A lone letter, with or without a period ("Q", "q.")
    pub fn is_initial(&self) -> bool {
        let mut chars = self.text.trim_end_matches('.').chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
    }
}

pub type Tokens<'a> = SmallVec<[NameToken<'a>; 6]>;

pub fn fold(text: &str) -> CompactString {
    let lower: String = composed(text).chars().flat_map(char::to_lowercase).collect();
    CompactString::new(punct::canonicalize(&lower))
}

pub fn tokenize(text: &str) -> Tokens {
    let mut tokens = Tokens::new();
    let mut start = None;

    for (i, c) in text.char_indices().chain(std::iter::once((text.len(), ' '))) {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                let word = &text[s..i];
                tokens.push(NameToken {
                    text: word,
                    start: s,
                    index: tokens.len(),
                    folded: fold(word),
                    shape: Shape::of(word),
                });
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }

    tokens
}
