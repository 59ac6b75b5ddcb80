use crate::punct::{is_apostrophe, is_hyphen};
use crate::token::{NameToken, Shape};

/// Where a particle comes from. Informational only; matching treats
/// every culture the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Culture {
    African,
    Arabic,
    Dutch,
    Germanic,
    Hebrew,
    Irish,
    Polynesian,
    Romance,
    Scandinavian,
    Scottish,
    Welsh,
}

/// A run of connector words that may open (or sit inside) a family name,
/// like "van der" or "Bean Uí".
#[derive(Debug)]
pub struct ParticleRule {
    words: &'static [&'static str],
    folded: &'static [&'static str],
    culture: Culture,
    requires_capitalized: bool,
}

impl ParticleRule {
    /// The words in their canonical display form.
    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }

    pub fn culture(&self) -> Culture {
        self.culture
    }

    /// Whether the rule only applies before a capitalized word (rather than
    /// also before another particle).
    pub fn requires_capitalized(&self) -> bool {
        self.requires_capitalized
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Joiner {
    /// Written directly against the name, as in "McAdam"
    Bare,
    Apostrophe,
    Hyphen,
}

/// A particle fused to the word it precedes, like "O'" or "al-".
#[derive(Debug)]
pub struct JoinedPrefix {
    pub letters: &'static str,
    pub folded: &'static str,
    pub joiner: Joiner,
    pub culture: Culture,
    pub capitalize_leading: bool,
}

static PARTICLE_RULES: &[ParticleRule] = include!(concat!(env!("OUT_DIR"), "/particle_rules.rs"));

static PARTICLE_HEADS: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/particle_heads.rs"));

static JOINED_PREFIXES: &[JoinedPrefix] =
    include!(concat!(env!("OUT_DIR"), "/joined_prefixes.rs"));

static BARE_PREFIX_EXCEPTIONS: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/bare_prefix_exceptions.rs"));

static CONJUNCTIONS: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/conjunctions.rs"));

/// The compiled particle catalog, longest sequences first.
pub fn particle_rules() -> &'static [ParticleRule] {
    PARTICLE_RULES
}

/// Particles written fused to the following word, longest first.
pub fn joined_prefixes() -> &'static [JoinedPrefix] {
    JOINED_PREFIXES
}

#[derive(Debug)]
pub struct PrefixMatch<'a> {
    pub prefix: &'static JoinedPrefix,
    pub letters: &'a str,
    pub joiner: &'a str,
    pub rest: &'a str,
}

fn starts_with_letter(text: &str) -> bool {
    text.chars().next().filter(|c| c.is_alphabetic()).is_some()
}

fn starts_with_uppercase(text: &str) -> bool {
    text.chars()
        .find(|c| c.is_alphabetic())
        .filter(|c| c.is_uppercase())
        .is_some()
}

/// Finds a joined particle at the start of `word`, longest first.
pub fn match_joined_prefix(word: &str) -> Option<PrefixMatch> {
    for prefix in JOINED_PREFIXES {
        let n = prefix.letters.chars().count();
        let split = match word.char_indices().nth(n) {
            Some((i, _)) => i,
            None => continue,
        };

        let letters = &word[..split];
        if !letters
            .chars()
            .flat_map(char::to_lowercase)
            .eq(prefix.folded.chars())
        {
            continue;
        }

        let after = &word[split..];
        let (joiner, rest) = match prefix.joiner {
            Joiner::Bare => {
                let segment_end = after
                    .char_indices()
                    .find(|(_, c)| is_hyphen(*c))
                    .map_or(word.len(), |(i, _)| split + i);
                let segment: String = word[..segment_end].to_lowercase();
                if after.chars().take_while(|c| !is_hyphen(*c)).count() < 2
                    || BARE_PREFIX_EXCEPTIONS.contains(segment.as_str())
                {
                    continue;
                }
                ("", after)
            }
            Joiner::Apostrophe | Joiner::Hyphen => {
                let c = match after.chars().next() {
                    Some(c) => c,
                    None => continue,
                };
                let joins = match prefix.joiner {
                    Joiner::Apostrophe => is_apostrophe(c),
                    _ => is_hyphen(c),
                };
                if !joins {
                    continue;
                }
                after.split_at(c.len_utf8())
            }
        };

        if !starts_with_letter(rest) {
            continue;
        }

        return Some(PrefixMatch {
            prefix,
            letters,
            joiner,
            rest,
        });
    }

    None
}

fn word_matches(token: &NameToken, display: &str, folded: &str, trust_case: bool) -> bool {
    if token.folded.as_str() != folded {
        return false;
    }
    if !trust_case {
        return true;
    }

    // A capitalized word only counts as a particle when the particle
    // itself is written capitalized ("Ó", "Mac"), never for "Van" or "De"
    match token.shape {
        Shape::Lower | Shape::Upper => true,
        Shape::Capitalized => starts_with_uppercase(display),
        Shape::Uncased | Shape::NoLetters => false,
    }
}

/// Whether `token` opens a family name through a joined particle, as
/// "al-Qader" or "O'Brian" do.
///
/// With trustworthy capitalization the particle must be written in its
/// canonical case and the word after it capitalized; without it, Mc and
/// Mac are too ambiguous to count.
pub fn starts_with_joined_particle(token: &NameToken, trust_case: bool) -> bool {
    let m = match match_joined_prefix(token.text) {
        Some(m) => m,
        None => return false,
    };

    if !trust_case {
        return m.prefix.joiner != Joiner::Bare;
    }

    let letters_ok = if starts_with_uppercase(m.prefix.letters) {
        m.letters == m.prefix.letters || !m.letters.chars().any(char::is_lowercase)
    } else {
        !m.letters.chars().any(char::is_uppercase)
    };

    letters_ok && starts_with_uppercase(m.rest)
}

fn is_capitalized_follower(token: &NameToken, trust_case: bool) -> bool {
    if !trust_case {
        return token.shape != Shape::NoLetters;
    }

    match token.shape {
        Shape::Capitalized | Shape::Upper | Shape::Uncased => true,
        Shape::Lower => starts_with_joined_particle(token, true),
        Shape::NoLetters => false,
    }
}

/// Finds the longest particle rule that starts at `tokens[start]` and is
/// followed by something that can carry the family name.
pub fn match_chain(
    tokens: &[NameToken],
    start: usize,
    trust_case: bool,
) -> Option<&'static ParticleRule> {
    let head = tokens.get(start)?;
    if !PARTICLE_HEADS.contains(head.folded.as_str()) {
        return None;
    }

    for rule in PARTICLE_RULES {
        let after = start + rule.len();
        if after >= tokens.len() {
            continue;
        }

        let matched = rule
            .words
            .iter()
            .zip(rule.folded)
            .zip(&tokens[start..after])
            .all(|((display, folded), token)| word_matches(token, display, folded, trust_case));
        if !matched {
            continue;
        }

        let next = &tokens[after];
        if is_capitalized_follower(next, trust_case) {
            return Some(rule);
        }
        if !rule.requires_capitalized
            && (match_chain(tokens, after, trust_case).is_some()
                || starts_with_joined_particle(next, trust_case))
        {
            return Some(rule);
        }
    }

    None
}

/// "y", "e" or "i" joining two family names, as in "Romero y Galdámez"
pub fn is_conjunction(token: &NameToken, trust_case: bool) -> bool {
    CONJUNCTIONS.contains(token.folded.as_str()) && (!trust_case || token.shape == Shape::Lower)
}

/// Whether `tokens[i]` is a conjunction between two family words.
///
/// Neither neighbour may be an initial ("John Q E Public"). Without a
/// case signal a lone "e" or "i" reads as a middle initial, except for
/// "e" before an i sound ("Dato e Iradier").
pub fn conjunction_at(tokens: &[NameToken], i: usize, trust_case: bool) -> bool {
    if i == 0 || i + 1 >= tokens.len() || !is_conjunction(&tokens[i], trust_case) {
        return false;
    }

    let (prev, next) = (&tokens[i - 1], &tokens[i + 1]);
    if prev.is_initial() || next.is_initial() {
        return false;
    }
    if trust_case {
        return true;
    }

    match tokens[i].folded.as_str() {
        "y" => true,
        "e" => {
            let next = next.folded.as_str();
            let sound = next.strip_prefix('h').unwrap_or(next);
            sound.starts_with(['i', 'í'])
        }
        _ => false,
    }
}

/// Canonical form of a word that appears in some particle rule, from the
/// first rule listing it.
pub fn particle_display(folded: &str) -> Option<&'static str> {
    PARTICLE_RULES.iter().find_map(|rule| {
        rule.folded
            .iter()
            .position(|f| *f == folded)
            .map(|j| rule.words[j])
    })
}
