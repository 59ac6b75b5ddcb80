//! Capitalization and family/given splitting for personal names.
//!
//! Names come in two orders: natural ("Bram van Haag") and unambiguous
//! ("van Haag, Bram"). An [`Engine`] puts either into canonical case and
//! infers where the family name starts in natural-order input, using a
//! catalog of name particles from many naming cultures ("van der", "de
//! la", "ibn", "Ó", "al-", "Mc") plus any exceptions you register.
//!
//! # Examples
//! ```
//! use namesplit::{nametrim, Engine};
//!
//! let engine = Engine::new();
//! assert_eq!("McAdam, Shaun", engine.namecase("MCADAM, SHAUN"));
//! assert_eq!("Bram van Haag", engine.namecase("bram VAN haag"));
//! assert_eq!("van Haag, Bram", engine.namesplit("Bram van Haag"));
//! assert_eq!("Smith, John", nametrim("   Smith   ,  John   "));
//! ```
//!
//! Splitting is a heuristic. A capitalized particle in mixed-case input
//! is read as a given name ("Van Morrison"), and some names split wrong
//! without help:
//!
//! ```
//! use namesplit::Engine;
//!
//! let mut engine = Engine::new();
//! assert_eq!(
//!     "Sudreim, Erling Jonsson Til",
//!     engine.namesplit("Erling Jonsson til Sudreim")
//! );
//!
//! engine.namesplit_exception("Jonsson til Sudreim, Erling");
//! assert_eq!(
//!     "Jonsson til Sudreim, Erling",
//!     engine.namesplit("Erling Jonsson til Sudreim")
//! );
//! ```
//!
//! Undefined input has no special representation here: map over an
//! `Option` at the call site.

mod case;
mod engine;
mod exception;
mod normalize;
mod particle;
mod punct;
mod split;
mod token;
mod trim;

#[cfg(feature = "serialization")]
mod serialization;

pub use engine::{Engine, EngineBuilder, LoadError, Mode, NameParts};
pub use normalize::Normalization;
pub use particle::{joined_prefixes, particle_rules, Culture, JoinedPrefix, Joiner, ParticleRule};
pub use trim::{namejoin, nametrim};
