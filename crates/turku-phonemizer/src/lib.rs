//! Turkish CVVC phonemizer for Turku.
//!
//! Converts a sung note's phonetic-Turkish lyric, in the context of its
//! neighbor notes, into the timed sample aliases a voicebank can sing:
//!
//! - **Classification tables** - the fixed Turkish symbol inventory, mapped
//!   to vowel qualities and consonant identities
//! - **Context classification** - phrase start, vowel glide, syllable
//!   interior, explicit phonetic hint
//! - **Candidate generation** - ordered alias forms per context, ending in
//!   the bare lyric so output is never empty
//! - **Alias resolution** - first-match search over the candidates with
//!   lenient or strict voice-color policies
//! - **VC transitions** - a linking vowel-to-consonant sample slotted in
//!   before a consonant-initiated next syllable, timed off the next
//!   sample's preutterance
//!
//! # Architecture
//!
//! The phonemizer is a pure function over its inputs. The two host
//! capabilities it needs, the sample library query ([`OtoLookup`] from
//! `turku-voicebank`) and tick conversion ([`TickConversion`]), are handed
//! in by reference; the only process-wide state is the immutable
//! classification tables, built once on first use and safe to read from any
//! thread.
//!
//! # Example
//!
//! ```ignore
//! use turku_phonemizer::{Note, Timebase, TurkishCvvc};
//!
//! let phonemizer = TurkishCvvc::new(&bank, &Timebase::default());
//! let phonemes = phonemizer.process(&group, None, None, prev, next, &[]);
//! for p in phonemes {
//!     println!("{} @ {}", p.alias, p.position);
//! }
//! ```

pub mod candidates;
pub mod context;
pub mod note;
pub mod process;
pub mod resolver;
pub mod tables;
pub mod timing;
pub mod transition;

pub use context::LyricContext;
pub use note::{Note, PhonemeAttributes};
pub use process::{OutputPhoneme, TurkishCvvc};
pub use resolver::ResolvePolicy;
pub use timing::{TickConversion, Timebase};
pub use transition::VcTransition;

// Re-export the voicebank boundary types for convenience
pub use turku_voicebank::{OtoLookup, ResolvedOto};
