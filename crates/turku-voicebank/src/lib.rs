//! UTAU-style voicebank support for Turku.
//!
//! This crate models the sample library a voicebank ships as: a set of oto
//! records (one per recorded sample segment), organized into voice-color
//! subbanks that may append a tone-dependent alias suffix. It provides:
//!
//! - Type definitions for oto records, subbanks, and whole voicebanks
//! - A parser for oto.ini-style record text
//! - The alias lookup primitive used by the phonemizer
//!
//! # Architecture
//!
//! The crate is independent of any audio backend and performs no file I/O.
//! Oto text is handed in as strings; sample data never enters this layer.
//! The phonemizer consumes a voicebank exclusively through the [`OtoLookup`]
//! trait, which answers "give me the sample registered under this alias, at
//! this tone, in this voice color" with at most one [`ResolvedOto`].
//!
//! # Example
//!
//! ```ignore
//! use turku_voicebank::{assemble_voicebank, OtoLookup, SubbankSpec};
//!
//! let bank = assemble_voicebank("uti", &[
//!     (SubbankSpec::default_bank(), "ka.wav=- ka,10,50,-300,80,30\n"),
//! ])?;
//!
//! let oto = bank.get_mapped_oto("- ka", 60, "");
//! ```

pub mod loader;
pub mod lookup;
pub mod parser;
pub mod types;

pub use loader::{assemble_voicebank, SubbankSpec};
pub use lookup::{parse_tone_name, tone_name, OtoLookup};
pub use types::{Oto, ResolvedOto, Subbank, Voicebank};
