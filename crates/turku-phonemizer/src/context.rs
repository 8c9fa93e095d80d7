//! Phonetic context classification.

use crate::note::Note;
use crate::tables;

/// The phonetic context a note's lyric falls into. Determines which
/// candidate aliases are tried, and in what order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LyricContext {
    /// An explicit phonetic override is present; the lyric is taken as-is.
    Hinted,
    /// No previous neighbor: the note opens a phrase.
    PhraseStart,
    /// A standalone vowel or sonorant following another note, sung as a
    /// glide out of the previous vowel.
    Glide,
    /// A consonant-initiated syllable following another note.
    Interior,
}

/// Classify a note against its previous neighbor.
pub fn classify(note: &Note, prev_neighbour: Option<&Note>) -> LyricContext {
    if note.has_phonetic_hint() {
        return LyricContext::Hinted;
    }
    if prev_neighbour.is_none() {
        return LyricContext::PhraseStart;
    }
    let lyric = note.effective_lyric();
    if tables::is_standalone_vowel(lyric) || tables::is_standalone_consonant(lyric) {
        return LyricContext::Glide;
    }
    LyricContext::Interior
}

/// Whether the word-final closing branch applies: the note ends the phrase
/// and its lyric opens on a recognizable consonant identity.
pub fn wants_word_final_closing(lyric: &str, next_neighbour: Option<&Note>) -> bool {
    next_neighbour.is_none() && leading_consonant_identity(lyric).is_some()
}

/// The consonant identity the lyric's first 1-3 characters spell, longest
/// match first (`r'a` → `r'`, `kat` → `k`).
pub fn leading_consonant_identity(lyric: &str) -> Option<&'static str> {
    [3, 2, 1].iter().find_map(|&len| {
        lyric
            .get(..len)
            .filter(|prefix| tables::is_consonant_identity(prefix))
            .and_then(tables::consonant_identity_of)
    })
}
