//! Candidate alias generation.
//!
//! Each context maps to an ordered list of alias strings to try against the
//! bank. Lists always end with the bare lyric, so resolution can fall all
//! the way back to emitting the lyric untouched.

use crate::context::LyricContext;
use crate::tables;

/// Build the primary phoneme's candidate aliases, best first.
///
/// `prev_lyric` is the previous neighbor's effective lyric, consulted only
/// in the glide context: the glide form is keyed by the vowel quality the
/// previous lyric ends in. When that quality is unknown the glide falls back
/// to the interior list.
pub fn primary_candidates(
    context: LyricContext,
    lyric: &str,
    prev_lyric: Option<&str>,
) -> Vec<String> {
    match context {
        LyricContext::Hinted => vec![lyric.to_string()],
        LyricContext::PhraseStart => vec![format!("- {lyric}"), lyric.to_string()],
        LyricContext::Glide => {
            if let Some(vowel) = prev_lyric.and_then(trailing_vowel_quality) {
                vec![
                    format!("{vowel} {lyric}"),
                    format!("* {lyric}"),
                    lyric.to_string(),
                ]
            } else {
                interior_candidates(lyric)
            }
        }
        LyricContext::Interior => interior_candidates(lyric),
    }
}

fn interior_candidates(lyric: &str) -> Vec<String> {
    vec![format!("* {lyric}"), lyric.to_string()]
}

/// Vowel quality of a lyric's last character, if the vowel table knows it.
pub fn trailing_vowel_quality(lyric: &str) -> Option<&'static str> {
    let last = lyric.chars().next_back()?;
    tables::vowel_quality_of(last.encode_utf8(&mut [0u8; 4]))
}
