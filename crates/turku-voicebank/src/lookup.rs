//! Alias lookup for voicebanks.

use log::trace;

use crate::types::{ResolvedOto, Voicebank};

/// The sample-library query primitive.
///
/// Given an alias, a tone, and a requested voice color, answer with at most
/// one matching sample. Implementations decide their own matching semantics;
/// a phonemizer treats this as an exact-or-near-exact index and never sees
/// more than one result per query.
pub trait OtoLookup {
    /// Find the sample registered under `alias` at `tone`, preferring the
    /// subbank tagged `color`. Returns `None` when nothing matches.
    fn get_mapped_oto(&self, alias: &str, tone: i32, color: &str) -> Option<ResolvedOto>;
}

impl OtoLookup for Voicebank {
    /// Resolve an alias against this bank.
    ///
    /// Match order:
    ///
    /// 1. Subbanks tagged with the requested color that cover `tone`, via
    ///    `alias + suffix`
    /// 2. Default-color subbanks covering `tone`, via `alias + suffix`
    /// 3. The bare alias with no suffix
    ///
    /// The first hit wins. A fallback hit reports the subbank it actually
    /// came from, so the caller can tell the requested color was not honored.
    fn get_mapped_oto(&self, alias: &str, tone: i32, color: &str) -> Option<ResolvedOto> {
        let from_subbanks = |wanted_color: &str| {
            self.subbanks()
                .iter()
                .filter(|sb| sb.color == wanted_color && sb.covers(tone))
                .find_map(|sb| {
                    let full = format!("{}{}", alias, sb.suffix);
                    self.oto(&full).map(|oto| ResolvedOto {
                        alias: full.clone(),
                        color: sb.color.clone(),
                        suffix: sb.suffix.clone(),
                        preutter: oto.preutter,
                        overlap: oto.overlap,
                    })
                })
        };

        if let Some(found) = from_subbanks(color) {
            return Some(found);
        }
        if !color.is_empty() {
            if let Some(found) = from_subbanks("") {
                trace!("alias '{}': color '{}' missing, using default subbank", alias, color);
                return Some(found);
            }
        }

        self.oto(alias).map(|oto| ResolvedOto {
            alias: alias.to_string(),
            color: String::new(),
            suffix: String::new(),
            preutter: oto.preutter,
            overlap: oto.overlap,
        })
    }
}

const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Convert a MIDI tone number to a note name.
///
/// Uses the C4 = 60 convention, so `60` maps to `"C4"`.
pub fn tone_name(tone: i32) -> String {
    let octave = tone.div_euclid(12) - 1;
    let name = NOTE_NAMES[tone.rem_euclid(12) as usize];
    format!("{}{}", name, octave)
}

/// Parse a note name like `C4` or `A#3` to a MIDI tone number.
pub fn parse_tone_name(name: &str) -> Option<i32> {
    let rest = name.trim();
    let split = rest
        .find(|c: char| c == '-' || c.is_ascii_digit())
        .filter(|&i| i > 0)?;
    let (pitch, octave) = rest.split_at(split);
    let semitone = NOTE_NAMES.iter().position(|n| n.eq_ignore_ascii_case(pitch))?;
    let octave: i32 = octave.parse().ok()?;
    Some((octave + 1) * 12 + semitone as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Oto, Subbank};

    fn oto(alias: &str, preutter: f64, overlap: f64) -> Oto {
        Oto {
            alias: alias.to_string(),
            wav: "x.wav".to_string(),
            offset: 0.0,
            consonant: 0.0,
            cutoff: 0.0,
            preutter,
            overlap,
        }
    }

    fn bank_with_colors() -> Voicebank {
        let mut bank = Voicebank::new("test");
        bank.add_subbank(Subbank::default());
        bank.add_subbank(Subbank {
            color: "Power".to_string(),
            suffix: "_P".to_string(),
            tone_ranges: vec![],
        });
        bank.add_oto(oto("a ka", 80.0, 30.0));
        bank.add_oto(oto("a ka_P", 95.0, 20.0));
        bank
    }

    #[test]
    fn test_requested_color_is_preferred() {
        let bank = bank_with_colors();
        let found = bank.get_mapped_oto("a ka", 60, "Power").unwrap();
        assert_eq!(found.alias, "a ka_P");
        assert_eq!(found.color, "Power");
        assert_eq!(found.suffix, "_P");
        assert_eq!(found.preutter, 95.0);
    }

    #[test]
    fn test_missing_color_falls_back_to_default() {
        let bank = bank_with_colors();
        let found = bank.get_mapped_oto("a ka", 60, "Whisper").unwrap();
        assert_eq!(found.alias, "a ka");
        assert_eq!(found.color, "");
    }

    #[test]
    fn test_bare_alias_fallback_without_subbanks() {
        let mut bank = Voicebank::new("flat");
        bank.add_oto(oto("- ka", 70.0, 10.0));
        let found = bank.get_mapped_oto("- ka", 60, "").unwrap();
        assert_eq!(found.alias, "- ka");
        assert_eq!(found.suffix, "");
    }

    #[test]
    fn test_tone_range_limits_subbank() {
        let mut bank = Voicebank::new("split");
        bank.add_subbank(Subbank {
            color: String::new(),
            suffix: "_H".to_string(),
            tone_ranges: vec![(72, 96)],
        });
        bank.add_oto(oto("a ka_H", 60.0, 5.0));
        bank.add_oto(oto("a ka", 80.0, 30.0));

        assert_eq!(bank.get_mapped_oto("a ka", 84, "").unwrap().alias, "a ka_H");
        assert_eq!(bank.get_mapped_oto("a ka", 60, "").unwrap().alias, "a ka");
    }

    #[test]
    fn test_unknown_alias_is_none() {
        let bank = bank_with_colors();
        assert!(bank.get_mapped_oto("e ky", 60, "").is_none());
    }

    #[test]
    fn test_tone_name_roundtrip() {
        assert_eq!(tone_name(60), "C4");
        assert_eq!(tone_name(69), "A4");
        assert_eq!(tone_name(58), "A#3");
        assert_eq!(parse_tone_name("C4"), Some(60));
        assert_eq!(parse_tone_name("a#3"), Some(58));
        assert_eq!(parse_tone_name("H9"), None);
    }
}
