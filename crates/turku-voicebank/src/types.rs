//! Voicebank type definitions.

use std::collections::HashMap;

use log::debug;

/// One oto record: a sample segment registered under an alias.
///
/// The five timing values are the classic UTAU oto fields, all in
/// milliseconds relative to the start of the source recording. Only
/// preutterance and overlap matter for phoneme timing; the rest describe how
/// the resampler cuts the segment and are carried for completeness.
#[derive(Clone, Debug, PartialEq)]
pub struct Oto {
    /// The string key the segment is addressed by (e.g. `- ka`, `a k`).
    pub alias: String,
    /// Source recording file name.
    pub wav: String,
    /// Left edge of the segment in the recording.
    pub offset: f64,
    /// Fixed (consonant) region length.
    pub consonant: f64,
    /// Right edge; negative values measure from the end of the recording.
    pub cutoff: f64,
    /// How far the sung sound precedes the note start.
    pub preutter: f64,
    /// Crossfade length into the previous segment. Negative values request
    /// an extended lead-in instead of a crossfade.
    pub overlap: f64,
}

/// A voice-color subbank: a group of samples recorded in one vocal timbre.
///
/// Subbanks address their samples by appending `suffix` to the plain alias
/// (`a ka` + `_R` = `a ka_R`), optionally limited to a set of tone ranges so
/// a bank can switch recordings by register.
#[derive(Clone, Debug, Default)]
pub struct Subbank {
    /// Color tag this subbank answers to. Empty string is the default color.
    pub color: String,
    /// Alias suffix appended when addressing this subbank's samples.
    pub suffix: String,
    /// Inclusive MIDI tone ranges the subbank covers. Empty means all tones.
    pub tone_ranges: Vec<(i32, i32)>,
}

impl Subbank {
    /// Whether this subbank covers the given tone.
    pub fn covers(&self, tone: i32) -> bool {
        self.tone_ranges.is_empty() || self.tone_ranges.iter().any(|&(lo, hi)| lo <= tone && tone <= hi)
    }
}

/// The result of an alias lookup: the sample actually chosen.
///
/// `alias` is the full alias that matched (suffix included), which is what a
/// phonemizer emits. `color` and `suffix` describe the subbank the match came
/// from, so callers can tell whether the requested color was honored.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedOto {
    /// The full alias that matched, suffix included.
    pub alias: String,
    /// Color tag of the owning subbank. Empty for the default color.
    pub color: String,
    /// The suffix that was appended to reach this match.
    pub suffix: String,
    /// Preutterance in milliseconds.
    pub preutter: f64,
    /// Overlap in milliseconds.
    pub overlap: f64,
}

/// An in-memory voicebank: oto records indexed by alias, plus subbanks.
#[derive(Clone, Debug, Default)]
pub struct Voicebank {
    /// Display name of the bank.
    pub name: String,
    /// All oto records, indexed by their full alias.
    otos: HashMap<String, Oto>,
    /// Voice-color subbanks, in declaration order.
    subbanks: Vec<Subbank>,
}

impl Voicebank {
    /// Create an empty voicebank.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            otos: HashMap::new(),
            subbanks: Vec::new(),
        }
    }

    /// Register an oto record. The first definition of an alias wins;
    /// duplicates are skipped, matching classic editor behavior.
    pub fn add_oto(&mut self, oto: Oto) {
        if self.otos.contains_key(&oto.alias) {
            debug!("duplicate oto alias '{}' skipped", oto.alias);
            return;
        }
        self.otos.insert(oto.alias.clone(), oto);
    }

    /// Register a subbank.
    pub fn add_subbank(&mut self, subbank: Subbank) {
        self.subbanks.push(subbank);
    }

    /// Look up an oto record by its full alias.
    pub fn oto(&self, alias: &str) -> Option<&Oto> {
        self.otos.get(alias)
    }

    /// Subbanks in declaration order.
    pub fn subbanks(&self) -> &[Subbank] {
        &self.subbanks
    }

    /// Number of registered oto records.
    pub fn num_otos(&self) -> usize {
        self.otos.len()
    }

    /// Get a human-readable info string.
    pub fn info(&self) -> String {
        format!(
            "Voicebank '{}': {} otos, {} subbanks",
            self.name,
            self.otos.len(),
            self.subbanks.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oto(alias: &str) -> Oto {
        Oto {
            alias: alias.to_string(),
            wav: "x.wav".to_string(),
            offset: 0.0,
            consonant: 0.0,
            cutoff: 0.0,
            preutter: 0.0,
            overlap: 0.0,
        }
    }

    #[test]
    fn test_first_oto_definition_wins() {
        let mut bank = Voicebank::new("test");
        let mut first = oto("- ka");
        first.preutter = 80.0;
        bank.add_oto(first);
        let mut second = oto("- ka");
        second.preutter = 999.0;
        bank.add_oto(second);

        assert_eq!(bank.num_otos(), 1);
        assert_eq!(bank.oto("- ka").unwrap().preutter, 80.0);
    }

    #[test]
    fn test_subbank_tone_coverage() {
        let all = Subbank::default();
        assert!(all.covers(0));
        assert!(all.covers(127));

        let low = Subbank {
            tone_ranges: vec![(24, 59), (72, 84)],
            ..Default::default()
        };
        assert!(low.covers(24));
        assert!(low.covers(59));
        assert!(!low.covers(60));
        assert!(low.covers(80));
    }
}
