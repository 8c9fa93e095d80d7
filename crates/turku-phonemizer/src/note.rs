//! The slice of the host note model the phonemizer reads.

/// Per-phoneme-slot overrides attached to a note by the host.
///
/// Slot 0 carries the primary phoneme's attributes, slot 1 the VC
/// transition's. Notes usually carry none; [`Note::attributes_for`] hands
/// out defaults in that case.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhonemeAttributes {
    /// Phoneme slot this set of attributes applies to.
    pub index: i32,
    /// Alternate-form suffix appended to an alias before the plain form is
    /// tried (`2` turns `- ka` into `- ka2`).
    pub alternate: Option<String>,
    /// Semitones added to the note's tone for sample selection.
    pub tone_shift: i32,
    /// Requested voice color.
    pub voice_color: Option<String>,
    /// Stretch applied to the consonant transition length. 1.0 when absent.
    pub consonant_stretch_ratio: Option<f64>,
}

impl PhonemeAttributes {
    /// The requested voice color, with absence normalized to the default
    /// (empty) color tag.
    pub fn color(&self) -> &str {
        self.voice_color.as_deref().unwrap_or("")
    }
}

/// One note of the host timeline, reduced to what phonemization needs.
#[derive(Clone, Debug, Default)]
pub struct Note {
    /// The lyric as typed.
    pub lyric: String,
    /// Explicit phonetic override; takes precedence over the lyric.
    pub phonetic_hint: Option<String>,
    /// MIDI tone number.
    pub tone: i32,
    /// Duration in ticks.
    pub duration: i32,
    /// Per-slot attribute overrides, sparse.
    pub attributes: Vec<PhonemeAttributes>,
}

impl Note {
    /// Whether the note carries a usable phonetic hint. An empty hint
    /// counts as absent.
    pub fn has_phonetic_hint(&self) -> bool {
        self.phonetic_hint.as_deref().is_some_and(|hint| !hint.is_empty())
    }

    /// The lyric to phonemize: the phonetic hint when present, else the
    /// lyric as typed.
    pub fn effective_lyric(&self) -> &str {
        match self.phonetic_hint.as_deref() {
            Some(hint) if !hint.is_empty() => hint,
            _ => &self.lyric,
        }
    }

    /// Attributes for a phoneme slot, defaulted when the note carries none.
    pub fn attributes_for(&self, index: i32) -> PhonemeAttributes {
        self.attributes
            .iter()
            .find(|attr| attr.index == index)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_lyric_prefers_hint() {
        let mut note = Note {
            lyric: "ka".to_string(),
            ..Default::default()
        };
        assert_eq!(note.effective_lyric(), "ka");

        note.phonetic_hint = Some("kya".to_string());
        assert_eq!(note.effective_lyric(), "kya");
    }

    #[test]
    fn test_attributes_for_missing_slot_is_default() {
        let note = Note {
            lyric: "ka".to_string(),
            attributes: vec![PhonemeAttributes {
                index: 1,
                consonant_stretch_ratio: Some(1.5),
                ..Default::default()
            }],
            ..Default::default()
        };

        assert_eq!(note.attributes_for(0), PhonemeAttributes::default());
        assert_eq!(note.attributes_for(1).consonant_stretch_ratio, Some(1.5));
        assert_eq!(note.attributes_for(0).color(), "");
    }
}
