//! The phonemization entry point.
//!
//! One call maps one note group to its timed sample aliases: classify the
//! lyric, resolve the best primary alias, then either close the word (last
//! note of a phrase starting on a consonant) or link into the next syllable
//! with a VC transition. The function is total: every path produces at
//! least one phoneme, with the bare lyric as the last resort.

use log::trace;

use turku_voicebank::OtoLookup;

use crate::candidates::{primary_candidates, trailing_vowel_quality};
use crate::context::{classify, wants_word_final_closing};
use crate::note::Note;
use crate::resolver::{resolve, ResolvePolicy};
use crate::tables;
use crate::timing::TickConversion;
use crate::transition::synthesize_vc;

/// One emitted phoneme: an alias and its tick offset from the note group's
/// start.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputPhoneme {
    /// The sample alias to sing.
    pub alias: String,
    /// Tick offset from the start of the note group.
    pub position: i32,
}

/// The Turkish CVVC phonemizer.
///
/// Holds the two host capabilities the algorithm needs: the sample library
/// query and the tick conversion. Both are borrowed, read-only, and passed
/// in explicitly; the phonemizer itself keeps no state between calls.
pub struct TurkishCvvc<'a> {
    singer: &'a dyn OtoLookup,
    timing: &'a dyn TickConversion,
}

impl<'a> TurkishCvvc<'a> {
    /// Bind a phonemizer to a sample library and a tick conversion.
    pub fn new(singer: &'a dyn OtoLookup, timing: &'a dyn TickConversion) -> Self {
        Self { singer, timing }
    }

    /// Phonemize one note group.
    ///
    /// `notes` is the group: the sung note first, extender notes after it.
    /// The neighbor parameters mirror the host's phonemizer interface;
    /// only the adjacent neighbors influence Turkish CVVC output, the rest
    /// are accepted for interface parity.
    ///
    /// Returns one phoneme, or two when a VC transition is inserted.
    pub fn process(
        &self,
        notes: &[Note],
        _prev: Option<&Note>,
        _next: Option<&Note>,
        prev_neighbour: Option<&Note>,
        next_neighbour: Option<&Note>,
        _prev_neighbours: &[Note],
    ) -> Vec<OutputPhoneme> {
        let Some(note) = notes.first() else {
            return Vec::new();
        };
        let lyric = note.effective_lyric();
        let attr0 = note.attributes_for(0);

        let context = classify(note, prev_neighbour);
        trace!("lyric '{}' classified as {:?}", lyric, context);

        let prev_lyric = prev_neighbour.map(Note::effective_lyric);
        let candidates = primary_candidates(context, lyric, prev_lyric);
        let primary = resolve(&candidates, ResolvePolicy::Lenient, &attr0, note.tone, self.singer)
            .map(|oto| oto.alias)
            .unwrap_or_else(|| lyric.to_string());

        // A phrase-final note opening on a consonant closes the word with
        // its own terminal form instead of linking onward.
        if wants_word_final_closing(&note.lyric, next_neighbour) {
            let alias = self
                .closing_alias(&note.lyric, note, prev_neighbour)
                .unwrap_or(primary);
            return vec![OutputPhoneme { alias, position: 0 }];
        }

        if let Some(next) = next_neighbour {
            if !next.has_phonetic_hint() {
                let total_duration: i32 = notes.iter().map(|n| n.duration).sum();
                if let Some(vc) =
                    synthesize_vc(lyric, note, next, total_duration, self.singer, self.timing)
                {
                    return vec![
                        OutputPhoneme {
                            alias: primary,
                            position: 0,
                        },
                        OutputPhoneme {
                            alias: vc.alias,
                            position: vc.position,
                        },
                    ];
                }
            }
        }

        vec![OutputPhoneme {
            alias: primary,
            position: 0,
        }]
    }

    /// The word-final closing alias: the syllable re-keyed on the previous
    /// note's ending sound, with the matched subbank suffix embedded after
    /// a closing dash. `None` when the bank offers nothing better than the
    /// already-resolved primary.
    fn closing_alias(
        &self,
        raw_lyric: &str,
        note: &Note,
        prev_neighbour: Option<&Note>,
    ) -> Option<String> {
        let prev = prev_neighbour?;
        let last = prev.lyric.chars().next_back()?;
        let attr0 = note.attributes_for(0);

        if tables::is_standalone_consonant(raw_lyric) {
            let lowered = last.to_lowercase().to_string();
            let consonant = tables::consonant_identity_of(&lowered)?;
            let candidates = vec![format!("{consonant} {raw_lyric}"), raw_lyric.to_string()];
            let oto = resolve(
                &candidates,
                ResolvePolicy::Lenient,
                &attr0,
                note.tone,
                self.singer,
            )?;
            Some(format!("{consonant}{raw_lyric} -{}", oto.suffix))
        } else {
            let vowel = trailing_vowel_quality(&prev.lyric)?;
            let candidates = vec![format!("{vowel} {raw_lyric}"), raw_lyric.to_string()];
            let oto = resolve(
                &candidates,
                ResolvePolicy::Lenient,
                &attr0,
                note.tone,
                self.singer,
            )?;
            Some(format!("{vowel} {raw_lyric}-{}", oto.suffix))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turku_voicebank::{Oto, Subbank, Voicebank};

    use crate::timing::Timebase;

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

    fn note(lyric: &str, duration: i32) -> Note {
        Note {
            lyric: lyric.to_string(),
            tone: 60,
            duration,
            ..Default::default()
        }
    }

    fn bank(aliases: &[&str]) -> Voicebank {
        let mut bank = Voicebank::new("test");
        for alias in aliases {
            bank.add_oto(oto(alias, 60.0, 10.0));
        }
        bank
    }

    /// 0.4 ticks per ms, so a 100 ms preutterance is 40 ticks.
    struct Scaled;
    impl TickConversion for Scaled {
        fn ms_to_ticks(&self, ms: f64) -> i32 {
            (ms * 0.4).round() as i32
        }
    }

    #[test]
    fn test_phrase_start_picks_dash_form() {
        let bank = bank(&["- ka", "ka"]);
        let timing = Timebase::default();
        let phonemizer = TurkishCvvc::new(&bank, &timing);

        let out = phonemizer.process(&[note("ka", 480)], None, None, None, None, &[]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].alias, "- ka");
        assert_eq!(out[0].position, 0);
    }

    #[test]
    fn test_glide_falls_back_to_bare_lyric() {
        // Bank lacks both "a a" and "* a"; the literal survives.
        let bank = bank(&["a"]);
        let timing = Timebase::default();
        let phonemizer = TurkishCvvc::new(&bank, &timing);

        let prev = note("ka", 480);
        let out = phonemizer.process(&[note("a", 480)], None, None, Some(&prev), None, &[]);
        assert_eq!(out, vec![OutputPhoneme { alias: "a".to_string(), position: 0 }]);
    }

    #[test]
    fn test_vc_transition_is_inserted_and_timed() {
        let mut bank = bank(&["ta", "a k"]);
        bank.add_oto(oto("ka", 100.0, 10.0));
        let phonemizer = TurkishCvvc::new(&bank, &Scaled);

        let next = note("ka", 480);
        let out = phonemizer.process(&[note("ta", 480)], None, None, None, Some(&next), &[]);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0], OutputPhoneme { alias: "ta".to_string(), position: 0 });
        assert_eq!(out[1], OutputPhoneme { alias: "a k".to_string(), position: 440 });
    }

    #[test]
    fn test_vc_position_never_crosses_half_duration() {
        let mut bank = bank(&["ta", "a k"]);
        // Preutterance far larger than the note.
        bank.add_oto(oto("ka", 5000.0, 0.0));
        let phonemizer = TurkishCvvc::new(&bank, &Scaled);

        let next = note("ka", 480);
        let out = phonemizer.process(&[note("ta", 480)], None, None, None, Some(&next), &[]);

        assert_eq!(out.len(), 2);
        assert!(out[1].position >= 240);
    }

    #[test]
    fn test_group_duration_sums_extender_notes() {
        let mut bank = bank(&["ta", "a k"]);
        bank.add_oto(oto("ka", 100.0, 10.0));
        let phonemizer = TurkishCvvc::new(&bank, &Scaled);

        let group = [note("ta", 480), note("+", 240)];
        let next = note("ka", 480);
        let out = phonemizer.process(&group, None, None, None, Some(&next), &[]);

        assert_eq!(out[1].position, 720 - 40);
    }

    #[test]
    fn test_next_standalone_vowel_suppresses_vc() {
        let bank = bank(&["ka", "a a", "a"]);
        let timing = Timebase::default();
        let phonemizer = TurkishCvvc::new(&bank, &timing);

        let next = note("a", 480);
        let out = phonemizer.process(&[note("ka", 480)], None, None, None, Some(&next), &[]);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_unresolvable_vc_is_omitted_silently() {
        // No "a k" or "a t" style links at all.
        let bank = bank(&["ta", "ka"]);
        let timing = Timebase::default();
        let phonemizer = TurkishCvvc::new(&bank, &timing);

        let next = note("ka", 480);
        let out = phonemizer.process(&[note("ta", 480)], None, None, None, Some(&next), &[]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].alias, "ta");
    }

    #[test]
    fn test_hinted_lyric_is_used_verbatim() {
        let bank = bank(&["kya"]);
        let timing = Timebase::default();
        let phonemizer = TurkishCvvc::new(&bank, &timing);

        let mut current = note("ka", 480);
        current.phonetic_hint = Some("kya".to_string());
        let mut next = note("ta", 480);
        next.phonetic_hint = Some("tya".to_string());

        let out = phonemizer.process(&[current], None, None, None, Some(&next), &[]);
        // The hint resolves as-is, and a hinted next neighbor gets no VC.
        assert_eq!(out, vec![OutputPhoneme { alias: "kya".to_string(), position: 0 }]);
    }

    #[test]
    fn test_word_final_closing_embeds_suffix() {
        let mut bank = Voicebank::new("closing");
        bank.add_subbank(Subbank {
            color: String::new(),
            suffix: "_R".to_string(),
            tone_ranges: vec![],
        });
        bank.add_oto(oto("a kat_R", 60.0, 10.0));
        let timing = Timebase::default();
        let phonemizer = TurkishCvvc::new(&bank, &timing);

        let prev = note("ka", 480);
        let out = phonemizer.process(&[note("kat", 480)], None, None, Some(&prev), None, &[]);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].alias, "a kat-_R");
    }

    #[test]
    fn test_word_final_standalone_consonant_closes_on_previous_consonant() {
        let bank = bank(&["t t"]);
        let timing = Timebase::default();
        let phonemizer = TurkishCvvc::new(&bank, &timing);

        let prev = note("at", 480);
        let out = phonemizer.process(&[note("t", 480)], None, None, Some(&prev), None, &[]);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].alias, "tt -");
    }

    #[test]
    fn test_word_final_without_previous_neighbour_keeps_primary() {
        let bank = bank(&["- kat"]);
        let timing = Timebase::default();
        let phonemizer = TurkishCvvc::new(&bank, &timing);

        let out = phonemizer.process(&[note("kat", 480)], None, None, None, None, &[]);
        assert_eq!(out, vec![OutputPhoneme { alias: "- kat".to_string(), position: 0 }]);
    }

    #[test]
    fn test_process_is_total_on_an_empty_bank() {
        let bank = Voicebank::new("empty");
        let timing = Timebase::default();
        let phonemizer = TurkishCvvc::new(&bank, &timing);

        let prev = note("ka", 480);
        let next = note("ta", 480);
        for (p, n) in [
            (None, None),
            (Some(&prev), None),
            (None, Some(&next)),
            (Some(&prev), Some(&next)),
        ] {
            let out = phonemizer.process(&[note("zat", 480)], None, None, p, n, &[]);
            assert!(!out.is_empty());
            assert!(out.iter().all(|ph| !ph.alias.is_empty()));
        }
    }

    #[test]
    fn test_empty_group_yields_nothing() {
        let bank = Voicebank::new("empty");
        let timing = Timebase::default();
        let phonemizer = TurkishCvvc::new(&bank, &timing);
        assert!(phonemizer.process(&[], None, None, None, None, &[]).is_empty());
    }
}
