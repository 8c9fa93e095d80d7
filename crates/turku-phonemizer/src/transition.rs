//! Vowel-to-consonant transition synthesis.
//!
//! When a consonant-initiated syllable follows, a short VC linking sample is
//! slotted in ahead of it, timed off the next sample's preutterance so the
//! consonant lands on the next note's start.

use log::{debug, trace};

use turku_voicebank::OtoLookup;

use crate::candidates::trailing_vowel_quality;
use crate::note::Note;
use crate::resolver::{resolve, ResolvePolicy};
use crate::tables;
use crate::timing::TickConversion;

/// Transition length in ticks when the next note's own sample cannot be
/// found to measure from.
const DEFAULT_VC_TICKS: i32 = 120;

/// A resolved, positioned VC phoneme.
#[derive(Clone, Debug, PartialEq)]
pub struct VcTransition {
    /// The alias of the linking sample.
    pub alias: String,
    /// Tick offset from the note group's start.
    pub position: i32,
}

/// Synthesize the VC transition out of `note` into `next`, if one is wanted
/// and the bank can sing it.
///
/// `current_lyric` is the current note's effective lyric before any alias
/// resolution; its last character supplies the vowel side of the link. The
/// vowel side may be empty (an unclassifiable ending still gets a
/// consonant-only link attempted). The consonant side comes from the next
/// lyric's first three, then two characters; failing both, there is nothing
/// to link to.
///
/// Returns `None` whenever the transition should be omitted; the caller
/// then emits the primary phoneme alone.
pub fn synthesize_vc(
    current_lyric: &str,
    note: &Note,
    next: &Note,
    total_duration: i32,
    singer: &dyn OtoLookup,
    timing: &dyn TickConversion,
) -> Option<VcTransition> {
    let next_lyric = next.effective_lyric();

    // A following standalone vowel glides; no link is inserted.
    if next_lyric.chars().count() == 1 && tables::is_standalone_vowel(next_lyric) {
        trace!("next lyric '{}' is a standalone vowel, no VC", next_lyric);
        return None;
    }

    let consonant = next_lyric
        .get(..3)
        .and_then(tables::consonant_identity_of)
        .or_else(|| next_lyric.get(..2).and_then(tables::consonant_identity_of));
    let Some(consonant) = consonant else {
        trace!("next lyric '{}' has no consonant onset, no VC", next_lyric);
        return None;
    };

    let vowel = trailing_vowel_quality(current_lyric).unwrap_or("");

    let mut vc_candidates = vec![format!("{vowel} {consonant}")];
    if let Some(substitute) = tables::substitute_for(consonant) {
        vc_candidates.push(format!("{vowel} {substitute}"));
    }

    let attr1 = note.attributes_for(1);
    let Some(vc_oto) = resolve(&vc_candidates, ResolvePolicy::Strict, &attr1, note.tone, singer)
    else {
        debug!("VC {:?} unresolvable, transition omitted", vc_candidates);
        return None;
    };

    let position = total_duration - vc_length(next, next_lyric, total_duration, singer, timing);
    Some(VcTransition {
        alias: vc_oto.alias,
        position,
    })
}

/// Length of the transition in ticks: the next sample's preutterance
/// (stretched by a negative overlap), scaled by the next note's
/// consonant-stretch ratio and clamped to half the group duration.
fn vc_length(
    next: &Note,
    next_lyric: &str,
    total_duration: i32,
    singer: &dyn OtoLookup,
    timing: &dyn TickConversion,
) -> i32 {
    let next_attr = next.attributes_for(0);
    let base_ticks = match singer.get_mapped_oto(
        next_lyric,
        next.tone + next_attr.tone_shift,
        next_attr.color(),
    ) {
        Some(oto) => {
            // A negative overlap asks for a longer lead-in than the
            // preutterance alone.
            let base_ms = if oto.overlap < 0.0 {
                oto.preutter - oto.overlap
            } else {
                oto.preutter
            };
            timing.ms_to_ticks(base_ms)
        }
        None => DEFAULT_VC_TICKS,
    };

    let stretch = next_attr.consonant_stretch_ratio.unwrap_or(1.0);
    let scaled = f64::from(base_ticks) * stretch;
    f64::min(f64::from(total_duration / 2), scaled).round() as i32
}
