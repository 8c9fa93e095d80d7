//! Candidate resolution against the sample library.

use log::{debug, trace};

use turku_voicebank::{OtoLookup, ResolvedOto};

use crate::note::PhonemeAttributes;

/// How strictly the requested voice color is enforced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolvePolicy {
    /// Prefer an exact color match, but accept any match for the winning
    /// candidate. Used for primary phonemes.
    Lenient,
    /// Require an exact color match; a candidate whose matches are all the
    /// wrong color is skipped. Used for VC transitions, which are better
    /// omitted than sung in the wrong timbre.
    Strict,
}

/// Try candidates in order and return the first acceptable match.
///
/// For each candidate, the alternate-suffixed form (from the note's per-slot
/// attributes) is tried before the plain form, and an alternate match
/// outranks a plain one. Resolution stops at the first candidate with any
/// match; the policy then decides among that candidate's matches:
///
/// - [`ResolvePolicy::Lenient`] picks the match with the requested color,
///   else the first match.
/// - [`ResolvePolicy::Strict`] picks the match with the requested color,
///   else moves on to the next candidate; `None` when the list runs out.
pub fn resolve(
    candidates: &[String],
    policy: ResolvePolicy,
    attr: &PhonemeAttributes,
    tone: i32,
    singer: &dyn OtoLookup,
) -> Option<ResolvedOto> {
    let shifted_tone = tone + attr.tone_shift;
    let color = attr.color();

    for candidate in candidates {
        let mut matches: Vec<ResolvedOto> = Vec::new();
        if let Some(alternate) = &attr.alternate {
            let aliased = format!("{candidate}{alternate}");
            if let Some(oto) = singer.get_mapped_oto(&aliased, shifted_tone, color) {
                matches.push(oto);
            }
        }
        if let Some(oto) = singer.get_mapped_oto(candidate, shifted_tone, color) {
            // Keep the plain form behind the alternate unless it is the
            // same sample.
            if matches.first().map(|m| &m.alias) != Some(&oto.alias) {
                matches.push(oto);
            }
        }

        if matches.is_empty() {
            trace!("candidate '{}' has no samples", candidate);
            continue;
        }

        let exact = matches.iter().position(|oto| oto.color == color);
        match policy {
            ResolvePolicy::Lenient => {
                let index = exact.unwrap_or(0);
                return Some(matches.swap_remove(index));
            }
            ResolvePolicy::Strict => match exact {
                Some(index) => return Some(matches.swap_remove(index)),
                None => {
                    trace!(
                        "candidate '{}' matched, but not in color '{}'",
                        candidate,
                        color
                    );
                    continue;
                }
            },
        }
    }

    debug!("no candidate resolved out of {:?}", candidates);
    None
}
