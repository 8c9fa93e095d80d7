//! Voicebank assembly from oto record text.

use anyhow::{Context, Result};
use log::{debug, info};

use crate::parser::parse_oto_str;
use crate::types::{Subbank, Voicebank};

/// Description of one subbank to assemble: its color tag, alias suffix, and
/// tone coverage, paired with the oto text that registers its samples.
#[derive(Clone, Debug, Default)]
pub struct SubbankSpec {
    /// Color tag. Empty string is the default color.
    pub color: String,
    /// Alias suffix the subbank's records carry (e.g. `_R`).
    pub suffix: String,
    /// Inclusive MIDI tone ranges. Empty means all tones.
    pub tone_ranges: Vec<(i32, i32)>,
}

impl SubbankSpec {
    /// The default-color, no-suffix subbank covering all tones.
    pub fn default_bank() -> Self {
        Self::default()
    }
}

/// Assemble a voicebank from one oto text per subbank.
///
/// Each section contributes its subbank description and the oto records
/// registered under it. Records are expected to already carry the subbank's
/// alias suffix, the way a recorded set ships them. No file I/O happens here;
/// callers hand in the text however they obtained it.
///
/// # Example
///
/// ```ignore
/// let bank = assemble_voicebank("uti", &[
///     (SubbankSpec::default_bank(), plain_oto_text),
///     (SubbankSpec { color: "Power".into(), suffix: "_P".into(), ..Default::default() }, power_oto_text),
/// ])?;
/// ```
pub fn assemble_voicebank(name: &str, sections: &[(SubbankSpec, &str)]) -> Result<Voicebank> {
    let mut bank = Voicebank::new(name);

    info!("Assembling voicebank '{}' from {} sections", name, sections.len());

    for (spec, content) in sections {
        let otos = parse_oto_str(content).with_context(|| {
            format!(
                "failed to parse oto records for subbank '{}' of voicebank '{}'",
                if spec.color.is_empty() { "(default)" } else { &spec.color },
                name
            )
        })?;

        debug!(
            "subbank color='{}' suffix='{}': {} oto records",
            spec.color,
            spec.suffix,
            otos.len()
        );

        bank.add_subbank(Subbank {
            color: spec.color.clone(),
            suffix: spec.suffix.clone(),
            tone_ranges: spec.tone_ranges.clone(),
        });
        for oto in otos {
            bank.add_oto(oto);
        }
    }

    info!("{}", bank.info());
    Ok(bank)
}
