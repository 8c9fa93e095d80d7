use crate::parser::error::Error;
use crate::parser::Result;
use crate::types::Oto;

/// Parse oto record text into a list of [`Oto`]s
///
/// # Record format
///
/// Each non-empty line registers one sample segment:
///
/// ```text
/// file.wav=alias,offset,consonant,cutoff,preutterance,overlap
/// ```
///
/// - **file.wav** - the source recording the segment is cut from
/// - **alias** - the string key the segment is addressed by; when empty, the
///   file name without its extension is used
/// - the five timing fields are milliseconds; trailing fields may be omitted
///   and empty fields default to zero
///
/// Lines that are empty or start with `//` or `;` are skipped. Order of the
/// remaining lines is preserved in the returned list; duplicate-alias
/// handling is left to the caller (a [`Voicebank`](crate::types::Voicebank)
/// keeps the first definition).
pub fn parse_oto_str(content: &str) -> Result<Vec<Oto>> {
    let mut otos = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with("//") || line.starts_with(';') {
            continue;
        }

        let (wav, record) = line.split_once('=').ok_or(Error::Parse {
            line: line_no,
            message: "missing '=' between file name and record".to_string(),
        })?;
        let wav = wav.trim();
        if wav.is_empty() {
            return Err(Error::Parse {
                line: line_no,
                message: "missing sample file name".to_string(),
            });
        }

        let mut fields = record.split(',');

        let alias = fields.next().unwrap_or("").trim();
        let alias = if alias.is_empty() {
            wav.strip_suffix(".wav").unwrap_or(wav).to_string()
        } else {
            alias.to_string()
        };

        let offset = parse_ms_field(fields.next(), "offset", line_no)?;
        let consonant = parse_ms_field(fields.next(), "consonant", line_no)?;
        let cutoff = parse_ms_field(fields.next(), "cutoff", line_no)?;
        let preutter = parse_ms_field(fields.next(), "preutterance", line_no)?;
        let overlap = parse_ms_field(fields.next(), "overlap", line_no)?;

        otos.push(Oto {
            alias,
            wav: wav.to_string(),
            offset,
            consonant,
            cutoff,
            preutter,
            overlap,
        });
    }

    Ok(otos)
}

/// Parse one millisecond field; an absent or empty field is zero.
fn parse_ms_field(field: Option<&str>, name: &'static str, line: usize) -> Result<f64> {
    let value = field.unwrap_or("").trim();
    if value.is_empty() {
        return Ok(0.0);
    }
    value.parse::<f64>().map_err(|_| Error::InvalidField {
        line,
        field: name,
        value: value.to_string(),
    })
}
