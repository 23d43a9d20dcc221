//! Built-in font faces and their metrics.
//!
//! The report uses the two standard Helvetica faces. Their advance widths are
//! embedded as AFM character-metric tables (keyed in WinAnsi code space, the
//! encoding the PDF backend writes) and parsed once per build by
//! [`FontLibrary::load`]. That parse is the build's only resource-acquisition
//! step: a malformed table aborts the build before any page exists.

use thiserror::Error;

const HELVETICA_AFM: &str = include_str!("../assets/metrics/Helvetica.afm");
const HELVETICA_BOLD_AFM: &str = include_str!("../assets/metrics/Helvetica-Bold.afm");

/// Measures rendered text width. Injected into the wrapper and table layout
/// so they can be exercised against a fixed-advance fake in tests.
pub trait FontMetrics {
    /// Width in points of `text` set at `size`.
    fn measure(&self, text: &str, size: f32) -> f32;
}

/// Which of the two built-in faces a piece of text uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Regular,
    Bold,
}

#[derive(Error, Debug)]
pub enum FontError {
    #[error("metric table for '{face}' is invalid: {message}")]
    Metrics { face: &'static str, message: String },
}

/// One parsed face: PostScript name plus per-code advance widths in
/// 1/1000 em units, indexed by WinAnsi code.
#[derive(Debug, Clone)]
pub struct BuiltinFace {
    postscript_name: String,
    widths: [u16; 256],
    default_width: u16,
}

impl BuiltinFace {
    fn parse_afm(face: &'static str, afm: &str) -> Result<Self, FontError> {
        let err = |message: String| FontError::Metrics { face, message };

        let mut postscript_name = None;
        let mut widths = [0u16; 256];
        let mut declared = None;
        let mut parsed = 0usize;
        let mut in_metrics = false;

        for line in afm.lines() {
            let line = line.trim();
            if let Some(name) = line.strip_prefix("FontName ") {
                postscript_name = Some(name.trim().to_string());
            } else if let Some(count) = line.strip_prefix("StartCharMetrics") {
                declared = Some(
                    count
                        .trim()
                        .parse::<usize>()
                        .map_err(|e| err(format!("bad metric count: {e}")))?,
                );
                in_metrics = true;
            } else if line == "EndCharMetrics" {
                in_metrics = false;
            } else if in_metrics && line.starts_with("C ") {
                let (code, width) = parse_char_metric(line).map_err(|m| err(m))?;
                if let Ok(code) = usize::try_from(code) {
                    if code < 256 {
                        widths[code] = width;
                    }
                }
                parsed += 1;
            }
        }

        let postscript_name = postscript_name.ok_or_else(|| err("missing FontName".into()))?;
        match declared {
            Some(n) if n == parsed => {}
            Some(n) => return Err(err(format!("declared {n} metrics, found {parsed}"))),
            None => return Err(err("missing StartCharMetrics".into())),
        }

        let default_width = widths[usize::from(b'?')];
        if default_width == 0 {
            return Err(err("no width for the fallback glyph".into()));
        }

        log::debug!("loaded {parsed} glyph widths for {postscript_name}");
        Ok(Self {
            postscript_name,
            widths,
            default_width,
        })
    }

    pub fn postscript_name(&self) -> &str {
        &self.postscript_name
    }

    /// Advance width of one character in 1/1000 em units. Characters outside
    /// the table measure as the fallback glyph they will render as.
    pub fn advance(&self, c: char) -> u16 {
        let code = encode_win_ansi_char(c).unwrap_or(b'?');
        let width = self.widths[usize::from(code)];
        if width == 0 { self.default_width } else { width }
    }
}

impl FontMetrics for BuiltinFace {
    fn measure(&self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| u32::from(self.advance(c))).sum();
        units as f32 * size / 1000.0
    }
}

/// Parses one `C <code> ; WX <width> ; N <name> ;` line.
fn parse_char_metric(line: &str) -> Result<(i32, u16), String> {
    let mut code = None;
    let mut width = None;
    for part in line.split(';') {
        let part = part.trim();
        if let Some(v) = part.strip_prefix("C ") {
            code = Some(v.trim().parse::<i32>().map_err(|e| format!("bad code: {e}"))?);
        } else if let Some(v) = part.strip_prefix("WX ") {
            width = Some(v.trim().parse::<u16>().map_err(|e| format!("bad width: {e}"))?);
        }
    }
    match (code, width) {
        (Some(c), Some(w)) => Ok((c, w)),
        _ => Err(format!("incomplete metric line: '{line}'")),
    }
}

/// The two loaded faces for one build.
pub struct FontLibrary {
    regular: BuiltinFace,
    bold: BuiltinFace,
}

impl FontLibrary {
    /// Parses the embedded metric tables. This must succeed before any
    /// drawing starts; the error is fatal to the whole build.
    pub fn load() -> Result<Self, FontError> {
        Ok(Self {
            regular: BuiltinFace::parse_afm("Helvetica", HELVETICA_AFM)?,
            bold: BuiltinFace::parse_afm("Helvetica-Bold", HELVETICA_BOLD_AFM)?,
        })
    }

    pub fn metrics(&self, role: FontRole) -> &BuiltinFace {
        match role {
            FontRole::Regular => &self.regular,
            FontRole::Bold => &self.bold,
        }
    }

    /// PostScript names for the PDF backend's font resources.
    pub fn registered_faces(&self) -> [(FontRole, &str); 2] {
        [
            (FontRole::Regular, self.regular.postscript_name()),
            (FontRole::Bold, self.bold.postscript_name()),
        ]
    }
}

/// Maps a character to its WinAnsi (CP1252) code, or `None` when the
/// encoding has no slot for it.
pub fn encode_win_ansi_char(c: char) -> Option<u8> {
    match c {
        '\u{20AC}' => Some(0x80),
        '\u{2026}' => Some(0x85),
        '\u{2018}' => Some(0x91),
        '\u{2019}' => Some(0x92),
        '\u{201C}' => Some(0x93),
        '\u{201D}' => Some(0x94),
        '\u{2022}' => Some(0x95),
        '\u{2013}' => Some(0x96),
        '\u{2014}' => Some(0x97),
        '\u{2122}' => Some(0x99),
        // 0x80..=0x9F in Unicode are control characters WinAnsi repurposes;
        // everything else in Latin-1 maps through.
        c if (c as u32) < 0x80 || ((c as u32) >= 0xA0 && (c as u32) <= 0xFF) => Some(c as u8),
        _ => None,
    }
}

/// Encodes a string as WinAnsi bytes, substituting `?` for characters the
/// encoding cannot represent.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| encode_win_ansi_char(c).unwrap_or(b'?'))
        .collect()
}
