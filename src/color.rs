//! Color token parsing for category bars

use crate::error::PlotError;

/// Normalized RGB triple, each channel in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub [f64; 3]);

impl Rgb {
    /// Hex form for the chart backend (e.g. "#1F77B4")
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.0;
        format!(
            "#{:02X}{:02X}{:02X}",
            channel_byte(r),
            channel_byte(g),
            channel_byte(b)
        )
    }
}

fn channel_byte(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// CSS named colors accepted as category color tokens
const NAMED_COLORS: [(&str, [u8; 3]); 24] = [
    ("black", [0, 0, 0]),
    ("silver", [192, 192, 192]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("white", [255, 255, 255]),
    ("maroon", [128, 0, 0]),
    ("red", [255, 0, 0]),
    ("purple", [128, 0, 128]),
    ("fuchsia", [255, 0, 255]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("olive", [128, 128, 0]),
    ("yellow", [255, 255, 0]),
    ("navy", [0, 0, 128]),
    ("blue", [0, 0, 255]),
    ("teal", [0, 128, 128]),
    ("aqua", [0, 255, 255]),
    ("orange", [255, 165, 0]),
    ("brown", [165, 42, 42]),
    ("pink", [255, 192, 203]),
    ("gold", [255, 215, 0]),
    ("indigo", [75, 0, 130]),
    ("violet", [238, 130, 238]),
    ("coral", [255, 127, 80]),
];

/// Parse a color token into a normalized RGB triple.
///
/// Accepts `#rgb` and `#rrggbb` hex forms, the `rgb(r,g,b)` functional form with
/// 0-255 components, and CSS color names.
pub fn parse_color(token: &str) -> Result<Rgb, PlotError> {
    let token = token.trim();

    if let Some(hex) = token.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| PlotError::ColorParse {
            token: token.to_string(),
        });
    }

    if let Some(body) = token
        .strip_prefix("rgb(")
        .and_then(|s| s.strip_suffix(')'))
    {
        return parse_rgb_body(body).ok_or_else(|| PlotError::ColorParse {
            token: token.to_string(),
        });
    }

    let lower = token.to_ascii_lowercase();
    for (name, [r, g, b]) in NAMED_COLORS {
        if name == lower {
            return Ok(Rgb([
                f64::from(r) / 255.0,
                f64::from(g) / 255.0,
                f64::from(b) / 255.0,
            ]));
        }
    }

    Err(PlotError::ColorParse {
        token: token.to_string(),
    })
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    let bytes = match hex.len() {
        // "#abc" expands to "#aabbcc"
        3 => {
            let mut out = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                out[i] = v * 16 + v;
            }
            out
        }
        6 => {
            let mut out = [0u8; 3];
            for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
                let s = std::str::from_utf8(chunk).ok()?;
                out[i] = u8::from_str_radix(s, 16).ok()?;
            }
            out
        }
        _ => return None,
    };
    Some(Rgb([
        f64::from(bytes[0]) / 255.0,
        f64::from(bytes[1]) / 255.0,
        f64::from(bytes[2]) / 255.0,
    ]))
}

fn parse_rgb_body(body: &str) -> Option<Rgb> {
    let mut channels = [0.0f64; 3];
    let mut parts = body.split(',');
    for channel in &mut channels {
        let part = parts.next()?.trim();
        let v: f64 = part.parse().ok()?;
        if !(0.0..=255.0).contains(&v) {
            return None;
        }
        *channel = v / 255.0;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(Rgb(channels))
}
