/// Packs a 24-bit color as `0x00BBGGRR`, the layout dispatch targets
/// receive.
#[must_use]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) | ((g as u32) << 8) | ((b as u32) << 16)
}

/// Sentinel emitted for "restore the default cursor color" (OSC 112).
pub const COLOR_INVALID: u32 = 0xFFFF_FFFF;

/// Parses an X-style color spec of the form `rgb:H[H]/H[H]/H[H]`.
///
/// Specs are 9 to 12 characters, hex digits are case-insensitive, and each
/// channel may independently use one or two digits. The result bytes are
/// the low 8 bits of each parsed component. Other color spaces are not
/// supported.
pub(crate) fn parse_color_spec(spec: &str) -> Option<u32> {
    if spec.len() < 9 || spec.len() > 12 {
        return None;
    }

    let channels = spec.strip_prefix("rgb:")?;
    let mut parts = channels.split('/');
    let r = parse_channel(parts.next()?)?;
    let g = parse_channel(parts.next()?)?;
    let b = parse_channel(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }

    Some(rgb(r, g, b))
}

fn parse_channel(text: &str) -> Option<u8> {
    if text.is_empty() || text.len() > 2 || !text.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return None;
    }
    u8::from_str_radix(text, 16).ok()
}
