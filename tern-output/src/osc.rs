use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use log::debug;
use thiserror::Error;

use crate::color::{parse_color_spec, COLOR_INVALID};
use crate::engine::OutputEngine;
use crate::telemetry::SequenceCode;

// Recognized OSC parameter codes.
const SET_ICON_AND_WINDOW_TITLE: u16 = 0;
const SET_WINDOW_ICON: u16 = 1;
const SET_WINDOW_TITLE: u16 = 2;
const SET_COLOR_TABLE_ENTRY: u16 = 4;
const HYPERLINK: u16 = 8;
const SET_FOREGROUND_COLOR: u16 = 10;
const SET_BACKGROUND_COLOR: u16 = 11;
const SET_CURSOR_COLOR: u16 = 12;
const SET_CLIPBOARD: u16 = 52;
const RESET_CURSOR_COLOR: u16 = 112;

const HYPERLINK_ID_PARAMETER: &str = "id=";

/// Failure decoding an OSC 52 clipboard payload.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard payload is missing the `Pc;Pd` separator")]
    MissingSeparator,
    #[error("invalid base64 in clipboard payload: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("clipboard payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub(crate) enum ClipboardRequest {
    /// `Pd` was `?`; the application asked for the clipboard contents.
    Query,
    Set(String),
}

/// Parses an OSC 52 payload of the form `Pc;Pd`. The selection parameter
/// `Pc` is currently ignored; `Pd` is either `?` or standard base64.
/// Embedded CR/LF inside the base64 run is tolerated.
pub(crate) fn parse_clipboard(
    payload: &str,
) -> Result<ClipboardRequest, ClipboardError> {
    let (_, data) = payload
        .split_once(';')
        .ok_or(ClipboardError::MissingSeparator)?;

    if data == "?" {
        return Ok(ClipboardRequest::Query);
    }

    let filtered: String =
        data.chars().filter(|&c| c != '\r' && c != '\n').collect();
    let bytes = BASE64.decode(filtered.as_bytes())?;

    Ok(ClipboardRequest::Set(String::from_utf8(bytes)?))
}

/// Parses an OSC 4 payload `<index>;rgb:<r>/<g>/<b>` into a color table
/// index and a packed `0x00BBGGRR` color. The index is one to three decimal
/// digits and at most 255; the whole payload is 11 to 16 characters.
pub(crate) fn parse_color_table_entry(payload: &str) -> Option<(usize, u32)> {
    if payload.len() < 11 || payload.len() > 16 {
        return None;
    }

    let (index_text, spec) = payload.split_once(';')?;
    if index_text.is_empty()
        || index_text.len() > 3
        || !index_text.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let table_index: usize = index_text.parse().ok()?;
    if table_index > 255 {
        return None;
    }

    let color = parse_color_spec(spec)?;
    Some((table_index, color))
}

pub(crate) struct HyperlinkParts {
    pub params: String,
    pub uri: String,
}

/// Parses an OSC 8 payload `<params>;<URI>`. An empty URI means the active
/// hyperlink ends. The only defined parameter keyword is `id=`; its value
/// is everything after the keyword within the parameter section.
pub(crate) fn parse_hyperlink(payload: &str) -> Option<HyperlinkParts> {
    let (param_text, uri) = payload.split_once(';')?;

    if payload.len() == 1 {
        return Some(HyperlinkParts {
            params: String::new(),
            uri: String::new(),
        });
    }

    let params = param_text
        .find(HYPERLINK_ID_PARAMETER)
        .map(|pos| param_text[pos + HYPERLINK_ID_PARAMETER.len()..].to_string())
        .unwrap_or_default();

    Some(HyperlinkParts {
        params,
        uri: uri.to_string(),
    })
}

impl OutputEngine {
    pub(crate) fn handle_osc(&mut self, param: u16, payload: &str) -> bool {
        match param {
            SET_ICON_AND_WINDOW_TITLE | SET_WINDOW_ICON | SET_WINDOW_TITLE => {
                let success = self.dispatch_mut().set_window_title(payload);
                self.log(SequenceCode::OscWindowTitle);
                success
            },
            SET_COLOR_TABLE_ENTRY => match parse_color_table_entry(payload) {
                Some((table_index, color)) => {
                    let success = self
                        .dispatch_mut()
                        .set_color_table_entry(table_index, color);
                    self.log(SequenceCode::OscColorTable);
                    success
                },
                None => false,
            },
            SET_FOREGROUND_COLOR => match parse_color_spec(payload) {
                Some(color) => {
                    let success = self.dispatch_mut().set_default_foreground(color);
                    self.log(SequenceCode::OscForegroundColor);
                    success
                },
                None => false,
            },
            SET_BACKGROUND_COLOR => match parse_color_spec(payload) {
                Some(color) => {
                    let success = self.dispatch_mut().set_default_background(color);
                    self.log(SequenceCode::OscBackgroundColor);
                    success
                },
                None => false,
            },
            SET_CURSOR_COLOR => match parse_color_spec(payload) {
                Some(color) => {
                    let success = self.dispatch_mut().set_cursor_color(color);
                    self.log(SequenceCode::OscCursorColor);
                    success
                },
                None => false,
            },
            SET_CLIPBOARD => match parse_clipboard(payload) {
                // Clipboard queries are answered by the host, not the
                // dispatch target.
                Ok(ClipboardRequest::Query) => {
                    self.log(SequenceCode::OscClipboard);
                    true
                },
                Ok(ClipboardRequest::Set(content)) => {
                    let success = self.dispatch_mut().set_clipboard(&content);
                    self.log(SequenceCode::OscClipboard);
                    success
                },
                Err(error) => {
                    debug!("[osc 52] rejected payload: {error}");
                    false
                },
            },
            RESET_CURSOR_COLOR => {
                let success = self.dispatch_mut().set_cursor_color(COLOR_INVALID);
                self.log(SequenceCode::OscResetCursorColor);
                success
            },
            HYPERLINK => match parse_hyperlink(payload) {
                Some(parts) if parts.uri.is_empty() => {
                    let success = self.dispatch_mut().end_hyperlink();
                    self.log(SequenceCode::OscHyperlink);
                    success
                },
                Some(parts) => {
                    let success = self
                        .dispatch_mut()
                        .add_hyperlink(&parts.uri, &parts.params);
                    self.log(SequenceCode::OscHyperlink);
                    success
                },
                None => false,
            },
            unknown => {
                debug!("[osc] unrecognized parameter {unknown}: {payload:?}");
                false
            },
        }
    }
}
