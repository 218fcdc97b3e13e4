use tern_vte::VtId;

use crate::engine::OutputEngine;
use crate::types::{
    EraseType, PrivateMode, CHARSET_ASCII, CHARSET_DEC_SPECIAL_GRAPHICS,
};

// VT52 sequence ids.
const CURSOR_UP: VtId = VtId::of("A");
const CURSOR_DOWN: VtId = VtId::of("B");
const CURSOR_RIGHT: VtId = VtId::of("C");
const CURSOR_LEFT: VtId = VtId::of("D");
const ENTER_GRAPHICS_MODE: VtId = VtId::of("F");
const EXIT_GRAPHICS_MODE: VtId = VtId::of("G");
const CURSOR_TO_HOME: VtId = VtId::of("H");
const REVERSE_LINE_FEED: VtId = VtId::of("I");
const ERASE_TO_END_OF_SCREEN: VtId = VtId::of("J");
const ERASE_TO_END_OF_LINE: VtId = VtId::of("K");
const DIRECT_CURSOR_ADDRESS: VtId = VtId::of("Y");
const IDENTIFY: VtId = VtId::of("Z");
const ENTER_ALTERNATE_KEYPAD_MODE: VtId = VtId::of("=");
const EXIT_ALTERNATE_KEYPAD_MODE: VtId = VtId::of(">");
const EXIT_VT52_MODE: VtId = VtId::of("<");

impl OutputEngine {
    pub(crate) fn handle_vt52(&mut self, id: VtId, params: &[u16]) -> bool {
        match id {
            CURSOR_UP => self.dispatch_mut().cursor_up(1),
            CURSOR_DOWN => self.dispatch_mut().cursor_down(1),
            CURSOR_RIGHT => self.dispatch_mut().cursor_forward(1),
            CURSOR_LEFT => self.dispatch_mut().cursor_backward(1),
            ENTER_GRAPHICS_MODE => self
                .dispatch_mut()
                .designate_94_charset(0, CHARSET_DEC_SPECIAL_GRAPHICS),
            EXIT_GRAPHICS_MODE => {
                self.dispatch_mut().designate_94_charset(0, CHARSET_ASCII)
            },
            CURSOR_TO_HOME => self.dispatch_mut().cursor_position(1, 1),
            REVERSE_LINE_FEED => self.dispatch_mut().reverse_line_feed(),
            ERASE_TO_END_OF_SCREEN => {
                self.dispatch_mut().erase_in_display(EraseType::ToEnd)
            },
            ERASE_TO_END_OF_LINE => {
                self.dispatch_mut().erase_in_line(EraseType::ToEnd)
            },
            DIRECT_CURSOR_ADDRESS => match params {
                // Addresses arrive as raw characters, the lowest value
                // being a space for an address of 1.
                [row, column] => self.dispatch_mut().cursor_position(
                    row.saturating_sub(u16::from(b' ')) + 1,
                    column.saturating_sub(u16::from(b' ')) + 1,
                ),
                _ => false,
            },
            IDENTIFY => self.dispatch_mut().vt52_device_attributes(),
            ENTER_ALTERNATE_KEYPAD_MODE => {
                self.dispatch_mut().set_keypad_mode(true)
            },
            EXIT_ALTERNATE_KEYPAD_MODE => {
                self.dispatch_mut().set_keypad_mode(false)
            },
            EXIT_VT52_MODE => self
                .dispatch_mut()
                .set_private_modes(&[PrivateMode::from_raw(2)]),
            _ => false,
        }
    }
}
