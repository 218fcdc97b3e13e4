//! The semantic operation vocabulary the engine dispatches into.
//!
//! [`TermDispatch`] is implemented once per host, typically by the terminal
//! buffer adapter. Each method is a pure semantic operation; side effects on
//! the buffer are opaque to the parser. Every method returns `true` when the
//! operation was handled. Unhandled operations bubble back to the engine,
//! which may forward the raw sequence to a downstream terminal.
//!
//! Every method has a default body returning `false`, so a dispatch target
//! only overrides what it supports and a no-op test double needs no code at
//! all.

use tern_vte::VtId;

use crate::types::{
    AnsiStatusType, CursorStyle, EraseType, GraphicsRendition, LineFeedType,
    PrivateMode, WindowManipulationType,
};

pub trait TermDispatch {
    // Output.
    fn print(&mut self, _ch: char) -> bool {
        false
    }
    fn print_string(&mut self, _text: &str) -> bool {
        false
    }

    // Cursor motion. Distances are 1-based and never zero.
    fn cursor_up(&mut self, _distance: u16) -> bool {
        false
    }
    fn cursor_down(&mut self, _distance: u16) -> bool {
        false
    }
    fn cursor_forward(&mut self, _distance: u16) -> bool {
        false
    }
    fn cursor_backward(&mut self, _distance: u16) -> bool {
        false
    }
    fn cursor_next_line(&mut self, _distance: u16) -> bool {
        false
    }
    fn cursor_prev_line(&mut self, _distance: u16) -> bool {
        false
    }
    fn cursor_horizontal_position_absolute(&mut self, _column: u16) -> bool {
        false
    }
    fn vertical_line_position_absolute(&mut self, _line: u16) -> bool {
        false
    }
    fn horizontal_position_relative(&mut self, _distance: u16) -> bool {
        false
    }
    fn vertical_position_relative(&mut self, _distance: u16) -> bool {
        false
    }
    /// 1-origin; coordinates of zero never reach this call.
    fn cursor_position(&mut self, _line: u16, _column: u16) -> bool {
        false
    }
    fn cursor_save_state(&mut self) -> bool {
        false
    }
    fn cursor_restore_state(&mut self) -> bool {
        false
    }

    // Editing.
    fn insert_character(&mut self, _count: u16) -> bool {
        false
    }
    fn delete_character(&mut self, _count: u16) -> bool {
        false
    }
    fn insert_line(&mut self, _count: u16) -> bool {
        false
    }
    fn delete_line(&mut self, _count: u16) -> bool {
        false
    }
    fn erase_in_display(&mut self, _erase_type: EraseType) -> bool {
        false
    }
    fn erase_in_line(&mut self, _erase_type: EraseType) -> bool {
        false
    }
    fn erase_characters(&mut self, _count: u16) -> bool {
        false
    }
    fn scroll_up(&mut self, _distance: u16) -> bool {
        false
    }
    fn scroll_down(&mut self, _distance: u16) -> bool {
        false
    }

    // Tabs.
    fn forward_tab(&mut self, _tab_count: u16) -> bool {
        false
    }
    fn backwards_tab(&mut self, _tab_count: u16) -> bool {
        false
    }
    fn horizontal_tab_set(&mut self) -> bool {
        false
    }
    fn tab_clear(&mut self, _clear_type: u16) -> bool {
        false
    }

    // Modes and attributes.
    fn set_private_modes(&mut self, _modes: &[PrivateMode]) -> bool {
        false
    }
    fn reset_private_modes(&mut self, _modes: &[PrivateMode]) -> bool {
        false
    }
    fn set_graphics_rendition(&mut self, _options: &[GraphicsRendition]) -> bool {
        false
    }
    fn set_keypad_mode(&mut self, _application_mode: bool) -> bool {
        false
    }
    fn set_cursor_style(&mut self, _style: CursorStyle) -> bool {
        false
    }
    fn set_top_bottom_scrolling_margins(
        &mut self,
        _top_margin: u16,
        _bottom_margin: u16,
    ) -> bool {
        false
    }

    // Reports and resets.
    fn device_status_report(&mut self, _status_type: AnsiStatusType) -> bool {
        false
    }
    fn device_attributes(&mut self) -> bool {
        false
    }
    fn secondary_device_attributes(&mut self) -> bool {
        false
    }
    fn tertiary_device_attributes(&mut self) -> bool {
        false
    }
    fn vt52_device_attributes(&mut self) -> bool {
        false
    }
    fn soft_reset(&mut self) -> bool {
        false
    }
    fn hard_reset(&mut self) -> bool {
        false
    }

    // Line control.
    fn line_feed(&mut self, _line_feed_type: LineFeedType) -> bool {
        false
    }
    fn reverse_line_feed(&mut self) -> bool {
        false
    }
    fn carriage_return(&mut self) -> bool {
        false
    }
    fn warning_bell(&mut self) -> bool {
        false
    }

    // Character sets.
    fn single_shift(&mut self, _gset_number: u8) -> bool {
        false
    }
    fn locking_shift(&mut self, _gset_number: u8) -> bool {
        false
    }
    fn locking_shift_right(&mut self, _gset_number: u8) -> bool {
        false
    }
    fn designate_94_charset(&mut self, _gset_number: u8, _charset: VtId) -> bool {
        false
    }
    fn designate_96_charset(&mut self, _gset_number: u8, _charset: VtId) -> bool {
        false
    }
    fn designate_coding_system(&mut self, _coding_system: VtId) -> bool {
        false
    }
    fn screen_alignment_pattern(&mut self) -> bool {
        false
    }

    // Window and host integration.
    fn set_window_title(&mut self, _title: &str) -> bool {
        false
    }
    fn window_manipulation(
        &mut self,
        _function: WindowManipulationType,
        _parameters: &[u16],
    ) -> bool {
        false
    }

    // Colors. Packed as `0x00BBGGRR`.
    fn set_color_table_entry(&mut self, _table_index: usize, _color: u32) -> bool {
        false
    }
    fn set_default_foreground(&mut self, _color: u32) -> bool {
        false
    }
    fn set_default_background(&mut self, _color: u32) -> bool {
        false
    }
    fn set_cursor_color(&mut self, _color: u32) -> bool {
        false
    }

    // Clipboard and hyperlinks.
    fn set_clipboard(&mut self, _content: &str) -> bool {
        false
    }
    fn add_hyperlink(&mut self, _uri: &str, _params: &str) -> bool {
        false
    }
    fn end_hyperlink(&mut self) -> bool {
        false
    }
}

/// Dispatch target that ignores every operation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDispatch;

impl TermDispatch for NoopDispatch {}
