use tern_vte::VtId;

use crate::engine::OutputEngine;
use crate::telemetry::SequenceCode;
use crate::types::{
    AnsiStatusType, CursorStyle, EraseType, GraphicsRendition, PrivateMode,
    WindowManipulationType,
};

// Control sequence ids. Private markers and intermediates are part of the
// id, so DECSET is `?h` and DECSCUSR is ` q`.
const ICH_INSERT_CHARACTER: VtId = VtId::of("@");
const CUU_CURSOR_UP: VtId = VtId::of("A");
const CUD_CURSOR_DOWN: VtId = VtId::of("B");
const CUF_CURSOR_FORWARD: VtId = VtId::of("C");
const CUB_CURSOR_BACKWARD: VtId = VtId::of("D");
const CNL_CURSOR_NEXT_LINE: VtId = VtId::of("E");
const CPL_CURSOR_PREV_LINE: VtId = VtId::of("F");
const CHA_CURSOR_HORIZONTAL_ABSOLUTE: VtId = VtId::of("G");
const CUP_CURSOR_POSITION: VtId = VtId::of("H");
const CHT_CURSOR_FORWARD_TAB: VtId = VtId::of("I");
const ED_ERASE_DISPLAY: VtId = VtId::of("J");
const EL_ERASE_LINE: VtId = VtId::of("K");
const IL_INSERT_LINE: VtId = VtId::of("L");
const DL_DELETE_LINE: VtId = VtId::of("M");
const DCH_DELETE_CHARACTER: VtId = VtId::of("P");
const SU_SCROLL_UP: VtId = VtId::of("S");
const SD_SCROLL_DOWN: VtId = VtId::of("T");
const ECH_ERASE_CHARACTERS: VtId = VtId::of("X");
const CBT_CURSOR_BACK_TAB: VtId = VtId::of("Z");
const HPA_HORIZONTAL_POSITION_ABSOLUTE: VtId = VtId::of("`");
const HPR_HORIZONTAL_POSITION_RELATIVE: VtId = VtId::of("a");
const REP_REPEAT_CHARACTER: VtId = VtId::of("b");
const DA_DEVICE_ATTRIBUTES: VtId = VtId::of("c");
const DA2_SECONDARY_DEVICE_ATTRIBUTES: VtId = VtId::of(">c");
const DA3_TERTIARY_DEVICE_ATTRIBUTES: VtId = VtId::of("=c");
const VPA_VERTICAL_LINE_POSITION_ABSOLUTE: VtId = VtId::of("d");
const VPR_VERTICAL_POSITION_RELATIVE: VtId = VtId::of("e");
const HVP_HORIZONTAL_VERTICAL_POSITION: VtId = VtId::of("f");
const TBC_TAB_CLEAR: VtId = VtId::of("g");
const DECSET_PRIVATE_MODE_SET: VtId = VtId::of("?h");
const DECRST_PRIVATE_MODE_RESET: VtId = VtId::of("?l");
const SGR_SET_GRAPHICS_RENDITION: VtId = VtId::of("m");
const DSR_DEVICE_STATUS_REPORT: VtId = VtId::of("n");
const DECSTBM_SET_SCROLLING_REGION: VtId = VtId::of("r");
const ANSISYSSC_CURSOR_SAVE: VtId = VtId::of("s");
const DTTERM_WINDOW_MANIPULATION: VtId = VtId::of("t");
const ANSISYSRC_CURSOR_RESTORE: VtId = VtId::of("u");
const DECSCUSR_SET_CURSOR_STYLE: VtId = VtId::of(" q");
const DECSTR_SOFT_RESET: VtId = VtId::of("!p");

/// 0 or 1 parameter; defaults to 1 and a distance of 0 is coerced to 1.
fn cursor_distance(params: &[u16]) -> Option<u16> {
    let distance = match params {
        [] => 1,
        [value] => *value,
        _ => return None,
    };
    Some(distance.max(1))
}

/// 0, 1 or 2 parameters; both axes default to 1 and 0 is coerced to 1.
fn xy_position(params: &[u16]) -> Option<(u16, u16)> {
    let (line, column) = match params {
        [] => (1, 1),
        [line] => (*line, 1),
        [line, column] => (*line, *column),
        _ => return None,
    };
    Some((line.max(1), column.max(1)))
}

/// 0, 1 or 2 parameters. A lone top margin is legal (`[3;r` gives 3,0), a
/// lone bottom margin is legal (`[;3r` gives 0,3), and defaults are 0,0.
/// A bottom margin above the top margin is rejected.
fn top_bottom_margins(params: &[u16]) -> Option<(u16, u16)> {
    let (top, bottom) = match params {
        [] => (0, 0),
        [top] => (*top, 0),
        [top, bottom] => (*top, *bottom),
        _ => return None,
    };

    if bottom > 0 && bottom < top {
        return None;
    }
    Some((top, bottom))
}

/// 0 or 1 parameter; values outside the erase repertoire are rejected.
fn erase_operation(params: &[u16]) -> Option<EraseType> {
    match params {
        [] => Some(EraseType::ToEnd),
        [value] => EraseType::from_raw(*value),
        _ => None,
    }
}

/// DECSET/DECRST require at least one parameter.
fn private_mode_params(params: &[u16]) -> Option<Vec<PrivateMode>> {
    if params.is_empty() {
        return None;
    }
    Some(params.iter().map(|&raw| PrivateMode::from_raw(raw)).collect())
}

/// DSR accepts exactly one parameter out of the supported status types.
fn device_status_operation(params: &[u16]) -> Option<AnsiStatusType> {
    match params {
        [value] => AnsiStatusType::from_raw(*value),
        _ => None,
    }
}

/// DA accepts no parameters, or a single 0.
fn verify_device_attributes_params(params: &[u16]) -> bool {
    matches!(params, [] | [0])
}

/// 0 or 1 parameter; defaults to 0 (clear the current column).
fn tab_clear_type(params: &[u16]) -> Option<u16> {
    match params {
        [] => Some(0),
        [value] => Some(*value),
        _ => None,
    }
}

/// At least one parameter whose first value names a supported function.
fn window_manipulation_type(params: &[u16]) -> Option<WindowManipulationType> {
    WindowManipulationType::from_raw(*params.first()?)
}

/// 0 or 1 parameter; defaults to the user-default style.
fn cursor_style(params: &[u16]) -> Option<CursorStyle> {
    match params {
        [] => Some(CursorStyle::UserDefault),
        [value] => CursorStyle::from_raw(*value),
        _ => None,
    }
}

impl OutputEngine {
    pub(crate) fn handle_csi(&mut self, id: VtId, params: &[u16]) -> bool {
        match id {
            CUU_CURSOR_UP => match cursor_distance(params) {
                Some(distance) => {
                    let success = self.dispatch_mut().cursor_up(distance);
                    self.log(SequenceCode::Cuu);
                    success
                },
                None => false,
            },
            CUD_CURSOR_DOWN => match cursor_distance(params) {
                Some(distance) => {
                    let success = self.dispatch_mut().cursor_down(distance);
                    self.log(SequenceCode::Cud);
                    success
                },
                None => false,
            },
            CUF_CURSOR_FORWARD => match cursor_distance(params) {
                Some(distance) => {
                    let success = self.dispatch_mut().cursor_forward(distance);
                    self.log(SequenceCode::Cuf);
                    success
                },
                None => false,
            },
            CUB_CURSOR_BACKWARD => match cursor_distance(params) {
                Some(distance) => {
                    let success = self.dispatch_mut().cursor_backward(distance);
                    self.log(SequenceCode::Cub);
                    success
                },
                None => false,
            },
            CNL_CURSOR_NEXT_LINE => match cursor_distance(params) {
                Some(distance) => {
                    let success = self.dispatch_mut().cursor_next_line(distance);
                    self.log(SequenceCode::Cnl);
                    success
                },
                None => false,
            },
            CPL_CURSOR_PREV_LINE => match cursor_distance(params) {
                Some(distance) => {
                    let success = self.dispatch_mut().cursor_prev_line(distance);
                    self.log(SequenceCode::Cpl);
                    success
                },
                None => false,
            },
            CHA_CURSOR_HORIZONTAL_ABSOLUTE
            | HPA_HORIZONTAL_POSITION_ABSOLUTE => match cursor_distance(params) {
                Some(column) => {
                    let success = self
                        .dispatch_mut()
                        .cursor_horizontal_position_absolute(column);
                    self.log(SequenceCode::Cha);
                    success
                },
                None => false,
            },
            VPA_VERTICAL_LINE_POSITION_ABSOLUTE => {
                match cursor_distance(params) {
                    Some(line) => {
                        let success = self
                            .dispatch_mut()
                            .vertical_line_position_absolute(line);
                        self.log(SequenceCode::Vpa);
                        success
                    },
                    None => false,
                }
            },
            HPR_HORIZONTAL_POSITION_RELATIVE => match cursor_distance(params) {
                Some(distance) => {
                    let success = self
                        .dispatch_mut()
                        .horizontal_position_relative(distance);
                    self.log(SequenceCode::Hpr);
                    success
                },
                None => false,
            },
            VPR_VERTICAL_POSITION_RELATIVE => match cursor_distance(params) {
                Some(distance) => {
                    let success =
                        self.dispatch_mut().vertical_position_relative(distance);
                    self.log(SequenceCode::Vpr);
                    success
                },
                None => false,
            },
            CUP_CURSOR_POSITION | HVP_HORIZONTAL_VERTICAL_POSITION => {
                match xy_position(params) {
                    Some((line, column)) => {
                        let success =
                            self.dispatch_mut().cursor_position(line, column);
                        self.log(SequenceCode::Cup);
                        success
                    },
                    None => false,
                }
            },
            DECSTBM_SET_SCROLLING_REGION => match top_bottom_margins(params) {
                Some((top, bottom)) => {
                    let success = self
                        .dispatch_mut()
                        .set_top_bottom_scrolling_margins(top, bottom);
                    self.log(SequenceCode::Decstbm);
                    success
                },
                None => false,
            },
            ICH_INSERT_CHARACTER => match cursor_distance(params) {
                Some(count) => {
                    let success = self.dispatch_mut().insert_character(count);
                    self.log(SequenceCode::Ich);
                    success
                },
                None => false,
            },
            DCH_DELETE_CHARACTER => match cursor_distance(params) {
                Some(count) => {
                    let success = self.dispatch_mut().delete_character(count);
                    self.log(SequenceCode::Dch);
                    success
                },
                None => false,
            },
            ECH_ERASE_CHARACTERS => match cursor_distance(params) {
                Some(count) => {
                    let success = self.dispatch_mut().erase_characters(count);
                    self.log(SequenceCode::Ech);
                    success
                },
                None => false,
            },
            ED_ERASE_DISPLAY => match erase_operation(params) {
                Some(erase_type) => {
                    let success = self.dispatch_mut().erase_in_display(erase_type);
                    self.log(SequenceCode::Ed);
                    success
                },
                None => false,
            },
            EL_ERASE_LINE => match erase_operation(params) {
                Some(erase_type) => {
                    let success = self.dispatch_mut().erase_in_line(erase_type);
                    self.log(SequenceCode::El);
                    success
                },
                None => false,
            },
            DECSET_PRIVATE_MODE_SET => match private_mode_params(params) {
                Some(modes) => {
                    let success = self.dispatch_mut().set_private_modes(&modes);
                    self.log(SequenceCode::Decset);
                    success
                },
                None => false,
            },
            DECRST_PRIVATE_MODE_RESET => match private_mode_params(params) {
                Some(modes) => {
                    let success = self.dispatch_mut().reset_private_modes(&modes);
                    self.log(SequenceCode::Decrst);
                    success
                },
                None => false,
            },
            SGR_SET_GRAPHICS_RENDITION => {
                let success = self.dispatch_sgr(params);
                self.log(SequenceCode::Sgr);
                success
            },
            DSR_DEVICE_STATUS_REPORT => match device_status_operation(params) {
                Some(status_type) => {
                    let success =
                        self.dispatch_mut().device_status_report(status_type);
                    self.log(SequenceCode::Dsr);
                    success
                },
                None => false,
            },
            DA_DEVICE_ATTRIBUTES => {
                if verify_device_attributes_params(params) {
                    let success = self.dispatch_mut().device_attributes();
                    self.log(SequenceCode::Da);
                    success
                } else {
                    false
                }
            },
            DA2_SECONDARY_DEVICE_ATTRIBUTES => {
                if verify_device_attributes_params(params) {
                    let success =
                        self.dispatch_mut().secondary_device_attributes();
                    self.log(SequenceCode::Da2);
                    success
                } else {
                    false
                }
            },
            DA3_TERTIARY_DEVICE_ATTRIBUTES => {
                if verify_device_attributes_params(params) {
                    let success =
                        self.dispatch_mut().tertiary_device_attributes();
                    self.log(SequenceCode::Da3);
                    success
                } else {
                    false
                }
            },
            SU_SCROLL_UP => match cursor_distance(params) {
                Some(distance) => {
                    let success = self.dispatch_mut().scroll_up(distance);
                    self.log(SequenceCode::Su);
                    success
                },
                None => false,
            },
            SD_SCROLL_DOWN => match cursor_distance(params) {
                Some(distance) => {
                    let success = self.dispatch_mut().scroll_down(distance);
                    self.log(SequenceCode::Sd);
                    success
                },
                None => false,
            },
            ANSISYSSC_CURSOR_SAVE => {
                if params.is_empty() {
                    let success = self.dispatch_mut().cursor_save_state();
                    self.log(SequenceCode::AnsiSysSc);
                    success
                } else {
                    false
                }
            },
            ANSISYSRC_CURSOR_RESTORE => {
                if params.is_empty() {
                    let success = self.dispatch_mut().cursor_restore_state();
                    self.log(SequenceCode::AnsiSysRc);
                    success
                } else {
                    false
                }
            },
            IL_INSERT_LINE => match cursor_distance(params) {
                Some(count) => {
                    let success = self.dispatch_mut().insert_line(count);
                    self.log(SequenceCode::Il);
                    success
                },
                None => false,
            },
            DL_DELETE_LINE => match cursor_distance(params) {
                Some(count) => {
                    let success = self.dispatch_mut().delete_line(count);
                    self.log(SequenceCode::Dl);
                    success
                },
                None => false,
            },
            CHT_CURSOR_FORWARD_TAB => match cursor_distance(params) {
                Some(tab_count) => {
                    let success = self.dispatch_mut().forward_tab(tab_count);
                    self.log(SequenceCode::Cht);
                    success
                },
                None => false,
            },
            CBT_CURSOR_BACK_TAB => match cursor_distance(params) {
                Some(tab_count) => {
                    let success = self.dispatch_mut().backwards_tab(tab_count);
                    self.log(SequenceCode::Cbt);
                    success
                },
                None => false,
            },
            TBC_TAB_CLEAR => match tab_clear_type(params) {
                Some(clear_type) => {
                    let success = self.dispatch_mut().tab_clear(clear_type);
                    self.log(SequenceCode::Tbc);
                    success
                },
                None => false,
            },
            DTTERM_WINDOW_MANIPULATION => {
                match window_manipulation_type(params) {
                    Some(function) => {
                        let success = self
                            .dispatch_mut()
                            .window_manipulation(function, &params[1..]);
                        self.log(SequenceCode::DttermWm);
                        success
                    },
                    None => false,
                }
            },
            REP_REPEAT_CHARACTER => match cursor_distance(params) {
                Some(repeat_count) => {
                    self.repeat_last_char(repeat_count);
                    self.log(SequenceCode::Rep);
                    true
                },
                None => false,
            },
            DECSCUSR_SET_CURSOR_STYLE => match cursor_style(params) {
                Some(style) => {
                    let success = self.dispatch_mut().set_cursor_style(style);
                    self.log(SequenceCode::Decscusr);
                    success
                },
                None => false,
            },
            DECSTR_SOFT_RESET => {
                let success = self.dispatch_mut().soft_reset();
                self.log(SequenceCode::Decstr);
                success
            },
            _ => false,
        }
    }

    fn dispatch_sgr(&mut self, params: &[u16]) -> bool {
        // The option buffer lives on the engine; applications that do a lot
        // of color work would otherwise pay for a fresh allocation on every
        // sequence.
        let mut options = std::mem::take(&mut self.sgr_options);
        options.clear();

        if params.is_empty() {
            options.push(GraphicsRendition::from_raw(0));
        } else {
            options.extend(params.iter().map(|&raw| GraphicsRendition::from_raw(raw)));
        }

        let success = self.dispatch_mut().set_graphics_rendition(&options);
        self.sgr_options = options;
        success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_distance_defaults_and_coercion() {
        assert_eq!(cursor_distance(&[]), Some(1));
        assert_eq!(cursor_distance(&[0]), Some(1));
        assert_eq!(cursor_distance(&[7]), Some(7));
        assert_eq!(cursor_distance(&[1, 2]), None);
    }

    #[test]
    fn xy_position_defaults_and_coercion() {
        assert_eq!(xy_position(&[]), Some((1, 1)));
        assert_eq!(xy_position(&[3]), Some((3, 1)));
        assert_eq!(xy_position(&[0, 5]), Some((1, 5)));
        assert_eq!(xy_position(&[3, 0]), Some((3, 1)));
        assert_eq!(xy_position(&[1, 2, 3]), None);
    }

    #[test]
    fn margins_accept_partial_forms() {
        assert_eq!(top_bottom_margins(&[]), Some((0, 0)));
        assert_eq!(top_bottom_margins(&[3]), Some((3, 0)));
        assert_eq!(top_bottom_margins(&[3, 0]), Some((3, 0)));
        assert_eq!(top_bottom_margins(&[0, 3]), Some((0, 3)));
        assert_eq!(top_bottom_margins(&[2, 24]), Some((2, 24)));
    }

    #[test]
    fn margins_reject_inverted_regions() {
        assert_eq!(top_bottom_margins(&[3, 2]), None);
        assert_eq!(top_bottom_margins(&[24, 1]), None);
    }

    #[test]
    fn erase_operation_rejects_unknown_values() {
        assert_eq!(erase_operation(&[]), Some(EraseType::ToEnd));
        assert_eq!(erase_operation(&[2]), Some(EraseType::All));
        assert_eq!(erase_operation(&[3]), Some(EraseType::Scrollback));
        assert_eq!(erase_operation(&[4]), None);
        assert_eq!(erase_operation(&[0, 1]), None);
    }

    #[test]
    fn device_status_accepts_only_known_reports() {
        assert_eq!(
            device_status_operation(&[5]),
            Some(AnsiStatusType::OperatingStatus)
        );
        assert_eq!(
            device_status_operation(&[6]),
            Some(AnsiStatusType::CursorPositionReport)
        );
        assert_eq!(device_status_operation(&[]), None);
        assert_eq!(device_status_operation(&[7]), None);
        assert_eq!(device_status_operation(&[5, 6]), None);
    }

    #[test]
    fn window_manipulation_requires_known_function() {
        assert_eq!(
            window_manipulation_type(&[7]),
            Some(WindowManipulationType::RefreshWindow)
        );
        assert_eq!(
            window_manipulation_type(&[8, 24, 80]),
            Some(WindowManipulationType::ResizeWindowInCharacters)
        );
        assert_eq!(window_manipulation_type(&[]), None);
        assert_eq!(window_manipulation_type(&[1]), None);
    }

    #[test]
    fn private_modes_reject_empty_runs() {
        assert_eq!(private_mode_params(&[]), None);
        assert_eq!(
            private_mode_params(&[25]),
            Some(vec![PrivateMode::from_raw(25)])
        );
    }
}
