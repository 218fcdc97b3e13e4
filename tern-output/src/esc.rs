use tern_vte::VtId;

use crate::engine::OutputEngine;
use crate::telemetry::SequenceCode;
use crate::types::LineFeedType;

// Plain escape sequence ids.
const DECSC_CURSOR_SAVE: VtId = VtId::of("7");
const DECRC_CURSOR_RESTORE: VtId = VtId::of("8");
const DECKPAM_KEYPAD_APPLICATION_MODE: VtId = VtId::of("=");
const DECKPNM_KEYPAD_NUMERIC_MODE: VtId = VtId::of(">");
const IND_INDEX: VtId = VtId::of("D");
const NEL_NEXT_LINE: VtId = VtId::of("E");
const HTS_HORIZONTAL_TAB_SET: VtId = VtId::of("H");
const RI_REVERSE_LINE_FEED: VtId = VtId::of("M");
const SS2_SINGLE_SHIFT: VtId = VtId::of("N");
const SS3_SINGLE_SHIFT: VtId = VtId::of("O");
const ST_STRING_TERMINATOR: VtId = VtId::of("\\");
const RIS_RESET_TO_INITIAL_STATE: VtId = VtId::of("c");
const LS2_LOCKING_SHIFT: VtId = VtId::of("n");
const LS3_LOCKING_SHIFT: VtId = VtId::of("o");
const LS1R_LOCKING_SHIFT: VtId = VtId::of("~");
const LS2R_LOCKING_SHIFT: VtId = VtId::of("}");
const LS3R_LOCKING_SHIFT: VtId = VtId::of("|");
const DECALN_SCREEN_ALIGNMENT_PATTERN: VtId = VtId::of("#8");

impl OutputEngine {
    pub(crate) fn handle_esc(&mut self, id: VtId) -> bool {
        match id {
            // The 7-bit string terminator on its own is a no-op.
            ST_STRING_TERMINATOR => true,
            DECSC_CURSOR_SAVE => {
                let success = self.dispatch_mut().cursor_save_state();
                self.log(SequenceCode::Decsc);
                success
            },
            DECRC_CURSOR_RESTORE => {
                let success = self.dispatch_mut().cursor_restore_state();
                self.log(SequenceCode::Decrc);
                success
            },
            DECKPAM_KEYPAD_APPLICATION_MODE => {
                let success = self.dispatch_mut().set_keypad_mode(true);
                self.log(SequenceCode::Deckpam);
                success
            },
            DECKPNM_KEYPAD_NUMERIC_MODE => {
                let success = self.dispatch_mut().set_keypad_mode(false);
                self.log(SequenceCode::Deckpnm);
                success
            },
            NEL_NEXT_LINE => {
                let success =
                    self.dispatch_mut().line_feed(LineFeedType::WithReturn);
                self.log(SequenceCode::Nel);
                success
            },
            IND_INDEX => {
                let success =
                    self.dispatch_mut().line_feed(LineFeedType::WithoutReturn);
                self.log(SequenceCode::Ind);
                success
            },
            RI_REVERSE_LINE_FEED => {
                let success = self.dispatch_mut().reverse_line_feed();
                self.log(SequenceCode::Ri);
                success
            },
            HTS_HORIZONTAL_TAB_SET => {
                let success = self.dispatch_mut().horizontal_tab_set();
                self.log(SequenceCode::Hts);
                success
            },
            RIS_RESET_TO_INITIAL_STATE => {
                let success = self.dispatch_mut().hard_reset();
                self.log(SequenceCode::Ris);
                success
            },
            SS2_SINGLE_SHIFT => {
                let success = self.dispatch_mut().single_shift(2);
                self.log(SequenceCode::Ss2);
                success
            },
            SS3_SINGLE_SHIFT => {
                let success = self.dispatch_mut().single_shift(3);
                self.log(SequenceCode::Ss3);
                success
            },
            LS2_LOCKING_SHIFT => {
                let success = self.dispatch_mut().locking_shift(2);
                self.log(SequenceCode::Ls2);
                success
            },
            LS3_LOCKING_SHIFT => {
                let success = self.dispatch_mut().locking_shift(3);
                self.log(SequenceCode::Ls3);
                success
            },
            LS1R_LOCKING_SHIFT => {
                let success = self.dispatch_mut().locking_shift_right(1);
                self.log(SequenceCode::Ls1r);
                success
            },
            LS2R_LOCKING_SHIFT => {
                let success = self.dispatch_mut().locking_shift_right(2);
                self.log(SequenceCode::Ls2r);
                success
            },
            LS3R_LOCKING_SHIFT => {
                let success = self.dispatch_mut().locking_shift_right(3);
                self.log(SequenceCode::Ls3r);
                success
            },
            DECALN_SCREEN_ALIGNMENT_PATTERN => {
                let success = self.dispatch_mut().screen_alignment_pattern();
                self.log(SequenceCode::Decaln);
                success
            },
            other => self.handle_designate(other),
        }
    }

    /// Charset and coding system designations are keyed on their first
    /// intermediate; the rest of the id names the designated set.
    fn handle_designate(&mut self, id: VtId) -> bool {
        let designator = id.subsequence(1);

        match id.first() {
            b'%' => {
                let success =
                    self.dispatch_mut().designate_coding_system(designator);
                self.log(SequenceCode::Docs);
                success
            },
            b'(' => {
                let success =
                    self.dispatch_mut().designate_94_charset(0, designator);
                self.log(SequenceCode::DesignateG0);
                success
            },
            b')' => {
                let success =
                    self.dispatch_mut().designate_94_charset(1, designator);
                self.log(SequenceCode::DesignateG1);
                success
            },
            b'*' => {
                let success =
                    self.dispatch_mut().designate_94_charset(2, designator);
                self.log(SequenceCode::DesignateG2);
                success
            },
            b'+' => {
                let success =
                    self.dispatch_mut().designate_94_charset(3, designator);
                self.log(SequenceCode::DesignateG3);
                success
            },
            b'-' => {
                let success =
                    self.dispatch_mut().designate_96_charset(1, designator);
                self.log(SequenceCode::DesignateG1);
                success
            },
            b'.' => {
                let success =
                    self.dispatch_mut().designate_96_charset(2, designator);
                self.log(SequenceCode::DesignateG2);
                success
            },
            b'/' => {
                let success =
                    self.dispatch_mut().designate_96_charset(3, designator);
                self.log(SequenceCode::DesignateG3);
                success
            },
            _ => false,
        }
    }
}
