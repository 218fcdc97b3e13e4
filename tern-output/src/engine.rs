use log::debug;
use tern_vte::{Engine, SequenceTrace, VtId};

use crate::connection::OutputConnection;
use crate::dispatch::TermDispatch;
use crate::telemetry::{SequenceCode, SequenceTelemetry};
use crate::types::LineFeedType;

const NUL: char = '\0';
const BEL: char = '\x07';
const BS: char = '\x08';
const HT: char = '\t';
const LF: char = '\n';
const VT: char = '\x0b';
const FF: char = '\x0c';
const CR: char = '\r';
const SO: char = '\x0e';
const SI: char = '\x0f';
const SPC: char = ' ';

struct TtyLink {
    connection: Box<dyn OutputConnection>,
    trace: SequenceTrace,
}

/// The output dispatch engine.
///
/// Sits behind the [`Parser`](tern_vte::Parser) and translates recognized
/// sequences into semantic calls on an owned [`TermDispatch`] target. When a
/// downstream terminal connection is attached, anything the engine cannot
/// interpret (unknown ids, malformed parameters, operations the target
/// refuses) is re-serialized from the sequence trace and written through
/// verbatim; without a connection such input is dropped.
pub struct OutputEngine {
    pub(crate) dispatch: Box<dyn TermDispatch>,
    tty: Option<TtyLink>,
    pub(crate) last_printed: char,
    pub(crate) sgr_options: Vec<crate::types::GraphicsRendition>,
    telemetry: SequenceTelemetry,
}

impl OutputEngine {
    #[must_use]
    pub fn new(dispatch: Box<dyn TermDispatch>) -> Self {
        Self {
            dispatch,
            tty: None,
            last_printed: NUL,
            sgr_options: Vec::new(),
            telemetry: SequenceTelemetry::new(),
        }
    }

    /// Attaches a downstream terminal. `trace` must be the
    /// [`SequenceTrace`] handle of the parser feeding this engine, so the
    /// pass-through path can re-serialize the sequence being processed.
    pub fn set_terminal_connection(
        &mut self,
        connection: Box<dyn OutputConnection>,
        trace: SequenceTrace,
    ) {
        self.tty = Some(TtyLink { connection, trace });
    }

    #[must_use]
    pub fn dispatch(&self) -> &dyn TermDispatch {
        &*self.dispatch
    }

    pub fn dispatch_mut(&mut self) -> &mut dyn TermDispatch {
        &mut *self.dispatch
    }

    #[must_use]
    pub fn telemetry(&self) -> &SequenceTelemetry {
        &self.telemetry
    }

    pub(crate) fn log(&mut self, code: SequenceCode) {
        self.telemetry.log(code);
    }

    pub(crate) fn repeat_last_char(&mut self, repeat_count: u16) {
        if self.last_printed != NUL {
            let run: String =
                (0..repeat_count).map(|_| self.last_printed).collect();
            self.dispatch.print_string(&run);
        }
    }

    fn clear_last_char(&mut self) {
        self.last_printed = NUL;
    }

    /// Re-serializes the sequence currently buffered by the parser and
    /// delivers it to the downstream terminal.
    fn flush_to_terminal(&mut self) -> bool {
        let pending = match &self.tty {
            Some(tty) => tty.trace.snapshot(),
            None => return false,
        };
        self.pass_through_string(&pending)
    }
}

impl Engine for OutputEngine {
    fn execute(&mut self, ch: char) -> bool {
        match ch {
            // Applications legitimately write NUL and expect nothing to
            // happen; it must not occupy buffer space.
            NUL => {},
            BEL => {
                self.dispatch.warning_bell();
                // A BEL also rings downstream when a terminal is attached.
                if self.tty.is_some() {
                    self.flush_to_terminal();
                }
            },
            BS => {
                self.dispatch.cursor_backward(1);
            },
            HT => {
                self.dispatch.forward_tab(1);
            },
            CR => {
                self.dispatch.carriage_return();
            },
            // LF, FF and VT are identical in function.
            LF | FF | VT => {
                self.dispatch.line_feed(LineFeedType::DependsOnMode);
            },
            SI => {
                self.dispatch.locking_shift(0);
            },
            SO => {
                self.dispatch.locking_shift(1);
            },
            _ => {
                self.dispatch.print(ch);
            },
        }

        self.clear_last_char();
        true
    }

    fn execute_from_escape(&mut self, ch: char) -> bool {
        self.execute(ch)
    }

    fn print(&mut self, ch: char) -> bool {
        if ch >= SPC {
            self.last_printed = ch;
        }
        self.dispatch.print(ch);
        true
    }

    fn print_string(&mut self, text: &str) -> bool {
        let Some(last) = text.chars().last() else {
            return true;
        };

        if last >= SPC {
            self.last_printed = last;
        }
        self.dispatch.print_string(text);
        true
    }

    fn pass_through_string(&mut self, text: &str) -> bool {
        match &mut self.tty {
            Some(tty) => match tty.connection.write_terminal(text) {
                Ok(()) => true,
                Err(error) => {
                    debug!("[pass-through] write failed: {error}");
                    false
                },
            },
            // Without a connection the string is eaten.
            None => true,
        }
    }

    fn esc_dispatch(&mut self, id: VtId) -> bool {
        let mut success = self.handle_esc(id);

        if !success && self.tty.is_some() {
            success = self.flush_to_terminal();
        }

        self.clear_last_char();
        success
    }

    fn vt52_esc_dispatch(&mut self, id: VtId, params: &[u16]) -> bool {
        let success = self.handle_vt52(id, params);
        self.clear_last_char();
        success
    }

    fn csi_dispatch(&mut self, id: VtId, params: &[u16]) -> bool {
        let mut success = self.handle_csi(id, params);

        if !success && self.tty.is_some() {
            success = self.flush_to_terminal();
        }

        self.clear_last_char();
        success
    }

    fn osc_dispatch(&mut self, _terminator: char, param: u16, payload: &str) -> bool {
        let mut success = self.handle_osc(param, payload);

        if !success && self.tty.is_some() {
            success = self.flush_to_terminal();
        }

        self.clear_last_char();
        success
    }

    fn ss3_dispatch(&mut self, _final_byte: char, _params: &[u16]) -> bool {
        // No SS3 output sequences are defined.
        self.clear_last_char();
        false
    }

    fn parse_control_sequence_after_ss3(&self) -> bool {
        false
    }

    fn flush_at_end_of_string(&self) -> bool {
        false
    }

    fn dispatch_control_chars_from_escape(&self) -> bool {
        false
    }

    fn dispatch_intermediates_from_escape(&self) -> bool {
        false
    }
}
