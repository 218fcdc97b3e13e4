use crate::engine::Engine;
use crate::states::State;
use crate::trace::SequenceTrace;
use crate::utf8::Utf8Collector;
use crate::vtid::{VtId, VtIdBuilder};

/// OSC payloads beyond this size are discarded and terminate with `Ignore`.
const MAX_OSC_PAYLOAD: usize = 1024 * 1024;

const VT52_DIRECT_ADDRESS: VtId = VtId::of("Y");

#[derive(Debug, Default)]
struct Params {
    values: Vec<u16>,
    current: Option<u32>,
}

impl Params {
    // Accumulation clamps at the 16-bit ceiling instead of failing.
    fn accumulate(&mut self, byte: u8) {
        let digit = u32::from(byte - b'0');
        let next = self
            .current
            .unwrap_or(0)
            .saturating_mul(10)
            .saturating_add(digit);

        self.current = Some(next.min(u32::from(u16::MAX)));
    }

    fn separator(&mut self) {
        let value = self.current.take().unwrap_or(0);
        self.values.push(value as u16);
    }

    fn finish(&mut self) -> &[u16] {
        if let Some(value) = self.current.take() {
            self.values.push(value as u16);
        } else if !self.values.is_empty() {
            // A trailing separator opened an empty slot.
            self.values.push(0);
        }

        &self.values
    }

    fn clear(&mut self) {
        self.values.clear();
        self.current = None;
    }
}

#[derive(Debug, Default)]
struct OscState {
    param: u16,
    payload: String,
    overflow: bool,
}

impl OscState {
    fn accumulate(&mut self, byte: u8) {
        let digit = u16::from(byte - b'0');
        self.param = self.param.saturating_mul(10).saturating_add(digit);
    }

    fn put(&mut self, ch: char) {
        if self.payload.len() >= MAX_OSC_PAYLOAD {
            self.overflow = true;
        } else {
            self.payload.push(ch);
        }
    }

    fn clear(&mut self) {
        self.param = 0;
        self.payload.clear();
        self.overflow = false;
    }
}

/// The output-side VT state machine.
///
/// Bytes go in through [`advance`](Parser::advance); recognized sequences
/// come out as [`Engine`] actions. The machine retains partial-sequence
/// state between chunks, so input may be split at arbitrary byte
/// boundaries (including inside an escape sequence, an OSC payload, or a
/// multi-byte UTF-8 scalar).
///
/// Contiguous printable output is batched and delivered through
/// `print_string`; batching never reorders output around control
/// characters.
pub struct Parser {
    state: State,
    ansi_mode: bool,
    vtid: VtIdBuilder,
    params: Params,
    osc: OscState,
    vt52_params: Vec<u16>,
    print_run: String,
    trace: SequenceTrace,
    utf8: Utf8Collector,
    utf8_return: Option<State>,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            state: State::Ground,
            ansi_mode: true,
            vtid: VtIdBuilder::default(),
            params: Params::default(),
            osc: OscState::default(),
            vt52_params: Vec::new(),
            print_run: String::new(),
            trace: SequenceTrace::new(),
            utf8: Utf8Collector::default(),
            utf8_return: None,
        }
    }
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the raw text of the in-flight sequence. Engines that
    /// forward unrecognized sequences to a downstream terminal keep a clone
    /// of this to re-serialize the sequence prefix.
    #[must_use]
    pub fn sequence_trace(&self) -> SequenceTrace {
        self.trace.clone()
    }

    /// Switches between ANSI and VT52 interpretation of escape sequences.
    /// The host flips this when the dispatch target processes DECANM.
    pub fn set_ansi_mode(&mut self, enabled: bool) {
        self.ansi_mode = enabled;
    }

    /// Advances the machine with a new chunk of bytes.
    pub fn advance<E: Engine>(&mut self, bytes: &[u8], engine: &mut E) {
        for &byte in bytes {
            self.process_byte(byte, engine);
        }

        self.flush_print_run(engine);

        if engine.flush_at_end_of_string() {
            self.flush_partial_string(engine);
        }
    }

    fn process_byte<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        if let Some(return_state) = self.utf8_return {
            if let Some(ch) = self.utf8.advance(byte) {
                self.utf8_return = None;
                match return_state {
                    State::OscString => {
                        self.trace.push(ch);
                        self.osc.put(ch);
                    },
                    _ => self.print_run.push(ch),
                }
            }
            return;
        }

        match self.state {
            State::Ground => self.event_ground(byte, engine),
            State::Escape => self.event_escape(byte, engine),
            State::EscapeIntermediate => {
                self.event_escape_intermediate(byte, engine)
            },
            State::CsiEntry => self.event_csi_entry(byte, engine),
            State::CsiParam => self.event_csi_param(byte, engine),
            State::CsiIntermediate => self.event_csi_intermediate(byte, engine),
            State::CsiIgnore => self.event_csi_ignore(byte, engine),
            State::OscParam => self.event_osc_param(byte, engine),
            State::OscString => self.event_osc_string(byte, engine),
            State::OscTermination => self.event_osc_termination(byte, engine),
            State::Ss3Entry => self.event_ss3_entry(byte, engine),
            State::Ss3Param => self.event_ss3_param(byte, engine),
            State::DcsEntry => self.event_dcs_entry(byte, engine),
            State::DcsParam => self.event_dcs_param(byte, engine),
            State::DcsIntermediate => self.event_dcs_intermediate(byte, engine),
            State::DcsPassThrough => self.event_dcs_pass_through(byte, engine),
            State::DcsIgnore => self.event_dcs_ignore(byte, engine),
            State::Vt52Param => self.event_vt52_param(byte, engine),
        }
    }

    fn event_ground<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        match byte {
            0x1b => self.enter_escape(engine),
            0x00..=0x1a | 0x1c..=0x1f => {
                self.flush_print_run(engine);
                self.trace.restart(char::from(byte));
                engine.execute(char::from(byte));
            },
            0x20..=0x7f => self.print_run.push(char::from(byte)),
            0xc2..=0xf4 => self.start_utf8(byte, State::Ground),
            _ => self.anywhere(byte, engine),
        }
    }

    fn event_escape<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        if !self.ansi_mode {
            return self.event_escape_vt52(byte, engine);
        }

        match byte {
            0x00..=0x17 | 0x19 | 0x1c..=0x1f => {
                self.trace.push(char::from(byte));
                engine.execute_from_escape(char::from(byte));
                if engine.dispatch_control_chars_from_escape() {
                    self.state = State::Ground;
                }
            },
            0x18 | 0x1a => self.cancel(byte, engine),
            0x1b => self.enter_escape(engine),
            0x7f => {
                engine.ignore();
            },
            0x5b => {
                self.trace.push('[');
                self.state = State::CsiEntry;
            },
            0x5d => {
                self.trace.push(']');
                self.state = State::OscParam;
            },
            0x50 => {
                self.trace.push('P');
                self.state = State::DcsEntry;
            },
            0x4f if engine.parse_control_sequence_after_ss3() => {
                self.trace.push('O');
                self.state = State::Ss3Entry;
            },
            0x20..=0x2f => {
                self.trace.push(char::from(byte));
                if engine.dispatch_intermediates_from_escape() {
                    let id = self.vtid.finalize(char::from(byte));
                    engine.esc_dispatch(id);
                    self.state = State::Ground;
                } else {
                    self.vtid.add_intermediate(char::from(byte));
                    self.state = State::EscapeIntermediate;
                }
            },
            0x30..=0x7e => {
                self.trace.push(char::from(byte));
                let id = self.vtid.finalize(char::from(byte));
                engine.esc_dispatch(id);
                self.state = State::Ground;
            },
            _ => self.anywhere(byte, engine),
        }
    }

    fn event_escape_vt52<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        match byte {
            0x00..=0x17 | 0x19 | 0x1c..=0x1f => {
                self.trace.push(char::from(byte));
                engine.execute_from_escape(char::from(byte));
                if engine.dispatch_control_chars_from_escape() {
                    self.state = State::Ground;
                }
            },
            0x18 | 0x1a => self.cancel(byte, engine),
            0x1b => self.enter_escape(engine),
            0x7f => {
                engine.ignore();
            },
            b'Y' => {
                self.trace.push('Y');
                self.vt52_params.clear();
                self.state = State::Vt52Param;
            },
            0x20..=0x7e => {
                self.trace.push(char::from(byte));
                let id = self.vtid.finalize(char::from(byte));
                engine.vt52_esc_dispatch(id, &[]);
                self.state = State::Ground;
            },
            _ => self.anywhere(byte, engine),
        }
    }

    fn event_vt52_param<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        match byte {
            0x00..=0x17 | 0x19 | 0x1c..=0x1f => {
                self.trace.push(char::from(byte));
                engine.execute(char::from(byte));
            },
            0x18 | 0x1a => self.cancel(byte, engine),
            0x1b => self.enter_escape(engine),
            0x20..=0x7f => {
                self.trace.push(char::from(byte));
                self.vt52_params.push(u16::from(byte));
                if self.vt52_params.len() == 2 {
                    engine
                        .vt52_esc_dispatch(VT52_DIRECT_ADDRESS, &self.vt52_params);
                    self.state = State::Ground;
                }
            },
            _ => self.anywhere(byte, engine),
        }
    }

    fn event_escape_intermediate<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        match byte {
            0x00..=0x17 | 0x19 | 0x1c..=0x1f => {
                self.trace.push(char::from(byte));
                engine.execute(char::from(byte));
            },
            0x18 | 0x1a => self.cancel(byte, engine),
            0x1b => self.enter_escape(engine),
            0x20..=0x2f => {
                self.trace.push(char::from(byte));
                self.vtid.add_intermediate(char::from(byte));
            },
            0x7f => {
                engine.ignore();
            },
            0x30..=0x7e => {
                self.trace.push(char::from(byte));
                let id = self.vtid.finalize(char::from(byte));
                engine.esc_dispatch(id);
                self.state = State::Ground;
            },
            _ => self.anywhere(byte, engine),
        }
    }

    fn event_csi_entry<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        match byte {
            0x00..=0x17 | 0x19 | 0x1c..=0x1f => {
                self.trace.push(char::from(byte));
                engine.execute(char::from(byte));
            },
            0x18 | 0x1a => self.cancel(byte, engine),
            0x1b => self.enter_escape(engine),
            0x7f => {
                engine.ignore();
            },
            0x20..=0x2f => {
                self.trace.push(char::from(byte));
                self.vtid.add_intermediate(char::from(byte));
                self.state = State::CsiIntermediate;
            },
            0x3a => {
                self.trace.push(':');
                self.state = State::CsiIgnore;
            },
            0x30..=0x39 | 0x3b => {
                self.collect_param(byte);
                self.state = State::CsiParam;
            },
            // Private markers such as the `?` of DECSET qualify the whole
            // sequence and become part of its id.
            0x3c..=0x3f => {
                self.trace.push(char::from(byte));
                self.vtid.add_intermediate(char::from(byte));
                self.state = State::CsiParam;
            },
            0x40..=0x7e => self.dispatch_csi(byte, engine),
            _ => self.anywhere(byte, engine),
        }
    }

    fn event_csi_param<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        match byte {
            0x00..=0x17 | 0x19 | 0x1c..=0x1f => {
                self.trace.push(char::from(byte));
                engine.execute(char::from(byte));
            },
            0x18 | 0x1a => self.cancel(byte, engine),
            0x1b => self.enter_escape(engine),
            0x7f => {
                engine.ignore();
            },
            0x30..=0x39 | 0x3b => self.collect_param(byte),
            0x3a | 0x3c..=0x3f => {
                self.trace.push(char::from(byte));
                self.state = State::CsiIgnore;
            },
            0x20..=0x2f => {
                self.trace.push(char::from(byte));
                self.vtid.add_intermediate(char::from(byte));
                self.state = State::CsiIntermediate;
            },
            0x40..=0x7e => self.dispatch_csi(byte, engine),
            _ => self.anywhere(byte, engine),
        }
    }

    fn event_csi_intermediate<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        match byte {
            0x00..=0x17 | 0x19 | 0x1c..=0x1f => {
                self.trace.push(char::from(byte));
                engine.execute(char::from(byte));
            },
            0x18 | 0x1a => self.cancel(byte, engine),
            0x1b => self.enter_escape(engine),
            0x7f => {
                engine.ignore();
            },
            0x20..=0x2f => {
                self.trace.push(char::from(byte));
                self.vtid.add_intermediate(char::from(byte));
            },
            0x30..=0x3f => {
                self.trace.push(char::from(byte));
                self.state = State::CsiIgnore;
            },
            0x40..=0x7e => self.dispatch_csi(byte, engine),
            _ => self.anywhere(byte, engine),
        }
    }

    fn event_csi_ignore<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        match byte {
            0x00..=0x17 | 0x19 | 0x1c..=0x1f => {
                self.trace.push(char::from(byte));
                engine.execute(char::from(byte));
            },
            0x18 | 0x1a => self.cancel(byte, engine),
            0x1b => self.enter_escape(engine),
            0x20..=0x3f | 0x7f => {
                engine.ignore();
            },
            0x40..=0x7e => {
                engine.ignore();
                self.state = State::Ground;
            },
            _ => self.anywhere(byte, engine),
        }
    }

    fn event_osc_param<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        match byte {
            0x30..=0x39 => {
                self.trace.push(char::from(byte));
                self.osc.accumulate(byte);
            },
            0x3b => {
                self.trace.push(';');
                self.state = State::OscString;
            },
            0x07 => {
                self.trace.push('\x07');
                self.dispatch_osc('\x07', engine);
            },
            0x1b => {
                self.trace.push('\x1b');
                self.state = State::OscTermination;
            },
            0x18 | 0x1a => self.cancel(byte, engine),
            0x9c => self.dispatch_osc('\u{9c}', engine),
            0x00..=0x06 | 0x08..=0x17 | 0x19 | 0x1c..=0x1f => {
                engine.ignore();
            },
            0x20..=0x7f => {
                engine.ignore();
            },
            _ => self.anywhere(byte, engine),
        }
    }

    fn event_osc_string<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        match byte {
            0x07 => {
                self.trace.push('\x07');
                self.dispatch_osc('\x07', engine);
            },
            0x1b => {
                self.trace.push('\x1b');
                self.state = State::OscTermination;
            },
            0x18 | 0x1a => self.cancel(byte, engine),
            0x00..=0x06 | 0x08..=0x17 | 0x19 | 0x1c..=0x1f => {
                engine.ignore();
            },
            0x20..=0x7f => {
                self.trace.push(char::from(byte));
                self.osc.put(char::from(byte));
            },
            0xc2..=0xf4 => self.start_utf8(byte, State::OscString),
            0x9c => self.dispatch_osc('\u{9c}', engine),
            _ => self.anywhere(byte, engine),
        }
    }

    fn event_osc_termination<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        if byte == b'\\' {
            self.trace.push('\\');
            self.dispatch_osc('\\', engine);
        } else {
            // The ESC broke out of the string; the payload is abandoned and
            // the byte is reinterpreted as the start of a fresh escape.
            self.enter_escape(engine);
            self.event_escape(byte, engine);
        }
    }

    fn event_ss3_entry<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        match byte {
            0x00..=0x17 | 0x19 | 0x1c..=0x1f => {
                self.trace.push(char::from(byte));
                engine.execute(char::from(byte));
            },
            0x18 | 0x1a => self.cancel(byte, engine),
            0x1b => self.enter_escape(engine),
            0x7f => {
                engine.ignore();
            },
            0x30..=0x39 | 0x3b => {
                self.collect_param(byte);
                self.state = State::Ss3Param;
            },
            0x20..=0x2f | 0x3a | 0x3c..=0x3f => {
                self.trace.push(char::from(byte));
                self.state = State::CsiIgnore;
            },
            0x40..=0x7e => self.dispatch_ss3(byte, engine),
            _ => self.anywhere(byte, engine),
        }
    }

    fn event_ss3_param<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        match byte {
            0x00..=0x17 | 0x19 | 0x1c..=0x1f => {
                self.trace.push(char::from(byte));
                engine.execute(char::from(byte));
            },
            0x18 | 0x1a => self.cancel(byte, engine),
            0x1b => self.enter_escape(engine),
            0x7f => {
                engine.ignore();
            },
            0x30..=0x39 | 0x3b => self.collect_param(byte),
            0x20..=0x2f | 0x3a | 0x3c..=0x3f => {
                self.trace.push(char::from(byte));
                self.state = State::CsiIgnore;
            },
            0x40..=0x7e => self.dispatch_ss3(byte, engine),
            _ => self.anywhere(byte, engine),
        }
    }

    fn event_dcs_entry<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        match byte {
            0x18 | 0x1a => self.cancel(byte, engine),
            0x1b => self.enter_escape(engine),
            0x00..=0x17 | 0x19 | 0x1c..=0x1f | 0x7f => {
                engine.ignore();
            },
            0x3a => {
                self.trace.push(':');
                self.state = State::DcsIgnore;
            },
            0x20..=0x2f => {
                self.trace.push(char::from(byte));
                self.state = State::DcsIntermediate;
            },
            0x30..=0x3f => {
                self.trace.push(char::from(byte));
                self.state = State::DcsParam;
            },
            0x40..=0x7e => {
                self.trace.push(char::from(byte));
                self.state = State::DcsPassThrough;
            },
            _ => self.anywhere(byte, engine),
        }
    }

    fn event_dcs_param<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        match byte {
            0x18 | 0x1a => self.cancel(byte, engine),
            0x1b => self.enter_escape(engine),
            0x00..=0x17 | 0x19 | 0x1c..=0x1f | 0x7f => {
                engine.ignore();
            },
            0x30..=0x39 | 0x3b => {
                self.trace.push(char::from(byte));
            },
            0x3a | 0x3c..=0x3f => {
                self.trace.push(char::from(byte));
                self.state = State::DcsIgnore;
            },
            0x20..=0x2f => {
                self.trace.push(char::from(byte));
                self.state = State::DcsIntermediate;
            },
            0x40..=0x7e => {
                self.trace.push(char::from(byte));
                self.state = State::DcsPassThrough;
            },
            _ => self.anywhere(byte, engine),
        }
    }

    fn event_dcs_intermediate<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        match byte {
            0x18 | 0x1a => self.cancel(byte, engine),
            0x1b => self.enter_escape(engine),
            0x00..=0x17 | 0x19 | 0x1c..=0x1f | 0x7f => {
                engine.ignore();
            },
            0x20..=0x2f => {
                self.trace.push(char::from(byte));
            },
            0x30..=0x3f => {
                self.trace.push(char::from(byte));
                self.state = State::DcsIgnore;
            },
            0x40..=0x7e => {
                self.trace.push(char::from(byte));
                self.state = State::DcsPassThrough;
            },
            _ => self.anywhere(byte, engine),
        }
    }

    fn event_dcs_pass_through<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        match byte {
            0x9c => {
                engine.ignore();
                self.state = State::Ground;
            },
            0x1b => self.enter_escape(engine),
            0x18 | 0x1a => self.cancel(byte, engine),
            _ => {
                // No DCS actions exist on the output side; the payload is
                // swallowed.
                engine.ignore();
            },
        }
    }

    fn event_dcs_ignore<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        match byte {
            0x9c => {
                engine.ignore();
                self.state = State::Ground;
            },
            0x1b => self.enter_escape(engine),
            0x18 | 0x1a => self.cancel(byte, engine),
            _ => {
                engine.ignore();
            },
        }
    }

    /// C1 controls and stray bytes that behave the same from every state.
    fn anywhere<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        match byte {
            0x80..=0x8f | 0x91..=0x9a | 0x9e | 0x9f => {
                self.flush_print_run(engine);
                self.trace.restart(char::from(byte));
                engine.execute(char::from(byte));
                self.state = State::Ground;
            },
            0x9b => {
                self.enter_sequence(State::CsiEntry, char::from(byte), engine);
            },
            0x9d => {
                self.enter_sequence(State::OscParam, char::from(byte), engine);
            },
            0x90 => {
                self.enter_sequence(State::DcsEntry, char::from(byte), engine);
            },
            0x9c => {
                engine.ignore();
                self.state = State::Ground;
            },
            _ => {
                // Bytes with no classification (stray UTF-8 continuations
                // and unassigned C1 range) are dropped.
                engine.ignore();
            },
        }
    }

    fn enter_escape<E: Engine>(&mut self, engine: &mut E) {
        self.enter_sequence(State::Escape, '\x1b', engine);
    }

    fn enter_sequence<E: Engine>(
        &mut self,
        state: State,
        introducer: char,
        engine: &mut E,
    ) {
        self.flush_print_run(engine);
        self.trace.restart(introducer);
        self.reset_collect(engine);
        self.state = state;
    }

    fn reset_collect<E: Engine>(&mut self, engine: &mut E) {
        self.vtid.clear();
        self.params.clear();
        self.osc.clear();
        self.vt52_params.clear();
        engine.clear();
    }

    fn cancel<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        self.flush_print_run(engine);
        self.trace.restart(char::from(byte));
        engine.execute(char::from(byte));
        self.state = State::Ground;
    }

    fn collect_param(&mut self, byte: u8) {
        self.trace.push(char::from(byte));
        if byte == b';' {
            self.params.separator();
        } else {
            self.params.accumulate(byte);
        }
    }

    fn dispatch_csi<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        self.trace.push(char::from(byte));
        let id = self.vtid.finalize(char::from(byte));
        let params = self.params.finish();
        engine.csi_dispatch(id, params);
        self.state = State::Ground;
    }

    fn dispatch_ss3<E: Engine>(&mut self, byte: u8, engine: &mut E) {
        self.trace.push(char::from(byte));
        let params = self.params.finish();
        engine.ss3_dispatch(char::from(byte), params);
        self.state = State::Ground;
    }

    fn dispatch_osc<E: Engine>(&mut self, terminator: char, engine: &mut E) {
        if self.osc.overflow {
            engine.ignore();
        } else {
            engine.osc_dispatch(terminator, self.osc.param, &self.osc.payload);
        }
        self.state = State::Ground;
    }

    fn flush_print_run<E: Engine>(&mut self, engine: &mut E) {
        let mut chars = self.print_run.chars();
        match (chars.next(), chars.next()) {
            (None, _) => return,
            (Some(only), None) => {
                engine.print(only);
            },
            _ => {
                engine.print_string(&self.print_run);
            },
        }
        self.print_run.clear();
    }

    fn flush_partial_string<E: Engine>(&mut self, engine: &mut E) {
        if matches!(self.state, State::OscParam | State::OscString) {
            self.dispatch_osc('\u{9c}', engine);
        }
    }

    fn start_utf8(&mut self, byte: u8, return_state: State) {
        self.utf8_return = Some(return_state);
        self.utf8.advance(byte);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum Event {
        Print(char),
        PrintString(String),
        Execute(char),
        ExecuteFromEscape(char),
        Esc(VtId),
        Vt52(VtId, Vec<u16>),
        Csi(VtId, Vec<u16>),
        Osc {
            terminator: char,
            param: u16,
            payload: String,
        },
        Ss3(char, Vec<u16>),
    }

    #[derive(Default)]
    struct CollectingEngine {
        events: Vec<Event>,
        parse_after_ss3: bool,
    }

    impl Engine for CollectingEngine {
        fn execute(&mut self, ch: char) -> bool {
            self.events.push(Event::Execute(ch));
            true
        }

        fn execute_from_escape(&mut self, ch: char) -> bool {
            self.events.push(Event::ExecuteFromEscape(ch));
            true
        }

        fn print(&mut self, ch: char) -> bool {
            self.events.push(Event::Print(ch));
            true
        }

        fn print_string(&mut self, text: &str) -> bool {
            self.events.push(Event::PrintString(text.to_string()));
            true
        }

        fn pass_through_string(&mut self, _text: &str) -> bool {
            true
        }

        fn esc_dispatch(&mut self, id: VtId) -> bool {
            self.events.push(Event::Esc(id));
            true
        }

        fn vt52_esc_dispatch(&mut self, id: VtId, params: &[u16]) -> bool {
            self.events.push(Event::Vt52(id, params.to_vec()));
            true
        }

        fn csi_dispatch(&mut self, id: VtId, params: &[u16]) -> bool {
            self.events.push(Event::Csi(id, params.to_vec()));
            true
        }

        fn osc_dispatch(
            &mut self,
            terminator: char,
            param: u16,
            payload: &str,
        ) -> bool {
            self.events.push(Event::Osc {
                terminator,
                param,
                payload: payload.to_string(),
            });
            true
        }

        fn ss3_dispatch(&mut self, final_byte: char, params: &[u16]) -> bool {
            self.events.push(Event::Ss3(final_byte, params.to_vec()));
            true
        }

        fn parse_control_sequence_after_ss3(&self) -> bool {
            self.parse_after_ss3
        }
    }

    fn parse(bytes: &[u8]) -> Vec<Event> {
        let mut parser = Parser::new();
        let mut engine = CollectingEngine::default();
        parser.advance(bytes, &mut engine);
        engine.events
    }

    #[test]
    fn batches_printable_runs() {
        assert_eq!(
            parse(b"test\x07\x1b[32mmy\x1b[0mx"),
            vec![
                Event::PrintString("test".to_string()),
                Event::Execute('\x07'),
                Event::Csi(VtId::of("m"), vec![32]),
                Event::PrintString("my".to_string()),
                Event::Csi(VtId::of("m"), vec![0]),
                Event::Print('x'),
            ]
        );
    }

    #[test]
    fn single_char_goes_through_print() {
        assert_eq!(parse(b"a"), vec![Event::Print('a')]);
    }

    #[test]
    fn utf8_joins_print_run() {
        assert_eq!(
            parse("Привет!".as_bytes()),
            vec![Event::PrintString("Привет!".to_string())]
        );
    }

    #[test]
    fn csi_with_omitted_params() {
        assert_eq!(
            parse(b"\x1b[;5H"),
            vec![Event::Csi(VtId::of("H"), vec![0, 5])]
        );
        assert_eq!(parse(b"\x1b[H"), vec![Event::Csi(VtId::of("H"), vec![])]);
        assert_eq!(
            parse(b"\x1b[3;r"),
            vec![Event::Csi(VtId::of("r"), vec![3, 0])]
        );
    }

    #[test]
    fn csi_private_marker_is_part_of_the_id() {
        assert_eq!(
            parse(b"\x1b[?25h"),
            vec![Event::Csi(VtId::of("?h"), vec![25])]
        );
        assert_eq!(
            parse(b"\x1b[?1049l"),
            vec![Event::Csi(VtId::of("?l"), vec![1049])]
        );
    }

    #[test]
    fn csi_intermediates_are_part_of_the_id() {
        assert_eq!(
            parse(b"\x1b[2 q"),
            vec![Event::Csi(VtId::of(" q"), vec![2])]
        );
        assert_eq!(parse(b"\x1b[!p"), vec![Event::Csi(VtId::of("!p"), vec![])]);
    }

    #[test]
    fn csi_accepts_more_than_sixteen_params() {
        let input = format!(
            "\x1b[{}m",
            (1..=20).map(|n| n.to_string()).collect::<Vec<_>>().join(";")
        );
        assert_eq!(
            parse(input.as_bytes()),
            vec![Event::Csi(VtId::of("m"), (1..=20).collect())]
        );
    }

    #[test]
    fn param_overflow_clamps_to_sixteen_bits() {
        assert_eq!(
            parse(b"\x1b[99999d"),
            vec![Event::Csi(VtId::of("d"), vec![u16::MAX])]
        );
    }

    #[test]
    fn colon_sends_csi_to_ignore() {
        assert_eq!(parse(b"\x1b[4:3m"), vec![]);
        // The machine recovers at the final byte.
        assert_eq!(parse(b"\x1b[4:3mz"), vec![Event::Print('z')]);
    }

    #[test]
    fn eight_bit_csi_introducer() {
        assert_eq!(
            parse(b"\x9b31m"),
            vec![Event::Csi(VtId::of("m"), vec![31])]
        );
    }

    #[test]
    fn cancel_aborts_a_sequence() {
        assert_eq!(
            parse(b"\x1b[3\x18m"),
            vec![Event::Execute('\x18'), Event::Print('m')]
        );
    }

    #[test]
    fn esc_with_intermediate() {
        assert_eq!(parse(b"\x1b(B"), vec![Event::Esc(VtId::of("(B"))]);
        assert_eq!(parse(b"\x1b#8"), vec![Event::Esc(VtId::of("#8"))]);
    }

    #[test]
    fn controls_from_escape_keep_the_sequence_alive() {
        assert_eq!(
            parse(b"\x1b\x07c"),
            vec![
                Event::ExecuteFromEscape('\x07'),
                Event::Esc(VtId::of("c")),
            ]
        );
    }

    #[test]
    fn lone_esc_survives_chunk_boundaries() {
        let mut parser = Parser::new();
        let mut engine = CollectingEngine::default();
        parser.advance(b"\x1b", &mut engine);
        assert_eq!(engine.events, vec![]);
        parser.advance(b"c", &mut engine);
        assert_eq!(engine.events, vec![Event::Esc(VtId::of("c"))]);
    }

    #[test]
    fn osc_with_bel_terminator() {
        assert_eq!(
            parse(b"\x1b]0;hello\x07"),
            vec![Event::Osc {
                terminator: '\x07',
                param: 0,
                payload: "hello".to_string(),
            }]
        );
    }

    #[test]
    fn osc_with_st_terminator() {
        assert_eq!(
            parse(b"\x1b]2;there\x1b\\"),
            vec![Event::Osc {
                terminator: '\\',
                param: 2,
                payload: "there".to_string(),
            }]
        );
        assert_eq!(
            parse(b"\x1b]2;there\x9c"),
            vec![Event::Osc {
                terminator: '\u{9c}',
                param: 2,
                payload: "there".to_string(),
            }]
        );
    }

    #[test]
    fn osc_payload_reassembles_across_chunks() {
        let mut parser = Parser::new();
        let mut engine = CollectingEngine::default();
        parser.advance(b"\x1b]0;he", &mut engine);
        assert_eq!(engine.events, vec![]);
        parser.advance(b"llo\x07", &mut engine);
        assert_eq!(
            engine.events,
            vec![Event::Osc {
                terminator: '\x07',
                param: 0,
                payload: "hello".to_string(),
            }]
        );
    }

    #[test]
    fn osc_payload_accepts_utf8() {
        assert_eq!(
            parse("\x1b]0;п—т\x07".as_bytes()),
            vec![Event::Osc {
                terminator: '\x07',
                param: 0,
                payload: "п—т".to_string(),
            }]
        );
    }

    #[test]
    fn osc_interrupted_by_escape_is_abandoned() {
        assert_eq!(
            parse(b"\x1b]0;gone\x1b[31m"),
            vec![Event::Csi(VtId::of("m"), vec![31])]
        );
    }

    #[test]
    fn overlong_osc_payload_is_discarded() {
        let mut input = b"\x1b]0;".to_vec();
        input.extend(std::iter::repeat(b'x').take(MAX_OSC_PAYLOAD + 16));
        input.push(0x07);
        assert_eq!(parse(&input), vec![]);
    }

    #[test]
    fn nul_reaches_execute_without_buffer_effect() {
        assert_eq!(
            parse(b"a\x00b"),
            vec![
                Event::Print('a'),
                Event::Execute('\0'),
                Event::Print('b'),
            ]
        );
    }

    #[test]
    fn ss3_dispatches_as_plain_escape_by_default() {
        assert_eq!(
            parse(b"\x1bOP"),
            vec![Event::Esc(VtId::of("O")), Event::Print('P')]
        );
    }

    #[test]
    fn ss3_collects_params_when_the_engine_asks() {
        let mut parser = Parser::new();
        let mut engine = CollectingEngine {
            parse_after_ss3: true,
            ..Default::default()
        };
        parser.advance(b"\x1bO5P", &mut engine);
        assert_eq!(engine.events, vec![Event::Ss3('P', vec![5])]);
    }

    #[test]
    fn dcs_payload_is_swallowed() {
        assert_eq!(parse(b"\x1bPqhello\x1b\\"), vec![Event::Esc(VtId::of("\\"))]);
        assert_eq!(parse(b"\x1bP1;2qdata\x9cz"), vec![Event::Print('z')]);
    }

    #[test]
    fn vt52_mode_dispatches_single_letter_sequences() {
        let mut parser = Parser::new();
        let mut engine = CollectingEngine::default();
        parser.set_ansi_mode(false);
        parser.advance(b"\x1bA\x1bH\x1b<", &mut engine);
        assert_eq!(
            engine.events,
            vec![
                Event::Vt52(VtId::of("A"), vec![]),
                Event::Vt52(VtId::of("H"), vec![]),
                Event::Vt52(VtId::of("<"), vec![]),
            ]
        );
    }

    #[test]
    fn vt52_direct_cursor_address_collects_two_chars() {
        let mut parser = Parser::new();
        let mut engine = CollectingEngine::default();
        parser.set_ansi_mode(false);
        parser.advance(b"\x1bY#&", &mut engine);
        assert_eq!(
            engine.events,
            vec![Event::Vt52(VtId::of("Y"), vec![0x23, 0x26])]
        );
    }

    #[test]
    fn trace_holds_the_raw_sequence_text() {
        let mut parser = Parser::new();
        let trace = parser.sequence_trace();
        let mut engine = CollectingEngine::default();
        parser.advance(b"\x1b[3;5H", &mut engine);
        assert_eq!(trace.snapshot(), "\x1b[3;5H");

        parser.advance(b"\x1b]0;t\x07", &mut engine);
        assert_eq!(trace.snapshot(), "\x1b]0;t\x07");
    }

    #[test]
    fn print_run_order_is_preserved_around_controls() {
        assert_eq!(
            parse(b"ab\ncd"),
            vec![
                Event::PrintString("ab".to_string()),
                Event::Execute('\n'),
                Event::PrintString("cd".to_string()),
            ]
        );
    }
}
