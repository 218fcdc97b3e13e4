//! Actions emitted by the output state machine.
//!
//! The [`Parser`](crate::Parser) walks through a byte stream, classifies
//! every byte, and on recognition of a complete sequence invokes exactly one
//! action on the attached [`Engine`]. The engine is responsible for
//! validating parameters, translating sequence identifiers into semantic
//! operations, and deciding what to do with input it does not understand.
//! The action set mirrors the DEC VT / xterm output grammar: plain escape
//! sequences, CSI control sequences, OSC strings, VT52 legacy sequences, and
//! immediately executed control characters.

use crate::vtid::VtId;

/// Receiver for the actions recognized by the state machine.
///
/// Every action returns `true` when it was handled. The parser itself does
/// not act on the result; engines use it internally to drive their
/// pass-through fallback.
///
/// Parameters are unsigned integers produced from a semicolon-separated
/// decimal run. An omitted parameter arrives as 0, which stands for the
/// default value of its position. Values are clamped at `u16::MAX`.
pub trait Engine {
    /// Responds to a control character encountered outside a sequence.
    fn execute(&mut self, ch: char) -> bool;

    /// Responds to a control character encountered while a plain escape
    /// sequence is being collected. The contract is identical to
    /// [`execute`](Engine::execute); the entry points are kept separate so
    /// implementations may diverge.
    fn execute_from_escape(&mut self, ch: char) -> bool;

    /// Renders a single printable character.
    fn print(&mut self, ch: char) -> bool;

    /// Renders a run of contiguous printable characters.
    fn print_string(&mut self, text: &str) -> bool;

    /// Delivers raw sequence text to a downstream terminal, when one is
    /// attached.
    fn pass_through_string(&mut self, text: &str) -> bool;

    /// Handles a complete plain escape sequence (`ESC`, optional
    /// intermediates, final byte).
    fn esc_dispatch(&mut self, id: VtId) -> bool;

    /// Handles a complete VT52 escape sequence. `params` carries the raw
    /// position characters of direct cursor addressing and is otherwise
    /// empty.
    fn vt52_esc_dispatch(&mut self, id: VtId, params: &[u16]) -> bool;

    /// Handles a complete control sequence (`CSI`, parameters, optional
    /// intermediates, final byte).
    fn csi_dispatch(&mut self, id: VtId, params: &[u16]) -> bool;

    /// Handles a complete operating system command. `terminator` is the
    /// character that ended the string (BEL or ST).
    fn osc_dispatch(&mut self, terminator: char, param: u16, payload: &str) -> bool;

    /// Handles a complete SS3 control sequence.
    fn ss3_dispatch(&mut self, final_byte: char, params: &[u16]) -> bool;

    /// The machine reset its accumulated sequence state.
    fn clear(&mut self) -> bool {
        true
    }

    /// A byte was consumed without any observable effect.
    fn ignore(&mut self) -> bool {
        true
    }

    /// Whether `ESC O` should open a parameterized SS3 sequence instead of
    /// dispatching immediately on its final byte.
    fn parse_control_sequence_after_ss3(&self) -> bool {
        false
    }

    /// Whether a string sequence still being collected at the end of an
    /// input chunk should be dispatched as-is instead of persisting across
    /// chunks.
    fn flush_at_end_of_string(&self) -> bool {
        false
    }

    /// Whether a control character executed from the `Escape` state should
    /// abandon the sequence and return the machine to ground.
    fn dispatch_control_chars_from_escape(&self) -> bool {
        false
    }

    /// Whether intermediates in the `Escape` state should dispatch on their
    /// own instead of being buffered. Buffering is required for charset
    /// designations such as `ESC ( B`.
    fn dispatch_intermediates_from_escape(&self) -> bool {
        false
    }
}
