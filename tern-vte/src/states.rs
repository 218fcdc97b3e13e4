/// Position in the state machine's control flow.
///
/// The set mirrors the DEC/ECMA-48 output grammar: ground text handling,
/// plain escape sequences, control sequences (CSI), operating system
/// commands (OSC), device control strings (DCS), SS3 sequences, and VT52
/// legacy addressing. Transitions are driven purely by the classification
/// of the current input byte; there is no terminal state.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    /// Steady-state text flow. Printable bytes (`0x20..=0x7F`) join the
    /// current print run, C0 controls execute immediately, and introducer
    /// bytes open the structured sequence states.
    #[default]
    Ground,
    /// Entered on `ESC` (0x1B). The next byte selects the sequence family:
    /// `[` CSI, `]` OSC, `P` DCS, an intermediate, or a final byte that
    /// dispatches directly. In VT52 mode this state instead recognizes the
    /// single-letter VT52 repertoire.
    Escape,
    /// Collecting intermediates (`0x20..=0x2F`) of a plain escape sequence,
    /// e.g. the `(` of `ESC ( B`. A final byte (`0x30..=0x7E`) dispatches.
    EscapeIntermediate,
    /// Just after the CSI introducer. Private-parameter markers
    /// (`0x3C..=0x3F`, e.g. the `?` of DECSET) are folded into the sequence
    /// id here.
    CsiEntry,
    /// Accumulating semicolon-separated decimal parameters.
    CsiParam,
    /// Collecting intermediates after the parameters, e.g. the space of
    /// `CSI Ps SP q` (DECSCUSR).
    CsiIntermediate,
    /// Error recovery: a malformed CSI body is swallowed up to its final
    /// byte, then the machine returns to ground without dispatching.
    CsiIgnore,
    /// Accumulating the numeric parameter of an OSC introducer.
    OscParam,
    /// Accumulating the OSC string payload until BEL or ST.
    OscString,
    /// Saw `ESC` inside an OSC string; a following `\` completes the ST
    /// terminator and dispatches, anything else abandons the string and is
    /// reprocessed as a fresh escape.
    OscTermination,
    /// Just after `ESC O` when the engine asks for parameterized SS3
    /// parsing.
    Ss3Entry,
    /// Accumulating SS3 parameters.
    Ss3Param,
    /// DCS introducer seen. The output engine defines no DCS actions, so
    /// the whole family only tracks the grammar and swallows its payload.
    DcsEntry,
    /// DCS parameter bytes.
    DcsParam,
    /// DCS intermediates.
    DcsIntermediate,
    /// DCS payload, consumed without dispatch until ST.
    DcsPassThrough,
    /// Malformed DCS, swallowed until ST.
    DcsIgnore,
    /// Collecting the two raw position characters of VT52 direct cursor
    /// addressing (`ESC Y <row> <col>`).
    Vt52Param,
}
