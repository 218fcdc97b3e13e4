use std::io;

/// Write-only sink for sequences forwarded verbatim to a downstream
/// terminal when the engine is acting as a pass-through for a PTY pipe.
///
/// The connection is supplied by the host together with a
/// [`SequenceTrace`](tern_vte::SequenceTrace) handle; the host guarantees
/// it outlives the engine.
pub trait OutputConnection {
    fn write_terminal(&mut self, text: &str) -> io::Result<()>;
}
