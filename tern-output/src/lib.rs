//! Output-side interpretation of the DEC VT / xterm escape repertoire.
//!
//! [`OutputEngine`] plugs into a [`Parser`](tern_vte::Parser) and turns the
//! recognized sequences into calls on a host-supplied [`TermDispatch`]
//! target:
//!
//! ```
//! use tern_output::{NoopDispatch, OutputEngine};
//! use tern_vte::Parser;
//!
//! let mut parser = Parser::new();
//! let mut engine = OutputEngine::new(Box::new(NoopDispatch));
//! parser.advance(b"\x1b[31mhello\x1b[0m", &mut engine);
//! ```

mod color;
mod connection;
mod csi;
mod dispatch;
mod engine;
mod esc;
mod osc;
mod telemetry;
mod types;
mod vt52;

pub use color::{rgb, COLOR_INVALID};
pub use connection::OutputConnection;
pub use dispatch::{NoopDispatch, TermDispatch};
pub use engine::OutputEngine;
pub use osc::ClipboardError;
pub use telemetry::{SequenceCode, SequenceTelemetry};
pub use types::{
    AnsiStatusType, CursorStyle, EraseType, GraphicsRendition, LineFeedType,
    NamedGraphicsRendition, NamedPrivateMode, PrivateMode,
    WindowManipulationType, CHARSET_ASCII, CHARSET_DEC_SPECIAL_GRAPHICS,
    CODING_SYSTEM_ISO2022, CODING_SYSTEM_UTF8,
};

pub use tern_vte::{Engine, Parser, SequenceTrace, VtId};
