mod engine;
mod parser;
mod states;
mod trace;
mod utf8;
mod vtid;

pub use engine::Engine;
pub use parser::Parser;
pub use trace::SequenceTrace;
pub use vtid::{VtId, VtIdBuilder};
