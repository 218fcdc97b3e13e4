use std::cell::RefCell;
use std::rc::Rc;

/// Shared view of the raw text of the sequence currently being parsed.
///
/// The [`Parser`](crate::Parser) records every character it consumes as part
/// of a control sequence into this buffer. The engine side keeps a clone of
/// the handle, so its flush-to-terminal path can re-serialize the exact
/// sequence prefix without calling back into the parser.
#[derive(Debug, Default, Clone)]
pub struct SequenceTrace {
    inner: Rc<RefCell<String>>,
}

impl SequenceTrace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the currently buffered sequence text.
    #[must_use]
    pub fn snapshot(&self) -> String {
        self.inner.borrow().clone()
    }

    pub(crate) fn restart(&self, ch: char) {
        let mut buffer = self.inner.borrow_mut();
        buffer.clear();
        buffer.push(ch);
    }

    pub(crate) fn push(&self, ch: char) {
        self.inner.borrow_mut().push(ch);
    }
}
