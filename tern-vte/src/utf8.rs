use utf8parse::Receiver;

#[derive(Default)]
struct Decoder {
    inner: Option<char>,
}

impl Receiver for Decoder {
    fn codepoint(&mut self, c: char) {
        self.inner.replace(c);
    }

    fn invalid_sequence(&mut self) {
        self.codepoint(char::REPLACEMENT_CHARACTER);
    }
}

/// Incremental UTF-8 decoder for multi-byte scalars embedded in the stream.
#[derive(Default)]
pub(crate) struct Utf8Collector {
    inner: utf8parse::Parser,
}

impl Utf8Collector {
    /// Feeds one byte; yields the decoded scalar once the sequence
    /// completes. Invalid input decodes to U+FFFD.
    pub(crate) fn advance(&mut self, byte: u8) -> Option<char> {
        let mut decoder = Decoder::default();
        self.inner.advance(&mut decoder, byte);
        decoder.inner
    }
}
