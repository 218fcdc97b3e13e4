//! Print every semantic operation the engine dispatches for a byte stream.
use tern_output::{
    EraseType, GraphicsRendition, LineFeedType, OutputEngine, Parser,
    TermDispatch,
};

#[derive(Default)]
struct LoggingDispatch {
    seq: usize,
}

impl LoggingDispatch {
    fn log(&mut self, operation: &str) -> bool {
        self.seq += 1;
        println!("{:02}: {operation}", self.seq);
        true
    }
}

impl TermDispatch for LoggingDispatch {
    fn print(&mut self, ch: char) -> bool {
        self.log(&format!("print {ch:?}"))
    }

    fn print_string(&mut self, text: &str) -> bool {
        self.log(&format!("print-string {text:?}"))
    }

    fn cursor_position(&mut self, line: u16, column: u16) -> bool {
        self.log(&format!("cursor-position {line},{column}"))
    }

    fn erase_in_display(&mut self, erase_type: EraseType) -> bool {
        self.log(&format!("erase-in-display {erase_type:?}"))
    }

    fn set_graphics_rendition(&mut self, options: &[GraphicsRendition]) -> bool {
        self.log(&format!("sgr {options:?}"))
    }

    fn line_feed(&mut self, line_feed_type: LineFeedType) -> bool {
        self.log(&format!("line-feed {line_feed_type:?}"))
    }

    fn carriage_return(&mut self) -> bool {
        self.log("carriage-return")
    }

    fn set_window_title(&mut self, title: &str) -> bool {
        self.log(&format!("window-title {title:?}"))
    }

    fn add_hyperlink(&mut self, uri: &str, params: &str) -> bool {
        self.log(&format!("hyperlink {uri:?} (params {params:?})"))
    }

    fn end_hyperlink(&mut self) -> bool {
        self.log("hyperlink end")
    }
}

fn main() {
    env_logger::init();

    let mut parser = Parser::new();
    let mut engine = OutputEngine::new(Box::new(LoggingDispatch::default()));

    let bytes = b"Hello \x1b[1mTern\x1b[0m!\r\n\
                  \x1b[2J\x1b[1;1H\
                  \x1b]0;tern demo\x07\
                  \x1b]8;id=docs;https://example.com\x07click\x1b]8;;\x07";

    parser.advance(bytes, &mut engine);
}
