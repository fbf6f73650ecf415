// src/page/mod.rs

pub mod display;
pub mod document;

pub use display::{display_booths, messages, DisplayState};
pub use document::{Document, GridRegion, NoticeRegion};

/// The container that receives the card markup (`#booth-grid`).
pub trait GridSink {
    fn set_content(&mut self, html: String);

    fn clear(&mut self) {
        self.set_content(String::new());
    }
}

/// The two-line placeholder box (`#no-booths-message`).
pub trait NoticeSink {
    fn set_visible(&mut self, visible: bool);
    fn set_lines(&mut self, first: &str, last: &str);
}
