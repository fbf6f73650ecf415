pub mod booth;
pub mod config;
pub mod error;
pub mod fetch;
pub mod page;
pub mod parse;
pub mod render;
pub mod style;

pub use config::Config;
pub use error::LoadError;
pub use fetch::{FetchText, Loader, Source};
pub use page::{display_booths, DisplayState, Document, GridSink, NoticeSink};
pub use parse::{parse_csv, ParseMode, Record};
