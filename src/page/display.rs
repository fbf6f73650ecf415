// src/page/display.rs

use tracing::{error, info, instrument};

use super::{GridSink, NoticeSink};
use crate::error::LoadError;
use crate::fetch::FetchText;
use crate::parse::{ParseMode, Record};
use crate::render::render_cards;

/// Placeholder texts shown in place of the grid.
pub mod messages {
    pub const EMPTY_TITLE: &str = "目前沒有攤位資料";
    pub const EMPTY_HINT: &str = "請檢查 public/booths.csv 檔案";
    pub const ERROR_TITLE: &str = "讀取攤位資料時發生錯誤";
    pub const ERROR_HINT: &str = "請檢查主控台以獲取更多資訊。";
}

/// Where one run of [`display_booths`] ends up. While the run is in flight
/// the placeholder is visible; each run ends in exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Rendered { count: usize },
    Empty,
    Errored,
}

async fn load_booths<L>(loader: &L, mode: ParseMode) -> Result<Vec<Record>, LoadError>
where
    L: FetchText + ?Sized,
{
    let text = loader.fetch_text().await?;
    Ok(mode.parse(&text))
}

/// Fetch, parse and render the booth grid into the two given regions.
///
/// Never fails: load errors are logged and turned into the error placeholder.
#[instrument(level = "info", skip_all, fields(mode = %mode))]
pub async fn display_booths<L, G, N>(
    loader: &L,
    mode: ParseMode,
    grid: &mut G,
    notice: &mut N,
) -> DisplayState
where
    L: FetchText + ?Sized,
    G: GridSink + ?Sized,
    N: NoticeSink + ?Sized,
{
    // shown while loading
    notice.set_visible(true);

    match load_booths(loader, mode).await {
        Ok(records) if records.is_empty() => {
            info!("no booth records");
            notice.set_lines(messages::EMPTY_TITLE, messages::EMPTY_HINT);
            grid.clear();
            DisplayState::Empty
        }
        Ok(records) => {
            info!(records = records.len(), "rendering booths");
            notice.set_visible(false);
            grid.set_content(render_cards(&records));
            DisplayState::Rendered {
                count: records.len(),
            }
        }
        Err(e) => {
            error!(error = %e, cause = ?e, "Error fetching or parsing CSV file");
            notice.set_lines(messages::ERROR_TITLE, messages::ERROR_HINT);
            grid.clear();
            DisplayState::Errored
        }
    }
}
