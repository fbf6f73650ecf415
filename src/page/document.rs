// src/page/document.rs

use super::{GridSink, NoticeSink};
use crate::render::utils::html_escape;

pub const GRID_ID: &str = "booth-grid";
pub const NOTICE_ID: &str = "no-booths-message";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridRegion {
    html: String,
}

impl GridRegion {
    pub fn html(&self) -> &str {
        &self.html
    }
}

impl GridSink for GridRegion {
    fn set_content(&mut self, html: String) {
        self.html = html;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeRegion {
    visible: bool,
    first: String,
    last: String,
}

impl Default for NoticeRegion {
    fn default() -> Self {
        Self {
            visible: false,
            first: "載入中...".to_string(),
            last: String::new(),
        }
    }
}

impl NoticeRegion {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn lines(&self) -> (&str, &str) {
        (&self.first, &self.last)
    }
}

impl NoticeSink for NoticeRegion {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_lines(&mut self, first: &str, last: &str) {
        self.first = first.to_string();
        self.last = last.to_string();
    }
}

/// In-memory stand-in for the booth page: a title plus the two regions the
/// pipeline writes into.
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    grid: GridRegion,
    notice: NoticeRegion,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            grid: GridRegion::default(),
            notice: NoticeRegion::default(),
        }
    }

    pub fn grid(&self) -> &GridRegion {
        &self.grid
    }

    pub fn notice(&self) -> &NoticeRegion {
        &self.notice
    }

    /// Both regions at once, so they can be handed to the pipeline together.
    pub fn regions_mut(&mut self) -> (&mut GridRegion, &mut NoticeRegion) {
        (&mut self.grid, &mut self.notice)
    }

    /// Serialize the whole page.
    pub fn to_html(&self) -> String {
        let hidden = if self.notice.visible { "" } else { " hidden" };
        format!(
            r#"<!DOCTYPE html>
<html lang="zh-Hant">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-50">
    <main class="container mx-auto px-4 py-8">
        <h1 class="text-3xl font-bold text-center mb-8 text-gray-800">{title}</h1>
        <div id="{notice_id}" class="text-center py-12{hidden}">
            <p class="text-gray-500 text-lg">{first}</p>
            <p class="text-gray-400 text-sm mt-2">{last}</p>
        </div>
        <div id="{grid_id}" class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">{grid}</div>
    </main>
</body>
</html>
"#,
            title = html_escape(&self.title),
            notice_id = NOTICE_ID,
            hidden = hidden,
            first = html_escape(&self.notice.first),
            last = html_escape(&self.notice.last),
            grid_id = GRID_ID,
            grid = self.grid.html,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_fresh_document_hides_notice() {
        let doc = Document::new("攤位列表");
        let html = Html::parse_document(&doc.to_html());

        let notice = html
            .select(&Selector::parse("#no-booths-message").unwrap())
            .next()
            .unwrap();
        assert!(notice.value().classes().any(|c| c == "hidden"));

        let grid = html
            .select(&Selector::parse("#booth-grid").unwrap())
            .next()
            .unwrap();
        assert_eq!(grid.inner_html(), "");
    }

    #[test]
    fn test_regions_show_in_output() {
        let mut doc = Document::new("<Fair>");
        {
            let (grid, notice) = doc.regions_mut();
            grid.set_content("<div class=\"card\">x</div>".to_string());
            notice.set_visible(true);
            notice.set_lines("第一行", "第二行");
        }
        assert_eq!(doc.notice().lines(), ("第一行", "第二行"));

        let page = doc.to_html();
        assert!(page.contains("<title>&lt;Fair&gt;</title>"));

        let html = Html::parse_document(&page);
        let notice = html
            .select(&Selector::parse("#no-booths-message").unwrap())
            .next()
            .unwrap();
        assert!(!notice.value().classes().any(|c| c == "hidden"));
        let texts: Vec<String> = notice
            .select(&Selector::parse("p").unwrap())
            .map(|p| p.text().collect())
            .collect();
        assert_eq!(texts, vec!["第一行", "第二行"]);

        assert_eq!(
            html.select(&Selector::parse("#booth-grid > div.card").unwrap())
                .count(),
            1
        );
    }

    #[test]
    fn test_clear_empties_grid() {
        let mut grid = GridRegion::default();
        grid.set_content("<div></div>".to_string());
        grid.clear();
        assert_eq!(grid.html(), "");
    }
}
