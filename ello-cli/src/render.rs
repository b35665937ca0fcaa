//! Themed terminal rendering of the home page

use anyhow::Result;
use console::Style;
use ello_core::browse::resolve_cover;
use ello_core::session::{LoadStatus, PageView};
use ello_core::settings::Rgb;
use ello_core::{Book, SearchOption, Theme};

pub const ERROR_NOTICE: &str = "Error loading books";
pub const LOADING_NOTICE: &str = "Loading books...";
pub const EMPTY_READING_LIST: &str = "Your reading list is empty.";

/// Turns page snapshots into text using the theme palette
pub struct Renderer {
    primary: Style,
    secondary: Style,
    text: Style,
    error: Style,
}

impl Renderer {
    pub fn new(theme: &Theme, colors: bool) -> Result<Self> {
        let color = |hex: &str| -> Result<Style> {
            let rgb = Rgb::parse_hex(hex)?;
            Ok(Style::new().color256(rgb.to_ansi256()).force_styling(colors))
        };
        Ok(Self {
            primary: color(&theme.palette.primary)?.bold(),
            secondary: color(&theme.palette.secondary)?,
            text: color(&theme.palette.text)?,
            error: Style::new().red().bold().force_styling(colors),
        })
    }

    pub fn banner(&self) -> String {
        self.primary.apply_to("Ello Books").to_string()
    }

    pub fn page(&self, view: &PageView) -> String {
        let mut lines = Vec::new();
        match &view.status {
            LoadStatus::Loading => return LOADING_NOTICE.to_string(),
            LoadStatus::Errored { .. } => return self.error.apply_to(ERROR_NOTICE).to_string(),
            LoadStatus::Ready { .. } => {}
        }

        if let Some(term) = &view.term {
            lines.push(format!("Search: {}", term));
        }
        if view.matches == 0 {
            lines.push("No books found.".to_string());
            return lines.join("\n");
        }

        let noun = if view.matches == 1 { "match" } else { "matches" };
        lines.push(
            self.secondary
                .apply_to(format!(
                    "Page {} of {} ({} {})",
                    view.page, view.page_count, view.matches, noun
                ))
                .to_string(),
        );
        if view.cards.is_empty() {
            lines.push("Nothing on this page.".to_string());
        }
        for (i, card) in view.cards.iter().enumerate() {
            lines.push(format!(
                "{:>3}. [{}] {} by {}, level {} ({})",
                i + 1,
                if card.added { "x" } else { " " },
                self.primary.apply_to(&card.book.title),
                self.text.apply_to(&card.book.author),
                card.book.reading_level,
                card.cover
            ));
        }
        lines.join("\n")
    }

    pub fn reading_list(&self, entries: &[Book]) -> String {
        let mut lines = vec![self.primary.apply_to("My Reading List").to_string()];
        if entries.is_empty() {
            lines.push(EMPTY_READING_LIST.to_string());
        }
        for (i, book) in entries.iter().enumerate() {
            lines.push(format!("{:>3}. {}", i + 1, self.text.apply_to(&book.title)));
        }
        lines.join("\n")
    }

    pub fn suggestions(&self, options: &[SearchOption], asset_root: &str) -> String {
        if options.is_empty() {
            return "No suggestions.".to_string();
        }
        options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                format!(
                    "{:>3}. {} ({})",
                    i + 1,
                    self.primary.apply_to(&option.title),
                    resolve_cover(asset_root, &option.cover_photo_url)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn notice(&self) -> String {
        self.error.apply_to(ERROR_NOTICE).to_string()
    }
}
