//! Home page view model
//!
//! Owns everything the home page shows: the load state, the search box, the
//! current page and the reading list. Derived sequences (filtered books and
//! autocomplete options) are memoized on the catalog identity and the
//! committed search term, so repeated renders reuse them.

use super::load::{spawn_fetch, FetchOutcome, LoadState, LoadStatus, Liveness, PendingFetch};
use crate::browse::{
    derive_options, filter_indices, page_count, paginate, resolve_cover, suggest, Memo,
    ReadingList,
};
use crate::catalog::CatalogSource;
use crate::settings::{PagePolicy, Settings};
use crate::types::{Book, Catalog, SearchOption};
use serde::Serialize;
use std::sync::Arc;

type FilterKey = (Option<u64>, Option<String>);

pub struct HomePage {
    settings: Settings,
    load: LoadState,
    /// Text currently in the search box
    draft: String,
    /// Committed filter term; `None` shows the whole catalog
    term: Option<String>,
    page: usize,
    reading_list: ReadingList,
    filtered: Memo<FilterKey, Vec<usize>>,
    options: Memo<Option<u64>, Vec<SearchOption>>,
    liveness: Liveness,
}

/// A book as shown on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookCard {
    #[serde(flatten)]
    pub book: Book,

    /// Cover path resolved against the asset root
    pub cover: String,

    /// Whether the book is on the reading list
    pub added: bool,
}

/// Snapshot of everything the presentation layer renders
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub status: LoadStatus,
    pub draft: String,
    pub term: Option<String>,
    pub page: usize,
    pub page_count: usize,
    pub matches: usize,
    pub cards: Vec<BookCard>,
    pub reading_list: Vec<Book>,
}

impl HomePage {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            load: LoadState::Loading,
            draft: String::new(),
            term: None,
            page: 1,
            reading_list: ReadingList::new(),
            filtered: Memo::new(),
            options: Memo::new(),
            liveness: Liveness::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Start the one catalog fetch in the background. The outcome must be
    /// handed back through [`HomePage::settle`].
    pub fn start_fetch(&self, source: Arc<dyn CatalogSource>) -> PendingFetch {
        spawn_fetch(source, self.liveness.token())
    }

    /// Fetch the catalog and wait for it
    pub async fn load(&mut self, source: Arc<dyn CatalogSource>) -> &LoadState {
        let pending = self.start_fetch(source);
        if let Some(outcome) = pending.await {
            self.settle(outcome);
        }
        &self.load
    }

    /// Apply a fetch outcome. Ignored once the page is torn down or the load
    /// has already settled.
    pub fn settle(&mut self, outcome: FetchOutcome) -> bool {
        if !self.liveness.is_live() {
            tracing::debug!("Page torn down, ignoring catalog outcome");
            return false;
        }
        let changed = self.load.settle(outcome);
        if changed {
            if let Some(catalog) = self.load.catalog() {
                tracing::info!("Catalog ready with {} books", catalog.len());
            }
            self.apply_page_policy();
        }
        changed
    }

    /// Mark the page gone; any fetch still in flight is discarded
    pub fn tear_down(&self) {
        self.liveness.tear_down();
    }

    pub fn is_live(&self) -> bool {
        self.liveness.is_live()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    /// Typing only changes the draft; the filter is untouched until a commit.
    /// Erasing the box clears the filter.
    pub fn type_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            self.commit(text);
        } else {
            self.draft = text;
        }
    }

    /// Commit the draft as the filter term (enter pressed on free text)
    pub fn commit_input(&mut self) {
        let draft = self.draft.clone();
        self.commit(draft);
    }

    /// Pick an autocomplete option, or clear the box with `None`
    pub fn select_option(&mut self, title: Option<&str>) {
        self.commit(title.unwrap_or_default().to_string());
    }

    fn commit(&mut self, title: String) {
        tracing::debug!(term = %title, "Committing search term");
        self.draft = title.clone();
        self.term = (!title.is_empty()).then_some(title);
        self.apply_page_policy();
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Go to a 1-indexed page
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
        self.apply_page_policy();
    }

    fn apply_page_policy(&mut self) {
        // the page is re-checked once the load settles
        if self.settings.page_policy != PagePolicy::Clamp || self.load.is_loading() {
            return;
        }
        let last = self.page_count().max(1);
        if self.page > last {
            tracing::debug!(from = self.page, to = last, "Clamping page to last page");
            self.page = last;
        }
    }

    fn refresh_filter(&mut self) {
        let catalog = self.load.catalog();
        let term = self.term.as_deref();
        let key = (catalog.map(Catalog::id), self.term.clone());
        self.filtered.get_or_compute(key, || match catalog {
            Some(catalog) => filter_indices(catalog, term),
            None => Vec::new(),
        });
    }

    fn cached_indices(&self) -> &[usize] {
        self.filtered.cached().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Books matching the committed term, in catalog order
    pub fn filtered_books(&mut self) -> Vec<&Book> {
        self.refresh_filter();
        books_at(self.load.catalog(), self.cached_indices())
    }

    /// Books on the current page
    pub fn displayed_books(&mut self) -> Vec<&Book> {
        self.refresh_filter();
        let indices = paginate(self.cached_indices(), self.page, self.settings.page_size);
        books_at(self.load.catalog(), indices)
    }

    pub fn page_count(&mut self) -> usize {
        self.refresh_filter();
        page_count(self.cached_indices().len(), self.settings.page_size)
    }

    /// Autocomplete options for the whole catalog
    pub fn search_options(&mut self) -> &[SearchOption] {
        let catalog = self.load.catalog();
        self.options.get_or_compute(catalog.map(Catalog::id), || {
            catalog.map(|c| derive_options(c)).unwrap_or_default()
        })
    }

    /// Options matching the current draft
    pub fn suggestions(&mut self) -> Vec<SearchOption> {
        let draft = self.draft.clone();
        suggest(self.search_options(), &draft)
            .into_iter()
            .cloned()
            .collect()
    }

    /// How many times the filtered sequence and the options have been derived
    pub fn derivation_counts(&self) -> (u64, u64) {
        (self.filtered.computations(), self.options.computations())
    }

    pub fn reading_list(&self) -> &ReadingList {
        &self.reading_list
    }

    pub fn add_book(&mut self, book: &Book) {
        tracing::debug!(title = %book.title, "Adding to reading list");
        self.reading_list.add(book);
    }

    pub fn remove_book(&mut self, book: &Book) {
        let removed = self.reading_list.remove(book);
        tracing::debug!(title = %book.title, removed, "Removed from reading list");
    }

    /// The card button: add when absent, remove when present
    pub fn toggle_book(&mut self, book: &Book) -> bool {
        let added = self.reading_list.toggle(book);
        tracing::debug!(title = %book.title, added, "Toggled reading list entry");
        added
    }

    pub fn is_added(&self, book: &Book) -> bool {
        self.reading_list.is_member(book)
    }

    /// Snapshot for rendering
    pub fn view(&mut self) -> PageView {
        self.refresh_filter();
        let page_size = self.settings.page_size;
        let matches = self.cached_indices().len();
        let indices = paginate(self.cached_indices(), self.page, page_size);
        let cards = books_at(self.load.catalog(), indices)
            .into_iter()
            .map(|book| BookCard {
                book: book.clone(),
                cover: resolve_cover(&self.settings.asset_root, &book.cover_photo_url),
                added: self.is_added(book),
            })
            .collect();

        PageView {
            status: self.load.status(),
            draft: self.draft.clone(),
            term: self.term.clone(),
            page: self.page,
            page_count: page_count(matches, page_size),
            matches,
            cards,
            reading_list: self.reading_list.entries().to_vec(),
        }
    }
}

fn books_at<'a>(catalog: Option<&'a Catalog>, indices: &[usize]) -> Vec<&'a Book> {
    match catalog {
        Some(catalog) => indices.iter().filter_map(|&i| catalog.get(i)).collect(),
        None => Vec::new(),
    }
}
