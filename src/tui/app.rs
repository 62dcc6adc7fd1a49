use crate::domain::{Entry, Feed};
use crate::fetcher::FeedSource;
use crate::opener::UrlOpener;
use crate::tui::event::Action;

/// Fixed number of entry slots on screen.
pub const PAGE_SIZE: usize = 5;

/// State owned by the interactive browsing loop.
///
/// `selected` always satisfies `0 <= selected < effective_count()` while
/// the feed is non-empty; movement clamps at the boundaries and a refresh
/// clamps against the replacement feed.
pub struct BrowserApp {
    pub feed: Feed,
    pub selected: usize,
    pub page_size: usize,
    pub status: Option<String>,
    pub should_quit: bool,
    entry_limit: Option<usize>,
}

impl BrowserApp {
    pub fn new(feed: Feed, entry_limit: Option<usize>) -> Self {
        Self {
            feed,
            selected: 0,
            page_size: PAGE_SIZE,
            status: None,
            should_quit: false,
            entry_limit,
        }
    }

    pub fn effective_count(&self) -> usize {
        self.feed.effective_count(self.entry_limit)
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.feed.entries.get(self.selected)
    }

    pub fn handle(&mut self, action: Action, source: &dyn FeedSource, opener: &dyn UrlOpener) {
        self.status = None;
        match action {
            Action::MoveUp => self.move_up(),
            Action::MoveDown => self.move_down(),
            Action::Open => self.open_selected(opener),
            Action::Refresh => self.refresh(source),
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    fn move_down(&mut self) {
        let count = self.effective_count();
        if count > 0 && self.selected < count - 1 {
            self.selected += 1;
        }
    }

    fn open_selected(&mut self, opener: &dyn UrlOpener) {
        if let Some(entry) = self.selected_entry() {
            if let Err(e) = opener.open(&entry.link) {
                tracing::warn!(error = %e, "open failed");
                self.status = Some(e.to_string());
            }
        }
    }

    fn refresh(&mut self, source: &dyn FeedSource) {
        match source.fetch() {
            Ok(feed) => {
                self.feed = feed;
                let count = self.effective_count();
                self.selected = if count == 0 {
                    0
                } else {
                    self.selected.min(count - 1)
                };
            }
            Err(e) => {
                // Keep the feed we already have.
                tracing::warn!(error = %e, "refresh failed");
                self.status = Some(format!("Refresh failed: {e}"));
            }
        }
    }
}
