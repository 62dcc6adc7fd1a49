//! Interactive terminal browser.
//!
//! One synchronous loop: draw the visible window of entries, block for a
//! single keystroke, apply it to [`BrowserApp`], repeat until quit. The
//! console is entered once before the loop and left exactly once on every
//! exit path, including errors.

pub mod app;
pub mod event;
pub mod terminal;
pub mod viewport;

use crate::app::Result;
use crate::config::DisplayOptions;
use crate::domain::Feed;
use crate::fetcher::FeedSource;
use crate::format;
use crate::opener::UrlOpener;
use crate::render::Renderer;

use self::app::BrowserApp;
use self::event::Action;
use self::terminal::Console;

const KEY_HELP: [&str; 2] = [
    "-: move selection up, +: move selection down",
    "enter: open selected link, q: quit, r: refresh",
];

const FRAME: &str = "__________________________________________";

pub fn run(
    feed: Feed,
    source: &dyn FeedSource,
    opener: &dyn UrlOpener,
    console: &mut dyn Console,
    renderer: &dyn Renderer,
    options: &DisplayOptions,
) -> Result<()> {
    let mut app = BrowserApp::new(feed, options.entry_limit);

    console.enter()?;
    let result = run_loop(&mut app, source, opener, console, renderer, options);
    if let Err(e) = console.leave() {
        // Best effort; surface it but don't mask the loop's own result.
        tracing::error!(error = %e, "failed to restore terminal");
        eprintln!("warning: failed to restore terminal: {e}");
    }
    result
}

fn run_loop(
    app: &mut BrowserApp,
    source: &dyn FeedSource,
    opener: &dyn UrlOpener,
    console: &mut dyn Console,
    renderer: &dyn Renderer,
    options: &DisplayOptions,
) -> Result<()> {
    while !app.should_quit {
        draw(app, console, renderer, options)?;
        let key = console.read_key()?;
        app.handle(Action::from(key), source, opener);
    }
    Ok(())
}

fn draw(
    app: &BrowserApp,
    console: &mut dyn Console,
    renderer: &dyn Renderer,
    options: &DisplayOptions,
) -> Result<()> {
    console.clear()?;
    for line in format::format_header(&app.feed, options, renderer) {
        console.print(&line)?;
    }
    for line in KEY_HELP {
        console.print(line)?;
    }
    console.print("")?;

    let (start, end) = viewport::visible_range(app.selected, app.effective_count(), app.page_size);
    for (offset, entry) in app.feed.entries[start..end].iter().enumerate() {
        if start + offset == app.selected {
            console.print(FRAME)?;
            for line in format::format_entry(entry, options, renderer) {
                console.print(&line)?;
            }
            console.print(FRAME)?;
        } else {
            let dim = renderer.set_color(90);
            let reset = renderer.set_color(0);
            console.print("")?;
            for line in format::format_entry(entry, options, renderer) {
                console.print(&format!("{dim}{line}{reset}"))?;
            }
            console.print("")?;
        }
    }

    if let Some(status) = &app.status {
        console.print("")?;
        console.print(status)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::RunnelError;
    use crate::domain::Entry;
    use crate::render::PlainRenderer;

    struct FakeConsole {
        keys: VecDeque<KeyEvent>,
        entered: usize,
        left: usize,
        lines: Vec<String>,
    }

    impl FakeConsole {
        fn scripted(codes: &[KeyCode]) -> Self {
            Self {
                keys: codes
                    .iter()
                    .map(|&c| KeyEvent::new(c, KeyModifiers::NONE))
                    .collect(),
                entered: 0,
                left: 0,
                lines: Vec::new(),
            }
        }
    }

    impl Console for FakeConsole {
        fn enter(&mut self) -> Result<()> {
            self.entered += 1;
            Ok(())
        }

        fn leave(&mut self) -> Result<()> {
            self.left += 1;
            Ok(())
        }

        fn clear(&mut self) -> Result<()> {
            self.lines.clear();
            Ok(())
        }

        fn print(&mut self, line: &str) -> Result<()> {
            self.lines.push(line.to_string());
            Ok(())
        }

        fn read_key(&mut self) -> Result<KeyEvent> {
            self.keys
                .pop_front()
                .ok_or_else(|| RunnelError::Terminal("script exhausted".into()))
        }
    }

    struct StaticSource(Feed);

    impl FeedSource for StaticSource {
        fn fetch(&self) -> Result<Feed> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> &str {
            &self.0.source
        }
    }

    struct NoopOpener;

    impl UrlOpener for NoopOpener {
        fn open(&self, _url: &str) -> Result<()> {
            Ok(())
        }
    }

    fn feed_with(n: usize) -> Feed {
        Feed {
            title: "Test".into(),
            source: "https://example.com/rss".into(),
            entries: (0..n)
                .map(|i| Entry {
                    title: format!("e{i}"),
                    link: format!("https://example.com/{i}"),
                    ..Entry::default()
                })
                .collect(),
        }
    }

    #[test]
    fn test_scripted_session_moves_selection_and_quits() {
        let feed = feed_with(10);
        let source = StaticSource(feed.clone());
        let mut console = FakeConsole::scripted(&[
            KeyCode::Char('+'),
            KeyCode::Char('+'),
            KeyCode::Char('+'),
            KeyCode::Char('q'),
        ]);
        let options = DisplayOptions::default();
        let mut app = BrowserApp::new(feed, None);

        run_loop(
            &mut app,
            &source,
            &NoopOpener,
            &mut console,
            &PlainRenderer,
            &options,
        )
        .unwrap();

        assert_eq!(app.selected, 3);
        assert!(app.should_quit);
    }

    #[test]
    fn test_console_balance_on_quit() {
        let feed = feed_with(3);
        let source = StaticSource(feed.clone());
        let mut console = FakeConsole::scripted(&[KeyCode::Char('q')]);

        run(
            feed,
            &source,
            &NoopOpener,
            &mut console,
            &PlainRenderer,
            &DisplayOptions::default(),
        )
        .unwrap();

        assert_eq!(console.entered, 1);
        assert_eq!(console.left, 1);
    }

    #[test]
    fn test_console_balance_on_input_error() {
        let feed = feed_with(3);
        let source = StaticSource(feed.clone());
        // Empty script: the first read fails, simulating a dead terminal.
        let mut console = FakeConsole::scripted(&[]);

        let result = run(
            feed,
            &source,
            &NoopOpener,
            &mut console,
            &PlainRenderer,
            &DisplayOptions::default(),
        );

        assert!(result.is_err());
        assert_eq!(console.entered, 1);
        assert_eq!(console.left, 1);
    }

    #[test]
    fn test_selected_entry_framed_others_dimmed() {
        let feed = feed_with(3);
        let source = StaticSource(feed.clone());
        let mut console = FakeConsole::scripted(&[KeyCode::Char('q')]);
        let options = DisplayOptions::default();
        let mut app = BrowserApp::new(feed, None);

        run_loop(
            &mut app,
            &source,
            &NoopOpener,
            &mut console,
            &crate::render::AnsiRenderer,
            &options,
        )
        .unwrap();

        let frames = console.lines.iter().filter(|l| *l == FRAME).count();
        assert_eq!(frames, 2);
        assert!(console.lines.iter().any(|l| l.starts_with("\x1b[90m")));
    }

    #[test]
    fn test_refresh_failure_shows_status_line() {
        struct FailingSource;

        impl FeedSource for FailingSource {
            fn fetch(&self) -> Result<Feed> {
                Err(RunnelError::FeedParse("boom".into()))
            }

            fn describe(&self) -> &str {
                "broken"
            }
        }

        let mut console = FakeConsole::scripted(&[KeyCode::Char('r'), KeyCode::Char('q')]);
        let options = DisplayOptions::default();
        let mut app = BrowserApp::new(feed_with(3), None);

        run_loop(
            &mut app,
            &FailingSource,
            &NoopOpener,
            &mut console,
            &PlainRenderer,
            &options,
        )
        .unwrap();

        // The final frame (drawn after the failed refresh) carries the notice.
        assert!(console
            .lines
            .iter()
            .any(|l| l.contains("Refresh failed")));
        assert_eq!(app.feed.entries.len(), 3);
    }
}
