//! # Runnel
//!
//! Spit out an RSS/Atom feed as formatted terminal text, or browse it
//! interactively.
//!
//! ## Architecture
//!
//! ```text
//! FeedSource → Normalizer → Feed → Formatter → static print
//!                                     ↘ tui (windowed browse loop)
//! ```
//!
//! - [`fetcher`]: where the feed document comes from (HTTP or stdin)
//! - [`normalizer`]: feed-rs parsing into the display model
//! - [`format`]: pure entry/header formatting into display lines
//! - [`render`]: styling dialects (ANSI escapes, plain, conky markup)
//! - [`tui`]: raw-mode interactive browser with a 5-row viewport
//!
//! The interactive loop is fully synchronous: it draws, blocks on one
//! keystroke, updates state, and repeats until quit. Whatever terminal
//! state it enters (raw input, hidden cursor) is restored on every exit
//! path.

/// Error types and the crate-wide `Result` alias.
pub mod app;

/// Command-line interface using clap.
pub mod cli;

/// Immutable display options, assembled once from the CLI.
pub mod config;

/// Core display models: [`Feed`](domain::Feed) and [`Entry`](domain::Entry).
pub mod domain;

/// Feed acquisition: [`HttpSource`](fetcher::HttpSource) and
/// [`StdinSource`](fetcher::StdinSource) behind the
/// [`FeedSource`](fetcher::FeedSource) trait.
pub mod fetcher;

/// Entry and header formatting into display lines.
pub mod format;

/// RSS/Atom parsing and normalization via feed-rs.
pub mod normalizer;

/// Launching links in an external browser.
pub mod opener;

/// Styling dialects behind the [`Renderer`](render::Renderer) trait.
pub mod render;

/// Interactive terminal browser.
///
/// Keybindings: `-`/`+` (or arrow keys) move the selection, Enter opens
/// the selected link, `r` refreshes, `q` quits.
pub mod tui;
