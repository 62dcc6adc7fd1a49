//! Turns feed data into display lines.
//!
//! Everything here is pure: entry + options + renderer in, lines out.
//! The static printer and the interactive browser both go through these
//! functions so the two modes cannot drift apart.

use crate::config::DisplayOptions;
use crate::domain::{Entry, Feed};
use crate::render::Renderer;

const RULE: &str = "==========================================";

pub fn format_header(feed: &Feed, options: &DisplayOptions, renderer: &dyn Renderer) -> Vec<String> {
    if options.small_header {
        let line = if options.show_header_url {
            format!("{} ({})", feed.title, feed.source)
        } else {
            feed.title.clone()
        };
        return vec![renderer.emphasize(&line)];
    }

    let mut lines = vec![RULE.to_string(), renderer.emphasize(&feed.title)];
    if options.show_header_url {
        lines.push(format!("({})", feed.source));
    }
    lines.push(RULE.to_string());
    lines.push(String::new());
    lines
}

pub fn format_entry(entry: &Entry, options: &DisplayOptions, renderer: &dyn Renderer) -> Vec<String> {
    let mut lines = Vec::new();

    let title = renderer.underline_text(&truncate_chars(&entry.title, options.description_length));
    if options.show_author {
        lines.push(format!("→ [{}] {}", entry.authors.join(", "), title));
    } else {
        lines.push(format!("→ {title}"));
    }

    if options.show_timestamp {
        if let Some(published) = &entry.published {
            lines.push(format!("    ({published})"));
        }
    }

    if options.show_url && !entry.link.is_empty() {
        lines.push(format!("    ({})", entry.link));
    }

    if options.show_description {
        if let Some(description) = &entry.description {
            let text = strip_tags(description).replace('\n', "");
            let text = truncate_chars(&text, options.description_length);
            lines.push(format!("    {}", renderer.italicize(&format!("\"{text}...\""))));
        }
    }

    lines
}

/// Full static rendering: header, then each entry up to the `-n` cap.
pub fn format_feed(feed: &Feed, options: &DisplayOptions, renderer: &dyn Renderer) -> Vec<String> {
    let mut lines = format_header(feed, options, renderer);
    let count = feed.effective_count(options.entry_limit);
    for entry in &feed.entries[..count] {
        lines.extend(format_entry(entry, options, renderer));
        if !options.compact {
            lines.push(String::new());
        }
    }
    lines
}

/// Removes `<...>` markup spans. A `<` with no closing `>` is left alone,
/// so stripping is idempotent.
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Character-based truncation, no ellipsis.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
