use chrono::{DateTime, Utc};
use feed_rs::parser;
use html_escape::decode_html_entities;

use crate::app::{Result, RunnelError};
use crate::domain::{Entry, Feed};

/// Converts RSS/Atom documents into the display-oriented [`Feed`] model.
#[derive(Clone, Default)]
pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, source: &str, body: &[u8]) -> Result<Feed> {
        let feed = parser::parse(body).map_err(|e| RunnelError::FeedParse(e.to_string()))?;

        let title = feed
            .title
            .map(|t| decode_html_entities(&t.content).to_string())
            .unwrap_or_else(|| "(untitled feed)".to_string());

        let entries = feed
            .entries
            .into_iter()
            .map(|entry| Entry {
                title: entry
                    .title
                    .map(|t| decode_html_entities(&t.content).to_string())
                    .unwrap_or_default(),
                link: entry
                    .links
                    .first()
                    .map(|l| l.href.clone())
                    .unwrap_or_default(),
                published: entry.published.or(entry.updated).map(format_published),
                description: entry
                    .summary
                    .map(|s| decode_html_entities(&s.content).to_string()),
                authors: entry.authors.into_iter().map(|a| a.name).collect(),
            })
            .collect();

        Ok(Feed {
            title,
            source: source.to_string(),
            entries,
        })
    }
}

fn format_published(date: DateTime<Utc>) -> String {
    date.to_rfc2822()
}
