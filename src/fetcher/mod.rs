use std::io::Read;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::app::Result;
use crate::domain::Feed;
use crate::normalizer::Normalizer;

/// Where a feed document comes from.
///
/// `fetch` is invoked once at startup and again on every interactive
/// refresh, so implementations must be callable repeatedly.
pub trait FeedSource {
    fn fetch(&self) -> Result<Feed>;

    /// Human-readable origin, shown in the feed header.
    fn describe(&self) -> &str;
}

pub struct HttpSource {
    url: String,
    client: Client,
    normalizer: Normalizer,
}

impl HttpSource {
    pub fn new(url: &str) -> Result<Self> {
        Url::parse(url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("runnel/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            url: url.to_string(),
            client,
            normalizer: Normalizer::new(),
        })
    }
}

impl FeedSource for HttpSource {
    fn fetch(&self) -> Result<Feed> {
        tracing::debug!(url = %self.url, "fetching feed");
        let response = self.client.get(&self.url).send()?;
        response.error_for_status_ref()?;
        let body = response.bytes()?;
        self.normalizer.normalize(self.describe(), &body)
    }

    fn describe(&self) -> &str {
        &self.url
    }
}

/// Feed read from standard input.
///
/// The document is captured once at construction; a later refresh re-parses
/// the captured bytes instead of reading from an already-drained pipe.
pub struct StdinSource {
    body: Vec<u8>,
    normalizer: Normalizer,
}

impl StdinSource {
    pub fn from_stdin() -> Result<Self> {
        Self::from_reader(&mut std::io::stdin().lock())
    }

    pub fn from_reader(reader: &mut impl Read) -> Result<Self> {
        let mut body = Vec::new();
        reader.read_to_end(&mut body)?;
        Ok(Self {
            body,
            normalizer: Normalizer::new(),
        })
    }
}

impl FeedSource for StdinSource {
    fn fetch(&self) -> Result<Feed> {
        self.normalizer.normalize(self.describe(), &self.body)
    }

    fn describe(&self) -> &str {
        "-"
    }
}
