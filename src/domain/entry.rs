/// One item in a feed. All fields are display-only; an entry has no
/// identity beyond its position in the feed.
#[derive(Debug, Clone, Default)]
pub struct Entry {
    pub title: String,
    pub link: String,
    pub published: Option<String>,
    pub description: Option<String>,
    pub authors: Vec<String>,
}

impl Entry {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }
}
