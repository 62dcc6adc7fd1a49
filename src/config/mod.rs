//! Display configuration.
//!
//! Options are assembled once from the command line and passed explicitly
//! into formatting and browsing code; nothing reads them from a global.

#[derive(Debug, Clone)]
pub struct DisplayOptions {
    /// Truncation length for titles and descriptions, in characters.
    pub description_length: usize,
    /// Cap on the number of entries considered; `None` means all.
    pub entry_limit: Option<usize>,
    pub show_timestamp: bool,
    pub show_url: bool,
    pub show_header_url: bool,
    pub show_author: bool,
    pub show_description: bool,
    /// Omit the blank line between entries in static output.
    pub compact: bool,
    /// Single-line header instead of the banner form.
    pub small_header: bool,
    /// ANSI escape styling; disabled by `-a`.
    pub color_enabled: bool,
    /// Conky text-object markup for system-monitor overlays.
    pub conky_mode: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            description_length: 100,
            entry_limit: None,
            show_timestamp: true,
            show_url: true,
            show_header_url: true,
            show_author: false,
            show_description: true,
            compact: false,
            small_header: false,
            color_enabled: true,
            conky_mode: false,
        }
    }
}
