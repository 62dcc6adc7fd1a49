use clap::Parser;

use crate::config::DisplayOptions;

#[derive(Parser)]
#[command(name = "runnel")]
#[command(about = "Spit out an RSS/Atom feed, optionally interactive", long_about = None)]
pub struct Cli {
    /// Url to feed (or - for stdin)
    pub url: String,

    /// No. of entries to show
    #[arg(short = 'n', value_name = "entries")]
    pub entries: Option<usize>,

    /// Description length
    #[arg(short = 'd', value_name = "desc_len", default_value_t = 100)]
    pub desc_len: usize,

    /// Run in interactive mode
    #[arg(short = 'i')]
    pub interactive: bool,

    /// Disable ANSI formatting
    #[arg(short = 'a')]
    pub no_ansi: bool,

    /// Small header
    #[arg(short = 's')]
    pub small_header: bool,

    /// Conky formatting
    #[arg(short = 'C')]
    pub conky: bool,

    /// Don't show entry timestamp
    #[arg(short = 't')]
    pub no_show_time: bool,

    /// Don't show entry url
    #[arg(short = 'u')]
    pub no_show_url: bool,

    /// Don't show header url
    #[arg(short = 'U')]
    pub no_show_header_url: bool,

    /// Compact entries
    #[arg(short = 'c')]
    pub compact: bool,

    /// No descriptions
    #[arg(short = 'D')]
    pub no_show_desc: bool,

    /// Show author
    #[arg(short = 'A')]
    pub show_auth: bool,
}

impl Cli {
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            description_length: self.desc_len,
            entry_limit: self.entries,
            show_timestamp: !self.no_show_time,
            show_url: !self.no_show_url,
            show_header_url: !self.no_show_header_url,
            show_author: self.show_auth,
            show_description: !self.no_show_desc,
            compact: self.compact,
            small_header: self.small_header,
            color_enabled: !self.no_ansi,
            conky_mode: self.conky,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["runnel", "https://example.com/feed.xml"]).unwrap();
        let options = cli.display_options();
        assert_eq!(options.description_length, 100);
        assert_eq!(options.entry_limit, None);
        assert!(options.show_timestamp);
        assert!(options.show_description);
        assert!(!options.show_author);
        assert!(options.color_enabled);
        assert!(!cli.interactive);
    }

    #[test]
    fn test_suppression_flags_invert() {
        let cli = Cli::try_parse_from(["runnel", "-t", "-u", "-U", "-D", "url"]).unwrap();
        let options = cli.display_options();
        assert!(!options.show_timestamp);
        assert!(!options.show_url);
        assert!(!options.show_header_url);
        assert!(!options.show_description);
    }

    #[test]
    fn test_limit_and_length() {
        let cli = Cli::try_parse_from(["runnel", "-n", "3", "-d", "40", "url"]).unwrap();
        let options = cli.display_options();
        assert_eq!(options.entry_limit, Some(3));
        assert_eq!(options.description_length, 40);
    }

    #[test]
    fn test_stdin_sentinel_parses() {
        let cli = Cli::try_parse_from(["runnel", "-i", "-"]).unwrap();
        assert_eq!(cli.url, "-");
        assert!(cli.interactive);
    }
}
