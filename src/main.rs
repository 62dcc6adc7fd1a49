use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use runnel::cli::Cli;
use runnel::fetcher::{FeedSource, HttpSource, StdinSource};
use runnel::format;
use runnel::opener::SystemOpener;
use runnel::render;
use runnel::tui;
use runnel::tui::terminal::CrosstermConsole;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so static output stays pipeable.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let options = cli.display_options();

    let source: Box<dyn FeedSource> = if cli.url == "-" {
        Box::new(StdinSource::from_stdin()?)
    } else {
        Box::new(HttpSource::new(&cli.url)?)
    };

    // A feed we can't acquire at startup is fatal in either mode.
    let feed = source.fetch()?;
    let renderer = render::renderer_for(&options);

    if cli.interactive {
        let mut console = CrosstermConsole::default();
        tui::run(
            feed,
            source.as_ref(),
            &SystemOpener,
            &mut console,
            renderer.as_ref(),
            &options,
        )?;
    } else {
        for line in format::format_feed(&feed, &options, renderer.as_ref()) {
            println!("{line}");
        }
    }

    Ok(())
}
