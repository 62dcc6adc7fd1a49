//! Text styling dialects.
//!
//! Formatting code asks a [`Renderer`] for styled text and never branches
//! on configuration itself; `-a` and `-C` just select a different variant.

use crate::config::DisplayOptions;

const ESC: &str = "\x1b";

pub trait Renderer {
    /// Strong emphasis, used for the feed header.
    fn emphasize(&self, text: &str) -> String;
    fn underline_text(&self, text: &str) -> String;
    fn italicize(&self, text: &str) -> String;
    /// Sequence switching to the given SGR color; empty for dialects
    /// without inline color. Code 0 resets.
    fn set_color(&self, code: u8) -> String;
}

pub struct AnsiRenderer;

impl Renderer for AnsiRenderer {
    fn emphasize(&self, text: &str) -> String {
        format!("{ESC}[1m{text}{ESC}[22m")
    }

    fn underline_text(&self, text: &str) -> String {
        format!("{ESC}[4m{text}{ESC}[24m")
    }

    fn italicize(&self, text: &str) -> String {
        format!("{ESC}[3m{text}{ESC}[23m")
    }

    fn set_color(&self, code: u8) -> String {
        format!("{ESC}[{code}m")
    }
}

/// No styling at all; selected by `-a`.
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn emphasize(&self, text: &str) -> String {
        text.to_string()
    }

    fn underline_text(&self, text: &str) -> String {
        text.to_string()
    }

    fn italicize(&self, text: &str) -> String {
        text.to_string()
    }

    fn set_color(&self, _code: u8) -> String {
        String::new()
    }
}

/// Conky's text-object markup. Bold and underline have no conky equivalent
/// and pass through untouched; italic becomes a grey color span.
pub struct ConkyRenderer;

impl Renderer for ConkyRenderer {
    fn emphasize(&self, text: &str) -> String {
        text.to_string()
    }

    fn underline_text(&self, text: &str) -> String {
        text.to_string()
    }

    fn italicize(&self, text: &str) -> String {
        format!("${{color grey}}{text}${{color}}")
    }

    fn set_color(&self, _code: u8) -> String {
        String::new()
    }
}

pub fn renderer_for(options: &DisplayOptions) -> Box<dyn Renderer> {
    if options.conky_mode {
        Box::new(ConkyRenderer)
    } else if options.color_enabled {
        Box::new(AnsiRenderer)
    } else {
        Box::new(PlainRenderer)
    }
}
