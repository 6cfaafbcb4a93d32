use crossterm::style::{style, Color, Stylize};

/// Semantic colors used by the shells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Title,
    Heading,
    Good,
    Bad,
    Reward,
    Travel,
    Shop,
}

impl Tone {
    fn color(self) -> Option<Color> {
        match self {
            Tone::Title => None,
            Tone::Heading => Some(Color::Cyan),
            Tone::Good => Some(Color::Green),
            Tone::Bad => Some(Color::Red),
            Tone::Reward => Some(Color::Yellow),
            Tone::Travel => Some(Color::Blue),
            Tone::Shop => Some(Color::Magenta),
        }
    }
}

/// Wraps `text` in ANSI styling for `tone`, or returns it unchanged when
/// color is off.
pub fn paint(text: &str, tone: Tone, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    match tone.color() {
        Some(color) => style(text).with(color).to_string(),
        None => style(text).bold().to_string(),
    }
}
