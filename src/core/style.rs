//! Per-level visual styles
//!
//! The table is `'static` and read-only. Rendering never mutates a style: a
//! [`Paint`] is derived per call and applied to a fresh string.

use super::log_level::Level;
use colored::{Color, ColoredString, Colorize};

/// Neutral color used for timestamps, dividers, connectors and the caller field.
pub const GRAY: Color = xterm(240);

/// Separator drawn after the timestamp and level label segments.
pub const DIVIDER: &str = "∣";

/// Bold/faint flags for one styled segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Emphasis {
    pub bold: bool,
    pub faint: bool,
}

impl Emphasis {
    pub const PLAIN: Emphasis = Emphasis { bold: false, faint: false };
    pub const BOLD: Emphasis = Emphasis { bold: true, faint: false };
    pub const BOLD_FAINT: Emphasis = Emphasis { bold: true, faint: true };
    pub const FAINT: Emphasis = Emphasis { bold: false, faint: true };
}

/// A foreground color plus emphasis, applied to text at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Paint {
    pub color: Option<Color>,
    pub emphasis: Emphasis,
}

impl Paint {
    pub const fn new(color: Option<Color>, emphasis: Emphasis) -> Self {
        Self { color, emphasis }
    }

    /// Apply this paint to `text`.
    ///
    /// With `use_colors` off, or for empty text, the text is returned as-is.
    /// Otherwise `colored` decides whether escape codes are emitted, which
    /// keeps `NO_COLOR`/`CLICOLOR` handling in one place.
    pub fn render(&self, text: &str, use_colors: bool) -> String {
        if !use_colors || text.is_empty() {
            return text.to_string();
        }

        let mut styled: ColoredString = text.normal();
        if let Some(color) = self.color {
            styled = styled.color(color);
        }
        if self.emphasis.bold {
            styled = styled.bold();
        }
        if self.emphasis.faint {
            styled = styled.dimmed();
        }
        styled.to_string()
    }
}

/// Cosmetic descriptor of one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelStyle {
    pub color: Option<Color>,
    pub icon: &'static str,
    pub label: &'static str,
    pub icon_emphasis: Emphasis,
    pub label_emphasis: Emphasis,
    pub message_emphasis: Emphasis,
    pub key_emphasis: Emphasis,
}

impl LevelStyle {
    const fn leveled(color: u8, icon: &'static str, label: &'static str, key: Emphasis) -> Self {
        Self {
            color: Some(xterm(color)),
            icon,
            label,
            icon_emphasis: Emphasis::BOLD,
            label_emphasis: Emphasis::BOLD,
            message_emphasis: Emphasis::PLAIN,
            key_emphasis: key,
        }
    }

    pub fn icon_paint(&self) -> Paint {
        Paint::new(self.color, self.icon_emphasis)
    }

    pub fn label_paint(&self) -> Paint {
        Paint::new(self.color, self.label_emphasis)
    }

    pub fn message_paint(&self) -> Paint {
        Paint::new(None, self.message_emphasis)
    }

    pub fn key_paint(&self) -> Paint {
        Paint::new(self.color, self.key_emphasis)
    }
}

static STYLES: [LevelStyle; 10] = [
    LevelStyle::leveled(63, "•", "TRACE", Emphasis::BOLD_FAINT),
    LevelStyle::leveled(145, "•", "DEBUG", Emphasis::BOLD_FAINT),
    LevelStyle::leveled(192, "•", "NOTICE", Emphasis::BOLD),
    LevelStyle::leveled(86, "•", "INFO", Emphasis::BOLD_FAINT),
    LevelStyle::leveled(3, "⚠", "WARN", Emphasis::BOLD_FAINT),
    LevelStyle::leveled(33, "✔", "OK", Emphasis::BOLD_FAINT),
    LevelStyle::leveled(34, "✔", "SUCCESS", Emphasis::BOLD_FAINT),
    LevelStyle::leveled(204, "✖", "ERROR", Emphasis::BOLD_FAINT),
    LevelStyle::leveled(134, "✖", "FATAL", Emphasis::BOLD_FAINT),
    LevelStyle {
        color: None,
        icon: "",
        label: "",
        icon_emphasis: Emphasis::PLAIN,
        label_emphasis: Emphasis::PLAIN,
        message_emphasis: Emphasis::PLAIN,
        key_emphasis: Emphasis::BOLD_FAINT,
    },
];

impl Level {
    /// Look up the style of this level.
    #[inline]
    pub fn style(self) -> &'static LevelStyle {
        &STYLES[self as usize]
    }
}

/// Map an xterm-256 palette index to a `colored` color.
///
/// The sixteen system colors keep their named variants so terminals can apply
/// their own theme; the 6x6x6 cube and the grayscale ramp become true-color.
pub const fn xterm(index: u8) -> Color {
    match index {
        0 => Color::Black,
        1 => Color::Red,
        2 => Color::Green,
        3 => Color::Yellow,
        4 => Color::Blue,
        5 => Color::Magenta,
        6 => Color::Cyan,
        7 => Color::White,
        8 => Color::BrightBlack,
        9 => Color::BrightRed,
        10 => Color::BrightGreen,
        11 => Color::BrightYellow,
        12 => Color::BrightBlue,
        13 => Color::BrightMagenta,
        14 => Color::BrightCyan,
        15 => Color::BrightWhite,
        16..=231 => {
            let cube = index - 16;
            Color::TrueColor {
                r: cube_step(cube / 36),
                g: cube_step((cube / 6) % 6),
                b: cube_step(cube % 6),
            }
        }
        _ => {
            let gray = 8 + (index - 232) * 10;
            Color::TrueColor { r: gray, g: gray, b: gray }
        }
    }
}

const fn cube_step(step: u8) -> u8 {
    if step == 0 {
        0
    } else {
        55 + step * 40
    }
}
