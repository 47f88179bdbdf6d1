//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides convenience methods for applying ANSI
//! styling via the `colored` crate. Implementations for `&str` and `String`
//! are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn heading_style(&self) -> ColoredString;
    fn location_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn flavor_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn quest_style(&self) -> ColoredString;
    fn reward_style(&self) -> ColoredString;
    fn health_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn heading_style(&self) -> ColoredString {
        self.bold().truecolor(230, 200, 60)
    }
    fn location_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10)
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn flavor_style(&self) -> ColoredString {
        self.italic().truecolor(110, 220, 110)
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn quest_style(&self) -> ColoredString {
        self.truecolor(220, 40, 220)
    }
    fn reward_style(&self) -> ColoredString {
        self.bold().truecolor(150, 230, 30)
    }
    fn health_style(&self) -> ColoredString {
        self.truecolor(230, 80, 80)
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(180, 180, 180)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
}

impl GameStyle for String {
    fn heading_style(&self) -> ColoredString {
        self.as_str().heading_style()
    }
    fn location_style(&self) -> ColoredString {
        self.as_str().location_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn flavor_style(&self) -> ColoredString {
        self.as_str().flavor_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn quest_style(&self) -> ColoredString {
        self.as_str().quest_style()
    }
    fn reward_style(&self) -> ColoredString {
        self.as_str().reward_style()
    }
    fn health_style(&self) -> ColoredString {
        self.as_str().health_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
}
