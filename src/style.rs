/// Styling of console text by semantic role
///
/// Renderers ask for a role ("fail", "error stack", ...) instead of a color,
/// so the same output can go to a color terminal or to a plain sink. The
/// plain styler must produce exactly the ANSI output with escapes removed.
use term::color::{self, Color};

/// Named roles a piece of output can play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Bold,
    Pass,
    Fail,
    /// Inline failure message under a failed test
    FailMessage,
    Pending,
    UrgencyLow,
    UrgencyMedium,
    UrgencyHigh,
    /// Inline stack trace under a failed test
    Stack,
    ErrorTitle,
    ErrorMessage,
    ErrorStack,
}

/// Applies a role's style to a piece of text
pub trait Styler {
    fn paint(&self, role: Role, text: &str) -> String;
}

/// ANSI SGR escapes using the terminal color palette
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyler;

impl AnsiStyler {
    fn style_of(role: Role) -> (Option<Color>, bool) {
        match role {
            Role::Bold | Role::Stack => (None, true),
            Role::Pass | Role::UrgencyLow => (Some(color::GREEN), false),
            Role::Fail | Role::UrgencyHigh | Role::ErrorMessage => (Some(color::RED), false),
            Role::FailMessage => (Some(color::RED), true),
            Role::Pending => (Some(color::CYAN), false),
            Role::UrgencyMedium => (Some(color::YELLOW), false),
            Role::ErrorStack => (Some(color::BRIGHT_BLACK), false),
            Role::ErrorTitle => (None, false),
        }
    }
}

impl Styler for AnsiStyler {
    fn paint(&self, role: Role, text: &str) -> String {
        let (fg, bold) = Self::style_of(role);
        if text.is_empty() || (fg.is_none() && !bold) {
            return text.to_string();
        }

        let mut codes = Vec::new();
        if bold {
            codes.push("1".to_string());
        }
        if let Some(c) = fg {
            codes.push(fg_code(c).to_string());
        }
        format!("\x1b[{}m{}\x1b[0m", codes.join(";"), text)
    }
}

/// No-op styler for sinks without color support
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn paint(&self, _role: Role, text: &str) -> String {
        text.to_string()
    }
}

/// SGR foreground code for a palette color
fn fg_code(c: Color) -> u32 {
    if c < 8 { 30 + c } else { 90 + (c - 8) }
}

/// Does stdout look like a terminal that understands colors?
pub fn stdout_supports_color() -> bool {
    term::stdout().map(|t| t.supports_color()).unwrap_or(false)
}

pub fn styler(use_colors: bool) -> Box<dyn Styler> {
    if use_colors { Box::new(AnsiStyler) } else { Box::new(PlainStyler) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: [Role; 12] = [
        Role::Bold,
        Role::Pass,
        Role::Fail,
        Role::FailMessage,
        Role::Pending,
        Role::UrgencyLow,
        Role::UrgencyMedium,
        Role::UrgencyHigh,
        Role::Stack,
        Role::ErrorTitle,
        Role::ErrorMessage,
        Role::ErrorStack,
    ];

    #[test]
    fn test_ansi_palette() {
        let s = AnsiStyler;
        assert_eq!(s.paint(Role::Pass, "ok"), "\x1b[32mok\x1b[0m");
        assert_eq!(s.paint(Role::Fail, "1)"), "\x1b[31m1)\x1b[0m");
        assert_eq!(s.paint(Role::FailMessage, "boom"), "\x1b[1;31mboom\x1b[0m");
        assert_eq!(s.paint(Role::Pending, "-"), "\x1b[36m-\x1b[0m");
        assert_eq!(s.paint(Role::UrgencyMedium, "1200ms"), "\x1b[33m1200ms\x1b[0m");
        assert_eq!(s.paint(Role::ErrorStack, "at x"), "\x1b[90mat x\x1b[0m");
        assert_eq!(s.paint(Role::Bold, "Feature"), "\x1b[1mFeature\x1b[0m");
    }

    #[test]
    fn test_unstyled_roles_pass_through() {
        assert_eq!(AnsiStyler.paint(Role::ErrorTitle, "1) title:"), "1) title:");
        assert_eq!(AnsiStyler.paint(Role::Fail, ""), "");
    }

    #[test]
    fn test_plain_styler_is_identity() {
        for role in ROLES {
            assert_eq!(PlainStyler.paint(role, "text"), "text");
        }
    }

    #[test]
    fn test_ansi_wraps_text_unchanged() {
        for role in ROLES {
            let painted = AnsiStyler.paint(role, "text");
            assert!(painted.contains("text"));
            if painted != "text" {
                assert!(painted.starts_with("\x1b["));
                assert!(painted.ends_with("\x1b[0m"));
            }
        }
    }
}
