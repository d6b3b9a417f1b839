//! Closed icon set.
//!
//! Generators name icons with free text; the mapping here is an enumerated
//! tag set, not reflection over arbitrary identifiers. Unrecognized names
//! fall back to the neutral dot glyph; an absent icon field renders nothing
//! (that decision belongs to the caller, see [`glyph_for`]).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Spark,
    Check,
    Chart,
    Gear,
    Doc,
    Link,
    Globe,
    Chat,
    Shield,
    Star,
    User,
    Clock,
    Flag,
    Bolt,
    Target,
    Book,
    Package,
    Heart,
    Arrow,
    Dot,
}

impl Icon {
    /// Case-insensitive exact match over the enumerated set; anything else
    /// is the neutral fallback.
    pub fn from_name(name: &str) -> Icon {
        match name.trim().to_lowercase().as_str() {
            "spark" | "sparkle" => Icon::Spark,
            "check" | "done" => Icon::Check,
            "chart" | "graph" | "metrics" => Icon::Chart,
            "gear" | "settings" => Icon::Gear,
            "doc" | "document" | "file" => Icon::Doc,
            "link" => Icon::Link,
            "globe" | "web" => Icon::Globe,
            "chat" | "message" => Icon::Chat,
            "shield" | "security" => Icon::Shield,
            "star" => Icon::Star,
            "user" | "person" => Icon::User,
            "clock" | "time" => Icon::Clock,
            "flag" => Icon::Flag,
            "bolt" | "lightning" => Icon::Bolt,
            "target" | "goal" => Icon::Target,
            "book" | "guide" => Icon::Book,
            "package" | "box" => Icon::Package,
            "heart" => Icon::Heart,
            "arrow" => Icon::Arrow,
            _ => Icon::Dot,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Spark => "✦",
            Icon::Check => "✓",
            Icon::Chart => "▲",
            Icon::Gear => "⚙",
            Icon::Doc => "▤",
            Icon::Link => "↗",
            Icon::Globe => "◍",
            Icon::Chat => "❝",
            Icon::Shield => "⛨",
            Icon::Star => "★",
            Icon::User => "◉",
            Icon::Clock => "◷",
            Icon::Flag => "⚑",
            Icon::Bolt => "⚡",
            Icon::Target => "◎",
            Icon::Book => "❏",
            Icon::Package => "▣",
            Icon::Heart => "♥",
            Icon::Arrow => "➤",
            Icon::Dot => "•",
        }
    }
}

/// Glyph for an optional icon field: `None` stays invisible, an unknown
/// name gets the fallback glyph.
pub fn glyph_for(name: Option<&str>) -> Option<&'static str> {
    name.map(|n| Icon::from_name(n).glyph())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_map_case_insensitively() {
        assert_eq!(Icon::from_name("Spark"), Icon::Spark);
        assert_eq!(Icon::from_name("  GLOBE "), Icon::Globe);
    }

    #[test]
    fn unknown_names_fall_back_to_dot() {
        assert_eq!(Icon::from_name("definitely-not-an-icon"), Icon::Dot);
        assert_eq!(Icon::from_name(""), Icon::Dot);
    }

    #[test]
    fn absent_icon_renders_nothing() {
        assert_eq!(glyph_for(None), None);
        assert_eq!(glyph_for(Some("nope")), Some("•"));
    }
}
