//! Status badges
//!
//! Renders the 16x16 inline SVG badge the probe endpoint answers with. The
//! fill color carries the tri-state result; the HTTP status is always 200.

/// Tri-state probe result, encoded as the badge fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    /// Target exists and the probe (if any) found real content.
    Green,
    /// Target exists but only excluded matches were found.
    Orange,
    /// Target does not exist.
    Red,
}

impl BadgeColor {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeColor::Green => "green",
            BadgeColor::Orange => "orange",
            BadgeColor::Red => "red",
        }
    }
}

/// Renders a badge carrying a text label.
pub fn labeled(color: BadgeColor, label: &str) -> String {
    format!(
        "<svg viewBox='0 0 16 16' xmlns='http://www.w3.org/2000/svg' font-family='monospace'>\
         <rect width='16' height='16' fill='{}' /><text x='1' y='12'>{}</text></svg>",
        color.as_str(),
        label
    )
}

/// Renders the fixed green badge used when no probe pattern was given.
/// No text element at all, not an empty one.
pub fn plain_green() -> String {
    "<svg viewBox='0 0 16 16' xmlns='http://www.w3.org/2000/svg'>\
     <rect width='16' height='16' fill='green' /></svg>"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_badge_embeds_color_and_label() {
        let svg = labeled(BadgeColor::Red, "docs*");
        assert!(svg.contains("fill='red'"));
        assert!(svg.contains("<text x='1' y='12'>docs*</text>"));
        assert!(svg.contains("viewBox='0 0 16 16'"));
        assert!(svg.contains("font-family='monospace'"));
    }

    #[test]
    fn orange_and_green_render_their_colors() {
        assert!(labeled(BadgeColor::Orange, "x").contains("fill='orange'"));
        assert!(labeled(BadgeColor::Green, "x").contains("fill='green'"));
    }

    #[test]
    fn plain_green_has_no_text_element() {
        let svg = plain_green();
        assert!(svg.contains("fill='green'"));
        assert!(!svg.contains("<text"));
        assert!(!svg.contains("font-family"));
    }
}
