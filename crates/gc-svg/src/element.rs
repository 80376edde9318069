//! Primitive SVG elements: rectangles and text.

use std::fmt::{self, Write};

use crate::format::xml_escape;

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

/// A (possibly rounded) rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    pub fill: String,
    pub fill_opacity: Option<f64>,
    pub stroke: Option<String>,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            radius: 0.0,
            fill: "none".to_string(),
            fill_opacity: None,
            stroke: None,
        }
    }

    #[must_use]
    pub const fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    #[must_use]
    pub const fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = Some(opacity);
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }
}

impl SvgElement for Rect {
    fn render(&self) -> String {
        let mut out = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            self.x, self.y, self.width, self.height
        );
        if self.radius > 0.0 {
            let _ = write!(out, r#" rx="{}""#, self.radius);
        }
        let _ = write!(out, r#" fill="{}""#, self.fill);
        if let Some(opacity) = self.fill_opacity {
            let _ = write!(out, r#" fill-opacity="{opacity}""#);
        }
        if let Some(stroke) = &self.stroke {
            let _ = write!(out, r#" stroke="{stroke}""#);
        }
        out.push_str("/>");
        out
    }
}

/// A single line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub fill: String,
    pub font_size: f64,
    pub font_weight: u16,
    pub anchor: TextAnchor,
}

impl Text {
    #[must_use]
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            fill: "#000000".to_string(),
            font_size: 14.0,
            font_weight: 400,
            anchor: TextAnchor::Start,
        }
    }

    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn with_weight(mut self, weight: u16) -> Self {
        self.font_weight = weight;
        self
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }
}

impl SvgElement for Text {
    fn render(&self) -> String {
        format!(
            r#"<text x="{}" y="{}" fill="{}" font-size="{}" font-weight="{}" text-anchor="{}">{}</text>"#,
            self.x,
            self.y,
            self.fill,
            self.font_size,
            self.font_weight,
            self.anchor,
            xml_escape(&self.content)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_renders_minimal_attributes() {
        let rect = Rect::new(1.0, 2.0, 30.0, 40.0);
        assert_eq!(
            rect.render(),
            r#"<rect x="1" y="2" width="30" height="40" fill="none"/>"#
        );
    }

    #[test]
    fn rect_renders_optional_attributes() {
        let rect = Rect::new(0.5, 0.5, 10.0, 10.0)
            .with_radius(4.0)
            .with_fill("#22d3ee")
            .with_fill_opacity(0.15)
            .with_stroke("#e5e7eb");
        let svg = rect.render();
        assert!(svg.contains(r#"rx="4""#));
        assert!(svg.contains(r##"fill="#22d3ee""##));
        assert!(svg.contains(r#"fill-opacity="0.15""#));
        assert!(svg.contains(r##"stroke="#e5e7eb""##));
    }

    #[test]
    fn text_escapes_content() {
        let text = Text::new(0.0, 0.0, "Tom & Jerry's <stats>");
        assert!(text.render().contains(">Tom &amp; Jerry&#39;s &lt;stats&gt;</text>"));
    }

    #[test]
    fn text_renders_anchor_and_weight() {
        let text = Text::new(10.0, 20.0, "42")
            .with_anchor(TextAnchor::End)
            .with_weight(700)
            .with_font_size(16.0)
            .with_fill("#2563eb");
        assert_eq!(
            text.render(),
            r##"<text x="10" y="20" fill="#2563eb" font-size="16" font-weight="700" text-anchor="end">42</text>"##
        );
    }

    #[test]
    fn anchor_display() {
        assert_eq!(TextAnchor::Start.to_string(), "start");
        assert_eq!(TextAnchor::Middle.to_string(), "middle");
        assert_eq!(TextAnchor::End.to_string(), "end");
    }
}
