//! Stats/streak card layout.

use gc_core::{NumberStyle, Palette, Row, ThemeName};

use crate::builder::SvgBuilder;
use crate::element::{Rect, Text, TextAnchor};

const PADDING_X: f64 = 25.0;
const TITLE_Y: f64 = 38.0;
const FIRST_ROW_Y: f64 = 78.0;
const ROW_HEIGHT: f64 = 30.0;
const BOTTOM_PADDING: f64 = 18.0;
const CORNER_RADIUS: f64 = 10.0;
const GRADIENT_ID: &str = "card-bg";

/// Approximate advance width of one value glyph at 14px bold.
const VALUE_CHAR_WIDTH: f64 = 8.5;
const PILL_PADDING_X: f64 = 9.0;
const PILL_HEIGHT: f64 = 22.0;

/// Visual options for a card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardStyle {
    pub width: f64,
    pub palette: Palette,
    pub accent: String,
    pub number_style: NumberStyle,
}

impl CardStyle {
    /// Style for `theme`, using the theme's own accent.
    #[must_use]
    pub fn new(theme: ThemeName) -> Self {
        let palette = *theme.palette();
        Self {
            width: 495.0,
            palette,
            accent: palette.accent.to_string(),
            number_style: NumberStyle::default(),
        }
    }

    #[must_use]
    pub const fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Replaces the theme accent when `accent` is set.
    #[must_use]
    pub fn with_accent(mut self, accent: Option<&str>) -> Self {
        if let Some(accent) = accent {
            self.accent = accent.to_string();
        }
        self
    }

    #[must_use]
    pub const fn with_number_style(mut self, style: NumberStyle) -> Self {
        self.number_style = style;
        self
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "row counts and string lengths are tiny"
)]
fn card_height(row_count: usize) -> f64 {
    (row_count.max(1) as f64 - 1.0).mul_add(ROW_HEIGHT, FIRST_ROW_Y) + BOTTOM_PADDING
}

#[expect(
    clippy::cast_precision_loss,
    reason = "row counts and string lengths are tiny"
)]
fn row_baseline(index: usize) -> f64 {
    (index as f64).mul_add(ROW_HEIGHT, FIRST_ROW_Y)
}

fn gradient_def(palette: &Palette) -> String {
    format!(
        concat!(
            r#"<linearGradient id="{id}" x1="0" y1="0" x2="1" y2="1">"#,
            "\n",
            r#"  <stop offset="0%" stop-color="{bg1}"/>"#,
            "\n",
            r#"  <stop offset="100%" stop-color="{bg2}"/>"#,
            "\n",
            "</linearGradient>"
        ),
        id = GRADIENT_ID,
        bg1 = palette.bg1,
        bg2 = palette.bg2
    )
}

/// Renders `title` and `rows` as a themed SVG card.
///
/// Rows are drawn in order with labels on the left and values right-aligned.
#[expect(
    clippy::cast_precision_loss,
    reason = "row counts and string lengths are tiny"
)]
pub fn render_card(title: &str, rows: &[Row], style: &CardStyle) -> String {
    let palette = &style.palette;
    let width = style.width;
    let height = card_height(rows.len());
    let value_x = width - PADDING_X;

    let mut builder = SvgBuilder::new(width, height)
        .with_title(title)
        .push_def(gradient_def(palette))
        .push_element(
            &Rect::new(0.5, 0.5, width - 1.0, height - 1.0)
                .with_radius(CORNER_RADIUS)
                .with_fill(format!("url(#{GRADIENT_ID})"))
                .with_stroke(palette.border),
        )
        .push_element(
            &Text::new(PADDING_X, TITLE_Y, title)
                .with_fill(palette.title)
                .with_font_size(18.0)
                .with_weight(600),
        );

    for (index, row) in rows.iter().enumerate() {
        let baseline = row_baseline(index);

        if index > 0 {
            builder = builder.push_element(
                &Rect::new(PADDING_X, baseline - ROW_HEIGHT + 9.0, width - 2.0 * PADDING_X, 1.0)
                    .with_fill(palette.dot),
            );
        }

        builder = builder.push_element(
            &Text::new(PADDING_X, baseline, &row.label)
                .with_fill(palette.label)
                .with_font_size(14.0),
        );

        let value = Text::new(value_x, baseline, &row.value)
            .with_font_size(14.0)
            .with_weight(700);

        builder = match style.number_style {
            NumberStyle::Accent => builder.push_element(
                &value
                    .with_fill(style.accent.as_str())
                    .with_anchor(TextAnchor::End),
            ),
            NumberStyle::Pill => {
                let text_width = row.value.chars().count() as f64 * VALUE_CHAR_WIDTH;
                let pill_width = 2.0f64.mul_add(PILL_PADDING_X, text_width);
                let pill_x = value_x - pill_width;
                builder
                    .push_element(
                        &Rect::new(pill_x, baseline - 16.0, pill_width, PILL_HEIGHT)
                            .with_radius(PILL_HEIGHT / 2.0)
                            .with_fill(style.accent.as_str())
                            .with_fill_opacity(0.15),
                    )
                    .push_element(
                        &Text {
                            x: pill_width.mul_add(0.5, pill_x),
                            ..value
                        }
                        .with_fill(style.accent.as_str())
                        .with_anchor(TextAnchor::Middle),
                    )
            }
        };
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<Row> {
        vec![
            Row::new("Current Streak", "12 days"),
            Row::new("Longest Streak", "1,204 days"),
            Row::new("Contributions", "5,310"),
        ]
    }

    #[test]
    fn card_contains_title_and_rows() {
        let svg = render_card(
            "octocat's Contribution Streak",
            &sample_rows(),
            &CardStyle::new(ThemeName::DefaultLight),
        );
        assert!(svg.contains("<title>octocat&#39;s Contribution Streak</title>"));
        assert!(svg.contains(">Longest Streak</text>"));
        assert!(svg.contains(">1,204 days</text>"));
    }

    #[test]
    fn card_uses_theme_colors() {
        let palette = ThemeName::Midnight.palette();
        let svg = render_card("t", &sample_rows(), &CardStyle::new(ThemeName::Midnight));
        assert!(svg.contains(&format!(r#"stop-color="{}""#, palette.bg1)));
        assert!(svg.contains(&format!(r#"stop-color="{}""#, palette.bg2)));
        assert!(svg.contains(&format!(r#"stroke="{}""#, palette.border)));
        assert!(svg.contains(&format!(r#"fill="{}""#, palette.accent)));
    }

    #[test]
    fn accent_override_replaces_theme_accent() {
        let style = CardStyle::new(ThemeName::Vue).with_accent(Some("#ff00aa"));
        let svg = render_card("t", &sample_rows(), &style);
        assert!(svg.contains(r##"fill="#ff00aa""##));
        assert!(!svg.contains(&format!(r#"fill="{}""#, ThemeName::Vue.palette().accent)));
    }

    #[test]
    fn accent_none_keeps_theme_accent() {
        let style = CardStyle::new(ThemeName::Vue).with_accent(None);
        assert_eq!(style.accent, ThemeName::Vue.palette().accent);
    }

    #[test]
    fn pill_style_draws_one_pill_per_row() {
        let style = CardStyle::new(ThemeName::Slate).with_number_style(NumberStyle::Pill);
        let svg = render_card("t", &sample_rows(), &style);
        assert_eq!(svg.matches(r#"fill-opacity="0.15""#).count(), 3);
        assert_eq!(svg.matches(r#"text-anchor="middle""#).count(), 3);
    }

    #[test]
    fn accent_style_draws_no_pills() {
        let svg = render_card("t", &sample_rows(), &CardStyle::new(ThemeName::Slate));
        assert!(!svg.contains("fill-opacity"));
        assert_eq!(svg.matches(r#"text-anchor="end""#).count(), 3);
    }

    #[test]
    fn height_grows_with_rows() {
        let style = CardStyle::new(ThemeName::DefaultLight);
        let one = render_card("t", &sample_rows()[..1], &style);
        let three = render_card("t", &sample_rows(), &style);
        assert!(one.contains(r#"height="96""#));
        assert!(three.contains(r#"height="156""#));
    }

    #[test]
    fn width_is_configurable() {
        let style = CardStyle::new(ThemeName::DefaultLight).with_width(400.0);
        let svg = render_card("t", &sample_rows(), &style);
        assert!(svg.contains(r#"viewBox="0 0 400 156""#));
    }

    #[test]
    fn separators_between_rows_only() {
        let palette = ThemeName::DefaultLight.palette();
        let svg = render_card("t", &sample_rows(), &CardStyle::new(ThemeName::DefaultLight));
        let separator = format!(r#"height="1" fill="{}""#, palette.dot);
        assert_eq!(svg.matches(&separator).count(), 2);
    }
}
