//! SVG document builder.

use std::fmt::Write;

use crate::element::SvgElement;
use crate::format::xml_escape;

/// Builder for a standalone SVG document.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    title: String,
    defs: Vec<String>,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            defs: Vec::new(),
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Adds markup to the `<defs>` block (gradients, clip paths).
    #[must_use]
    pub fn push_def(mut self, def: impl Into<String>) -> Self {
        self.defs.push(def.into());
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn push_raw(mut self, svg: impl Into<String>) -> Self {
        self.elements.push(svg.into());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg" role="img">"#,
            w = self.width,
            h = self.height
        );

        if !self.title.is_empty() {
            let escaped = xml_escape(&self.title);
            let _ = writeln!(output, "  <title>{escaped}</title>");
        }

        if !self.defs.is_empty() {
            output.push_str("  <defs>\n");
            for def in self.defs {
                for line in def.lines() {
                    let _ = writeln!(output, "    {line}");
                }
            }
            output.push_str("  </defs>\n");
        }

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "  {line}");
            }
        }

        output.push_str("</svg>\n");
        output
    }
}
