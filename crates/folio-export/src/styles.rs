use serde::{Deserialize, Serialize};

/// Document styling configuration for exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font stack for body text (e.g. "Georgia, serif").
    pub body_font: String,

    /// Font stack for headings.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Document title font size in points.
    pub heading1_size: usize,

    /// Section heading font size in points.
    pub heading2_size: usize,

    /// Item heading font size in points.
    pub heading3_size: usize,

    /// Page margin in inches (applied uniformly).
    pub margin_inches: f64,

    /// Accent colour for rules, headings and metric values.
    pub accent_color: String,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Helvetica, Arial, sans-serif".to_string(),
            heading_font: "Georgia, 'Times New Roman', serif".to_string(),
            body_size: 11,
            heading1_size: 26,
            heading2_size: 16,
            heading3_size: 13,
            margin_inches: 0.8,
            accent_color: "#1e3a8a".to_string(),
        }
    }
}

impl DocumentStyles {
    /// The stylesheet embedded in every exported document.
    pub fn css(&self) -> String {
        format!(
            "@page {{ margin: {margin}in; }}\n\
             body {{ font-family: {body_font}; font-size: {body}pt; color: #1f2937; margin: 0; }}\n\
             h1, h2, h3 {{ font-family: {heading_font}; color: {accent}; }}\n\
             h1 {{ font-size: {h1}pt; margin: 0 0 4pt; }}\n\
             h2 {{ font-size: {h2}pt; border-bottom: 1px solid {accent}; padding-bottom: 2pt; }}\n\
             h3 {{ font-size: {h3}pt; margin: 0 0 2pt; }}\n\
             .document-header {{ border-bottom: 3px solid {accent}; padding-bottom: 12pt; margin-bottom: 18pt; }}\n\
             .subtitle {{ font-size: {h3}pt; color: #4b5563; margin: 0 0 8pt; }}\n\
             .meta p {{ margin: 0; color: #6b7280; }}\n\
             .metric-grid {{ display: flex; flex-wrap: wrap; gap: 12pt; }}\n\
             .metric {{ border: 1px solid #e5e7eb; border-radius: 6pt; padding: 8pt 12pt; }}\n\
             .metric-value {{ display: block; font-size: {h2}pt; font-weight: bold; color: {accent}; }}\n\
             .metric-change {{ display: block; color: #15803d; }}\n\
             .card {{ border-radius: 6pt; padding: 8pt 12pt; margin-bottom: 8pt; }}\n\
             .status {{ font-size: 9pt; text-transform: uppercase; color: #6b7280; }}\n\
             table {{ width: 100%; border-collapse: collapse; }}\n\
             th, td {{ text-align: left; padding: 4pt 6pt; border-bottom: 1px solid #e5e7eb; }}\n\
             .document-footer {{ position: fixed; bottom: 0; width: 100%; text-align: center; font-size: 8pt; color: #9ca3af; }}\n",
            margin = self.margin_inches,
            body_font = self.body_font,
            heading_font = self.heading_font,
            body = self.body_size,
            accent = self.accent_color,
            h1 = self.heading1_size,
            h2 = self.heading2_size,
            h3 = self.heading3_size,
        )
    }
}
