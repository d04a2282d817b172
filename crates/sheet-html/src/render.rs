//! Rendering of single table cells

use std::borrow::Cow;
use std::fmt::Write;

use sheet_html_core::{CellRecord, CssColor};

use crate::escape::escape_html;
use crate::join::{CellDisposition, EnrichedCell};
use crate::merge::MergeRegion;
use crate::options::HtmlWriteOptions;

/// Renders enriched cells to `<th>`/`<td>` markup
#[derive(Debug, Clone, Copy)]
pub struct CellRenderer<'o> {
    options: &'o HtmlWriteOptions,
}

impl<'o> CellRenderer<'o> {
    pub fn new(options: &'o HtmlWriteOptions) -> Self {
        Self { options }
    }

    /// Render one cell, or the empty string when a merge absorbs it
    pub fn render(&self, cell: &EnrichedCell<'_>) -> String {
        let region = match cell.disposition() {
            CellDisposition::Suppressed => return String::new(),
            CellDisposition::Single => None,
            CellDisposition::Anchor(region) => Some(region),
        };

        let record = cell.record;
        let tag = record.element_kind().tag();
        let mut html = String::with_capacity(160 + record.display_value.len());

        let _ = write!(html, "<{} style=\"{}\"", tag, self.inline_style(record));
        if let Some(region) = region {
            html.push_str(&span_attributes(region));
        }
        if record.has_note() {
            let _ = write!(html, " title=\"{}\"", self.text(&record.note));
        }
        let _ = write!(html, ">{}</{}>", self.text(&record.display_value), tag);

        html
    }

    /// Inline CSS, always in the same declaration order
    pub fn inline_style(&self, record: &CellRecord) -> String {
        let style = &record.style;
        let align = if record.value_kind.is_text_like() {
            "left"
        } else {
            "right"
        };

        format!(
            "background-color:{};color:{};font-style:{};font-weight:{};text-align:{};border:{}",
            css_color(&style.background_color, "transparent"),
            css_color(&style.text_color, "inherit"),
            style.font_style,
            style.font_weight,
            align,
            escape_html(&self.options.cell_border),
        )
    }

    fn text<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.options.escape_content {
            escape_html(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// ` rowspan="R"` and/or ` colspan="C"`, each only when greater than one
fn span_attributes(region: &MergeRegion) -> String {
    let mut attrs = String::new();
    if region.row_span > 1 {
        let _ = write!(attrs, " rowspan=\"{}\"", region.row_span);
    }
    if region.col_span > 1 {
        let _ = write!(attrs, " colspan=\"{}\"", region.col_span);
    }
    attrs
}

fn css_color(color: &CssColor, unset: &'static str) -> Cow<'static, str> {
    if color.is_none() {
        Cow::Borrowed(unset)
    } else {
        Cow::Owned(color.to_string())
    }
}
