//! HTML output options

/// Options for rendering a grid to HTML
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlWriteOptions {
    /// Escape display values and notes (default: true)
    ///
    /// Turning this off embeds cell text verbatim, which lets cell content
    /// inject markup.
    pub escape_content: bool,
    /// CSS `border` value applied to every cell
    pub cell_border: String,
    /// Wrap the table in a full HTML document when writing
    pub full_page: bool,
    /// `<title>` of the full-page document
    pub page_title: Option<String>,
}

impl Default for HtmlWriteOptions {
    fn default() -> Self {
        Self {
            escape_content: true,
            cell_border: DEFAULT_CELL_BORDER.to_string(),
            full_page: false,
            page_title: None,
        }
    }
}

impl HtmlWriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable escaping of cell text
    pub fn with_escape_content(mut self, escape: bool) -> Self {
        self.escape_content = escape;
        self
    }

    /// Set the per-cell border declaration
    pub fn with_cell_border<S: Into<String>>(mut self, border: S) -> Self {
        self.cell_border = border.into();
        self
    }

    /// Write a complete document instead of a bare table
    pub fn with_full_page(mut self, full_page: bool) -> Self {
        self.full_page = full_page;
        self
    }

    /// Set the document title (implies nothing about `full_page`)
    pub fn with_page_title<S: Into<String>>(mut self, title: S) -> Self {
        self.page_title = Some(title.into());
        self
    }
}

/// Border every cell gets unless configured otherwise
pub const DEFAULT_CELL_BORDER: &str = "1px solid black";
