//! Table and page assembly from rendered cells

use crate::escape::escape_html;
use crate::options::HtmlWriteOptions;

const TABLE_OPEN: &str = "<table style=\"border-collapse: collapse;\">";
const TABLE_CLOSE: &str = "</table>";

/// Wraps rendered cell rows into a table, and optionally a document
#[derive(Debug, Clone, Copy)]
pub struct TableAssembler<'o> {
    options: &'o HtmlWriteOptions,
}

impl<'o> TableAssembler<'o> {
    pub fn new(options: &'o HtmlWriteOptions) -> Self {
        Self { options }
    }

    /// One `<tr>` per row, rows separated by newlines
    ///
    /// Suppressed positions are empty strings and simply vanish from the
    /// concatenation.
    pub fn table<S: AsRef<str>>(&self, rows: &[Vec<S>]) -> String {
        let mut html = String::from(TABLE_OPEN);
        html.push('\n');
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                html.push('\n');
            }
            html.push_str("<tr>");
            for cell in row {
                html.push_str(cell.as_ref());
            }
            html.push_str("</tr>");
        }
        html.push('\n');
        html.push_str(TABLE_CLOSE);
        html
    }

    /// The table inside a minimal HTML document
    pub fn page<S: AsRef<str>>(&self, rows: &[Vec<S>]) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        if let Some(title) = &self.options.page_title {
            html.push_str("<title>");
            html.push_str(&escape_html(title));
            html.push_str("</title>\n");
        }
        html.push_str("</head>\n<body>\n");
        html.push_str(&self.table(rows));
        html.push_str("\n</body>\n</html>\n");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rows() -> Vec<Vec<&'static str>> {
        vec![
            vec!["<th>a</th>", ""],
            vec!["<td>1</td>", "<td>2</td>"],
        ]
    }

    #[test]
    fn test_table() {
        let options = HtmlWriteOptions::default();
        assert_eq!(
            TableAssembler::new(&options).table(&rows()),
            "<table style=\"border-collapse: collapse;\">\n\
             <tr><th>a</th></tr>\n\
             <tr><td>1</td><td>2</td></tr>\n\
             </table>"
        );
    }

    #[test]
    fn test_empty_table() {
        let options = HtmlWriteOptions::default();
        let empty: Vec<Vec<String>> = Vec::new();
        assert_eq!(
            TableAssembler::new(&options).table(&empty),
            "<table style=\"border-collapse: collapse;\">\n\n</table>"
        );
    }

    #[test]
    fn test_page_wraps_table() {
        let options = HtmlWriteOptions::default().with_page_title("Q3 <draft>");
        let assembler = TableAssembler::new(&options);
        let page = assembler.page(&rows());

        assert!(page.starts_with("<!DOCTYPE html>\n<html>\n<head>\n"));
        assert!(page.contains("<title>Q3 &lt;draft&gt;</title>"));
        assert!(page.contains(&assembler.table(&rows())));
        assert!(page.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_page_without_title() {
        let options = HtmlWriteOptions::default();
        let page = TableAssembler::new(&options).page(&rows());
        assert!(!page.contains("<title>"));
    }

    #[test]
    fn test_assembly_is_repeatable() {
        let options = HtmlWriteOptions::default();
        let assembler = TableAssembler::new(&options);
        assert_eq!(assembler.table(&rows()), assembler.table(&rows()));
        assert_eq!(assembler.page(&rows()), assembler.page(&rows()));
    }
}
