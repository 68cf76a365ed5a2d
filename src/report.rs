//! Assembly of rendered panels into one self-contained HTML artifact

use crate::error::{ForecastError, Result};
use crate::render::RenderedPanel;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default document title
pub const DEFAULT_TITLE: &str = "Sales Prediction Dashboard";

/// Composes rendered panels into a single HTML document.
///
/// The document is fully self-contained: panel images are inlined as
/// base64 PNG data, and the styling block references no external files.
/// The write is atomic: the document appears at the output path complete
/// or not at all.
#[derive(Debug, Clone)]
pub struct ReportComposer {
    title: String,
}

impl ReportComposer {
    /// Create a composer with the default document title
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Create a composer with a custom document title
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Get the document title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Render the full document for the given panels.
    ///
    /// Panels are emitted in the order given; the caller keeps them in
    /// ascending index order. After every even-positioned panel (0-based)
    /// a row break keeps the gallery at two panels per row.
    pub fn render_document(&self, panels: &[RenderedPanel]) -> String {
        let mut doc = String::new();

        doc.push_str("<html>\n<head>\n");
        doc.push_str(
            "<meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\">\n",
        );
        doc.push_str("<style>\n");
        doc.push_str(
            "body { background: linear-gradient(160deg, #1b2735 0%, #090a0f 100%); \
             background-attachment: fixed; min-height: 100vh; }\n",
        );
        doc.push_str(
            ".graph-container { display: flex; flex-wrap: wrap; justify-content: center; \
             align-items: center; }\n",
        );
        doc.push_str(".graph { display: inline-block; margin: 10px; }\n");
        doc.push_str(".title { color: white; text-align: center; }\n");
        doc.push_str(".info { display: flex; justify-content: space-between; }\n");
        doc.push_str(".previous-sales { float: left; color: white; }\n");
        doc.push_str(".predicted-sales { float: right; color: white; }\n");
        doc.push_str(".footer { color: white; text-align: center; font-size: small; }\n");
        doc.push_str("</style>\n");
        doc.push_str(&format!("<title>{}</title>\n", escape_html(&self.title)));
        doc.push_str("</head>\n<body>\n");
        doc.push_str(&format!(
            "<h1 class=\"title\">{}</h1>\n",
            escape_html(&self.title)
        ));
        doc.push_str("<div class=\"graph-container\">\n");

        for (position, panel) in panels.iter().enumerate() {
            doc.push_str("<div class=\"graph\">\n");
            doc.push_str(&format!(
                "<h3 class=\"title\">Item Type: {}</h3>\n",
                escape_html(&panel.category)
            ));
            doc.push_str(&format!(
                "<img src=\"data:image/png;base64,{}\" style=\"width: 5in; height: 3in;\">\n",
                base64::encode(&panel.image)
            ));
            doc.push_str("<div class=\"info\">\n");
            doc.push_str(&format!(
                "<div class=\"previous-sales\">Previous Sales: {:.2}</div>\n",
                panel.previous
            ));
            doc.push_str(&format!(
                "<div class=\"predicted-sales\">Predicted Sales: {:.2}</div>\n",
                panel.predicted
            ));
            doc.push_str("</div>\n");
            doc.push_str("</div>\n");

            // Two panels per row
            if position % 2 == 0 {
                doc.push_str("<div style=\"clear: both;\"></div>\n");
            }
        }

        doc.push_str("</div>\n");
        doc.push_str(&format!(
            "<p class=\"footer\">Generated {}</p>\n",
            chrono::Utc::now().format("%Y-%m-%d %H:%M UTC")
        ));
        doc.push_str("</body>\n</html>\n");

        doc
    }

    /// Write the document for `panels` to `output` in one atomic step.
    ///
    /// The document is staged in a temporary file next to the output path
    /// and renamed into place; on any failure the staging file is removed
    /// when it drops, so no partial artifact is ever observable.
    pub fn compose(&self, panels: &[RenderedPanel], output: &Path) -> Result<PathBuf> {
        let document = self.render_document(panels);

        let parent = match output.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(parent)?;
        staged.write_all(document.as_bytes())?;
        staged.flush()?;
        staged
            .persist(output)
            .map_err(|e| ForecastError::IoError(e.error))?;

        log::info!(
            "report with {} panel(s) written to {}",
            panels.len(),
            output.display()
        );

        Ok(output.to_path_buf())
    }
}

impl Default for ReportComposer {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape text for embedding in HTML element content
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
