use forecast_sales::render::RenderedPanel;
use forecast_sales::report::{ReportComposer, DEFAULT_TITLE};
use pretty_assertions::assert_eq;
use std::fs;

fn panel(index: usize, category: &str, previous: f64, predicted: f64) -> RenderedPanel {
    RenderedPanel {
        index,
        category: category.to_string(),
        image: vec![0xAA, 0xBB, 0xCC],
        previous,
        predicted,
    }
}

#[test]
fn test_document_static_elements() {
    let composer = ReportComposer::new();
    let doc = composer.render_document(&[]);

    assert!(doc.contains("<meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\">"));
    assert!(doc.contains(&format!("<title>{}</title>", DEFAULT_TITLE)));
    assert!(doc.contains(&format!("<h1 class=\"title\">{}</h1>", DEFAULT_TITLE)));
    assert!(doc.contains(".graph-container { display: flex; flex-wrap: wrap;"));
    assert!(doc.contains("background: linear-gradient"));
    assert!(doc.contains(".title { color: white;"));
    assert!(doc.contains(".previous-sales { float: left;"));
    assert!(doc.contains(".predicted-sales { float: right;"));
}

#[test]
fn test_document_is_self_contained() {
    let composer = ReportComposer::new();
    let doc = composer.render_document(&[panel(1, "Snacks", 10.0, 11.0)]);

    assert!(doc.contains("data:image/png;base64,"));
    // No references to on-disk resources
    assert!(!doc.contains("src=\"file:"));
    assert!(!doc.contains("url("));
}

#[test]
fn test_panel_markup_and_caption_formatting() {
    let composer = ReportComposer::new();
    let doc = composer.render_document(&[panel(1, "Snacks", 10.0, 11.23456)]);

    assert!(doc.contains("<h3 class=\"title\">Item Type: Snacks</h3>"));
    // Captions carry exactly two decimal places
    assert!(doc.contains("<div class=\"previous-sales\">Previous Sales: 10.00</div>"));
    assert!(doc.contains("<div class=\"predicted-sales\">Predicted Sales: 11.23</div>"));
}

#[test]
fn test_each_panel_shows_its_own_prediction() {
    let composer = ReportComposer::new();
    let doc = composer.render_document(&[
        panel(1, "A", 1.0, 1.5),
        panel(2, "B", 2.0, 2.5),
        panel(3, "C", 3.0, 3.5),
    ]);

    assert!(doc.contains("Predicted Sales: 1.50"));
    assert!(doc.contains("Predicted Sales: 2.50"));
    assert!(doc.contains("Predicted Sales: 3.50"));
}

#[test]
fn test_panels_keep_ascending_order() {
    let composer = ReportComposer::new();
    let doc = composer.render_document(&[
        panel(1, "Baking", 1.0, 1.5),
        panel(2, "Dairy", 2.0, 2.5),
        panel(4, "Snacks", 4.0, 4.5),
    ]);

    let baking = doc.find("Item Type: Baking").unwrap();
    let dairy = doc.find("Item Type: Dairy").unwrap();
    let snacks = doc.find("Item Type: Snacks").unwrap();

    assert!(baking < dairy);
    assert!(dairy < snacks);
}

#[test]
fn test_row_break_after_every_even_panel() {
    let composer = ReportComposer::new();
    let row_break = "<div style=\"clear: both;\"></div>";

    // Breaks follow panels at positions 0, 2, 4, ...
    let doc = composer.render_document(&[panel(1, "A", 1.0, 1.5)]);
    assert_eq!(doc.matches(row_break).count(), 1);

    let doc = composer.render_document(&[
        panel(1, "A", 1.0, 1.5),
        panel(2, "B", 2.0, 2.5),
        panel(3, "C", 3.0, 3.5),
    ]);
    assert_eq!(doc.matches(row_break).count(), 2);

    let doc = composer.render_document(&[
        panel(1, "A", 1.0, 1.5),
        panel(2, "B", 2.0, 2.5),
        panel(3, "C", 3.0, 3.5),
        panel(4, "D", 4.0, 4.5),
    ]);
    assert_eq!(doc.matches(row_break).count(), 2);
}

#[test]
fn test_empty_gallery_still_produces_a_document() {
    let composer = ReportComposer::new();
    let doc = composer.render_document(&[]);

    assert!(doc.contains("<div class=\"graph-container\">"));
    assert_eq!(doc.matches("<img").count(), 0);
    assert!(doc.contains("</html>"));
}

#[test]
fn test_category_labels_are_escaped() {
    let composer = ReportComposer::new();
    let doc = composer.render_document(&[panel(1, "<Snacks & Soda>", 1.0, 2.0)]);

    assert!(doc.contains("Item Type: &lt;Snacks &amp; Soda&gt;"));
    assert!(!doc.contains("<Snacks"));
}

#[test]
fn test_custom_title() {
    let composer = ReportComposer::with_title("Quarterly Outlook");
    let doc = composer.render_document(&[]);

    assert!(doc.contains("<title>Quarterly Outlook</title>"));
    assert!(doc.contains("<h1 class=\"title\">Quarterly Outlook</h1>"));
}

#[test]
fn test_compose_writes_one_artifact_and_nothing_else() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.html");
    let composer = ReportComposer::new();

    let written = composer
        .compose(&[panel(1, "Snacks", 10.0, 11.0)], &output)
        .unwrap();

    assert_eq!(written, output);
    let entries = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("Item Type: Snacks"));
    assert!(content.ends_with("</html>\n"));
}

#[test]
fn test_compose_to_unwritable_location_fails_cleanly() {
    let composer = ReportComposer::new();
    let result = composer.compose(&[], std::path::Path::new("/nonexistent/dir/report.html"));

    assert!(result.is_err());
}
