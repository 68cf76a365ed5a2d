use forecast_sales::error::ForecastError;
use forecast_sales::forecaster::ForecastPoint;
use forecast_sales::render::{PanelRenderer, PANEL_HEIGHT, PANEL_WIDTH};

fn sample_point() -> ForecastPoint {
    ForecastPoint {
        index: 2,
        category: "Snacks".to_string(),
        history: vec![10.0, 12.5, 11.0],
        predicted: 13.25,
    }
}

#[test]
fn test_render_produces_png_bytes() {
    let renderer = PanelRenderer::new();
    let panel = renderer.render(&sample_point()).unwrap();

    // PNG signature
    assert_eq!(
        &panel.image[..8],
        &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]
    );
}

#[test]
fn test_render_uses_fixed_canvas_dimensions() {
    let renderer = PanelRenderer::new();
    let panel = renderer.render(&sample_point()).unwrap();

    let decoder = png::Decoder::new(std::io::Cursor::new(&panel.image[..]));
    let reader = decoder.read_info().unwrap();
    let info = reader.info();

    assert_eq!(info.width, PANEL_WIDTH);
    assert_eq!(info.height, PANEL_HEIGHT);
    assert_eq!(info.color_type, png::ColorType::Rgb);
}

#[test]
fn test_panel_carries_the_point_values() {
    let renderer = PanelRenderer::new();
    let point = sample_point();
    let panel = renderer.render(&point).unwrap();

    assert_eq!(panel.index, point.index);
    assert_eq!(panel.category, point.category);
    assert_eq!(panel.previous, 11.0);
    assert_eq!(panel.predicted, 13.25);
}

#[test]
fn test_render_is_deterministic() {
    let renderer = PanelRenderer::new();
    let point = sample_point();

    let first = renderer.render(&point).unwrap();
    let second = renderer.render(&point).unwrap();

    assert_eq!(first.image, second.image);
}

#[test]
fn test_non_finite_history_fails_for_that_panel_only() {
    let renderer = PanelRenderer::new();
    let point = ForecastPoint {
        index: 4,
        category: "Dairy".to_string(),
        history: vec![1.0, f64::NAN, 2.0, 3.0, 4.0],
        predicted: 5.0,
    };

    let result = renderer.render(&point);

    match result {
        Err(ForecastError::RenderError { index, message }) => {
            assert_eq!(index, 4);
            assert!(message.contains("non-finite"));
        }
        other => panic!("Expected RenderError, got {:?}", other),
    }
}

#[test]
fn test_non_finite_prediction_is_rejected() {
    let renderer = PanelRenderer::new();
    let point = ForecastPoint {
        predicted: f64::INFINITY,
        ..sample_point()
    };

    let result = renderer.render(&point);

    assert!(matches!(
        result,
        Err(ForecastError::RenderError { index: 2, .. })
    ));
}

#[test]
fn test_empty_history_is_rejected() {
    let renderer = PanelRenderer::new();
    let point = ForecastPoint {
        index: 0,
        category: "Snacks".to_string(),
        history: Vec::new(),
        predicted: 1.0,
    };

    let result = renderer.render(&point);

    assert!(matches!(
        result,
        Err(ForecastError::RenderError { index: 0, .. })
    ));
}

#[test]
fn test_constant_history_still_renders() {
    // Flat line data must render, not divide the value range to nothing
    let renderer = PanelRenderer::new();
    let point = ForecastPoint {
        index: 3,
        category: "Soda".to_string(),
        history: vec![5.0, 5.0, 5.0, 5.0],
        predicted: 5.0,
    };

    let panel = renderer.render(&point).unwrap();

    assert!(!panel.image.is_empty());
}
