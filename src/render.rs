//! Rendering of forecast points into standalone PNG panels

use crate::error::{ForecastError, Result};
use crate::forecaster::ForecastPoint;
use plotters::prelude::*;

mod glyph;

use glyph::Canvas;

/// Fixed panel width in pixels (displayed at 5in)
pub const PANEL_WIDTH: u32 = 500;
/// Fixed panel height in pixels (displayed at 3in)
pub const PANEL_HEIGHT: u32 = 300;

const HISTORY_COLOR: RGBColor = RGBColor(31, 119, 180);
const PREDICTION_COLOR: RGBColor = RGBColor(214, 39, 40);

const TEXT: [u8; 3] = [40, 40, 40];
const FRAME: [u8; 3] = [120, 120, 120];
const ANNOTATION_FILL: [u8; 3] = [235, 235, 235];
const HISTORY_RGB: [u8; 3] = [31, 119, 180];
const PREDICTION_RGB: [u8; 3] = [214, 39, 40];

/// Vertical space reserved above the plot for title and annotation
const HEADER_HEIGHT: u32 = 66;
/// Vertical space reserved below the plot for the legend
const FOOTER_HEIGHT: u32 = 34;

/// One rendered panel, ready for the report composer.
#[derive(Debug, Clone)]
pub struct RenderedPanel {
    /// Index of the forecast point this panel shows
    pub index: usize,
    /// Category label shown as the panel title
    pub category: String,
    /// Encoded PNG bytes
    pub image: Vec<u8>,
    /// Latest observed value (`history[-1]`)
    pub previous: f64,
    /// Predicted next value
    pub predicted: f64,
}

/// Renders one [`ForecastPoint`] into a fixed-size PNG, fully in memory.
#[derive(Debug, Clone)]
pub struct PanelRenderer {
    width: u32,
    height: u32,
}

impl PanelRenderer {
    /// Create a renderer with the fixed panel dimensions
    pub fn new() -> Self {
        Self {
            width: PANEL_WIDTH,
            height: PANEL_HEIGHT,
        }
    }

    /// Render a forecast point into PNG bytes.
    ///
    /// The history is drawn as a connected line, the prediction as a single
    /// marker at the last time position, with the observed/predicted pair
    /// stamped as an annotation and the category as the title. A failure
    /// here is attributable to this panel alone.
    pub fn render(&self, point: &ForecastPoint) -> Result<RenderedPanel> {
        let previous = match point.history.last() {
            Some(&value) => value,
            None => {
                return Err(ForecastError::RenderError {
                    index: point.index,
                    message: "empty history".to_string(),
                })
            }
        };

        if point.history.iter().any(|v| !v.is_finite()) || !point.predicted.is_finite() {
            return Err(ForecastError::RenderError {
                index: point.index,
                message: "non-finite value in history or prediction".to_string(),
            });
        }

        let width = self.width as usize;
        let height = self.height as usize;
        let mut buffer = vec![255u8; width * height * 3];

        self.draw_chart(&mut buffer, point)?;
        self.draw_labels(&mut buffer, point, previous);

        let image = encode_png(&buffer, self.width, self.height).map_err(|e| {
            ForecastError::RenderError {
                index: point.index,
                message: format!("PNG encoding failed: {}", e),
            }
        })?;

        Ok(RenderedPanel {
            index: point.index,
            category: point.category.clone(),
            image,
            previous,
            predicted: point.predicted,
        })
    }

    /// Draw the history line and prediction marker into the RGB buffer
    fn draw_chart(&self, buffer: &mut [u8], point: &ForecastPoint) -> Result<()> {
        let index = point.index;
        let last_pos = (point.history.len() - 1) as f64;
        let (y_min, y_max) = value_range(&point.history, point.predicted);

        let backend = BitMapBackend::with_buffer(buffer, (self.width, self.height));
        let area = backend.into_drawing_area();
        area.fill(&WHITE).map_err(|e| render_error(index, e))?;

        let mut chart = ChartBuilder::on(&area)
            .margin_top(HEADER_HEIGHT)
            .margin_bottom(FOOTER_HEIGHT)
            .margin_left(14)
            .margin_right(14)
            .build_cartesian_2d(-0.5..last_pos + 0.5, y_min..y_max)
            .map_err(|e| render_error(index, e))?;

        chart
            .draw_series(LineSeries::new(
                point
                    .history
                    .iter()
                    .enumerate()
                    .map(|(k, &v)| (k as f64, v)),
                &HISTORY_COLOR,
            ))
            .map_err(|e| render_error(index, e))?;

        chart
            .draw_series(std::iter::once(Circle::new(
                (last_pos, point.predicted),
                4,
                PREDICTION_COLOR.filled(),
            )))
            .map_err(|e| render_error(index, e))?;

        area.present().map_err(|e| render_error(index, e))?;

        Ok(())
    }

    /// Stamp title, annotation and legend over the chart buffer
    fn draw_labels(&self, buffer: &mut [u8], point: &ForecastPoint, previous: f64) {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut canvas = Canvas::new(buffer, width, height);

        canvas.draw_rect_outline(0, 0, width - 1, height - 1, FRAME);

        // Title, centered
        let title = format!("Item Type: {}", point.category);
        let title_width = glyph::text_width(&title, 2);
        let title_x = width.saturating_sub(title_width) / 2;
        canvas.draw_text(title_x, 8, &title, 2, TEXT);

        // Annotation box with the observed/predicted pair
        let prev_line = format!("Previous Sales: {:.2}", previous);
        let pred_line = format!("Predicted Sales: {:.2}", point.predicted);
        let line_height = glyph::text_height(2);
        let box_width = glyph::text_width(&prev_line, 2)
            .max(glyph::text_width(&pred_line, 2))
            + 12;
        let box_top = 12 + line_height;
        let box_bottom = box_top + 2 * line_height + 16;
        canvas.fill_rect(8, box_top, 8 + box_width, box_bottom, ANNOTATION_FILL);
        canvas.draw_rect_outline(8, box_top, 8 + box_width, box_bottom, FRAME);
        canvas.draw_text(14, box_top + 5, &prev_line, 2, TEXT);
        canvas.draw_text(14, box_top + line_height + 11, &pred_line, 2, TEXT);

        // Legend
        let legend_y = height - (FOOTER_HEIGHT as usize) + 8;
        let sample_y = legend_y + glyph::text_height(2) / 2;
        let mut cursor = 14;
        canvas.fill_rect(cursor, sample_y - 1, cursor + 22, sample_y + 1, HISTORY_RGB);
        cursor += 28;
        canvas.draw_text(cursor, legend_y, "Previous Sales", 2, TEXT);
        cursor += glyph::text_width("Previous Sales", 2) + 24;
        canvas.fill_rect(cursor, sample_y - 4, cursor + 8, sample_y + 4, PREDICTION_RGB);
        cursor += 14;
        canvas.draw_text(cursor, legend_y, "Predicted Sales", 2, TEXT);
    }
}

impl Default for PanelRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Value range covering history and prediction, padded for readability
fn value_range(history: &[f64], predicted: f64) -> (f64, f64) {
    let mut lo = predicted;
    let mut hi = predicted;
    for &v in history {
        lo = lo.min(v);
        hi = hi.max(v);
    }

    if hi - lo < f64::EPSILON {
        (lo - 1.0, hi + 1.0)
    } else {
        let pad = (hi - lo) * 0.1;
        (lo - pad, hi + pad)
    }
}

fn render_error<E: std::fmt::Display>(index: usize, err: E) -> ForecastError {
    ForecastError::RenderError {
        index,
        message: err.to_string(),
    }
}

/// Encode an RGB24 buffer as PNG bytes
fn encode_png(
    buffer: &[u8],
    width: u32,
    height: u32,
) -> std::result::Result<Vec<u8>, png::EncodingError> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(buffer)?;
    }
    Ok(out)
}
