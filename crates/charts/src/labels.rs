use crate::color::Color;
use crate::tooltip::height_label;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// Plot rectangle in canvas pixels, as reported by the chart after layout.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChartArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelOverlayConfig {
    /// Distance from the point down to the text's top edge.
    pub offset_px: f64,
    /// Labels never start lower than `bottom - bottom_margin_px`.
    pub bottom_margin_px: f64,
    pub font: String,
    pub fill: Color,
    pub baseline: &'static str,
}

impl Default for LabelOverlayConfig {
    fn default() -> Self {
        Self {
            offset_px: 25.0,
            bottom_margin_px: 30.0,
            font: "10px Segoe UI, -apple-system, BlinkMacSystemFont, Inter, Roboto, sans-serif"
                .to_string(),
            fill: Color::white(0.9),
            baseline: "top",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointLabel {
    pub index: usize,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub align: TextAlign,
}

/// Edge points are aligned inward so their text stays inside the chart.
pub fn align_for_index(index: usize, count: usize) -> TextAlign {
    if index == 0 {
        TextAlign::Left
    } else if index + 1 == count {
        TextAlign::Right
    } else {
        TextAlign::Center
    }
}

/// Places one `value + "m"` label under each drawn point.
///
/// `points` are the pixel positions of the dataset's points, `values` the
/// dataset's data. Points without a value or with a non-finite position are
/// skipped.
pub fn layout_point_labels(
    values: &[f64],
    points: &[[f64; 2]],
    area: ChartArea,
    config: &LabelOverlayConfig,
) -> Vec<PointLabel> {
    let floor = area.bottom - config.bottom_margin_px;
    let mut out = Vec::with_capacity(points.len().min(values.len()));

    for (index, point) in points.iter().enumerate() {
        let Some(&value) = values.get(index) else {
            break;
        };
        if !point[0].is_finite() || !point[1].is_finite() {
            continue;
        }

        let mut y = point[1] + config.offset_px;
        if y > floor {
            y = floor;
        }

        out.push(PointLabel {
            index,
            text: height_label(value),
            x: point[0],
            y,
            align: align_for_index(index, values.len()),
        });
    }

    out
}

/// The subset of a 2D canvas context the overlay draws with.
pub trait LabelCanvas {
    fn save(&mut self);
    fn restore(&mut self);
    fn set_font(&mut self, font: &str);
    fn set_fill_style(&mut self, style: &str);
    fn set_text_baseline(&mut self, baseline: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

/// Post-draw pass painting point labels over a finished chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelOverlay {
    pub config: LabelOverlayConfig,
}

impl LabelOverlay {
    pub fn new(config: LabelOverlayConfig) -> Self {
        Self { config }
    }

    pub fn layout(&self, values: &[f64], points: &[[f64; 2]], area: ChartArea) -> Vec<PointLabel> {
        layout_point_labels(values, points, area, &self.config)
    }

    /// Paints the labels inside a `save`/`restore` pair so the chart's own
    /// canvas state is untouched. Returns the number of labels drawn.
    pub fn draw<C: LabelCanvas>(
        &self,
        canvas: &mut C,
        values: &[f64],
        points: &[[f64; 2]],
        area: ChartArea,
    ) -> usize {
        let labels = self.layout(values, points, area);

        canvas.save();
        canvas.set_font(&self.config.font);
        canvas.set_fill_style(&self.config.fill.to_css());
        canvas.set_text_baseline(self.config.baseline);
        for label in &labels {
            canvas.set_text_align(label.align);
            canvas.fill_text(&label.text, label.x, label.y);
        }
        canvas.restore();

        tracing::trace!(count = labels.len(), "point labels drawn");
        labels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const AREA: ChartArea = ChartArea {
        left: 15.0,
        top: 20.0,
        right: 285.0,
        bottom: 140.0,
    };

    fn week_points() -> Vec<[f64; 2]> {
        (0..7).map(|i| [15.0 + 45.0 * i as f64, 40.0 + 5.0 * i as f64]).collect()
    }

    #[test]
    fn seven_points_align_left_center_right() {
        let values = [1.2, 2.1, 3.5, 2.8, 1.9, 2.3, 1.7];
        let labels = layout_point_labels(&values, &week_points(), AREA, &LabelOverlayConfig::default());
        let aligns: Vec<TextAlign> = labels.iter().map(|l| l.align).collect();
        assert_eq!(
            aligns,
            vec![
                TextAlign::Left,
                TextAlign::Center,
                TextAlign::Center,
                TextAlign::Center,
                TextAlign::Center,
                TextAlign::Center,
                TextAlign::Right,
            ]
        );
        assert_eq!(labels[2].text, "3.5m");
        assert_eq!(labels[0].y, 65.0);
    }

    #[test]
    fn labels_are_clamped_above_the_bottom() {
        let values = [1.0, 2.0, 3.0];
        let points = [[20.0, 80.0], [60.0, 85.0], [100.0, 130.0]];
        let labels = layout_point_labels(&values, &points, AREA, &LabelOverlayConfig::default());
        // floor = 140 - 30 = 110
        assert_eq!(labels[0].y, 105.0);
        assert_eq!(labels[1].y, 110.0);
        assert_eq!(labels[2].y, 110.0);
    }

    #[test]
    fn single_point_is_left_aligned() {
        assert_eq!(align_for_index(0, 1), TextAlign::Left);
    }

    #[test]
    fn skips_points_without_data_or_position() {
        let values = [1.0, 2.0];
        let points = [[10.0, 10.0], [f64::NAN, 10.0], [30.0, 10.0]];
        let labels = layout_point_labels(&values, &points, AREA, &LabelOverlayConfig::default());
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].index, 0);
    }

    #[derive(Default)]
    struct RecordingCanvas {
        ops: Vec<String>,
    }

    impl LabelCanvas for RecordingCanvas {
        fn save(&mut self) {
            self.ops.push("save".into());
        }
        fn restore(&mut self) {
            self.ops.push("restore".into());
        }
        fn set_font(&mut self, font: &str) {
            self.ops.push(format!("font {font}"));
        }
        fn set_fill_style(&mut self, style: &str) {
            self.ops.push(format!("fill {style}"));
        }
        fn set_text_baseline(&mut self, baseline: &str) {
            self.ops.push(format!("baseline {baseline}"));
        }
        fn set_text_align(&mut self, align: TextAlign) {
            self.ops.push(format!("align {}", align.as_str()));
        }
        fn fill_text(&mut self, text: &str, x: f64, y: f64) {
            self.ops.push(format!("text {text} {x} {y}"));
        }
    }

    #[test]
    fn draw_brackets_canvas_state() {
        let overlay = LabelOverlay::default();
        let mut canvas = RecordingCanvas::default();
        let n = overlay.draw(&mut canvas, &[1.2, 2.0], &[[10.0, 10.0], [50.0, 100.0]], AREA);
        assert_eq!(n, 2);
        assert_eq!(canvas.ops.first().map(String::as_str), Some("save"));
        assert_eq!(canvas.ops.last().map(String::as_str), Some("restore"));
        assert!(canvas.ops.contains(&"fill rgba(255, 255, 255, 0.9)".to_string()));
        assert!(canvas.ops.contains(&"baseline top".to_string()));
        assert!(canvas.ops.contains(&"text 1.2m 10 35".to_string()));
        assert!(canvas.ops.contains(&"align right".to_string()));
        assert!(canvas.ops.contains(&"text 2m 50 110".to_string()));
    }
}
