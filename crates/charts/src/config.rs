//! Serializable mirror of the Chart.js configuration object.
//!
//! Only the options the dashboard sets are modelled; `None` fields are left
//! out of the JSON so Chart.js applies its own defaults. Callbacks (tooltip
//! text, animation completion) cannot travel through JSON and are attached by
//! the page after parsing.

use serde::Serialize;

use crate::color::{Color, Paint};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Doughnut,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(flatten)]
    pub points: PointStyle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_border_width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    /// Browser events the chart listens to; empty disables interaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<Elements>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<Interaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transitions: Option<Transitions>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            events: None,
            cutout: None,
            layout: None,
            plugins: Plugins::default(),
            scales: None,
            elements: None,
            interaction: None,
            animation: None,
            transitions: None,
        }
    }
}

impl ChartOptions {
    /// Axes hidden, legend hidden, no tooltip and no pointer events.
    pub fn ambient() -> Self {
        Self {
            events: Some(Vec::new()),
            plugins: Plugins {
                legend: Legend { display: false },
                tooltip: Some(Tooltip::disabled()),
            },
            scales: Some(Scales::hidden()),
            ..Self::default()
        }
    }

    pub fn is_interactive(&self) -> bool {
        !matches!(&self.events, Some(events) if events.is_empty())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub padding: Padding,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Padding {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
}

impl Default for Plugins {
    fn default() -> Self {
        Self {
            legend: Legend { display: false },
            tooltip: None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Legend {
    pub display: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub family: String,
    pub size: u32,
    pub weight: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_colors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caret_size: Option<f64>,
}

impl Tooltip {
    pub fn disabled() -> Self {
        Self::default()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Axis {
    pub display: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

impl Scales {
    pub fn hidden() -> Self {
        Self {
            x: Axis { display: false },
            y: Axis { display: false },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Elements {
    pub point: PointElement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointElement {
    pub hover_background_color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub intersect: bool,
    pub mode: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    pub duration: u32,
    pub easing: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transitions {
    pub show: Transition,
    pub hide: Transition,
}

impl Transitions {
    /// Grow from the origin on show, collapse into it on hide.
    pub fn from_origin() -> Self {
        let from = AxisBound {
            from: Some(0.0),
            to: None,
        };
        let to = AxisBound {
            from: None,
            to: Some(0.0),
        };
        Self {
            show: Transition {
                animations: AxisAnimations { x: from, y: from },
            },
            hide: Transition {
                animations: AxisAnimations { x: to, y: to },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    pub animations: AxisAnimations,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisAnimations {
    pub x: AxisBound,
    pub y: AxisBound,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct AxisBound {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ambient_options_hide_everything() {
        let v = serde_json::to_value(ChartOptions::ambient()).unwrap();
        assert_eq!(v["events"], json!([]));
        assert_eq!(v["scales"], json!({"x": {"display": false}, "y": {"display": false}}));
        assert_eq!(v["plugins"]["legend"]["display"], json!(false));
        assert_eq!(v["plugins"]["tooltip"], json!({"enabled": false}));
        assert_eq!(v["maintainAspectRatio"], json!(false));
        assert!(!ChartOptions::ambient().is_interactive());
    }

    #[test]
    fn dataset_point_style_is_flattened() {
        let ds = Dataset {
            data: vec![1.0],
            points: PointStyle {
                point_radius: Some(0.0),
                ..PointStyle::default()
            },
            ..Dataset::default()
        };
        let v = serde_json::to_value(ds).unwrap();
        assert_eq!(v, json!({"data": [1.0], "pointRadius": 0.0}));
    }

    #[test]
    fn transitions_grow_from_origin() {
        let v = serde_json::to_value(Transitions::from_origin()).unwrap();
        assert_eq!(v["show"]["animations"]["x"], json!({"from": 0.0}));
        assert_eq!(v["hide"]["animations"]["y"], json!({"to": 0.0}));
    }
}
