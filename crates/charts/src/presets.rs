//! The four dashboard charts and their sample data.

use crate::color::{Color, Paint};
use crate::config::{
    Animation, ChartConfig, ChartData, ChartKind, ChartOptions, Dataset, Elements, Font,
    Interaction, Layout, Legend, Padding, Plugins, PointElement, PointStyle, Scales, Tooltip,
    Transitions,
};
use crate::labels::LabelOverlay;
use crate::series::ChartSeries;
use crate::tooltip::SHORT_DAY_NAMES;

const UI_FONT_FAMILY: &str = "Segoe UI, -apple-system, BlinkMacSystemFont, Inter, Roboto, sans-serif";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ChartId {
    WindLine,
    WindBar,
    SunArc,
    RiverHeight,
}

impl ChartId {
    pub const ALL: [ChartId; 4] = [
        ChartId::WindLine,
        ChartId::WindBar,
        ChartId::SunArc,
        ChartId::RiverHeight,
    ];

    pub fn canvas_id(self) -> &'static str {
        match self {
            ChartId::WindLine => "windLineChart",
            ChartId::WindBar => "windBarChart",
            ChartId::SunArc => "sunArcChart",
            ChartId::RiverHeight => "riverHeightChart",
        }
    }

    /// Only the river-height chart has a tooltip and a label overlay.
    pub fn is_ambient(self) -> bool {
        self != ChartId::RiverHeight
    }
}

/// Data behind every chart on the page. `Default` holds the built-in
/// sample week.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardCharts {
    pub wind_line: ChartSeries,
    pub wind_bar: ChartSeries,
    pub sun_arc: ChartSeries,
    pub river_height: ChartSeries,
    pub overlay: LabelOverlay,
}

impl Default for DashboardCharts {
    fn default() -> Self {
        Self {
            wind_line: ChartSeries::new(
                ["00:00", "04:00", "08:00", "12:00", "16:00", "20:00"],
                vec![5.2, 6.8, 7.9, 8.1, 7.3, 6.5],
            ),
            wind_bar: ChartSeries::new(
                ["1", "2", "3", "4", "5", "6", "7", "8"],
                vec![3.0, 5.0, 4.0, 7.0, 6.0, 8.0, 5.0, 4.0],
            ),
            sun_arc: ChartSeries::unlabeled(vec![75.0, 25.0]),
            river_height: ChartSeries::new(SHORT_DAY_NAMES, vec![1.2, 2.1, 3.5, 2.8, 1.9, 2.3, 1.7])
                .named("River Height (m)"),
            overlay: LabelOverlay::default(),
        }
    }
}

impl DashboardCharts {
    pub fn series(&self, id: ChartId) -> &ChartSeries {
        match id {
            ChartId::WindLine => &self.wind_line,
            ChartId::WindBar => &self.wind_bar,
            ChartId::SunArc => &self.sun_arc,
            ChartId::RiverHeight => &self.river_height,
        }
    }

    pub fn config(&self, id: ChartId) -> ChartConfig {
        let series = self.series(id);
        match id {
            ChartId::WindLine => wind_line(series),
            ChartId::WindBar => wind_bar(series),
            ChartId::SunArc => sun_arc(series),
            ChartId::RiverHeight => river_height(series),
        }
    }

    pub fn configs(&self) -> Vec<(ChartId, ChartConfig)> {
        ChartId::ALL.iter().map(|&id| (id, self.config(id))).collect()
    }
}

fn data(series: &ChartSeries, dataset: Dataset) -> ChartData {
    ChartData {
        labels: series.labels().to_vec(),
        datasets: vec![Dataset {
            label: series.name().map(str::to_string),
            data: series.values().to_vec(),
            ..dataset
        }],
    }
}

pub fn wind_line(series: &ChartSeries) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        data: data(
            series,
            Dataset {
                border_color: Some(Color::white(0.8).into()),
                background_color: Some(Color::TRANSPARENT.into()),
                tension: Some(0.4),
                points: PointStyle {
                    point_radius: Some(0.0),
                    point_hover_radius: Some(3.0),
                    ..PointStyle::default()
                },
                ..Dataset::default()
            },
        ),
        options: ChartOptions::ambient(),
    }
}

pub fn wind_bar(series: &ChartSeries) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Bar,
        data: data(
            series,
            Dataset {
                background_color: Some(Color::white(0.3).into()),
                border_color: Some(Color::white(0.5).into()),
                border_width: Some(1.0),
                ..Dataset::default()
            },
        ),
        options: ChartOptions::ambient(),
    }
}

pub fn sun_arc(series: &ChartSeries) -> ChartConfig {
    let mut options = ChartOptions::ambient();
    options.scales = None;
    options.cutout = Some("80%".to_string());
    ChartConfig {
        kind: ChartKind::Doughnut,
        data: data(
            series,
            Dataset {
                background_color: Some(Paint::PerItem(vec![
                    Color::white(0.1),
                    Color::TRANSPARENT,
                ])),
                border_width: Some(0.0),
                ..Dataset::default()
            },
        ),
        options,
    }
}

pub fn river_height(series: &ChartSeries) -> ChartConfig {
    ChartConfig {
        kind: ChartKind::Line,
        data: data(
            series,
            Dataset {
                border_color: Some(Color::white(0.7).into()),
                background_color: Some(Color::white(0.05).into()),
                border_width: Some(2.0),
                tension: Some(0.4),
                fill: Some(false),
                points: PointStyle {
                    point_radius: Some(3.0),
                    point_hover_radius: Some(5.0),
                    point_background_color: Some(Color::white(0.9)),
                    point_border_color: Some(Color::white(0.5)),
                    point_border_width: Some(1.0),
                    point_hover_background_color: Some(Color::white(1.0)),
                    point_hover_border_color: Some(Color::white(0.7)),
                    point_hover_border_width: Some(2.0),
                },
                ..Dataset::default()
            },
        ),
        options: ChartOptions {
            layout: Some(Layout {
                padding: Padding {
                    top: 20.0,
                    bottom: 5.0,
                    left: 15.0,
                    right: 15.0,
                },
            }),
            plugins: Plugins {
                legend: Legend { display: false },
                tooltip: Some(river_tooltip()),
            },
            scales: Some(Scales::hidden()),
            elements: Some(Elements {
                point: PointElement {
                    hover_background_color: Color::white(1.0),
                },
            }),
            interaction: Some(Interaction {
                intersect: false,
                mode: "index".to_string(),
            }),
            animation: Some(Animation {
                duration: 2000,
                easing: "easeInOutQuart".to_string(),
            }),
            transitions: Some(Transitions::from_origin()),
            ..ChartOptions::default()
        },
    }
}

fn river_tooltip() -> Tooltip {
    Tooltip {
        enabled: true,
        background_color: Some(Color::rgba(0, 0, 0, 0.8)),
        title_color: Some(Color::WHITE),
        body_color: Some(Color::WHITE),
        border_color: Some(Color::white(0.2)),
        border_width: Some(1.0),
        border_radius: Some(6.0),
        padding: Some(8.0),
        title_font: Some(Font {
            family: UI_FONT_FAMILY.to_string(),
            size: 10,
            weight: 500,
        }),
        body_font: Some(Font {
            family: UI_FONT_FAMILY.to_string(),
            size: 9,
            weight: 400,
        }),
        display_colors: Some(false),
        position: Some("nearest".to_string()),
        x_align: Some("center".to_string()),
        y_align: Some("bottom".to_string()),
        caret_size: Some(4.0),
    }
}
