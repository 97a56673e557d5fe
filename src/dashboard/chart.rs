//! Category pie chart
//!
//! Groups the mirror by category and produces the payload handed to the
//! charting widget. Slices keep first-seen order.

use serde::Serialize;

use crate::category;
use crate::store::PlaceStore;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub label: String,
    pub count: usize,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryChart {
    pub slices: Vec<ChartSlice>,
}

pub fn category_chart(store: &PlaceStore) -> CategoryChart {
    let mut slices: Vec<ChartSlice> = Vec::new();

    for place in store.iter() {
        let label = category::label(place.categoria.as_deref());
        match slices.iter_mut().find(|s| s.label == label) {
            Some(slice) => slice.count += 1,
            None => slices.push(ChartSlice {
                label: label.to_string(),
                count: 1,
                // Sentinel bucket is not a known category, so it gets the default
                color: category::style_for(place.categoria.as_deref()).color,
            }),
        }
    }

    CategoryChart { slices }
}

impl CategoryChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    pub fn percentage(&self, slice: &ChartSlice) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            slice.count as f64 / total as f64 * 100.0
        }
    }

    /// Hover text for a slice
    pub fn tooltip(&self, slice: &ChartSlice) -> String {
        format!(
            "{}: {} lugares ({:.1}%)",
            slice.label,
            slice.count,
            self.percentage(slice)
        )
    }

    /// Pie chart configuration for the widget
    pub fn widget_config(&self) -> ChartWidgetConfig {
        ChartWidgetConfig {
            kind: "pie",
            data: ChartData {
                labels: self.slices.iter().map(|s| s.label.clone()).collect(),
                datasets: vec![ChartDataset {
                    data: self.slices.iter().map(|s| s.count).collect(),
                    background_color: self.slices.iter().map(|s| s.color).collect(),
                    border_width: 3,
                    border_color: "#fff",
                    hover_border_width: 4,
                    hover_border_color: "#333",
                }],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                plugins: ChartPlugins {
                    legend: ChartLegend {
                        position: "bottom",
                        labels: LegendLabels {
                            padding: 20,
                            use_point_style: true,
                            font: LegendFont { size: 14 },
                        },
                    },
                },
            },
            tooltips: self.slices.iter().map(|s| self.tooltip(s)).collect(),
        }
    }
}

/// Pie chart payload. `responsive` makes the widget follow window resizes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartWidgetConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
    /// Precomputed tooltip per slice
    pub tooltips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub data: Vec<usize>,
    pub background_color: Vec<&'static str>,
    pub border_width: u32,
    pub border_color: &'static str,
    pub hover_border_width: u32,
    pub hover_border_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: ChartPlugins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPlugins {
    pub legend: ChartLegend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLegend {
    pub position: &'static str,
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub padding: u32,
    pub use_point_style: bool,
    pub font: LegendFont,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendFont {
    pub size: u32,
}
