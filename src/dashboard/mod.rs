//! Dashboard adapters
//!
//! - **stats**: four counters over the whole mirror
//! - **chart**: category pie chart payload
//! - **map**: center, markers and popups for the map widget

mod chart;
mod map;
mod stats;

pub use chart::{category_chart, CategoryChart, ChartSlice, ChartWidgetConfig};
pub use map::{
    map_center, map_view, widget_config as map_widget_config, MapControl, MapMarker, MapView,
    MapWidgetConfig, MarkerConfig, MarkerElement, MarkerPopup,
};
pub use stats::{dashboard_stats, DashboardStats};
