//! Category lookup shared by the chart and the map
//!
//! Both adapters resolve colors and icons here so a category looks the same
//! in every view. The vocabulary is open: unknown categories get the default
//! style.

use serde::Serialize;

/// Label used for places without a category
pub const UNCATEGORIZED: &str = "Sem categoria";

/// Color and icon of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    /// CSS color
    pub color: &'static str,
    /// Bootstrap Icons class
    pub icon: &'static str,
}

pub const DEFAULT_STYLE: CategoryStyle = CategoryStyle {
    color: "#9966FF",
    icon: "bi-geo-alt",
};

const STYLES: [(&str, CategoryStyle); 3] = [
    (
        "Compras",
        CategoryStyle {
            color: "#FF6384",
            icon: "bi-basket",
        },
    ),
    (
        "Natureza",
        CategoryStyle {
            color: "#4BC0C0",
            icon: "bi-tree",
        },
    ),
    (
        "Cultura",
        CategoryStyle {
            color: "#36A2EB",
            icon: "bi-bank2",
        },
    ),
];

/// Style for a raw `categoria` value
pub fn style_for(categoria: Option<&str>) -> CategoryStyle {
    categoria
        .and_then(|c| STYLES.iter().find(|(name, _)| *name == c))
        .map(|(_, style)| *style)
        .unwrap_or(DEFAULT_STYLE)
}

/// Display label; missing or blank categories fall into [`UNCATEGORIZED`]
pub fn label(categoria: Option<&str>) -> &str {
    match categoria {
        Some(c) if !c.trim().is_empty() => c,
        _ => UNCATEGORIZED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        assert_eq!(style_for(Some("Cultura")).color, "#36A2EB");
        assert_eq!(style_for(Some("Natureza")).icon, "bi-tree");
        assert_eq!(style_for(Some("Compras")).color, "#FF6384");
    }

    #[test]
    fn test_unknown_and_missing_fall_back() {
        assert_eq!(style_for(Some("Gastronomia")), DEFAULT_STYLE);
        assert_eq!(style_for(None), DEFAULT_STYLE);
        // Case sensitive, as stored
        assert_eq!(style_for(Some("cultura")), DEFAULT_STYLE);
    }

    #[test]
    fn test_label_sentinel() {
        assert_eq!(label(None), UNCATEGORIZED);
        assert_eq!(label(Some("  ")), UNCATEGORIZED);
        assert_eq!(label(Some("Cultura")), "Cultura");
    }
}
