//! Page identity
//!
//! The page is chosen once from an explicit identifier: the last path
//! segment plus an optional query string, e.g. `detalhes.html?id=3`.

use serde::Serialize;

use crate::model::PlaceId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    /// `index.html` or the site root
    Index,
    /// `detalhes.html?id=<id>`
    Detail { id: Option<PlaceId> },
    /// `cadastro_lugares.html`
    Admin,
    /// `visualizacao.html` / `dashboard.html`
    Dashboard,
    /// Anything else; no controller runs
    Unknown { name: String },
}

impl Page {
    pub fn resolve(identity: &str) -> Self {
        let identity = identity.split('#').next().unwrap_or("");
        let (path, query) = identity.split_once('?').unwrap_or((identity, ""));
        let name = path.rsplit('/').next().unwrap_or("");

        match name {
            "" | "index.html" => Page::Index,
            "detalhes.html" => Page::Detail {
                id: query_param(query, "id")
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| PlaceId::from(v.as_str())),
            },
            "cadastro_lugares.html" => Page::Admin,
            "visualizacao.html" | "dashboard.html" => Page::Dashboard,
            other => Page::Unknown {
                name: other.to_string(),
            },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Page::Index => "index",
            Page::Detail { .. } => "detail",
            Page::Admin => "admin",
            Page::Dashboard => "dashboard",
            Page::Unknown { name } => name,
        }
    }
}

fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| {
            let v = v.replace('+', " ");
            urlencoding::decode(&v)
                .map(|d| d.into_owned())
                .unwrap_or(v)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_pages() {
        assert_eq!(Page::resolve(""), Page::Index);
        assert_eq!(Page::resolve("/site/index.html"), Page::Index);
        assert_eq!(Page::resolve("/"), Page::Index);
        assert_eq!(Page::resolve("cadastro_lugares.html"), Page::Admin);
        assert_eq!(Page::resolve("/visualizacao.html"), Page::Dashboard);
    }

    #[test]
    fn test_detail_id_from_query() {
        assert_eq!(
            Page::resolve("detalhes.html?id=3"),
            Page::Detail {
                id: Some(PlaceId::Number(3))
            }
        );
        assert_eq!(
            Page::resolve("/x/detalhes.html?foo=1&id=abc%20d#top"),
            Page::Detail {
                id: Some(PlaceId::Text("abc d".into()))
            }
        );
        assert_eq!(Page::resolve("detalhes.html"), Page::Detail { id: None });
        assert_eq!(Page::resolve("detalhes.html?id="), Page::Detail { id: None });
    }

    #[test]
    fn test_unknown_page_is_inert() {
        let page = Page::resolve("sobre.html");
        assert_eq!(
            page,
            Page::Unknown {
                name: "sobre.html".into()
            }
        );
        assert_eq!(page.name(), "sobre.html");
    }
}
