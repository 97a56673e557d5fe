//! Place records as exchanged with the `/lugares` resource.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Identifier of a place.
///
/// The backend may hand out numeric or textual ids. Two ids are equal when
/// their canonical text matches, so `1` and `"1"` name the same record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaceId {
    Number(i64),
    Text(String),
}

impl PlaceId {
    /// Canonical text form, used for comparison and for URLs
    pub fn canonical(&self) -> String {
        match self {
            PlaceId::Number(n) => n.to_string(),
            PlaceId::Text(s) => s.trim().to_string(),
        }
    }
}

impl PartialEq for PlaceId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PlaceId::Number(a), PlaceId::Number(b)) => a == b,
            _ => self.canonical() == other.canonical(),
        }
    }
}

impl Eq for PlaceId {}

impl Hash for PlaceId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl FromStr for PlaceId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<i64>() {
            Ok(n) => PlaceId::Number(n),
            Err(_) => PlaceId::Text(s.to_string()),
        })
    }
}

impl From<i64> for PlaceId {
    fn from(n: i64) -> Self {
        PlaceId::Number(n)
    }
}

impl From<&str> for PlaceId {
    fn from(s: &str) -> Self {
        s.parse().unwrap_or_else(|never| match never {})
    }
}

/// Geographic position of a place
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Finite and inside the WGS84 ranges
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// An attraction owned by a place, shown only on that place's detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub imagem: String,
}

/// A place of interest, in the shape the backend returns it.
///
/// Fields the client does not know about are kept in `extra` so a full-record
/// update sends back exactly what the server handed out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub conteudo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(default)]
    pub endereco: String,
    #[serde(default)]
    pub horarios: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(default)]
    pub destaque: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default)]
    pub imagem_principal: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordenadas: Option<Coordinates>,
    #[serde(default)]
    pub atracoes: Vec<Attraction>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Place {
    /// Minimal record, mostly useful for tests and fixtures
    pub fn new(id: impl Into<PlaceId>, nome: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            nome: nome.into(),
            descricao: String::new(),
            conteudo: String::new(),
            categoria: None,
            endereco: String::new(),
            horarios: String::new(),
            telefone: None,
            destaque: false,
            data: None,
            imagem_principal: String::new(),
            coordenadas: None,
            atracoes: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn categoria(mut self, categoria: impl Into<String>) -> Self {
        self.categoria = Some(categoria.into());
        self
    }

    pub fn featured(mut self, destaque: bool) -> Self {
        self.destaque = destaque;
        self
    }

    pub fn at(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordenadas = Some(Coordinates::new(latitude, longitude));
        self
    }

    pub fn attraction(mut self, attraction: Attraction) -> Self {
        self.atracoes.push(attraction);
        self
    }

    /// Coordinates usable on the map, if any
    pub fn position(&self) -> Option<Coordinates> {
        self.coordenadas.filter(Coordinates::is_valid)
    }

    /// Relative link to this place's detail page
    pub fn detail_href(&self) -> String {
        detail_href(&self.id)
    }
}

/// Relative link to the detail page of `id`
pub fn detail_href(id: &PlaceId) -> String {
    format!("detalhes.html?id={}", urlencoding::encode(&id.canonical()))
}

/// A place that has not been stored yet; the backend assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDraft {
    pub nome: String,
    pub descricao: String,
    pub conteudo: String,
    pub categoria: String,
    pub endereco: String,
    pub horarios: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    pub destaque: bool,
    pub data: String,
    pub imagem_principal: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordenadas: Option<Coordinates>,
    #[serde(default)]
    pub atracoes: Vec<Attraction>,
}
