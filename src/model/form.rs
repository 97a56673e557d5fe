//! Admin form input
//!
//! `PlaceForm` is the create form as submitted, `PlaceEdit` the edit modal.
//! Both hold raw user input so a rejected submission can be handed back
//! without losing what was typed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::place::{Place, PlaceDraft};

/// Form validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Required field is empty: {0}")]
    MissingField(&'static str),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

/// Raw values of the "new place" form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceForm {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub conteudo: String,
    #[serde(default)]
    pub categoria: String,
    #[serde(default)]
    pub endereco: String,
    #[serde(default)]
    pub horarios: String,
    #[serde(default)]
    pub telefone: String,
    /// `"true"` marks the place as featured, anything else does not
    #[serde(default)]
    pub destaque: String,
    #[serde(default)]
    pub imagem_principal: String,
}

impl PlaceForm {
    /// Check that every required field has a value
    pub fn validate(&self) -> Result<(), FormError> {
        let required: [(&'static str, &str); 7] = [
            ("nome", self.nome.as_str()),
            ("descricao", self.descricao.as_str()),
            ("conteudo", self.conteudo.as_str()),
            ("categoria", self.categoria.as_str()),
            ("endereco", self.endereco.as_str()),
            ("horarios", self.horarios.as_str()),
            ("imagem_principal", self.imagem_principal.as_str()),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(FormError::MissingField(field));
            }
        }
        Ok(())
    }

    /// Character count shown next to the description field
    pub fn description_count(&self) -> usize {
        self.descricao.chars().count()
    }

    /// Set a field by its form name
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), FormError> {
        let value = value.into();
        match field {
            "nome" => self.nome = value,
            "descricao" => self.descricao = value,
            "conteudo" => self.conteudo = value,
            "categoria" => self.categoria = value,
            "endereco" => self.endereco = value,
            "horarios" => self.horarios = value,
            "telefone" => self.telefone = value,
            "destaque" => self.destaque = value,
            "imagem_principal" => self.imagem_principal = value,
            other => return Err(FormError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    /// Build the record to create, dated `today` and without attractions
    pub fn to_draft(&self, today: NaiveDate) -> Result<PlaceDraft, FormError> {
        self.validate()?;

        Ok(PlaceDraft {
            nome: self.nome.clone(),
            descricao: self.descricao.clone(),
            conteudo: self.conteudo.clone(),
            categoria: self.categoria.clone(),
            endereco: self.endereco.clone(),
            horarios: self.horarios.clone(),
            telefone: non_empty(&self.telefone),
            destaque: self.destaque == "true",
            data: today.format("%Y-%m-%d").to_string(),
            imagem_principal: self.imagem_principal.clone(),
            coordenadas: None,
            atracoes: Vec::new(),
        })
    }
}

/// Fields of the edit modal. `None` means the field is not part of the
/// edit, so the stored value survives the merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceEdit {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub conteudo: Option<String>,
    pub categoria: Option<String>,
    pub destaque: Option<bool>,
    pub endereco: Option<String>,
    pub horarios: Option<String>,
    pub telefone: Option<String>,
    pub imagem_principal: Option<String>,
}

impl PlaceEdit {
    /// Prefill the modal from the mirror copy
    pub fn from_place(place: &Place) -> Self {
        Self {
            nome: Some(place.nome.clone()),
            descricao: Some(place.descricao.clone()),
            conteudo: Some(place.conteudo.clone()),
            categoria: place.categoria.clone(),
            destaque: Some(place.destaque),
            endereco: Some(place.endereco.clone()),
            horarios: Some(place.horarios.clone()),
            telefone: place.telefone.clone(),
            imagem_principal: Some(place.imagem_principal.clone()),
        }
    }

    /// Set a field by its form name
    pub fn set(&mut self, field: &str, value: &str) -> Result<(), FormError> {
        let text = Some(value.to_string());
        match field {
            "nome" => self.nome = text,
            "descricao" => self.descricao = text,
            "conteudo" => self.conteudo = text,
            "categoria" => self.categoria = text,
            "endereco" => self.endereco = text,
            "horarios" => self.horarios = text,
            "telefone" => self.telefone = text,
            "imagem_principal" => self.imagem_principal = text,
            "destaque" => {
                self.destaque = Some(match value {
                    "true" => true,
                    "false" => false,
                    other => {
                        return Err(FormError::InvalidValue {
                            field: "destaque",
                            value: other.to_string(),
                        })
                    }
                })
            }
            other => return Err(FormError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    /// Required fields that are present in the edit must not be blank
    pub fn validate(&self) -> Result<(), FormError> {
        let checks: [(&'static str, &Option<String>); 7] = [
            ("nome", &self.nome),
            ("descricao", &self.descricao),
            ("conteudo", &self.conteudo),
            ("categoria", &self.categoria),
            ("endereco", &self.endereco),
            ("horarios", &self.horarios),
            ("imagem_principal", &self.imagem_principal),
        ];

        for (field, value) in checks {
            if matches!(value, Some(v) if v.trim().is_empty()) {
                return Err(FormError::MissingField(field));
            }
        }
        Ok(())
    }

    /// Overlay the edited fields on `current`; everything else is kept
    pub fn merge_into(&self, current: &Place) -> Place {
        let mut merged = current.clone();

        if let Some(v) = &self.nome {
            merged.nome = v.clone();
        }
        if let Some(v) = &self.descricao {
            merged.descricao = v.clone();
        }
        if let Some(v) = &self.conteudo {
            merged.conteudo = v.clone();
        }
        if let Some(v) = &self.categoria {
            merged.categoria = Some(v.clone());
        }
        if let Some(v) = self.destaque {
            merged.destaque = v;
        }
        if let Some(v) = &self.endereco {
            merged.endereco = v.clone();
        }
        if let Some(v) = &self.horarios {
            merged.horarios = v.clone();
        }
        if let Some(v) = &self.telefone {
            merged.telefone = Some(v.clone());
        }
        if let Some(v) = &self.imagem_principal {
            merged.imagem_principal = v.clone();
        }

        merged
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
