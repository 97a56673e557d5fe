//! Admin page actions: create, edit, delete
//!
//! Each action posts a notification and, on success, returns the re-rendered
//! admin list. A failed submission hands the user's input back untouched.

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

use super::PageController;
use crate::client::ClientError;
use crate::model::{FormError, PlaceEdit, PlaceForm, PlaceId};
use crate::view::{self, AdminListView, DeleteConfirmation};

pub const CREATED_MESSAGE: &str = "Lugar cadastrado com sucesso!";
pub const CREATE_FAILED_MESSAGE: &str =
    "Erro ao cadastrar lugar. Verifique os dados e tente novamente.";
pub const UPDATED_MESSAGE: &str = "Lugar atualizado com sucesso!";
pub const UPDATE_FAILED_MESSAGE: &str = "Erro ao atualizar lugar.";
pub const DELETED_MESSAGE: &str = "Lugar excluído com sucesso!";
pub const DELETE_FAILED_MESSAGE: &str = "Erro ao excluir lugar.";

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Invalid form: {0}")]
    Form(#[from] FormError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Place {0} is not loaded")]
    NotMirrored(PlaceId),
}

/// A submission the backend or the validator refused, with the input kept
#[derive(Error, Debug)]
#[error("{error}")]
pub struct Rejected<T: fmt::Debug> {
    pub input: T,
    pub error: AdminError,
}

/// User confirmation step before a destructive action
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The id is not in the mirror; nothing was asked or sent
    NotMirrored,
    /// The user declined
    Cancelled,
    /// Deleted; carries the refreshed admin list
    Deleted(AdminListView),
}

impl PageController {
    /// Submit the "new place" form
    pub async fn submit_create(
        &mut self,
        form: PlaceForm,
        today: NaiveDate,
    ) -> Result<AdminListView, Rejected<PlaceForm>> {
        let draft = match form.to_draft(today) {
            Ok(draft) => draft,
            Err(e) => {
                tracing::debug!(error = %e, "Create form rejected");
                return Err(Rejected {
                    input: form,
                    error: e.into(),
                });
            }
        };

        match self.client.create(&draft).await {
            Ok(_) => {
                self.client.notifier_mut().success(CREATED_MESSAGE);
                Ok(view::admin_list(self.store()))
            }
            Err(e) => {
                self.client.notifier_mut().danger(CREATE_FAILED_MESSAGE);
                Err(Rejected {
                    input: form,
                    error: e.into(),
                })
            }
        }
    }

    /// Prefilled edit modal for a mirrored place
    pub fn begin_edit(&self, id: &PlaceId) -> Option<PlaceEdit> {
        view::edit_form(self.store(), id)
    }

    /// Merge the edit over the mirror copy and send the full record
    pub async fn save_edit(
        &mut self,
        id: &PlaceId,
        edit: PlaceEdit,
    ) -> Result<AdminListView, Rejected<PlaceEdit>> {
        if let Err(e) = edit.validate() {
            return Err(Rejected {
                input: edit,
                error: e.into(),
            });
        }

        let merged = match self.store().get(id) {
            Some(current) => edit.merge_into(current),
            None => {
                tracing::warn!(id = %id, "Edit for a place that is not loaded");
                self.client.notifier_mut().danger(UPDATE_FAILED_MESSAGE);
                return Err(Rejected {
                    input: edit,
                    error: AdminError::NotMirrored(id.clone()),
                });
            }
        };

        match self.client.update(id, &merged).await {
            Ok(_) => {
                self.client.notifier_mut().success(UPDATED_MESSAGE);
                Ok(view::admin_list(self.store()))
            }
            Err(e) => {
                self.client.notifier_mut().danger(UPDATE_FAILED_MESSAGE);
                Err(Rejected {
                    input: edit,
                    error: e.into(),
                })
            }
        }
    }

    /// Confirmation prompt for a mirrored place
    pub fn request_delete(&self, id: &PlaceId) -> Option<DeleteConfirmation> {
        view::delete_confirmation(self.store(), id)
    }

    /// Ask for confirmation, then delete and refresh the admin list
    pub async fn delete_place(
        &mut self,
        id: &PlaceId,
        confirm: &mut dyn Confirm,
    ) -> Result<DeleteOutcome, AdminError> {
        let Some(confirmation) = self.request_delete(id) else {
            return Ok(DeleteOutcome::NotMirrored);
        };

        if !confirm.confirm(&confirmation.prompt) {
            tracing::debug!(id = %id, "Delete cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        match self.client.delete(&confirmation.id).await {
            Ok(()) => {
                self.client.notifier_mut().success(DELETED_MESSAGE);
                Ok(DeleteOutcome::Deleted(view::admin_list(self.store())))
            }
            Err(e) => {
                self.client.notifier_mut().danger(DELETE_FAILED_MESSAGE);
                Err(e.into())
            }
        }
    }
}
