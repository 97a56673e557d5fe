//! Data model
//!
//! The single `Place` entity, its attractions, and the admin form inputs.

mod form;
mod place;

pub use form::{FormError, PlaceEdit, PlaceForm};
pub use place::{detail_href, Attraction, Coordinates, Place, PlaceDraft, PlaceId};
