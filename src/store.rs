//! Local mirror of the `/lugares` collection
//!
//! An owned, ordered copy of the server's records. The resource client keeps
//! it in sync after each successful call; renderers only read it. There is no
//! invalidation policy: the mirror is as fresh as the last completed call.

use crate::model::{Place, PlaceId};

/// Ordered client-side copy of the places collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceStore {
    places: Vec<Place>,
}

impl PlaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store holding `places` in the given order
    pub fn with_places(places: Vec<Place>) -> Self {
        Self { places }
    }

    /// Replace the whole mirror, keeping the server's order
    pub fn replace_all(&mut self, places: Vec<Place>) {
        self.places = places;
    }

    /// Add a newly created record at the end.
    ///
    /// If a record with the same id is already mirrored it is replaced in
    /// place, keeping ids unique.
    pub fn insert(&mut self, place: Place) {
        match self.position(&place.id) {
            Some(idx) => self.places[idx] = place,
            None => self.places.push(place),
        }
    }

    /// Replace the record whose id matches `id`. Returns false if none does.
    pub fn replace(&mut self, id: &PlaceId, place: Place) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.places[idx] = place;
                true
            }
            None => false,
        }
    }

    /// Drop the record with `id`. Absent ids are a no-op returning false.
    pub fn remove(&mut self, id: &PlaceId) -> bool {
        let before = self.places.len();
        self.places.retain(|p| &p.id != id);
        self.places.len() != before
    }

    pub fn get(&self, id: &PlaceId) -> Option<&Place> {
        self.places.iter().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &PlaceId) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Place> {
        self.places.iter()
    }

    pub fn as_slice(&self) -> &[Place] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    fn position(&self, id: &PlaceId) -> Option<usize> {
        self.places.iter().position(|p| &p.id == id)
    }
}
