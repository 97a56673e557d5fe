//! View models
//!
//! Pure functions from the mirror (plus an optional route parameter) to
//! structured views. Turning a view into markup is the job of a
//! [`Render`](crate::render::Render) adapter.

mod admin;
mod detail;
pub mod format;
mod home;

pub use admin::{
    admin_list, delete_confirmation, edit_form, AdminListView, AdminRow, DeleteConfirmation,
    EXCERPT_CHARS,
};
pub use detail::{detail, AttractionCard, DetailView, PlaceDetail, TITLE_SUFFIX};
pub use home::{carousel, listing, CarouselSlide, CarouselView, ListingView, PlaceCard};
