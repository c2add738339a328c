mod listing_source_factory;
mod presenter_factory;

pub use listing_source_factory::{ListingSource, ListingSourceFactory};
pub use presenter_factory::{OutputTarget, PresenterFactory};
