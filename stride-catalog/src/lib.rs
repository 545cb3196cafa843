pub mod listing;
pub mod pricing;
pub mod store;

pub use listing::{released_within_window, ShoeListing, NEW_RELEASE_WINDOW_DAYS};
pub use pricing::{effective_price_cents, format_price};
pub use store::{CatalogError, ListingSource, ListingStore, SortOrder};
