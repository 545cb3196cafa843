use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// How long a shoe counts as a new release, in days
pub const NEW_RELEASE_WINDOW_DAYS: i64 = 30;

/// A shoe as shown on the storefront grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoeListing {
    pub slug: String,
    pub name: String,
    pub image_src: String,

    /// Base price in cents
    pub price_cents: i32,

    /// Sale price in cents, present only while the shoe is on sale
    pub sale_price_cents: Option<i32>,

    pub release_date: DateTime<Utc>,
    pub num_colors: u32,
}

impl ShoeListing {
    /// Check if the shoe currently has a sale price
    pub fn is_on_sale(&self) -> bool {
        self.sale_price_cents.is_some()
    }

    /// Check if the shoe was released within the new-release window of `now`
    pub fn is_new_release(&self, now: DateTime<Utc>) -> bool {
        released_within_window(self.release_date, now)
    }
}

/// True when `release_date` falls inside the new-release window of `now`.
/// A release date that is still in the future also counts as new.
pub fn released_within_window(release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(release_date) < Duration::days(NEW_RELEASE_WINDOW_DAYS)
}
