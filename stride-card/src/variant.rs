use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stride_catalog::{released_within_window, ShoeListing};

/// Visual treatment of a shoe card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardVariant {
    NewRelease,
    OnSale,
    Default,
}

impl CardVariant {
    /// Pick the variant for a card. A shoe can be both on sale and newly
    /// released; the sale price wins.
    pub fn select(
        sale_price_cents: Option<i32>,
        release_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        if sale_price_cents.is_some() {
            CardVariant::OnSale
        } else if released_within_window(release_date, now) {
            CardVariant::NewRelease
        } else {
            CardVariant::Default
        }
    }

    pub fn for_listing(listing: &ShoeListing, now: DateTime<Utc>) -> Self {
        Self::select(listing.sale_price_cents, listing.release_date, now)
    }
}
