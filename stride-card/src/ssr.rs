use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use stride_catalog::ShoeListing;

use crate::grid::ShoeGrid;
use crate::shoe_card::ShoeCard;
use crate::variant::CardVariant;

/// Render a single listing card to an HTML string
pub fn render_card(listing: &ShoeListing, now: DateTime<Utc>) -> String {
    let variant = CardVariant::for_listing(listing, now);
    tracing::debug!(slug = %listing.slug, ?variant, "rendering shoe card");

    let listing = listing.clone();
    dioxus_ssr::render_element(rsx! {
        ShoeCard { listing, variant }
    })
}

/// Render a grid of listing cards to an HTML string
pub fn render_grid(listings: &[ShoeListing], now: DateTime<Utc>) -> String {
    tracing::debug!(count = listings.len(), "rendering shoe grid");

    let listings = listings.to_vec();
    dioxus_ssr::render_element(rsx! {
        ShoeGrid { listings, now }
    })
}
