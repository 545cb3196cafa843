use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use stride_catalog::ShoeListing;

use crate::shoe_card::ShoeCard;
use crate::variant::CardVariant;

/// Flex grid of shoe cards, all judged against the same reference instant
#[component]
pub fn ShoeGrid(listings: Vec<ShoeListing>, now: DateTime<Utc>) -> Element {
    rsx! {
        div { class: "shoe-grid",
            for listing in listings {
                ShoeCard {
                    key: "{listing.slug}",
                    variant: CardVariant::for_listing(&listing, now),
                    listing,
                }
            }
        }
    }
}
