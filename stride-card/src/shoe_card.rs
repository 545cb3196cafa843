use dioxus::prelude::*;

use stride_catalog::pricing::format_price;
use stride_catalog::ShoeListing;

use crate::primitives::{Spacer, VisuallyHidden};
use crate::text::pluralize;
use crate::variant::CardVariant;

/// A single storefront card: image with an optional flag, name, price and
/// color count. When the shoe is on sale the base price is struck through
/// and screen readers hear "Price was <original>, now <sale>".
#[component]
pub fn ShoeCard(listing: ShoeListing, variant: CardVariant) -> Element {
    let on_sale = variant == CardVariant::OnSale;

    let price_text = format_price(listing.price_cents);
    let sale_price_text = listing
        .sale_price_cents
        .map(format_price)
        .unwrap_or_default();
    let color_text = pluralize("Color", listing.num_colors);

    let price_class = if on_sale {
        "shoe-card__price shoe-card__price--struck"
    } else {
        "shoe-card__price"
    };

    rsx! {
        a { class: "shoe-card__link", href: "/shoe/{listing.slug}",
            article { class: "shoe-card",
                div { class: "shoe-card__media",
                    img { class: "shoe-card__image", alt: "", src: "{listing.image_src}" }
                    if variant == CardVariant::NewRelease {
                        div { class: "shoe-card__flag shoe-card__flag--new", "Just Released!" }
                    }
                    if variant == CardVariant::OnSale {
                        div { class: "shoe-card__flag shoe-card__flag--sale", "Sale" }
                    }
                }
                Spacer { size: 12 }
                div { class: "shoe-card__row",
                    h3 { class: "shoe-card__name", "{listing.name}" }
                    div { class: "shoe-card__prices",
                        if on_sale {
                            VisuallyHidden { "Price was " }
                        }
                        span { class: price_class, "{price_text}" }
                        if on_sale {
                            VisuallyHidden { ", now " }
                            span { class: "shoe-card__sale-price", "{sale_price_text}" }
                        }
                    }
                }
                div { class: "shoe-card__row",
                    p { class: "shoe-card__colors", "{color_text}" }
                }
            }
        }
    }
}
