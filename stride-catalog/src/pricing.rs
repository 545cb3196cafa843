use crate::listing::ShoeListing;

/// Format a price in cents for display, e.g. 6000 -> "$60.00"
pub fn format_price(cents: i32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// The price the customer pays right now: the sale price when present,
/// the base price otherwise
pub fn effective_price_cents(listing: &ShoeListing) -> i32 {
    listing.sale_price_cents.unwrap_or(listing.price_cents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(6000), "$60.00");
        assert_eq!(format_price(4500), "$45.00");
        assert_eq!(format_price(8500), "$85.00");
        assert_eq!(format_price(99), "$0.99");
        assert_eq!(format_price(0), "$0.00");
    }

    #[test]
    fn test_effective_price() {
        let mut listing = ShoeListing {
            slug: "court-low".to_string(),
            name: "Court Low".to_string(),
            image_src: "/images/court-low.jpg".to_string(),
            price_cents: 6000,
            sale_price_cents: None,
            release_date: Utc::now(),
            num_colors: 1,
        };

        assert_eq!(effective_price_cents(&listing), 6000);

        listing.sale_price_cents = Some(4500);
        assert_eq!(effective_price_cents(&listing), 4500);
    }
}
