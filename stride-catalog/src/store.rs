use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::listing::ShoeListing;
use crate::pricing::effective_price_cents;

/// Ordering for storefront listing queries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    NewestFirst,
    PriceAsc,
    PriceDesc,
}

/// In-memory listing store keyed by slug
pub struct ListingStore {
    listings: HashMap<String, ShoeListing>,
}

impl ListingStore {
    pub fn new() -> Self {
        Self {
            listings: HashMap::new(),
        }
    }

    /// Insert or replace a listing
    pub fn insert(&mut self, listing: ShoeListing) {
        tracing::debug!(slug = %listing.slug, "listing stored");
        self.listings.insert(listing.slug.clone(), listing);
    }

    /// Look up a listing by slug
    pub fn get(&self, slug: &str) -> Result<&ShoeListing, CatalogError> {
        self.listings
            .get(slug)
            .ok_or_else(|| CatalogError::NotFound(slug.to_string()))
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// All listings in the given order. Price orderings use the effective
    /// price; ties break by name so the output is deterministic.
    pub fn list_sorted(&self, order: SortOrder) -> Vec<ShoeListing> {
        let mut listings: Vec<ShoeListing> = self.listings.values().cloned().collect();

        match order {
            SortOrder::NewestFirst => {
                listings.sort_by(|a, b| {
                    b.release_date
                        .cmp(&a.release_date)
                        .then_with(|| a.name.cmp(&b.name))
                });
            }
            SortOrder::PriceAsc => {
                listings.sort_by(|a, b| {
                    effective_price_cents(a)
                        .cmp(&effective_price_cents(b))
                        .then_with(|| a.name.cmp(&b.name))
                });
            }
            SortOrder::PriceDesc => {
                listings.sort_by(|a, b| {
                    effective_price_cents(b)
                        .cmp(&effective_price_cents(a))
                        .then_with(|| a.name.cmp(&b.name))
                });
            }
        }

        listings
    }
}

impl Default for ListingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Listing not found: {0}")]
    NotFound(String),
}

/// Data access trait for listing backends
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn get_listing(
        &self,
        slug: &str,
    ) -> Result<Option<ShoeListing>, Box<dyn std::error::Error + Send + Sync>>;

    async fn list_listings(
        &self,
    ) -> Result<Vec<ShoeListing>, Box<dyn std::error::Error + Send + Sync>>;
}

#[async_trait]
impl ListingSource for ListingStore {
    async fn get_listing(
        &self,
        slug: &str,
    ) -> Result<Option<ShoeListing>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.listings.get(slug).cloned())
    }

    async fn list_listings(
        &self,
    ) -> Result<Vec<ShoeListing>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.list_sorted(SortOrder::NewestFirst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn listing(slug: &str, name: &str, price_cents: i32, sale_price_cents: Option<i32>, released_days_ago: i64) -> ShoeListing {
        ShoeListing {
            slug: slug.to_string(),
            name: name.to_string(),
            image_src: format!("/images/{}.jpg", slug),
            price_cents,
            sale_price_cents,
            release_date: Utc::now() - Duration::days(released_days_ago),
            num_colors: 2,
        }
    }

    #[test]
    fn test_store_lifecycle() {
        let mut store = ListingStore::new();
        assert!(store.is_empty());

        store.insert(listing("retro-high", "Retro High", 8500, None, 5));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("retro-high").unwrap().price_cents, 8500);
    }

    #[test]
    fn test_missing_slug() {
        let store = ListingStore::new();
        let err = store.get("no-such-shoe").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[test]
    fn test_sorted_listings() {
        let mut store = ListingStore::new();
        store.insert(listing("retro-high", "Retro High", 8500, None, 5));
        store.insert(listing("court-low", "Court Low", 6000, Some(4500), 90));
        store.insert(listing("trail-runner", "Trail Runner", 7000, None, 40));

        let newest = store.list_sorted(SortOrder::NewestFirst);
        assert_eq!(newest[0].slug, "retro-high");
        assert_eq!(newest[2].slug, "court-low");

        // Sale items sort by what the customer actually pays
        let by_price = store.list_sorted(SortOrder::PriceAsc);
        assert_eq!(by_price[0].slug, "court-low");
        assert_eq!(by_price[1].slug, "trail-runner");
        assert_eq!(by_price[2].slug, "retro-high");

        let by_price_desc = store.list_sorted(SortOrder::PriceDesc);
        assert_eq!(by_price_desc[0].slug, "retro-high");
    }

    #[tokio::test]
    async fn test_listing_source() {
        let mut store = ListingStore::new();
        store.insert(listing("retro-high", "Retro High", 8500, None, 5));
        store.insert(listing("court-low", "Court Low", 6000, Some(4500), 90));

        let found = store.get_listing("court-low").await.unwrap();
        assert_eq!(found.unwrap().sale_price_cents, Some(4500));

        let missing = store.get_listing("no-such-shoe").await.unwrap();
        assert!(missing.is_none());

        let all = store.list_listings().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].slug, "retro-high");
    }
}
