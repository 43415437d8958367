//! Listing catalog - the fixed table served by `GET /api/listings`.

use chrono::{DateTime, Utc};

use crate::domain::{CartelCategory, Listing, ListingTemplate, Reference};

/// Ordered table of listing templates, built once at startup.
#[derive(Debug, Clone)]
pub struct ListingCatalog {
    templates: Vec<ListingTemplate>,
}

impl ListingCatalog {
    /// Create a catalog from the given templates, kept in order.
    pub fn new(templates: Vec<ListingTemplate>) -> Self {
        Self { templates }
    }

    /// The five mock card deals.
    pub fn standard() -> Self {
        Self::new(vec![
            ListingTemplate {
                id: "1",
                name: "Charizard Holo 1st Edition",
                price: 1899.99,
                grade: "PSA 9",
                supply: 12,
                listed_minutes_ago: 3,
                marketplace: "eBay",
                marketplace_url: "https://www.ebay.com/itm/charizard-1st-edition",
                image_url: "https://images.pokemontcg.io/base2/4_hires.png",
                alt_value: 2300.0,
                reference: Reference::AltValue,
                cartel_category: CartelCategory::Gold,
            },
            ListingTemplate {
                id: "2",
                name: "Pikachu Illustrator",
                price: 89999.0,
                grade: "PSA 7",
                supply: 1,
                listed_minutes_ago: 12,
                marketplace: "Heritage",
                marketplace_url: "https://www.ha.com/",
                image_url: "https://images.pokemontcg.io/swsh35/12_hires.png",
                alt_value: 110000.0,
                reference: Reference::AltValue,
                cartel_category: CartelCategory::Gold,
            },
            ListingTemplate {
                id: "3",
                name: "Blastoise Shadowless",
                price: 650.0,
                grade: "BGS 9.5",
                supply: 6,
                listed_minutes_ago: 25,
                marketplace: "TCGPlayer",
                marketplace_url: "https://www.tcgplayer.com/",
                image_url: "https://images.pokemontcg.io/base1/2_hires.png",
                alt_value: 710.0,
                reference: Reference::AltValue,
                cartel_category: CartelCategory::Silver,
            },
            ListingTemplate {
                id: "4",
                name: "Mewtwo EX",
                price: 95.0,
                grade: "Raw",
                supply: 123,
                listed_minutes_ago: 55,
                marketplace: "eBay",
                marketplace_url: "https://www.ebay.com/",
                image_url: "https://images.pokemontcg.io/bw3/54_hires.png",
                alt_value: 85.0,
                reference: Reference::Price,
                cartel_category: CartelCategory::Bronze,
            },
            ListingTemplate {
                id: "5",
                name: "Gengar VMAX Alt Art",
                price: 320.0,
                grade: "PSA 10",
                supply: 18,
                listed_minutes_ago: 5,
                marketplace: "Mercari",
                marketplace_url: "https://www.mercari.com/",
                image_url: "https://images.pokemontcg.io/swsh8/271_hires.png",
                alt_value: 380.0,
                reference: Reference::AltValue,
                cartel_category: CartelCategory::Silver,
            },
        ])
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Look up a template by id.
    pub fn get(&self, id: &str) -> Option<&ListingTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Render every listing as seen at `now`, in table order.
    pub fn render(&self, now: DateTime<Utc>) -> Vec<Listing> {
        self.templates.iter().map(|t| t.render(now)).collect()
    }
}
