//! Listing domain types.
//!
//! A listing is one mock collectible-card sale record. Listings are kept as
//! static templates and rendered against the current time on every request.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Timestamp format for `listed_at`: microsecond precision with a literal `Z`.
pub const LISTED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Deal tier assigned to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CartelCategory {
    Gold,
    Silver,
    Bronze,
}

impl std::fmt::Display for CartelCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartelCategory::Gold => write!(f, "Gold"),
            CartelCategory::Silver => write!(f, "Silver"),
            CartelCategory::Bronze => write!(f, "Bronze"),
        }
    }
}

impl std::str::FromStr for CartelCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gold" => Ok(CartelCategory::Gold),
            "silver" => Ok(CartelCategory::Silver),
            "bronze" => Ok(CartelCategory::Bronze),
            _ => Err(format!("Unknown cartel category: {}", s)),
        }
    }
}

/// Which value a listing's percentage difference is measured against.
///
/// The mock data is not uniform here, so the choice is kept per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    AltValue,
    Price,
}

/// A listing as returned by `GET /api/listings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Listing {
    /// Record identifier ("1".."5").
    pub id: String,
    /// Card name.
    pub name: String,
    /// Asking price.
    pub price: f64,
    /// Condition or certification label, e.g. "PSA 9".
    pub grade: String,
    /// Number of known copies on the market.
    pub supply: u32,
    /// When the listing appeared, ISO-8601 UTC with a trailing `Z`.
    pub listed_at: String,
    /// Marketplace name.
    pub marketplace: String,
    /// Link to the listing on the marketplace.
    pub marketplace_url: String,
    /// Card image.
    pub image_url: String,
    /// Alternate valuation of the card.
    pub alt_value: f64,
    /// Percentage difference between `alt_value` and `price`, two decimals.
    pub difference: f64,
    /// Deal tier.
    pub cartel_category: CartelCategory,
}

/// Static description of a listing; everything but the timestamp is fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub grade: &'static str,
    pub supply: u32,
    /// How long before "now" the listing was posted.
    pub listed_minutes_ago: i64,
    pub marketplace: &'static str,
    pub marketplace_url: &'static str,
    pub image_url: &'static str,
    pub alt_value: f64,
    pub reference: Reference,
    pub cartel_category: CartelCategory,
}

impl ListingTemplate {
    /// Denominator used for the percentage difference.
    pub fn reference_value(&self) -> f64 {
        match self.reference {
            Reference::AltValue => self.alt_value,
            Reference::Price => self.price,
        }
    }

    /// `round(((alt_value - price) / reference) * 100, 2)`.
    pub fn difference(&self) -> f64 {
        round_cents((self.alt_value - self.price) / self.reference_value() * 100.0)
    }

    /// Posting time relative to `now`.
    pub fn listed_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::minutes(self.listed_minutes_ago)
    }

    /// Render the template into a listing as seen at `now`.
    pub fn render(&self, now: DateTime<Utc>) -> Listing {
        Listing {
            id: self.id.to_string(),
            name: self.name.to_string(),
            price: self.price,
            grade: self.grade.to_string(),
            supply: self.supply,
            listed_at: self.listed_at(now).format(LISTED_AT_FORMAT).to_string(),
            marketplace: self.marketplace.to_string(),
            marketplace_url: self.marketplace_url.to_string(),
            image_url: self.image_url.to_string(),
            alt_value: self.alt_value,
            difference: self.difference(),
            cartel_category: self.cartel_category,
        }
    }
}

/// Round to two decimal places.
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn template(price: f64, alt_value: f64, reference: Reference) -> ListingTemplate {
        ListingTemplate {
            id: "9",
            name: "Test Card",
            price,
            grade: "PSA 8",
            supply: 3,
            listed_minutes_ago: 10,
            marketplace: "eBay",
            marketplace_url: "https://www.ebay.com/",
            image_url: "https://images.example/card.png",
            alt_value,
            reference,
            cartel_category: CartelCategory::Silver,
        }
    }

    #[test]
    fn test_difference_against_alt_value() {
        let t = template(650.0, 710.0, Reference::AltValue);
        assert_eq!(t.difference(), 8.45);
    }

    #[test]
    fn test_difference_against_price() {
        let t = template(95.0, 85.0, Reference::Price);
        assert_eq!(t.difference(), -10.53);
    }

    #[test]
    fn test_render_timestamp_format() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let listing = template(1.0, 2.0, Reference::AltValue).render(now);
        assert_eq!(listing.listed_at, "2024-05-01T11:50:00.000000Z");
    }

    #[test]
    fn test_listing_serialization() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let listing = template(650.0, 710.0, Reference::AltValue).render(now);
        let json = serde_json::to_value(&listing).unwrap();

        assert_eq!(json["id"], "9");
        assert_eq!(json["cartel_category"], "Silver");
        assert_eq!(json["difference"], 8.45);
        assert_eq!(json["supply"], 3);
        assert!(json.get("reference").is_none());
    }

    #[test]
    fn test_category_roundtrip() {
        for category in [
            CartelCategory::Gold,
            CartelCategory::Silver,
            CartelCategory::Bronze,
        ] {
            let parsed: CartelCategory = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("platinum".parse::<CartelCategory>().is_err());
    }
}
