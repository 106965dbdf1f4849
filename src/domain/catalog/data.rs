use super::dto::{Activity, DestinationMetrics, PriceTier, Region, Season};

/// Seed catalog entry. The explore listing, comparison and featured
/// endpoints all serve from this table.
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub price: PriceTier,
    pub region: Region,
    pub season: Season,
    pub activities: &'static [Activity],
    pub image: &'static str,
    pub metrics: DestinationMetrics,
}

pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "paris",
        name: "Paris",
        country: "France",
        price: PriceTier::High,
        region: Region::Europe,
        season: Season::Spring,
        activities: &[Activity::Culture, Activity::Food, Activity::Art],
        image: "https://images.unsplash.com/photo-1502602898657-3e91760cbb34",
        metrics: DestinationMetrics {
            accommodation: 3,
            food: 5,
            attractions: 5,
            activities: 4,
            cost: 2,
        },
    },
    CatalogEntry {
        id: "tokyo",
        name: "Tokyo",
        country: "Japan",
        price: PriceTier::High,
        region: Region::Asia,
        season: Season::Spring,
        activities: &[Activity::Culture, Activity::Food, Activity::Shopping],
        image: "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf",
        metrics: DestinationMetrics {
            accommodation: 4,
            food: 5,
            attractions: 4,
            activities: 5,
            cost: 2,
        },
    },
    CatalogEntry {
        id: "new-york",
        name: "New York",
        country: "United States",
        price: PriceTier::High,
        region: Region::Americas,
        season: Season::Fall,
        activities: &[Activity::Culture, Activity::Food, Activity::Shopping],
        image: "https://images.unsplash.com/photo-1496442226666-8d4d0e62e6e9",
        metrics: DestinationMetrics {
            accommodation: 3,
            food: 4,
            attractions: 5,
            activities: 5,
            cost: 1,
        },
    },
    CatalogEntry {
        id: "bali",
        name: "Bali",
        country: "Indonesia",
        price: PriceTier::Moderate,
        region: Region::Asia,
        season: Season::Summer,
        activities: &[Activity::Beach, Activity::Nature, Activity::Culture],
        image: "https://images.unsplash.com/photo-1537996194471-e657df975ab4",
        metrics: DestinationMetrics {
            accommodation: 4,
            food: 4,
            attractions: 4,
            activities: 4,
            cost: 4,
        },
    },
];

/// Landing-page highlight.
pub struct FeaturedEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const FEATURED: &[FeaturedEntry] = &[
    FeaturedEntry {
        id: "london",
        title: "London",
        description: "Experience the perfect blend of history and modernity",
        image: "https://images.unsplash.com/photo-1513635269975-59663e0ac1ad",
    },
    FeaturedEntry {
        id: "new-york",
        title: "New York",
        description: "The city that never sleeps awaits your adventure",
        image: "https://images.unsplash.com/photo-1496442226666-8d4d0e62e6e9",
    },
    FeaturedEntry {
        id: "tokyo",
        title: "Tokyo",
        description: "Immerse yourself in Japanese culture and innovation",
        image: "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf",
    },
    FeaturedEntry {
        id: "rome",
        title: "Rome",
        description: "Walk through centuries of art and architecture",
        image: "https://images.unsplash.com/photo-1552832230-c0197dd311b5",
    },
];
