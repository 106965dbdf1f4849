use super::data::{CatalogEntry, CATALOG, FEATURED};
use super::dto::{
    CatalogFilter, CompareEntry, CompareSelection, DestinationSummary, FeaturedDestination,
};
use crate::error::AppError;

pub struct CatalogService;

impl CatalogService {
    /// List catalog entries matching the filter. A category with no
    /// selected values places no restriction; the activities category
    /// matches on any overlap.
    pub fn list(filter: &CatalogFilter) -> Vec<DestinationSummary> {
        CATALOG
            .iter()
            .filter(|entry| {
                let price_ok = filter.price.is_empty() || filter.price.contains(&entry.price);
                let region_ok = filter.region.is_empty() || filter.region.contains(&entry.region);
                let season_ok = filter.season.is_empty() || filter.season.contains(&entry.season);
                let activities_ok = filter.activities.is_empty()
                    || entry
                        .activities
                        .iter()
                        .any(|activity| filter.activities.contains(activity));
                price_ok && region_ok && season_ok && activities_ok
            })
            .map(summary_of)
            .collect()
    }

    pub fn featured() -> Vec<FeaturedDestination> {
        FEATURED
            .iter()
            .map(|entry| FeaturedDestination {
                id: entry.id.to_string(),
                title: entry.title.to_string(),
                description: entry.description.to_string(),
                image: entry.image.to_string(),
            })
            .collect()
    }

    /// Resolve the selected identifiers against the catalog, keeping
    /// the order of the request.
    pub fn compare(selection: &CompareSelection) -> Result<Vec<CompareEntry>, AppError> {
        selection
            .ids
            .iter()
            .map(|id| {
                CATALOG
                    .iter()
                    .find(|entry| entry.id == id)
                    .map(|entry| CompareEntry {
                        id: entry.id.to_string(),
                        name: entry.name.to_string(),
                        country: entry.country.to_string(),
                        metrics: entry.metrics,
                    })
                    .ok_or_else(|| AppError::NotFound(format!("unknown destination '{id}'")))
            })
            .collect()
    }
}

fn summary_of(entry: &CatalogEntry) -> DestinationSummary {
    DestinationSummary {
        id: entry.id.to_string(),
        name: entry.name.to_string(),
        country: entry.country.to_string(),
        price: entry.price,
        region: entry.region,
        season: entry.season,
        activities: entry.activities.to_vec(),
        image: entry.image.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::dto::{Activity, PriceTier, Region, Season};

    #[test]
    fn empty_filter_should_list_whole_catalog() {
        // Arrange
        let filter = CatalogFilter::default();

        // Act
        let listed = CatalogService::list(&filter);

        // Assert
        assert_eq!(listed.len(), 4);
        assert_eq!(listed[0].id, "paris");
    }

    #[test]
    fn price_filter_should_keep_matching_tiers_only() {
        // Arrange
        let filter = CatalogFilter {
            price: vec![PriceTier::Moderate],
            ..CatalogFilter::default()
        };

        // Act
        let listed = CatalogService::list(&filter);

        // Assert
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "bali");
    }

    #[test]
    fn categories_should_combine_with_and_semantics() {
        // Arrange
        let filter = CatalogFilter {
            region: vec![Region::Asia],
            season: vec![Season::Spring],
            ..CatalogFilter::default()
        };

        // Act
        let listed = CatalogService::list(&filter);

        // Assert
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "tokyo");
    }

    #[test]
    fn activity_filter_should_match_on_any_overlap() {
        // Arrange
        let filter = CatalogFilter {
            activities: vec![Activity::Beach, Activity::Art],
            ..CatalogFilter::default()
        };

        // Act
        let listed = CatalogService::list(&filter);

        // Assert
        let ids: Vec<&str> = listed.iter().map(|entry| entry.id.as_str()).collect();
        assert_eq!(ids, vec!["paris", "bali"]);
    }

    #[test]
    fn unmatched_filter_should_list_nothing() {
        // Arrange
        let filter = CatalogFilter {
            region: vec![Region::Africa],
            ..CatalogFilter::default()
        };

        // Act
        let listed = CatalogService::list(&filter);

        // Assert
        assert!(listed.is_empty());
    }

    #[test]
    fn compare_should_keep_the_request_order() {
        // Arrange
        let selection = CompareSelection {
            ids: vec!["bali".to_string(), "paris".to_string()],
        };

        // Act
        let entries = CatalogService::compare(&selection).unwrap();

        // Assert
        assert_eq!(entries[0].id, "bali");
        assert_eq!(entries[1].id, "paris");
        assert_eq!(entries[1].metrics.food, 5);
    }

    #[test]
    fn compare_should_reject_unknown_identifiers() {
        // Arrange
        let selection = CompareSelection {
            ids: vec!["paris".to_string(), "atlantis".to_string()],
        };

        // Act
        let result = CatalogService::compare(&selection);

        // Assert
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn featured_should_serve_the_landing_page_highlights() {
        let featured = CatalogService::featured();

        assert_eq!(featured.len(), 4);
        assert_eq!(featured[0].id, "london");
        assert_eq!(
            featured[0].description,
            "Experience the perfect blend of history and modernity"
        );
    }
}
