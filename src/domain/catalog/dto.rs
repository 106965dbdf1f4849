use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::AppError;

/// Price bracket a destination falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub enum PriceTier {
    Budget,
    Moderate,
    High,
    Luxury,
}

impl FromStr for PriceTier {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Budget" => Ok(Self::Budget),
            "Moderate" => Ok(Self::Moderate),
            "High" => Ok(Self::High),
            "Luxury" => Ok(Self::Luxury),
            other => Err(AppError::BadRequest(format!(
                "unknown price tier '{other}', expected one of: Budget, Moderate, High, Luxury"
            ))),
        }
    }
}

/// World region used by the catalog filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub enum Region {
    Europe,
    Asia,
    Americas,
    Africa,
    Oceania,
}

impl FromStr for Region {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Europe" => Ok(Self::Europe),
            "Asia" => Ok(Self::Asia),
            "Americas" => Ok(Self::Americas),
            "Africa" => Ok(Self::Africa),
            "Oceania" => Ok(Self::Oceania),
            other => Err(AppError::BadRequest(format!(
                "unknown region '{other}', expected one of: Europe, Asia, Americas, Africa, Oceania"
            ))),
        }
    }
}

/// Season a destination is best visited in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl FromStr for Season {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Spring" => Ok(Self::Spring),
            "Summer" => Ok(Self::Summer),
            "Fall" => Ok(Self::Fall),
            "Winter" => Ok(Self::Winter),
            other => Err(AppError::BadRequest(format!(
                "unknown season '{other}', expected one of: Spring, Summer, Fall, Winter"
            ))),
        }
    }
}

/// Activity category attached to a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub enum Activity {
    Culture,
    Nature,
    Adventure,
    Food,
    Beach,
    Art,
    Shopping,
}

impl FromStr for Activity {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Culture" => Ok(Self::Culture),
            "Nature" => Ok(Self::Nature),
            "Adventure" => Ok(Self::Adventure),
            "Food" => Ok(Self::Food),
            "Beach" => Ok(Self::Beach),
            "Art" => Ok(Self::Art),
            "Shopping" => Ok(Self::Shopping),
            other => Err(AppError::BadRequest(format!(
                "unknown activity '{other}', expected one of: Culture, Nature, Adventure, Food, Beach, Art, Shopping"
            ))),
        }
    }
}

/// Comparison scores on a 0 to 5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct DestinationMetrics {
    #[schema(example = 3)]
    pub accommodation: u8,
    #[schema(example = 4)]
    pub food: u8,
    #[schema(example = 5)]
    pub attractions: u8,
    #[schema(example = 4)]
    pub activities: u8,
    #[schema(example = 2)]
    pub cost: u8,
}

/// Catalog entry as served by the explore listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DestinationSummary {
    #[schema(example = "paris")]
    pub id: String,
    #[schema(example = "Paris")]
    pub name: String,
    #[schema(example = "France")]
    pub country: String,
    pub price: PriceTier,
    pub region: Region,
    pub season: Season,
    pub activities: Vec<Activity>,
    #[schema(example = "https://images.unsplash.com/photo-1502602898657-3e91760cbb34")]
    pub image: String,
}

/// Featured destination shown on the landing page.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedDestination {
    #[schema(example = "london")]
    pub id: String,
    #[schema(example = "London")]
    pub title: String,
    #[schema(example = "Experience the perfect blend of history and modernity")]
    pub description: String,
    #[schema(example = "https://images.unsplash.com/photo-1513635269975-59663e0ac1ad")]
    pub image: String,
}

/// One destination in a comparison result.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompareEntry {
    #[schema(example = "tokyo")]
    pub id: String,
    #[schema(example = "Tokyo")]
    pub name: String,
    #[schema(example = "Japan")]
    pub country: String,
    pub metrics: DestinationMetrics,
}

/// Query parameters of the catalog listing. Each field is a
/// comma-separated list of allowed values; an absent field places no
/// restriction on that category.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub price: Option<String>,
    pub region: Option<String>,
    pub season: Option<String>,
    pub activities: Option<String>,
}

/// Parsed form of [`CatalogQuery`].
#[derive(Debug, Default)]
pub struct CatalogFilter {
    pub price: Vec<PriceTier>,
    pub region: Vec<Region>,
    pub season: Vec<Season>,
    pub activities: Vec<Activity>,
}

impl CatalogQuery {
    pub fn parse(&self) -> Result<CatalogFilter, AppError> {
        Ok(CatalogFilter {
            price: parse_csv(self.price.as_deref())?,
            region: parse_csv(self.region.as_deref())?,
            season: parse_csv(self.season.as_deref())?,
            activities: parse_csv(self.activities.as_deref())?,
        })
    }
}

/// Split a comma-separated query value into parsed entries. Blank
/// segments are skipped, so `price=` and `price=High,` behave like the
/// shorter spellings.
fn parse_csv<T: FromStr<Err = AppError>>(raw: Option<&str>) -> Result<Vec<T>, AppError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(T::from_str)
        .collect()
}

/// Comparison selection, between one and four destination identifiers.
#[derive(Debug, Validate)]
pub struct CompareSelection {
    #[validate(length(min = 1, max = 4, message = "select between 1 and 4 destinations"))]
    pub ids: Vec<String>,
}

impl CompareSelection {
    /// Parse the raw `ids` query value. Blank segments are dropped
    /// before the length check.
    pub fn from_query(raw: &str) -> Result<Self, AppError> {
        let selection = Self {
            ids: raw
                .split(',')
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        };
        selection
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_enums_as_display_names() {
        assert_eq!(serde_json::to_string(&PriceTier::High).unwrap(), "\"High\"");
        assert_eq!(serde_json::to_string(&Region::Americas).unwrap(), "\"Americas\"");
        assert_eq!(serde_json::to_string(&Season::Fall).unwrap(), "\"Fall\"");
        assert_eq!(serde_json::to_string(&Activity::Shopping).unwrap(), "\"Shopping\"");
    }

    #[test]
    fn should_parse_filter_values_case_sensitively() {
        // Arrange
        let query = CatalogQuery {
            price: Some("budget".to_string()),
            ..CatalogQuery::default()
        };

        // Act
        let result = query.parse();

        // Assert
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn should_parse_comma_separated_filters() {
        // Arrange
        let query = CatalogQuery {
            price: Some("High,Moderate".to_string()),
            region: Some("Asia".to_string()),
            season: None,
            activities: Some("Beach, Culture".to_string()),
        };

        // Act
        let filter = query.parse().unwrap();

        // Assert
        assert_eq!(filter.price, vec![PriceTier::High, PriceTier::Moderate]);
        assert_eq!(filter.region, vec![Region::Asia]);
        assert!(filter.season.is_empty());
        assert_eq!(filter.activities, vec![Activity::Beach, Activity::Culture]);
    }

    #[test]
    fn should_skip_blank_filter_segments() {
        // Arrange
        let query = CatalogQuery {
            price: Some("High,".to_string()),
            ..CatalogQuery::default()
        };

        // Act
        let filter = query.parse().unwrap();

        // Assert
        assert_eq!(filter.price, vec![PriceTier::High]);
    }

    #[test]
    fn should_accept_up_to_four_compare_ids() {
        let selection = CompareSelection::from_query("paris,tokyo,new-york,bali").unwrap();

        assert_eq!(selection.ids.len(), 4);
    }

    #[test]
    fn should_reject_empty_compare_selection() {
        let result = CompareSelection::from_query(" , ");

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn should_reject_more_than_four_compare_ids() {
        let result = CompareSelection::from_query("a,b,c,d,e");

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn should_serialize_summary_in_camel_case() {
        // Arrange
        let summary = DestinationSummary {
            id: "bali".to_string(),
            name: "Bali".to_string(),
            country: "Indonesia".to_string(),
            price: PriceTier::Moderate,
            region: Region::Asia,
            season: Season::Summer,
            activities: vec![Activity::Beach, Activity::Nature],
            image: "https://example.com/bali.jpg".to_string(),
        };

        // Act
        let value = serde_json::to_value(&summary).unwrap();

        // Assert
        assert_eq!(value["price"], "Moderate");
        assert_eq!(value["activities"][0], "Beach");
        assert_eq!(value["image"], "https://example.com/bali.jpg");
    }
}
