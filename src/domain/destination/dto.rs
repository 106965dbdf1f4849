use serde::Serialize;
use utoipa::ToSchema;

/// Value used for any field the extractor could not fill.
pub const FALLBACK_TEXT: &str = "Information not available";

/// Cost estimates per budget tier, pulled from the cost-analysis section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostAnalysis {
    /// Estimate for budget travelers
    #[schema(example = "$50-80/day")]
    pub budget: String,
    /// Estimate for mid-range travelers
    #[schema(example = "$120-200/day")]
    pub moderate: String,
    /// Estimate for luxury travelers
    #[schema(example = "$400+/day")]
    pub luxury: String,
}

impl CostAnalysis {
    /// All three tiers set to the fallback value.
    pub fn fallback() -> Self {
        Self {
            budget: FALLBACK_TEXT.to_string(),
            moderate: FALLBACK_TEXT.to_string(),
            luxury: FALLBACK_TEXT.to_string(),
        }
    }
}

/// Structured travel information extracted from a generated write-up.
///
/// Every field is always populated; extraction gaps degrade to the
/// fallback value instead of being omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DestinationInfo {
    /// Short prose overview of the destination
    #[schema(example = "Paris is the capital of France, famous for its art and cuisine.")]
    pub overview: String,
    /// Attractions and activities
    pub things_to_do: Vec<String>,
    /// When to go
    #[schema(example = "April to June and September to October")]
    pub best_time_to_visit: String,
    /// Cost estimates per budget tier
    pub cost_analysis: CostAnalysis,
    /// Cultural notes
    pub local_culture: String,
    /// Practical tips
    pub travel_tips: Vec<String>,
}

impl DestinationInfo {
    /// Record with every field set to its fallback value.
    pub fn fallback() -> Self {
        Self {
            overview: FALLBACK_TEXT.to_string(),
            things_to_do: vec![FALLBACK_TEXT.to_string()],
            best_time_to_visit: FALLBACK_TEXT.to_string(),
            cost_analysis: CostAnalysis::fallback(),
            local_culture: FALLBACK_TEXT.to_string(),
            travel_tips: vec![FALLBACK_TEXT.to_string()],
        }
    }
}

/// Response body for `GET /api/destinations/{id}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DestinationInfoResponse {
    /// Destination identifier, as requested
    #[schema(example = "new-york")]
    pub id: String,
    /// Display name derived from the identifier
    #[schema(example = "new york")]
    pub name: String,
    /// Extracted travel information, flattened into the top level
    #[serde(flatten)]
    pub info: DestinationInfo,
}
