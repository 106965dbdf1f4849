use super::client::SharedTextGenerator;
use super::dto::DestinationInfoResponse;
use super::parser::parse_destination_markdown;
use super::prompt::{display_name, DestinationPrompt};
use crate::error::AppError;

/// Orchestrates the prompt, generation and extraction pipeline.
#[derive(Clone)]
pub struct DestinationService {
    generator: SharedTextGenerator,
}

impl DestinationService {
    pub fn new(generator: SharedTextGenerator) -> Self {
        Self { generator }
    }

    /// Produce the structured write-up for a destination identifier.
    ///
    /// Exactly one generation call per request, no retry and no caching.
    /// Provider failures bubble up; extraction gaps degrade to fallback
    /// values inside the record instead of failing the request.
    pub async fn destination_info(&self, id: &str) -> Result<DestinationInfoResponse, AppError> {
        let name = display_name(id);
        let prompt = DestinationPrompt::build(&name);

        let markdown = self.generator.generate(&prompt).await?;
        tracing::debug!(reply_chars = markdown.len(), "Generation reply received");

        let info = parse_destination_markdown(&markdown);

        Ok(DestinationInfoResponse {
            id: id.to_string(),
            name,
            info,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::destination::client::MockTextGenerator;
    use crate::domain::destination::dto::{DestinationInfo, FALLBACK_TEXT};

    #[tokio::test]
    async fn should_parse_generated_markdown_into_record() {
        // Arrange
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .withf(|prompt: &str| prompt.contains("new york"))
            .returning(|_| Ok("## Overview\nThe city that never sleeps.".to_string()));
        let service = DestinationService::new(Arc::new(generator));

        // Act
        let response = service.destination_info("new-york").await.unwrap();

        // Assert
        assert_eq!(response.id, "new-york");
        assert_eq!(response.name, "new york");
        assert_eq!(response.info.overview, "The city that never sleeps.");
        assert_eq!(response.info.best_time_to_visit, FALLBACK_TEXT);
    }

    #[tokio::test]
    async fn should_propagate_generation_failure() {
        // Arrange
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Err(AppError::GenerationFailed("upstream closed".to_string())));
        let service = DestinationService::new(Arc::new(generator));

        // Act
        let result = service.destination_info("paris").await;

        // Assert
        assert!(matches!(result, Err(AppError::GenerationFailed(_))));
    }

    #[tokio::test]
    async fn should_call_generator_exactly_once_per_request() {
        // Arrange
        let mut generator = MockTextGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_| Ok(String::new()));
        let service = DestinationService::new(Arc::new(generator));

        // Act
        let response = service.destination_info("bali").await.unwrap();

        // Assert
        assert_eq!(response.info, DestinationInfo::fallback());
    }
}
