/// Prompt template for destination write-ups.
pub struct DestinationPrompt;

impl DestinationPrompt {
    /// Build the generation prompt for a destination.
    ///
    /// The six numbered sections line up with the extraction heuristics
    /// in [`super::parser`]; the markdown instruction keeps replies in a
    /// shape those heuristics can segment.
    pub fn build(destination_name: &str) -> String {
        format!(
            r#"Generate comprehensive travel information about {destination_name} only about the following points, make sure each section is titled exactly as such:
1. Brief overview
2. Top things to do
3. Best time to visit
4. Cost analysis for different budgets (budget, moderate, luxury)
5. Local culture insights
6. Essential travel tips

Format the response in markdown with clear section headers (## Section Name) and use bullet points or numbered lists for lists."#
        )
    }
}

/// Turn a destination identifier into its display name.
///
/// Identifiers use hyphens where display names have spaces.
pub fn display_name(id: &str) -> String {
    id.replace('-', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_include_destination_name_in_prompt() {
        // Arrange
        let name = "new york";

        // Act
        let prompt = DestinationPrompt::build(name);

        // Assert
        assert!(prompt.contains("travel information about new york"));
    }

    #[test]
    fn should_request_all_six_sections() {
        // Act
        let prompt = DestinationPrompt::build("paris");

        // Assert
        assert!(prompt.contains("1. Brief overview"));
        assert!(prompt.contains("2. Top things to do"));
        assert!(prompt.contains("3. Best time to visit"));
        assert!(prompt.contains("4. Cost analysis for different budgets (budget, moderate, luxury)"));
        assert!(prompt.contains("5. Local culture insights"));
        assert!(prompt.contains("6. Essential travel tips"));
    }

    #[test]
    fn should_request_markdown_section_headers() {
        // Act
        let prompt = DestinationPrompt::build("tokyo");

        // Assert
        assert!(prompt.contains("## Section Name"));
        assert!(prompt.contains("bullet points or numbered lists"));
    }

    #[test]
    fn should_replace_every_hyphen_in_display_name() {
        assert_eq!(display_name("new-york"), "new york");
        assert_eq!(display_name("rio-de-janeiro"), "rio de janeiro");
        assert_eq!(display_name("paris"), "paris");
    }
}
