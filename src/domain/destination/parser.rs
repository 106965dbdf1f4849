//! Heuristic extraction of structured travel information from a
//! model-generated markdown write-up.
//!
//! The reply is segmented on markdown headings, sections are matched to
//! logical fields through substring synonyms, and list, prose and cost
//! content is pulled out with small regexes. Extraction is total:
//! whatever the input looks like, a well-formed record comes back, with
//! unfillable fields set to the fallback value.

use once_cell::sync::Lazy;
use regex::Regex;

use super::dto::{CostAnalysis, DestinationInfo, FALLBACK_TEXT};

static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#+\s+(.+)$").unwrap());
static BULLET_ITEM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*]\s+(.+)$").unwrap());
static NUMBERED_ITEM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+(.+)$").unwrap());

// The greedy `[^:]*` means a tier keyword can pick up the text after a
// later colon on the same line, and one phrase can satisfy several
// tiers. That lenient matching is intentional.
static BUDGET_TIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:budget|economy|cheap|low-cost)[^:]*:?\s*([^,\n.]+)").unwrap());
static MODERATE_TIER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:moderate|mid-range|standard|mid-budget)[^:]*:?\s*([^,\n.]+)").unwrap()
});
static LUXURY_TIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:luxury|high-end|premium|expensive)[^:]*:?\s*([^,\n.]+)").unwrap());

/// Section-title synonyms for each logical field, in lookup order.
const OVERVIEW_KEYS: &[&str] = &["overview", "introduction", "about"];
const THINGS_TO_DO_KEYS: &[&str] = &["things to do", "attractions", "activities", "what to do"];
const BEST_TIME_KEYS: &[&str] = &["best time", "when to visit", "seasons"];
const COST_KEYS: &[&str] = &["cost", "budget", "expenses", "pricing"];
const CULTURE_KEYS: &[&str] = &["local culture", "culture", "traditions", "customs"];
const TIPS_KEYS: &[&str] = &["travel tips", "tips", "advice", "recommendations"];

/// Parse a markdown write-up into a [`DestinationInfo`] record.
///
/// Never fails: input with nothing recognizable in it produces the
/// all-fallback record.
pub fn parse_destination_markdown(markdown: &str) -> DestinationInfo {
    let sections = split_sections(markdown);

    // Overview additionally falls back when the section flattens to
    // nothing; the other prose fields keep whatever the flatten yields.
    let overview = find_section(&sections, OVERVIEW_KEYS)
        .map(flatten_prose)
        .filter(|prose| !prose.is_empty())
        .unwrap_or_else(|| FALLBACK_TEXT.to_string());

    let things_to_do = list_or_fallback(find_section(&sections, THINGS_TO_DO_KEYS));

    let best_time_to_visit = prose_or_fallback(find_section(&sections, BEST_TIME_KEYS));

    let cost_analysis = find_section(&sections, COST_KEYS)
        .filter(|content| !content.is_empty())
        .map(extract_cost_analysis)
        .unwrap_or_else(CostAnalysis::fallback);

    let local_culture = prose_or_fallback(find_section(&sections, CULTURE_KEYS));

    let travel_tips = list_or_fallback(find_section(&sections, TIPS_KEYS));

    DestinationInfo {
        overview,
        things_to_do,
        best_time_to_visit,
        cost_analysis,
        local_culture,
        travel_tips,
    }
}

/// Segment markdown into `(lowercased heading, content)` pairs in
/// document order.
///
/// Every line is trimmed before inspection. A new heading commits the
/// previous section only when at least one line (blank ones count) was
/// accumulated under it, so a heading immediately followed by another
/// heading vanishes. Text before the first heading is discarded. A
/// repeated heading overwrites the earlier value in place.
fn split_sections(markdown: &str) -> Vec<(String, String)> {
    let mut sections: Vec<(String, String)> = Vec::new();
    let mut current_heading: Option<String> = None;
    let mut content: Vec<&str> = Vec::new();

    for raw_line in markdown.split('\n') {
        let line = raw_line.trim();

        if let Some(caps) = HEADING_RE.captures(line) {
            if let Some(heading) = current_heading.take() {
                if !content.is_empty() {
                    commit_section(&mut sections, heading, content.join("\n"));
                }
            }
            content.clear();
            current_heading = Some(caps[1].trim().to_lowercase());
            continue;
        }

        if current_heading.is_some() {
            content.push(line);
        }
    }

    if let Some(heading) = current_heading {
        if !content.is_empty() {
            commit_section(&mut sections, heading, content.join("\n"));
        }
    }

    sections
}

fn commit_section(sections: &mut Vec<(String, String)>, heading: String, body: String) {
    match sections.iter().position(|(key, _)| key == &heading) {
        Some(index) => sections[index].1 = body,
        None => sections.push((heading, body)),
    }
}

/// Candidate-major fuzzy lookup: for each synonym in order, the first
/// section whose key contains it as a substring wins.
fn find_section<'a>(sections: &'a [(String, String)], candidates: &[&str]) -> Option<&'a str> {
    for &candidate in candidates {
        if let Some((_, content)) = sections.iter().find(|(key, _)| key.contains(candidate)) {
            return Some(content.as_str());
        }
    }
    None
}

/// Pull bulleted (`-`, `*`) and numbered (`1.`) items out of a section,
/// markers stripped, in document order.
fn extract_list_items(content: &str) -> Vec<String> {
    let mut items = Vec::new();

    for raw_line in content.split('\n') {
        let line = raw_line.trim();
        let item = BULLET_ITEM_RE
            .captures(line)
            .or_else(|| NUMBERED_ITEM_RE.captures(line))
            .map(|caps| caps[1].trim().to_string());

        if let Some(item) = item {
            if !item.is_empty() {
                items.push(item);
            }
        }
    }

    items
}

/// Drop blank lines and join the rest with single spaces.
fn flatten_prose(content: &str) -> String {
    content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn list_or_fallback(section: Option<&str>) -> Vec<String> {
    let items = section.map(extract_list_items).unwrap_or_default();
    if items.is_empty() {
        vec![FALLBACK_TEXT.to_string()]
    } else {
        items
    }
}

fn prose_or_fallback(section: Option<&str>) -> String {
    section
        .filter(|content| !content.is_empty())
        .map(flatten_prose)
        .unwrap_or_else(|| FALLBACK_TEXT.to_string())
}

fn extract_cost_analysis(content: &str) -> CostAnalysis {
    CostAnalysis {
        budget: tier_or_fallback(&BUDGET_TIER_RE, content),
        moderate: tier_or_fallback(&MODERATE_TIER_RE, content),
        luxury: tier_or_fallback(&LUXURY_TIER_RE, content),
    }
}

/// First tier match, trimmed; capture runs to the next comma, newline
/// or period.
fn tier_or_fallback(pattern: &Regex, content: &str) -> String {
    pattern
        .captures(content)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_else(|| FALLBACK_TEXT.to_string())
}
