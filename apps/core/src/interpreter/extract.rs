//! Entity extraction.
//!
//! Eight independent extractors, each scanning normalized text and writing
//! only its own field(s) of [`Entities`]. They never read each other's output;
//! the only cross-read is campaign qualification reading the campaign types
//! collected a moment earlier by the same extractor.

use super::descriptor::{push_unique, Entities, Timeframe};
use super::patterns::{
    CanonicalPattern, CAMPAIGN_PATTERNS, DEPLOYMENT_PATTERN, EMAIL_PATTERN, LIMIT_PATTERN,
    METRIC_PATTERNS, MONTH_PATTERN, MONTH_RANGE_PATTERN, PROFESSION_PATTERNS, QUARTER_PATTERN,
    SPECIALTY_PATTERNS, TOPIC_PATTERNS, YEAR_PATTERN,
};

/// Run every extractor over normalized text.
///
/// `current_year` fills `timeframe.year` when a timeframe cue fired without an
/// explicit year.
pub fn extract_all(text: &str, current_year: i32) -> Entities {
    let mut entities = Entities::default();

    extract_specialties(text, &mut entities);
    extract_professions(text, &mut entities);
    extract_campaigns(text, &mut entities);
    extract_metrics(text, &mut entities);
    extract_topics(text, &mut entities);
    extract_timeframe(text, current_year, &mut entities);
    extract_email(text, &mut entities);
    extract_limit(text, &mut entities);

    entities
}

fn collect_canonical(table: &[CanonicalPattern], text: &str, set: &mut Vec<String>) {
    for pattern in table.iter().filter(|p| p.matcher.is_match(text)) {
        push_unique(set, pattern.value);
    }
}

fn first_capture<'t>(re: &regex::Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub fn extract_specialties(text: &str, entities: &mut Entities) {
    collect_canonical(&SPECIALTY_PATTERNS, text, &mut entities.specialties);
}

pub fn extract_professions(text: &str, entities: &mut Entities) {
    for pattern in PROFESSION_PATTERNS.iter().filter(|p| p.matcher.is_match(text)) {
        for value in pattern.value.values() {
            push_unique(&mut entities.professions, value);
        }
    }
}

/// Campaign types, then month/year qualification and the deployment number.
pub fn extract_campaigns(text: &str, entities: &mut Entities) {
    collect_canonical(&CAMPAIGN_PATTERNS, text, &mut entities.campaigns);

    let month = first_capture(&MONTH_PATTERN, text);
    let year = first_capture(&YEAR_PATTERN, text);

    if let (Some(month), Some(year)) = (month, year) {
        let mut specific = Vec::new();
        if entities.campaigns.is_empty() {
            specific.push(format!("{} {}", month, year));
        } else {
            for campaign in &entities.campaigns {
                push_unique(&mut specific, &format!("{} {} {}", campaign, month, year));
            }
        }
        entities.specific_campaigns = Some(specific);
    }

    if let Some(deployment) =
        first_capture(&DEPLOYMENT_PATTERN, text).and_then(|d| d.parse::<u8>().ok())
    {
        entities.deployment = Some(deployment);
    }
}

pub fn extract_metrics(text: &str, entities: &mut Entities) {
    collect_canonical(&METRIC_PATTERNS, text, &mut entities.metrics);
}

pub fn extract_topics(text: &str, entities: &mut Entities) {
    collect_canonical(&TOPIC_PATTERNS, text, &mut entities.topics);
}

/// Month, year, quarter and month range. Leaves `timeframe` unset when none fired.
pub fn extract_timeframe(text: &str, current_year: i32, entities: &mut Entities) {
    let month = first_capture(&MONTH_PATTERN, text);
    let year = first_capture(&YEAR_PATTERN, text).and_then(|y| y.parse::<i32>().ok());
    let quarter = first_capture(&QUARTER_PATTERN, text).and_then(|q| q.parse::<u8>().ok());
    let range = MONTH_RANGE_PATTERN
        .captures(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()));

    if month.is_none() && year.is_none() && quarter.is_none() && range.is_none() {
        return;
    }

    let (start_month, end_month) = match range {
        Some((start, end)) => (Some(start), Some(end)),
        None => (None, None),
    };

    entities.timeframe = Some(Timeframe {
        month: month.map(str::to_string),
        year: year.unwrap_or(current_year),
        quarter,
        start_month,
        end_month,
    });
}

pub fn extract_email(text: &str, entities: &mut Entities) {
    if let Some(m) = EMAIL_PATTERN.find(text) {
        entities.email = Some(m.as_str().to_lowercase());
    }
}

/// "top N"; a run of digits that is zero or overflows `u32` is ignored.
pub fn extract_limit(text: &str, entities: &mut Entities) {
    entities.limit = first_capture(&LIMIT_PATTERN, text)
        .and_then(|n| n.parse::<u32>().ok())
        .filter(|n| *n > 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(extractor: fn(&str, &mut Entities), text: &str) -> Entities {
        let mut entities = Entities::default();
        extractor(text, &mut entities);
        entities
    }

    #[test]
    fn test_specialties_follow_table_order() {
        let entities = run(extract_specialties, "oncology and dermatology and oncologists");
        assert_eq!(entities.specialties, vec!["Dermatology", "Oncology"]);
    }

    #[test]
    fn test_specialties_deduplicate() {
        let entities = run(extract_specialties, "dermatology dermatologist");
        assert_eq!(entities.specialties, vec!["Dermatology"]);
    }

    #[test]
    fn test_professions_expand_combined_cue() {
        let entities = run(extract_professions, "np/pa engagement");
        assert_eq!(
            entities.professions,
            vec!["Nurse Practitioner", "Physician Assistant"]
        );

        let entities = run(extract_professions, "pharmacists only");
        assert_eq!(entities.professions, vec!["Pharmacist"]);
    }

    #[test]
    fn test_campaign_qualification() {
        let entities = run(extract_campaigns, "newsletter and webinar results for march 2025");
        assert_eq!(entities.campaigns, vec!["newsletter", "webinar"]);
        assert_eq!(
            entities.specific_campaigns,
            Some(vec![
                "newsletter march 2025".to_string(),
                "webinar march 2025".to_string()
            ])
        );
    }

    #[test]
    fn test_campaign_qualification_needs_month_and_year() {
        let entities = run(extract_campaigns, "newsletter results for march");
        assert_eq!(entities.campaigns, vec!["newsletter"]);
        assert_eq!(entities.specific_campaigns, None);

        let entities = run(extract_campaigns, "newsletter results for 2025");
        assert_eq!(entities.specific_campaigns, None);
    }

    #[test]
    fn test_bare_month_year_without_campaign() {
        let entities = run(extract_campaigns, "results for march 2025");
        assert!(entities.campaigns.is_empty());
        assert_eq!(entities.specific_campaigns, Some(vec!["march 2025".to_string()]));
    }

    #[test]
    fn test_deployment_is_independent_of_timeframe() {
        let entities = run(extract_campaigns, "webinar deployment #2");
        assert_eq!(entities.deployment, Some(2));
        assert_eq!(entities.specific_campaigns, None);

        let entities = run(extract_campaigns, "deployment 7");
        assert_eq!(entities.deployment, None);
    }

    #[test]
    fn test_timeframe_month_and_year() {
        let mut entities = Entities::default();
        extract_timeframe("results for march 2024", 2030, &mut entities);

        let timeframe = entities.timeframe.unwrap();
        assert_eq!(timeframe.month.as_deref(), Some("march"));
        assert_eq!(timeframe.year, 2024);
        assert_eq!(timeframe.quarter, None);
    }

    #[test]
    fn test_timeframe_defaults_year_only_when_materialized() {
        let mut entities = Entities::default();
        extract_timeframe("q3 open rates", 2030, &mut entities);
        let timeframe = entities.timeframe.unwrap();
        assert_eq!(timeframe.quarter, Some(3));
        assert_eq!(timeframe.year, 2030);

        let mut entities = Entities::default();
        extract_timeframe("open rates by specialty", 2030, &mut entities);
        assert_eq!(entities.timeframe, None);
    }

    #[test]
    fn test_timeframe_month_range() {
        let mut entities = Entities::default();
        extract_timeframe("engagement from january to march 2025", 2030, &mut entities);

        let timeframe = entities.timeframe.unwrap();
        assert_eq!(timeframe.month.as_deref(), Some("january"));
        assert_eq!(timeframe.start_month.as_deref(), Some("january"));
        assert_eq!(timeframe.end_month.as_deref(), Some("march"));
        assert_eq!(timeframe.year, 2025);
    }

    #[test]
    fn test_email() {
        let entities = run(extract_email, "profile for jane.doe@example.com please");
        assert_eq!(entities.email.as_deref(), Some("jane.doe@example.com"));

        let entities = run(extract_email, "profile for jane at example dot com");
        assert_eq!(entities.email, None);
    }

    #[test]
    fn test_email_keeps_first_address() {
        let entities = run(extract_email, "a@b.co and c@d.org");
        assert_eq!(entities.email.as_deref(), Some("a@b.co"));

        let entities = run(extract_email, "c@d.org and a@b.co");
        assert_eq!(entities.email.as_deref(), Some("c@d.org"));
    }

    #[test]
    fn test_limit() {
        assert_eq!(run(extract_limit, "top 25 users").limit, Some(25));
        assert_eq!(run(extract_limit, "top   5").limit, Some(5));
        assert_eq!(run(extract_limit, "top users").limit, None);
        assert_eq!(run(extract_limit, "top 0 users").limit, None);
        assert_eq!(run(extract_limit, "top 99999999999 users").limit, None);
    }

    #[test]
    fn test_limit_cue_inside_a_word() {
        // same substring reading as the top_users rule
        assert_eq!(run(extract_limit, "laptop 5 users").limit, Some(5));
        assert_eq!(run(extract_limit, "stop 3 emails").limit, Some(3));
    }

    #[test]
    fn test_extract_all_on_empty_text() {
        let entities = extract_all("", 2025);
        assert_eq!(entities, Entities::default());
    }
}
