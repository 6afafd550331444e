// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use leadrs::domain::models::lead::{ContactInfo, Lead, LeadSource, Priority};
use leadrs::domain::services::lead_scorer::{priority_for_score, LeadScorer, MAX_SCORE};

const TEMPERATURE_TAGS: [&str; 3] = ["hot-lead", "warm-lead", "cold-lead"];

fn fully_loaded(source: LeadSource) -> Lead {
    let mut lead = Lead::new("Loaded", source);
    lead.contact_info = ContactInfo {
        email: Some("a@b.c".to_string()),
        phone: Some("1".to_string()),
        company: Some("Acme".to_string()),
        title: Some("CTO".to_string()),
        ..Default::default()
    };
    lead.estimated_value = Some(250_000.0);
    lead.product_interest = Some("enterprise demo".to_string());
    lead.utm_source = Some("g".to_string());
    lead.utm_medium = Some("cpc".to_string());
    lead.utm_campaign = Some("q3".to_string());
    lead
}

#[test]
fn test_every_source_stays_within_bounds() {
    let scorer = LeadScorer::default();

    for source in LeadSource::ALL {
        let empty = scorer.assess(&Lead::new("Empty", source));
        let loaded = scorer.assess(&fully_loaded(source));

        assert!((0..=MAX_SCORE).contains(&empty.score));
        assert!((0..=MAX_SCORE).contains(&loaded.score));
        assert!(loaded.score >= empty.score, "source {source}");
    }
}

#[test]
fn test_assessment_is_internally_consistent() {
    let scorer = LeadScorer::default();

    for source in LeadSource::ALL {
        for lead in [Lead::new("Empty", source), fully_loaded(source)] {
            let assessment = scorer.assess(&lead);

            let temperatures = TEMPERATURE_TAGS
                .iter()
                .filter(|tag| assessment.tags.contains(**tag))
                .count();
            assert_eq!(temperatures, 1);
            assert_eq!(assessment.priority, priority_for_score(assessment.score));
        }
    }
}

#[test]
fn test_scoring_is_deterministic() {
    let scorer = LeadScorer::default();
    let lead = fully_loaded(LeadSource::MetaAds);

    assert_eq!(scorer.assess(&lead), scorer.assess(&lead));
}

#[test]
fn test_empty_direct_lead_is_low_priority() {
    let assessment = LeadScorer::default().assess(&Lead::new("Walk-in", LeadSource::Direct));

    assert_eq!(assessment.score, 15);
    assert_eq!(assessment.priority, Priority::Low);
    assert!(assessment.tags.contains("cold-lead"));
}
