use super::*;
use crate::scoring::DEFAULT_UNIT_MISMATCH_PENALTY;

fn item(name: &str, price: f64, unit: Option<&str>) -> PriceListItem {
    PriceListItem {
        name: name.to_string(),
        price,
        unit: unit.map(str::to_string),
    }
}

fn construction_catalog() -> Vec<PriceListItem> {
    vec![
        item("Drywall Sheet 4x8", 35.0, Some("ea")),
        item("Outlet Installation", 45.0, Some("ea")),
        item("Interior Wall Paint", 42.5, Some("gal")),
        item("Exterior Wall Paint", 48.0, Some("gal")),
        item("Baseboard Trim", 3.25, Some("lf")),
        item("Tile Installation", 12.0, Some("sq ft")),
        item("Labor", 65.0, Some("hr")),
        item("Light Fixture Installation", 85.0, Some("ea")),
    ]
}

fn names(candidates: &[MatchCandidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.item.name.as_str()).collect()
}

#[test]
fn exact_match_is_first_with_maximum_score() {
    let catalog = construction_catalog();
    let hits = get_price_match_candidates(
        "Drywall Sheet 4x8",
        None,
        &catalog,
        &MatchOptions::default(),
    );

    assert!(!hits.is_empty());
    assert_eq!(hits[0].item, item("Drywall Sheet 4x8", 35.0, Some("ea")));
    assert_eq!(hits[0].score, 1.0);
}

#[test]
fn typo_still_matches_above_default_threshold() {
    let catalog = construction_catalog();
    let hits = get_price_match_candidates(
        "outlet instalation",
        None,
        &catalog,
        &MatchOptions::default(),
    );

    assert_eq!(hits[0].item.name, "Outlet Installation");
    assert!(hits[0].score >= MatchOptions::default().min_score);
}

#[test]
fn unit_mismatch_is_a_soft_penalty() {
    let catalog = vec![
        item("Outlet Installation", 45.0, Some("hr")),
        item("Outlet Installation", 40.0, Some("ea")),
    ];
    let hits = get_price_match_candidates(
        "Outlet Installation",
        Some("ea"),
        &catalog,
        &MatchOptions::default(),
    );

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].item.unit.as_deref(), Some("ea"));
    assert_eq!(hits[1].item.unit.as_deref(), Some("hr"));
    assert!(hits[0].score > hits[1].score);
    assert!((hits[1].score - DEFAULT_UNIT_MISMATCH_PENALTY).abs() < 1e-12);
}

#[test]
fn unrelated_query_with_strict_threshold_matches_nothing() {
    let catalog = construction_catalog();
    let hits = get_price_match_candidates(
        "xyz completely unrelated term",
        None,
        &catalog,
        &MatchOptions::new(3, 0.9),
    );
    assert!(hits.is_empty());
}

#[test]
fn empty_inputs_return_empty() {
    let catalog = construction_catalog();
    let options = MatchOptions::default();

    assert!(get_price_match_candidates("Drywall", None, &[], &options).is_empty());
    for blank in ["", "   ", "\t\n", " - , . "] {
        assert!(
            get_price_match_candidates(blank, Some("ea"), &catalog, &options).is_empty(),
            "blank name {blank:?}"
        );
    }
}

#[test]
fn zero_max_results_returns_empty() {
    let catalog = construction_catalog();
    let hits = get_price_match_candidates(
        "Drywall Sheet 4x8",
        None,
        &catalog,
        &MatchOptions::new(0, 0.0),
    );
    assert!(hits.is_empty());
}

#[test]
fn bounds_hold_for_every_threshold() {
    let catalog = construction_catalog();
    for max_results in [1usize, 2, 3, 5, 100] {
        for min_score in [0.0, 0.1, 0.3, 0.5, 0.75, 1.0] {
            let options = MatchOptions::new(max_results, min_score);
            for query in ["installation", "wall paint", "labour", "trim", "4x8"] {
                let hits = get_price_match_candidates(query, None, &catalog, &options);
                assert!(hits.len() <= max_results);
                assert!(hits.iter().all(|hit| hit.score >= min_score));
                assert!(hits.iter().all(|hit| (0.0..=1.0).contains(&hit.score)));
            }
        }
    }
}

#[test]
fn results_are_sorted_with_case_insensitive_tie_break() {
    let catalog = vec![
        item("paint", 1.0, None),
        item("Paint", 2.0, None),
        item("PAINT", 3.0, None),
        item("Paint Roller", 4.0, None),
    ];
    let hits = get_price_match_candidates("paint", None, &catalog, &MatchOptions::new(10, 0.0));

    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert_eq!(names(&hits), vec!["PAINT", "Paint", "paint", "Paint Roller"]);
}

#[test]
fn repeated_calls_are_identical() {
    let catalog = construction_catalog();
    let options = MatchOptions::new(5, 0.1);
    let first = get_price_match_candidates("wall paint interior", Some("gal"), &catalog, &options);
    for _ in 0..10 {
        let again =
            get_price_match_candidates("wall paint interior", Some("gal"), &catalog, &options);
        assert_eq!(first, again);
    }
}

#[test]
fn catalog_order_does_not_change_results() {
    let catalog = construction_catalog();
    let mut reversed = catalog.clone();
    reversed.reverse();
    let options = MatchOptions::new(8, 0.0);

    let forward = get_price_match_candidates("installation", None, &catalog, &options);
    let backward = get_price_match_candidates("installation", None, &reversed, &options);
    assert_eq!(forward, backward);
}

#[test]
fn price_list_is_not_mutated() {
    let catalog = construction_catalog();
    let snapshot = catalog.clone();
    let _ = get_price_match_candidates("paint", Some("gal"), &catalog, &MatchOptions::default());
    assert_eq!(catalog, snapshot);
}

#[test]
fn unit_aliases_avoid_the_penalty() {
    let catalog = vec![item("Tile Installation", 12.0, Some("sq ft"))];
    let hits = get_price_match_candidates(
        "tile installation",
        Some("SqFt"),
        &catalog,
        &MatchOptions::default(),
    );
    assert_eq!(hits[0].score, 1.0);
}

#[test]
fn diacritics_do_not_block_a_match() {
    let catalog = vec![item("Facade Repair", 300.0, None)];
    let hits =
        get_price_match_candidates("Façade répair", None, &catalog, &MatchOptions::default());
    assert_eq!(hits[0].score, 1.0);
}

#[test]
fn explain_attaches_breakdown_only_when_requested() {
    let catalog = construction_catalog();
    let plain = get_price_match_candidates(
        "outlet instalation",
        Some("hr"),
        &catalog,
        &MatchOptions::default(),
    );
    assert!(plain.iter().all(|hit| hit.breakdown.is_none()));

    let explained = get_price_match_candidates(
        "outlet instalation",
        Some("hr"),
        &catalog,
        &MatchOptions {
            explain: true,
            ..MatchOptions::default()
        },
    );
    let top = &explained[0];
    let breakdown = top.breakdown.expect("breakdown requested");
    assert!(breakdown.unit_penalty_applied);
    assert!((top.score - breakdown.lexical * DEFAULT_UNIT_MISMATCH_PENALTY).abs() < 1e-12);
}

#[test]
fn non_finite_min_score_uses_fallback() {
    let catalog = construction_catalog();
    let hits = get_price_match_candidates(
        "installation",
        None,
        &catalog,
        &MatchOptions::new(10, f64::NAN),
    );
    assert!(hits
        .iter()
        .all(|hit| hit.score >= crate::types::DEFAULT_MIN_SCORE));
}

#[test]
fn prepared_catalog_matches_direct_calls() {
    let matcher = PriceMatcher::default();
    let catalog = construction_catalog();
    let prepared = matcher.prepare(&catalog);
    assert_eq!(prepared.len(), catalog.len());

    let options = MatchOptions::new(4, 0.2);
    for query in [
        MatchQuery::new("drywall 4x8"),
        MatchQuery::new("paint").with_unit("gallons"),
        MatchQuery::new("light fixture instal").with_unit("each"),
        MatchQuery::new(""),
    ] {
        assert_eq!(
            prepared.candidates(&query, &options),
            matcher.candidates(&query, &catalog, &options),
            "query {query:?}"
        );
    }
}

#[test]
fn match_batch_answers_each_query_in_order() {
    let matcher = PriceMatcher::default();
    let catalog = construction_catalog();
    let queries = vec![
        MatchQuery::new("baseboard trim"),
        MatchQuery::new("   "),
        MatchQuery::new("labor").with_unit("hours"),
    ];

    let results = matcher.match_batch(&queries, &catalog, &MatchOptions::default());
    assert_eq!(results.len(), 3);
    assert_eq!(results[0][0].item.name, "Baseboard Trim");
    assert!(results[1].is_empty());
    assert_eq!(results[2][0].item.name, "Labor");
    assert_eq!(results[2][0].score, 1.0);

    let empty = matcher.match_batch(&queries, &[], &MatchOptions::default());
    assert_eq!(empty, vec![Vec::new(); 3]);
}

#[test]
fn custom_scoring_config_is_validated() {
    let err = PriceMatcher::new(ScoringConfig {
        unit_mismatch_penalty: -1.0,
        ..Default::default()
    })
    .expect_err("negative penalty rejected");
    assert!(err.to_string().contains("unit_mismatch_penalty"));

    let strict = PriceMatcher::new(ScoringConfig {
        unit_mismatch_penalty: 0.0,
        ..Default::default()
    })
    .expect("zero penalty is allowed");
    let catalog = vec![item("Labor", 65.0, Some("hr"))];
    let hits = strict.candidates(
        &MatchQuery::new("labor").with_unit("day"),
        &catalog,
        &MatchOptions::new(3, 0.0),
    );
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].score, 0.0);
}

#[test]
fn candidates_serialize_without_empty_fields() {
    let catalog = vec![item("Labor", 65.0, None)];
    let hits = get_price_match_candidates("labor", None, &catalog, &MatchOptions::default());
    let json = serde_json::to_value(&hits).expect("candidates serialize");
    assert_eq!(
        json,
        serde_json::json!([{ "item": { "name": "Labor", "price": 65.0 }, "score": 1.0 }])
    );
}

#[test]
fn options_deserialize_with_documented_fallbacks() {
    let options: MatchOptions = serde_json::from_str("{}").expect("empty options parse");
    assert_eq!(options, MatchOptions::default());
    assert_eq!(options.max_results, 3);
    assert_eq!(options.min_score, 0.5);

    assert!(MatchOptions::new(0, 0.5).validate().is_err());
    assert!(MatchOptions::new(3, 1.5).validate().is_err());
    assert!(MatchOptions::new(3, f64::INFINITY).validate().is_err());
    assert!(MatchOptions::default().validate().is_ok());
}
