//! Tests for merging and ranking destination metrics

use destination_ranker::{DestinationMetric, ProductId, aggregate_and_rank};
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashMap;

use crate::utils::products;

fn metric(code: Option<&str>, views: u64, products: &[ProductId]) -> DestinationMetric {
    DestinationMetric::new(code.map(str::to_string), views, products.to_vec())
}

#[test]
fn test_sums_equal_input_totals() {
    let mut rng = rand::rng();
    let requested = products(&["lt", "ils", "aya"]);
    let codes = ["SAD-GB", "EAS-GB", "PAR-FR", "NYC-US", "MIA-US"];

    let mut metrics: Vec<DestinationMetric> = (0..200)
        .map(|_| {
            let code = codes[rng.random_range(0..codes.len())];
            metric(Some(code), rng.random_range(2..5_000), &requested)
        })
        .collect();
    metrics.shuffle(&mut rng);

    let mut expected: FxHashMap<String, u64> = FxHashMap::default();
    for m in &metrics {
        *expected
            .entry(m.destination_code.clone().unwrap())
            .or_default() += m.page_views;
    }

    let ranked = aggregate_and_rank(metrics, requested.len());

    assert_eq!(ranked.len(), expected.len());
    for m in &ranked {
        assert_eq!(Some(&m.page_views), expected.get(m.destination_code.as_ref().unwrap()));
    }
    assert!(ranked.windows(2).all(|w| w[0].page_views >= w[1].page_views));
}

#[test]
fn test_ties_keep_first_seen_order() {
    let requested = products(&["lt", "ils"]);
    let ranked = aggregate_and_rank(
        vec![
            metric(Some("BBB-GB"), 5, &requested),
            metric(Some("AAA-GB"), 9, &requested),
            metric(Some("CCC-GB"), 3, &requested),
            metric(Some("CCC-GB"), 2, &requested),
            metric(Some("DDD-FR"), 9, &requested),
        ],
        requested.len(),
    );

    let order: Vec<_> = ranked
        .iter()
        .map(|m| (m.destination_code.as_deref().unwrap(), m.page_views))
        .collect();
    assert_eq!(
        order,
        [("AAA-GB", 9), ("DDD-FR", 9), ("BBB-GB", 5), ("CCC-GB", 5)]
    );
}

#[test]
fn test_representative_fields_from_first_seen() {
    let first = products(&["lt", "ils"]);
    let later = products(&["aya"]);
    let ranked = aggregate_and_rank(
        vec![metric(Some("SAD-GB"), 1, &first), metric(Some("SAD-GB"), 4, &later)],
        2,
    );

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].products, first);
    assert_eq!(ranked[0].city_code.as_deref(), Some("SAD"));
    assert_eq!(ranked[0].page_views, 5);
}

#[test]
fn test_single_product_is_filtered_only() {
    let requested = products(&["lt"]);
    let input = vec![
        metric(Some("PAR-FR"), 3, &requested),
        metric(None, 999, &requested),
        metric(Some("SAD-GB"), 8, &requested),
        metric(Some("PAR-FR"), 6, &requested),
    ];
    let expected: Vec<DestinationMetric> = input.iter().filter(|m| m.is_resolved()).cloned().collect();

    let ranked = aggregate_and_rank(input, 1);

    assert_eq!(ranked, expected);
}

#[test]
fn test_unresolved_rows_never_appear() {
    let requested = products(&["lt", "ils"]);
    let ranked = aggregate_and_rank(
        vec![
            metric(None, 1_000_000, &requested),
            metric(Some("SAD-GB"), 1, &requested),
        ],
        2,
    );

    assert_eq!(ranked.len(), 1);
    assert!(ranked.iter().all(DestinationMetric::is_resolved));
}
