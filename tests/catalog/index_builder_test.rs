//! Tests for building the slug index from per-product catalogs

use crate::utils::{FakeCatalog, market, products, record};
use destination_ranker::{RankerError, SlugKey, build_catalog_index};

fn catalog() -> FakeCatalog {
    FakeCatalog::new()
        .with_product(
            "lt",
            vec![
                record("St Andrews", "SAD-GB", "de/lt/destinations/united-kingdom/st-andrews"),
                record("Eastbourne", "EAS-GB", "de/lt/destinations/united-kingdom/eastbourne/"),
            ],
        )
        .with_product(
            "upa",
            vec![record("Eastbourne", "EBN-GB", "de/upa/destinations/united-kingdom/eastbourne/")],
        )
}

#[tokio::test]
async fn test_index_keys_ignore_trailing_slash() -> destination_ranker::Result<()> {
    let index = build_catalog_index(&catalog(), &products(&["lt"]), &market("de")).await?;

    assert_eq!(index.len(), 2);
    assert_eq!(
        index.code_for(&SlugKey::new("united-kingdom", "st-andrews")),
        Some("SAD-GB")
    );
    assert_eq!(
        index.code_for(&SlugKey::new("united-kingdom", "eastbourne")),
        Some("EAS-GB")
    );
    Ok(())
}

#[tokio::test]
async fn test_later_product_wins_shared_slug() -> destination_ranker::Result<()> {
    let source = catalog();
    let index = build_catalog_index(&source, &products(&["lt", "upa"]), &market("de")).await?;

    assert_eq!(index.len(), 2);
    let eastbourne = index
        .get(&SlugKey::new("united-kingdom", "eastbourne"))
        .expect("eastbourne indexed");
    assert_eq!(eastbourne.code, "EBN-GB");
    assert_eq!(source.fetched(), ["lt", "upa"]);
    Ok(())
}

#[tokio::test]
async fn test_build_is_idempotent() -> destination_ranker::Result<()> {
    let source = catalog();
    let requested = products(&["upa", "lt"]);

    let first = build_catalog_index(&source, &requested, &market("de")).await?;
    let second = build_catalog_index(&source, &requested, &market("de")).await?;

    assert_eq!(first, second);
    // Reversed order: lt is fetched last and its Eastbourne entry survives
    assert_eq!(
        first.code_for(&SlugKey::new("united-kingdom", "eastbourne")),
        Some("EAS-GB")
    );
    Ok(())
}

#[tokio::test]
async fn test_product_without_destinations_is_empty() -> destination_ranker::Result<()> {
    let index = build_catalog_index(&catalog(), &products(&["aya"]), &market("de")).await?;
    assert!(index.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_failed_fetch_aborts_build() {
    let source = catalog().failing_on("ils");

    let err = build_catalog_index(&source, &products(&["lt", "ils", "upa"]), &market("de"))
        .await
        .unwrap_err();

    assert!(err.is_catalog_failure());
    match err {
        RankerError::CatalogFetch { market, product, .. } => {
            assert_eq!(market, "de");
            assert_eq!(product, "ils");
        }
        other => panic!("unexpected error: {other}"),
    }
    // Fetching stops at the failure
    assert_eq!(source.fetched(), ["lt", "ils"]);
}
