//! End-to-end extraction tests: listing page in, catalog records out.

use std::path::PathBuf;
use std::sync::Arc;

use actor_catalog::testing::{ListingBuilder, ListingEntry, TestScenario};
use actor_catalog::{
    Catalog, ExtractionEngine, ExtractionError, FetchError, FileFetcher, ListQuery, MemoryStore,
    NewActor, ProviderConfig, ProviderRegistry, ProviderSource, RankPolicy,
};

const LISTING_URL: &str = "https://actors.example.com/top";

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

#[tokio::test]
async fn test_full_listing_is_ingested() {
    let scenario = TestScenario::new("example", LISTING_URL).with_listing(
        &ListingBuilder::new()
            .entry(
                ListingEntry::named("Tom Hanks")
                    .rank("12.")
                    .details("Two Oscars")
                    .actor_type("Actor | Producer"),
            )
            .entry(ListingEntry::named("Nobody Ranked").rank("abc"))
            .entry(ListingEntry::unnamed().rank("3."))
            .entry(ListingEntry::named("Meryl Streep").actor_type("Actress")),
    );

    let report = scenario.engine().extract_all("example").await.unwrap();

    assert_eq!(report.url, LISTING_URL);
    assert_eq!(report.candidates, 4);
    assert_eq!(report.discarded_unnamed, 1);
    assert_eq!(report.ingested_ids, vec![1, 2, 3]);
    assert_eq!(scenario.fetcher.fetch_calls(), vec![LISTING_URL.to_string()]);

    let hanks = scenario.catalog.get(1).await.unwrap();
    assert_eq!(hanks.name, "Tom Hanks");
    assert_eq!(hanks.rank, 12);
    assert_eq!(hanks.details.as_deref(), Some("Two Oscars"));
    assert_eq!(hanks.actor_type.as_deref(), Some("Actor"));

    let unranked = scenario.catalog.get(2).await.unwrap();
    assert_eq!(unranked.rank, 0);
    assert_eq!(unranked.details, None);

    let meryl = scenario.catalog.get(3).await.unwrap();
    assert_eq!(meryl.rank, 0);
    assert_eq!(meryl.actor_type.as_deref(), Some("Actress"));
}

#[tokio::test]
async fn test_unknown_provider_fetches_nothing() {
    let scenario = TestScenario::new("example", LISTING_URL)
        .with_listing(&ListingBuilder::new().ranked(3));

    let err = scenario.engine().extract_all("other").await.unwrap_err();

    assert!(matches!(err, ExtractionError::ProviderNotFound { .. }));
    assert_eq!(err.to_string(), "can't find the provider in configuration: other");
    assert_eq!(scenario.fetcher.fetch_call_count(), 0);
    assert!(scenario.catalog.is_empty().await.unwrap());
}

#[tokio::test]
async fn test_listing_without_matches_is_empty_success() {
    let scenario = TestScenario::new("example", LISTING_URL).with_listing(&ListingBuilder::new());

    let report = scenario.engine().extract_all("example").await.unwrap();

    assert_eq!(report.candidates, 0);
    assert_eq!(report.ingested(), 0);
    assert!(scenario.catalog.is_empty().await.unwrap());
}

#[tokio::test]
async fn test_fetch_failure_leaves_catalog_untouched() {
    let scenario = TestScenario::new("example", LISTING_URL);
    scenario.catalog.create(NewActor::new("Existing", 1)).await.unwrap();
    scenario.fetcher.add_failure(LISTING_URL, 500);

    let err = scenario.engine().extract_all("example").await.unwrap_err();

    assert!(matches!(
        err,
        ExtractionError::Fetch(FetchError::Status { status: 500, .. })
    ));
    assert_eq!(scenario.catalog.len().await.unwrap(), 1);
}

#[tokio::test]
async fn test_invalid_selector_fails_before_fetch() {
    let fetcher = actor_catalog::MockFetcher::new().with_document(LISTING_URL, "<html></html>");
    let engine = ExtractionEngine::new(
        fetcher.clone(),
        ProviderRegistry::new().with_provider(
            "broken",
            ProviderConfig::new(LISTING_URL, "div.actor", "h3").with_rank_selector("span[["),
        ),
        Arc::new(Catalog::new(MemoryStore::new())),
    );

    let err = engine.extract_all("broken").await.unwrap_err();

    assert!(matches!(
        err,
        ExtractionError::InvalidSelector { field: "rank", .. }
    ));
    assert_eq!(fetcher.fetch_call_count(), 0);
}

#[tokio::test]
async fn test_repeated_extraction_duplicates_by_default() {
    let scenario = TestScenario::new("example", LISTING_URL)
        .with_listing(&ListingBuilder::new().ranked(2));
    let engine = scenario.engine();

    engine.extract_all("example").await.unwrap();
    let second = engine.extract_all("example").await.unwrap();

    assert_eq!(second.ingested_ids, vec![3, 4]);
    let ranked_one = scenario
        .catalog
        .list(&ListQuery::new().min_rank(1).max_rank(1))
        .await
        .unwrap();
    assert_eq!(ranked_one.total_count, 2);
}

#[tokio::test]
async fn test_repeated_extraction_skips_conflicts_when_asked() {
    let scenario = TestScenario::new("example", LISTING_URL)
        .with_listing(&ListingBuilder::new().ranked(2).entry(ListingEntry::named("Unranked")));
    let engine = scenario.engine().with_rank_policy(RankPolicy::SkipConflicts);

    let first = engine.extract_all("example").await.unwrap();
    assert_eq!(first.ingested_ids, vec![1, 2]);
    assert_eq!(first.skipped_conflicts, 1);

    let second = engine.extract_all("example").await.unwrap();
    assert!(second.ingested_ids.is_empty());
    assert_eq!(second.skipped_conflicts, 3);
    assert_eq!(scenario.catalog.len().await.unwrap(), 2);
}

#[tokio::test]
async fn test_builtin_provider_against_saved_page() {
    let builtin = ProviderRegistry::builtin().unwrap();
    let mut imdb = builtin.resolve("IMDb").expect("imdb provider is built in");
    imdb.listing_url = "imdb_list.html".to_string();

    let catalog = Arc::new(Catalog::new(MemoryStore::new()));
    let engine = ExtractionEngine::new(
        FileFetcher::new().with_base_dir(fixtures_dir()),
        ProviderRegistry::new().with_provider("imdb", imdb),
        catalog.clone(),
    );

    let report = engine.extract_all("imdb").await.unwrap();
    assert_eq!(report.candidates, 4);
    assert_eq!(report.discarded_unnamed, 1);
    assert_eq!(report.ingested(), 3);

    let page = catalog.list(&ListQuery::new()).await.unwrap();
    let ranked: Vec<_> = page
        .items
        .iter()
        .map(|r| (r.name.as_str(), r.rank, r.actor_type.as_deref()))
        .collect();
    assert_eq!(
        ranked,
        vec![
            ("Tom Hanks", 1, Some("Actor")),
            ("Meryl Streep", 2, Some("Actress")),
            ("Leonardo DiCaprio", 4, Some("Producer")),
        ]
    );
    assert_eq!(
        page.items[0].details.as_deref(),
        Some("Thomas Jeffrey Hanks was born in Concord, California.")
    );
    assert_eq!(page.items[2].details, None);
}
