//! Lazy build, single flight, invalidation and rebuild.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;

use super::common::{fixture_catalog, fixture_engine, titles, ScriptedProvider};
use savor::{verify_index, EngineConfig, EngineState, SearchEngine};

fn slow_engine() -> SearchEngine<ScriptedProvider> {
    let provider = ScriptedProvider::new(fixture_catalog()).with_list_delay(Duration::from_millis(50));
    SearchEngine::new(provider, EngineConfig::default())
}

#[tokio::test]
async fn nothing_is_built_until_asked() {
    let engine = fixture_engine();

    assert_eq!(engine.state(), EngineState::Uninitialized);
    assert!(engine.snapshot().is_none());
    assert!(engine.last_report().is_none());
    assert!(engine.search_ready("cake", None).is_none());
}

#[tokio::test]
async fn first_search_builds_and_answers() {
    let engine = fixture_engine();

    let results = engine.search("cake", None).await.unwrap();
    assert_eq!(titles(&results), vec!["Chocolate Cake"]);
    assert_eq!(engine.state(), EngineState::Ready);

    let report = engine.last_report().unwrap();
    assert_eq!(report.restaurants, 2);
    assert_eq!(report.dishes, 2);
}

#[tokio::test]
async fn short_query_still_warms_the_index() {
    let engine = fixture_engine();

    assert!(engine.search("a", None).await.unwrap().is_empty());
    assert_eq!(engine.state(), EngineState::Ready);
}

#[tokio::test(start_paused = true)]
async fn concurrent_first_callers_share_one_build() {
    let engine = slow_engine();

    let searches = (0..8).map(|_| engine.search("ch", None));
    let all = join_all(searches).await;

    for results in all {
        assert_eq!(
            titles(&results.unwrap()),
            vec!["Chicken Biryani", "Chocolate Cake"]
        );
    }
    assert_eq!(engine.provider().list_calls(), 1);
    assert_eq!(engine.provider().menu_calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn reports_initializing_while_building() {
    let engine = Arc::new(slow_engine());

    let background = tokio::spawn({
        let engine = Arc::clone(&engine);
        async move { engine.ensure_ready().await.map(|index| index.len()) }
    });
    tokio::task::yield_now().await;

    assert_eq!(engine.state(), EngineState::Initializing);
    assert!(engine.search_ready("cake", None).is_none());

    assert_eq!(background.await.unwrap().unwrap(), 4);
    assert_eq!(engine.state(), EngineState::Ready);
}

#[tokio::test]
async fn repeated_ensure_ready_reuses_the_index() {
    let engine = slow_engine();

    let first = engine.ensure_ready().await.unwrap();
    let second = engine.ensure_ready().await.unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(engine.provider().list_calls(), 1);
}

#[tokio::test]
async fn invalidate_rebuilds_on_next_search() {
    let engine = slow_engine();
    engine.search("cake", None).await.unwrap();

    engine.invalidate();
    assert_eq!(engine.state(), EngineState::Uninitialized);
    assert!(engine.search_ready("cake", None).is_none());

    assert_eq!(engine.search("cake", None).await.unwrap().len(), 1);
    assert_eq!(engine.provider().list_calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn invalidate_during_build_discards_the_result() {
    let engine = Arc::new(slow_engine());

    let background = tokio::spawn({
        let engine = Arc::clone(&engine);
        async move { engine.ensure_ready().await.map(|index| index.len()) }
    });
    tokio::task::yield_now().await;
    engine.invalidate();

    // The caller still gets its index, but it is not published
    assert_eq!(background.await.unwrap().unwrap(), 4);
    assert_eq!(engine.state(), EngineState::Uninitialized);
    assert!(engine.last_report().is_none());
}

#[tokio::test]
async fn invalidated_rebuild_keeps_the_published_report() {
    let engine = Arc::new(slow_engine());
    engine.ensure_ready().await.unwrap();
    let published = engine.last_report().unwrap();

    let background = tokio::spawn({
        let engine = Arc::clone(&engine);
        async move { engine.rebuild().await.map(|index| index.len()) }
    });
    tokio::task::yield_now().await;
    engine.invalidate();

    assert_eq!(background.await.unwrap().unwrap(), 4);
    assert_eq!(engine.state(), EngineState::Uninitialized);
    assert_eq!(engine.last_report().unwrap(), published);
}

#[tokio::test]
async fn rebuild_swaps_without_disturbing_old_readers() {
    let engine = slow_engine();
    let old = engine.ensure_ready().await.unwrap();

    let new = engine.rebuild().await.unwrap();

    assert!(!Arc::ptr_eq(&old, &new));
    assert!(Arc::ptr_eq(&new, &engine.snapshot().unwrap()));
    assert_eq!(old.search("cake"), new.search("cake"));
    assert_eq!(engine.provider().list_calls(), 2);
}

#[tokio::test]
async fn rebuilding_never_duplicates_ids() {
    let engine = fixture_engine();
    let first = verify_index(&engine.ensure_ready().await.unwrap()).unwrap();
    let second = verify_index(&engine.rebuild().await.unwrap()).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn explicit_limit_overrides_the_configured_one() {
    let engine = SearchEngine::new(
        fixture_catalog(),
        EngineConfig::default().with_default_limit(1),
    );

    assert_eq!(engine.search("ch", None).await.unwrap().len(), 1);
    assert_eq!(engine.search("ch", Some(10)).await.unwrap().len(), 2);
    assert_eq!(engine.search_ready("ch", Some(0)).unwrap().len(), 0);
}
