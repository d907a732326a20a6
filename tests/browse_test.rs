//! End-to-end tests: shell, views, and fetchers over a mock API.

mod common;

use common::{collection, manifest, metadata, search_item, MockApi};
use nasaview::shell::{Route, Shell};
use nasaview::views::{Block, DetailState, ListState, Slot};
use nasaview_core::MediaType;

#[tokio::test]
async fn apollo_image_search_renders_only_image_bucket() {
    let api = MockApi::start().await;
    api.search(
        "apollo",
        "image",
        collection(vec![
            search_item("as11-40-5874", "Buzz Aldrin", "image"),
            search_item("as11-40-5903", "Aldrin salutes", "image"),
            search_item("as11-44-6642", "Earthrise", "image"),
        ]),
    )
    .await;

    let mut shell = Shell::new(api.client(), &api.config());
    shell.toggle_media_type(MediaType::Image);
    assert_eq!(shell.search("apollo").await, ListState::Loaded);

    let render = shell.list().render();
    assert_eq!(render.regions.len(), 1);
    assert_eq!(render.regions[0].media_type, MediaType::Image);
    assert_eq!(render.regions[0].slots.len(), 3);
    assert!(render.settled);

    let text = shell.render();
    assert!(text.contains("== Pictures =="));
    assert!(!text.contains("== Video =="));
    assert!(!text.contains("== Audio =="));
}

#[tokio::test]
async fn twelve_results_are_capped_at_eight() {
    let api = MockApi::start().await;
    let items = (0..12)
        .map(|i| search_item(&format!("id-{i:02}"), &format!("Frame {i}"), "image"))
        .collect();
    api.search("gemini", "", collection(items)).await;

    let mut shell = Shell::new(api.client(), &api.config());
    shell.search("gemini").await;

    let render = shell.list().render();
    let titles: Vec<_> = render.regions[0]
        .slots
        .iter()
        .map(|s| match s {
            Slot::Card(c) => c.title.clone(),
            Slot::Placeholder => panic!("placeholder after load"),
        })
        .collect();
    let expected: Vec<_> = (0..8).map(|i| format!("Frame {i}")).collect();
    assert_eq!(titles, expected);
}

#[tokio::test]
async fn failed_search_keeps_previous_results() {
    let api = MockApi::start().await;
    api.search("apollo", "", collection(vec![search_item("a", "A", "video")]))
        .await;

    let mut shell = Shell::new(api.client(), &api.config());
    shell.search("apollo").await;
    let before = shell.list().render().regions;

    api.fail("/search", 502).await;
    assert_eq!(shell.search("broken").await, ListState::Failed);
    assert_eq!(shell.list().render().regions, before);
}

#[tokio::test]
async fn opening_audio_asset_renders_player_without_bare_description() {
    let api = MockApi::start().await;
    api.search("voyager", "audio", collection(vec![search_item("x", "Golden Record", "audio")]))
        .await;
    api.metadata("x", metadata("x", "Golden Record", "d")).await;
    api.manifest("x", manifest(&["x.mp3"])).await;

    let mut shell = Shell::new(api.client(), &api.config());
    shell.toggle_media_type(MediaType::Audio);
    shell.search("voyager").await;
    assert!(shell.open(0).await);
    assert_eq!(shell.route(), &Route::Asset("x".into()));

    let view = shell.detail().unwrap();
    assert!(matches!(view.state(), DetailState::Ready(_)));
    let blocks = view.render();
    assert!(blocks.contains(&Block::Audio {
        url: "x.mp3".into(),
        mime: "audio/mpeg"
    }));
    assert!(!blocks.iter().any(|b| matches!(b, Block::Description(_))));

    shell.toggle_metadata();
    let text = shell.render();
    assert!(text.contains("Hide Metadata"));
    assert_eq!(text.matches("\n  d\n").count(), 1);
}

#[tokio::test]
async fn direct_route_to_missing_asset() {
    let api = MockApi::start().await;
    api.metadata("nothing", collection(vec![])).await;

    let mut shell = Shell::new(api.client(), &api.config());
    shell.navigate(Route::parse("/asset/nothing")).await;

    assert_eq!(shell.detail().unwrap().state(), &DetailState::NotFound);
    assert!(shell.render().contains("No asset found"));
}
