//! Integration tests for the read-only catalog endpoints.

mod common;

use gatcha_api::services::{generated_images, rarities, styles, themes};

#[tokio::test]
async fn rarity_ladder_is_ordered_by_threshold() {
    let api = common::spawn_backend().await;

    let ladder = rarities::list(&api, None).await.unwrap();
    assert_eq!(ladder.len(), 4);
    assert!(ladder
        .windows(2)
        .all(|pair| pair[0].min_roll_threshold < pair[1].min_roll_threshold));
}

#[tokio::test]
async fn rarity_search_narrows_by_name() {
    let api = common::spawn_backend().await;

    let hits = rarities::list(&api, Some("legend")).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "LEGENDARY");
    assert_eq!(hits[0].ui_color_hex, "#ffc107");
}

#[tokio::test]
async fn styles_reference_their_rarity() {
    let api = common::spawn_backend().await;

    let all = styles::list(&api).await.unwrap();
    assert_eq!(all.len(), 4);

    let holo = styles::retrieve(&api, 4).await.unwrap();
    assert_eq!(holo.name, "Holographic");
    assert_eq!(holo.rarity, 4);
}

#[tokio::test]
async fn themes_carry_prompt_material() {
    let api = common::spawn_backend().await;

    let neon = themes::retrieve(&api, 1).await.unwrap();
    assert_eq!(neon.name, "Neon City");
    assert!(!neon.prompt_background.is_empty());
}

#[tokio::test]
async fn generated_images_search_spans_the_variant_relation() {
    let api = common::spawn_backend().await;

    let all = generated_images::list(&api, None).await.unwrap();
    assert_eq!(all.len(), 1);

    // The seeded image belongs to the "School Uniform" variant.
    let hits = generated_images::list(&api, Some("uniform")).await.unwrap();
    assert_eq!(hits.len(), 1);
    let misses = generated_images::list(&api, Some("festival")).await.unwrap();
    assert!(misses.is_empty());
}
