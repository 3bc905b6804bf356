//! Cached accessors for the read-only catalog resources.

use gatcha_api::models::{GeneratedImage, Rarity, Style, Theme};
use gatcha_api::services::{generated_images, rarities, styles, themes};

use crate::client::QueryClient;
use crate::key::QueryKey;
use crate::state::QueryState;

pub fn rarities_key() -> QueryKey {
    QueryKey::new("rarities")
}

pub fn styles_key() -> QueryKey {
    QueryKey::new("styles")
}

pub fn themes_key() -> QueryKey {
    QueryKey::new("themes")
}

pub fn generated_images_key(search: Option<&str>) -> QueryKey {
    match search {
        Some(term) => QueryKey::new("generated-images").with_params([("search", term)]),
        None => QueryKey::new("generated-images"),
    }
}

pub async fn rarity_list(client: &QueryClient, search: Option<&str>) -> QueryState<Vec<Rarity>> {
    let key = match search {
        Some(term) => rarities_key().with_params([("search", term)]),
        None => rarities_key(),
    };
    client
        .fetch(key, |api| async move { rarities::list(&api, search).await })
        .await
}

pub async fn style_list(client: &QueryClient) -> QueryState<Vec<Style>> {
    client
        .fetch(styles_key(), |api| async move { styles::list(&api).await })
        .await
}

pub async fn theme_list(client: &QueryClient) -> QueryState<Vec<Theme>> {
    client
        .fetch(themes_key(), |api| async move { themes::list(&api).await })
        .await
}

pub async fn generated_image_list(
    client: &QueryClient,
    search: Option<&str>,
) -> QueryState<Vec<GeneratedImage>> {
    client
        .fetch(generated_images_key(search), |api| async move {
            generated_images::list(&api, search).await
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn searches_cache_separately_per_term() {
        assert_ne!(generated_images_key(None), generated_images_key(Some("a")));
        assert_ne!(
            generated_images_key(Some("a")),
            generated_images_key(Some("b"))
        );
        assert!(generated_images_key(Some("a")).starts_with(&generated_images_key(None)));
    }
}
