//! Request functions, one module per backend resource.
//!
//! Every function takes the shared [`ApiClient`](crate::ApiClient) by
//! reference and maps one backend operation. Collection paths keep the
//! backend's trailing slash; stripping it triggers a redirect that drops
//! POST bodies.

pub mod characters;
pub mod gamification;
pub mod generated_images;
pub mod rarities;
pub mod series;
pub mod styles;
pub mod themes;
pub mod ticktick;
pub mod variant_images;
pub mod variants;
