//! `/variant-images/` endpoints.
//!
//! The upload is the one multipart POST in the client: a `variant` text
//! field naming the owner plus an `image` file field, mirroring what a
//! browser form submission would send.

use gatcha_core::DbId;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::models::VariantReferenceImage;

/// POST /variant-images/ (multipart)
pub async fn upload(
    api: &ApiClient,
    variant: DbId,
    file_name: String,
    bytes: Vec<u8>,
) -> ApiResult<VariantReferenceImage> {
    let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
    let form = reqwest::multipart::Form::new()
        .text("variant", variant.to_string())
        .part("image", part);

    let image: VariantReferenceImage = api.post_multipart("/variant-images/", form).await?;
    tracing::info!(
        image_id = image.id,
        variant_id = image.variant,
        "Variant image uploaded"
    );
    Ok(image)
}

/// DELETE /variant-images/{id}/
pub async fn delete(api: &ApiClient, id: DbId) -> ApiResult<()> {
    api.delete_no_content(&format!("/variant-images/{id}/"))
        .await?;
    tracing::info!(image_id = id, "Variant image deleted");
    Ok(())
}
