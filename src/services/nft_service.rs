use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::models::{CreateNftResponse, PaginatedNftResponse};
use crate::utils::BACKEND_URL;

/// Fetch one page of NFTs with pagination metadata.
pub async fn fetch_nfts(
    page: u32,
    limit: u32,
    token: Option<&str>,
) -> Result<PaginatedNftResponse, String> {
    let url = format!("{}/api/nft/nfts?page={}&limit={}", BACKEND_URL, page, limit);

    log::info!("📋 Fetching NFT page {} (limit {})", page, limit);

    let mut request = Request::get(&url);
    if let Some(token) = token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    let page_data = response
        .json::<PaginatedNftResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    log::info!(
        "✅ Page {}/{} loaded: {} items ({} total)",
        page_data.current_page,
        page_data.total_pages,
        page_data.nfts.len(),
        page_data.total_count
    );

    Ok(page_data)
}

/// Create an NFT from the upload draft. The metadata fields and the file go
/// out as one multipart body; the browser picks the boundary.
pub async fn create_nft(
    name: &str,
    description: &str,
    attributes: &str,
    media: &File,
    token: Option<&str>,
) -> Result<CreateNftResponse, String> {
    let url = format!("{}/api/nft/create", BACKEND_URL);

    let form_data = FormData::new().map_err(|_| "Failed to build form data".to_string())?;
    form_data
        .append_with_str("name", name)
        .map_err(|_| "Failed to build form data".to_string())?;
    form_data
        .append_with_str("description", description)
        .map_err(|_| "Failed to build form data".to_string())?;
    form_data
        .append_with_str("attributes", attributes)
        .map_err(|_| "Failed to build form data".to_string())?;
    form_data
        .append_with_blob_and_filename("media", media, &media.name())
        .map_err(|_| "Failed to attach media file".to_string())?;

    log::info!("📤 Uploading '{}' with file: {}", name, media.name());

    let mut request = Request::post(&url);
    if let Some(token) = token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }

    let response = request
        .body(form_data)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("HTTP error {}: {}", status, error_text));
    }

    let created = response
        .json::<CreateNftResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    log::info!("✅ NFT created: {}", created.nft.id);

    Ok(created)
}
