use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::nft_service;
use crate::state::{GalleryState, RequestStatus};

/// Fetches one gallery page whenever `page`, `limit` or the token changes.
///
/// Requests are not cancelled; instead each carries a sequence number and a
/// response is dropped when a newer request has been issued since. The last
/// request issued wins, not the last one to resolve.
#[hook]
pub fn use_nfts(
    page: u32,
    limit: u32,
    token: Option<String>,
) -> UseStateHandle<RequestStatus<GalleryState>> {
    let status = use_state(|| RequestStatus::Idle);
    let request_seq = use_mut_ref(|| 0u64);

    {
        let status = status.clone();
        use_effect_with((page, limit, token), move |(page, limit, token)| {
            let seq = {
                let mut current = request_seq.borrow_mut();
                *current += 1;
                *current
            };

            let page = *page;
            let limit = *limit;
            let token = token.clone();
            status.set(RequestStatus::Pending);

            spawn_local(async move {
                let result = nft_service::fetch_nfts(page, limit, token.as_deref()).await;

                if *request_seq.borrow() != seq {
                    log::info!("⏭️ Dropping stale response for page {}", page);
                    return;
                }

                match result {
                    Ok(response) => status.set(RequestStatus::Success(GalleryState::from(response))),
                    Err(e) => {
                        log::error!("❌ Failed to fetch page {}: {}", page, e);
                        status.set(RequestStatus::Failure(e));
                    }
                }
            });

            || ()
        });
    }

    status
}
