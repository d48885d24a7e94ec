use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::context::toast::use_toasts;
use crate::services::nft_service;
use crate::state::{UploadAction, UploadState};

#[derive(Clone, PartialEq)]
pub struct UseUploadHandle {
    pub state: UseReducerHandle<UploadState>,
    pub submit: Callback<()>,
}

/// Upload submitter. The completeness check is a UI-level gate only; a failed
/// submission leaves the draft intact so nothing has to be re-entered.
#[hook]
pub fn use_upload(token: Option<String>) -> UseUploadHandle {
    let state = use_reducer(UploadState::default);
    let toasts = use_toasts();

    let submit = {
        let state = state.clone();
        let toasts = toasts.clone();

        Callback::from(move |_| {
            if !state.is_complete() {
                toasts.info("Please fill in all fields and upload a media file.");
                return;
            }
            let Some(media) = state.media.clone() else {
                return;
            };

            let name = state.name.clone();
            let description = state.description.clone();
            let attributes = state.attributes.clone();
            let token = token.clone();
            state.dispatch(UploadAction::UploadStarted);

            let state = state.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                let result = nft_service::create_nft(
                    &name,
                    &description,
                    &attributes,
                    &media,
                    token.as_deref(),
                )
                .await;

                match result {
                    Ok(response) => {
                        state.dispatch(UploadAction::UploadSucceeded);
                        toasts.success(response.message);
                    }
                    Err(e) => {
                        log::error!("❌ Upload failed: {}", e);
                        state.dispatch(UploadAction::UploadFailed);
                        toasts.error("Failed to upload the metadata and media.");
                    }
                }
            });
        })
    };

    UseUploadHandle { state, submit }
}
