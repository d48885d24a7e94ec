use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::hooks::use_upload;
use crate::state::UploadAction;

#[derive(Properties, PartialEq)]
pub struct UploadFormProps {
    pub token: Option<String>,
    /// Navigate back to the gallery.
    pub on_back: Callback<()>,
}

/// Creation form: metadata fields plus one media file, submitted as a single
/// multipart request.
#[function_component(UploadForm)]
pub fn upload_form(props: &UploadFormProps) -> Html {
    let upload = use_upload(props.token.clone());
    let state = upload.state.clone();
    let file_input_ref = use_node_ref();

    // A successful submission clears the draft; the native file input keeps
    // its own value, so reset it to match.
    {
        let file_input_ref = file_input_ref.clone();
        use_effect_with(state.media.is_none(), move |cleared| {
            if *cleared {
                if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
            }
            || ()
        });
    }

    let on_name_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(UploadAction::SetName(input.value()));
        })
    };
    let on_description_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            state.dispatch(UploadAction::SetDescription(input.value()));
        })
    };
    let on_attributes_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(UploadAction::SetAttributes(input.value()));
        })
    };
    let on_file_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            state.dispatch(UploadAction::SetMedia(file));
        })
    };
    let on_clear_file = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(UploadAction::SetMedia(None)))
    };

    let on_submit = {
        let submit = upload.submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };

    let file_name = state
        .media
        .as_ref()
        .map(|file| file.name())
        .unwrap_or_else(|| "No file chosen".to_string());

    html! {
        <div class="upload-screen">
            <button class="btn-link" onclick={props.on_back.reform(|_| ())}>
                { "← Back to gallery" }
            </button>

            <h2>{ "Create Metadata and Upload Media" }</h2>

            <form class="upload-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="nft-name">{ "Name" }</label>
                    <input
                        type="text"
                        id="nft-name"
                        value={state.name.clone()}
                        oninput={on_name_input}
                    />
                </div>

                <div class="form-group">
                    <label for="nft-description">{ "Description" }</label>
                    <textarea
                        id="nft-description"
                        rows="4"
                        value={state.description.clone()}
                        oninput={on_description_input}
                    />
                </div>

                <div class="form-group">
                    <label for="nft-attributes">{ "Attributes (comma separated)" }</label>
                    <input
                        type="text"
                        id="nft-attributes"
                        value={state.attributes.clone()}
                        oninput={on_attributes_input}
                    />
                </div>

                <div class="form-group">
                    <label for="nft-media">{ "Upload Media (Image/Video)" }</label>
                    <input
                        ref={file_input_ref}
                        type="file"
                        id="nft-media"
                        accept="image/*,video/*"
                        onchange={on_file_change}
                    />
                    <p class="file-name">{ file_name }</p>
                    { if state.media.is_some() {
                        html! {
                            <button type="button" class="btn-link" onclick={on_clear_file}>
                                { "Clear file" }
                            </button>
                        }
                    } else {
                        Html::default()
                    } }
                </div>

                <button type="submit" class="btn-primary" disabled={state.is_uploading}>
                    { if state.is_uploading {
                        html! { <span class="spinner" /> }
                    } else {
                        html! { "Submit" }
                    } }
                </button>
            </form>
        </div>
    }
}
