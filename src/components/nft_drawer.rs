use chrono::DateTime;
use yew::prelude::*;

use crate::models::Nft;
use crate::utils::media_url;

#[derive(Properties, PartialEq)]
pub struct NftDrawerProps {
    pub nft: Option<Nft>,
    pub on_close: Callback<()>,
}

/// Bottom drawer with the full details of a selected gallery item.
#[function_component(NftDrawer)]
pub fn nft_drawer(props: &NftDrawerProps) -> Html {
    let Some(nft) = &props.nft else {
        return Html::default();
    };

    let attributes = nft.attribute_list();
    let created_on = format_created_at(&nft.created_at);
    let src = media_url(&nft.media.file_url);

    html! {
        <div class="drawer-backdrop" onclick={props.on_close.reform(|_| ())}>
            <div class="drawer" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class="drawer-close" onclick={props.on_close.reform(|_| ())}>
                    { "✕" }
                </button>

                <div class="drawer-content">
                    <div class="drawer-media">
                        { if nft.media.filetype.contains("image") {
                            html! { <img src={src} alt={nft.name.clone()} /> }
                        } else if nft.media.filetype.contains("video") {
                            html! {
                                <video controls=true>
                                    <source src={src} type={nft.media.filetype.clone()} />
                                </video>
                            }
                        } else {
                            html! { <p class="media-unsupported">{ "Unsupported Media Type" }</p> }
                        } }
                    </div>

                    <div class="drawer-details">
                        <h3>{ &nft.name }</h3>
                        <p>{ &nft.description }</p>

                        { if attributes.is_empty() {
                            Html::default()
                        } else {
                            html! {
                                <>
                                    <h4>{ "Attributes:" }</h4>
                                    <ul class="attribute-list">
                                        { for attributes.iter().map(|attribute| html! {
                                            <li>{ attribute }</li>
                                        }) }
                                    </ul>
                                </>
                            }
                        } }

                        <p class="drawer-date">{ format!("Created On: {}", created_on) }</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// "September 1, 2026, 3:04 PM", falling back to the raw value when the
/// server sends something that is not RFC 3339.
fn format_created_at(created_at: &str) -> String {
    match DateTime::parse_from_rfc3339(created_at) {
        Ok(date) => date.format("%B %-d, %Y, %-I:%M %p").to_string(),
        Err(_) => created_at.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_timestamps() {
        assert_eq!(
            format_created_at("2026-09-01T15:04:00+00:00"),
            "September 1, 2026, 3:04 PM"
        );
    }

    #[test]
    fn falls_back_to_raw_value() {
        assert_eq!(format_created_at("yesterday"), "yesterday");
    }
}
