use yew::prelude::*;

use crate::components::{Header, NftDrawer};
use crate::hooks::use_nfts;
use crate::models::Nft;
use crate::utils::{media_url, PAGE_SIZE};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub token: Option<String>,
    pub dark_mode: bool,
    pub on_toggle_theme: Callback<()>,
    pub on_logout: Callback<()>,
    /// Navigate to the upload view.
    pub on_create: Callback<()>,
}

/// Gallery view: paginated grid of media cards with a detail drawer.
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let page = use_state(|| 1u32);
    let selected = use_state(|| None::<Nft>);
    let status = use_nfts(*page, PAGE_SIZE, props.token.clone());

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |nft: Nft| selected.set(Some(nft)))
    };
    let on_close_drawer = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    let body = if let Some(gallery) = status.success() {
        let pagination = pagination_controls(gallery.current_page, gallery.total_pages, &page);
        html! {
            <>
                <div class="nft-grid">
                    { for gallery.nfts.iter().map(|nft| nft_card(nft, &on_select)) }
                </div>
                { pagination }
            </>
        }
    } else if let Some(message) = status.failure() {
        html! { <div class="alert alert-error">{ message }</div> }
    } else {
        // Idle or pending: the page is on its way.
        html! {
            <div class="gallery-loading">
                <span class="spinner" />
            </div>
        }
    };

    html! {
        <div class="home-screen">
            <Header
                dark_mode={props.dark_mode}
                on_toggle_theme={props.on_toggle_theme.clone()}
                on_logout={props.on_logout.clone()}
            />

            <main class="gallery-main">
                <h2 class="gallery-title">{ "NFT Media Gallery" }</h2>
                { body }
            </main>

            <button class="fab" onclick={props.on_create.reform(|_| ())}>{ "+" }</button>

            <NftDrawer nft={(*selected).clone()} on_close={on_close_drawer} />
        </div>
    }
}

fn nft_card(nft: &Nft, on_select: &Callback<Nft>) -> Html {
    let onclick = {
        let nft = nft.clone();
        let on_select = on_select.clone();
        Callback::from(move |_| on_select.emit(nft.clone()))
    };

    html! {
        <div key={nft.id.clone()} class="nft-card" {onclick}>
            <div class="nft-card-media">
                { media_preview(nft) }
            </div>
            <div class="nft-card-info">
                <h3>{ &nft.name }</h3>
                <p>{ &nft.description }</p>
            </div>
        </div>
    }
}

fn media_preview(nft: &Nft) -> Html {
    let src = media_url(&nft.media.file_url);
    if nft.media.filetype.contains("image") {
        html! { <img src={src} alt={nft.name.clone()} /> }
    } else if nft.media.filetype.contains("video") {
        html! {
            <video controls=true>
                <source src={src} type={nft.media.filetype.clone()} />
            </video>
        }
    } else {
        html! { <p class="media-unsupported">{ "Unsupported Media Type" }</p> }
    }
}

fn pagination_controls(current: u32, total: u32, page: &UseStateHandle<u32>) -> Html {
    html! {
        <div class="pagination">
            { for (1..=total.max(1)).map(|number| {
                let page = page.clone();
                let onclick = Callback::from(move |_| page.set(number));
                let class = if number == current { "page-btn active" } else { "page-btn" };
                html! {
                    <button key={number.to_string()} {class} {onclick}>
                        { number }
                    </button>
                }
            }) }
        </div>
    }
}
