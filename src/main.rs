mod app;
mod components;
mod context;
mod hooks;
mod models;
mod services;
mod state;
mod utils;

use app::App;

const CRASH_FALLBACK_HTML: &str =
    "<div class=\"crash-fallback\">Something went wrong. Please try again later.</div>";

/// Replaces the whole page with a static message when a panic tears down the
/// component tree, so the user is not left staring at a blank screen.
fn render_crash_fallback() {
    if let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    {
        body.set_inner_html(CRASH_FALLBACK_HTML);
    }
}

fn main() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        render_crash_fallback();
    }));
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 NFT Media Gallery starting...");

    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crash_fallback_carries_static_message() {
        assert!(CRASH_FALLBACK_HTML.contains("Something went wrong. Please try again later."));
    }
}
