use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub dark_mode: bool,
    pub on_toggle_theme: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let theme_label = if props.dark_mode { "☀️ Light" } else { "🌙 Dark" };

    html! {
        <header class="app-header">
            <h1 class="app-title">{ "Media and Metadata Dashboard" }</h1>
            <div class="header-actions">
                <button class="btn-header" onclick={props.on_toggle_theme.reform(|_| ())}>
                    { theme_label }
                </button>
                <button class="btn-header" onclick={props.on_logout.reform(|_| ())}>
                    { "Logout" }
                </button>
            </div>
        </header>
    }
}
