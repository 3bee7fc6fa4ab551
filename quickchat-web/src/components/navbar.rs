use crate::components::language_selector::LanguageSelector;
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

/// Top navigation bar with the brand link.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <nav class="navbar justify-between bg-base-300 shadow-sm">
            <a href="/" class="btn btn-ghost text-lg">{ i18n.t("app.brand") }</a>
            <LanguageSelector />
        </nav>
    }
}
