use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

/// `ErrorPage` page component
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    let (i18n, _) = use_translation();

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("error.header") }</h1>
            <p>{ i18n.t("error.body") }</p>
        </div>
    }
}
