use crate::routes::MainRoute;
use crate::session::SessionStore;
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    /// Session storage consulted for the redirect guard.
    #[prop_or_default]
    pub store: SessionStore,
}

/// Home page component
///
/// Visitors without a persisted session token are redirected to the
/// login route. The check runs once, at render time.
#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let (i18n, _) = use_translation();

    if props.store.token().is_none() {
        return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
    }

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("home.header") }</h1>
            if let Some(username) = props.store.username() {
                <p>{ i18n.t("home.greeting") }{ " " }{ username }</p>
            }
        </div>
    }
}
