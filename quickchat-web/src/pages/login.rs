use crate::api::AuthClient;
use crate::components::navbar::Navbar;
use crate::config::FrontendConfig;
use crate::pages::login_form::{Field, LoginFormState};
use crate::routes::MainRoute;
use crate::session::SessionStore;
use i18nrs::yew::use_translation;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[derive(yew::Properties, PartialEq)]
pub struct LoginPageProps {
    /// Session storage a successful login is written to.
    #[prop_or_default]
    pub store: SessionStore,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let (i18n, _) = use_translation();
    let form = use_state(LoginFormState::default);
    let auth_error = use_state(|| None::<&'static str>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let onsubmit = {
        let form_handle = form.clone();
        let error_handle = auth_error.clone();
        let loading_handle = loading.clone();
        let store = props.store.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *loading_handle {
                return;
            }
            let mut next = (*form_handle).clone();
            let request = next.begin_submit();
            form_handle.set(next);
            let Some(request) = request else {
                return;
            };
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let store = store.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                let client = AuthClient::shared();
                match client.login(&request).await {
                    Ok(response) => {
                        if let Err(err) = store.remember(&response) {
                            log(std::format!("Failed to persist session: {:?}", err).as_str());
                        }
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::Home);
                        }
                    }
                    Err(err) => {
                        log(std::format!("Login failed: {}", err).as_str());
                        error_ref.set(Some(err.message_key()));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let on_username_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                next.set_username(input.value());
                form.set(next);
            }
        })
    };

    let on_password_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                next.set_password(input.value());
                form.set(next);
            }
        })
    };

    let on_username_blur = {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*form).clone();
            next.blur_username();
            form.set(next);
        })
    };

    let on_password_blur = {
        let form = form.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*form).clone();
            next.blur_password();
            form.set(next);
        })
    };

    let signup_url = FrontendConfig::new().signup_url().to_string();
    let is_busy = *loading;

    html! {
        <>
            <Navbar />
            <div class="flex items-center justify-center mt-16">
                <div class="card w-full max-w-md shadow-lg bg-base-100">
                    <form class="card-body" onsubmit={onsubmit}>
                        <h1 class="card-title text-2xl justify-center">{ i18n.t("login.header") }</h1>
                        if let Some(key) = *auth_error {
                            <div class="alert alert-error">
                                <span>{ i18n.t(key) }</span>
                            </div>
                        }
                        <div class="form-control">
                            <input
                                id="username"
                                class="input input-bordered"
                                type="text"
                                placeholder={i18n.t("login.username")}
                                value={form.username().to_string()}
                                oninput={on_username_input}
                                onblur={on_username_blur}
                            />
                            if let Some(key) = form.visible_error(Field::Username) {
                                <span class="label-text-alt text-error">{ i18n.t(key) }</span>
                            }
                        </div>
                        <div class="form-control">
                            <input
                                id="password"
                                class="input input-bordered"
                                type="password"
                                placeholder={i18n.t("login.password")}
                                value={form.password().to_string()}
                                oninput={on_password_input}
                                onblur={on_password_blur}
                            />
                            if let Some(key) = form.visible_error(Field::Password) {
                                <span class="label-text-alt text-error">{ i18n.t(key) }</span>
                            }
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" type="submit" disabled={is_busy}>
                                { if is_busy { i18n.t("login.submitting") } else { i18n.t("login.submit") } }
                            </button>
                        </div>
                    </form>
                    <div class="card-footer text-center mb-4">
                        <span>{ i18n.t("login.signup.prompt") }{ " " }</span>
                        <a href={signup_url} class="link link-primary">
                            { i18n.t("login.signup.link") }
                        </a>
                    </div>
                </div>
            </div>
        </>
    }
}
