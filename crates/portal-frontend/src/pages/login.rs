use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use portal::{async_callback, context::ContextAction, data::Credentials};

use crate::providers::{api, use_session};
use crate::routes::Route;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let api = use_memo((), |_| api::create());
    let session = use_session();
    let navigator = use_navigator();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let waiting = use_state(|| false);
    let error_msg = use_state(|| None::<String>);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let submit = async_callback!([api, session, navigator, username, password, waiting, error_msg] {
        waiting.set(true);
        error_msg.set(None);

        let credentials = Credentials {
            username: (*username).clone(),
            password: (*password).clone(),
        };

        match api.session().login(&credentials).await {
            Ok(context) => {
                session.dispatch(ContextAction::Replace(context));
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Dashboard);
                }
            }
            Err(err) => error_msg.set(Some(err.to_string())),
        }
        waiting.set(false);
    });

    let on_submit = {
        let waiting = waiting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !*waiting {
                submit.emit(());
            }
        })
    };

    html! {
        <div class="min-h-full flex items-center justify-center p-8">
            <form class="w-full max-w-sm bg-white rounded-lg shadow p-6 space-y-4" onsubmit={on_submit}>
                <h1 class="text-2xl font-bold text-gray-900">{ "Sign in" }</h1>

                if let Some(error) = error_msg.as_ref() {
                    <div class="bg-red-50 border border-red-200 rounded-md p-3 text-red-700">{ error }</div>
                }

                <div>
                    <label for="username" class="block text-sm font-medium text-gray-700 mb-1">{ "Username" }</label>
                    <input
                        id="username"
                        type="text"
                        autocomplete="username"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        value={(*username).clone()}
                        oninput={on_username}
                        disabled={*waiting}
                    />
                </div>
                <div>
                    <label for="password" class="block text-sm font-medium text-gray-700 mb-1">{ "Password" }</label>
                    <input
                        id="password"
                        type="password"
                        autocomplete="current-password"
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        value={(*password).clone()}
                        oninput={on_password}
                        disabled={*waiting}
                    />
                </div>

                <button
                    type="submit"
                    class="w-full px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed cursor-pointer"
                    disabled={*waiting}
                >
                    { if *waiting { "Signing in..." } else { "Sign in" } }
                </button>
            </form>
        </div>
    }
}
