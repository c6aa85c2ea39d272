use yew::prelude::*;
use yew_router::prelude::*;

use portal::async_callback;
use portal::context::ContextAction;

use crate::providers::{api, use_session};
use crate::routes::Route;

const LINK_CLASS: &str = "px-4 py-2 rounded hover:bg-blue-700 text-white";

#[function_component(Nav)]
pub fn nav() -> Html {
    let api = use_memo((), |_| api::create());
    let session = use_session();
    let navigator = use_navigator();

    let on_logout = async_callback!([api, session, navigator] {
        session.dispatch(ContextAction::Replace(api.session().logout()));
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Login);
        }
        api.session().notify_logout().await;
    });

    let items = if session.context.is_authenticated() {
        html! {
            <>
                <Link<Route> to={Route::Dashboard} classes={LINK_CLASS}>{ "Dashboard" }</Link<Route>>
                <Link<Route> to={Route::Qualifications} classes={LINK_CLASS}>{ "Qualifications" }</Link<Route>>
                {
                    // Only a hint; the admin page runs its own backend check
                    if session.context.claims_admin() {
                        html! { <Link<Route> to={Route::Admin} classes={LINK_CLASS}>{ "Admin" }</Link<Route>> }
                    } else {
                        html! {}
                    }
                }
                <button class={classes!(LINK_CLASS, "ml-auto", "cursor-pointer")} onclick={on_logout}>
                    { "Logout" }
                </button>
            </>
        }
    } else {
        html! { <Link<Route> to={Route::Login} classes={LINK_CLASS}>{ "Login" }</Link<Route>> }
    };

    html! {
        <nav class="flex items-center space-x-2 p-2 bg-blue-600">
            { items }
        </nav>
    }
}
