use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use portal::context::ContextAction;
use portal::guard::{GuardEvent, GuardState, ROOT_PATH};

use crate::components::FullPageSpinner;
use crate::providers::{api, use_session};
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct BootstrapperProps {
    pub children: Children,
}

/// Restores the persisted session once per page load, before any route renders.
///
/// Shows a spinner while the backend validates the stored identity, then
/// publishes the resulting context and issues at most one navigation.
#[function_component(Bootstrapper)]
pub fn bootstrapper(props: &BootstrapperProps) -> Html {
    let api = use_memo((), |_| api::create());
    let session = use_session();
    let navigator = use_navigator();
    let location = use_location();
    let phase = use_state(GuardState::default);

    {
        let phase = phase.clone();
        let path = location
            .map(|location| location.path().to_string())
            .unwrap_or_else(|| ROOT_PATH.to_string());

        use_effect_with((), move |_| {
            phase.set(GuardState::Init.next(GuardEvent::Check));

            spawn_local(async move {
                let outcome = api.session().bootstrap(&path).await;
                session.dispatch(ContextAction::Replace(outcome.context));

                if let (Some(destination), Some(navigator)) = (outcome.state.redirect(), navigator)
                {
                    navigator.replace(&Route::from(destination));
                }
                phase.set(outcome.state);
            });
        });
    }

    if phase.is_pending() {
        html! { <FullPageSpinner label="Checking session..." /> }
    } else {
        html! { <>{ props.children.clone() }</> }
    }
}
