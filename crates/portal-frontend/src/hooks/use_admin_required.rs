use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use portal::guard::{GuardEvent, GuardState};
use portal::log::debug;

use crate::browser::MountFlag;
use crate::providers::api;
use crate::routes::Route;

/// Ask the backend once per mount whether this session may see admin pages.
/// Stays pending (render a spinner) until the answer or the timeout arrives.
/// An answer that lands after unmount is dropped without navigating.
#[hook]
pub fn use_admin_required() -> GuardState {
    let api = use_memo((), |_| api::create());
    let state = use_state(GuardState::default);
    let navigator = use_navigator();

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            state.set(GuardState::Init.next(GuardEvent::Check));

            let mounted = MountFlag::new();
            let task_mounted = mounted.clone();
            spawn_local(async move {
                let decision = api.session().check_admin().await;
                if !task_mounted.is_mounted() {
                    debug!("Admin check finished after leaving the page, ignoring");
                    return;
                }
                if let (Some(destination), Some(navigator)) = (decision.redirect(), navigator) {
                    navigator.replace(&Route::from(destination));
                }
                state.set(decision);
            });

            move || mounted.unmount()
        });
    }

    *state
}
