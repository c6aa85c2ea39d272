use yew::prelude::*;
use yew_router::prelude::*;

use portal::guard::{self, GuardState};
use portal::log::info;

use crate::providers::use_session;
use crate::routes::Route;

/// Decide whether the current page may render for this visitor.
///
/// The redirect fires from an effect keyed on the decision, so re-rendering
/// with the same decision never navigates twice.
#[hook]
pub fn use_login_required() -> GuardState {
    let session = use_session();
    let navigator = use_navigator();
    let state = guard::login_required(&session.context);

    use_effect_with(state, move |state| {
        if let (Some(destination), Some(navigator)) = (state.redirect(), navigator) {
            info!("No identity, redirecting to {}", destination.path());
            navigator.replace(&Route::from(destination));
        }
    });

    state
}
