use yew::prelude::*;

use portal::{async_callback, data::Member, id::MemberId, log::warn, roster};

use crate::components::FullPageSpinner;
use crate::components::admin::{MemberList, SubordinatePicker};
use crate::hooks::{use_admin_required, use_login_required};
use crate::providers::api;

/// Anonymous visitors go to login first; the backend admin check only runs
/// once the session is known.
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let guard = use_login_required();

    if guard.is_allowed() {
        html! { <AdminPanel /> }
    } else {
        html! { <FullPageSpinner /> }
    }
}

#[function_component(AdminPanel)]
fn admin_panel() -> Html {
    let guard = use_admin_required();

    if guard.is_allowed() {
        html! { <MemberAdministration /> }
    } else {
        html! { <FullPageSpinner label="Checking permissions..." /> }
    }
}

#[function_component(MemberAdministration)]
fn member_administration() -> Html {
    let api = use_memo((), |_| api::create());
    let members = use_state(Vec::<Member>::new);
    let selected = use_state(|| None::<MemberId>);
    let loading = use_state(|| true);
    let error_msg = use_state(|| None::<String>);

    let load = async_callback!([api, members, loading, error_msg] {
        loading.set(true);
        error_msg.set(None);

        match api.fetch_members().await {
            Ok(mut list) => {
                roster::sort_by_name(&mut list);
                members.set(list);
            }
            Err(err) => {
                warn!("Failed to load members: {err}");
                error_msg.set(Some(format!("Failed to load members: {err}")));
            }
        }
        loading.set(false);
    });

    {
        let load = load.clone();
        use_effect_with((), move |_| load.emit(()));
    }

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |id: MemberId| selected.set(Some(id)))
    };

    let on_assign = {
        let members = members.clone();
        let selected = selected.clone();
        Callback::from(move |id: MemberId| {
            let Some(supervisor) = selected.as_ref() else {
                return;
            };
            let mut updated = (*members).clone();
            if roster::assign(&mut updated, &id, supervisor) {
                members.set(updated);
            }
        })
    };

    let on_unassign = {
        let members = members.clone();
        Callback::from(move |id: MemberId| {
            let mut updated = (*members).clone();
            if roster::unassign(&mut updated, &id) {
                members.set(updated);
            }
        })
    };

    if *loading {
        return html! { <FullPageSpinner label="Loading members..." /> };
    }

    if let Some(error) = error_msg.as_ref() {
        let on_retry = load.reform(|_: MouseEvent| ());
        return html! {
            <div class="p-8 max-w-4xl mx-auto">
                <div class="bg-red-50 border border-red-200 rounded-lg p-6">
                    <p class="text-red-700 mb-4">{ error }</p>
                    <button
                        class="px-4 py-2 bg-red-600 text-white rounded-md hover:bg-red-700"
                        onclick={on_retry}
                    >
                        { "Retry" }
                    </button>
                </div>
            </div>
        };
    }

    let supervisor = selected
        .as_ref()
        .and_then(|id| members.iter().find(|m| &m.id == id))
        .cloned();

    html! {
        <div class="p-8 max-w-6xl mx-auto space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">{ "Member Administration" }</h1>
            <div class="grid grid-cols-2 gap-6">
                <MemberList members={(*members).clone()} selected={(*selected).clone()} {on_select} />
                if let Some(supervisor) = supervisor {
                    <SubordinatePicker
                        {supervisor}
                        members={(*members).clone()}
                        {on_assign}
                        {on_unassign}
                    />
                } else {
                    <p class="text-gray-500 italic">{ "Select a member to manage their subordinates" }</p>
                }
            </div>
        </div>
    }
}
