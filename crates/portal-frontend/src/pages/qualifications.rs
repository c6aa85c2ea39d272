use yew::prelude::*;

use portal::{async_callback, data::Qualification, id::MemberId, log::warn};

use crate::components::{FullPageSpinner, QualificationList};
use crate::hooks::use_login_required;
use crate::providers::{api, use_session};

#[function_component(QualificationsPage)]
pub fn qualifications_page() -> Html {
    let guard = use_login_required();
    let session = use_session();

    let Some(member) = session.context.identity.as_ref().filter(|_| guard.is_allowed()) else {
        return html! { <FullPageSpinner /> };
    };

    html! {
        <div class="p-8 max-w-4xl mx-auto">
            <h1 class="text-3xl font-bold text-gray-900 mb-6">{ "Qualifications" }</h1>
            <MemberQualifications member_id={member.id.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MemberQualificationsProps {
    member_id: MemberId,
}

/// Fresh copy of a member's qualifications, fetched on mount.
#[function_component(MemberQualifications)]
fn member_qualifications(props: &MemberQualificationsProps) -> Html {
    let api = use_memo((), |_| api::create());
    let qualifications = use_state(|| None::<Vec<Qualification>>);
    let loading = use_state(|| true);
    let error_msg = use_state(|| None::<String>);
    let member_id = props.member_id.clone();

    let load = async_callback!([api, qualifications, loading, error_msg, member_id] {
        loading.set(true);
        error_msg.set(None);

        match api.fetch_qualifications(&member_id).await {
            Ok(list) => qualifications.set(Some(list)),
            Err(err) => {
                warn!("Failed to load qualifications for {member_id}: {err}");
                error_msg.set(Some(format!("Failed to load qualifications: {err}")));
            }
        }
        loading.set(false);
    });

    {
        let load = load.clone();
        use_effect_with(props.member_id.clone(), move |_| load.emit(()));
    }

    if *loading {
        html! { <FullPageSpinner label="Loading qualifications..." /> }
    } else if let Some(error) = error_msg.as_ref() {
        let on_retry = load.reform(|_: MouseEvent| ());
        html! {
            <div class="bg-red-50 border border-red-200 rounded-lg p-6">
                <p class="text-red-700 mb-4">{ error }</p>
                <button
                    class="px-4 py-2 bg-red-600 text-white rounded-md hover:bg-red-700 focus:outline-none focus:ring-2 focus:ring-red-500"
                    onclick={on_retry}
                >
                    { "Retry" }
                </button>
            </div>
        }
    } else {
        html! { <QualificationList qualifications={(*qualifications).clone().unwrap_or_default()} /> }
    }
}
