use yew::prelude::*;

use crate::components::{FullPageSpinner, ProfileCard, QualificationList};
use crate::hooks::use_login_required;
use crate::providers::use_session;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let guard = use_login_required();
    let session = use_session();

    let Some(member) = session.context.identity.clone().filter(|_| guard.is_allowed()) else {
        return html! { <FullPageSpinner /> };
    };

    html! {
        <div class="p-8 max-w-4xl mx-auto space-y-6">
            <h1 class="text-3xl font-bold text-gray-900">{ "Dashboard" }</h1>
            <ProfileCard member={member} subordinates={session.context.subordinates.clone()} />
            <div>
                <h2 class="text-xl font-semibold text-gray-800 mb-3">{ "My Qualifications" }</h2>
                <QualificationList qualifications={session.context.qualifications.clone()} />
            </div>
        </div>
    }
}
