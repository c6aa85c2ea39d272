use yew::prelude::*;

use portal::data::Member;
use portal::roster;

#[derive(Properties, PartialEq)]
pub struct ProfileCardProps {
    pub member: Member,
    #[prop_or_default]
    pub subordinates: Vec<Member>,
}

#[function_component(ProfileCard)]
pub fn profile_card(props: &ProfileCardProps) -> Html {
    let member = &props.member;

    html! {
        <div class="bg-white rounded-lg shadow p-6">
            <h2 class="text-2xl font-bold text-gray-900">{ roster::display_name(member) }</h2>
            <p class="text-gray-500">{ format!("@{}", member.username) }</p>
            if member.admin {
                <span class="inline-block mt-2 px-2 py-1 text-xs rounded bg-purple-100 text-purple-800">
                    { "Administrator" }
                </span>
            }
            <h3 class="mt-4 font-semibold text-gray-700">{ "Subordinates" }</h3>
            if props.subordinates.is_empty() {
                <p class="text-gray-500 italic">{ "No subordinates" }</p>
            } else {
                <ul class="list-disc list-inside">
                    { for props.subordinates.iter().map(|sub| html! {
                        <li key={sub.id.as_str().to_string()}>{ roster::display_name(sub) }</li>
                    }) }
                </ul>
            }
        </div>
    }
}
