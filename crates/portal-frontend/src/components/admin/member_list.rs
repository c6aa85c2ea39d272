use yew::prelude::*;

use portal::data::Member;
use portal::id::MemberId;
use portal::roster;

use crate::components::Search;

#[derive(Properties, PartialEq)]
pub struct MemberListProps {
    pub members: Vec<Member>,
    #[prop_or_default]
    pub selected: Option<MemberId>,
    pub on_select: Callback<MemberId>,
}

#[function_component(MemberList)]
pub fn member_list(props: &MemberListProps) -> Html {
    let term = use_state(String::new);

    let on_search = {
        let term = term.clone();
        Callback::from(move |value: String| term.set(value))
    };

    let found = roster::search(&props.members, &term);

    html! {
        <div class="bg-white rounded-lg shadow p-4 space-y-3">
            <Search value={(*term).clone()} on_change={on_search} placeholder="Search members..." />
            if found.is_empty() {
                <p class="text-gray-500 italic">{ "No members found" }</p>
            } else {
                <ul class="divide-y divide-gray-200">
                    { for found.into_iter().map(|member| {
                        let is_selected = props.selected.as_ref() == Some(&member.id);
                        let onclick = {
                            let on_select = props.on_select.clone();
                            let id = member.id.clone();
                            Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
                        };
                        html! {
                            <li
                                key={member.id.as_str().to_string()}
                                class={classes!(
                                    "px-2", "py-2", "cursor-pointer", "hover:bg-gray-50",
                                    is_selected.then_some("bg-blue-50")
                                )}
                                {onclick}
                            >
                                { roster::display_name(&member) }
                                if member.admin {
                                    <span class="ml-2 text-xs text-purple-700">{ "admin" }</span>
                                }
                            </li>
                        }
                    }) }
                </ul>
            }
        </div>
    }
}
