use yew::prelude::*;

use portal::data::Member;
use portal::id::MemberId;
use portal::roster;

#[derive(Properties, PartialEq)]
pub struct SubordinatePickerProps {
    pub supervisor: Member,
    pub members: Vec<Member>,
    pub on_assign: Callback<MemberId>,
    pub on_unassign: Callback<MemberId>,
}

fn member_row(member: &Member, label: &'static str, action: &Callback<MemberId>) -> Html {
    let onclick = {
        let action = action.clone();
        let id = member.id.clone();
        Callback::from(move |_: MouseEvent| action.emit(id.clone()))
    };

    html! {
        <li key={member.id.as_str().to_string()} class="flex justify-between items-center py-1">
            <span>{ roster::display_name(member) }</span>
            <button class="px-2 py-1 text-sm rounded bg-gray-200 hover:bg-gray-300 cursor-pointer" {onclick}>
                { label }
            </button>
        </li>
    }
}

/// Moves members in and out of the selected supervisor's chain.
#[function_component(SubordinatePicker)]
pub fn subordinate_picker(props: &SubordinatePickerProps) -> Html {
    let supervisor = &props.supervisor;
    let current = roster::subordinates_of(&props.members, &supervisor.id);
    let available = roster::available_for(&props.members, &supervisor.id);

    html! {
        <div class="bg-white rounded-lg shadow p-4 grid grid-cols-2 gap-4">
            <div>
                <h3 class="font-semibold mb-2">
                    { format!("Subordinates of {}", roster::display_name(supervisor)) }
                </h3>
                if current.is_empty() {
                    <p class="text-gray-500 italic">{ "None assigned" }</p>
                } else {
                    <ul>{ for current.iter().map(|m| member_row(m, "Remove", &props.on_unassign)) }</ul>
                }
            </div>
            <div>
                <h3 class="font-semibold mb-2">{ "Available" }</h3>
                if available.is_empty() {
                    <p class="text-gray-500 italic">{ "Everyone has a supervisor" }</p>
                } else {
                    <ul>{ for available.iter().map(|m| member_row(m, "Add", &props.on_assign)) }</ul>
                }
            </div>
        </div>
    }
}
