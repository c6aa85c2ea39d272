use yew::prelude::*;

use portal::data::{Qualification, Requirement};

#[derive(Properties, PartialEq)]
pub struct QualificationListProps {
    pub qualifications: Vec<Qualification>,
}

fn requirement_item(requirement: &Requirement) -> Html {
    let reference = &requirement.reference;
    html! {
        <li key={requirement.id.as_str().to_string()}>
            <span class="font-medium">{ &requirement.name }</span>
            <span class="text-gray-500 text-sm">
                { format!(" ({} vol. {}, para. {})", reference.name, reference.volume, reference.paragraph) }
            </span>
        </li>
    }
}

fn requirement_group(title: &str, requirements: &[Requirement]) -> Html {
    if requirements.is_empty() {
        return html! {};
    }
    html! {
        <div class="mt-2">
            <h4 class="text-sm font-semibold text-gray-600">{ title }</h4>
            <ul class="list-disc list-inside">
                { for requirements.iter().map(requirement_item) }
            </ul>
        </div>
    }
}

#[function_component(QualificationList)]
pub fn qualification_list(props: &QualificationListProps) -> Html {
    if props.qualifications.is_empty() {
        return html! { <p class="text-gray-500 italic">{ "No qualifications" }</p> };
    }

    html! {
        <div class="space-y-4">
            { for props.qualifications.iter().map(|qualification| {
                let expiry = if qualification.expires {
                    format!("Expires every {} days", qualification.expiration_days)
                } else {
                    "Does not expire".to_string()
                };
                html! {
                    <div key={qualification.id.as_str().to_string()} class="bg-white rounded-lg shadow p-4">
                        <div class="flex justify-between">
                            <h3 class="text-lg font-semibold">{ &qualification.name }</h3>
                            <span class="text-sm text-gray-500">{ expiry }</span>
                        </div>
                        if !qualification.notes.is_empty() {
                            <p class="text-gray-600">{ &qualification.notes }</p>
                        }
                        { requirement_group("Initial requirements", &qualification.initial_requirements) }
                        { requirement_group("Recurring requirements", &qualification.recurring_requirements) }
                    </div>
                }
            }) }
        </div>
    }
}
