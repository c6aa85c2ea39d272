use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FullPageSpinnerProps {
    #[prop_or_else(|| AttrValue::from("Loading..."))]
    pub label: AttrValue,
}

#[function_component(FullPageSpinner)]
pub fn full_page_spinner(props: &FullPageSpinnerProps) -> Html {
    html! {
        <div class="w-full h-full flex items-center justify-center py-12">
            <div class="flex items-center space-x-2">
                <svg class="animate-spin h-6 w-6 text-blue-600" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24">
                    <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                    <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>
                </svg>
                <span class="text-gray-600">{ &props.label }</span>
            </div>
        </div>
    }
}
