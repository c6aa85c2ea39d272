use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchProps {
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or_else(|| AttrValue::from("Search..."))]
    pub placeholder: AttrValue,
}

/// Text filter with a clear button; the parent owns the term.
#[function_component(Search)]
pub fn search(props: &SearchProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let on_clear = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(String::new()))
    };

    html! {
        <div class="flex space-x-2">
            <input
                type="text"
                class="flex-1 px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                oninput={on_input}
            />
            <button
                class="px-3 py-2 bg-gray-200 rounded-md hover:bg-gray-300 cursor-pointer"
                onclick={on_clear}
                disabled={props.value.is_empty()}
            >
                { "Clear" }
            </button>
        </div>
    }
}
