use std::rc::Rc;

use yew::prelude::*;

use portal::context::{ApplicationContext, ContextAction};

/// Reducer wrapper so the shared [`ApplicationContext`] can live in Yew state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub context: ApplicationContext,
}

impl Reducible for SessionState {
    type Action = ContextAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut context = self.context.clone();
        context.apply(action);
        Rc::new(SessionState { context })
    }
}

/// Read access via `Deref`, writes via `dispatch`.
pub type SessionHandle = UseReducerHandle<SessionState>;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Owns the one [`ApplicationContext`] for the page session.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(SessionState::default);

    html! {
        <ContextProvider<SessionHandle> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("use_session must be used within a SessionProvider")
}
