#[macro_export]
/// Define an async Yew callback, cloning the listed handles into it and
/// spawning the body with `wasm_bindgen_futures::spawn_local`.
///
/// Without an event parameter:
/// ```compile_fail
/// let fetch_members = async_callback!([api, members, error_msg] {
///     match api.fetch_members().await {
///         Ok(list) => members.set(list),
///         Err(err) => error_msg.set(Some(format!("Failed to load members: {err}"))),
///     }
/// });
/// ```
///
/// With an event parameter:
/// ```compile_fail
/// let on_submit = async_callback!([api, waiting, error_msg] |event: SubmitEvent| {
///     event.prevent_default();
///     waiting.set(true);
///     if let Err(err) = manager.login(&credentials).await {
///         error_msg.set(Some(err.to_string()));
///     }
///     waiting.set(false);
/// });
/// ```
///
/// Each listed variable is cloned once when the callback is built and again
/// on every invocation, so the spawned future owns its handles.
macro_rules! async_callback {
    // Version with event parameter, matched first since a closure also parses as `$body:expr`
    ([$($var:ident),* $(,)?] |$event:ident $(: $ty:ty)?| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event $(: $ty)?| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    // Version without event parameter
    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |_| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
}
