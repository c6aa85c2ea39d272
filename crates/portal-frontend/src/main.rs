mod browser;
mod components;
mod config;
mod hooks;
mod pages;
mod providers;
mod routes;

use yew::prelude::*;
use yew_router::prelude::*;

use components::{Bootstrapper, Nav};
use providers::SessionProvider;
use routes::{Route, switch};

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <Bootstrapper>
                    <div class="h-screen w-screen grid grid-cols-1 grid-rows-[auto_1fr]">
                        <Nav />
                        <main class="overflow-auto">
                            <Switch<Route> render={switch} />
                        </main>
                    </div>
                </Bootstrapper>
            </SessionProvider>
        </BrowserRouter>
    }
}

fn main() {
    portal::log::setup().expect("Failed to setup logging");
    yew::Renderer::<App>::new().render();
}
