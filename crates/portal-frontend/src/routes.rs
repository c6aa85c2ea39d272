use yew::prelude::*;
use yew_router::prelude::*;

use portal::guard::Destination;

use crate::pages::{AdminPage, DashboardPage, LoginPage, QualificationsPage};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/qualifications")]
    Qualifications,
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Login => Route::Login,
            Destination::Dashboard => Route::Dashboard,
        }
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        // The dashboard's own guard bounces anonymous visitors to login
        Route::Root => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Login => html! { <LoginPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Qualifications => html! { <QualificationsPage /> },
        Route::Admin => html! { <AdminPage /> },
        Route::NotFound => html! { <div class="p-8">{ "404 Not Found" }</div> },
    }
}
