use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod disclosure;
mod dom;
mod modal;
mod components {
    pub mod approach;
    pub mod carousel;
    pub mod connect;
    pub mod contact_modal;
    pub mod footer;
    pub mod nav;
    pub mod rich_text;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod project_detail;
    pub mod projects;
    pub mod publications;
}

use components::{
    contact_modal::{use_contact_modal, ContactModal, ModalHandle},
    footer::Footer,
    nav::Nav,
};
use pages::{
    about::About,
    contact::Contact,
    home::Home,
    project_detail::ProjectDetail,
    projects::Projects,
    publications::{NotFound, Publications},
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/projects")]
    Projects,
    #[at("/projects/:slug")]
    ProjectDetail { slug: String },
    #[at("/contact")]
    Contact,
    #[at("/publications")]
    Publications,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, modal: ModalHandle) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home modal={modal} /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Projects => {
            info!("Rendering Projects page");
            html! { <Projects /> }
        }
        Route::ProjectDetail { slug } => {
            info!("Rendering Project page for {}", slug);
            html! { <ProjectDetail slug={slug} modal={modal} /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact modal={modal} /> }
        }
        Route::Publications => {
            info!("Rendering Publications page");
            html! { <Publications /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    // The one contact modal for the whole site lives here; pages get a handle.
    let (modal, handle) = use_contact_modal();
    let render = {
        let handle = handle.clone();
        move |routes: Route| switch(routes, handle.clone())
    };
    let dispatch = {
        let dispatcher = modal.dispatcher();
        Callback::from(move |action| dispatcher.dispatch(action))
    };

    html! {
        <BrowserRouter>
            <Nav modal={handle.clone()} />
            <Switch<Route> render={render} />
            <Footer />
            <ContactModal controller={(*modal).clone()} dispatch={dispatch} on_close={handle.close.clone()} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
