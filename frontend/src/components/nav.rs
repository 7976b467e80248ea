use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::contact_modal::ModalHandle;
use crate::config;
use crate::Route;

const LEFT_LINKS: [(&str, Route); 2] = [("Projects", Route::Projects), ("Publications", Route::Publications)];
const RIGHT_LINKS: [(&str, Route); 2] = [("About", Route::About), ("Contact", Route::Contact)];

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub modal: ModalHandle,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let inquire = {
        let toggle = props.modal.toggle.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            toggle.emit(());
        })
    };

    let menu_label = if *menu_open { "Close main menu" } else { "Open main menu" };
    let link = |label: &'static str, route: Route, classes: &'static str| {
        html! {
            <div onclick={close_menu.clone()}>
                <Link<Route> to={route} classes={classes}>{label}</Link<Route>>
            </div>
        }
    };

    html! {
        <nav aria-label="Primary" class="top-nav">
            <div class="nav-content">
                <div class="nav-side">
                    <button
                        type="button"
                        class="burger-menu"
                        aria-controls="mobile-menu"
                        aria-expanded={(*menu_open).to_string()}
                        aria-label={menu_label}
                        onclick={toggle_menu}
                    >
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                    <div class="nav-links">
                        { for LEFT_LINKS.iter().cloned().map(|(label, route)| link(label, route, "nav-link")) }
                    </div>
                </div>

                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src="/assets/logo_sdg.png" alt={config::STUDIO_NAME} width="130" />
                </Link<Route>>

                <div class="nav-side right">
                    <div class="nav-links">
                        { for RIGHT_LINKS.iter().cloned().map(|(label, route)| link(label, route, "nav-link")) }
                    </div>
                    <button type="button" class="nav-inquire" onclick={inquire.clone()}>{"Inquire"}</button>
                </div>
            </div>

            <div
                id="mobile-menu"
                class={classes!("mobile-menu", (*menu_open).then(|| "mobile-menu-open"))}
                aria-hidden={(!*menu_open).to_string()}
            >
                <div class="mobile-menu-inner">
                    { for LEFT_LINKS.iter().chain(RIGHT_LINKS.iter()).cloned().map(|(label, route)| link(label, route, "mobile-link")) }
                    <button type="button" class="mobile-link nav-inquire" onclick={inquire}>{"Inquire"}</button>
                </div>
            </div>

            <style>{r#"
                .top-nav { background: var(--nav, #f5f1eb); }
                .nav-content { display: flex; align-items: center; max-width: 1400px; margin: 0 auto; padding: 0.5rem 1rem; }
                .nav-side { flex: 1; display: flex; align-items: center; gap: 0.5rem; }
                .nav-side.right { justify-content: flex-end; }
                .nav-links { display: flex; gap: 1rem; }
                .nav-link { padding: 0.5rem; letter-spacing: 0.5px; text-transform: uppercase; color: inherit; text-decoration: none; }
                .nav-inquire { margin-left: 1rem; padding: 0.5rem 1rem; border: 1px solid currentColor; background: transparent; letter-spacing: 0.5px; text-transform: uppercase; cursor: pointer; }
                .mobile-link.nav-inquire { margin-left: 0; text-align: left; border: 0; }
                .burger-menu { display: none; border: 0; background: transparent; font-size: 1.4rem; cursor: pointer; }
                .mobile-menu { display: none; grid-template-rows: 0fr; transition: grid-template-rows 300ms ease-out; }
                .mobile-menu-open { grid-template-rows: 1fr; }
                .mobile-menu-inner { overflow: hidden; display: flex; flex-direction: column; gap: 0.5rem; padding: 0 1rem; }
                .mobile-link { display: block; padding: 0.5rem; font-size: 0.875rem; color: inherit; text-decoration: none; }
                @media (max-width: 768px) {
                    .nav-links { display: none; }
                    .burger-menu { display: block; }
                    .mobile-menu { display: grid; }
                }
            "#}</style>
        </nav>
    }
}
