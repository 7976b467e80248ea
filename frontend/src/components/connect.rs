use yew::prelude::*;

use crate::components::contact_modal::ModalHandle;

#[derive(Properties, PartialEq)]
pub struct ContactButtonProps {
    pub modal: ModalHandle,
    #[prop_or_else(|| "Contact".to_string())]
    pub label: String,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ContactButton)]
pub fn contact_button(props: &ContactButtonProps) -> Html {
    html! {
        <button
            type="button"
            class={classes!("button", "contact-button", props.class.clone())}
            onclick={props.modal.open_on_click()}
        >
            {props.label.clone()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConnectProps {
    pub modal: ModalHandle,
}

/// "Ready To Start?" banner closing out the landing page.
#[function_component(Connect)]
pub fn connect(props: &ConnectProps) -> Html {
    html! {
        <div class="connect-banner">
            <h3>{"Ready To Start?"}</h3>
            <ContactButton modal={props.modal.clone()} label="Connect With Us" />
            <style>{r#"
                .connect-banner {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                    padding: 3rem 1rem;
                    text-align: center;
                    background: var(--banner, #6b5b4b);
                }
                .connect-banner h3 { font-size: 1.875rem; color: #fff; }
            "#}</style>
        </div>
    }
}
