use yew::prelude::*;

use crate::components::approach::Approach;
use crate::components::connect::ContactButton;
use crate::components::contact_modal::ModalHandle;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub modal: ModalHandle,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    html! {
        <main class="contact-page">
            <h1>{"Contact"}</h1>
            <p>
                {"Tell us about your home and we'll be in touch. Prefer the phone? Call "}
                <a href={config::STUDIO_PHONE_TEL}>{config::STUDIO_PHONE_DISPLAY}</a>
                {"."}
            </p>
            <ContactButton modal={props.modal.clone()} label="Start a Conversation" />
            <Approach initially_open={None::<usize>} />
            <style>{r#"
                .contact-page { max-width: 1400px; margin: 0 auto; padding: 3rem 1rem; }
                .contact-page h1 { font-size: 2.5rem; margin-bottom: 1rem; }
                .contact-page > p { margin-bottom: 1.5rem; }
            "#}</style>
        </main>
    }
}
