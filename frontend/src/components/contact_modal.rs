use std::rc::Rc;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use log::{info, warn};
use sarvian_common::{Field, LeadRequest, AUTO_CLOSE_MILLIS};
use wasm_bindgen_futures::spawn_local;
use web_sys::{js_sys, HtmlInputElement};
use yew::prelude::*;

use crate::config;
use crate::dom::{BodyStyle, KeyListener, ScrollLock};
use crate::modal::{
    InFlight, ModalAction, ModalController, SubmissionPhase, SubmitFailure, Visibility,
};

impl Reducible for ModalController {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// What a component needs to drive the single contact modal. Handed down
/// from the app root instead of being looked up.
#[derive(Clone, PartialEq)]
pub struct ModalHandle {
    pub open: Callback<()>,
    pub close: Callback<()>,
    pub toggle: Callback<()>,
}

impl ModalHandle {
    pub fn open_on_click(&self) -> Callback<MouseEvent> {
        let open = self.open.clone();
        Callback::from(move |_| open.emit(()))
    }
}

async fn post_lead(request: &LeadRequest) -> Result<(), SubmitFailure> {
    let response = Request::post(&config::api_url("/api/contact"))
        .json(request)
        .map_err(|e| SubmitFailure::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitFailure::Network(e.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        Err(SubmitFailure::Status(response.status()))
    }
}

/// Owns the modal state plus the page-wide resources it needs while open:
/// the scroll lock, the Escape listener, the request in flight and the
/// auto-close timer. Call it once, at the app root.
#[hook]
pub fn use_contact_modal() -> (UseReducerHandle<ModalController>, ModalHandle) {
    let modal = use_reducer(ModalController::default);

    {
        let dispatcher = modal.dispatcher();
        use_effect_with_deps(
            move |visibility| {
                let guards = (*visibility == Visibility::Open).then(|| {
                    let lock = BodyStyle::current().map(ScrollLock::engage);
                    let escape = KeyListener::new("Escape", move || {
                        dispatcher.dispatch(ModalAction::Close)
                    });
                    (lock, escape)
                });
                move || drop(guards)
            },
            modal.visibility(),
        );
    }

    {
        let dispatcher = modal.dispatcher();
        let in_flight = modal.in_flight().cloned();
        use_effect_with_deps(
            move |_| {
                if let Some(InFlight { attempt, request }) = in_flight {
                    spawn_local(async move {
                        let result = post_lead(&request).await;
                        match &result {
                            Ok(()) => info!("Contact lead accepted"),
                            Err(e) => warn!("Contact lead failed: {:?}", e),
                        }
                        dispatcher.dispatch(ModalAction::Finished { attempt, result });
                    });
                }
                || ()
            },
            modal.in_flight().map(|f| f.attempt),
        );
    }

    {
        let dispatcher = modal.dispatcher();
        use_effect_with_deps(
            move |token| {
                let timeout = token.map(|token| {
                    Timeout::new(AUTO_CLOSE_MILLIS, move || {
                        dispatcher.dispatch(ModalAction::AutoCloseElapsed(token))
                    })
                });
                move || drop(timeout)
            },
            modal.auto_close_token(),
        );
    }

    let handle = {
        let open = modal.dispatcher();
        let close = modal.dispatcher();
        let toggle = modal.dispatcher();
        ModalHandle {
            open: Callback::from(move |_| {
                open.dispatch(ModalAction::Open { now: js_sys::Date::now() })
            }),
            close: Callback::from(move |_| close.dispatch(ModalAction::Close)),
            toggle: Callback::from(move |_| {
                toggle.dispatch(ModalAction::Toggle { now: js_sys::Date::now() })
            }),
        }
    };

    (modal, handle)
}

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub controller: ModalController,
    pub dispatch: Callback<ModalAction>,
    pub on_close: Callback<()>,
}

#[function_component(ContactModal)]
pub fn contact_modal(props: &ContactModalProps) -> Html {
    let controller = &props.controller;
    if !controller.is_open() {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let body = if controller.phase() == SubmissionPhase::Succeeded {
        html! {
            <div class="contact-success" aria-live="assertive">
                <div class="contact-success-icon">{"✓"}</div>
                <h2>{"Message sent"}</h2>
                <p>{"Thanks, your message is on its way. We'll reach out shortly."}</p>
                <button class="button contact-submit" onclick={close.clone()}>{"Close now"}</button>
            </div>
        }
    } else {
        render_form(controller, &props.dispatch)
    };

    html! {
        <div role="dialog" aria-modal="true" aria-labelledby="contact-title" class="contact-modal">
            <button aria-label="Close contact form" class="contact-backdrop" onclick={close.clone()} />
            <div class="contact-panel" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class="contact-close" aria-label="Close" onclick={close}>{"✕"}</button>
                { body }
                <div class="contact-footer">
                    <p>{config::STUDIO_NAME}</p>
                    <p>
                        <a href={config::STUDIO_PHONE_TEL}
                           aria-label={format!("Call {} at {}", config::STUDIO_NAME, config::STUDIO_PHONE_DISPLAY)}>
                            {config::STUDIO_PHONE_DISPLAY}
                        </a>
                    </p>
                </div>
            </div>
            <style>{MODAL_CSS}</style>
        </div>
    }
}

fn render_form(controller: &ModalController, dispatch: &Callback<ModalAction>) -> Html {
    let Some(form) = controller.form() else {
        return html! {};
    };
    let submitting = controller.phase() == SubmissionPhase::Submitting;

    let onsubmit = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatch.emit(ModalAction::Submit { now: js_sys::Date::now() });
        })
    };
    let honeypot = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatch.emit(ModalAction::EditHoneypot(input.value()));
        })
    };

    html! {
        <>
            <h2 id="contact-title">{"Let's talk about your project"}</h2>
            <p class="contact-lede">{"Share a few details and we'll reach out shortly."}</p>
            <form onsubmit={onsubmit} novalidate={true} class="contact-form">
                <input
                    type="text"
                    name="company"
                    tabindex="-1"
                    autocomplete="off"
                    aria-hidden="true"
                    class="contact-honeypot"
                    placeholder="Company"
                    value={form.company.clone()}
                    oninput={honeypot}
                />
                { render_field(controller, dispatch, Field::Name, "Name", "text", "name", "Your Name", &form.name) }
                { render_field(controller, dispatch, Field::Phone, "Phone", "tel", "tel", "Contact number", &form.phone) }
                { render_field(controller, dispatch, Field::Email, "Email", "email", "email", "Your Email", &form.email) }
                if let Some(message) = controller.submit_error() {
                    <p class="contact-error" aria-live="polite">{message}</p>
                }
                <button type="submit" class="button contact-submit" disabled={submitting}>
                    { if submitting { "Sending…" } else { "Submit" } }
                </button>
            </form>
        </>
    }
}

#[allow(clippy::too_many_arguments)]
fn render_field(
    controller: &ModalController,
    dispatch: &Callback<ModalAction>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    autocomplete: &'static str,
    placeholder: &'static str,
    value: &str,
) -> Html {
    let id = field.id();
    let error = controller.error_for(field);
    let error_id = format!("{}-error", id);
    let oninput = {
        let dispatch = dispatch.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatch.emit(ModalAction::Edit(field, input.value()));
        })
    };

    html! {
        <div class="contact-field">
            <label for={id}>{label}</label>
            <input
                id={id}
                type={input_type}
                autocomplete={autocomplete}
                placeholder={placeholder}
                value={value.to_string()}
                aria-invalid={error.map(|_| "true")}
                aria-describedby={error.map(|_| error_id.clone())}
                oninput={oninput}
            />
            if let Some(error) = error {
                <p id={error_id} class="contact-error">{error.message}</p>
            }
        </div>
    }
}

const MODAL_CSS: &str = r#"
.contact-modal {
    position: fixed;
    inset: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: center;
}
.contact-backdrop {
    position: absolute;
    inset: 0;
    border: 0;
    background: rgba(0, 0, 0, 0.8);
    backdrop-filter: blur(4px);
}
.contact-panel {
    position: relative;
    margin: 0 1rem;
    width: 100%;
    max-width: 600px;
    border-radius: 1rem;
    background: var(--pop, #2d2a26);
    color: #fff;
    padding: 2rem;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.4);
}
.contact-close {
    position: absolute;
    right: 0.75rem;
    top: 0.75rem;
    border: 0;
    border-radius: 999px;
    background: transparent;
    color: #9ca3af;
    cursor: pointer;
}
.contact-lede { margin-bottom: 2.5rem; }
.contact-form { display: flex; flex-direction: column; gap: 1.5rem; }
.contact-field label { display: block; margin-bottom: 0.25rem; font-size: 0.875rem; }
.contact-field input {
    width: 100%;
    border: 1px solid #1f2937;
    padding: 0.5rem 0.75rem;
    background: transparent;
    color: #fff;
}
.contact-honeypot { display: none; }
.contact-error { margin-top: 0.25rem; font-size: 0.875rem; color: #ef4444; }
.contact-submit { width: 100%; }
.contact-submit:disabled { opacity: 0.6; }
.contact-success { padding: 2rem 0; text-align: center; }
.contact-success-icon { font-size: 3rem; }
.contact-footer { margin-top: 2rem; text-align: center; color: #6b7280; }
.contact-footer a { color: inherit; text-underline-offset: 4px; }
"#;
