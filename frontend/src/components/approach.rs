use std::rc::Rc;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::disclosure::{DisclosureEvent, DisclosureState, PANEL_RESIZE_MILLIS};

impl Reducible for DisclosureState {
    type Action = DisclosureEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Panel {
    pub title: &'static str,
    pub content: &'static str,
    pub image: &'static str,
}

pub fn methodology_panels() -> Vec<Panel> {
    vec![
        Panel {
            title: "Discovery and Vision",
            content: "We begin with a collaborative kickoff to understand goals, lifestyle, and budget, then walk the site to assess opportunities and constraints. We discuss aesthetic direction, indoor-outdoor flow, and functional needs for every space. You'll receive a concise project brief outlining scope, priorities, mood references, timelines, and options for phasing.",
            image: "/assets/swatch-2.jpg",
        },
        Panel {
            title: "Concept Design Presentation",
            content: "We translate the brief into preliminary floor plans, furniture layouts, and massing and elevation studies, supported by mood boards, materials, and early renderings. You'll see how architecture and interiors work together: spatial flow, focal moments, and a draft finishes palette. We review alternatives and align on a preferred concept and palette direction.",
            image: "/assets/drawing.jpg",
        },
        Panel {
            title: "Refinement and Approval",
            content: "Incorporating feedback, we develop the design: detailed plans and elevations, millwork and built-ins, lighting concepts, and key FF&E selections. We fine-tune materials, fixtures, appliances, and color, coordinate with consultants, and reconcile scope with budget and timeline. The result is an approved, cohesive design package ready for execution.",
            image: "/slider/aventura-interior-design.jpg",
        },
        Panel {
            title: "Procurement and Oversight",
            content: "We manage specifications, quoting, and purchase orders; track lead times, fabrication, and quality control; and coordinate warehousing, delivery, and installations. On site, we liaise with contractors and trades, answer RFIs, and monitor progress against schedule to protect design intent. You'll receive clear updates and proactive issue-resolution throughout.",
            image: "/assets/furniture-delivery.jpg",
        },
        Panel {
            title: "Staging and Delivery",
            content: "Our team installs furnishings, hangs art, styles accessories, and dresses windows and bedding for a turnkey reveal. We handle punch-list items, provide care and maintenance guides, and ensure everything performs as intended. Follow-up visits confirm the space lives as beautifully as it looks.",
            image: "/assets/completed.jpg",
        },
    ]
}

#[derive(Properties, PartialEq)]
pub struct ApproachProps {
    #[prop_or_else(methodology_panels)]
    pub panels: Vec<Panel>,
    #[prop_or(Some(0))]
    pub initially_open: Option<usize>,
}

/// Methodology accordion. Sideways on wide screens, stacked on narrow ones;
/// both views share one state so they never disagree.
#[function_component(Approach)]
pub fn approach(props: &ApproachProps) -> Html {
    let state = use_reducer({
        let count = props.panels.len();
        let initially_open = props.initially_open;
        move || DisclosureState::new(count, initially_open)
    });

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |timer| {
                let timeout = timer.map(|timer| {
                    Timeout::new(timer.after_ms, move || dispatcher.dispatch(timer.fires))
                });
                move || drop(timeout)
            },
            state.timer(),
        );
    }

    let toggle = |index: usize| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(DisclosureEvent::Toggle(index)))
    };
    let locked = state.input_locked();
    let resize = format!("transition-duration: {}ms;", PANEL_RESIZE_MILLIS);

    html! {
        <div class="approach">
            <h2 class="approach-title">{"Our Methodology"}</h2>

            <div class="approach-desktop">
                { for props.panels.iter().enumerate().map(|(index, panel)| {
                    let active = state.is_active(index);
                    html! {
                        <div class={classes!("approach-panel", active.then(|| "active"))} style={resize.clone()}>
                            <button
                                class="approach-tab"
                                onclick={toggle(index)}
                                disabled={locked}
                                aria-expanded={active.to_string()}
                                aria-controls={format!("panel-desktop-{}", index)}
                            >
                                <span class="approach-tab-title">{panel.title}</span>
                                if !active {
                                    <span class="approach-plus" aria-hidden="true">{"+"}</span>
                                }
                            </button>
                            <div
                                id={format!("panel-desktop-{}", index)}
                                class={classes!(
                                    "approach-body",
                                    (!active).then(|| "collapsed"),
                                    state.is_closing(index).then(|| "closing"),
                                )}
                                style={resize.clone()}
                            >
                                <div class={classes!("approach-reveal", state.shows_content(index).then(|| "shown"))}>
                                    <img src={panel.image} alt={panel.title} width="600" height="280" />
                                    <p>{panel.content}</p>
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </div>

            <div class="approach-mobile">
                { for props.panels.iter().enumerate().map(|(index, panel)| {
                    let active = state.is_active(index);
                    html! {
                        <div class="approach-item">
                            <button
                                class="approach-row"
                                onclick={toggle(index)}
                                disabled={locked}
                                aria-expanded={active.to_string()}
                                aria-controls={format!("panel-mobile-{}", index)}
                            >
                                <span>{panel.title}</span>
                                <span class={classes!("approach-chevron", active.then(|| "open"))} aria-hidden="true">{"›"}</span>
                            </button>
                            <div
                                id={format!("panel-mobile-{}", index)}
                                class={classes!("approach-rows", active.then(|| "expanded"))}
                                style={resize.clone()}
                            >
                                <div class="approach-rows-inner">
                                    <div class={classes!("approach-reveal", state.shows_content(index).then(|| "shown"))}>
                                        <img src={panel.image} alt={panel.title} />
                                        <p>{panel.content}</p>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </div>

            <style>{r#"
                .approach { display: flex; flex-direction: column; padding: 4rem 1rem; }
                .approach-title { text-align: center; font-size: 2.5rem; }
                .approach-desktop { display: flex; height: 600px; overflow: hidden; width: 80%; margin: 3rem auto 0; }
                .approach-panel {
                    display: flex;
                    width: 4rem;
                    margin-right: 0.5rem;
                    overflow: hidden;
                    border: 1px solid rgba(0, 0, 0, 0.1);
                    border-radius: 0.25rem;
                    transition-property: all;
                    transition-timing-function: ease-in-out;
                }
                .approach-panel.active { flex: 1; }
                .approach-tab {
                    position: relative;
                    flex-shrink: 0;
                    width: 4rem;
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border: 0;
                    color: #fff;
                    background: var(--banner, #6b5b4b);
                    cursor: pointer;
                }
                .approach-tab:disabled { cursor: not-allowed; }
                .approach-tab-title { transform: rotate(-90deg); white-space: nowrap; font-size: 1.125rem; letter-spacing: 0.05em; }
                .approach-plus { position: absolute; bottom: 1rem; opacity: 0.7; }
                .approach-body {
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 1.5rem;
                    overflow: hidden;
                    transition-property: all;
                }
                .approach-body.collapsed { opacity: 0; width: 0; padding: 0; }
                .approach-body.closing { opacity: 1; }
                .approach-reveal { opacity: 0; transform: translateY(-2rem); transition: all 200ms ease-out; }
                .approach-reveal.shown { opacity: 1; transform: none; transition: all 700ms ease-out 300ms; }
                .approach-reveal p { margin-top: 1.5rem; line-height: 1.6; }
                .approach-mobile { display: none; width: 92%; margin: 2rem auto 0; }
                .approach-item { margin-bottom: 0.75rem; border: 1px solid rgba(0, 0, 0, 0.1); border-radius: 0.25rem; overflow: hidden; }
                .approach-row {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    padding: 0.75rem 1rem;
                    border: 0;
                    color: #fff;
                    background: var(--banner, #6b5b4b);
                }
                .approach-chevron { transition: transform 300ms; }
                .approach-chevron.open { transform: rotate(90deg); }
                .approach-rows { display: grid; grid-template-rows: 0fr; transition-property: grid-template-rows; }
                .approach-rows.expanded { grid-template-rows: 1fr; }
                .approach-rows-inner { overflow: hidden; padding: 0 1rem; }
                .approach-rows-inner img { width: 100%; aspect-ratio: 16 / 9; object-fit: cover; border-radius: 0.25rem; }
                @media (max-width: 768px) {
                    .approach-desktop { display: none; }
                    .approach-mobile { display: block; }
                }
            "#}</style>
        </div>
    }
}
