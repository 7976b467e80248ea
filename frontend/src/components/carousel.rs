use std::rc::Rc;
use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

pub const AUTOPLAY_MILLIS: u32 = 5000;

/// Index into a fixed number of slides that wraps at both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideCursor {
    len: usize,
    current: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideAction {
    Next,
    Prev,
    GoTo(usize),
}

impl SlideCursor {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Autoplay and arrows only make sense with something to move to.
    pub fn is_navigable(&self) -> bool {
        self.len > 1
    }

    pub fn apply(&mut self, action: SlideAction) -> bool {
        if self.len == 0 {
            return false;
        }
        let next = match action {
            SlideAction::Next => (self.current + 1) % self.len,
            SlideAction::Prev => (self.current + self.len - 1) % self.len,
            SlideAction::GoTo(index) if index < self.len => index,
            SlideAction::GoTo(_) => return false,
        };
        let changed = next != self.current;
        self.current = next;
        changed
    }
}

impl Reducible for SlideCursor {
    type Action = SlideAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Slide {
    pub image: &'static str,
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
    pub link: Option<(&'static str, Route)>,
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub items: Vec<Slide>,
    #[prop_or(AUTOPLAY_MILLIS)]
    pub autoplay_ms: u32,
    #[prop_or(true)]
    pub show_arrows: bool,
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let cursor = use_reducer({
        let len = props.items.len();
        move || SlideCursor::new(len)
    });

    {
        let dispatcher = cursor.dispatcher();
        use_effect_with_deps(
            move |(navigable, period)| {
                let interval = navigable.then(|| {
                    Interval::new(*period, move || dispatcher.dispatch(SlideAction::Next))
                });
                move || drop(interval)
            },
            (cursor.is_navigable(), props.autoplay_ms),
        );
    }

    if cursor.is_empty() {
        return html! {
            <div class="carousel-empty">
                <p>{"No items to display"}</p>
            </div>
        };
    }

    let prev = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.dispatch(SlideAction::Prev))
    };
    let next = {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.dispatch(SlideAction::Next))
    };
    let offset = format!("transform: translateX(-{}%);", cursor.current() * 100);
    let go_to = |index: usize| {
        let cursor = cursor.clone();
        Callback::from(move |_: MouseEvent| cursor.dispatch(SlideAction::GoTo(index)))
    };

    html! {
        <div class="carousel">
            <div class="carousel-track" style={offset}>
                { for props.items.iter().enumerate().map(|(idx, item)| html! {
                    <div class="carousel-slide">
                        <img
                            src={item.image}
                            alt={item.title.unwrap_or("Interior Design Carousel Item")}
                            class={classes!("carousel-image", (idx == cursor.current()).then(|| "current"))}
                        />
                        if item.title.is_some() || item.description.is_some() {
                            <div class="carousel-caption">
                                if let Some(title) = item.title {
                                    <h3>{title}</h3>
                                }
                                if let Some(description) = item.description {
                                    <p>{description}</p>
                                }
                                if let Some((label, route)) = item.link.clone() {
                                    <Link<Route> to={route} classes="button">{label}</Link<Route>>
                                }
                            </div>
                        }
                    </div>
                }) }
            </div>
            if props.show_arrows && cursor.is_navigable() {
                <button class="carousel-arrow left" aria-label="Previous slide" onclick={prev}>{"‹"}</button>
                <button class="carousel-arrow right" aria-label="Next slide" onclick={next}>{"›"}</button>
            }
            if cursor.is_navigable() {
                <div class="carousel-dots">
                    { for (0..cursor.len()).map(|index| html! {
                        <button
                            class={classes!("carousel-dot", (index == cursor.current()).then(|| "current"))}
                            aria-label={format!("Go to slide {}", index + 1)}
                            aria-current={(index == cursor.current()).then(|| "true")}
                            onclick={go_to(index)}
                        />
                    }) }
                </div>
            }
            <style>{r#"
                .carousel { position: relative; width: 100%; overflow: hidden; height: calc(100vh - 100px); }
                .carousel-track { display: flex; height: 100%; transition: transform 500ms ease-in-out; }
                .carousel-slide { position: relative; min-width: 100%; height: 100%; }
                .carousel-image { width: 100%; height: 100%; object-fit: cover; transition: transform 3000ms ease-out; }
                .carousel-image.current { transform: scale(1.03); transition-delay: 500ms; }
                .carousel-caption {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.3);
                    color: #fff;
                    text-align: center;
                }
                .carousel-caption h3 { font-size: 2.25rem; font-weight: 700; margin-bottom: 0.5rem; }
                .carousel-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    border: 0;
                    border-radius: 999px;
                    padding: 0.5rem 0.9rem;
                    font-size: 1.5rem;
                    color: #fff;
                    background: rgba(45, 42, 38, 0.8);
                    cursor: pointer;
                }
                .carousel-arrow.left { left: 1rem; }
                .carousel-arrow.right { right: 1rem; }
                .carousel-dots { position: absolute; bottom: 1.5rem; left: 50%; transform: translateX(-50%); display: flex; gap: 0.5rem; }
                .carousel-dot { width: 0.6rem; height: 0.6rem; padding: 0; border: 0; border-radius: 999px; background: rgba(255, 255, 255, 0.5); cursor: pointer; }
                .carousel-dot.current { background: #fff; }
                .carousel-empty {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    height: 16rem;
                    background: #e5e7eb;
                    border-radius: 0.5rem;
                    color: #6b7280;
                }
            "#}</style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_wrap_around() {
        let mut cursor = SlideCursor::new(3);
        assert!(cursor.apply(SlideAction::Prev));
        assert_eq!(cursor.current(), 2);
        assert!(cursor.apply(SlideAction::Next));
        assert_eq!(cursor.current(), 0);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut cursor = SlideCursor::new(2);
        assert!(cursor.apply(SlideAction::GoTo(1)));
        assert!(!cursor.apply(SlideAction::GoTo(5)));
        assert_eq!(cursor.current(), 1);
        assert!(!cursor.apply(SlideAction::GoTo(cursor.len())));
    }

    #[test]
    fn go_to_current_slide_is_not_a_change() {
        let mut cursor = SlideCursor::new(4);
        assert!(!cursor.apply(SlideAction::GoTo(0)));
        assert!(cursor.apply(SlideAction::GoTo(3)));
        assert!(cursor.apply(SlideAction::Next));
        assert_eq!(cursor.current(), 0);
    }

    #[test]
    fn single_or_empty_set_never_moves() {
        let mut single = SlideCursor::new(1);
        assert!(!single.is_navigable());
        assert!(!single.apply(SlideAction::Next));
        assert_eq!(single.current(), 0);

        let mut empty = SlideCursor::new(0);
        assert!(empty.is_empty());
        assert!(!empty.apply(SlideAction::Prev));
    }
}
