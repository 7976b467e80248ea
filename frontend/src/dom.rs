use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, Window};

/// Something with a CSS `overflow` value that can be saved and put back.
pub trait OverflowTarget {
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: &str);
}

/// Disables page scroll for as long as it lives. Dropping it restores
/// whatever `overflow` was set before, including an empty value.
pub struct ScrollLock<T: OverflowTarget> {
    target: T,
    previous: String,
}

impl<T: OverflowTarget> ScrollLock<T> {
    pub fn engage(target: T) -> Self {
        let previous = target.overflow();
        target.set_overflow("hidden");
        Self { target, previous }
    }
}

impl<T: OverflowTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.target.set_overflow(&self.previous);
    }
}

pub struct BodyStyle(HtmlElement);

impl BodyStyle {
    pub fn current() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(BodyStyle)
    }
}

impl OverflowTarget for BodyStyle {
    fn overflow(&self) -> String {
        self.0.style().get_property_value("overflow").unwrap_or_default()
    }

    fn set_overflow(&self, value: &str) {
        let _ = self.0.style().set_property("overflow", value);
    }
}

/// Window-level `keydown` listener for a single key, removed on drop.
pub struct KeyListener {
    window: Window,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeyListener {
    pub fn new<F>(key: &'static str, mut on_key: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if e.key() == key {
                on_key();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        window
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { window, callback })
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeBody(Rc<RefCell<String>>);

    impl OverflowTarget for FakeBody {
        fn overflow(&self) -> String {
            self.0.borrow().clone()
        }

        fn set_overflow(&self, value: &str) {
            *self.0.borrow_mut() = value.to_string();
        }
    }

    #[test]
    fn lock_hides_overflow_and_restores_previous() {
        let body = FakeBody::default();
        *body.0.borrow_mut() = "auto".to_string();

        let lock = ScrollLock::engage(body.clone());
        assert_eq!(body.overflow(), "hidden");
        drop(lock);
        assert_eq!(body.overflow(), "auto");
    }

    #[test]
    fn empty_previous_value_is_restored_as_empty() {
        let body = FakeBody::default();
        {
            let _lock = ScrollLock::engage(body.clone());
            assert_eq!(body.overflow(), "hidden");
        }
        assert_eq!(body.overflow(), "");
    }
}
