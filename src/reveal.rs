use leptos::html::Section;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of a section that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Delay step between staggered grid items, in milliseconds.
pub const STAGGER_STEP_MS: u32 = 100;

/// One-shot latch for scroll reveals.
///
/// Sections animate in the first time they become visible and never hide
/// again, so the flag only ever moves false -> true. Repeated intersection
/// events after the first are inert.
#[derive(Debug, Default)]
pub struct RevealFlag {
    revealed: bool,
}

impl RevealFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one intersection event. Returns true only on the transition,
    /// i.e. the first intersecting event ever seen.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.revealed {
            self.revealed = true;
            return true;
        }
        false
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// CSS classes for a section in the given reveal state.
pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed {
        "appear is-visible"
    } else {
        "appear"
    }
}

/// Transition delay for the item at `index` in a staggered grid.
pub fn stagger_delay_ms(index: usize) -> u32 {
    index as u32 * STAGGER_STEP_MS
}

fn log_warning(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

/// Scoped wrapper around a browser `IntersectionObserver` watching one element.
///
/// The callback fires at most once; the observer then disconnects itself.
/// Dropping the wrapper also disconnects, so an observation armed on mount is
/// released on unmount even if it never fired.
struct SectionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl SectionObserver {
    /// Start observing `el`, invoking `on_visible` the first time at least
    /// `threshold` of it is in the viewport. Returns `None` if the browser
    /// refuses to construct the observer.
    fn watch(
        el: &web_sys::Element,
        threshold: f64,
        on_visible: impl Fn() + Clone + 'static,
    ) -> Option<Self> {
        let mut flag = RevealFlag::new();
        let on_first = on_visible.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .map(|e| e.unchecked_into::<IntersectionObserverEntry>())
                    .any(|e| e.is_intersecting());
                if flag.observe(intersecting) {
                    on_first();
                    observer.disconnect();
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer = match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(obs) => obs,
            Err(_) => {
                log_warning("Portfolio: IntersectionObserver unavailable, revealing immediately");
                on_visible();
                return None;
            }
        };
        observer.observe(el);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Reveal signal for a section, driven by scroll visibility.
///
/// Arms a one-shot observer once the node mounts; the signal flips true on the
/// first intersection beyond [`REVEAL_THRESHOLD`] and stays true for the rest
/// of the session. The observation is released on first trigger or on
/// component cleanup, whichever comes first. A node ref that never resolves
/// is a no-op.
pub fn use_reveal(node_ref: NodeRef<Section>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = create_signal(false);
    let handle: Rc<RefCell<Option<SectionObserver>>> = Rc::new(RefCell::new(None));

    {
        let handle = Rc::clone(&handle);
        create_effect(move |_| {
            if handle.borrow().is_some() {
                return;
            }
            if let Some(section) = node_ref.get() {
                *handle.borrow_mut() = SectionObserver::watch(&section, REVEAL_THRESHOLD, move || {
                    set_revealed.try_set(true);
                });
            }
        });
    }

    on_cleanup(move || {
        handle.borrow_mut().take();
    });

    revealed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_exactly_once() {
        let mut flag = RevealFlag::new();
        assert!(!flag.is_revealed());
        assert!(flag.observe(true));
        assert!(flag.is_revealed());
        // Any further event stream leaves the flag set and never re-fires
        for intersecting in [true, false, true, true, false] {
            assert!(!flag.observe(intersecting));
            assert!(flag.is_revealed());
        }
    }

    #[test]
    fn test_non_intersecting_events_do_not_fire() {
        let mut flag = RevealFlag::new();
        assert!(!flag.observe(false));
        assert!(!flag.observe(false));
        assert!(!flag.is_revealed());
        assert!(flag.observe(true));
    }

    #[test]
    fn test_reveal_class_mapping() {
        assert_eq!(reveal_class(false), "appear");
        assert_eq!(reveal_class(true), "appear is-visible");
    }

    #[test]
    fn test_stagger_delays() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1), 100);
        assert_eq!(stagger_delay_ms(4), 400);
    }
}
