use std::collections::HashSet;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::{Reducible, UseReducerDispatcher};

// A region counts as entered once 15% of it sits inside the viewport band.
const VISIBILITY_THRESHOLD: f64 = 0.15;
const VIEWPORT_MARGIN: &str = "25% 0px -25% 0px";

/// Sections that have crossed into view at least once. Insert-only, so each
/// entrance animation fires exactly once per visit and scrolling back up
/// never resets a section.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RevealSet {
    seen: HashSet<String>,
}

impl RevealSet {
    pub fn contains(&self, section: &str) -> bool {
        self.seen.contains(section)
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl Reducible for RevealSet {
    type Action = String;

    fn reduce(self: Rc<Self>, section: String) -> Rc<Self> {
        if self.seen.contains(&section) {
            return self;
        }
        let mut seen = self.seen.clone();
        seen.insert(section);
        Rc::new(RevealSet { seen })
    }
}

pub fn reveal_class(revealed: &RevealSet, section: &str) -> &'static str {
    if revealed.contains(section) {
        "reveal visible"
    } else {
        "reveal"
    }
}

/// Watches every `[data-section]` element and reports each one the first
/// time it intersects. Fired regions are dropped from observation on the
/// spot; `disconnect` tears the rest down on unmount.
pub struct SectionObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl SectionObserver {
    pub fn start(on_reveal: UseReducerDispatcher<RevealSet>) -> Option<SectionObserver> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Some(section) = target.get_attribute("data-section") {
                        on_reveal.dispatch(section);
                    }
                    observer.unobserve(&target);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
        options.set_root_margin(VIEWPORT_MARGIN);

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )
        .ok()?;

        let document = web_sys::window()?.document()?;
        let nodes = document.query_selector_all("[data-section]").ok()?;
        for i in 0..nodes.length() {
            if let Some(node) = nodes.item(i) {
                if let Ok(element) = node.dyn_into::<Element>() {
                    observer.observe(&element);
                }
            }
        }

        Some(SectionObserver {
            observer,
            _callback: callback,
        })
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let set = RevealSet::default();
        assert!(set.is_empty());
        assert!(!set.contains("hero"));
    }

    #[test]
    fn reveals_accumulate_and_never_leave() {
        let set = Rc::new(RevealSet::default());
        let set = set.reduce("hero".to_string());
        let set = set.reduce("pricing".to_string());
        let set = set.reduce("hero".to_string());

        assert!(set.contains("hero"));
        assert!(set.contains("pricing"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn duplicate_reveal_keeps_the_same_state() {
        let first = Rc::new(RevealSet::default()).reduce("hero".to_string());
        let second = first.clone().reduce("hero".to_string());
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn reveal_class_tracks_membership() {
        let set = Rc::new(RevealSet::default());
        assert_eq!(reveal_class(&set, "pricing"), "reveal");

        let set = set.reduce("pricing".to_string());
        assert_eq!(reveal_class(&set, "pricing"), "reveal visible");
        assert_eq!(reveal_class(&set, "process"), "reveal");
    }
}
