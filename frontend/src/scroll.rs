use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;

/// Scroll distance over which the hero shapes finish morphing.
pub const MORPH_DISTANCE_PX: f64 = 2000.0;
/// Offset past which the floating price badge shows up.
pub const PRICE_BADGE_OFFSET_PX: f64 = 800.0;

pub fn morph_progress(scroll_y: f64) -> f64 {
    (scroll_y / MORPH_DISTANCE_PX).clamp(0.0, 1.0)
}

/// Hero shapes rest as circles and square off while tilting as the page
/// scrolls. Derived from the raw offset on every sampled frame, never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub border_radius_pct: f64,
    pub rotation_deg: f64,
}

impl ShapeStyle {
    pub fn css(&self) -> String {
        format!(
            "border-radius: {}%; transform: rotate({}deg);",
            self.border_radius_pct, self.rotation_deg
        )
    }
}

pub fn shape_style(scroll_y: f64) -> ShapeStyle {
    let progress = morph_progress(scroll_y);
    ShapeStyle {
        border_radius_pct: 50.0 - progress * 25.0,
        rotation_deg: progress * 15.0,
    }
}

pub fn price_badge_visible(scroll_y: f64) -> bool {
    scroll_y > PRICE_BADGE_OFFSET_PX
}

/// Passive scroll listener coalesced through requestAnimationFrame: however
/// many scroll events fire, `on_sample` runs at most once per frame with the
/// current offset.
pub struct ScrollSampler {
    scroll_callback: Closure<dyn FnMut()>,
    _frame_callback: Rc<Closure<dyn FnMut()>>,
}

impl ScrollSampler {
    pub fn start(on_sample: impl Fn(f64) + 'static) -> Option<ScrollSampler> {
        let window = web_sys::window()?;
        let ticking = Rc::new(Cell::new(false));

        let frame_callback = {
            let ticking = ticking.clone();
            let window = window.clone();
            Rc::new(Closure::wrap(Box::new(move || {
                on_sample(window.scroll_y().unwrap_or(0.0));
                ticking.set(false);
            }) as Box<dyn FnMut()>))
        };

        let scroll_callback = {
            let window = window.clone();
            let frame_callback = frame_callback.clone();
            Closure::wrap(Box::new(move || {
                if !ticking.get() {
                    ticking.set(true);
                    let _ = window
                        .request_animation_frame((*frame_callback).as_ref().unchecked_ref());
                }
            }) as Box<dyn FnMut()>)
        };

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                scroll_callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;

        Some(ScrollSampler {
            scroll_callback,
            _frame_callback: frame_callback,
        })
    }

    pub fn stop(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.scroll_callback.as_ref().unchecked_ref(),
            );
        }
    }
}
