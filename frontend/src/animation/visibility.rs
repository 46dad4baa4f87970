use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// One-shot latch: flips to visible the first time enough of a region is on
/// screen, and stays there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityGate {
    threshold: f64,
    visible: bool,
}

impl VisibilityGate {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one intersection report. Returns true only on the transition
    /// from unseen to visible.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.visible || !is_intersecting {
            return false;
        }
        // threshold 0 fires on any intersection, like the browser does
        if ratio >= self.threshold || self.threshold == 0.0 {
            self.visible = true;
            return true;
        }
        false
    }
}

#[derive(Debug, Error)]
pub enum ObserverError {
    #[error("no window available")]
    NoWindow,
    #[error("IntersectionObserver is not supported here")]
    Unsupported,
    #[error("IntersectionObserver failed: {0}")]
    Js(String),
}

impl From<JsValue> for ObserverError {
    fn from(value: JsValue) -> Self {
        ObserverError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(
    element: &Element,
    threshold: f64,
    on_visible: impl Fn() + 'static,
) -> Result<ObserverHandle, ObserverError> {
    let window = web_sys::window().ok_or(ObserverError::NoWindow)?;
    if !Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))? {
        return Err(ObserverError::Unsupported);
    }

    let mut gate = VisibilityGate::new(threshold);
    let callback: EntriesCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
        if gate.is_visible() {
            return;
        }
        for entry in entries.iter() {
            let entry = entry.unchecked_into::<IntersectionObserverEntry>();
            if gate.observe(entry.is_intersecting(), entry.intersection_ratio()) {
                // trigger once
                observer.disconnect();
                on_visible();
                break;
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(ObserverHandle {
        observer,
        _callback: callback,
    })
}

/// Reports whether the region behind `node` has been seen yet.
///
/// Starts false and becomes true exactly once. If the browser cannot observe
/// intersections the region is treated as visible straight away, so the
/// figures still land on their final values.
#[hook]
pub fn use_visibility_gate(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state(|| false);
    let handle: Rc<RefCell<Option<ObserverHandle>>> = use_mut_ref(|| None);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let setter = visible.setter();
                match node.cast::<Element>() {
                    Some(element) => {
                        let on_visible = {
                            let setter = setter.clone();
                            move || {
                                info!("Region entered the viewport");
                                setter.set(true);
                            }
                        };
                        match observe_once(&element, threshold, on_visible) {
                            Ok(observer) => *handle.borrow_mut() = Some(observer),
                            Err(e) => {
                                warn!("Visibility observation unavailable, revealing now: {}", e);
                                setter.set(true);
                            }
                        }
                    }
                    None => warn!("Visibility gate has no element to observe"),
                }

                move || {
                    handle.borrow_mut().take();
                }
            },
            (),
        );
    }

    *visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unseen() {
        let gate = VisibilityGate::new(0.1);
        assert!(!gate.is_visible());
    }

    #[test]
    fn test_fires_once_on_threshold() {
        let mut gate = VisibilityGate::new(0.1);
        assert!(!gate.observe(true, 0.05));
        assert!(!gate.is_visible());

        assert!(gate.observe(true, 0.1));
        assert!(gate.is_visible());

        // later reports never fire again
        assert!(!gate.observe(true, 0.9));
        assert!(gate.is_visible());
    }

    #[test]
    fn test_never_closes_again() {
        let mut gate = VisibilityGate::new(0.1);
        gate.observe(true, 0.5);
        assert!(!gate.observe(false, 0.0));
        assert!(gate.is_visible());
    }

    #[test]
    fn test_ignores_non_intersecting_reports() {
        let mut gate = VisibilityGate::new(0.1);
        for _ in 0..10 {
            assert!(!gate.observe(false, 0.0));
        }
        assert!(!gate.is_visible());
    }

    #[test]
    fn test_zero_threshold_fires_on_any_intersection() {
        let mut gate = VisibilityGate::new(0.0);
        assert!(gate.observe(true, 0.0));
    }

    #[test]
    fn test_gate_that_never_opens_keeps_reveal_idle() {
        use crate::animation::reveal::{RevealAnimator, RevealPhase, RevealSpec};

        let mut gate = VisibilityGate::new(0.1);
        let mut animator = RevealAnimator::new(RevealSpec::new(400, 100.0));
        for ratio in [0.0, 0.02, 0.05, 0.09] {
            if gate.observe(true, ratio) {
                animator.arm();
            }
            animator.tick();
        }
        assert_eq!(animator.phase(), RevealPhase::Idle);
        assert_eq!(animator.frame().value, 0);
    }
}
