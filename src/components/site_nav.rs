//! Site navigation: markup plus the controller that relocates the panel
//! between the header and the body at the desktop breakpoint and runs the
//! mobile drawer (toggle, backdrop, outside-pointer dismissal, Escape).
//!
//! The controller owns a [`NavState`] and applies every [`NavSnapshot`] it
//! produces onto the document. Yew renders this markup once and never
//! patches it again, so the controller is free to move the nav element
//! around.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{
    Comment, Element, Event, HtmlElement, KeyboardEvent, MediaQueryList, MediaQueryListEvent, Node,
};
use yew::prelude::*;

use crate::components::nav_state::{NavSnapshot, NavState, PanelAttachment, ViewportMode};
use crate::config;

/// Media-query subscription the controller depends on but does not implement.
pub struct BreakpointWatcher {
    query: MediaQueryList,
    _listener: Option<EventListener>,
}

impl BreakpointWatcher {
    pub fn new(query: &str) -> Option<Self> {
        let query = web_sys::window()?.match_media(query).ok()??;
        Some(BreakpointWatcher {
            query,
            _listener: None,
        })
    }

    pub fn matches(&self) -> bool {
        self.query.matches()
    }

    pub fn on_change<F: FnMut(bool) + 'static>(&mut self, mut handler: F) {
        let listener = EventListener::new(self.query.as_ref(), "change", move |event| {
            if let Some(event) = event.dyn_ref::<MediaQueryListEvent>() {
                handler(event.matches());
            }
        });
        self._listener = Some(listener);
    }
}

struct NavController {
    state: NavState,
    nav: HtmlElement,
    toggle: HtmlElement,
    backdrop: Element,
    placeholder: Comment,
    /// Outside-pointer dismissal pair (click + touchstart), present iff the
    /// drawer is open on mobile. Dropping detaches.
    outside: Option<[EventListener; 2]>,
    /// Pending arm request; dropping cancels the frame callback.
    arm_frame: Option<AnimationFrame>,
}

/// Keeps the controller and its document-level listeners alive for the
/// lifetime of the nav markup.
pub struct NavHandles {
    _ctrl: Rc<RefCell<NavController>>,
    _watcher: BreakpointWatcher,
    _listeners: Vec<EventListener>,
}

impl NavController {
    /// Binds to the rendered markup. Returns `None` (and leaves the page
    /// inert) when any required piece is missing.
    fn mount(nav_ref: &NodeRef, toggle_ref: &NodeRef) -> Option<NavHandles> {
        let nav = nav_ref.cast::<HtmlElement>()?;
        let toggle = toggle_ref.cast::<HtmlElement>()?;
        let document = web_sys::window()?.document()?;
        let body = document.body()?;
        nav.query_selector("[data-nav-panel]").ok()??;

        // The comment node marks the panel's original position so desktop
        // relocation can restore the exact sibling order.
        let placeholder = document.create_comment("site-nav-placeholder");
        let parent = nav.parent_node()?;
        parent
            .insert_before(placeholder.as_ref(), nav.next_sibling().as_ref())
            .ok()?;

        let backdrop = match document.query_selector("[data-nav-backdrop]").ok()? {
            Some(found) => found,
            None => {
                let div = document.create_element("div").ok()?;
                div.set_class_name("site-nav__backdrop");
                div.set_attribute("data-nav-backdrop", "").ok()?;
                div
            }
        };
        let body_node: &Node = body.as_ref();
        if backdrop.parent_node().as_ref() != Some(body_node) {
            body_node.append_child(backdrop.as_ref()).ok()?;
        }

        let mut watcher = BreakpointWatcher::new(config::DESKTOP_MEDIA_QUERY)?;
        let mode = ViewportMode::from_matches(watcher.matches());

        let ctrl = Rc::new(RefCell::new(NavController {
            state: NavState::new(mode),
            nav,
            toggle,
            backdrop,
            placeholder,
            outside: None,
            arm_frame: None,
        }));

        // First paint: park the panel and write the full closed-state
        // projection so markup and state agree from the start.
        transition(&ctrl, |state| Some(state.on_breakpoint_change(mode)));

        {
            let weak = Rc::downgrade(&ctrl);
            watcher.on_change(move |matches| {
                if let Some(ctrl) = weak.upgrade() {
                    let mode = ViewportMode::from_matches(matches);
                    transition(&ctrl, |state| Some(state.on_breakpoint_change(mode)));
                }
            });
        }

        let mut listeners = Vec::new();

        {
            let weak = Rc::downgrade(&ctrl);
            let target = ctrl.borrow().toggle.clone();
            listeners.push(EventListener::new(target.as_ref(), "click", move |_| {
                if let Some(ctrl) = weak.upgrade() {
                    transition(&ctrl, |state| state.on_toggle_press());
                }
            }));
        }

        {
            let weak = Rc::downgrade(&ctrl);
            let target = ctrl.borrow().backdrop.clone();
            listeners.push(EventListener::new(target.as_ref(), "click", move |_| {
                if let Some(ctrl) = weak.upgrade() {
                    transition(&ctrl, |state| {
                        (state.mode() == ViewportMode::Mobile).then(|| state.close(false))
                    });
                }
            }));
        }

        // Following a panel link dismisses the drawer.
        {
            let weak = Rc::downgrade(&ctrl);
            let target = ctrl.borrow().nav.clone();
            listeners.push(EventListener::new(target.as_ref(), "click", move |event| {
                let on_link = event
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .and_then(|el| el.closest("[data-nav-link]").ok().flatten())
                    .is_some();
                if !on_link {
                    return;
                }
                if let Some(ctrl) = weak.upgrade() {
                    transition(&ctrl, |state| {
                        (state.mode() == ViewportMode::Mobile).then(|| state.close(false))
                    });
                }
            }));
        }

        {
            let weak = Rc::downgrade(&ctrl);
            listeners.push(EventListener::new(document.as_ref(), "keydown", move |event| {
                let escape = event
                    .dyn_ref::<KeyboardEvent>()
                    .map_or(false, |e| e.key() == "Escape");
                if !escape {
                    return;
                }
                if let Some(ctrl) = weak.upgrade() {
                    transition(&ctrl, |state| state.on_escape_key());
                }
            }));
        }

        Some(NavHandles {
            _ctrl: ctrl,
            _watcher: watcher,
            _listeners: listeners,
        })
    }

    /// Writes a snapshot onto the document. The snapshot is the whole truth:
    /// classes, ARIA, scroll lock and listener presence all follow it.
    fn project(&mut self, snap: &NavSnapshot) {
        self.relocate(snap.attachment);
        toggle_class(&self.nav, "is-open", snap.panel_open);
        toggle_class(&self.toggle, "is-active", snap.toggle_active);
        toggle_class(&self.backdrop, "is-active", snap.backdrop_active);
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            toggle_class(&body, "menu-open", snap.scroll_locked);
        }
        let _ = self
            .toggle
            .set_attribute("aria-expanded", bool_attr(snap.aria_expanded));
        match snap.aria_hidden {
            Some(hidden) => {
                let _ = self.nav.set_attribute("aria-hidden", bool_attr(hidden));
            }
            // Desktop: the panel is always visible, so the attribute goes
            // away entirely rather than reading "false".
            None => {
                let _ = self.nav.remove_attribute("aria-hidden");
            }
        }
        if !snap.outside_listener {
            self.outside = None;
            self.arm_frame = None;
        }
    }

    fn relocate(&self, attachment: PanelAttachment) {
        let nav: &Node = self.nav.as_ref();
        match attachment {
            PanelAttachment::InFlowAnchor => {
                if let Some(parent) = self.placeholder.parent_node() {
                    if nav.parent_node().as_ref() != Some(&parent) {
                        let _ = parent.insert_before(nav, Some(self.placeholder.as_ref()));
                    }
                }
            }
            PanelAttachment::OverlayRoot => {
                if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
                    let body_node: &Node = body.as_ref();
                    if nav.parent_node().as_ref() != Some(body_node) {
                        let _ = body_node.append_child(nav);
                    }
                }
            }
        }
    }
}

fn transition<F>(ctrl: &Rc<RefCell<NavController>>, op: F)
where
    F: FnOnce(&mut NavState) -> Option<NavSnapshot>,
{
    let snap = {
        let mut c = ctrl.borrow_mut();
        match op(&mut c.state) {
            Some(snap) => {
                c.project(&snap);
                Some(snap)
            }
            None => None,
        }
    };
    if let Some(snap) = snap {
        if snap.outside_listener {
            schedule_arm(ctrl);
        }
        if snap.focus_toggle {
            let toggle = ctrl.borrow().toggle.clone();
            let _ = toggle.focus();
        }
    }
}

/// Arms the outside-pointer listener one frame late so the tap that opened
/// the drawer is not also the tap that closes it.
fn schedule_arm(ctrl: &Rc<RefCell<NavController>>) {
    let mut c = ctrl.borrow_mut();
    if c.outside.is_some() || c.arm_frame.is_some() {
        return;
    }
    let weak = Rc::downgrade(ctrl);
    c.arm_frame = Some(request_animation_frame(move |_| {
        if let Some(ctrl) = weak.upgrade() {
            arm_outside_listener(&ctrl);
        }
    }));
}

fn arm_outside_listener(ctrl: &Rc<RefCell<NavController>>) {
    let mut c = ctrl.borrow_mut();
    c.arm_frame = None;
    // The drawer may have closed again before this frame fired.
    if c.outside.is_some() || !c.state.is_open() || c.state.mode() != ViewportMode::Mobile {
        return;
    }
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    let pair = ["click", "touchstart"].map(|kind| {
        let weak = Rc::downgrade(ctrl);
        let options = EventListenerOptions::run_in_capture_phase();
        EventListener::new_with_options(document.as_ref(), kind, options, move |event| {
            if let Some(ctrl) = weak.upgrade() {
                dismiss_on_outside_pointer(&ctrl, event);
            }
        })
    });
    c.outside = Some(pair);
}

fn dismiss_on_outside_pointer(ctrl: &Rc<RefCell<NavController>>, event: &Event) {
    let outside = {
        let c = ctrl.borrow();
        match event.target().and_then(|t| t.dyn_into::<Node>().ok()) {
            Some(target) => {
                !c.nav.contains(Some(&target)) && !c.toggle.contains(Some(&target))
            }
            None => false,
        }
    };
    transition(ctrl, |state| state.on_outside_pointer(outside));
}

fn toggle_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[function_component(SiteNav)]
pub fn site_nav() -> Html {
    let nav_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    {
        let nav_ref = nav_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_effect_with_deps(
            move |_| {
                let handles = NavController::mount(&nav_ref, &toggle_ref);
                move || drop(handles)
            },
            (),
        );
    }

    html! {
        <>
            <nav class="site-nav" data-nav="" aria-label="Основная навигация" ref={nav_ref}>
                <div class="site-nav__panel" data-nav-panel="">
                    <a class="nav-link" data-nav-link="" href="#services">{"Услуги"}</a>
                    <a class="nav-link" data-nav-link="" href="#workflow">{"Как мы работаем"}</a>
                    <a class="nav-link" data-nav-link="" href="#faq">{"Вопросы"}</a>
                    <a class="nav-link" data-nav-link="" href="#contact">{"Контакты"}</a>
                </div>
            </nav>
            <button
                class="nav-toggle"
                data-nav-toggle=""
                type="button"
                aria-expanded="false"
                aria-label="Открыть меню"
                ref={toggle_ref}
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
        </>
    }
}
