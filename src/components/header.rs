//! Fixed site header. Hides itself while scrolling down past the hero and
//! comes back as soon as the user scrolls up.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::site_nav::SiteNav;
use crate::Route;

/// Whether the header should change visibility for a scroll position.
/// `None` when the movement is too small to act on (under 8px); otherwise
/// hide iff the page is past 120px and still moving down.
pub fn hide_decision(current: f64, last: f64) -> Option<bool> {
    if (current - last).abs() <= 8.0 {
        return None;
    }
    Some(current > 120.0 && current > last)
}

fn scroll_y(window: &web_sys::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Scroll listener that batches class updates to one per animation frame.
fn wire_hide_on_scroll(header_ref: &NodeRef) -> Option<EventListener> {
    let header = header_ref.cast::<HtmlElement>()?;
    let window = web_sys::window()?;
    let last = Rc::new(Cell::new(scroll_y(&window)));
    let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

    let target = window.clone();
    let listener = EventListener::new(target.as_ref(), "scroll", move |_| {
        if frame.borrow().is_some() {
            return;
        }
        let header = header.clone();
        let last = last.clone();
        let window = window.clone();
        let slot = frame.clone();
        let handle = request_animation_frame(move |_| {
            slot.borrow_mut().take();
            let current = scroll_y(&window);
            if let Some(hide) = hide_decision(current, last.get()) {
                let _ = header.class_list().toggle_with_force("is-hidden", hide);
                last.set(current);
            }
        });
        *frame.borrow_mut() = Some(handle);
    });
    Some(listener)
}

#[function_component(Header)]
pub fn header() -> Html {
    let header_ref = use_node_ref();

    {
        let header_ref = header_ref.clone();
        use_effect_with_deps(
            move |_| {
                let listener = wire_hide_on_scroll(&header_ref);
                move || drop(listener)
            },
            (),
        );
    }

    html! {
        <header class="site-header" data-header="" ref={header_ref}>
            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 70;
                        background: rgba(10, 16, 28, 0.92);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.06);
                        transform: translateY(0);
                        transition: transform 0.3s ease;
                    }
                    .site-header.is-hidden {
                        transform: translateY(-100%);
                    }
                    .site-header__inner {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 0 20px;
                        height: 64px;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 24px;
                    }
                    .site-logo {
                        font-size: 1.25rem;
                        font-weight: 700;
                        letter-spacing: 0.04em;
                        color: #f2f6ff;
                        text-decoration: none;
                    }
                    .site-nav__panel {
                        display: flex;
                        align-items: center;
                        gap: 28px;
                    }
                    .nav-link {
                        color: #aab6cc;
                        text-decoration: none;
                        font-size: 0.95rem;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover {
                        color: #f2f6ff;
                    }
                    .nav-link--active {
                        color: #5eb0ff;
                    }
                    .nav-toggle {
                        display: none;
                        flex-direction: column;
                        justify-content: center;
                        gap: 5px;
                        width: 42px;
                        height: 42px;
                        padding: 10px;
                        background: none;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        border-radius: 8px;
                        cursor: pointer;
                    }
                    .nav-toggle span {
                        display: block;
                        height: 2px;
                        width: 100%;
                        background: #f2f6ff;
                        transition: transform 0.25s ease, opacity 0.25s ease;
                    }
                    .nav-toggle.is-active span:nth-child(1) {
                        transform: translateY(7px) rotate(45deg);
                    }
                    .nav-toggle.is-active span:nth-child(2) {
                        opacity: 0;
                    }
                    .nav-toggle.is-active span:nth-child(3) {
                        transform: translateY(-7px) rotate(-45deg);
                    }
                    .site-nav__backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        background: rgba(5, 10, 20, 0.55);
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.25s ease;
                    }
                    .site-nav__backdrop.is-active {
                        opacity: 1;
                        pointer-events: auto;
                    }
                    body.menu-open {
                        overflow: hidden;
                    }
                    @media (max-width: 767px) {
                        .nav-toggle {
                            display: flex;
                        }
                        .site-nav {
                            position: fixed;
                            top: 0;
                            right: 0;
                            bottom: 0;
                            z-index: 60;
                            width: min(320px, 82vw);
                            background: #0d1526;
                            border-left: 1px solid rgba(255, 255, 255, 0.08);
                            padding: 84px 28px 28px;
                            transform: translateX(100%);
                            transition: transform 0.28s ease;
                        }
                        .site-nav.is-open {
                            transform: translateX(0);
                        }
                        .site-nav__panel {
                            flex-direction: column;
                            align-items: flex-start;
                            gap: 20px;
                        }
                        .nav-link {
                            font-size: 1.1rem;
                        }
                    }
                "#}
            </style>
            <div class="site-header__inner">
                <Link<Route> to={Route::Home} classes="site-logo">
                    {"Ракурс"}
                </Link<Route>>
                <SiteNav />
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::hide_decision;

    #[test]
    fn small_movements_are_ignored() {
        assert_eq!(hide_decision(128.0, 120.0), None);
        assert_eq!(hide_decision(120.0, 128.0), None);
        assert_eq!(hide_decision(50.0, 50.0), None);
    }

    #[test]
    fn hides_when_scrolling_down_past_the_top() {
        assert_eq!(hide_decision(200.0, 100.0), Some(true));
        assert_eq!(hide_decision(500.0, 480.0), Some(true));
    }

    #[test]
    fn stays_visible_near_the_top() {
        assert_eq!(hide_decision(100.0, 80.0), Some(false));
        // Exactly at the threshold still counts as the top.
        assert_eq!(hide_decision(120.0, 90.0), Some(false));
    }

    #[test]
    fn reappears_on_any_upward_scroll() {
        assert_eq!(hide_decision(300.0, 400.0), Some(false));
        assert_eq!(hide_decision(121.0, 200.0), Some(false));
    }
}
