//! Invisible Yandex SmartCaptcha glue. The SDK arrives via an external
//! `<script>` tag and announces itself on `window`; everything here talks to
//! it dynamically so a missing or blocked SDK degrades to an error message
//! instead of a broken page.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::channel::oneshot;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};
use web_sys::HtmlElement;

use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptchaError {
    #[error("Сервис проверки недоступен. Попробуйте позже.")]
    Unavailable,
    #[error("Проверка уже выполняется. Завершите текущую проверку.")]
    Busy,
    #[error("Не удалось запустить проверку.")]
    Launch,
}

/// One widget, at most one token request in flight.
pub struct CaptchaManager {
    rendered: Cell<bool>,
    pending: RefCell<Option<oneshot::Sender<String>>>,
}

fn smart_captcha() -> Option<JsValue> {
    let window = web_sys::window()?;
    let sdk = Reflect::get(window.as_ref(), &JsValue::from_str("smartCaptcha")).ok()?;
    if sdk.is_undefined() || sdk.is_null() {
        None
    } else {
        Some(sdk)
    }
}

fn sdk_method(sdk: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(sdk, &JsValue::from_str(name))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
}

impl CaptchaManager {
    /// Puts the widget container inside the form and renders the widget as
    /// soon as the SDK is available. The SDK script may finish loading before
    /// or after the app boots; both orders end in a rendered widget.
    pub fn install(form: &HtmlElement) -> Option<Rc<CaptchaManager>> {
        let document = web_sys::window()?.document()?;
        if document
            .get_element_by_id(config::CAPTCHA_CONTAINER_ID)
            .is_none()
        {
            let container = document.create_element("div").ok()?;
            container.set_id(config::CAPTCHA_CONTAINER_ID);
            form.append_child(&container).ok()?;
        }

        let manager = Rc::new(CaptchaManager {
            rendered: Cell::new(false),
            pending: RefCell::new(None),
        });

        if smart_captcha().is_some() {
            manager.render();
        } else {
            let window = web_sys::window()?;
            let weak = Rc::downgrade(&manager);
            let onload = Closure::wrap(Box::new(move || {
                if let Some(manager) = weak.upgrade() {
                    manager.render();
                }
            }) as Box<dyn FnMut()>);
            Reflect::set(
                window.as_ref(),
                &JsValue::from_str("smartCaptchaOnload"),
                onload.as_ref(),
            )
            .ok()?;
            onload.forget();
        }

        Some(manager)
    }

    fn render(self: &Rc<Self>) {
        if self.rendered.get() {
            return;
        }
        let sdk = match smart_captcha() {
            Some(sdk) => sdk,
            None => return,
        };
        let render = match sdk_method(&sdk, "render") {
            Some(render) => render,
            None => return,
        };
        // json_compatible() turns the map into a plain object; the SDK cannot
        // read options off a JS Map.
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let options = match json!({
            "sitekey": config::CAPTCHA_SITE_KEY,
            "invisible": true,
            "hideShield": true,
        })
        .serialize(&serializer)
        {
            Ok(options) => options,
            Err(_) => return,
        };

        let manager = Rc::clone(self);
        let callback = Closure::wrap(Box::new(move |token: JsValue| {
            if let Some(token) = token.as_string() {
                manager.deliver(token);
            }
        }) as Box<dyn FnMut(JsValue)>);
        if Reflect::set(&options, &JsValue::from_str("callback"), callback.as_ref()).is_err() {
            return;
        }
        callback.forget();

        if render
            .call2(
                &sdk,
                &JsValue::from_str(config::CAPTCHA_CONTAINER_ID),
                &options,
            )
            .is_ok()
        {
            self.rendered.set(true);
        }
    }

    fn deliver(&self, token: String) {
        if let Some(sender) = self.pending.borrow_mut().take() {
            let _ = sender.send(token);
        }
    }

    /// Runs the invisible challenge and resolves with the token the SDK
    /// hands to the widget callback.
    pub async fn request_token(&self) -> Result<String, CaptchaError> {
        if smart_captcha().is_none() || !self.rendered.get() {
            return Err(CaptchaError::Unavailable);
        }
        if self.pending.borrow().is_some() {
            return Err(CaptchaError::Busy);
        }

        let (sender, receiver) = oneshot::channel();
        *self.pending.borrow_mut() = Some(sender);

        if let Err(err) = self.execute() {
            *self.pending.borrow_mut() = None;
            return Err(err);
        }

        // A reset while waiting drops the sender and cancels the challenge.
        receiver.await.map_err(|_| CaptchaError::Unavailable)
    }

    fn execute(&self) -> Result<(), CaptchaError> {
        let sdk = smart_captcha().ok_or(CaptchaError::Unavailable)?;
        let execute = sdk_method(&sdk, "execute").ok_or(CaptchaError::Launch)?;
        execute
            .call0(&sdk)
            .map(|_| ())
            .map_err(|_| CaptchaError::Launch)
    }

    /// Clears any pending request and rolls the widget back so the next
    /// submission re-runs the challenge.
    pub fn reset(&self) {
        if self.rendered.get() {
            if let Some(sdk) = smart_captcha() {
                if let Some(reset) = sdk_method(&sdk, "reset") {
                    let _ = reset.call0(&sdk);
                }
            }
        }
        *self.pending.borrow_mut() = None;
    }
}
