//! Callback-request form. Submits JSON to the webhook behind the invisible
//! captcha and mirrors progress into a status overlay on top of the form.

use std::rc::Rc;

use gloo_console::error;
use gloo_net::http::Request;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::captcha::{CaptchaError, CaptchaManager};
use crate::config;
use crate::Route;

#[derive(Serialize)]
struct CallbackRequest {
    name: String,
    contact: String,
    comment: String,
    accept_terms: bool,
    captcha_token: String,
}

#[derive(Clone, PartialEq, Eq)]
enum FormStatus {
    Idle,
    Pending,
    Success,
    Error,
}

fn field_value(form: &HtmlFormElement, name: &str) -> String {
    let selector = format!("[name=\"{}\"]", name);
    let element = match form.query_selector(&selector) {
        Ok(Some(element)) => element,
        _ => return String::new(),
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value().trim().to_string();
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return area.value().trim().to_string();
    }
    String::new()
}

async fn submit_payload(manager: &CaptchaManager, mut payload: CallbackRequest) -> Result<(), String> {
    let token = manager.request_token().await.map_err(|e| e.to_string())?;
    payload.captcha_token = token;

    match Request::post(config::get_webhook_url())
        .json(&payload)
        .unwrap()
        .send()
        .await
    {
        Ok(response) => {
            if response.ok() {
                Ok(())
            } else {
                Err(format!("Request failed with status {}", response.status()))
            }
        }
        Err(e) => Err(format!("Request failed: {}", e)),
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let status = use_state(|| FormStatus::Idle);
    // Bumped on every status change so a stale auto-hide timer cannot wipe a
    // newer status.
    let epoch = use_mut_ref(|| 0u32);
    let manager = use_mut_ref(|| None::<Rc<CaptchaManager>>);
    let form_ref = use_node_ref();

    {
        let form_ref = form_ref.clone();
        let manager = manager.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(form) = form_ref.cast::<HtmlElement>() {
                    *manager.borrow_mut() = CaptchaManager::install(&form);
                }
                || ()
            },
            (),
        );
    }

    let onsubmit = {
        let status = status.clone();
        let epoch = epoch.clone();
        let manager = manager.clone();
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = match form_ref.cast::<HtmlFormElement>() {
                Some(form) => form,
                None => return,
            };
            if !form.check_validity() {
                form.report_validity();
                return;
            }

            *epoch.borrow_mut() += 1;
            status.set(FormStatus::Pending);

            let payload = CallbackRequest {
                name: field_value(&form, "name"),
                contact: field_value(&form, "contact"),
                comment: field_value(&form, "comment"),
                accept_terms: true,
                captcha_token: String::new(),
            };
            let manager = manager.borrow().clone();
            let status = status.clone();
            let epoch = epoch.clone();
            spawn_local(async move {
                let result = match manager.as_deref() {
                    Some(manager) => submit_payload(manager, payload).await,
                    None => Err(CaptchaError::Unavailable.to_string()),
                };
                match result {
                    Ok(()) => {
                        form.reset();
                        if let Some(consent) = form
                            .query_selector("[data-accept-terms]")
                            .ok()
                            .flatten()
                            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                        {
                            consent.set_checked(false);
                        }
                        *epoch.borrow_mut() += 1;
                        status.set(FormStatus::Success);

                        let guard = *epoch.borrow();
                        let status = status.clone();
                        let epoch = epoch.clone();
                        spawn_local(async move {
                            gloo_timers::future::TimeoutFuture::new(2_000).await;
                            if *epoch.borrow() == guard {
                                status.set(FormStatus::Idle);
                            }
                        });
                    }
                    Err(err) => {
                        error!("Callback form submission error:", err);
                        *epoch.borrow_mut() += 1;
                        status.set(FormStatus::Error);
                    }
                }
                if let Some(manager) = manager {
                    manager.reset();
                }
            });
        })
    };

    // Touching the form dismisses a finished status; a pending one stays put.
    let clear_stale = {
        let status = status.clone();
        let epoch = epoch.clone();
        move || match *status {
            FormStatus::Success | FormStatus::Error => {
                *epoch.borrow_mut() += 1;
                status.set(FormStatus::Idle);
            }
            _ => {}
        }
    };
    let oninput = {
        let clear_stale = clear_stale.clone();
        Callback::from(move |_: InputEvent| clear_stale())
    };
    let onfocusin = Callback::from(move |_: FocusEvent| clear_stale());

    let pending = *status == FormStatus::Pending;
    let form_class = classes!(
        "contact-form",
        (*status != FormStatus::Idle).then(|| "contact-form--status"),
        match *status {
            FormStatus::Pending => Some("contact-form--status-pending"),
            FormStatus::Success => Some("contact-form--status-success"),
            FormStatus::Error => Some("contact-form--status-error"),
            FormStatus::Idle => None,
        }
    );

    let overlay = match *status {
        FormStatus::Idle => html! {},
        FormStatus::Pending => html! {
            <div class="contact-form__status" data-form-status="">
                <p>{"Отправляем заявку…"}</p>
            </div>
        },
        FormStatus::Success => html! {
            <div class="contact-form__status" data-form-status="">
                <p>{"Заявка отправлена! Свяжемся в течение дня."}</p>
            </div>
        },
        FormStatus::Error => html! {
            <div class="contact-form__status" data-form-status="">
                <p>
                    {"К сожалению форма на обслуживании. Свяжитесь пожалуйста по номеру +79881616017 или напишите в телеграм "}
                    <a href="https://t.me/hitreno" target="_blank" rel="noopener noreferrer">{"@hitreno"}</a>
                </p>
            </div>
        },
    };

    html! {
        <form
            class={form_class}
            data-callback-form=""
            ref={form_ref}
            onsubmit={onsubmit}
            oninput={oninput}
            onfocusin={onfocusin}
        >
            <div class="contact-form__field">
                <label for="cf-name">{"Имя"}</label>
                <input id="cf-name" name="name" type="text" placeholder="Как к вам обращаться" required={true} />
            </div>
            <div class="contact-form__field">
                <label for="cf-contact">{"Телефон или Telegram"}</label>
                <input id="cf-contact" name="contact" type="text" placeholder="+7 900 000-00-00 или @nickname" required={true} />
            </div>
            <div class="contact-form__field">
                <label for="cf-comment">{"Комментарий"}</label>
                <textarea id="cf-comment" name="comment" rows="4" placeholder="Коротко о задаче: объект, сроки, что нужно получить"></textarea>
            </div>
            <label class="contact-form__consent">
                <input type="checkbox" data-accept-terms="" required={true} />
                <span>
                    {"Соглашаюсь с "}
                    <Link<Route> to={Route::Privacy}>{"политикой обработки персональных данных"}</Link<Route>>
                </span>
            </label>
            <button class="contact-form__submit" type="submit" disabled={pending} aria-busy={if pending { "true" } else { "false" }}>
                {"Отправить заявку"}
            </button>
            { overlay }
            <style>
                {r#"
                .contact-form {
                    position: relative;
                    display: grid;
                    gap: 1.1rem;
                    max-width: 520px;
                    padding: 1.8rem;
                    background: rgba(19, 28, 46, 0.85);
                    border: 1px solid rgba(255, 255, 255, 0.07);
                    border-radius: 14px;
                }

                .contact-form__field {
                    display: grid;
                    gap: 0.4rem;
                }

                .contact-form__field label {
                    font-size: 0.9rem;
                    color: #aab6cc;
                }

                .contact-form__field input,
                .contact-form__field textarea {
                    padding: 0.7rem 0.9rem;
                    background: rgba(10, 16, 28, 0.8);
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    border-radius: 8px;
                    color: #f2f6ff;
                    font: inherit;
                    resize: vertical;
                }

                .contact-form__field input:focus,
                .contact-form__field textarea:focus {
                    outline: none;
                    border-color: #5eb0ff;
                }

                .contact-form__consent {
                    display: flex;
                    gap: 0.6rem;
                    align-items: flex-start;
                    font-size: 0.85rem;
                    color: #aab6cc;
                }

                .contact-form__consent a {
                    color: #5eb0ff;
                }

                .contact-form__submit {
                    padding: 0.85rem 1.4rem;
                    background: #2f7fe0;
                    border: none;
                    border-radius: 10px;
                    color: #fff;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .contact-form__submit:hover {
                    background: #3f8ff0;
                }

                .contact-form__submit:disabled {
                    background: #35507a;
                    cursor: wait;
                }

                .contact-form__status {
                    position: absolute;
                    inset: 0;
                    z-index: 5;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 1.5rem;
                    border-radius: 14px;
                    background: rgba(10, 16, 28, 0.93);
                }

                .contact-form__status p {
                    margin: 0;
                    color: #f2f6ff;
                    line-height: 1.5;
                }

                .contact-form--status-error .contact-form__status p {
                    color: #ffb4ab;
                }

                .contact-form--status-error .contact-form__status a {
                    color: #5eb0ff;
                }

                .contact-form--status-success .contact-form__status p {
                    color: #9be8b2;
                }

                #smartcaptcha-container {
                    min-height: 0;
                }
                "#}
            </style>
        </form>
    }
}
