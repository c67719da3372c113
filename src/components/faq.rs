//! FAQ accordion. One item open at a time; the open answer gets a measured
//! `max-height` so the stylesheet can animate the collapse.

use gloo_events::EventListener;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

const FAQ_ENTRIES: &[(&str, &str)] = &[
    (
        "Сколько времени занимает съёмка объекта?",
        "Типовой выезд занимает от двух до четырёх часов в зависимости от площади \
         и задач. Обработанные материалы мы передаём в течение двух рабочих дней, \
         срочная обработка обсуждается отдельно.",
    ),
    (
        "Нужно ли согласовывать полёты?",
        "Все согласования с органами ОрВД и администрацией мы берём на себя. От вас \
         нужен только адрес объекта и желаемые даты — остальное наша работа.",
    ),
    (
        "В каком виде вы передаёте результаты?",
        "Фото в RAW и JPEG, видео в 4K, панорамы 360°, а для геодезических задач — \
         ортофотопланы и облака точек в форматах под вашу ГИС. Материалы выкладываем \
         в облако и храним копию не меньше года.",
    ),
    (
        "Работаете ли вы за пределами города?",
        "Да, выезжаем по всему краю и в соседние регионы. Транспортные расходы \
         считаются отдельно и фиксируются в смете до начала работ.",
    ),
    (
        "Сколько стоит выезд?",
        "Стоимость зависит от объекта и состава работ. Оставьте заявку в форме ниже — \
         посчитаем смету и пришлём её в течение дня.",
    ),
];

/// Which item stays open after pressing item `pressed`.
pub fn toggle_target(open: Option<usize>, pressed: usize) -> Option<usize> {
    if open == Some(pressed) {
        None
    } else {
        Some(pressed)
    }
}

fn apply_measured_height(content_ref: &NodeRef) {
    if let Some(content) = content_ref.cast::<HtmlElement>() {
        let height = format!("{}px", content.scroll_height());
        let _ = content.style().set_property("max-height", &height);
    }
}

fn clear_measured_height(content_ref: &NodeRef) {
    if let Some(content) = content_ref.cast::<HtmlElement>() {
        let _ = content.style().remove_property("max-height");
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let content_ref = use_node_ref();

    {
        let content_ref = content_ref.clone();
        use_effect_with_deps(
            move |open| {
                let listener = if *open {
                    apply_measured_height(&content_ref);
                    // Viewport changes re-wrap the text, so re-measure while open.
                    let content_ref = content_ref.clone();
                    web_sys::window().map(|window| {
                        EventListener::new(window.as_ref(), "resize", move |_| {
                            apply_measured_height(&content_ref);
                        })
                    })
                } else {
                    clear_measured_height(&content_ref);
                    None
                };
                move || drop(listener)
            },
            props.open,
        );
    }

    html! {
        <div class={classes!("faq__item", props.open.then(|| "is-open"))}>
            <button
                class="faq__toggle"
                data-faq-toggle=""
                type="button"
                aria-expanded={if props.open { "true" } else { "false" }}
                onclick={props.on_toggle.clone()}
            >
                <span class="faq__question">{props.question}</span>
                <span class="faq__icon">{ if props.open { "−" } else { "+" } }</span>
            </button>
            <div
                class={classes!("faq__content", props.open.then(|| "is-open"))}
                data-faq-content=""
                aria-hidden={if props.open { "false" } else { "true" }}
                ref={content_ref}
            >
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <div class="faq">
            {
                for FAQ_ENTRIES.iter().enumerate().map(|(index, (question, answer))| {
                    let on_toggle = {
                        let open = open.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            open.set(toggle_target(*open, index));
                        })
                    };
                    html! {
                        <FaqItem
                            key={index}
                            question={*question}
                            answer={*answer}
                            open={*open == Some(index)}
                            on_toggle={on_toggle}
                        />
                    }
                })
            }
            <style>
                {r#"
                .faq__item {
                    background: rgba(19, 28, 46, 0.85);
                    border: 1px solid rgba(255, 255, 255, 0.07);
                    border-radius: 12px;
                    margin-bottom: 0.75rem;
                    overflow: hidden;
                    transition: border-color 0.3s ease;
                }

                .faq__item:hover {
                    border-color: rgba(94, 176, 255, 0.35);
                }

                .faq__toggle {
                    width: 100%;
                    padding: 1.1rem 1.4rem;
                    background: none;
                    border: none;
                    color: #f2f6ff;
                    font-size: 1.05rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 16px;
                }

                .faq__icon {
                    font-size: 1.4rem;
                    color: #5eb0ff;
                    transition: transform 0.3s ease;
                }

                .faq__item.is-open .faq__icon {
                    transform: rotate(180deg);
                }

                .faq__content {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.45s ease;
                }

                .faq__content p {
                    margin: 0;
                    padding: 0 1.4rem 1.2rem;
                    color: #aab6cc;
                    line-height: 1.6;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::toggle_target;

    #[test]
    fn pressing_a_closed_item_opens_it() {
        assert_eq!(toggle_target(None, 2), Some(2));
    }

    #[test]
    fn pressing_another_item_switches_to_it() {
        assert_eq!(toggle_target(Some(0), 3), Some(3));
    }

    #[test]
    fn pressing_the_open_item_closes_it() {
        assert_eq!(toggle_target(Some(1), 1), None);
    }
}
