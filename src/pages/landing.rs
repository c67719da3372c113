use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::faq::Faq;
use crate::components::scroll_spy::ScrollSpy;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Highlight the nav link of the section in view while this page is up.
    {
        use_effect_with_deps(
            move |_| {
                let spy = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| ScrollSpy::observe(&document));
                move || drop(spy)
            },
            (),
        );
    }

    let year = Local::now().year();

    html! {
        <div class="landing-page">
            <section class="hero">
                <div class="hero-content">
                    <h1>{"Аэросъёмка и картография промышленных объектов"}</h1>
                    <p class="hero-subtitle">
                        {"Ортофотопланы, 3D-модели местности и видео в 4K. Снимаем с дронов, обрабатываем и передаём готовые материалы за считанные дни."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#contact" class="hero-cta">{"Оставить заявку"}</a>
                        <a href="#services" class="hero-link">{"Что мы делаем"}</a>
                    </div>
                </div>
            </section>

            <section id="services" data-section="" class="services">
                <h2>{"Услуги"}</h2>
                <div class="services-grid">
                    <div class="service-card">
                        <h3>{"Ортофотопланы и карты высот"}</h3>
                        <p>{"Геопривязанные планы территории для проектирования, кадастра и контроля земляных работ."}</p>
                    </div>
                    <div class="service-card">
                        <h3>{"3D-модели объектов и местности"}</h3>
                        <p>{"Текстурированные модели зданий, карьеров и площадок по фотограмметрии."}</p>
                    </div>
                    <div class="service-card">
                        <h3>{"Аэровидеосъёмка в 4K"}</h3>
                        <p>{"Презентационные ролики и рабочие облёты объектов, исходники отдаём в RAW."}</p>
                    </div>
                    <div class="service-card">
                        <h3>{"Мониторинг строительства"}</h3>
                        <p>{"Регулярные облёты площадки с фиксацией динамики работ по неделям."}</p>
                    </div>
                </div>
            </section>

            <section id="workflow" data-section="" class="workflow">
                <h2>{"Как мы работаем"}</h2>
                <div class="steps-grid">
                    <div class="step">
                        <span class="step-number">{"1"}</span>
                        <h3>{"Заявка"}</h3>
                        <p>{"Вы описываете задачу, мы уточняем детали и считаем стоимость в течение дня."}</p>
                    </div>
                    <div class="step">
                        <span class="step-number">{"2"}</span>
                        <h3>{"Согласование"}</h3>
                        <p>{"Берём на себя разрешения на полёты и согласование с собственником объекта."}</p>
                    </div>
                    <div class="step">
                        <span class="step-number">{"3"}</span>
                        <h3>{"Съёмка"}</h3>
                        <p>{"Выезжаем на объект в согласованное окно по погоде и отрабатываем маршруты."}</p>
                    </div>
                    <div class="step">
                        <span class="step-number">{"4"}</span>
                        <h3>{"Материалы"}</h3>
                        <p>{"Обрабатываем данные и передаём результат удобным способом вместе с исходниками."}</p>
                    </div>
                </div>
            </section>

            <section id="faq" data-section="" class="faq-section">
                <h2>{"Вопросы и ответы"}</h2>
                <Faq />
            </section>

            <section id="contact" data-section="" class="contact">
                <div class="contact-inner">
                    <div class="contact-text">
                        <h2>{"Обсудим задачу?"}</h2>
                        <p>{"Оставьте контакты, и мы свяжемся с вами в течение дня. Можно коротко: что за объект и что нужно получить."}</p>
                        <p class="contact-direct">
                            {"Или напрямую: "}
                            <a href="tel:+79881616017">{"+7 988 161-60-17"}</a>
                            {" / "}
                            <a href="https://t.me/hitreno" target="_blank" rel="noopener noreferrer">{"@hitreno"}</a>
                        </p>
                    </div>
                    <ContactForm />
                </div>
            </section>

            <footer class="footer">
                <p>{format!("© {} Ракурс. Аэросъёмка и геодезия.", year)}</p>
            </footer>

            <style>
                {r#"
                .landing-page {
                    padding-top: 64px;
                }

                .landing-page h2 {
                    margin: 0 0 2rem;
                    font-size: 2rem;
                    color: #f2f6ff;
                }

                .landing-page section {
                    padding: 5rem 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    scroll-margin-top: 72px;
                }

                .hero {
                    min-height: 70vh;
                    display: flex;
                    align-items: center;
                }

                .hero-content h1 {
                    margin: 0 0 1.2rem;
                    font-size: 2.8rem;
                    line-height: 1.15;
                    color: #f2f6ff;
                    max-width: 720px;
                }

                .hero-subtitle {
                    margin: 0 0 2rem;
                    font-size: 1.15rem;
                    line-height: 1.6;
                    color: #aab6cc;
                    max-width: 640px;
                }

                .hero-cta-group {
                    display: flex;
                    gap: 1.4rem;
                    align-items: center;
                    flex-wrap: wrap;
                }

                .hero-cta {
                    padding: 0.9rem 1.8rem;
                    background: #2f7fe0;
                    border-radius: 10px;
                    color: #fff;
                    font-weight: 600;
                    text-decoration: none;
                    transition: background 0.2s ease;
                }

                .hero-cta:hover {
                    background: #3f8ff0;
                }

                .hero-link {
                    color: #5eb0ff;
                    text-decoration: none;
                }

                .hero-link:hover {
                    text-decoration: underline;
                }

                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.2rem;
                }

                .service-card {
                    padding: 1.5rem;
                    background: rgba(19, 28, 46, 0.85);
                    border: 1px solid rgba(255, 255, 255, 0.07);
                    border-radius: 14px;
                }

                .service-card h3 {
                    margin: 0 0 0.6rem;
                    font-size: 1.1rem;
                    color: #f2f6ff;
                }

                .service-card p {
                    margin: 0;
                    color: #aab6cc;
                    line-height: 1.55;
                }

                .steps-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.2rem;
                }

                .step {
                    padding: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.07);
                    border-radius: 14px;
                }

                .step-number {
                    display: inline-flex;
                    width: 2rem;
                    height: 2rem;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: #2f7fe0;
                    color: #fff;
                    font-weight: 600;
                    margin-bottom: 0.8rem;
                }

                .step h3 {
                    margin: 0 0 0.5rem;
                    color: #f2f6ff;
                }

                .step p {
                    margin: 0;
                    color: #aab6cc;
                    line-height: 1.55;
                }

                .contact-inner {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2.5rem;
                    align-items: start;
                }

                .contact-text p {
                    color: #aab6cc;
                    line-height: 1.6;
                    max-width: 420px;
                }

                .contact-direct a {
                    color: #5eb0ff;
                    text-decoration: none;
                }

                .contact-direct a:hover {
                    text-decoration: underline;
                }

                .footer {
                    padding: 2.5rem 2rem;
                    text-align: center;
                    color: #5c6a85;
                }

                @media (max-width: 767px) {
                    .landing-page section {
                        padding: 3.5rem 1.2rem;
                    }

                    .hero-content h1 {
                        font-size: 2rem;
                    }

                    .contact-inner {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
