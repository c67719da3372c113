use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Privacy)]
pub fn privacy() -> Html {
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

    html! {
        <div class="legal-content">
            <h1>{"Политика обработки персональных данных"}</h1>

            <section>
                <h2>{"1. Какие данные мы собираем"}</h2>
                <p>{"Через форму обратной связи на сайте мы получаем:"}</p>
                <ul>
                    <li>{"имя, указанное в заявке;"}</li>
                    <li>{"контакт для связи (телефон или Telegram);"}</li>
                    <li>{"комментарий к задаче, если вы его оставили."}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. Зачем мы их обрабатываем"}</h2>
                <p>{"Данные используются только для ответа на вашу заявку: мы связываемся с вами, уточняем задачу и готовим предложение. Рассылок и передачи данных третьим лицам для рекламы нет."}</p>
            </section>

            <section>
                <h2>{"3. Защита от автоматических отправок"}</h2>
                <p>{"Форма защищена сервисом Yandex SmartCaptcha. Сервис обрабатывает технические данные браузера для отличия человека от робота в соответствии с собственной политикой конфиденциальности."}</p>
            </section>

            <section>
                <h2>{"4. Хранение"}</h2>
                <p>{"Заявки хранятся во внутренней CRM до завершения работы по обращению, после чего удаляются по запросу или по истечении года с момента последнего контакта."}</p>
            </section>

            <section>
                <h2>{"5. Ваши права"}</h2>
                <ul>
                    <li>{"узнать, какие данные о вас хранятся;"}</li>
                    <li>{"потребовать их исправления или удаления;"}</li>
                    <li>{"отозвать согласие на обработку в любой момент."}</li>
                </ul>
            </section>

            <section>
                <h2>{"6. Контакты"}</h2>
                <p>{"По вопросам обработки данных пишите в Telegram "}
                    <a href="https://t.me/hitreno" target="_blank" rel="noopener noreferrer">{"@hitreno"}</a>
                    {" или звоните по номеру +7 988 161-60-17."}
                </p>
            </section>

            <div class="legal-links">
                <Link<Route> to={Route::Home}>{"На главную"}</Link<Route>>
            </div>

            <style>
                {r#"
                .legal-content {
                    max-width: 760px;
                    margin: 0 auto;
                    padding: 7rem 1.5rem 4rem;
                    color: #aab6cc;
                }

                .legal-content h1 {
                    margin: 0 0 2rem;
                    font-size: 1.9rem;
                    color: #f2f6ff;
                }

                .legal-content h2 {
                    margin: 0 0 1rem;
                    font-size: 1.2rem;
                    color: #5eb0ff;
                }

                .legal-content section {
                    margin-bottom: 2.2rem;
                }

                .legal-content p,
                .legal-content li {
                    line-height: 1.6;
                }

                .legal-content ul {
                    padding-left: 1.4rem;
                }

                .legal-content a {
                    color: #5eb0ff;
                }

                .legal-links {
                    margin-top: 3rem;
                }

                .legal-links a {
                    color: #5eb0ff;
                    text-decoration: none;
                }

                .legal-links a:hover {
                    text-decoration: underline;
                }
                "#}
            </style>
        </div>
    }
}
