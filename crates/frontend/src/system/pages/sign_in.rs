use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use crate::shared::config::use_config;
use crate::system::auth::{api, validation};

#[component]
pub fn SignInPage() -> impl IntoView {
    let config = use_config();
    let query = use_query_map();

    // После регистрации почта приходит в адресе
    let (email, set_email) = signal(query.with_untracked(|q| q.get("email").unwrap_or_default()));
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (sent_to, set_sent_to) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);

        let request = match validation::validate_sign_in(&email.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                set_error_message.set(Some(e.to_string()));
                return;
            }
        };

        set_is_loading.set(true);
        let config = config.clone();
        spawn_local(async move {
            match api::sign_in(&config, &request).await {
                Ok(()) => {
                    log::info!("Sign-in link requested for {}", request.email);
                    set_sent_to.set(Some(request.email));
                }
                Err(e) => set_error_message.set(Some(e.to_string())),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-box">
            <h1>"Доступ к панели"</h1>
            <p class="login-box__hint">"Следите за продажами в панели партнёра"</p>

            <Show when=move || error_message.get().is_some()>
                <div class="error-message">
                    {move || error_message.get().unwrap_or_default()}
                </div>
            </Show>

            <Show when=move || sent_to.get().is_some()>
                <div class="success-message">
                    {move || {
                        format!(
                            "Мы отправили ссылку для входа на {}",
                            sent_to.get().unwrap_or_default(),
                        )
                    }}
                </div>
            </Show>

            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="email">"Ваш e-mail"</label>
                    <input
                        type="email"
                        id="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        disabled=move || is_loading.get()
                    />
                </div>

                <button
                    type="submit"
                    class="btn-primary"
                    disabled=move || is_loading.get()
                >
                    {move || if is_loading.get() { "Отправка..." } else { "Войти" }}
                </button>
            </form>

            <a class="login-box__link" href="/sign-up">"Новый ресторан"</a>
        </div>
    }
}
