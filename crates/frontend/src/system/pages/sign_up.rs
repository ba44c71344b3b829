use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::layout::notifications::use_notifications;
use crate::shared::api_utils::path_segment;
use crate::shared::config::use_config;
use crate::system::auth::api;
use crate::system::auth::validation::SignUpForm;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let config = use_config();
    let notifications = use_notifications();
    let navigate = StoredValue::new_local(use_navigate());

    let restaurant_name = RwSignal::new(String::new());
    let manager_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);

        let form = SignUpForm {
            restaurant_name: restaurant_name.get_untracked(),
            manager_name: manager_name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                set_error_message.set(Some(e.to_string()));
                return;
            }
        };

        set_is_loading.set(true);
        let config = config.clone();
        spawn_local(async move {
            match api::register_restaurant(&config, &request).await {
                Ok(()) => {
                    log::info!("Restaurant {:?} registered", request.restaurant_name);
                    notifications.success("Ресторан зарегистрирован");
                    let path = format!("/sign-in?email={}", path_segment(&request.email));
                    navigate.with_value(|navigate| navigate(&path, NavigateOptions::default()));
                }
                Err(e) => set_error_message.set(Some(e.to_string())),
            }
            set_is_loading.set(false);
        });
    };

    let field = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type=kind
                    id=id
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    disabled=move || is_loading.get()
                />
            </div>
        }
    };

    view! {
        <div class="login-box">
            <h1>"Создать бесплатный аккаунт"</h1>
            <p class="login-box__hint">"Станьте партнёром и начните продажи"</p>

            <Show when=move || error_message.get().is_some()>
                <div class="error-message">
                    {move || error_message.get().unwrap_or_default()}
                </div>
            </Show>

            <form on:submit=on_submit>
                {field("restaurantName", "Название заведения", "text", restaurant_name)}
                {field("managerName", "Ваше имя", "text", manager_name)}
                {field("email", "Ваш e-mail", "email", email)}
                {field("phone", "Ваш телефон", "tel", phone)}

                <button
                    type="submit"
                    class="btn-primary"
                    disabled=move || is_loading.get()
                >
                    {move || if is_loading.get() { "Регистрация..." } else { "Завершить регистрацию" }}
                </button>
            </form>

            <a class="login-box__link" href="/sign-in">"Уже есть аккаунт"</a>
        </div>
    }
}
