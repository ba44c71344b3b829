use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Страница не найдена"</h1>
            <p>
                "Вернуться на "
                <a href="/">"главную"</a>
            </p>
        </div>
    }
}
