use contracts::domain::a001_restaurant::UpdateProfileRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_restaurant::use_restaurant_store;
use crate::layout::notifications::use_notifications;
use crate::shared::query_cache::use_query_cache;
use crate::system::auth::session::use_error_reporter;

/// Диалог редактирования профиля заведения
#[component]
pub fn StoreProfileDialog(open: RwSignal<bool>) -> impl IntoView {
    let store = use_restaurant_store();
    let cache = use_query_cache();
    let notifications = use_notifications();
    let reporter = use_error_reporter();

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    // Значения формы берутся из кэша при каждом открытии
    Effect::new(move |_| {
        if open.get() {
            let restaurant = cache.with_untracked(|c| c.managed_restaurant().cloned());
            if let Some(restaurant) = restaurant {
                name.set(restaurant.name);
                description.set(restaurant.description.unwrap_or_default());
            }
        }
    });

    let handle_save = move |_| {
        let description = description.get_untracked();
        let request = UpdateProfileRequest {
            name: name.get_untracked().trim().to_string(),
            description: Some(description.trim().to_string()).filter(|d| !d.is_empty()),
        };
        let store = store.clone();
        saving.set(true);
        spawn_local(async move {
            match store.save_profile(request).await {
                Ok(()) => {
                    notifications.success("Профиль обновлён");
                    open.set(false);
                }
                Err(e) => reporter.report(&e),
            }
            saving.set(false);
        });
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Профиль заведения"</DialogTitle>
                    <DialogContent>
                        <p class="text-muted">"Эти данные видят ваши клиенты"</p>
                        <div class="form-group">
                            <label>"Название"</label>
                            <Input value=name />
                        </div>
                        <div class="form-group">
                            <label>"Описание"</label>
                            <Textarea value=description />
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| open.set(false)
                        >
                            "Отмена"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=handle_save
                            disabled=Signal::derive(move || saving.get())
                        >
                            "Сохранить"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
