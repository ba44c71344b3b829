use crate::layout::notifications::{NotificationArea, NotificationService};
use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use crate::shared::query_cache::QueryCache;
use crate::system::auth::session::SessionState;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!("API base: {}", config.api_url);

    provide_context(config);
    // Общий кэш запросов на всё время жизни страницы
    provide_context(RwSignal::new(QueryCache::new()));
    provide_context(NotificationService::new());
    provide_context(SessionState::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
            <NotificationArea />
        </ConfigProvider>
    }
}
