//! Состояние сессии
//!
//! Сессия хранится в cookie, клиент о ней ничего не знает, пока сервер не
//! ответит 401. Тогда кэш очищается и показывается страница входа.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::layout::notifications::{use_notifications, NotificationService};
use crate::shared::error::AppError;
use crate::shared::query_cache::{use_query_cache, QueryCache};

pub const SIGN_IN_PATH: &str = "/sign-in";

#[derive(Clone, Copy)]
pub struct SessionState {
    expired: RwSignal<bool>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            expired: RwSignal::new(false),
        }
    }

    /// Сервер сообщил, что сессии нет
    pub fn expire(&self) {
        self.expired.try_set(true);
    }

    pub fn is_expired(&self) -> bool {
        self.expired.get()
    }

    fn reset(&self) {
        self.expired.set(false);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session() -> SessionState {
    use_context::<SessionState>().expect("SessionState not provided in context")
}

/// Обработка ошибок API на страницах: 401 завершает сессию, остальное
/// показывается уведомлением
#[derive(Clone, Copy)]
pub struct ErrorReporter {
    session: SessionState,
    notifications: NotificationService,
}

impl ErrorReporter {
    pub fn report(&self, err: &AppError) {
        match err {
            AppError::Unauthorized => self.session.expire(),
            // Повторное нажатие, пока первое действие не завершилось
            AppError::ActionInFlight(_) => log::debug!("{}", err),
            _ => self.notifications.error(err),
        }
    }
}

pub fn use_error_reporter() -> ErrorReporter {
    ErrorReporter {
        session: use_session(),
        notifications: use_notifications(),
    }
}

/// Следит за сессией внутри защищённых страниц
#[component]
pub fn SessionGuard(children: Children) -> impl IntoView {
    let session = use_session();
    let cache = use_query_cache();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if session.is_expired() {
            log::info!("Session expired, redirecting to sign-in");
            cache.update(QueryCache::clear);
            session.reset();
            navigate(
                SIGN_IN_PATH,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    children()
}
