use leptos::prelude::*;
use uuid::Uuid;

use crate::shared::error::AppError;

/// Через сколько уведомление исчезает само
const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub text: String,
}

/// Очередь уведомлений, новые сверху
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
}

impl NotificationQueue {
    /// Не больше стольких уведомлений на экране
    pub const MAX_VISIBLE: usize = 3;

    pub fn push(&mut self, kind: NotificationKind, text: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(
            0,
            Notification {
                id,
                kind,
                text: text.into(),
            },
        );
        self.items.truncate(Self::MAX_VISIBLE);
        id
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// Сервис для всплывающих уведомлений
#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
        }
    }

    fn push(&self, kind: NotificationKind, text: String) {
        let mut id = None;
        self.queue.update(|q| id = Some(q.push(kind, text)));

        if let Some(id) = id {
            let queue = self.queue;
            gloo_timers::callback::Timeout::new(AUTO_DISMISS_MS, move || {
                // Сигнал мог быть уничтожен вместе с приложением
                queue.try_update(|q| q.dismiss(id));
            })
            .forget();
        }
    }

    /// Показать сообщение об успехе
    pub fn success(&self, text: impl Into<String>) {
        self.push(NotificationKind::Success, text.into());
    }

    /// Показать ошибку
    pub fn error(&self, err: &AppError) {
        self.push(NotificationKind::Error, err.to_string());
    }

    pub fn dismiss(&self, id: Uuid) {
        self.queue.update(|q| q.dismiss(id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Область вывода уведомлений
#[component]
pub fn NotificationArea() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notifications">
            <For
                each=move || service.queue.with(|q| q.items().to_vec())
                key=|n| n.id
                children=move |n| {
                    let class = match n.kind {
                        NotificationKind::Success => "notification notification--success",
                        NotificationKind::Error => "notification notification--error",
                    };
                    let id = n.id;
                    view! {
                        <div class=class role="status" on:click=move |_| service.dismiss(id)>
                            {n.text}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first_and_capped() {
        let mut queue = NotificationQueue::default();
        for i in 0..5 {
            queue.push(NotificationKind::Success, format!("#{}", i));
        }
        let texts: Vec<_> = queue.items().iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["#4", "#3", "#2"]);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut queue = NotificationQueue::default();
        let first = queue.push(NotificationKind::Error, "a");
        let second = queue.push(NotificationKind::Success, "b");

        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, second);

        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
    }
}
