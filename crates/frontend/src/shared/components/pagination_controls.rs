use crate::shared::icons::icon;
use leptos::prelude::*;

/// Куда можно перейти со страницы `page` (нумерация с 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNav {
    pub page: u32,
    pub last: u32,
}

impl PageNav {
    pub fn new(page: u32, total_pages: u32) -> Self {
        let last = total_pages.max(1);
        Self {
            page: page.clamp(1, last),
            last,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.last
    }
}

/// PaginationControls component
///
/// Страницы нумеруются с 1, как в адресной строке.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<u32>,

    /// Callback when page changes
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let nav = move || PageNav::new(current_page.get(), total_pages.get());

    view! {
        <div class="pagination-controls">
            <span class="pagination-total">
                {move || format!("Всего: {}", total_count.get())}
            </span>
            <span class="pagination-info">
                {move || {
                    let nav = nav();
                    format!("Страница {} из {}", nav.page, nav.last)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || !nav().has_prev()
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let nav = nav();
                    if nav.has_prev() {
                        on_page_change.run(nav.page - 1);
                    }
                }
                disabled=move || !nav().has_prev()
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let nav = nav();
                    if nav.has_next() {
                        on_page_change.run(nav.page + 1);
                    }
                }
                disabled=move || !nav().has_next()
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(nav().last)
                disabled=move || !nav().has_next()
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_nav_bounds() {
        let nav = PageNav::new(1, 3);
        assert!(!nav.has_prev());
        assert!(nav.has_next());

        let nav = PageNav::new(3, 3);
        assert!(nav.has_prev());
        assert!(!nav.has_next());
    }

    #[test]
    fn test_page_nav_empty_list_has_single_page() {
        let nav = PageNav::new(1, 0);
        assert_eq!(nav.last, 1);
        assert!(!nav.has_prev() && !nav.has_next());

        assert_eq!(PageNav::new(9, 2).page, 2);
    }
}
