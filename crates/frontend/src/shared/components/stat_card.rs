use crate::shared::icons::icon;
use crate::shared::number_format::format_diff_percent;
use leptos::prelude::*;

/// CSS-класс изменения. `lower_is_better` для показателей вроде отмен,
/// где рост плохой.
pub fn diff_class(diff: f64, lower_is_better: bool) -> &'static str {
    let good = if lower_is_better { diff < 0.0 } else { diff > 0.0 };
    if diff == 0.0 {
        "stat-card__change stat-card__change--flat"
    } else if good {
        "stat-card__change stat-card__change--up"
    } else {
        "stat-card__change stat-card__change--down"
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Formatted value (None = loading)
    #[prop(into)]
    value: Signal<Option<String>>,
    /// Change % relative to previous period
    #[prop(into)]
    change_percent: Signal<Option<f64>>,
    /// Подпись к изменению: "к прошлому месяцу"
    change_caption: &'static str,
    #[prop(optional)]
    lower_is_better: bool,
) -> impl IntoView {
    let formatted = move || value.get().unwrap_or_else(|| "…".to_string());

    let change_view = move || {
        change_percent.get().map(|pct| {
            view! {
                <div class="stat-card__subtitle">
                    <span class=diff_class(pct, lower_is_better)>{format_diff_percent(pct)}</span>
                    " "
                    {change_caption}
                </div>
            }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {change_view}
            </div>
        </div>
    }
}
