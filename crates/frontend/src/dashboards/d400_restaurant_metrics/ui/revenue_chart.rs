//! График выручки за период

use chrono::{NaiveDate, Utc};
use contracts::dashboards::d400_restaurant_metrics::{DailyReceipt, ReceiptPeriodParams};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d400_restaurant_metrics::api;
use crate::shared::config::use_config;
use crate::shared::date_utils::default_receipt_range;
use crate::shared::error::AppError;
use crate::shared::number_format::format_money_cents;
use crate::system::auth::session::use_error_reporter;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 240.0;
const PADDING: f64 = 32.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub receipt: i64,
}

/// Координаты точек в области `width` x `height` с отступом `padding`.
/// Ось Y начинается с нуля, максимум выручки касается верхней границы.
pub fn chart_points(data: &[DailyReceipt], width: f64, height: f64, padding: f64) -> Vec<ChartPoint> {
    let plot_w = (width - 2.0 * padding).max(0.0);
    let plot_h = (height - 2.0 * padding).max(0.0);
    let max = data.iter().map(|d| d.receipt).max().unwrap_or(0).max(0);
    let step = if data.len() > 1 {
        plot_w / (data.len() - 1) as f64
    } else {
        0.0
    };

    data.iter()
        .enumerate()
        .map(|(i, d)| {
            let x = if data.len() == 1 {
                padding + plot_w / 2.0
            } else {
                padding + step * i as f64
            };
            let ratio = if max > 0 {
                d.receipt.max(0) as f64 / max as f64
            } else {
                0.0
            };
            ChartPoint {
                x,
                y: padding + plot_h * (1.0 - ratio),
                label: d.date.clone(),
                receipt: d.receipt,
            }
        })
        .collect()
}

/// Значение атрибута `points` для `<polyline>`
pub fn polyline(points: &[ChartPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Номер запроса графика
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Последний отправленный запрос. Ответы на более ранние отбрасываются,
/// даже если пришли позже.
#[derive(Debug, Default)]
pub struct LatestRequest {
    issued: u64,
}

impl LatestRequest {
    pub fn issue(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.issued == ticket.0
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Некорректная дата: {}", raw)))
}

fn period_params(from: &str, to: &str) -> Result<ReceiptPeriodParams, AppError> {
    let params = ReceiptPeriodParams {
        from: Some(parse_date(from)?),
        to: Some(parse_date(to)?),
    };
    params.validate().map_err(AppError::Validation)?;
    Ok(params)
}

#[component]
pub fn RevenueChart() -> impl IntoView {
    let config = use_config();
    let reporter = use_error_reporter();

    let (default_from, default_to) = default_receipt_range(Utc::now().date_naive());
    let from = RwSignal::new(default_from.format("%Y-%m-%d").to_string());
    let to = RwSignal::new(default_to.format("%Y-%m-%d").to_string());

    let data = RwSignal::new(None::<Vec<DailyReceipt>>);
    let period_error = RwSignal::new(None::<String>);
    let latest = StoredValue::new(LatestRequest::default());

    Effect::new(move |_| {
        let ticket = latest
            .try_update_value(LatestRequest::issue)
            .unwrap_or_default();
        let params = match period_params(&from.get(), &to.get()) {
            Ok(params) => params,
            Err(e) => {
                period_error.set(Some(e.to_string()));
                return;
            }
        };
        period_error.set(None);
        let config = config.clone();
        spawn_local(async move {
            let result = api::get_daily_receipt_in_period(&config, &params).await;
            if !latest.try_with_value(|l| l.is_current(ticket)).unwrap_or(false) {
                log::debug!("Dropping stale receipt response for {:?}", params);
                return;
            }
            match result {
                Ok(loaded) => data.set(Some(loaded)),
                Err(e) => reporter.report(&e),
            }
        });
    });

    let chart = move || {
        let Some(data) = data.get() else {
            return view! { <div class="chart__placeholder">"Загрузка..."</div> }.into_any();
        };
        if data.is_empty() {
            return view! { <div class="chart__placeholder">"Нет данных за период"</div> }.into_any();
        }
        let points = chart_points(&data, WIDTH, HEIGHT, PADDING);
        let line = polyline(&points);
        let baseline = HEIGHT - PADDING;
        view! {
            <svg class="chart" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) role="img">
                <line class="chart__axis" x1=PADDING y1=baseline x2={WIDTH - PADDING} y2=baseline />
                <polyline class="chart__line" fill="none" points=line />
                {points
                    .into_iter()
                    .map(|p| {
                        view! {
                            <g>
                                <circle class="chart__dot" cx=p.x cy=p.y r="4" />
                                <text class="chart__value" x=p.x y={p.y - 10.0} text-anchor="middle">
                                    {format_money_cents(p.receipt)}
                                </text>
                                <text class="chart__label" x=p.x y={HEIGHT - 8.0} text-anchor="middle">
                                    {p.label}
                                </text>
                            </g>
                        }
                    })
                    .collect_view()}
            </svg>
        }
        .into_any()
    };

    view! {
        <div class="dashboard-card dashboard-card--wide">
            <div class="dashboard-card__header">
                <div>
                    <h2 class="dashboard-card__title">"Выручка за период"</h2>
                    <p class="text-muted">"Выручка по дням"</p>
                </div>
                <div class="date-range">
                    <label>"Период"</label>
                    <input
                        type="date"
                        prop:value=move || from.get()
                        on:change=move |ev| from.set(event_target_value(&ev))
                    />
                    <input
                        type="date"
                        prop:value=move || to.get()
                        on:change=move |ev| to.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <Show when=move || period_error.get().is_some()>
                <div class="error-message">{move || period_error.get().unwrap_or_default()}</div>
            </Show>
            {chart}
        </div>
    }
}
