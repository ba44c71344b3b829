use contracts::dashboards::d400_restaurant_metrics::PopularProduct;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d400_restaurant_metrics::api;
use crate::shared::config::use_config;
use crate::shared::number_format::share_percent;
use crate::system::auth::session::use_error_reporter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductShare {
    pub product: String,
    pub amount: i64,
    pub percent: u32,
}

/// Доля каждого товара в общем количестве
pub fn product_shares(products: &[PopularProduct]) -> Vec<ProductShare> {
    let total: u64 = products.iter().map(|p| p.amount.max(0) as u64).sum();
    products
        .iter()
        .map(|p| ProductShare {
            product: p.product.clone(),
            amount: p.amount,
            percent: share_percent(p.amount.max(0) as u64, total),
        })
        .collect()
}

#[component]
pub fn PopularProducts() -> impl IntoView {
    let config = use_config();
    let reporter = use_error_reporter();
    let shares = RwSignal::new(None::<Vec<ProductShare>>);

    spawn_local(async move {
        match api::get_popular_products(&config).await {
            Ok(products) => {
                shares.try_set(Some(product_shares(&products)));
            }
            Err(e) => reporter.report(&e),
        }
    });

    view! {
        <div class="dashboard-card">
            <div class="dashboard-card__header">
                <h2 class="dashboard-card__title">"Популярные товары"</h2>
            </div>
            {move || match shares.get() {
                None => view! { <div class="chart__placeholder">"Загрузка..."</div> }.into_any(),
                Some(shares) if shares.is_empty() => {
                    view! { <div class="chart__placeholder">"Пока нет продаж"</div> }.into_any()
                }
                Some(shares) => view! {
                    <ul class="popular-products">
                        {shares
                            .into_iter()
                            .map(|share| {
                                view! {
                                    <li class="popular-products__item">
                                        <span class="popular-products__name">{share.product}</span>
                                        <span class="popular-products__bar">
                                            <span style=format!("width: {}%", share.percent)></span>
                                        </span>
                                        <span class="popular-products__value">
                                            {format!("{} ({}%)", share.amount, share.percent)}
                                        </span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_shares() {
        let products = vec![
            PopularProduct { product: "Pepperoni".to_string(), amount: 6 },
            PopularProduct { product: "Margherita".to_string(), amount: 3 },
            PopularProduct { product: "Veggie".to_string(), amount: 1 },
        ];
        let shares = product_shares(&products);
        let percents: Vec<_> = shares.iter().map(|s| s.percent).collect();
        assert_eq!(percents, vec![60, 30, 10]);
        assert_eq!(shares[0].product, "Pepperoni");
    }

    #[test]
    fn test_no_products() {
        assert!(product_shares(&[]).is_empty());
    }
}
