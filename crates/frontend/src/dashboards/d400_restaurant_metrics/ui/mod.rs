pub mod dashboard;
pub mod metric_cards;
pub mod popular_products;
pub mod revenue_chart;

pub use dashboard::DashboardPage;
