pub mod d400_restaurant_metrics;

pub use d400_restaurant_metrics::ui::DashboardPage;
