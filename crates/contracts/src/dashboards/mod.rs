pub mod d400_restaurant_metrics;
