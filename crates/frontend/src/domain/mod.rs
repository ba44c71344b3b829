pub mod a001_restaurant;
pub mod a002_order;
