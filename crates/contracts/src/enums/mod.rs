pub mod order_status;

pub use order_status::{OrderAction, OrderStatus};
