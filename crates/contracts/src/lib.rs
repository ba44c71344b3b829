//! Shared DTOs and domain rules of the restaurant dashboard API.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod system;
