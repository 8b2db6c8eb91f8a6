//! HTTP route handlers outside the pricing engine

pub mod health;
pub mod products;
