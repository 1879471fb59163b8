pub mod quantity;

pub use quantity::coerce_amount;
