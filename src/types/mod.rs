mod errors;
mod numeric;
mod tally;
#[cfg(test)]
mod tests;
mod timestamp;

pub use errors::FieldError;
pub use numeric::{parse_decimal, parse_price, parse_quantity};
pub use tally::{argmax, Tally};
pub use timestamp::parse_timestamp;

pub type Quantity = u64;
pub type TripCount = usize;
