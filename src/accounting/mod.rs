use enum_dispatch::enum_dispatch;
use rust_decimal::Decimal;
use thiserror::Error;

pub mod catalogue;
pub mod report;
pub mod sales;


use catalogue::{Catalogue, IndexedCatalogue, LinearCatalogue};

#[derive(Debug, PartialEq, Error)]
pub enum SalesError {
    #[error("amount overflow while pricing '{0}'")]
    AmountOverflow(String),
}

#[enum_dispatch]
pub trait PriceLookup {
    /// Price of the first catalogue product whose title is exactly `title`.
    /// `None` looks up the first product that has no title.
    fn price_of(&self, title: Option<&str>) -> Option<Decimal>;

    fn product_count(&self) -> usize;
}
