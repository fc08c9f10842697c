use log::warn;
use rust_decimal::Decimal;

use super::{PriceLookup, SalesError};

/// Name reported for sale entries that carry no product at all.
pub const MISSING_PRODUCT: &str = "<missing>";

#[derive(Debug, Clone, PartialEq)]
pub struct SaleEntry {
    pub product: Option<String>,
    pub quantity: Decimal,
}

impl SaleEntry {
    pub fn new(product: impl Into<String>, quantity: Decimal) -> SaleEntry {
        SaleEntry {
            product: Some(product.into()),
            quantity,
        }
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct SalesComputation {
    pub total: Decimal,
    /// Products that had no catalogue match, in input order.
    pub unmatched: Vec<String>,
}

/// Sums `price * quantity` over every sale whose product is in the catalogue.
/// A sale without a product is priced by the first untitled catalogue entry.
/// Unmatched sales are logged and contribute nothing.
pub fn compute_total(sales: &[SaleEntry], catalogue: &impl PriceLookup) -> Result<SalesComputation, SalesError> {
    let mut computation = SalesComputation::default();

    for sale in sales {
        let title = sale.product.as_deref();
        let name = title.unwrap_or(MISSING_PRODUCT);
        match catalogue.price_of(title) {
            Some(price) => {
                computation.total = price
                    .checked_mul(sale.quantity)
                    .and_then(|amount| computation.total.checked_add(amount))
                    .ok_or_else(|| SalesError::AmountOverflow(name.to_string()))?;
            },
            None => {
                warn!("'{}' not found in catalogue", name);
                computation.unmatched.push(name.to_string());
            },
        }
    }

    Ok(computation)
}
