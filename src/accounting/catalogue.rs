use std::collections::HashMap;

use enum_dispatch::enum_dispatch;
use rust_decimal::Decimal;

use super::PriceLookup;

/// Catalogues larger than this are indexed by title instead of scanned.
const INDEX_THRESHOLD: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub title: Option<String>,
    pub price: Decimal,
}

impl Product {
    pub fn new(title: impl Into<String>, price: Decimal) -> Product {
        Product {
            title: Some(title.into()),
            price,
        }
    }

    pub fn untitled(price: Decimal) -> Product {
        Product { title: None, price }
    }
}

#[enum_dispatch(PriceLookup)]
pub enum Catalogue {
    LinearCatalogue,
    IndexedCatalogue,
}

impl Catalogue {
    pub fn new(products: Vec<Product>) -> Catalogue {
        if products.len() > INDEX_THRESHOLD {
            Catalogue::IndexedCatalogue(IndexedCatalogue::new(products))
        } else {
            Catalogue::LinearCatalogue(LinearCatalogue::new(products))
        }
    }

    pub fn is_indexed(&self) -> bool {
        matches!(self, Catalogue::IndexedCatalogue(_))
    }
}

/// Keeps products in catalogue order and scans them on every lookup.
pub struct LinearCatalogue {
    products: Vec<Product>,
}

impl LinearCatalogue {
    pub fn new(products: Vec<Product>) -> LinearCatalogue {
        LinearCatalogue { products }
    }
}

impl PriceLookup for LinearCatalogue {
    fn price_of(&self, title: Option<&str>) -> Option<Decimal> {
        self.products
            .iter()
            .find(|product| product.title.as_deref() == title)
            .map(|product| product.price)
    }

    fn product_count(&self) -> usize {
        self.products.len()
    }
}

/// Title to price map. Duplicate titles keep the price seen first, the
/// same goes for untitled entries.
pub struct IndexedCatalogue {
    prices: HashMap<String, Decimal>,
    untitled_price: Option<Decimal>,
    product_count: usize,
}

impl IndexedCatalogue {
    pub fn new(products: Vec<Product>) -> IndexedCatalogue {
        let product_count = products.len();
        let mut prices = HashMap::with_capacity(product_count);
        let mut untitled_price = None;
        for product in products {
            match product.title {
                Some(title) => {
                    prices.entry(title).or_insert(product.price);
                },
                None => {
                    untitled_price.get_or_insert(product.price);
                },
            }
        }

        IndexedCatalogue {
            prices,
            untitled_price,
            product_count,
        }
    }
}

impl PriceLookup for IndexedCatalogue {
    fn price_of(&self, title: Option<&str>) -> Option<Decimal> {
        match title {
            Some(title) => self.prices.get(title).copied(),
            None => self.untitled_price,
        }
    }

    fn product_count(&self) -> usize {
        self.product_count
    }
}
