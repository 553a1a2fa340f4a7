//! Collection transforms over simple records: ordering products by price
//! and totalling sales per customer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A product with a display name and a unit price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// A single sale attributed to a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub customer: String,
    pub total: f64,
}

impl Sale {
    pub fn new(customer: impl Into<String>, total: f64) -> Self {
        Self {
            customer: customer.into(),
            total,
        }
    }
}

/// Returns product names ordered by ascending price.
///
/// The sort is stable: products with equal prices keep their input order,
/// and `-0.0` ties with `0.0`. The input slice is left untouched.
pub fn sort_products_by_price(products: &[Product]) -> Vec<String> {
    let mut ordered: Vec<&Product> = products.iter().collect();
    ordered.sort_by(|a, b| (a.price + 0.0).total_cmp(&(b.price + 0.0)));
    ordered.into_iter().map(|p| p.name.clone()).collect()
}

/// Sums sale totals per customer.
///
/// Every customer that appears in `sales` gets exactly one entry. Entries
/// enumerate in ascending customer order.
pub fn group_sales_by_customer(sales: &[Sale]) -> BTreeMap<String, f64> {
    sales.iter().fold(BTreeMap::new(), |mut totals, sale| {
        *totals.entry(sale.customer.clone()).or_insert(0.0) += sale.total;
        totals
    })
}
