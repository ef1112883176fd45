//! NIR Model (goods receipt)
//!
//! NIR = Notă de Intrare-Recepție, the supplier goods-receipt document.
//! Creating one is a side-effecting event: stock increases at each item's
//! stated department.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// NIR document header
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Nir {
    pub id: i64,
    pub supplier_id: i64,
    /// User-supplied document number from the paper invoice
    pub doc_number: String,
    /// Net total (sum of quantity × price), 2 decimals
    pub value_net: f64,
    /// VAT total, 2 decimals
    pub value_vat: f64,
    pub created_at: i64,
}

/// NIR line item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct NirItem {
    pub id: i64,
    pub nir_id: i64,
    pub product_id: i64,
    /// Receiving department for this line
    pub department_id: i64,
    pub quantity: f64,
    /// Unit purchase price (net)
    pub price: f64,
    /// VAT rate in percent (e.g. 9.0, 19.0)
    pub vat_rate: f64,
}

/// NIR line input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NirItemInput {
    pub product_id: i64,
    pub department_id: i64,
    pub quantity: f64,
    pub price: f64,
    pub vat_rate: f64,
}

/// Create NIR payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NirCreate {
    pub supplier_id: i64,
    pub doc_number: String,
    pub items: Vec<NirItemInput>,
}

/// NIR with items and supplier name resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NirFull {
    #[serde(flatten)]
    pub nir: Nir,
    pub supplier_name: String,
    pub items: Vec<NirItem>,
}

/// Compute (net, VAT) document totals from the line items.
///
/// Money arithmetic runs in `Decimal` and is rounded to 2 decimals
/// (banker's rounding) before going back to `f64` for storage.
pub fn document_totals(items: &[NirItemInput]) -> (f64, f64) {
    let mut net = Decimal::ZERO;
    let mut vat = Decimal::ZERO;
    let hundred = Decimal::ONE_HUNDRED;

    for item in items {
        let qty = Decimal::from_f64(item.quantity).unwrap_or_default();
        let price = Decimal::from_f64(item.price).unwrap_or_default();
        let rate = Decimal::from_f64(item.vat_rate).unwrap_or_default();

        let line_net = qty * price;
        net += line_net;
        vat += line_net * rate / hundred;
    }

    (
        net.round_dp(2).to_f64().unwrap_or(0.0),
        vat.round_dp(2).to_f64().unwrap_or(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: f64, price: f64, vat_rate: f64) -> NirItemInput {
        NirItemInput {
            product_id: 1,
            department_id: 1,
            quantity,
            price,
            vat_rate,
        }
    }

    #[test]
    fn totals_sum_lines_and_round_to_two_decimals() {
        // 10 × 3.333 = 33.33 net, 19% VAT = 6.3327 → 6.33
        let (net, vat) = document_totals(&[item(10.0, 3.333, 19.0)]);
        assert_eq!(net, 33.33);
        assert_eq!(vat, 6.33);
    }

    #[test]
    fn totals_mix_vat_rates() {
        let (net, vat) = document_totals(&[item(2.0, 10.0, 19.0), item(1.0, 100.0, 9.0)]);
        assert_eq!(net, 120.0);
        // 20 × 0.19 + 100 × 0.09 = 3.8 + 9.0
        assert_eq!(vat, 12.8);
    }

    #[test]
    fn empty_document_is_zero() {
        assert_eq!(document_totals(&[]), (0.0, 0.0));
    }
}
