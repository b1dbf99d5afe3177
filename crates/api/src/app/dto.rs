use serde::Deserialize;

use quickorder_purchase::{CustomerData, ItemsData};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    #[serde(default)]
    pub customer_data: CustomerData,
    #[serde(default)]
    pub product_data: ItemsData,
}
