use crate::enums::DeviceType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A complete selection, as the order backend receives it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedOrder {
    pub device_type: DeviceType,
    pub manufacturer: String,
    pub specifications: BTreeMap<String, String>,
}

/// Envelope handed to the order collaborator on submit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub request_id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub order: SubmittedOrder,
}

impl PlaceOrderRequest {
    pub fn new(order: SubmittedOrder) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            placed_at: Utc::now(),
            order,
        }
    }
}
