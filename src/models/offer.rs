//! Module containing offer model for query, insert, update
use std::time::SystemTime;

use models::{CellValue, FieldKind, NewOfferValuePayload, OfferValue};
use schema::offers;

/// Payload for querying offers
#[derive(Debug, Serialize, Deserialize, Queryable, Clone, Identifiable)]
#[table_name = "offers"]
pub struct Offer {
    pub id: i32,
    pub created_at: SystemTime,
    pub updated_at: SystemTime,
}

/// Payload for creating and replacing offers. The offer row itself only
/// carries timestamps, the content is the value set.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewOffer {
    pub values: Vec<NewOfferValuePayload>,
}

/// One stored cell together with its parsed display shape
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OfferValueWithCell {
    pub field_id: String,
    pub value: String,
    pub display: CellValue,
}

impl OfferValueWithCell {
    pub fn new(value: OfferValue, kind: FieldKind) -> Self {
        let display = CellValue::parse(kind, &value.value);
        Self {
            field_id: value.field_id,
            value: value.value,
            display,
        }
    }
}

/// Offer as served by the API
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OfferWithValues {
    pub id: i32,
    pub created_at: SystemTime,
    pub updated_at: SystemTime,
    pub values: Vec<OfferValueWithCell>,
}

impl OfferWithValues {
    pub fn new(offer: Offer, values: Vec<OfferValueWithCell>) -> Self {
        Self {
            id: offer.id,
            created_at: offer.created_at,
            updated_at: offer.updated_at,
            values,
        }
    }
}
