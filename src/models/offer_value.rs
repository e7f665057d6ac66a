//! Module containing offer value model for query, insert
use models::Offer;
use schema::offer_values;

/// Payload for querying offer values
#[derive(Debug, Serialize, Deserialize, Associations, Queryable, Clone, Identifiable)]
#[belongs_to(Offer, foreign_key = "offer_id")]
#[table_name = "offer_values"]
pub struct OfferValue {
    pub id: i32,
    pub offer_id: i32,
    pub field_id: String,
    pub value: String,
}

/// Payload for creating offer values
#[derive(Serialize, Deserialize, Insertable, Clone, Debug)]
#[table_name = "offer_values"]
pub struct NewOfferValue {
    pub offer_id: i32,
    pub field_id: String,
    pub value: String,
}

/// One cell as it arrives in offer create/update requests
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewOfferValuePayload {
    pub field_id: String,
    pub value: String,
}

impl NewOfferValue {
    pub fn into_vec(offer_id: i32, values: Vec<NewOfferValuePayload>) -> Vec<NewOfferValue> {
        let mut res = vec![];
        for payload in values {
            res.push(NewOfferValue {
                offer_id,
                field_id: payload.field_id,
                value: payload.value,
            })
        }
        res
    }
}
