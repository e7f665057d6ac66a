/// diesel table for columns
table! {
    columns (id) {
        id -> Integer,
        field_id -> VarChar,
        label -> VarChar,
        icon -> Nullable<VarChar>,
        ordinal -> Integer,
    }
}

/// diesel table for offers
table! {
    offers (id) {
        id -> Integer,
        created_at -> Timestamp, // UTC 0, generated at db level
        updated_at -> Timestamp, // UTC 0, generated at db level
    }
}

/// diesel table for offer values
table! {
    offer_values (id) {
        id -> Integer,
        offer_id -> Integer,
        field_id -> VarChar,
        value -> Text,
    }
}

joinable!(offer_values -> offers (offer_id));
allow_tables_to_appear_in_same_query!(offers, offer_values);
