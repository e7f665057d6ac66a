//! Module containing column model for query, insert, update
use validator::Validate;

use models::validation_rules::*;
use models::FieldKind;
use schema::columns;

/// Payload for querying columns
#[derive(Debug, Serialize, Deserialize, Queryable, Clone, Identifiable)]
#[table_name = "columns"]
pub struct Column {
    pub id: i32,
    pub field_id: String,
    pub label: String,
    pub icon: Option<String>,
    pub ordinal: i32,
}

impl Column {
    pub fn kind(&self) -> FieldKind {
        FieldKind::detect(&self.field_id, &self.label)
    }
}

/// Payload for creating columns
#[derive(Serialize, Deserialize, Insertable, Validate, Clone, Debug)]
#[table_name = "columns"]
pub struct NewColumn {
    #[validate(custom = "validate_field_id")]
    pub field_id: String,
    #[validate(length(min = "1", message = "Label must not be empty"))]
    pub label: String,
    pub icon: Option<String>,
    pub ordinal: Option<i32>,
}

/// Payload for updating columns. `field_id` is immutable, offer values
/// reference it.
#[derive(Default, Serialize, Deserialize, Validate, AsChangeset, Debug)]
#[table_name = "columns"]
pub struct UpdateColumn {
    #[validate(length(min = "1", message = "Label must not be empty"))]
    pub label: Option<String>,
    pub icon: Option<String>,
    pub ordinal: Option<i32>,
}

/// Column as served by the API, with its detected display kind
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ColumnWithKind {
    pub id: i32,
    pub field_id: String,
    pub label: String,
    pub icon: Option<String>,
    pub ordinal: i32,
    pub kind: FieldKind,
}

impl ColumnWithKind {
    pub fn new(column: Column) -> Self {
        let kind = column.kind();
        Self {
            id: column.id,
            field_id: column.field_id,
            label: column.label,
            icon: column.icon,
            ordinal: column.ordinal,
            kind,
        }
    }
}
