extern crate diesel;
extern crate futures;
extern crate futures_cpupool;
extern crate offers_lib;
extern crate r2d2;
extern crate serde_json;
extern crate tokio_core;

use std::error::Error;
use std::fmt;
use std::time::SystemTime;

use diesel::connection::AnsiTransactionManager;
use diesel::connection::SimpleConnection;
use diesel::deserialize::QueryableByName;
use diesel::pg::Pg;
use diesel::query_builder::AsQuery;
use diesel::query_builder::QueryFragment;
use diesel::query_builder::QueryId;
use diesel::sql_types::HasSqlType;
use diesel::Connection;
use diesel::ConnectionResult;
use diesel::QueryResult;
use diesel::Queryable;
use futures_cpupool::CpuPool;
use r2d2::ManageConnection;

use offers_lib::models::*;
use offers_lib::repos::*;
use offers_lib::services::*;

pub const MOCK_REPO_FACTORY: ReposFactoryMock = ReposFactoryMock {};
pub static MOCK_PRICE_FIELD: &'static str = "total_price";
pub static MOCK_FLIGHT_FIELD: &'static str = "outbound_flight";
pub static MOCK_NOTES_FIELD: &'static str = "notes";
pub static MOCK_UNKNOWN_FIELD: &'static str = "legacy_field";
pub static MOCK_MISSING_FIELD: &'static str = "gone";
pub static MOCK_MISSING_OFFER_ID: i32 = 100;

pub fn create_columns_service() -> ColumnsServiceImpl<MockConnection, MockConnectionManager, ReposFactoryMock> {
    let manager = MockConnectionManager::default();
    let db_pool = r2d2::Pool::builder().build(manager).expect("Failed to create connection pool");
    let cpu_pool = CpuPool::new(1);

    ColumnsServiceImpl::new(db_pool, cpu_pool, MOCK_REPO_FACTORY)
}

pub fn create_offers_service() -> OffersServiceImpl<MockConnection, MockConnectionManager, ReposFactoryMock> {
    let manager = MockConnectionManager::default();
    let db_pool = r2d2::Pool::builder().build(manager).expect("Failed to create connection pool");
    let cpu_pool = CpuPool::new(1);

    OffersServiceImpl::new(db_pool, cpu_pool, MOCK_REPO_FACTORY)
}

#[derive(Default, Copy, Clone)]
pub struct ReposFactoryMock;

impl<C: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> ReposFactory<C> for ReposFactoryMock {
    fn create_columns_repo<'a>(&self, _db_conn: &'a C) -> Box<ColumnsRepo + 'a> {
        Box::new(ColumnsRepoMock::default()) as Box<ColumnsRepo>
    }
    fn create_offers_repo<'a>(&self, _db_conn: &'a C) -> Box<OffersRepo + 'a> {
        Box::new(OffersRepoMock::default()) as Box<OffersRepo>
    }
    fn create_offer_values_repo<'a>(&self, _db_conn: &'a C) -> Box<OfferValuesRepo + 'a> {
        Box::new(OfferValuesRepoMock::default()) as Box<OfferValuesRepo>
    }
}

#[derive(Clone, Default)]
pub struct ColumnsRepoMock;

impl ColumnsRepo for ColumnsRepoMock {
    fn list(&self) -> RepoResult<Vec<Column>> {
        Ok(vec![
            create_column(1, MOCK_PRICE_FIELD, "Price"),
            create_column(2, MOCK_FLIGHT_FIELD, "Flight"),
            create_column(3, MOCK_NOTES_FIELD, "Notes"),
        ])
    }

    fn find(&self, column_id_arg: i32) -> RepoResult<Column> {
        Ok(create_column(column_id_arg, MOCK_PRICE_FIELD, "Price"))
    }

    fn create(&self, payload: NewColumn) -> RepoResult<Column> {
        Ok(Column {
            id: 4,
            field_id: payload.field_id,
            label: payload.label,
            icon: payload.icon,
            ordinal: payload.ordinal.unwrap_or(0),
        })
    }

    fn update(&self, column_id_arg: i32, payload: UpdateColumn) -> RepoResult<Column> {
        Ok(Column {
            id: column_id_arg,
            field_id: MOCK_PRICE_FIELD.to_string(),
            label: payload.label.unwrap_or_else(|| "Price".to_string()),
            icon: payload.icon,
            ordinal: payload.ordinal.unwrap_or(0),
        })
    }

    fn delete_by_field_id(&self, field_id_arg: String) -> RepoResult<Column> {
        if field_id_arg == MOCK_MISSING_FIELD {
            Err(RepoError::NotFound)
        } else {
            Ok(create_column(1, &field_id_arg, "Price"))
        }
    }

    fn field_id_exists(&self, field_id_arg: String) -> RepoResult<bool> {
        Ok(field_id_arg == MOCK_PRICE_FIELD)
    }
}

#[derive(Clone, Default)]
pub struct OffersRepoMock;

impl OffersRepo for OffersRepoMock {
    fn find(&self, offer_id_arg: i32) -> RepoResult<Offer> {
        if offer_id_arg == MOCK_MISSING_OFFER_ID {
            Err(RepoError::NotFound)
        } else {
            Ok(create_offer(offer_id_arg))
        }
    }

    fn list(&self) -> RepoResult<Vec<Offer>> {
        Ok(vec![create_offer(2), create_offer(1)])
    }

    fn create(&self) -> RepoResult<Offer> {
        Ok(create_offer(1))
    }

    fn touch(&self, offer_id_arg: i32) -> RepoResult<Offer> {
        self.find(offer_id_arg)
    }

    fn delete(&self, offer_id_arg: i32) -> RepoResult<Offer> {
        self.find(offer_id_arg)
    }
}

#[derive(Clone, Default)]
pub struct OfferValuesRepoMock;

impl OfferValuesRepo for OfferValuesRepoMock {
    fn find_by_offer(&self, offer_id_arg: i32) -> RepoResult<Vec<OfferValue>> {
        Ok(vec![
            create_offer_value(1, offer_id_arg, MOCK_PRICE_FIELD, "1.200 € Hotel + 350 € Flug"),
            create_offer_value(2, offer_id_arg, MOCK_FLIGHT_FIELD, "VIE - DXB - BKK, 16h 25m, Emirates"),
            create_offer_value(3, offer_id_arg, MOCK_NOTES_FIELD, "nice pool"),
            create_offer_value(4, offer_id_arg, MOCK_UNKNOWN_FIELD, "4/5"),
        ])
    }

    fn create(&self, payload: Vec<NewOfferValue>) -> RepoResult<Vec<OfferValue>> {
        Ok(payload
            .into_iter()
            .enumerate()
            .map(|(i, value)| OfferValue {
                id: i as i32 + 1,
                offer_id: value.offer_id,
                field_id: value.field_id,
                value: value.value,
            })
            .collect())
    }

    fn delete_by_offer(&self, offer_id_arg: i32) -> RepoResult<Vec<OfferValue>> {
        Ok(vec![create_offer_value(
            1,
            offer_id_arg,
            MOCK_NOTES_FIELD,
            "nice pool",
        )])
    }

    fn delete_by_field_id(&self, field_id_arg: String) -> RepoResult<Vec<OfferValue>> {
        Ok(vec![create_offer_value(1, 1, &field_id_arg, "1.200 €")])
    }
}

pub fn create_column(id: i32, field_id: &str, label: &str) -> Column {
    Column {
        id,
        field_id: field_id.to_string(),
        label: label.to_string(),
        icon: None,
        ordinal: id,
    }
}

pub fn create_offer(id: i32) -> Offer {
    Offer {
        id,
        created_at: SystemTime::now(),
        updated_at: SystemTime::now(),
    }
}

pub fn create_offer_value(id: i32, offer_id: i32, field_id: &str, value: &str) -> OfferValue {
    OfferValue {
        id,
        offer_id,
        field_id: field_id.to_string(),
        value: value.to_string(),
    }
}

pub fn create_new_column(field_id: &str) -> NewColumn {
    NewColumn {
        field_id: field_id.to_string(),
        label: "Hotel name".to_string(),
        icon: None,
        ordinal: Some(4),
    }
}

pub fn create_new_offer(field_ids: &[&str]) -> NewOffer {
    NewOffer {
        values: field_ids
            .iter()
            .map(|field_id| NewOfferValuePayload {
                field_id: field_id.to_string(),
                value: "1.200 €".to_string(),
            })
            .collect(),
    }
}

#[derive(Default)]
pub struct MockConnection {
    tr: AnsiTransactionManager,
}

impl Connection for MockConnection {
    type Backend = Pg;
    type TransactionManager = AnsiTransactionManager;

    fn establish(_database_url: &str) -> ConnectionResult<MockConnection> {
        Ok(MockConnection::default())
    }

    fn execute(&self, _query: &str) -> QueryResult<usize> {
        unimplemented!()
    }

    fn query_by_index<T, U>(&self, _source: T) -> QueryResult<Vec<U>>
    where
        T: AsQuery,
        T::Query: QueryFragment<Pg> + QueryId,
        Pg: HasSqlType<T::SqlType>,
        U: Queryable<T::SqlType, Pg>,
    {
        unimplemented!()
    }

    fn query_by_name<T, U>(&self, _source: &T) -> QueryResult<Vec<U>>
    where
        T: QueryFragment<Pg> + QueryId,
        U: QueryableByName<Pg>,
    {
        unimplemented!()
    }

    fn execute_returning_count<T>(&self, _source: &T) -> QueryResult<usize>
    where
        T: QueryFragment<Pg> + QueryId,
    {
        unimplemented!()
    }

    fn transaction_manager(&self) -> &Self::TransactionManager {
        &self.tr
    }
}

impl SimpleConnection for MockConnection {
    fn batch_execute(&self, _query: &str) -> QueryResult<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct MockConnectionManager;

impl ManageConnection for MockConnectionManager {
    type Connection = MockConnection;
    type Error = MockError;

    fn connect(&self) -> Result<MockConnection, MockError> {
        Ok(MockConnection::default())
    }

    fn is_valid(&self, _conn: &mut MockConnection) -> Result<(), MockError> {
        Ok(())
    }

    fn has_broken(&self, _conn: &mut MockConnection) -> bool {
        false
    }
}

#[derive(Debug)]
pub struct MockError {}

impl fmt::Display for MockError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Mock connection error")
    }
}

impl Error for MockError {
    fn description(&self) -> &str {
        "Mock connection error"
    }

    fn cause(&self) -> Option<&Error> {
        None
    }
}
