//! Columns repo, presents CRUD operations with db for columns
use diesel;
use diesel::connection::AnsiTransactionManager;
use diesel::dsl::exists;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_dsl::RunQueryDsl;
use diesel::Connection;

use models::{Column, NewColumn, UpdateColumn};
use repos::error::RepoError as Error;
use repos::types::RepoResult;
use schema::columns::dsl::*;

/// Columns repository, responsible for handling columns
pub struct ColumnsRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

pub trait ColumnsRepo {
    /// Returns all columns in display order
    fn list(&self) -> RepoResult<Vec<Column>>;

    /// Find specific column by ID
    fn find(&self, column_id_arg: i32) -> RepoResult<Column>;

    /// Creates new column
    fn create(&self, payload: NewColumn) -> RepoResult<Column>;

    /// Updates specific column
    fn update(&self, column_id_arg: i32, payload: UpdateColumn) -> RepoResult<Column>;

    /// Deletes column by its field id
    fn delete_by_field_id(&self, field_id_arg: String) -> RepoResult<Column>;

    /// Checks that field id already exists
    fn field_id_exists(&self, field_id_arg: String) -> RepoResult<bool>;
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> ColumnsRepoImpl<'a, T> {
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> ColumnsRepo for ColumnsRepoImpl<'a, T> {
    /// Returns all columns in display order
    fn list(&self) -> RepoResult<Vec<Column>> {
        let query = columns.order(ordinal.asc()).then_order_by(id.asc());

        query.get_results(self.db_conn).map_err(Error::from)
    }

    /// Find specific column by ID
    fn find(&self, column_id_arg: i32) -> RepoResult<Column> {
        columns
            .find(column_id_arg)
            .get_result::<Column>(self.db_conn)
            .map_err(Error::from)
    }

    /// Creates new column
    fn create(&self, payload: NewColumn) -> RepoResult<Column> {
        debug!("Create new column {:?}.", payload);
        let query = diesel::insert_into(columns).values(&payload);

        query.get_result::<Column>(self.db_conn).map_err(Error::from)
    }

    /// Updates specific column
    fn update(&self, column_id_arg: i32, payload: UpdateColumn) -> RepoResult<Column> {
        debug!("Update column {} with {:?}.", column_id_arg, payload);
        let filter = columns.filter(id.eq(column_id_arg));

        let query = diesel::update(filter).set(&payload);
        query.get_result::<Column>(self.db_conn).map_err(Error::from)
    }

    /// Deletes column by its field id
    fn delete_by_field_id(&self, field_id_arg: String) -> RepoResult<Column> {
        debug!("Delete column with field id {}.", field_id_arg);
        let filtered = columns.filter(field_id.eq(field_id_arg));

        let query = diesel::delete(filtered);
        query.get_result::<Column>(self.db_conn).map_err(Error::from)
    }

    /// Checks that field id already exists
    fn field_id_exists(&self, field_id_arg: String) -> RepoResult<bool> {
        let query = diesel::select(exists(columns.filter(field_id.eq(field_id_arg))));

        query.get_result(self.db_conn).map_err(Error::from)
    }
}
