//! Columns Services, presents CRUD operations with columns

use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::Connection;
use futures::future;
use futures_cpupool::CpuPool;
use r2d2::{ManageConnection, Pool};
use validator::Validate;

use super::error::ServiceError;
use super::types::ServiceFuture;
use models::{Column, ColumnWithKind, NewColumn, UpdateColumn};
use repos::ReposFactory;

pub trait ColumnsService {
    /// Returns all columns in display order
    fn list(&self) -> ServiceFuture<Vec<ColumnWithKind>>;
    /// Creates new column
    fn create(&self, payload: NewColumn) -> ServiceFuture<ColumnWithKind>;
    /// Updates specific column
    fn update(&self, column_id: i32, payload: UpdateColumn) -> ServiceFuture<ColumnWithKind>;
    /// Deletes column by field id, cascading removal of its offer values
    fn delete_by_field_id(&self, field_id: String) -> ServiceFuture<ColumnWithKind>;
}

/// Columns services, responsible for Column-related CRUD operations
pub struct ColumnsServiceImpl<
    T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
    M: ManageConnection<Connection = T>,
    F: ReposFactory<T>,
> {
    pub db_pool: Pool<M>,
    pub cpu_pool: CpuPool,
    pub repo_factory: F,
}

impl<
        T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
        M: ManageConnection<Connection = T>,
        F: ReposFactory<T>,
    > ColumnsServiceImpl<T, M, F>
{
    pub fn new(db_pool: Pool<M>, cpu_pool: CpuPool, repo_factory: F) -> Self {
        Self {
            db_pool,
            cpu_pool,
            repo_factory,
        }
    }
}

impl<
        T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
        M: ManageConnection<Connection = T>,
        F: ReposFactory<T>,
    > ColumnsService for ColumnsServiceImpl<T, M, F>
{
    /// Returns all columns in display order
    fn list(&self) -> ServiceFuture<Vec<ColumnWithKind>> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| ServiceError::Connection(e.to_string()))
                .and_then(move |conn| {
                    let columns_repo = repo_factory.create_columns_repo(&*conn);
                    columns_repo
                        .list()
                        .map_err(ServiceError::from)
                        .map(|columns| columns.into_iter().map(ColumnWithKind::new).collect())
                })
        }))
    }

    /// Creates new column
    fn create(&self, payload: NewColumn) -> ServiceFuture<ColumnWithKind> {
        if let Err(e) = payload.validate() {
            return Box::new(future::err(ServiceError::Validate(e)));
        }

        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| ServiceError::Connection(e.to_string()))
                .and_then(move |conn| {
                    let columns_repo = repo_factory.create_columns_repo(&*conn);
                    columns_repo
                        .field_id_exists(payload.field_id.clone())
                        .map_err(ServiceError::from)
                        .and_then(|exists| {
                            if exists {
                                Err(ServiceError::Validate(
                                    validation_errors!({"field_id": ["field_id" => "Column with this field id already exists"]}),
                                ))
                            } else {
                                Ok(())
                            }
                        })
                        .and_then(move |_| columns_repo.create(payload).map_err(ServiceError::from))
                        .map(ColumnWithKind::new)
                })
        }))
    }

    /// Updates specific column
    fn update(&self, column_id: i32, payload: UpdateColumn) -> ServiceFuture<ColumnWithKind> {
        if let Err(e) = payload.validate() {
            return Box::new(future::err(ServiceError::Validate(e)));
        }

        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| ServiceError::Connection(e.to_string()))
                .and_then(move |conn| {
                    let columns_repo = repo_factory.create_columns_repo(&*conn);
                    columns_repo
                        .find(column_id)
                        .and_then(move |_| columns_repo.update(column_id, payload))
                        .map_err(ServiceError::from)
                        .map(ColumnWithKind::new)
                })
        }))
    }

    /// Deletes column by field id, cascading removal of its offer values
    fn delete_by_field_id(&self, field_id: String) -> ServiceFuture<ColumnWithKind> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| ServiceError::Connection(e.to_string()))
                .and_then(move |conn| {
                    let columns_repo = repo_factory.create_columns_repo(&*conn);
                    let offer_values_repo = repo_factory.create_offer_values_repo(&*conn);

                    conn.transaction::<Column, ServiceError, _>(move || {
                        offer_values_repo
                            .delete_by_field_id(field_id.clone())
                            .map_err(ServiceError::from)
                            .and_then(move |_| {
                                columns_repo
                                    .delete_by_field_id(field_id)
                                    .map_err(ServiceError::from)
                            })
                    })
                    .map(ColumnWithKind::new)
                })
        }))
    }
}
