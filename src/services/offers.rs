//! Offers Services, presents CRUD operations with offers and their values

use std::collections::{HashMap, HashSet};

use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::Connection;
use futures_cpupool::CpuPool;
use r2d2::{ManageConnection, Pool};

use super::error::ServiceError;
use super::types::ServiceFuture;
use models::{Column, FieldKind, NewOffer, NewOfferValue, Offer, OfferValue, OfferValueWithCell, OfferWithValues};
use repos::{OfferValuesRepo, OffersRepo, ReposFactory};

pub trait OffersService {
    /// Returns offer by ID with its values
    fn get(&self, offer_id: i32) -> ServiceFuture<OfferWithValues>;
    /// Returns all offers with values, most recently updated first
    fn list(&self) -> ServiceFuture<Vec<OfferWithValues>>;
    /// Creates new offer with its value set
    fn create(&self, payload: NewOffer) -> ServiceFuture<OfferWithValues>;
    /// Replaces the full value set of an offer
    fn update(&self, offer_id: i32, payload: NewOffer) -> ServiceFuture<OfferWithValues>;
    /// Deletes offer together with its values
    fn delete(&self, offer_id: i32) -> ServiceFuture<OfferWithValues>;
}

/// Offers services, responsible for Offer-related CRUD operations
pub struct OffersServiceImpl<
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
    > OffersServiceImpl<T, M, F>
{
    pub fn new(db_pool: Pool<M>, cpu_pool: CpuPool, repo_factory: F) -> Self {
        Self {
            db_pool,
            cpu_pool,
            repo_factory,
        }
    }
}

/// Display kinds of all known fields, keyed by field id
fn kinds_by_field(columns: Vec<Column>) -> HashMap<String, FieldKind> {
    columns
        .into_iter()
        .map(|column| {
            let kind = column.kind();
            (column.field_id, kind)
        })
        .collect()
}

fn compose_offer(offer: Offer, values: Vec<OfferValue>, kinds: &HashMap<String, FieldKind>) -> OfferWithValues {
    let values = values
        .into_iter()
        .map(|value| {
            let kind = kinds.get(&value.field_id).cloned().unwrap_or(FieldKind::Text);
            OfferValueWithCell::new(value, kind)
        })
        .collect();

    OfferWithValues::new(offer, values)
}

/// Every incoming value must name a known field, and name it only once
fn check_value_fields(payload: &NewOffer, kinds: &HashMap<String, FieldKind>) -> Result<(), ServiceError> {
    let mut seen = HashSet::new();
    for value in &payload.values {
        if !kinds.contains_key(&value.field_id) {
            return Err(ServiceError::Validate(
                validation_errors!({"values": ["field_id" => "Value references an unknown field id"]}),
            ));
        }
        if !seen.insert(value.field_id.clone()) {
            return Err(ServiceError::Validate(
                validation_errors!({"values": ["field_id" => "Duplicate field id in value set"]}),
            ));
        }
    }
    Ok(())
}

fn replace_values<'a>(
    offer_id: i32,
    payload: NewOffer,
    offers_repo: &Box<OffersRepo + 'a>,
    offer_values_repo: &Box<OfferValuesRepo + 'a>,
) -> Result<(Offer, Vec<OfferValue>), ServiceError> {
    offer_values_repo
        .delete_by_offer(offer_id)
        .map_err(ServiceError::from)?;
    let values = offer_values_repo
        .create(NewOfferValue::into_vec(offer_id, payload.values))
        .map_err(ServiceError::from)?;
    let offer = offers_repo.touch(offer_id).map_err(ServiceError::from)?;

    Ok((offer, values))
}

impl<
        T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static,
        M: ManageConnection<Connection = T>,
        F: ReposFactory<T>,
    > OffersService for OffersServiceImpl<T, M, F>
{
    /// Returns offer by ID with its values
    fn get(&self, offer_id: i32) -> ServiceFuture<OfferWithValues> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| ServiceError::Connection(e.to_string()))
                .and_then(move |conn| {
                    let columns_repo = repo_factory.create_columns_repo(&*conn);
                    let offers_repo = repo_factory.create_offers_repo(&*conn);
                    let offer_values_repo = repo_factory.create_offer_values_repo(&*conn);

                    let kinds = kinds_by_field(columns_repo.list().map_err(ServiceError::from)?);
                    let offer = offers_repo.find(offer_id).map_err(ServiceError::from)?;
                    let values = offer_values_repo
                        .find_by_offer(offer_id)
                        .map_err(ServiceError::from)?;

                    Ok(compose_offer(offer, values, &kinds))
                })
        }))
    }

    /// Returns all offers with values, most recently updated first
    fn list(&self) -> ServiceFuture<Vec<OfferWithValues>> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| ServiceError::Connection(e.to_string()))
                .and_then(move |conn| {
                    let columns_repo = repo_factory.create_columns_repo(&*conn);
                    let offers_repo = repo_factory.create_offers_repo(&*conn);
                    let offer_values_repo = repo_factory.create_offer_values_repo(&*conn);

                    let kinds = kinds_by_field(columns_repo.list().map_err(ServiceError::from)?);
                    let offers = offers_repo.list().map_err(ServiceError::from)?;

                    offers
                        .into_iter()
                        .map(|offer| {
                            let values = offer_values_repo
                                .find_by_offer(offer.id)
                                .map_err(ServiceError::from)?;
                            Ok(compose_offer(offer, values, &kinds))
                        })
                        .collect()
                })
        }))
    }

    /// Creates new offer with its value set
    fn create(&self, payload: NewOffer) -> ServiceFuture<OfferWithValues> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| ServiceError::Connection(e.to_string()))
                .and_then(move |conn| {
                    let columns_repo = repo_factory.create_columns_repo(&*conn);
                    let offers_repo = repo_factory.create_offers_repo(&*conn);
                    let offer_values_repo = repo_factory.create_offer_values_repo(&*conn);

                    conn.transaction::<OfferWithValues, ServiceError, _>(move || {
                        let kinds = kinds_by_field(columns_repo.list().map_err(ServiceError::from)?);
                        check_value_fields(&payload, &kinds)?;

                        let offer = offers_repo.create().map_err(ServiceError::from)?;
                        let values = offer_values_repo
                            .create(NewOfferValue::into_vec(offer.id, payload.values))
                            .map_err(ServiceError::from)?;

                        Ok(compose_offer(offer, values, &kinds))
                    })
                })
        }))
    }

    /// Replaces the full value set of an offer
    fn update(&self, offer_id: i32, payload: NewOffer) -> ServiceFuture<OfferWithValues> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| ServiceError::Connection(e.to_string()))
                .and_then(move |conn| {
                    let columns_repo = repo_factory.create_columns_repo(&*conn);
                    let offers_repo = repo_factory.create_offers_repo(&*conn);
                    let offer_values_repo = repo_factory.create_offer_values_repo(&*conn);

                    // delete-then-recreate of the value set must not be
                    // observable half-done
                    conn.transaction::<OfferWithValues, ServiceError, _>(move || {
                        let kinds = kinds_by_field(columns_repo.list().map_err(ServiceError::from)?);
                        check_value_fields(&payload, &kinds)?;

                        offers_repo.find(offer_id).map_err(ServiceError::from)?;
                        let (offer, values) = replace_values(offer_id, payload, &offers_repo, &offer_values_repo)?;

                        Ok(compose_offer(offer, values, &kinds))
                    })
                })
        }))
    }

    /// Deletes offer together with its values
    fn delete(&self, offer_id: i32) -> ServiceFuture<OfferWithValues> {
        let db_pool = self.db_pool.clone();
        let repo_factory = self.repo_factory.clone();

        Box::new(self.cpu_pool.spawn_fn(move || {
            db_pool
                .get()
                .map_err(|e| ServiceError::Connection(e.to_string()))
                .and_then(move |conn| {
                    let columns_repo = repo_factory.create_columns_repo(&*conn);
                    let offers_repo = repo_factory.create_offers_repo(&*conn);
                    let offer_values_repo = repo_factory.create_offer_values_repo(&*conn);

                    conn.transaction::<OfferWithValues, ServiceError, _>(move || {
                        let kinds = kinds_by_field(columns_repo.list().map_err(ServiceError::from)?);
                        let values = offer_values_repo
                            .delete_by_offer(offer_id)
                            .map_err(ServiceError::from)?;
                        let offer = offers_repo.delete(offer_id).map_err(ServiceError::from)?;

                        Ok(compose_offer(offer, values, &kinds))
                    })
                })
        }))
    }
}
