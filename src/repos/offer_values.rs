//! Offer values repo, presents operations with db for the cells of an offer
use diesel;
use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_dsl::RunQueryDsl;
use diesel::Connection;

use models::{NewOfferValue, OfferValue};
use repos::error::RepoError as Error;
use repos::types::RepoResult;
use schema::offer_values::dsl::*;

/// Offer values repository, responsible for handling offer_values
pub struct OfferValuesRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

pub trait OfferValuesRepo {
    /// Find all values belonging to an offer
    fn find_by_offer(&self, offer_id_arg: i32) -> RepoResult<Vec<OfferValue>>;

    /// Creates new offer values
    fn create(&self, payload: Vec<NewOfferValue>) -> RepoResult<Vec<OfferValue>>;

    /// Deletes all values of an offer
    fn delete_by_offer(&self, offer_id_arg: i32) -> RepoResult<Vec<OfferValue>>;

    /// Deletes all values stored under a field, used when its column goes away
    fn delete_by_field_id(&self, field_id_arg: String) -> RepoResult<Vec<OfferValue>>;
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> OfferValuesRepoImpl<'a, T> {
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> OfferValuesRepo
    for OfferValuesRepoImpl<'a, T>
{
    /// Find all values belonging to an offer
    fn find_by_offer(&self, offer_id_arg: i32) -> RepoResult<Vec<OfferValue>> {
        let query = offer_values.filter(offer_id.eq(offer_id_arg)).order(id);

        query.get_results(self.db_conn).map_err(Error::from)
    }

    /// Creates new offer values
    fn create(&self, payload: Vec<NewOfferValue>) -> RepoResult<Vec<OfferValue>> {
        debug!("Create new offer values {:?}.", payload);
        let query = diesel::insert_into(offer_values).values(&payload);

        query
            .get_results::<OfferValue>(self.db_conn)
            .map_err(Error::from)
    }

    /// Deletes all values of an offer
    fn delete_by_offer(&self, offer_id_arg: i32) -> RepoResult<Vec<OfferValue>> {
        debug!("Delete offer values for offer id {}.", offer_id_arg);
        let filtered = offer_values.filter(offer_id.eq(offer_id_arg));

        let query = diesel::delete(filtered);
        query
            .get_results::<OfferValue>(self.db_conn)
            .map_err(Error::from)
    }

    /// Deletes all values stored under a field, used when its column goes away
    fn delete_by_field_id(&self, field_id_arg: String) -> RepoResult<Vec<OfferValue>> {
        debug!("Delete offer values for field id {}.", field_id_arg);
        let filtered = offer_values.filter(field_id.eq(field_id_arg));

        let query = diesel::delete(filtered);
        query
            .get_results::<OfferValue>(self.db_conn)
            .map_err(Error::from)
    }
}
