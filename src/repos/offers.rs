//! Offers repo, presents CRUD operations with db for offers
use diesel;
use diesel::connection::AnsiTransactionManager;
use diesel::dsl::now;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::query_dsl::RunQueryDsl;
use diesel::Connection;

use models::Offer;
use repos::error::RepoError as Error;
use repos::types::RepoResult;
use schema::offers::dsl::*;

/// Offers repository, responsible for handling offers
pub struct OffersRepoImpl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> {
    pub db_conn: &'a T,
}

pub trait OffersRepo {
    /// Find specific offer by ID
    fn find(&self, offer_id_arg: i32) -> RepoResult<Offer>;

    /// Returns all offers, most recently updated first
    fn list(&self) -> RepoResult<Vec<Offer>>;

    /// Creates new empty offer row; timestamps are generated at db level
    fn create(&self) -> RepoResult<Offer>;

    /// Bumps the offer's updated_at
    fn touch(&self, offer_id_arg: i32) -> RepoResult<Offer>;

    /// Deletes specific offer
    fn delete(&self, offer_id_arg: i32) -> RepoResult<Offer>;
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> OffersRepoImpl<'a, T> {
    pub fn new(db_conn: &'a T) -> Self {
        Self { db_conn }
    }
}

impl<'a, T: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> OffersRepo for OffersRepoImpl<'a, T> {
    /// Find specific offer by ID
    fn find(&self, offer_id_arg: i32) -> RepoResult<Offer> {
        offers
            .find(offer_id_arg)
            .get_result::<Offer>(self.db_conn)
            .map_err(Error::from)
    }

    /// Returns all offers, most recently updated first
    fn list(&self) -> RepoResult<Vec<Offer>> {
        let query = offers.order(updated_at.desc()).then_order_by(id.desc());

        query.get_results(self.db_conn).map_err(Error::from)
    }

    /// Creates new empty offer row; timestamps are generated at db level
    fn create(&self) -> RepoResult<Offer> {
        debug!("Create new offer.");
        let query = diesel::insert_into(offers).default_values();

        query.get_result::<Offer>(self.db_conn).map_err(Error::from)
    }

    /// Bumps the offer's updated_at
    fn touch(&self, offer_id_arg: i32) -> RepoResult<Offer> {
        let query = diesel::update(offers.find(offer_id_arg)).set(updated_at.eq(now));

        query.get_result::<Offer>(self.db_conn).map_err(Error::from)
    }

    /// Deletes specific offer
    fn delete(&self, offer_id_arg: i32) -> RepoResult<Offer> {
        debug!("Delete offer with id {}.", offer_id_arg);
        let query = diesel::delete(offers.find(offer_id_arg));

        query.get_result::<Offer>(self.db_conn).map_err(Error::from)
    }
}
