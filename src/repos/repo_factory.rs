use diesel::connection::AnsiTransactionManager;
use diesel::pg::Pg;
use diesel::Connection;

use repos::*;

/// Creates repo instances for services, so that services stay generic
/// over the connection type and tests can substitute mocks.
pub trait ReposFactory<C: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static>:
    Clone + Send + 'static
{
    fn create_columns_repo<'a>(&self, db_conn: &'a C) -> Box<ColumnsRepo + 'a>;
    fn create_offers_repo<'a>(&self, db_conn: &'a C) -> Box<OffersRepo + 'a>;
    fn create_offer_values_repo<'a>(&self, db_conn: &'a C) -> Box<OfferValuesRepo + 'a>;
}

#[derive(Default, Copy, Clone)]
pub struct ReposFactoryImpl;

impl<C: Connection<Backend = Pg, TransactionManager = AnsiTransactionManager> + 'static> ReposFactory<C> for ReposFactoryImpl {
    fn create_columns_repo<'a>(&self, db_conn: &'a C) -> Box<ColumnsRepo + 'a> {
        Box::new(ColumnsRepoImpl::new(db_conn)) as Box<ColumnsRepo>
    }
    fn create_offers_repo<'a>(&self, db_conn: &'a C) -> Box<OffersRepo + 'a> {
        Box::new(OffersRepoImpl::new(db_conn)) as Box<OffersRepo>
    }
    fn create_offer_values_repo<'a>(&self, db_conn: &'a C) -> Box<OfferValuesRepo + 'a> {
        Box::new(OfferValuesRepoImpl::new(db_conn)) as Box<OfferValuesRepo>
    }
}
