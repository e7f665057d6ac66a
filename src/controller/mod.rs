//! `Controller` is a top layer that handles all http-related
//! stuff like reading bodies, parsing params, forming a response.
//! Basically it provides inputs to `Service` layer and converts outputs
//! of `Service` layer to http responses

pub mod application;
pub mod error;
pub mod router;
pub mod routes;
pub mod types;
pub mod utils;

use std::sync::Arc;

use futures::future;
use futures::Future;
use futures_cpupool::CpuPool;
use hyper::server::Request;
use hyper::{Delete, Get, Post, Put};
use serde_json;

use self::error::ControllerError as Error;
use self::routes::{create_route_parser, Route};
use self::router::RouteParser;
use self::types::ControllerFuture;
use self::utils::parse_body;
use models;
use repos::types::DbPool;
use repos::ReposFactoryImpl;
use services::columns::{ColumnsService, ColumnsServiceImpl};
use services::offers::{OffersService, OffersServiceImpl};
use services::system::{SystemService, SystemServiceImpl};

/// Controller handles route parsing and calling `Service` layer
pub struct Controller {
    pub db_pool: DbPool,
    pub cpu_pool: CpuPool,
    pub route_parser: Arc<RouteParser<Route>>,
    pub repo_factory: ReposFactoryImpl,
}

macro_rules! serialize_future {
    ($e:expr) => {
        Box::new(
            $e.map_err(|e| Error::from(e))
                .and_then(|resp| serde_json::to_string(&resp).map_err(|e| Error::from(e))),
        )
    };
}

impl Controller {
    /// Create a new controller based on services
    pub fn new(db_pool: DbPool, cpu_pool: CpuPool, repo_factory: ReposFactoryImpl) -> Self {
        let route_parser = Arc::new(create_route_parser());
        Self {
            db_pool,
            cpu_pool,
            route_parser,
            repo_factory,
        }
    }

    /// Handle a request and get future response
    pub fn call(&self, req: Request) -> ControllerFuture {
        let (method, uri, _, _, body) = req.deconstruct();

        let system_service = SystemServiceImpl::default();
        let columns_service = ColumnsServiceImpl::new(self.db_pool.clone(), self.cpu_pool.clone(), self.repo_factory);
        let offers_service = OffersServiceImpl::new(self.db_pool.clone(), self.cpu_pool.clone(), self.repo_factory);

        match (&method, self.route_parser.test(uri.path())) {
            // GET /healthcheck
            (&Get, Some(Route::Healthcheck)) => serialize_future!(system_service.healthcheck()),

            // GET /columns
            (&Get, Some(Route::Columns)) => serialize_future!(columns_service.list()),

            // POST /columns
            (&Post, Some(Route::Columns)) => serialize_future!(
                parse_body::<models::NewColumn>(body)
                    .and_then(move |new_column| columns_service.create(new_column).map_err(Error::from))
            ),

            // PUT /columns/<column_id>
            (&Put, Some(Route::Column(column_id))) => serialize_future!(
                parse_body::<models::UpdateColumn>(body)
                    .and_then(move |update_column| columns_service.update(column_id, update_column).map_err(Error::from))
            ),

            // DELETE /columns?field_id=<slug>
            (&Delete, Some(Route::Columns)) => {
                if let Some(field_id) = parse_query!(uri.query().unwrap_or_default(), "field_id" => String) {
                    serialize_future!(columns_service.delete_by_field_id(field_id))
                } else {
                    Box::new(future::err(Error::Parse("Missing field_id query parameter".to_string())))
                }
            }

            // GET /offers
            (&Get, Some(Route::Offers)) => serialize_future!(offers_service.list()),

            // GET /offers/<offer_id>
            (&Get, Some(Route::Offer(offer_id))) => serialize_future!(offers_service.get(offer_id)),

            // POST /offers
            (&Post, Some(Route::Offers)) => serialize_future!(
                parse_body::<models::NewOffer>(body)
                    .and_then(move |new_offer| offers_service.create(new_offer).map_err(Error::from))
            ),

            // PUT /offers/<offer_id>
            (&Put, Some(Route::Offer(offer_id))) => serialize_future!(
                parse_body::<models::NewOffer>(body)
                    .and_then(move |new_offer| offers_service.update(offer_id, new_offer).map_err(Error::from))
            ),

            // DELETE /offers/<offer_id>
            (&Delete, Some(Route::Offer(offer_id))) => serialize_future!(offers_service.delete(offer_id)),

            // Fallback
            _ => Box::new(future::err(Error::NotFound)),
        }
    }
}
