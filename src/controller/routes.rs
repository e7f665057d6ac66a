use super::router::RouteParser;

/// List of all routes with params for the app
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    Healthcheck,
    Columns,
    Column(i32),
    Offers,
    Offer(i32),
}

pub fn create_route_parser() -> RouteParser<Route> {
    let mut router = RouteParser::default();

    // Healthcheck
    router.add_route(r"^/healthcheck$", || Route::Healthcheck);

    // Columns routes
    router.add_route(r"^/columns$", || Route::Columns);

    // Columns/:id route
    router.add_route_with_params(r"^/columns/(\d+)$", |params| {
        params
            .get(0)
            .and_then(|string_id| string_id.parse::<i32>().ok())
            .map(Route::Column)
    });

    // Offers routes
    router.add_route(r"^/offers$", || Route::Offers);

    // Offers/:id route
    router.add_route_with_params(r"^/offers/(\d+)$", |params| {
        params
            .get(0)
            .and_then(|string_id| string_id.parse::<i32>().ok())
            .map(Route::Offer)
    });

    router
}
