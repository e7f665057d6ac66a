//! Application is the top-level hyper service: it hands requests to the
//! `Controller` and renders its output (or error) as a JSON response.

use futures::{future, Future};
use hyper;
use hyper::header::{ContentLength, ContentType};
use hyper::server::{Request, Response, Service};
use hyper::StatusCode;
use serde_json;

use super::error::{ControllerError, ErrorMessage};
use super::Controller;

pub struct Application {
    pub controller: Controller,
}

impl Application {
    pub fn new(controller: Controller) -> Self {
        Self { controller }
    }
}

impl Service for Application {
    type Request = Request;
    type Response = Response;
    type Error = hyper::Error;
    type Future = Box<Future<Item = Response, Error = hyper::Error>>;

    fn call(&self, req: Request) -> Self::Future {
        debug!("{} {}", req.method(), req.path());

        Box::new(self.controller.call(req).then(|res| match res {
            Ok(data) => future::ok(render_response(StatusCode::Ok, data)),
            Err(err) => {
                if let ControllerError::InternalServerError(ref cause) = err {
                    error!("Internal server error: {}", cause);
                }
                let message = ErrorMessage {
                    code: err.code().as_u16(),
                    message: err.message(),
                };
                let body = serde_json::to_string(&message).unwrap_or_default();
                future::ok(render_response(err.code(), body))
            }
        }))
    }
}

fn render_response(status: StatusCode, body: String) -> Response {
    Response::new()
        .with_status(status)
        .with_header(ContentLength(body.len() as u64))
        .with_header(ContentType::json())
        .with_body(body)
}
