//! Controller utils, presents some helpers for parsing requests

use std::collections::HashMap;
use std::iter::FromIterator;

use futures::{future, Future, Stream};
use hyper;
use hyper::Body;
use serde::de::DeserializeOwned;
use serde_json;

use super::error::ControllerError;

/// Splits a query string into key-value pairs
pub fn query_params(query: &str) -> HashMap<&str, &str> {
    HashMap::from_iter(query.split('&').filter_map(|pair| {
        let mut params = pair.split('=');
        params.next().map(|key| (key, params.next().unwrap_or("")))
    }))
}

/// Reads request body and deserializes it as JSON
pub fn parse_body<T>(body: Body) -> Box<Future<Item = T, Error = ControllerError>>
where
    T: DeserializeOwned + 'static,
{
    Box::new(
        read_body(body)
            .map_err(|e| ControllerError::Parse(e.to_string()))
            .and_then(|s| serde_json::from_str::<T>(&s).map_err(|e| ControllerError::Parse(e.to_string()))),
    )
}

/// Reads request body and returns it as a string
pub fn read_body(body: Body) -> Box<Future<Item = String, Error = hyper::Error>> {
    Box::new(
        body.fold(Vec::new(), |mut acc, chunk| {
            acc.extend_from_slice(&*chunk);
            future::ok::<_, hyper::Error>(acc)
        })
        .and_then(|bytes| match String::from_utf8(bytes) {
            Ok(data) => future::ok(data),
            Err(e) => future::err(hyper::Error::Utf8(e.utf8_error())),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_query_params() {
        let params = query_params("field_id=total_price&unused=");
        assert_eq!(params.get("field_id"), Some(&"total_price"));
        assert_eq!(params.get("unused"), Some(&""));
        assert_eq!(params.get("missing"), None);
    }
}
