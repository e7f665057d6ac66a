//! System service, responsible for common endpoints like healthcheck

use futures::future;

use super::types::ServiceFuture;

pub trait SystemService {
    /// Returns "Ok" if the service is ready to process requests
    fn healthcheck(&self) -> ServiceFuture<String>;
}

#[derive(Clone, Copy, Default)]
pub struct SystemServiceImpl;

impl SystemService for SystemServiceImpl {
    fn healthcheck(&self) -> ServiceFuture<String> {
        Box::new(future::ok("Ok".to_string()))
    }
}
