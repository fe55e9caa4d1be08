use axum::{
    extract::Request,
    http::{header, HeaderValue},
    response::Response,
};
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use tower::{Layer, Service};

pub const CACHE_CONTROL: &str = "no-cache, no-store, must-revalidate";
pub const PRAGMA: &str = "no-cache";
pub const EXPIRES: &str = "0";

/// Forces clients to revalidate on every request. Applied to every
/// response the server produces, errors and redirects included.
#[derive(Clone, Default)]
pub struct NoCacheLayer;

impl NoCacheLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for NoCacheLayer {
    type Service = NoCacheService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        NoCacheService { inner }
    }
}

#[derive(Clone)]
pub struct NoCacheService<S> {
    inner: S,
}

impl<S> Service<Request> for NoCacheService<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let mut response = inner.call(request).await?;

            let headers = response.headers_mut();
            headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL));
            headers.insert(header::PRAGMA, HeaderValue::from_static(PRAGMA));
            headers.insert(header::EXPIRES, HeaderValue::from_static(EXPIRES));

            Ok(response)
        })
    }
}
