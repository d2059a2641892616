//! Tower layer placing the gate in front of any service.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{http::Request, response::Response};
use tower::{Layer, Service};

use crate::config::BlockPathConfig;
use crate::http::response::blocked;
use crate::interceptor::{Decision, Interceptor};
use crate::rules::RuleError;

/// Layer producing [`BlockPath`] services that share one compiled rule set.
#[derive(Debug, Clone)]
pub struct BlockPathLayer {
    interceptor: Arc<Interceptor>,
}

impl BlockPathLayer {
    /// Compile the rules once for every service this layer wraps.
    pub fn new(config: &BlockPathConfig, name: impl Into<String>) -> Result<Self, RuleError> {
        let interceptor = Interceptor::from_config(config, name)?;
        Ok(Self::from_interceptor(Arc::new(interceptor)))
    }

    pub fn from_interceptor(interceptor: Arc<Interceptor>) -> Self {
        Self { interceptor }
    }

    pub fn interceptor(&self) -> &Arc<Interceptor> {
        &self.interceptor
    }
}

impl<S> Layer<S> for BlockPathLayer {
    type Service = BlockPath<S>;

    fn layer(&self, next: S) -> Self::Service {
        BlockPath {
            interceptor: self.interceptor.clone(),
            next,
        }
    }
}

/// Service that blocks matching paths and forwards the rest to `next`.
#[derive(Debug, Clone)]
pub struct BlockPath<S> {
    interceptor: Arc<Interceptor>,
    next: S,
}

impl<S> BlockPath<S> {
    /// Build a gate in front of `next`. Fails if any pattern is malformed.
    pub fn new(
        next: S,
        config: &BlockPathConfig,
        name: impl Into<String>,
    ) -> Result<Self, RuleError> {
        Ok(BlockPathLayer::new(config, name)?.layer(next))
    }

    pub fn interceptor(&self) -> &Interceptor {
        &self.interceptor
    }
}

impl<S, B> Service<Request<B>> for BlockPath<S>
where
    S: Service<Request<B>, Response = Response>,
    S::Error: Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.next.poll_ready(cx)
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        match self.interceptor.handle(request.uri().path()) {
            Decision::Forward => Box::pin(self.next.call(request)),
            Decision::Block { status_code, body } => {
                let response = blocked(
                    self.interceptor.name(),
                    request.uri().path(),
                    status_code,
                    body,
                );
                Box::pin(std::future::ready(Ok(response)))
            }
        }
    }
}
