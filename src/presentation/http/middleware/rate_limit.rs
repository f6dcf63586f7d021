// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::sync::OnceLock;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

const REQUESTS_PER_SECOND: u64 = 2;
const BURST_SIZE: u32 = 10;

/// Per-client limiter for write endpoints (comments, newsletter, detail
/// mounts, which may trigger generation). Keys on forwarded headers first and
/// falls back to the peer address, so the server must be started with
/// connect info. `None` if the limiter configuration is rejected.
pub fn rate_limit_layer() -> Option<RateLimitLayer> {
    static RATE_LIMITER: OnceLock<Option<RateLimitLayer>> = OnceLock::new();

    RATE_LIMITER
        .get_or_init(|| {
            let mut builder = GovernorConfigBuilder::default();
            builder.per_second(REQUESTS_PER_SECOND);
            builder.burst_size(BURST_SIZE);
            let Some(config) = builder.key_extractor(SmartIpKeyExtractor).finish() else {
                tracing::error!("invalid rate limit configuration, limiter disabled");
                return None;
            };

            Some(GovernorLayer::new(config))
        })
        .clone()
}
