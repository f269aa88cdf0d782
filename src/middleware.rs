//! Request tracking middleware
//!
//! Request ID generation and propagation plus sensitive-header masking for
//! the trace layer.

use axum::http::header::{AUTHORIZATION, COOKIE, SET_COOKIE};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    sensitive_headers::SetSensitiveRequestHeadersLayer,
};

/// Create a request ID layer that stamps each request with a UUID
pub fn request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Create a request ID propagation layer (echoes the id on the response)
pub fn request_id_propagation_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}

/// Create a sensitive headers layer so credentials never reach the logs
pub fn sensitive_headers_layer() -> SetSensitiveRequestHeadersLayer {
    SetSensitiveRequestHeadersLayer::new([AUTHORIZATION, COOKIE, SET_COOKIE])
}
