/*
 * Responsibility
 * - Public interface of the middleware layers
 * - gate::apply (cookie credential → Allow / redirect), http::apply, security_headers::apply
 */
pub mod gate;
pub mod http;
pub mod security_headers;
