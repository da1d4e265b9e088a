/*!
 * Request gate
 *
 * Responsibility:
 * - Classify request paths (public / protected / admin-scoped)
 * - Decide Allow / RedirectTo from (path, credential)
 * - No HTTP types here; the axum mapping lives in middleware::gate
 */

mod decision;
mod request_gate;
mod route;

pub use decision::Decision;
pub use request_gate::RequestGate;
pub use route::{GatePolicy, RouteClass};
