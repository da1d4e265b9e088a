/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Clone-cheap (Arc inside); the gate and its secret are read-only after startup
 */
use std::sync::Arc;

use crate::gate::RequestGate;

#[derive(Clone, Debug)]
pub struct AppState {
    pub gate: Arc<RequestGate>,
}

impl AppState {
    pub fn new(gate: Arc<RequestGate>) -> Self {
        Self { gate }
    }
}
