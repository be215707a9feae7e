//! Reconciliation queue: deferred application of stock deltas.
//!
//! Cart mutations must not reach into the product store while their own
//! state transition is in flight, so they hand back [`StockDelta`]s instead.
//! The caller pushes those onto a [`DeltaQueue`] and runs a reconciliation
//! pass at a safe point - an explicit two-step API rather than an implicit
//! "apply on next UI tick" side effect.
//!
//! Deltas are applied strictly in enqueue order with no coalescing. Two
//! deltas for the same product become two sequential adjustments; the net
//! result matches one combined adjustment only because stock addition is
//! commutative.

use std::collections::VecDeque;

use sdfm_core::StockDelta;
use tracing::debug;

use crate::catalog::ProductStore;
use crate::error::Result;

/// FIFO queue of pending stock adjustments.
#[derive(Debug, Default)]
pub struct DeltaQueue {
    pending: VecDeque<StockDelta>,
}

impl DeltaQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append deltas in order.
    pub fn push_all(&mut self, deltas: impl IntoIterator<Item = StockDelta>) {
        self.pending.extend(deltas);
    }

    /// Number of deltas awaiting reconciliation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Apply every pending delta to the product store in enqueue order,
    /// then clear the queue. Each delta is consumed exactly once; deltas
    /// are never replayed after a partial failure.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting a stock adjustment fails. Deltas
    /// already applied stay applied; the failed delta and everything after
    /// it are dropped with the queue.
    pub fn reconcile(&mut self, catalog: &mut ProductStore) -> Result<usize> {
        let mut applied = 0;
        while let Some(delta) = self.pending.pop_front() {
            let outcome = catalog.adjust_stock(&delta.product_id, delta.change);
            if let Err(e) = outcome {
                self.pending.clear();
                return Err(e);
            }
            applied += 1;
        }
        if applied > 0 {
            debug!(applied, "Reconciled stock deltas");
        }
        Ok(applied)
    }
}
