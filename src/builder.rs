use crate::error::EditError;
use crate::traits::Cost;
use crate::weights::Weights;
use crate::DistanceEngine;

pub struct DistanceEngineBuilder<C> {
    weights: Weights<C>,
    capacity: Option<usize>,
}

impl DistanceEngineBuilder<usize> {
    pub fn new() -> Self {
        Self::with_weights(Weights::unit())
    }
}

impl Default for DistanceEngineBuilder<usize> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Cost> DistanceEngineBuilder<C> {
    pub fn with_weights(weights: Weights<C>) -> Self {
        Self {
            weights,
            capacity: None,
        }
    }
    /// Pre-size the row buffer for shorter operands of up to `max_len` elements.
    pub fn with_capacity(mut self, max_len: usize) -> Self {
        self.capacity = Some(max_len);
        self
    }
    pub fn build(self) -> Result<DistanceEngine<C>, EditError> {
        let mut engine = DistanceEngine::with_weights(self.weights);
        if let Some(max_len) = self.capacity {
            let cells = max_len.checked_add(1).ok_or(EditError::CapacityOverflow {
                rows: 1,
                cols: max_len,
            })?;
            engine.ensure_capacity(cells)?;
        }
        Ok(engine)
    }
}
