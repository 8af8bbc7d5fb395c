//! Optimize use-case: validate, ask the optimizer, diff, remember.

use crate::application::diff;
use crate::domain::{
    DiffLine, DiffMode, HistoryEntry, Language, OptimizationRequest, OptimizationResult,
    OptimizeError,
};
use crate::infra::history_store::HistoryStore;
use async_trait::async_trait;

/// The external service that rewrites code. Opaque to this crate.
#[async_trait]
pub trait CodeOptimizer: Send + Sync {
    async fn optimize(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizationResult, OptimizeError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizationOutcome {
    pub result: OptimizationResult,
    /// Empty when either text is empty.
    pub diff: Vec<DiffLine>,
}

pub struct OptimizeService<O: CodeOptimizer> {
    optimizer: O,
    history: Option<HistoryStore>,
    mode: DiffMode,
}

impl<O: CodeOptimizer> OptimizeService<O> {
    pub fn new(optimizer: O) -> Self {
        Self {
            optimizer,
            history: None,
            mode: DiffMode::default(),
        }
    }

    pub fn with_history(mut self, store: HistoryStore) -> Self {
        self.history = Some(store);
        self
    }

    pub fn with_diff_mode(mut self, mode: DiffMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn history(&self) -> Option<&HistoryStore> {
        self.history.as_ref()
    }

    pub async fn optimize(
        &mut self,
        code: &str,
        language: Language,
    ) -> Result<OptimizationOutcome, OptimizeError> {
        if code.trim().is_empty() {
            return Err(OptimizeError::MissingInput);
        }

        let request = OptimizationRequest {
            code: code.to_string(),
            language,
        };
        let result = self.optimizer.optimize(&request).await?;

        let diff = if result.optimized_code.is_empty() {
            Vec::new()
        } else {
            diff::diff(code, &result.optimized_code, self.mode)
        };

        if let Some(store) = self.history.as_mut()
            && let Err(err) = store.record(HistoryEntry::new(language, code, &result))
        {
            log::warn!("Failed to record optimization history: {}", err);
        }

        Ok(OptimizationOutcome { result, diff })
    }
}
