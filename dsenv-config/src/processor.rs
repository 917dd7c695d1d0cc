//! Hook for components that rewrite the configuration store at startup.

use crate::store::ConfigStore;

/// A component that inspects the configuration store once during startup and
/// may install additional property sources before anything reads them.
///
/// Implementations must be idempotent: running the same processor twice
/// against the same store leaves the store as a single run would.
pub trait EnvironmentPostProcessor {
    /// What the processor reports back to its caller.
    type Outcome;

    /// Name used in logs.
    fn name(&self) -> &str;

    /// Inspect and update the store.
    fn post_process(&self, store: &mut ConfigStore) -> Self::Outcome;
}
