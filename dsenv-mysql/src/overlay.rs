//! Installs resolved overrides as the highest-priority property source.

use dsenv_config::ConfigStore;
use tracing::debug;

use crate::resolver::DatasourceOverrides;

/// What [`install_overlay`] did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayOutcome {
    /// A new source was inserted with the highest priority.
    Inserted,
    /// An existing source with the same name was replaced in place.
    Replaced,
    /// There was nothing to install; the store is unchanged.
    Skipped,
}

impl OverlayOutcome {
    /// Whether the store now holds the overlay.
    pub fn is_installed(&self) -> bool {
        !matches!(self, Self::Skipped)
    }
}

/// Install `overrides` as the source called `name`.
///
/// A source of that name already in the store is replaced where it stands, so
/// repeated installs never stack duplicate layers. Empty overrides leave the
/// store untouched.
pub fn install_overlay(
    store: &mut ConfigStore,
    name: &str,
    overrides: &DatasourceOverrides,
) -> OverlayOutcome {
    if overrides.is_empty() {
        debug!(source = %name, "No overrides to install");
        return OverlayOutcome::Skipped;
    }

    let source = overrides.to_property_source(name);
    if store.contains_source(name) {
        store.replace(name, source);
        OverlayOutcome::Replaced
    } else {
        store.add_first(source);
        OverlayOutcome::Inserted
    }
}
