//! Host navigation callbacks.

/// Host-provided navigation capability.
///
/// Both operations are fire-and-forget notifications; the panel expects no
/// result and tolerates the bridge doing nothing. The bridge itself is
/// optional: a panel without one logs dropped navigation requests instead
/// of failing, which is the legitimate configuration for hosts that only
/// want a picture.
pub trait NavigationBridge: std::fmt::Debug {
    /// Focus the entity behind `index` in the host's model browser.
    fn select_element(&self, index: usize);

    /// Focus the relationship between two entities.
    fn select_relationship(&self, source: usize, target: usize);
}
