//! Options for a distribution pass.

/// Controls how [`Company::distribute_with`](crate::company::Company::distribute_with)
/// treats vehicles that already carry cargo.
///
/// The default keeps existing loads, so running twice without a reset
/// books every client a second time.
///
/// # Examples
///
/// ```
/// use u_fleet::distribution::DistributionOptions;
///
/// let opts = DistributionOptions::new();
/// assert_eq!(opts, DistributionOptions::default());
/// assert!(!opts.reset_before_run());
///
/// let opts = opts.with_reset_before_run(true);
/// assert!(opts.reset_before_run());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistributionOptions {
    reset_before_run: bool,
}

impl DistributionOptions {
    /// Creates options with defaults (no reset).
    pub fn new() -> Self {
        Self::default()
    }

    /// Unloads every vehicle before the pass when `reset` is `true`.
    pub fn with_reset_before_run(mut self, reset: bool) -> Self {
        self.reset_before_run = reset;
        self
    }

    /// Whether vehicles are reset before the pass.
    pub fn reset_before_run(&self) -> bool {
        self.reset_before_run
    }
}
