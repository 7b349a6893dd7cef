pub trait Capital: Send + Sync {
    fn name(&self) -> &str;

    /// Estimated number of inhabitants.
    fn population(&self) -> u64;
}
