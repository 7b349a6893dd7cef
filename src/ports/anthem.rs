pub trait Anthem: Send + Sync {
    /// Official title of the anthem.
    fn title(&self) -> &str;
}
