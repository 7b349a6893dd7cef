/// Read-only view of a national flag.
pub trait Flag: Send + Sync {
    /// Human readable description of the flag's design.
    fn description(&self) -> &str;

    /// Pictorial glyph for the flag (usually a regional indicator pair).
    fn emoji(&self) -> &str;
}
