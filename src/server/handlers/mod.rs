pub mod health;
pub mod producers;
pub mod products;

/// Parse a path identifier; anything that is not an integer cannot exist.
pub(crate) fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}
