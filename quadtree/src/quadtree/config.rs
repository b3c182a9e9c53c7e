#[derive(Debug, Clone)]
pub struct Config {
    /// Points a node stores directly before it subdivides. Clamped to at least 1.
    pub node_capacity: usize,
    /// Upper bound on point buffers kept for reuse between `clear` calls.
    pub pool_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            node_capacity: 2,
            pool_size: 256,
        }
    }
}
