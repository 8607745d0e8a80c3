/// Sequential ID generator for canvas elements
///
/// IDs are `<prefix>-<n>` with `n` starting at zero, so the first element of
/// a fresh canvas is `canvas-el-0`.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: String,
    count: u64,
}

pub const DEFAULT_ID_PREFIX: &str = "canvas-el";

impl IdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            count: 0,
        }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.count);
        self.count += 1;
        id
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of IDs handed out so far
    pub fn issued(&self) -> u64 {
        self.count
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_PREFIX)
    }
}

/// Wall-clock based ID (`node-1718000000000`), used for graph nodes and
/// edges created on the client before the server assigns anything.
pub fn timestamp_id(prefix: &str) -> String {
    format!("{}-{}", prefix, chrono::Utc::now().timestamp_millis())
}
