//! Scanner configuration.

/// Default byte limit for text destinations that carry no limit of their own.
pub const DEFAULT_TEXT_LIMIT: usize = 4096;

/// Default cap on the magnitude of a `%f` exponent.
pub const DEFAULT_MAX_EXPONENT: u32 = 1024;

/// Limits applied while converting tokens.
///
/// # Example
///
/// ```
/// use mini_scanf::ScanConfig;
///
/// let config = ScanConfig::default().text_limit(16).max_exponent(308);
/// assert_eq!(config.text_limit, 16);
/// assert_eq!(config.max_exponent, 308);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Longest token `%s` or `%w` may store into a text slot without an explicit limit.
    pub text_limit: usize,
    /// Largest exponent magnitude accepted by `%f`. Anything larger is a malformed token.
    pub max_exponent: u32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            text_limit: DEFAULT_TEXT_LIMIT,
            max_exponent: DEFAULT_MAX_EXPONENT,
        }
    }
}

impl ScanConfig {
    pub fn text_limit(mut self, limit: usize) -> Self {
        self.text_limit = limit;
        self
    }

    pub fn max_exponent(mut self, max: u32) -> Self {
        self.max_exponent = max;
        self
    }
}
