//! Word search options

/// How [`frequency`](crate::WordPathFinder::frequency) counts palindromes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PalindromePolicy {
    /// Count every directed path spelling the word. A placement of a
    /// palindrome longer than one letter is found once from each end, so
    /// it counts twice.
    #[default]
    CountFromEachEnd,
    /// Count each placement once, whichever end it was found from.
    CountOnce,
}

/// Options for word search
#[derive(Debug, Clone, Default)]
pub struct WordSearchOptions {
    /// Palindrome counting policy for `frequency`
    pub palindrome_policy: PalindromePolicy,
}

impl WordSearchOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the palindrome counting policy
    pub fn with_palindrome_policy(mut self, policy: PalindromePolicy) -> Self {
        self.palindrome_policy = policy;
        self
    }
}
