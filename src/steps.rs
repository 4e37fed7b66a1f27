/// Position in a multi-step command, threaded through each step by value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    current: usize,
    total: usize,
}

impl Progress {
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    /// Announce the next step and return the advanced position
    #[must_use]
    pub fn next(self, description: &str) -> Self {
        let advanced = self.advance();
        crate::info_println!("\n{} {description}", advanced.label());
        advanced
    }

    fn advance(self) -> Self {
        Self {
            current: (self.current + 1).min(self.total.max(1)),
            total: self.total,
        }
    }

    pub fn label(&self) -> String {
        format!("[{}/{}]", self.current, self.total)
    }

    #[allow(dead_code)]
    pub fn current(&self) -> usize {
        self.current
    }

    #[allow(dead_code)]
    pub fn is_done(&self) -> bool {
        self.current >= self.total
    }
}
