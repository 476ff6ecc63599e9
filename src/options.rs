/// How far the scan cursor moves after a multi-line block is extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowPolicy {
    /// Skip exactly the lines the block occupied.
    #[default]
    Exact,
    /// Skip the whole lookahead window, whatever it contained.
    Fixed,
}

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub window_policy: WindowPolicy,
}

impl ParseOptions {
    pub fn legacy() -> Self {
        Self {
            window_policy: WindowPolicy::Fixed,
        }
    }
}
