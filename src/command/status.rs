/// Outcome of feeding a point to a shape builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// More input is needed
    InProgress,
    /// The shape is complete and valid; its command can be committed
    Success,
    /// The shape is complete but degenerate; its command must be undone
    Fail,
}
