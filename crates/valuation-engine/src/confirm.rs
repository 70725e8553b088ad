/// Host capability used to approve destructive row operations.
///
/// The engine calls it synchronously with a user-facing message and aborts the operation,
/// without writing anything, when it returns `false`. Any `FnMut(&str) -> bool` closure works,
/// so a UI can show a modal and tests can answer with a constant.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}
