/// Two-phase gate in front of the destructive delete call.
///
/// `request` only records which reading the user asked to remove; nothing
/// touches the network until an explicit confirmation hands the id to the
/// sync controller. `cancel` dismisses the prompt with no side effect,
/// independent of any in-flight or future network outcome.
#[derive(Debug, Default)]
pub struct DeleteConfirmation {
    pending: Option<i64>,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface a confirmation prompt for `id`, replacing any earlier one.
    pub fn request(&mut self, id: i64) {
        self.pending = Some(id);
    }

    /// The id currently awaiting confirmation, if any.
    pub fn pending(&self) -> Option<i64> {
        self.pending
    }

    /// Take the pending id out; the caller then issues the actual delete.
    pub fn confirm(&mut self) -> Option<i64> {
        self.pending.take()
    }

    /// Dismiss the prompt without deleting anything. Idempotent.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_no_pending_prompt() {
        let gate = DeleteConfirmation::new();
        assert_eq!(gate.pending(), None);
    }

    #[test]
    fn request_records_the_target_id() {
        let mut gate = DeleteConfirmation::new();
        gate.request(7);
        assert_eq!(gate.pending(), Some(7));
    }

    #[test]
    fn later_request_replaces_earlier_prompt() {
        let mut gate = DeleteConfirmation::new();
        gate.request(7);
        gate.request(9);
        assert_eq!(gate.pending(), Some(9));
    }

    #[test]
    fn confirm_takes_the_id_exactly_once() {
        let mut gate = DeleteConfirmation::new();
        gate.request(7);
        assert_eq!(gate.confirm(), Some(7));
        assert_eq!(gate.confirm(), None);
    }

    #[test]
    fn cancel_discards_the_pending_id() {
        let mut gate = DeleteConfirmation::new();
        gate.request(7);
        gate.cancel();
        assert_eq!(gate.pending(), None);
        assert_eq!(gate.confirm(), None);
    }

    #[test]
    fn cancel_without_prompt_is_a_no_op() {
        let mut gate = DeleteConfirmation::new();
        gate.cancel();
        assert_eq!(gate.pending(), None);
    }
}
