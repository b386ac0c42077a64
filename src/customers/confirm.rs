/// The record a delete confirmation is asking about
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteTarget {
    pub id: i64,
    pub customer_name: String,
}

/// Confirmation step guarding every delete
///
/// `Closed -> open -> Open`, then either `cancel` (nothing happens) or
/// `confirm` (yields the id to delete). Both close the dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DeleteConfirmation {
    #[default]
    Closed,
    Open(DeleteTarget),
}

impl DeleteConfirmation {
    pub fn open(&mut self, target: DeleteTarget) {
        *self = DeleteConfirmation::Open(target);
    }

    pub fn cancel(&mut self) {
        *self = DeleteConfirmation::Closed;
    }

    /// Close the dialog and hand back the record to delete, if one was open
    pub fn confirm(&mut self) -> Option<DeleteTarget> {
        match std::mem::take(self) {
            DeleteConfirmation::Open(target) => Some(target),
            DeleteConfirmation::Closed => None,
        }
    }

    pub fn target(&self) -> Option<&DeleteTarget> {
        match self {
            DeleteConfirmation::Open(target) => Some(target),
            DeleteConfirmation::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DeleteConfirmation::Open(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> DeleteTarget {
        DeleteTarget {
            id: 5,
            customer_name: "Mona".to_string(),
        }
    }

    #[test]
    fn confirm_yields_target_once() {
        let mut confirmation = DeleteConfirmation::default();
        confirmation.open(target());
        assert!(confirmation.is_open());
        assert_eq!(confirmation.target().map(|t| t.id), Some(5));

        assert_eq!(confirmation.confirm(), Some(target()));
        assert!(!confirmation.is_open());
        assert_eq!(confirmation.confirm(), None);
    }

    #[test]
    fn cancel_yields_nothing() {
        let mut confirmation = DeleteConfirmation::default();
        confirmation.open(target());
        confirmation.cancel();

        assert_eq!(confirmation, DeleteConfirmation::Closed);
        assert_eq!(confirmation.confirm(), None);
    }

    #[test]
    fn reopening_replaces_target() {
        let mut confirmation = DeleteConfirmation::default();
        confirmation.open(target());
        confirmation.open(DeleteTarget {
            id: 9,
            customer_name: "Omar".to_string(),
        });
        assert_eq!(confirmation.confirm().map(|t| t.id), Some(9));
    }
}
