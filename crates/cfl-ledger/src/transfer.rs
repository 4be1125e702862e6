use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use cfl_types::AccountId;

use crate::error::TransferError;

/// Host capability for moving value between accounts.
///
/// The core decides amount, sender, and recipient; the host executes the
/// movement all-or-nothing. A returned error means nothing moved, and the
/// surrounding ledger operation aborts without touching state.
pub trait ValueTransfer: Send + Sync {
    fn transfer(
        &self,
        amount: u64,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<(), TransferError>;
}

/// One executed transfer, as observed by [`RecordingTransfer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferRecord {
    pub amount: u64,
    pub from: AccountId,
    pub to: AccountId,
}

/// Transfer double for tests and local embedding: records every executed
/// transfer and can be switched to refuse the next ones.
#[derive(Default)]
pub struct RecordingTransfer {
    records: Mutex<Vec<TransferRecord>>,
    failing: AtomicBool,
}

impl RecordingTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all transfers executed so far, in order.
    pub fn records(&self) -> Vec<TransferRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Number of transfers executed so far.
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// When `true`, every subsequent transfer is refused (and not
    /// recorded), simulating a host-side failure such as insufficient
    /// funds.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl ValueTransfer for RecordingTransfer {
    fn transfer(
        &self,
        amount: u64,
        from: &AccountId,
        to: &AccountId,
    ) -> Result<(), TransferError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(TransferError::Refused("recording transfer set to fail".into()));
        }
        let mut records = self
            .records
            .lock()
            .map_err(|_| TransferError::Refused("transfer log lock poisoned".into()))?;
        records.push(TransferRecord {
            amount,
            from: *from,
            to: *to,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_transfers_in_order() {
        let transfer = RecordingTransfer::new();
        let a = AccountId::named("a");
        let b = AccountId::named("b");

        transfer.transfer(10, &a, &b).unwrap();
        transfer.transfer(20, &b, &a).unwrap();

        let records = transfer.records();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            TransferRecord {
                amount: 10,
                from: a,
                to: b
            }
        );
        assert_eq!(records[1].amount, 20);
    }

    #[test]
    fn failing_mode_refuses_without_recording() {
        let transfer = RecordingTransfer::new();
        let a = AccountId::named("a");
        let b = AccountId::named("b");

        transfer.set_failing(true);
        let error = transfer.transfer(5, &a, &b).unwrap_err();
        assert!(matches!(error, TransferError::Refused(_)));
        assert!(transfer.is_empty());

        transfer.set_failing(false);
        transfer.transfer(5, &a, &b).unwrap();
        assert_eq!(transfer.len(), 1);
    }
}
