//! Transaction index - per-account record lists plus a global log
//!
//! This index is a secondary copy of the histories the accounts embed
//! themselves. The services mirror every record they produce into it so
//! that cross-account lookups (by transaction id) have one place to scan.

use minibank_ledger::TransactionRecord;
use std::collections::HashMap;

/// Transaction records grouped by account, insertion order preserved.
#[derive(Debug, Default)]
pub struct TransactionRepository {
    by_account: HashMap<String, Vec<TransactionRecord>>,
    log: Vec<TransactionRecord>,
}

impl TransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the account's list and the global log.
    pub fn record(&mut self, account_number: &str, record: TransactionRecord) {
        self.by_account
            .entry(account_number.to_owned())
            .or_default()
            .push(record.clone());
        self.log.push(record);
    }

    /// All records for an account, oldest first. Empty for unknown
    /// accounts.
    pub fn for_account(&self, account_number: &str) -> &[TransactionRecord] {
        self.by_account
            .get(account_number)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Last `count` records for an account, in chronological order.
    pub fn recent(&self, account_number: &str, count: usize) -> &[TransactionRecord] {
        let records = self.for_account(account_number);
        let start = records.len().saturating_sub(count);
        &records[start..]
    }

    /// Linear scan of the global log.
    pub fn find_by_id(&self, transaction_id: &str) -> Option<&TransactionRecord> {
        self.log.iter().find(|r| r.id() == transaction_id)
    }

    pub fn count_for(&self, account_number: &str) -> usize {
        self.for_account(account_number).len()
    }

    pub fn total_count(&self) -> usize {
        self.log.len()
    }

    pub fn clear(&mut self) {
        self.by_account.clear();
        self.log.clear();
    }
}
