//! Transaction records - immutable ledger entries
//!
//! A record is created exactly once by the account whose balance it
//! changed, appended to that account's history, and never mutated or
//! deleted afterwards.

use chrono::{DateTime, Utc};
use minibank_core::{ids, Amount};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Category of a ledger entry.
///
/// The kind determines the sign a record contributes to its account's
/// balance; the stored amount is always a non-negative magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    TransferOut,
    TransferIn,
    Interest,
    WithdrawalPenalty,
}

impl TransactionKind {
    /// Prefix used for ids of this kind, e.g. `DEP-...`.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "DEP",
            TransactionKind::Withdrawal => "WTH",
            TransactionKind::TransferOut | TransactionKind::TransferIn => "TRF",
            TransactionKind::Interest => "INT",
            TransactionKind::WithdrawalPenalty => "PEN",
        }
    }

    /// Whether entries of this kind increase the account balance.
    pub fn is_credit(&self) -> bool {
        matches!(
            self,
            TransactionKind::Deposit | TransactionKind::TransferIn | TransactionKind::Interest
        )
    }
}

/// One immutable ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    id: String,
    account_number: String,
    /// Populated only for transfer legs: the other account involved.
    counterparty: Option<String>,
    amount: Amount,
    kind: TransactionKind,
    description: String,
    timestamp: DateTime<Utc>,
}

impl TransactionRecord {
    /// Create a record with a freshly generated id and the current time.
    ///
    /// Accounts call this while mutating their balance; nothing else
    /// should need to mint records outside of tests.
    pub fn new(
        account_number: impl Into<String>,
        counterparty: Option<&str>,
        amount: Amount,
        kind: TransactionKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ids::transaction_id(kind.id_prefix()),
            account_number: account_number.into(),
            counterparty: counterparty.map(str::to_owned),
            amount,
            kind,
            description: description.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn counterparty(&self) -> Option<&str> {
        self.counterparty.as_deref()
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The signed contribution of this record to its account's balance:
    /// positive for deposits, incoming transfers and interest; negative
    /// for withdrawals, outgoing transfers and penalties.
    pub fn signed_amount(&self) -> Decimal {
        if self.kind.is_credit() {
            self.amount.value()
        } else {
            -self.amount.value()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn amount(v: Decimal) -> Amount {
        Amount::new(v).unwrap()
    }

    #[test]
    fn kind_wire_names() {
        assert_eq!(TransactionKind::Deposit.to_string(), "DEPOSIT");
        assert_eq!(TransactionKind::TransferOut.to_string(), "TRANSFER_OUT");
        assert_eq!(
            TransactionKind::WithdrawalPenalty.to_string(),
            "WITHDRAWAL_PENALTY"
        );
        assert_eq!(
            "TRANSFER_IN".parse::<TransactionKind>().unwrap(),
            TransactionKind::TransferIn
        );
    }

    #[test]
    fn signed_amount_follows_kind() {
        let credit = TransactionRecord::new(
            "ACC1",
            None,
            amount(dec!(50)),
            TransactionKind::Deposit,
            "salary",
        );
        let debit = TransactionRecord::new(
            "ACC1",
            None,
            amount(dec!(50)),
            TransactionKind::Withdrawal,
            "rent",
        );
        assert_eq!(credit.signed_amount(), dec!(50));
        assert_eq!(debit.signed_amount(), dec!(-50));
    }

    #[test]
    fn id_carries_kind_prefix() {
        let record = TransactionRecord::new(
            "ACC1",
            Some("ACC2"),
            amount(dec!(10)),
            TransactionKind::TransferOut,
            "t",
        );
        assert!(record.id().starts_with("TRF-"));
        assert_eq!(record.counterparty(), Some("ACC2"));
    }

    #[test]
    fn serde_roundtrip() {
        let record = TransactionRecord::new(
            "ACC1",
            None,
            amount(dec!(12.34)),
            TransactionKind::Interest,
            "monthly interest",
        );
        let json = serde_json::to_string(&record).unwrap();
        let parsed: TransactionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }
}
