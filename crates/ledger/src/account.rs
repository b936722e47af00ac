//! Accounts - balance owners with per-variant withdrawal rules
//!
//! `Account` carries the shared state, `AccountKind` the variant-specific
//! fields, and the eligibility predicate plus post-withdrawal hook
//! dispatch on the kind.
//!
//! Two quirks are load-bearing behavior, not oversights:
//! - an inactive checking account passes the eligibility test, so closing
//!   it does not stop debits;
//! - the savings excess-withdrawal penalty branch sits behind a cap that
//!   the eligibility check already enforces, so it cannot fire through the
//!   public operations.

use chrono::{DateTime, Utc};
use minibank_core::Amount;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::LedgerError;
use crate::transaction::{TransactionKind, TransactionRecord};

/// A savings balance may never drop below this through a withdrawal.
pub const SAVINGS_MINIMUM_BALANCE: Decimal = dec!(100);

/// Savings withdrawals allowed per monthly cycle.
pub const MAX_MONTHLY_SAVINGS_WITHDRAWALS: u32 = 6;

/// Fee charged when the savings withdrawal cap is exceeded.
pub const DEFAULT_WITHDRAWAL_PENALTY: Decimal = dec!(25);

/// Annual rate used when a savings account is opened without one.
pub const DEFAULT_SAVINGS_INTEREST_RATE: Decimal = dec!(0.025);

/// Account variant tag, without the variant data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Checking,
    Savings,
}

/// Variant-specific account state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    Checking {
        /// How far below zero the balance may go. Always >= 0.
        overdraft_limit: Decimal,
        monthly_withdrawals: u32,
    },
    Savings {
        /// Annual rate as a fraction, e.g. 0.025 for 2.5%.
        interest_rate: Decimal,
        withdrawals_this_month: u32,
        withdrawal_penalty: Decimal,
    },
}

/// A single bank account.
///
/// The balance is signed: checking accounts can go negative up to their
/// overdraft limit. Every successful mutation appends exactly the records
/// it returns to the account's own history, so
/// `balance == initial_balance + sum(signed record amounts)` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    number: String,
    balance: Decimal,
    created_at: DateTime<Utc>,
    transactions: Vec<TransactionRecord>,
    active: bool,
    kind: AccountKind,
}

impl Account {
    /// Open a checking account.
    pub fn new_checking(
        number: impl Into<String>,
        initial_balance: Decimal,
        overdraft_limit: Decimal,
    ) -> Self {
        Self {
            number: number.into(),
            balance: initial_balance,
            created_at: Utc::now(),
            transactions: Vec::new(),
            active: true,
            kind: AccountKind::Checking {
                overdraft_limit,
                monthly_withdrawals: 0,
            },
        }
    }

    /// Open a savings account with the default excess-withdrawal penalty.
    pub fn new_savings(
        number: impl Into<String>,
        initial_balance: Decimal,
        interest_rate: Decimal,
    ) -> Self {
        Self {
            number: number.into(),
            balance: initial_balance,
            created_at: Utc::now(),
            transactions: Vec::new(),
            active: true,
            kind: AccountKind::Savings {
                interest_rate,
                withdrawals_this_month: 0,
                withdrawal_penalty: DEFAULT_WITHDRAWAL_PENALTY,
            },
        }
    }

    // ===== Accessors =====

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn account_type(&self) -> AccountType {
        match self.kind {
            AccountKind::Checking { .. } => AccountType::Checking,
            AccountKind::Savings { .. } => AccountType::Savings,
        }
    }

    /// Full transaction history, oldest first.
    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    /// Last `count` transactions in chronological order.
    pub fn recent_transactions(&self, count: usize) -> &[TransactionRecord] {
        let start = self.transactions.len().saturating_sub(count);
        &self.transactions[start..]
    }

    // ===== Eligibility =====

    /// Variant-specific withdrawal eligibility.
    ///
    /// Checking: permitted while `balance + overdraft_limit` covers the
    /// amount - or whenever the account is inactive (kept as-is, see the
    /// module docs). Savings: refused when inactive, when the monthly cap
    /// is reached, or when the balance would fall below the minimum.
    pub fn can_withdraw(&self, amount: Decimal) -> bool {
        match &self.kind {
            AccountKind::Checking {
                overdraft_limit, ..
            } => !self.active || self.balance + overdraft_limit >= amount,
            AccountKind::Savings {
                withdrawals_this_month,
                ..
            } => {
                if !self.active {
                    return false;
                }
                if *withdrawals_this_month >= MAX_MONTHLY_SAVINGS_WITHDRAWALS {
                    return false;
                }
                self.balance - amount >= SAVINGS_MINIMUM_BALANCE
            }
        }
    }

    // ===== Mutations =====

    /// Credit the account.
    ///
    /// Fails without any mutation when `amount <= 0`.
    pub fn deposit(
        &mut self,
        amount: Decimal,
        description: &str,
    ) -> Result<TransactionRecord, LedgerError> {
        let magnitude = positive(amount)?;
        self.balance += amount;
        let record = TransactionRecord::new(
            &self.number,
            None,
            magnitude,
            TransactionKind::Deposit,
            description,
        );
        self.transactions.push(record.clone());
        Ok(record)
    }

    /// Debit the account.
    ///
    /// Returns every record appended by the call: the withdrawal itself,
    /// plus a penalty record when the post-withdrawal hook charges one.
    pub fn withdraw(
        &mut self,
        amount: Decimal,
        description: &str,
    ) -> Result<Vec<TransactionRecord>, LedgerError> {
        let magnitude = positive(amount)?;
        if !self.can_withdraw(amount) {
            return Err(LedgerError::WithdrawalNotAllowed {
                account: self.number.clone(),
            });
        }
        self.balance -= amount;
        let record = TransactionRecord::new(
            &self.number,
            None,
            magnitude,
            TransactionKind::Withdrawal,
            description,
        );
        self.transactions.push(record.clone());
        let mut appended = vec![record];
        appended.extend(self.post_withdrawal());
        Ok(appended)
    }

    /// Debit this account as the source leg of a transfer.
    ///
    /// Records a TRANSFER_OUT entry naming the destination; crediting the
    /// destination is the caller's responsibility via `receive_transfer`.
    pub fn transfer_out(
        &mut self,
        amount: Decimal,
        to_account_number: &str,
    ) -> Result<Vec<TransactionRecord>, LedgerError> {
        let magnitude = positive(amount)?;
        if !self.can_withdraw(amount) {
            return Err(LedgerError::WithdrawalNotAllowed {
                account: self.number.clone(),
            });
        }
        self.balance -= amount;
        let record = TransactionRecord::new(
            &self.number,
            Some(to_account_number),
            magnitude,
            TransactionKind::TransferOut,
            format!("Transfer to {}", to_account_number),
        );
        self.transactions.push(record.clone());
        let mut appended = vec![record];
        appended.extend(self.post_withdrawal());
        Ok(appended)
    }

    /// Credit this account as the destination leg of a transfer.
    ///
    /// Unconditional: amount validation is the caller's duty.
    pub fn receive_transfer(&mut self, amount: Decimal, from_account_number: &str) -> TransactionRecord {
        self.balance += amount;
        let record = TransactionRecord::new(
            &self.number,
            Some(from_account_number),
            Amount::new_unchecked(amount),
            TransactionKind::TransferIn,
            format!("Transfer from {}", from_account_number),
        );
        self.transactions.push(record.clone());
        record
    }

    /// One-way transition to inactive.
    pub fn close(&mut self) {
        self.active = false;
    }

    /// Credit one month of interest: `balance * rate / 12`.
    ///
    /// Savings only. The entry is recorded even when the interest rounds
    /// to zero, as a trace that the cycle ran.
    pub fn apply_monthly_interest(&mut self) -> Result<TransactionRecord, LedgerError> {
        let AccountKind::Savings { interest_rate, .. } = &self.kind else {
            return Err(LedgerError::NotASavingsAccount(self.number.clone()));
        };
        let interest = self.balance * *interest_rate / dec!(12);
        self.balance += interest;
        // Savings balances cannot go negative through the public
        // operations, so the magnitude is trusted here.
        let record = TransactionRecord::new(
            &self.number,
            None,
            Amount::new_unchecked(interest),
            TransactionKind::Interest,
            "Monthly interest credit",
        );
        self.transactions.push(record.clone());
        Ok(record)
    }

    /// Interest the current balance would earn over a full year.
    pub fn projected_annual_interest(&self) -> Option<Decimal> {
        match self.kind {
            AccountKind::Savings { interest_rate, .. } => Some(self.balance * interest_rate),
            AccountKind::Checking { .. } => None,
        }
    }

    /// Start a new withdrawal cycle. Expected to be invoked once per
    /// billing cycle by an external scheduler.
    pub fn reset_monthly_withdrawals(&mut self) {
        match &mut self.kind {
            AccountKind::Checking {
                monthly_withdrawals,
                ..
            } => *monthly_withdrawals = 0,
            AccountKind::Savings {
                withdrawals_this_month,
                ..
            } => *withdrawals_this_month = 0,
        }
    }

    /// Variant-specific side effect after every successful debit.
    ///
    /// Checking counts the withdrawal; an overdraft fee on negative
    /// balances is a documented extension point that is not charged.
    /// Savings counts the withdrawal and charges the penalty once the
    /// counter exceeds the cap.
    fn post_withdrawal(&mut self) -> Option<TransactionRecord> {
        match &mut self.kind {
            AccountKind::Checking {
                monthly_withdrawals,
                ..
            } => {
                *monthly_withdrawals += 1;
                None
            }
            AccountKind::Savings {
                withdrawals_this_month,
                withdrawal_penalty,
                ..
            } => {
                *withdrawals_this_month += 1;
                if *withdrawals_this_month > MAX_MONTHLY_SAVINGS_WITHDRAWALS {
                    let penalty = *withdrawal_penalty;
                    self.balance -= penalty;
                    let record = TransactionRecord::new(
                        &self.number,
                        None,
                        Amount::new_unchecked(penalty),
                        TransactionKind::WithdrawalPenalty,
                        "Excess withdrawal penalty",
                    );
                    self.transactions.push(record.clone());
                    Some(record)
                } else {
                    None
                }
            }
        }
    }
}

fn positive(amount: Decimal) -> Result<Amount, LedgerError> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::NonPositiveAmount(amount));
    }
    Ok(Amount::new_unchecked(amount))
}
