//! Demo seed data

use anyhow::Result;
use minibank_services::Bank;
use rust_decimal_macros::dec;

/// One user with a funded checking and savings account.
pub fn seed(bank: &Bank) -> Result<()> {
    let user = bank
        .auth()
        .register("demo", "demo123", "Demo User", "demo@minibank.dev")?;
    let checking = bank
        .accounts()
        .open_checking(user.user_id(), dec!(1_000), dec!(500))?;
    let savings = bank
        .accounts()
        .open_savings(user.user_id(), dec!(5_000), dec!(0.025))?;
    bank.transactions()
        .deposit(checking.number(), dec!(250), "Opening bonus")?;
    bank.transactions()
        .transfer(savings.number(), checking.number(), dec!(100), "")?;
    Ok(())
}
