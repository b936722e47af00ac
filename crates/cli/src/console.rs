//! Menu-driven console session

use std::io::{self, Write};

use anyhow::Result;
use minibank_auth::validate;
use minibank_ledger::{Account, AccountType, TransactionRecord, User};
use minibank_services::Bank;
use rust_decimal::Decimal;

/// Run the console until the user chooses to exit.
pub fn run(bank: &Bank) -> Result<()> {
    println!("=====================================");
    println!("      Welcome to MiniBank");
    println!("=====================================");

    loop {
        println!();
        println!("1. Login");
        println!("2. Register");
        println!("3. Exit");
        match prompt("Choose an option: ")?.as_str() {
            "1" => {
                if let Some(user) = login(bank)? {
                    session(bank, user)?;
                }
            }
            "2" => register(bank)?,
            "3" => {
                println!("Goodbye!");
                return Ok(());
            }
            other => println!("❌ Unknown option: {other}"),
        }
    }
}

fn login(bank: &Bank) -> Result<Option<User>> {
    let username = prompt("Username: ")?;
    let password = prompt("Password: ")?;
    match bank.auth().login(&username, &password) {
        Ok(user) => {
            println!("✅ Welcome back, {}!", user.full_name());
            Ok(Some(user))
        }
        Err(e) => {
            println!("❌ Login failed: {e}");
            Ok(None)
        }
    }
}

fn register(bank: &Bank) -> Result<()> {
    let username = prompt("Username (4-20 letters, digits, underscore): ")?;
    let password = prompt("Password (at least 6 characters): ")?;
    let full_name = prompt("Full name: ")?;
    let email = prompt("Email: ")?;
    match bank.auth().register(&username, &password, &full_name, &email) {
        Ok(user) => println!("✅ Registered! Your user id is {}", user.user_id()),
        Err(e) => println!("❌ Registration failed: {e}"),
    }
    Ok(())
}

fn session(bank: &Bank, user: User) -> Result<()> {
    loop {
        println!();
        println!("--- {} ---", user.full_name());
        println!("1. View accounts");
        println!("2. Open checking account");
        println!("3. Open savings account");
        println!("4. Manage an account");
        println!("5. Logout");
        match prompt("Choose an option: ")?.as_str() {
            "1" => view_accounts(bank, &user)?,
            "2" => open_checking(bank, &user)?,
            "3" => open_savings(bank, &user)?,
            "4" => manage_account(bank, &user)?,
            "5" => {
                println!("Logged out.");
                return Ok(());
            }
            other => println!("❌ Unknown option: {other}"),
        }
    }
}

fn view_accounts(bank: &Bank, user: &User) -> Result<()> {
    let accounts = bank.accounts().accounts_for_user(user.user_id())?;
    if accounts.is_empty() {
        println!("No accounts yet.");
        return Ok(());
    }
    for account in &accounts {
        print_account_line(account);
    }
    let total = bank.accounts().total_balance(user.user_id())?;
    println!("Total balance: {total}");
    Ok(())
}

fn print_account_line(account: &Account) {
    let status = if account.is_active() { "active" } else { "closed" };
    println!(
        "  {} [{}] balance {} ({})",
        account.number(),
        account.account_type(),
        account.balance(),
        status
    );
}

fn open_checking(bank: &Bank, user: &User) -> Result<()> {
    let Some(balance) = read_amount("Initial balance: ")? else {
        return Ok(());
    };
    let Some(overdraft) = read_amount("Overdraft limit: ")? else {
        return Ok(());
    };
    match bank.accounts().open_checking(user.user_id(), balance, overdraft) {
        Ok(account) => println!("✅ Opened checking account {}", account.number()),
        Err(e) => println!("❌ Could not open account: {e}"),
    }
    Ok(())
}

fn open_savings(bank: &Bank, user: &User) -> Result<()> {
    let Some(balance) = read_amount("Initial balance: ")? else {
        return Ok(());
    };
    let rate_input = prompt("Annual interest rate (e.g. 0.025, empty for default): ")?;
    let rate = if rate_input.is_empty() {
        minibank_ledger::DEFAULT_SAVINGS_INTEREST_RATE
    } else {
        match rate_input.parse::<Decimal>() {
            Ok(rate) => rate,
            Err(_) => {
                println!("❌ Invalid rate: {rate_input}");
                return Ok(());
            }
        }
    };
    match bank.accounts().open_savings(user.user_id(), balance, rate) {
        Ok(account) => println!("✅ Opened savings account {}", account.number()),
        Err(e) => println!("❌ Could not open account: {e}"),
    }
    Ok(())
}

fn manage_account(bank: &Bank, user: &User) -> Result<()> {
    let number = prompt("Account number: ")?;
    if !user.owns_account(&number) {
        println!("❌ That account is not yours.");
        return Ok(());
    }
    let Some(account) = bank.accounts().account(&number) else {
        println!("❌ Account {number} not found.");
        return Ok(());
    };
    print_account_line(&account);

    loop {
        println!();
        println!("1. Deposit");
        println!("2. Withdraw");
        println!("3. Transfer");
        println!("4. History");
        println!("5. Interest outlook");
        println!("6. Close account");
        println!("7. Back");
        match prompt("Choose an option: ")?.as_str() {
            "1" => deposit(bank, &number)?,
            "2" => withdraw(bank, &number)?,
            "3" => transfer(bank, &number)?,
            "4" => history(bank, &number),
            "5" => interest_outlook(bank, &number),
            "6" => {
                match bank.accounts().close_account(&number) {
                    Ok(()) => println!("✅ Account {number} closed."),
                    Err(e) => println!("❌ Could not close: {e}"),
                }
                return Ok(());
            }
            "7" => return Ok(()),
            other => println!("❌ Unknown option: {other}"),
        }
    }
}

fn deposit(bank: &Bank, number: &str) -> Result<()> {
    let Some(amount) = read_amount("Amount: ")? else {
        return Ok(());
    };
    let description = prompt("Description: ")?;
    match bank.transactions().deposit(number, amount, &description) {
        Ok(record) => {
            println!("✅ Deposit successful!");
            println!("   Transaction: {}", record.id());
            println!("   Balance:     {}", bank_balance(bank, number));
        }
        Err(e) => println!("❌ Deposit failed: {e}"),
    }
    Ok(())
}

fn withdraw(bank: &Bank, number: &str) -> Result<()> {
    let Some(amount) = read_amount("Amount: ")? else {
        return Ok(());
    };
    let description = prompt("Description: ")?;
    match bank.transactions().withdraw(number, amount, &description) {
        Ok(record) => {
            println!("✅ Withdrawal successful!");
            println!("   Transaction: {}", record.id());
            println!("   Balance:     {}", bank_balance(bank, number));
        }
        Err(e) => println!("❌ Withdrawal failed: {e}"),
    }
    Ok(())
}

fn transfer(bank: &Bank, number: &str) -> Result<()> {
    let to = prompt("Destination account: ")?;
    if !validate::is_valid_account_number(&to) {
        println!("❌ Invalid account number: {to}");
        return Ok(());
    }
    let Some(amount) = read_amount("Amount: ")? else {
        return Ok(());
    };
    match bank.transactions().transfer(number, &to, amount, "") {
        Ok(()) => {
            println!("✅ Transfer successful!");
            println!("   Balance: {}", bank_balance(bank, number));
        }
        Err(e) => println!("❌ Transfer failed: {e}"),
    }
    Ok(())
}

fn history(bank: &Bank, number: &str) {
    let records = bank.transactions().history(number);
    if records.is_empty() {
        println!("No transactions yet.");
        return;
    }
    for record in &records {
        print_record_line(record);
    }
}

fn print_record_line(record: &TransactionRecord) {
    let sign = if record.kind().is_credit() { "+" } else { "-" };
    println!(
        "  {}  {}  {}{}  {}",
        record.timestamp().format("%Y-%m-%d %H:%M:%S"),
        record.kind(),
        sign,
        record.amount(),
        record.description()
    );
}

fn interest_outlook(bank: &Bank, number: &str) {
    let Some(account) = bank.accounts().account(number) else {
        println!("❌ Account {number} not found.");
        return;
    };
    match (account.account_type(), account.projected_annual_interest()) {
        (AccountType::Savings, Some(interest)) => {
            println!("Projected interest over a year: {interest}");
        }
        _ => println!("Interest applies to savings accounts only."),
    }
}

fn bank_balance(bank: &Bank, number: &str) -> Decimal {
    bank.accounts().balance(number).unwrap_or_default()
}

fn read_amount(label: &str) -> Result<Option<Decimal>> {
    let input = prompt(label)?;
    match validate::parse_amount(&input) {
        Some(amount) => Ok(Some(amount)),
        None => {
            println!("❌ Invalid amount: {input}");
            Ok(None)
        }
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}
