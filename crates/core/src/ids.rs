//! Identifier generation
//!
//! All identifiers are opaque to the engine: nothing inspects their
//! structure beyond equality. The formats below exist only so that a
//! human reading a ledger dump can tell what kind of thing an id names.

use rand::Rng;
use uuid::Uuid;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a user id, e.g. `USER_K3QX81Fx` style `USER_XXXXXXXX`.
pub fn user_id() -> String {
    format!("USER_{}", random_string(8))
}

/// Generate an account number, e.g. `ACC48151623`.
///
/// Account numbers stay strictly alphanumeric so they pass the same
/// shape check applied to user-entered ones.
pub fn account_number() -> String {
    let mut rng = rand::thread_rng();
    let digits: String = (0..8).map(|_| rng.gen_range(0..10).to_string()).collect();
    format!("ACC{}", digits)
}

/// Generate a transaction id with a kind-specific prefix, e.g.
/// `DEP-1f0e8c...`.
pub fn transaction_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

fn random_string(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_format() {
        let id = user_id();
        assert!(id.starts_with("USER_"));
        assert_eq!(id.len(), "USER_".len() + 8);
    }

    #[test]
    fn account_number_is_alphanumeric() {
        let number = account_number();
        assert!(number.starts_with("ACC"));
        assert!(number.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(number.len() >= 8 && number.len() <= 16);
    }

    #[test]
    fn transaction_ids_are_unique() {
        let a = transaction_id("DEP");
        let b = transaction_id("DEP");
        assert_ne!(a, b);
        assert!(a.starts_with("DEP-"));
    }
}
