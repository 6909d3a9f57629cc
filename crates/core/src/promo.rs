//! Promo code generation.
//!
//! Early-access leads who opt into the launch discount get a
//! human-shareable code of the form `TURNIO10-LLLLDDDD` (4 uppercase
//! letters, 4 digits). Codes are random and not checked for collisions
//! against previously issued codes; the discount campaign treats the
//! code as an incentive, not a credential.

use rand::Rng;

/// Fixed campaign prefix for every generated code.
pub const PROMO_PREFIX: &str = "TURNIO10-";

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// Generate a promo code matching `TURNIO10-[A-Z]{4}[0-9]{4}`.
///
/// Each character is an independent uniform draw. Uses the thread-local
/// RNG; no state is shared between calls.
pub fn generate() -> String {
    let mut rng = rand::rng();
    let mut code = String::with_capacity(PROMO_PREFIX.len() + 8);
    code.push_str(PROMO_PREFIX);

    for _ in 0..4 {
        code.push(LETTERS[rng.random_range(0..LETTERS.len())] as char);
    }
    for _ in 0..4 {
        code.push(DIGITS[rng.random_range(0..DIGITS.len())] as char);
    }

    code
}
