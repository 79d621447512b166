use rand::Rng;
use rand::seq::IndexedRandom;

use crate::password::CharacterClasses;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%&*";

/// Characters available for sampling, in the fixed order
/// uppercase, lowercase, numbers, symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    pub fn from_classes(classes: &CharacterClasses) -> Self {
        let mut chars: Vec<char> = Vec::new();

        if classes.uppercase {
            chars.extend(UPPERCASE.chars());
        }

        if classes.lowercase {
            chars.extend(LOWERCASE.chars());
        }

        if classes.numbers {
            chars.extend(NUMBERS.chars());
        }

        if classes.symbols {
            chars.extend(SYMBOLS.chars());
        }

        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Draws `length` characters from `pool`, each one independently.
///
/// An empty pool has nothing to draw from and yields an empty string.
pub fn generate_password<R: Rng + ?Sized>(length: usize, pool: &CharacterPool, rng: &mut R) -> String {
    if pool.is_empty() {
        return String::new();
    }

    (0..length)
        .filter_map(|_| pool.chars.choose(&mut *rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn render(pool: &CharacterPool) -> String {
        pool.chars.iter().collect()
    }

    fn classes(lowercase: bool, uppercase: bool, numbers: bool, symbols: bool) -> CharacterClasses {
        CharacterClasses { lowercase, uppercase, numbers, symbols }
    }

    #[test]
    fn lowercase_only_pool() {
        let pool = CharacterPool::from_classes(&classes(true, false, false, false));
        assert_eq!(render(&pool), "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn full_pool_keeps_fixed_order() {
        let pool = CharacterPool::from_classes(&classes(true, true, true, true));
        assert_eq!(
            render(&pool),
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%&*"
        );
        assert_eq!(pool.len(), 69);
    }

    #[test]
    fn numbers_and_symbols_pool() {
        let pool = CharacterPool::from_classes(&classes(false, false, true, true));
        assert_eq!(render(&pool), "0123456789!@#$%&*");
    }

    #[test]
    fn no_classes_gives_empty_pool() {
        let pool = CharacterPool::from_classes(&CharacterClasses::default());
        assert!(pool.is_empty());
        assert_eq!(render(&pool), "");
    }

    #[test]
    fn generated_password_has_requested_length_and_pool_chars() {
        let mut rng = StdRng::seed_from_u64(7);
        let pools = [
            classes(true, false, false, false),
            classes(false, true, false, false),
            classes(false, false, true, false),
            classes(false, false, false, true),
            classes(true, true, true, true),
        ];

        for pool in pools.iter().map(CharacterPool::from_classes) {
            for length in 8..=16 {
                let password = generate_password(length, &pool, &mut rng);
                assert_eq!(password.chars().count(), length);
                assert!(password.chars().all(|c| render(&pool).contains(c)), "{password} escaped its pool");
            }
        }
    }

    #[test]
    fn single_char_pool_repeats_that_char() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = CharacterPool { chars: vec!['x'] };
        assert_eq!(generate_password(10, &pool, &mut rng), "xxxxxxxxxx");
    }

    #[test]
    fn empty_pool_yields_empty_password() {
        let mut rng = StdRng::seed_from_u64(3);
        let pool = CharacterPool::from_classes(&CharacterClasses::default());
        assert_eq!(generate_password(12, &pool, &mut rng), "");
    }

    #[test]
    fn sampling_reaches_every_char_of_a_small_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = CharacterPool::from_classes(&classes(false, false, true, false));
        let drawn = generate_password(2000, &pool, &mut rng);

        for digit in NUMBERS.chars() {
            assert!(drawn.contains(digit), "digit {digit} never drawn");
        }
    }
}
