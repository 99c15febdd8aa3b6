use rand::Rng;

// Character-set constants
pub(crate) const ALPHABET_SIZE: usize = 26;
#[cfg(test)]
pub(crate) const UPPERCASE_ALPHABET: std::ops::RangeInclusive<char> = 'A'..='Z';

/// Character helpers for the A-Z puzzle alphabet.
///
/// Everything in this crate works on uppercase ASCII letters; input is
/// normalized through [`GridChar::to_grid_letter`] and anything outside A-Z
/// is treated as a non-letter (it resets the automaton cursor and never
/// participates in placement).
pub(crate) trait GridChar {
    /// True iff this is an uppercase A-Z letter after normalization.
    fn is_grid_letter(&self) -> bool;
    /// Uppercased form, for case-insensitive input handling.
    fn to_grid_letter(&self) -> char;
    /// 0-based index into the A-Z alphabet, if this is a letter.
    fn letter_index(&self) -> Option<usize>;
}

impl GridChar for char {
    fn is_grid_letter(&self) -> bool {
        self.to_grid_letter().is_ascii_uppercase()
    }

    fn to_grid_letter(&self) -> char {
        self.to_ascii_uppercase()
    }

    fn letter_index(&self) -> Option<usize> {
        let up = self.to_grid_letter();
        up.is_ascii_uppercase().then(|| up as usize - 'A' as usize)
    }
}

/// Uniformly random uppercase letter, used by the fill phase.
pub(crate) fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    (b'A' + rng.random_range(0..ALPHABET_SIZE as u8)) as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_is_grid_letter() {
        assert!('A'.is_grid_letter());
        assert!('z'.is_grid_letter()); // normalized before the check
        assert!(!'1'.is_grid_letter());
        assert!(!'@'.is_grid_letter());
        assert!(!' '.is_grid_letter());
    }

    #[test]
    fn test_letter_index() {
        assert_eq!('A'.letter_index(), Some(0));
        assert_eq!('Z'.letter_index(), Some(25));
        assert_eq!('c'.letter_index(), Some(2)); // lowercase normalizes
        assert_eq!('?'.letter_index(), None);
        assert_eq!('é'.letter_index(), None);
    }

    #[test]
    fn test_letter_index_covers_alphabet() {
        for (i, c) in UPPERCASE_ALPHABET.enumerate() {
            assert_eq!(c.letter_index(), Some(i));
        }
    }

    #[test]
    fn test_random_letter_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let c = random_letter(&mut rng);
            assert!(c.is_ascii_uppercase(), "got non-letter {c:?}");
        }
    }
}
