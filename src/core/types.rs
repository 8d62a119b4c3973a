//! Core type definitions used throughout the codebase

use crate::core::error::{Result, SimError};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Dense arena identifier for cells
///
/// Cells are never destroyed, so an id stays valid (and is never reused)
/// for the lifetime of the world that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub u32);

impl CellId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Simulation tick counter (time unit)
pub type Tick = u64;

/// Number of discrete cell states; valid states are `0..MAX_STATES`
pub const MAX_STATES: u16 = 11;

/// Display color for a cell type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// The six cell kinds of the chemistry
///
/// Indices and mnemonics are fixed: `e f a b c d` map to `0..6` in that
/// order. Reaction rules refer to kinds by mnemonic character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    E,
    F,
    A,
    B,
    C,
    D,
}

impl CellType {
    /// All kinds in index order
    pub const ALL: [CellType; 6] = [
        CellType::E,
        CellType::F,
        CellType::A,
        CellType::B,
        CellType::C,
        CellType::D,
    ];

    /// The four chain-building kinds (a, b, c, d)
    pub const CHAIN_KINDS: [CellType; 4] =
        [CellType::A, CellType::B, CellType::C, CellType::D];

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| SimError::OutOfRange(format!("cell type index {index} not in 0..6")))
    }

    /// Resolve a mnemonic character through the fixed, total mapping
    pub fn from_mnemonic(c: char) -> Result<Self> {
        match c {
            'e' => Ok(CellType::E),
            'f' => Ok(CellType::F),
            'a' => Ok(CellType::A),
            'b' => Ok(CellType::B),
            'c' => Ok(CellType::C),
            'd' => Ok(CellType::D),
            _ => Err(SimError::UnknownType(c)),
        }
    }

    pub fn index(self) -> usize {
        match self {
            CellType::E => 0,
            CellType::F => 1,
            CellType::A => 2,
            CellType::B => 3,
            CellType::C => 4,
            CellType::D => 5,
        }
    }

    pub fn mnemonic(self) -> char {
        match self {
            CellType::E => 'e',
            CellType::F => 'f',
            CellType::A => 'a',
            CellType::B => 'b',
            CellType::C => 'c',
            CellType::D => 'd',
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            CellType::E => Rgb(255, 80, 80),
            CellType::F => Rgb(0, 255, 0),
            CellType::A => Rgb(255, 200, 0),
            CellType::B => Rgb(128, 128, 128),
            CellType::C => Rgb(0, 255, 255),
            CellType::D => Rgb(100, 100, 255),
        }
    }

    /// Uniform random kind, used when scattering raw material
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Uniform random chain-building kind (a, b, c, d)
    pub fn random_chain_kind<R: Rng>(rng: &mut R) -> Self {
        Self::CHAIN_KINDS[rng.gen_range(0..Self::CHAIN_KINDS.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_index_mnemonic_mapping_is_fixed() {
        let expected = [(0, 'e'), (1, 'f'), (2, 'a'), (3, 'b'), (4, 'c'), (5, 'd')];
        for (idx, ch) in expected {
            let kind = CellType::from_index(idx).unwrap();
            assert_eq!(kind.mnemonic(), ch);
            assert_eq!(kind.index(), idx);
            assert_eq!(CellType::from_mnemonic(ch).unwrap(), kind);
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert!(matches!(
            CellType::from_index(6),
            Err(SimError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_unknown_mnemonic() {
        assert!(matches!(
            CellType::from_mnemonic('z'),
            Err(SimError::UnknownType('z'))
        ));
    }

    #[test]
    fn test_colors_are_distinct_per_kind() {
        let colors: Vec<Rgb> = CellType::ALL.iter().map(|k| k.color()).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_random_chain_kind_excludes_e_and_f() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let kind = CellType::random_chain_kind(&mut rng);
            assert!(kind != CellType::E && kind != CellType::F);
        }
    }
}
