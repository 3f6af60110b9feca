//! Alphabet definitions for biological sequence validation.
//!
//! Each alphabet is a zero-sized marker type that implements [`Alphabet`],
//! defining the set of valid bytes (uppercase) for a sequence type. Gap bytes
//! are shared by every alphabet.

/// Bytes treated as alignment gaps.
pub const GAP_BYTES: &[u8] = b"-.";

/// Trait for biological sequence alphabets.
///
/// Implementors define a fixed set of valid uppercase bytes. Validation
/// uppercases each byte first, so lowercase residues are accepted.
pub trait Alphabet: Clone + 'static {
    /// Human-readable name (e.g. "DNA").
    const NAME: &'static str;

    /// The set of valid uppercase bytes, gaps excluded.
    const VALID_BYTES: &'static [u8];

    /// Check whether a byte (assumed already uppercased) is a residue of this alphabet.
    fn is_valid(b: u8) -> bool {
        Self::VALID_BYTES.contains(&b)
    }

    /// Check whether a byte is a gap.
    fn is_gap(b: u8) -> bool {
        GAP_BYTES.contains(&b)
    }
}

/// IUPAC DNA alphabet: `ACGTNRYSWKMBDHV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnaAlphabet;

impl Alphabet for DnaAlphabet {
    const NAME: &'static str = "DNA";
    const VALID_BYTES: &'static [u8] = b"ACGTNRYSWKMBDHV";
}

/// IUPAC RNA alphabet: `ACGUNRYSWKMBDHV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RnaAlphabet;

impl Alphabet for RnaAlphabet {
    const NAME: &'static str = "RNA";
    const VALID_BYTES: &'static [u8] = b"ACGUNRYSWKMBDHV";
}

/// Nucleotides of either kind: the union of the DNA and RNA alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NucleotideAlphabet;

impl Alphabet for NucleotideAlphabet {
    const NAME: &'static str = "Nucleotide";
    const VALID_BYTES: &'static [u8] = b"ACGTUNRYSWKMBDHV";
}

/// Protein alphabet: 20 standard amino acids plus `XBZJUO*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProteinAlphabet;

impl Alphabet for ProteinAlphabet {
    const NAME: &'static str = "Protein";
    const VALID_BYTES: &'static [u8] = b"ACDEFGHIKLMNPQRSTVWYXBZJUO*";
}

/// Unconstrained alphabet: any printable, non-whitespace ASCII byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenericAlphabet;

impl Alphabet for GenericAlphabet {
    const NAME: &'static str = "Generic";
    const VALID_BYTES: &'static [u8] = b"";

    fn is_valid(b: u8) -> bool {
        b.is_ascii_graphic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dna_accepts_all_iupac_bases() {
        for &b in b"ACGTNRYSWKMBDHV" {
            assert!(DnaAlphabet::is_valid(b), "DNA should accept {}", b as char);
        }
    }

    #[test]
    fn dna_rejects_u() {
        assert!(!DnaAlphabet::is_valid(b'U'));
    }

    #[test]
    fn rna_rejects_t() {
        assert!(!RnaAlphabet::is_valid(b'T'));
    }

    #[test]
    fn nucleotide_accepts_t_and_u() {
        assert!(NucleotideAlphabet::is_valid(b'T'));
        assert!(NucleotideAlphabet::is_valid(b'U'));
        assert!(!NucleotideAlphabet::is_valid(b'E'));
    }

    #[test]
    fn protein_rejects_invalid() {
        assert!(!ProteinAlphabet::is_valid(b'1'));
        assert!(!ProteinAlphabet::is_valid(b' '));
    }

    #[test]
    fn generic_accepts_printable_only() {
        assert!(GenericAlphabet::is_valid(b'1'));
        assert!(GenericAlphabet::is_valid(b'~'));
        assert!(!GenericAlphabet::is_valid(b' '));
        assert!(!GenericAlphabet::is_valid(b'\n'));
    }

    #[test]
    fn gaps_are_shared() {
        assert!(DnaAlphabet::is_gap(b'-'));
        assert!(ProteinAlphabet::is_gap(b'.'));
        assert!(!RnaAlphabet::is_gap(b'A'));
    }
}
