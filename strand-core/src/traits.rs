//! Core trait definitions for the strand toolkit.
//!
//! These traits define the contracts that sequence types implement and that
//! collections are generic over.

/// A biological sequence (DNA, RNA, protein, etc.).
pub trait Sequence {
    /// The raw byte representation of the sequence.
    fn as_bytes(&self) -> &[u8];

    /// Length in residues/bases, gaps included.
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// A type that carries an identifier and an optional free-text description.
pub trait Annotated {
    /// The identifier (first whitespace-delimited token of a FASTA header).
    fn identifier(&self) -> &str;

    /// An optional description.
    fn description(&self) -> Option<&str> {
        None
    }
}

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}

/// The capability set a sequence must offer to be stored in a collection.
///
/// Every transformation returns a new value; implementors are expected to
/// carry the identifier and description through unchanged.
pub trait BioSequence: Sequence + Annotated + PartialEq + Sized {
    /// Remove gap characters.
    fn degap(&self) -> Self;

    /// Uppercase every residue.
    fn upper(&self) -> Self;

    /// Lowercase every residue.
    fn lower(&self) -> Self;

    /// FASTA serialization of this single record, trailing newline included.
    fn to_fasta(&self) -> String;

    /// Whether every residue belongs to the sequence's alphabet.
    fn is_valid(&self) -> bool;
}
