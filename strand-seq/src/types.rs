//! Concrete sequence type aliases.
//!
//! - [`DnaSequence`], [`RnaSequence`], [`NucleotideSequence`] — IUPAC nucleotides
//! - [`ProteinSequence`] — amino acids
//! - [`GenericSequence`] — any printable residue

use crate::alphabet::{
    DnaAlphabet, GenericAlphabet, NucleotideAlphabet, ProteinAlphabet, RnaAlphabet,
};
use crate::seq::BioSeq;

/// A DNA sequence (IUPAC alphabet).
pub type DnaSequence = BioSeq<DnaAlphabet>;

/// An RNA sequence (IUPAC alphabet).
pub type RnaSequence = BioSeq<RnaAlphabet>;

/// A nucleotide sequence that may mix T and U.
pub type NucleotideSequence = BioSeq<NucleotideAlphabet>;

/// A protein/amino acid sequence.
pub type ProteinSequence = BioSeq<ProteinAlphabet>;

/// A sequence with no alphabet constraint beyond printable ASCII.
pub type GenericSequence = BioSeq<GenericAlphabet>;
