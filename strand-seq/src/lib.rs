//! Biological sequence types for the strand toolkit.
//!
//! Provides alphabet-typed, annotated sequences that implement the
//! [`strand_core::BioSequence`] capability set, so they can be stored in
//! `strand-align` collections and alignments:
//!
//! - **Alphabets** — [`DnaAlphabet`], [`RnaAlphabet`], [`NucleotideAlphabet`],
//!   [`ProteinAlphabet`], [`GenericAlphabet`]
//! - **Sequences** — [`DnaSequence`], [`RnaSequence`], [`NucleotideSequence`],
//!   [`ProteinSequence`], [`GenericSequence`]
//! - **Headers** — [`split_header`] for FASTA identifier/description splitting
//!
//! # Example
//!
//! ```
//! use strand_seq::DnaSequence;
//! use strand_core::{Annotated, BioSequence, Sequence};
//!
//! let seq = DnaSequence::from_record("acc--g", "s1", Some("desc A"));
//! assert!(seq.is_valid());
//! assert_eq!(seq.degap().upper().as_bytes(), b"ACCG");
//! assert_eq!(seq.identifier(), "s1");
//! assert_eq!(seq.to_fasta(), ">s1 desc A\nacc--g\n");
//! ```

pub mod alphabet;
pub mod header;
pub mod seq;
pub mod types;

pub use alphabet::{
    Alphabet, DnaAlphabet, GenericAlphabet, NucleotideAlphabet, ProteinAlphabet, RnaAlphabet,
    GAP_BYTES,
};
pub use header::split_header;
pub use seq::BioSeq;
pub use types::{DnaSequence, GenericSequence, NucleotideSequence, ProteinSequence, RnaSequence};
