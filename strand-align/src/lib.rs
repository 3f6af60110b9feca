//! Sequence collections and multiple sequence alignments for the strand toolkit.
//!
//! - **Collections** — [`SequenceCollection`]: ordered, identifier-indexed
//!   sequences with bulk transforms and length statistics
//! - **Alignments** — [`Alignment`]: the same container whose validation also
//!   requires every row to have one common length
//! - **Kinds** — [`CollectionKind`] markers carrying each type's validity-check
//!   pipeline
//! - **Statistics** — [`stats`] aggregates usable as center/spread functions
//!
//! Containers are generic over any [`strand_core::BioSequence`]; the
//! `strand-seq` crate provides DNA, RNA, nucleotide, protein and generic types.
//!
//! # Quick start
//!
//! ```
//! use strand_align::{Alignment, SequenceCollection};
//! use strand_seq::DnaSequence;
//!
//! let seqs = vec![
//!     DnaSequence::from_record("ACC--G-GGTA..", "s1", None),
//!     DnaSequence::from_record("TCC--G-GGCA..", "s2", None),
//! ];
//! let aln = Alignment::from_sequences(seqs.clone(), true).unwrap();
//! assert_eq!(aln.alignment_length().unwrap(), 13);
//!
//! let collection = SequenceCollection::new(seqs);
//! assert!(aln != collection);
//! assert_eq!(aln.degap(), collection.degap());
//! ```

pub mod alignment;
pub mod collection;
pub mod kind;
pub mod stats;

pub use alignment::Alignment;
pub use collection::{Collection, SequenceCollection};
pub use kind::{Aligned, CollectionKind, Unaligned, ValidityCheck};
