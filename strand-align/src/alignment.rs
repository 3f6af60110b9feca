//! Multiple sequence alignments.
//!
//! An [`Alignment`] is a [`Collection`] whose kind adds the equal-length
//! check to validation. The check runs on demand ([`Collection::is_valid`])
//! or at construction when validation is requested; it is not enforced
//! otherwise.
//!
//! Positional analyses (subalignments, column iteration, distances,
//! gap filtering, frequencies, uncertainties) are declared with their final
//! signatures and currently fail with [`StrandError::NotImplemented`].
//!
//! # Example
//!
//! ```
//! use strand_align::Alignment;
//! use strand_seq::DnaSequence;
//!
//! let aln = Alignment::from_records(
//!     vec![("s1 desc A", "ACC--G"), ("s2", "TCC--G")],
//!     |raw, id, desc| Ok(DnaSequence::from_record(raw, id, desc)),
//!     false,
//! )
//! .unwrap();
//! assert!(aln.is_valid());
//! assert_eq!(aln.alignment_length().unwrap(), 6);
//! ```

use std::collections::HashMap;

use strand_core::{BioSequence, Result, StrandError};

use crate::collection::{not_implemented, Collection, SequenceCollection};
use crate::kind::Aligned;

/// Sequences of equal length, one per alignment row.
pub type Alignment<S> = Collection<S, Aligned>;

impl<S: BioSequence> Collection<S, Aligned> {
    /// Number of columns: the length of the first row.
    ///
    /// # Errors
    ///
    /// [`StrandError::EmptyCollection`] when the alignment has no rows.
    pub fn alignment_length(&self) -> Result<usize> {
        self.as_slice()
            .first()
            .map(|s| s.len())
            .ok_or_else(|| StrandError::EmptyCollection("alignment has no rows".into()))
    }

    /// Drop the alignment kind, keeping rows and order.
    pub fn into_collection(self) -> SequenceCollection<S> {
        self.into_kind()
    }

    /// Alignment restricted to the given rows (by identifier) and columns.
    ///
    /// `None` keeps everything along that axis; the invert flags keep
    /// everything except the listed rows or columns. Not implemented yet.
    ///
    /// # Errors
    ///
    /// Always [`StrandError::NotImplemented`].
    pub fn get_subalignment(
        &self,
        seqs_to_keep: Option<&[&str]>,
        positions_to_keep: Option<&[usize]>,
        invert_seqs_to_keep: bool,
        invert_positions_to_keep: bool,
    ) -> Result<Alignment<S>> {
        let _ = (
            seqs_to_keep,
            positions_to_keep,
            invert_seqs_to_keep,
            invert_positions_to_keep,
        );
        not_implemented("get_subalignment")
    }

    /// Alignment columns, one byte per row. Not implemented yet.
    ///
    /// # Errors
    ///
    /// Always [`StrandError::NotImplemented`].
    pub fn iter_positions(&self) -> Result<Vec<Vec<u8>>> {
        not_implemented("iter_positions")
    }

    /// Pairwise row distance matrix. Not implemented yet.
    ///
    /// # Errors
    ///
    /// Always [`StrandError::NotImplemented`].
    pub fn distances(&self) -> Result<Vec<Vec<f64>>> {
        not_implemented("distances")
    }

    /// Rows whose gap fraction is at most `max_gap_fraction`. Not implemented yet.
    ///
    /// # Errors
    ///
    /// Always [`StrandError::NotImplemented`].
    pub fn omit_gap_sequences(&self, max_gap_fraction: f64) -> Result<Alignment<S>> {
        let _ = max_gap_fraction;
        not_implemented("omit_gap_sequences")
    }

    /// Columns whose gap fraction is at most `max_gap_fraction`. Not implemented yet.
    ///
    /// # Errors
    ///
    /// Always [`StrandError::NotImplemented`].
    pub fn omit_gap_positions(&self, max_gap_fraction: f64) -> Result<Alignment<S>> {
        let _ = max_gap_fraction;
        not_implemented("omit_gap_positions")
    }

    /// Residue frequencies per column. Not implemented yet.
    ///
    /// # Errors
    ///
    /// Always [`StrandError::NotImplemented`].
    pub fn positional_frequencies(&self) -> Result<Vec<HashMap<u8, f64>>> {
        not_implemented("positional_frequencies")
    }

    /// Shannon uncertainty per column. Not implemented yet.
    ///
    /// # Errors
    ///
    /// Always [`StrandError::NotImplemented`].
    pub fn uncertainties(&self) -> Result<Vec<f64>> {
        not_implemented("uncertainties")
    }
}
