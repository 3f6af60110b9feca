//! Collection kinds and their validity-check pipelines.
//!
//! A kind is a zero-sized marker that names a collection type and lists the
//! checks its contents must pass. [`Aligned`] reuses every check of
//! [`Unaligned`] and appends the equal-length check.

use std::fmt;

use strand_core::BioSequence;

/// One named predicate over a collection's sequences.
pub struct ValidityCheck<S> {
    /// Short name reported when the check fails.
    pub name: &'static str,
    /// Returns `true` when the sequences pass.
    pub check: fn(&[S]) -> bool,
}

impl<S> fmt::Debug for ValidityCheck<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidityCheck").field("name", &self.name).finish()
    }
}

/// Marker trait for collection kinds.
pub trait CollectionKind: Clone + fmt::Debug + 'static {
    /// Type name used in display output and cross-kind equality.
    const NAME: &'static str;

    /// Checks run, in order, by `is_valid`.
    fn validity_checks<S: BioSequence>() -> Vec<ValidityCheck<S>>;
}

/// Sequences of any lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unaligned;

impl CollectionKind for Unaligned {
    const NAME: &'static str = "SequenceCollection";

    fn validity_checks<S: BioSequence>() -> Vec<ValidityCheck<S>> {
        vec![ValidityCheck {
            name: "sequence characters",
            check: characters_valid::<S>,
        }]
    }
}

/// Rows of a multiple sequence alignment: every sequence has the same length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Aligned;

impl CollectionKind for Aligned {
    const NAME: &'static str = "Alignment";

    fn validity_checks<S: BioSequence>() -> Vec<ValidityCheck<S>> {
        let mut checks = Unaligned::validity_checks::<S>();
        checks.push(ValidityCheck {
            name: "equal sequence lengths",
            check: lengths_equal::<S>,
        });
        checks
    }
}

/// Every sequence reports itself valid.
pub fn characters_valid<S: BioSequence>(seqs: &[S]) -> bool {
    seqs.iter().all(|s| s.is_valid())
}

/// Every sequence has the length of the first. Vacuously true when empty.
pub fn lengths_equal<S: BioSequence>(seqs: &[S]) -> bool {
    match seqs.split_first() {
        Some((first, rest)) => rest.iter().all(|s| s.len() == first.len()),
        None => true,
    }
}
