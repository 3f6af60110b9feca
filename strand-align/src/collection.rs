//! Identifier-indexed sequence collections.
//!
//! [`Collection<S, K>`] stores sequences in order and keeps a map from
//! identifier to position, built once at construction. The kind marker `K`
//! decides the type name and the validity checks; [`SequenceCollection`] and
//! [`Alignment`](crate::Alignment) are the two kinds in use.
//!
//! Collections are immutable: every transforming operation returns a new one.
//!
//! # Example
//!
//! ```
//! use strand_align::SequenceCollection;
//! use strand_seq::DnaSequence;
//!
//! let records = vec![("s1 desc A", "ACC--G"), ("s2", "TCC--G")];
//! let seqs = SequenceCollection::from_records(
//!     records,
//!     |raw, id, desc| Ok(DnaSequence::from_record(raw, id, desc)),
//!     true,
//! )
//! .unwrap();
//!
//! assert_eq!(seqs.len(), 2);
//! assert_eq!(seqs.sequence_lengths(), vec![6, 6]);
//! assert_eq!(seqs.degap().to_fasta(), ">s1 desc A\nACCG\n>s2\nTCCG\n");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;

use log::{debug, warn};
use strand_core::{BioSequence, Result, StrandError};
use strand_seq::split_header;

use crate::kind::{Aligned, CollectionKind, Unaligned};
use crate::stats;

/// An ordered collection of sequences with identifier lookup.
///
/// Identifiers should be unique. When they are not, lookups by identifier
/// resolve to the last sequence carrying it; a warning is logged for every
/// duplicate found at construction.
#[derive(Clone)]
pub struct Collection<S, K: CollectionKind = Unaligned> {
    data: Vec<S>,
    identifier_index: HashMap<String, usize>,
    _kind: PhantomData<K>,
}

/// Sequences of arbitrary lengths.
pub type SequenceCollection<S> = Collection<S, Unaligned>;

impl<S: BioSequence, K: CollectionKind> Collection<S, K> {
    /// Build a collection without validating its contents.
    pub fn new(seqs: Vec<S>) -> Self {
        let identifier_index = build_index(&seqs);
        debug!("built {} with {} sequences", K::NAME, seqs.len());
        Self {
            data: seqs,
            identifier_index,
            _kind: PhantomData,
        }
    }

    /// Build a collection, optionally running the kind's validity checks.
    ///
    /// # Errors
    ///
    /// Returns [`StrandError::Validation`] naming the first failed check when
    /// `validate` is set.
    pub fn from_sequences(seqs: Vec<S>, validate: bool) -> Result<Self> {
        let collection = Self::new(seqs);
        if validate {
            collection.check_validity()?;
        }
        Ok(collection)
    }

    /// Build a collection from `(header, raw_sequence)` records.
    ///
    /// Each header is split on its first whitespace run into an identifier
    /// and an optional description, and `constructor(raw, identifier,
    /// description)` builds the sequence. Records are consumed once, in order.
    ///
    /// # Errors
    ///
    /// Propagates the first constructor error, or a validation error as in
    /// [`Collection::from_sequences`].
    pub fn from_records<I, H, R, F>(records: I, mut constructor: F, validate: bool) -> Result<Self>
    where
        I: IntoIterator<Item = (H, R)>,
        H: AsRef<str>,
        R: AsRef<str>,
        F: FnMut(&str, &str, Option<&str>) -> Result<S>,
    {
        let seqs = records
            .into_iter()
            .map(|(header, raw)| {
                let (identifier, description) = split_header(header.as_ref());
                constructor(raw.as_ref(), &identifier, description.as_deref())
            })
            .collect::<Result<Vec<S>>>()?;
        Self::from_sequences(seqs, validate)
    }

    /// Number of sequences.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Number of sequences.
    pub fn num_seqs(&self) -> usize {
        self.data.len()
    }

    /// Whether the collection holds no sequences.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sequence at `index`.
    ///
    /// # Errors
    ///
    /// [`StrandError::IndexOutOfRange`] when `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&S> {
        self.data.get(index).ok_or(StrandError::IndexOutOfRange {
            index,
            len: self.data.len(),
        })
    }

    /// Sequence with the given identifier.
    ///
    /// # Errors
    ///
    /// [`StrandError::NotFound`] when no sequence carries `identifier`.
    pub fn get_seq(&self, identifier: &str) -> Result<&S> {
        self.identifier_index
            .get(identifier)
            .map(|&i| &self.data[i])
            .ok_or_else(|| StrandError::NotFound(identifier.to_string()))
    }

    /// Iterate over sequences in order.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.data.iter()
    }

    /// The sequences as a slice, in order.
    pub fn as_slice(&self) -> &[S] {
        &self.data
    }

    /// Consume the collection and return its sequences in order.
    pub fn into_sequences(self) -> Vec<S> {
        self.data
    }

    /// Known identifiers, in no particular order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> + '_ {
        self.identifier_index.keys().map(String::as_str)
    }

    /// `(identifier, sequence)` pairs in order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &S)> + '_ {
        self.data.iter().map(|s| (s.identifier(), s))
    }

    /// Map generated keys `"{prefix}{i}"` to sequences and to original identifiers.
    ///
    /// Returns `(key -> sequence, key -> identifier)`. Useful when handing
    /// sequences to tools that truncate or mangle long identifiers.
    pub fn int_map(&self, prefix: &str) -> (HashMap<String, &S>, HashMap<String, String>) {
        let mut seqs = HashMap::with_capacity(self.data.len());
        let mut keys = HashMap::with_capacity(self.data.len());
        for (i, seq) in self.data.iter().enumerate() {
            let key = format!("{prefix}{i}");
            keys.insert(key.clone(), seq.identifier().to_string());
            seqs.insert(key, seq);
        }
        (seqs, keys)
    }

    /// Remove gaps from every sequence.
    ///
    /// Always yields a plain [`SequenceCollection`]: degapped rows no longer
    /// share a length.
    pub fn degap(&self) -> SequenceCollection<S> {
        SequenceCollection::new(self.data.iter().map(BioSequence::degap).collect())
    }

    /// Uppercase every sequence.
    pub fn upper(&self) -> Self {
        Self::new(self.data.iter().map(BioSequence::upper).collect())
    }

    /// Lowercase every sequence.
    pub fn lower(&self) -> Self {
        Self::new(self.data.iter().map(BioSequence::lower).collect())
    }

    /// Length of each sequence, in order.
    pub fn sequence_lengths(&self) -> Vec<usize> {
        self.data.iter().map(|s| s.len()).collect()
    }

    /// `(count, mean length, population standard deviation of lengths)`.
    ///
    /// # Errors
    ///
    /// [`StrandError::EmptyCollection`] when there are no sequences.
    pub fn count_center_spread(&self) -> Result<(usize, f64, f64)> {
        self.count_center_spread_with(stats::mean, stats::population_std_dev)
    }

    /// `(count, center, spread)` of sequence lengths using custom aggregates.
    ///
    /// # Errors
    ///
    /// [`StrandError::EmptyCollection`] when there are no sequences;
    /// otherwise whatever `center` or `spread` return.
    pub fn count_center_spread_with<C, D>(&self, center: C, spread: D) -> Result<(usize, f64, f64)>
    where
        C: Fn(&[f64]) -> Result<f64>,
        D: Fn(&[f64]) -> Result<f64>,
    {
        if self.data.is_empty() {
            return Err(StrandError::EmptyCollection(format!(
                "cannot summarize lengths of an empty {}",
                K::NAME
            )));
        }
        let lengths: Vec<f64> = self.data.iter().map(|s| s.len() as f64).collect();
        Ok((lengths.len(), center(&lengths)?, spread(&lengths)?))
    }

    /// Whether every check of this collection's kind passes.
    pub fn is_valid(&self) -> bool {
        K::validity_checks::<S>()
            .iter()
            .all(|c| (c.check)(&self.data))
    }

    /// Concatenated FASTA records, in order.
    pub fn to_fasta(&self) -> String {
        self.data.iter().map(BioSequence::to_fasta).collect()
    }

    /// Most common residue per position. Not implemented yet.
    ///
    /// # Errors
    ///
    /// Always [`StrandError::NotImplemented`].
    pub fn majority_consensus(&self) -> Result<S> {
        not_implemented("majority_consensus")
    }

    /// PHYLIP serialization. Not implemented yet.
    ///
    /// # Errors
    ///
    /// Always [`StrandError::NotImplemented`].
    pub fn to_phylip(&self) -> Result<String> {
        not_implemented("to_phylip")
    }

    fn check_validity(&self) -> Result<()> {
        for check in K::validity_checks::<S>() {
            if !(check.check)(&self.data) {
                return Err(StrandError::Validation(format!(
                    "{} failed check '{}'",
                    K::NAME,
                    check.name
                )));
            }
        }
        Ok(())
    }

    /// Reinterpret under another kind; order and index carry over.
    pub(crate) fn into_kind<K2: CollectionKind>(self) -> Collection<S, K2> {
        Collection {
            data: self.data,
            identifier_index: self.identifier_index,
            _kind: PhantomData,
        }
    }
}

impl<S: BioSequence> SequenceCollection<S> {
    /// Treat these sequences as alignment rows.
    ///
    /// # Errors
    ///
    /// When `validate` is set, [`StrandError::Validation`] if any alignment
    /// check fails (e.g. unequal lengths).
    pub fn into_alignment(self, validate: bool) -> Result<Collection<S, Aligned>> {
        let alignment = self.into_kind::<Aligned>();
        if validate {
            alignment.check_validity()?;
        }
        Ok(alignment)
    }
}

pub(crate) fn not_implemented<T>(operation: &'static str) -> Result<T> {
    debug!("placeholder operation '{}' invoked", operation);
    Err(StrandError::NotImplemented(operation))
}

fn build_index<S: BioSequence>(seqs: &[S]) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(seqs.len());
    for (i, seq) in seqs.iter().enumerate() {
        if let Some(previous) = index.insert(seq.identifier().to_string(), i) {
            warn!(
                "duplicate identifier '{}' at positions {} and {}; lookups resolve to {}",
                seq.identifier(),
                previous,
                i,
                i
            );
        }
    }
    index
}

impl<S, K, K2> PartialEq<Collection<S, K2>> for Collection<S, K>
where
    S: BioSequence,
    K: CollectionKind,
    K2: CollectionKind,
{
    /// Equal when both are the same kind and hold pairwise-equal sequences in order.
    fn eq(&self, other: &Collection<S, K2>) -> bool {
        K::NAME == K2::NAME && self.data == other.data
    }
}

impl<S: BioSequence + Eq, K: CollectionKind> Eq for Collection<S, K> {}

impl<S: BioSequence, K: CollectionKind> Index<usize> for Collection<S, K> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        &self.data[index]
    }
}

impl<S: BioSequence, K: CollectionKind> Index<&str> for Collection<S, K> {
    type Output = S;

    fn index(&self, identifier: &str) -> &S {
        match self.identifier_index.get(identifier) {
            Some(&i) => &self.data[i],
            None => panic!("identifier not found: {identifier}"),
        }
    }
}

impl<'a, S, K: CollectionKind> IntoIterator for &'a Collection<S, K> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<S: BioSequence, K: CollectionKind> fmt::Display for Collection<S, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.count_center_spread() {
            Ok((count, center, spread)) => write!(
                f,
                "<{}: n={}; mean +/- std length={:.2} +/- {:.2}>",
                K::NAME,
                count,
                center,
                spread
            ),
            Err(_) => write!(f, "<{}: n=0>", K::NAME),
        }
    }
}

impl<S: fmt::Debug, K: CollectionKind> fmt::Debug for Collection<S, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(K::NAME).field("data", &self.data).finish()
    }
}

#[cfg(feature = "serde")]
impl<S: serde::Serialize, K: CollectionKind> serde::Serialize for Collection<S, K> {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error> {
        self.data.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, S, K> serde::Deserialize<'de> for Collection<S, K>
where
    S: BioSequence + serde::Deserialize<'de>,
    K: CollectionKind,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Ok(Self::new(Vec::<S>::deserialize(deserializer)?))
    }
}
