//! Generic annotated sequence type.
//!
//! [`BioSeq<A>`] holds residue bytes plus an identifier and optional
//! description, parameterized by an [`Alphabet`] marker type. Bytes are stored
//! exactly as given (case and gaps preserved); [`BioSequence::is_valid`] checks
//! them against the alphabet on demand, and [`BioSeq::try_new`] checks eagerly.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

use strand_core::{Annotated, BioSequence, Sequence, StrandError, Summarizable};

use crate::alphabet::Alphabet;
use crate::header::split_header;

/// An annotated biological sequence parameterized by its alphabet.
///
/// `BioSeq<DnaAlphabet>` is a DNA sequence, `BioSeq<RnaAlphabet>` is RNA,
/// etc. Equality and hashing consider only the residues.
#[derive(Clone)]
pub struct BioSeq<A: Alphabet> {
    identifier: String,
    description: Option<String>,
    data: Vec<u8>,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> BioSeq<A> {
    /// Create an unannotated sequence from raw bytes without validation.
    pub fn new(bytes: impl AsRef<[u8]>) -> Self {
        Self::from_parts(String::new(), None, bytes.as_ref().to_vec())
    }

    /// Create an unannotated sequence, rejecting bytes outside the alphabet.
    ///
    /// Gap bytes are accepted. Case is preserved.
    pub fn try_new(bytes: impl AsRef<[u8]>) -> strand_core::Result<Self> {
        let bytes = bytes.as_ref();
        if let Some(i) = first_invalid::<A>(bytes) {
            let b = bytes[i];
            return Err(StrandError::InvalidInput(format!(
                "invalid {} byte '{}' (0x{:02X}) at position {}",
                A::NAME,
                b as char,
                b,
                i
            )));
        }
        Ok(Self::new(bytes))
    }

    /// Build a sequence the way a record-driven constructor does: raw residues
    /// plus an already split identifier and description. No validation.
    pub fn from_record(raw: &str, identifier: &str, description: Option<&str>) -> Self {
        Self::from_parts(
            identifier.to_string(),
            description.map(str::to_string),
            raw.as_bytes().to_vec(),
        )
    }

    /// Like [`BioSeq::from_record`], but rejects bytes outside the alphabet.
    pub fn try_from_record(
        raw: &str,
        identifier: &str,
        description: Option<&str>,
    ) -> strand_core::Result<Self> {
        Ok(Self::try_new(raw)?
            .with_identifier(identifier)
            .with_description(description))
    }

    /// Build a sequence from an unsplit FASTA header and its residues.
    pub fn from_header(header: &str, raw: &str) -> Self {
        let (identifier, description) = split_header(header);
        Self::from_parts(identifier, description, raw.as_bytes().to_vec())
    }

    /// Replace the identifier.
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    /// Replace the description.
    pub fn with_description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_string);
        self
    }

    /// Number of gap bytes.
    pub fn gap_count(&self) -> usize {
        self.data.iter().filter(|&&b| A::is_gap(b)).count()
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    fn from_parts(identifier: String, description: Option<String>, data: Vec<u8>) -> Self {
        Self {
            identifier,
            description,
            data,
            _alphabet: PhantomData,
        }
    }

    /// Same annotation, new residues.
    fn map_residues(&self, data: Vec<u8>) -> Self {
        Self::from_parts(self.identifier.clone(), self.description.clone(), data)
    }
}

fn first_invalid<A: Alphabet>(bytes: &[u8]) -> Option<usize> {
    bytes
        .iter()
        .position(|&b| !A::is_gap(b) && !A::is_valid(b.to_ascii_uppercase()))
}

impl<A: Alphabet> Deref for BioSeq<A> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> AsRef<[u8]> for BioSeq<A> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> Sequence for BioSeq<A> {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> Annotated for BioSeq<A> {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl<A: Alphabet> BioSequence for BioSeq<A> {
    fn degap(&self) -> Self {
        let data = self.data.iter().copied().filter(|&b| !A::is_gap(b)).collect();
        self.map_residues(data)
    }

    fn upper(&self) -> Self {
        self.map_residues(self.data.to_ascii_uppercase())
    }

    fn lower(&self) -> Self {
        self.map_residues(self.data.to_ascii_lowercase())
    }

    fn to_fasta(&self) -> String {
        let mut out = String::with_capacity(self.identifier.len() + self.data.len() + 4);
        out.push('>');
        out.push_str(&self.identifier);
        if let Some(desc) = &self.description {
            out.push(' ');
            out.push_str(desc);
        }
        out.push('\n');
        out.push_str(&String::from_utf8_lossy(&self.data));
        out.push('\n');
        out
    }

    fn is_valid(&self) -> bool {
        first_invalid::<A>(&self.data).is_none()
    }
}

impl<A: Alphabet> Summarizable for BioSeq<A> {
    fn summary(&self) -> String {
        let preview_len = self.data.len().min(20);
        let preview = String::from_utf8_lossy(&self.data[..preview_len]);
        let ellipsis = if self.data.len() > 20 { "..." } else { "" };
        if self.identifier.is_empty() {
            format!("{} sequence ({} bp): {}{}", A::NAME, self.data.len(), preview, ellipsis)
        } else {
            format!(
                "{} sequence '{}' ({} bp): {}{}",
                A::NAME,
                self.identifier,
                self.data.len(),
                preview,
                ellipsis
            )
        }
    }
}

impl<A: Alphabet> fmt::Debug for BioSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{}\")", A::NAME, String::from_utf8_lossy(&self.data))
    }
}

impl<A: Alphabet> fmt::Display for BioSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.data))
    }
}

impl<A: Alphabet> PartialEq for BioSeq<A> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<A: Alphabet> Eq for BioSeq<A> {}

impl<A: Alphabet> Hash for BioSeq<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct SeqRecord {
    identifier: String,
    description: Option<String>,
    sequence: String,
}

#[cfg(feature = "serde")]
impl<A: Alphabet> serde::Serialize for BioSeq<A> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let sequence = std::str::from_utf8(&self.data).map_err(serde::ser::Error::custom)?;
        SeqRecord {
            identifier: self.identifier.clone(),
            description: self.description.clone(),
            sequence: sequence.to_string(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, A: Alphabet> serde::Deserialize<'de> for BioSeq<A> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let record = SeqRecord::deserialize(deserializer)?;
        Ok(Self::from_parts(
            record.identifier,
            record.description,
            record.sequence.into_bytes(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{DnaAlphabet, ProteinAlphabet};

    type DnaSeq = BioSeq<DnaAlphabet>;

    #[test]
    fn preserves_case_and_gaps() {
        let seq = DnaSeq::new(b"acG-t.");
        assert_eq!(seq.as_bytes(), b"acG-t.");
        assert_eq!(seq.len(), 6);
    }

    #[test]
    fn empty_sequence_ok() {
        let seq = DnaSeq::new(b"");
        assert!(seq.is_empty());
        assert!(seq.is_valid());
    }

    #[test]
    fn try_new_rejects_invalid_bytes() {
        let err = DnaSeq::try_new(b"ACGX").unwrap_err();
        assert!(err.to_string().contains("position 3"));
    }

    #[test]
    fn try_new_accepts_lowercase_and_gaps() {
        assert!(DnaSeq::try_new(b"ac--gt").is_ok());
    }

    #[test]
    fn is_valid_checks_alphabet() {
        assert!(DnaSeq::new(b"ACGT-N").is_valid());
        assert!(!DnaSeq::new(b"ACGU").is_valid());
        assert!(!BioSeq::<ProteinAlphabet>::new(b"MK1").is_valid());
    }

    #[test]
    fn from_record_keeps_annotation() {
        let seq = DnaSeq::from_record("ACC--G", "s1", Some("desc A"));
        assert_eq!(seq.identifier(), "s1");
        assert_eq!(seq.description(), Some("desc A"));
        assert_eq!(seq.as_bytes(), b"ACC--G");
    }

    #[test]
    fn from_header_splits() {
        let seq = DnaSeq::from_header("s1 first one", "AC");
        assert_eq!(seq.identifier(), "s1");
        assert_eq!(seq.description(), Some("first one"));
    }

    #[test]
    fn degap_removes_both_gap_bytes() {
        let seq = DnaSeq::from_record("AC-G.T", "s1", None);
        let degapped = seq.degap();
        assert_eq!(degapped.as_bytes(), b"ACGT");
        assert_eq!(degapped.identifier(), "s1");
        assert_eq!(seq.gap_count(), 2);
    }

    #[test]
    fn case_transforms_keep_annotation() {
        let seq = DnaSeq::from_record("AcGt", "s1", Some("d"));
        let upper = seq.upper();
        let lower = seq.lower();
        assert_eq!(upper.as_bytes(), b"ACGT");
        assert_eq!(lower.as_bytes(), b"acgt");
        assert_eq!(lower.identifier(), "s1");
        assert_eq!(lower.description(), Some("d"));
        assert_eq!(lower.upper(), upper);
    }

    #[test]
    fn to_fasta_with_and_without_description() {
        let with = DnaSeq::from_record("ACGT", "s1", Some("desc A"));
        assert_eq!(with.to_fasta(), ">s1 desc A\nACGT\n");
        let without = DnaSeq::from_record("TT", "s2", None);
        assert_eq!(without.to_fasta(), ">s2\nTT\n");
    }

    #[test]
    fn equality_ignores_annotation() {
        let a = DnaSeq::from_record("ACGT", "a", None);
        let b = DnaSeq::from_record("ACGT", "b", Some("other"));
        assert_eq!(a, b);
        assert_ne!(a, DnaSeq::new(b"acgt"));
    }

    #[test]
    fn summary_includes_identifier() {
        let seq = DnaSeq::from_record("ACGT", "s1", None);
        assert_eq!(seq.summary(), "DNA sequence 's1' (4 bp): ACGT");
        let long = DnaSeq::new(b"ACGTACGTACGTACGTACGTAC");
        assert!(long.summary().ends_with("..."));
    }

    #[test]
    fn debug_names_alphabet() {
        assert_eq!(format!("{:?}", DnaSeq::new(b"AC")), "DNA(\"AC\")");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_record() {
        let seq = DnaSeq::from_record("AC-G", "s1", Some("d"));
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, r#"{"identifier":"s1","description":"d","sequence":"AC-G"}"#);
        let back: DnaSeq = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);
        assert_eq!(back.identifier(), "s1");
    }
}
