//! FASTA header handling.

/// Split a FASTA header into an identifier and an optional description.
///
/// The identifier is the first whitespace-delimited token; the description is
/// everything after the first run of whitespace. Leading whitespace is
/// ignored. A header without a non-empty remainder has no description.
///
/// # Examples
///
/// ```
/// use strand_seq::split_header;
///
/// assert_eq!(
///     split_header("s1 description text"),
///     ("s1".to_string(), Some("description text".to_string()))
/// );
/// assert_eq!(split_header("s1"), ("s1".to_string(), None));
/// ```
pub fn split_header(header: &str) -> (String, Option<String>) {
    let header = header.trim_start();
    match header.find(char::is_whitespace) {
        Some(pos) => {
            let rest = header[pos..].trim_start();
            if rest.is_empty() {
                (header[..pos].to_string(), None)
            } else {
                (header[..pos].to_string(), Some(rest.to_string()))
            }
        }
        None => (header.trim().to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_and_description() {
        let (id, desc) = split_header("s1 desc A");
        assert_eq!(id, "s1");
        assert_eq!(desc.as_deref(), Some("desc A"));
    }

    #[test]
    fn identifier_only() {
        assert_eq!(split_header("s2"), ("s2".to_string(), None));
    }

    #[test]
    fn whitespace_run_is_one_separator() {
        let (id, desc) = split_header("s1 \t  spaced   out ");
        assert_eq!(id, "s1");
        assert_eq!(desc.as_deref(), Some("spaced   out "));
    }

    #[test]
    fn trailing_whitespace_has_no_description() {
        assert_eq!(split_header("s1   "), ("s1".to_string(), None));
    }

    #[test]
    fn leading_whitespace_ignored() {
        let (id, desc) = split_header("  s1 x");
        assert_eq!(id, "s1");
        assert_eq!(desc.as_deref(), Some("x"));
    }

    #[test]
    fn empty_header() {
        assert_eq!(split_header(""), (String::new(), None));
    }
}
