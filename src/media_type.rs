use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use mime::Mime;

/// A canonical `type/subtype` media type identifier.
///
/// Values returned by [`match_magic`](crate::match_magic) borrow their text
/// from the compiled rule table, so producing a match never allocates.
/// Equality, ordering and hashing all operate on the canonical string form.
#[derive(Debug, Clone)]
pub struct MediaType {
    repr: Cow<'static, str>,
    slash: usize,
}

impl MediaType {
    /// Parse a canonical `type/subtype` string.
    ///
    /// Returns `None` unless the input is exactly one `/` separating two
    /// non-empty ASCII token sequences (RFC 6838 restricted names), e.g.
    /// `image/png` or `application/atom+xml`.
    pub fn parse(s: impl Into<Cow<'static, str>>) -> Option<MediaType> {
        let repr = s.into();
        let slash = repr.find('/')?;
        let (media, subtype) = (&repr[..slash], &repr[slash + 1..]);
        if !is_token(media) || !is_token(subtype) {
            return None;
        }
        Some(MediaType { repr, slash })
    }

    /// Wrap a table string without re-validating it. The generator and the
    /// table sanity tests guarantee every entry is canonical.
    pub(crate) fn from_static(s: &'static str) -> MediaType {
        debug_assert!(MediaType::parse(s).is_some(), "non-canonical table entry: {s:?}");
        MediaType {
            slash: s.find('/').unwrap_or(0),
            repr: Cow::Borrowed(s),
        }
    }

    /// The full canonical form, e.g. `"text/plain"`.
    pub fn media_type(&self) -> &str {
        &self.repr
    }

    /// The part before the slash, e.g. `"text"`.
    pub fn media(&self) -> &str {
        &self.repr[..self.slash]
    }

    /// The part after the slash, e.g. `"plain"`.
    pub fn subtype(&self) -> &str {
        &self.repr[self.slash + 1..]
    }

    /// Convert into a [`mime::Mime`] for use with the wider ecosystem.
    pub fn mime(&self) -> Mime {
        self.repr
            .parse()
            .expect("BUG: validated media type failed to parse as a Mime")
    }
}

fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'!' | b'#' | b'$' | b'&' | b'-' | b'^' | b'_' | b'.' | b'+'))
}

impl PartialEq for MediaType {
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr
    }
}

impl Eq for MediaType {}

impl PartialOrd for MediaType {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MediaType {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.repr.cmp(&other.repr)
    }
}

impl Hash for MediaType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.repr.hash(state);
    }
}

impl PartialEq<str> for MediaType {
    fn eq(&self, other: &str) -> bool {
        self.repr == other
    }
}

impl PartialEq<&str> for MediaType {
    fn eq(&self, other: &&str) -> bool {
        self.repr == *other
    }
}

impl AsRef<str> for MediaType {
    fn as_ref(&self) -> &str {
        &self.repr
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

#[cfg(test)]
mod tests {
    use super::MediaType;

    #[test]
    fn test_round_trip() {
        for s in ["text/plain", "application/atom+xml", "audio/AMR", "application/x-zerosize"] {
            let mt = MediaType::parse(s).unwrap();
            assert_eq!(mt.media_type(), s);
            assert_eq!(format!("{}/{}", mt.media(), mt.subtype()), s);
        }
    }

    #[test]
    fn test_accessors() {
        let mt = MediaType::parse("image/vnd.djvu+multipage").unwrap();
        assert_eq!(mt.media(), "image");
        assert_eq!(mt.subtype(), "vnd.djvu+multipage");
    }

    #[test]
    fn test_rejects_malformed() {
        for s in ["", "noslash", "/plain", "text/", "text/pl ain", "te\u{e9}xt/plain", "a/b/c"] {
            assert!(MediaType::parse(s.to_string()).is_none(), "accepted {s:?}");
        }
    }

    #[test]
    fn test_equality_is_string_equality() {
        let a = MediaType::parse("text/plain").unwrap();
        let b = MediaType::from_static("text/plain");
        assert_eq!(a, b);
        assert_eq!(a, "text/plain");
        assert_ne!(a, MediaType::parse("text/Plain").unwrap());
    }

    #[test]
    fn test_mime_interop() {
        let mt = MediaType::parse("application/pdf").unwrap();
        let mime = mt.mime();
        assert_eq!(mime.type_(), mime::APPLICATION);
        assert_eq!(mime.subtype().as_str(), "pdf");
    }
}
