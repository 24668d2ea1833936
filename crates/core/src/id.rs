//! Composite-id encoding for groupstore
//!
//! A composite id joins a group and an item identifier into a single string:
//! `<group><separator><id>`. The separator is the base token `:` wrapped
//! around a caller-supplied type tag, e.g. `:jobs.Trigger:`. Embedding the
//! tag keeps composites from stores of different payload types from
//! colliding under a shared naming convention.
//!
//! ## Contract
//!
//! Composite ids may be persisted or transmitted by callers, so these rules
//! are FROZEN:
//! - Components must be non-empty
//! - Components must not contain the separator token (the composite would
//!   be ambiguous to decode)
//! - `group_from_id(&composite_id(g, i)?) == g` for any accepted `g`, `i`
//! - A string without the separator decodes to itself (treated as a bare
//!   group or non-composite string)
//! - Decoding accepts any split into exactly two parts, including empty
//!   ones: `"a<sep>"` decodes to group `"a"` and `"<sep>b"` to group `""`.
//!   `composite_id` never produces such strings (empty components are
//!   rejected), so this only affects externally supplied input

use crate::error::{Error, Result};

/// Base separator token wrapped around the type tag
pub const SEPARATOR: &str = ":";

/// Composite-id scheme for one store
///
/// The scheme is fixed at store construction time. The type tag is supplied
/// explicitly by the caller; the store never inspects the payload type.
///
/// # Examples
///
/// ```
/// use groupstore_core::IdScheme;
///
/// let scheme = IdScheme::new("jobs.Trigger");
/// assert_eq!(scheme.separator(), ":jobs.Trigger:");
///
/// let composite = scheme.composite_id("nightly", "t-42").unwrap();
/// assert_eq!(composite, "nightly:jobs.Trigger:t-42");
/// assert_eq!(scheme.group_from_id(&composite).unwrap(), "nightly");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdScheme {
    separator: String,
}

impl IdScheme {
    /// Create a scheme whose separator embeds the given payload type tag
    pub fn new(type_tag: impl AsRef<str>) -> Self {
        Self {
            separator: format!("{SEPARATOR}{}{SEPARATOR}", type_tag.as_ref()),
        }
    }

    /// The full separator token, including the embedded type tag
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// True iff `candidate` contains the separator token
    ///
    /// Used to distinguish a raw id from an already-composite id.
    pub fn is_composite(&self, candidate: &str) -> bool {
        candidate.contains(&self.separator)
    }

    /// Build the composite id for (group, id)
    ///
    /// Fails with [`Error::InvalidIdComponent`] when either component is
    /// empty or contains the separator token.
    pub fn composite_id(&self, group: &str, id: &str) -> Result<String> {
        if group.is_empty()
            || id.is_empty()
            || group.contains(&self.separator)
            || id.contains(&self.separator)
        {
            return Err(Error::InvalidIdComponent {
                group: group.to_owned(),
                id: id.to_owned(),
            });
        }
        Ok(format!("{group}{}{id}", self.separator))
    }

    /// Extract the group portion of a composite id
    ///
    /// Returns the input unchanged when it contains no separator. Fails
    /// with [`Error::MalformedCompositeId`] when splitting on the separator
    /// yields anything other than exactly two parts.
    pub fn group_from_id<'a>(&self, composite: &'a str) -> Result<&'a str> {
        if !self.is_composite(composite) {
            return Ok(composite);
        }
        let parts: Vec<&str> = composite.split(self.separator.as_str()).collect();
        if parts.len() == 2 {
            Ok(parts[0])
        } else {
            Err(Error::MalformedCompositeId(composite.to_owned()))
        }
    }
}
