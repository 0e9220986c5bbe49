//! Dot-path resolution: from `"Address.Country.CountryCode"` and a root
//! handle to the handle of the member the path names.

use alloc::string::{String, ToString};
use core::fmt;

use settings_core::{Def, Field, Shape};

use crate::{Poke, ReflectError, debug, trace};

/// The member a dot-path resolved to.
#[derive(Debug)]
pub struct ResolvedField<'mem> {
    /// Shape of the struct that declares the member
    pub owner: &'static Shape,
    /// Static descriptor of the member
    pub field: &'static Field,
    /// Index of the member in its owner's field table
    pub index: usize,
    /// Handle on the member itself, ready to be written
    pub value: Poke<'mem>,
}

/// Why a dot-path could not be resolved.
///
/// Carries the first segment that did not name a member, and the shape it
/// was looked up on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unresolved {
    /// The segment that did not match
    pub segment: String,
    /// Zero-based index of that segment in the path
    pub position: usize,
    /// Shape the segment was looked up on
    pub owner: &'static Shape,
}

impl Unresolved {
    /// Member names the owner does have. Empty when the owner is not a struct.
    pub fn known_names(&self) -> impl Iterator<Item = &'static str> + use<> {
        self.owner
            .struct_type()
            .map(|st| st.fields)
            .unwrap_or(&[])
            .iter()
            .map(|f| f.name)
    }
}

impl fmt::Display for Unresolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no member `{}` on {} (segment {})",
            self.segment, self.owner, self.position
        )
    }
}

impl core::error::Error for Unresolved {}

/// Resolves `dot_path` against `root`.
///
/// Segments are matched exactly against effective member names. Every
/// segment but the last must name something that can be walked through:
///
/// - a struct member is entered as is;
/// - an `Option` of a struct that is `None` is first set to
///   `Some(Default::default())`, then entered. This write is kept even if a
///   later segment fails to resolve.
/// - anything else stops the walk without touching the member: the next
///   segment is reported as unresolved on that member's shape.
///
/// The last segment may name a member of any kind.
pub fn resolve<'mem>(root: Poke<'mem>, dot_path: &str) -> Result<ResolvedField<'mem>, Unresolved> {
    let (parents, leaf) = match dot_path.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, dot_path),
    };

    let mut current = root;
    let mut position = 0;
    for segment in parents.into_iter().flat_map(|p| p.split('.')) {
        let (_, field, member) = lookup(current, segment, position)?;
        trace!("{dot_path}: entering `{segment}` ({})", field.shape());
        current = step_into(member).map_err(|_| Unresolved {
            segment: segment.to_string(),
            position,
            owner: field.shape(),
        })?;
        position += 1;
    }

    let owner = current.shape();
    let (index, field, value) = lookup(current, leaf, position)?;
    trace!("{dot_path}: resolved to {owner}::{} ({})", field.name, field.shape());
    Ok(ResolvedField {
        owner,
        field,
        index,
        value,
    })
}

fn lookup<'mem>(
    current: Poke<'mem>,
    segment: &str,
    position: usize,
) -> Result<(usize, &'static Field, Poke<'mem>), Unresolved> {
    let owner = current.shape();
    current
        .into_struct()
        .and_then(|st| st.field_by_name(segment))
        .map_err(|_| {
            debug!("No member `{segment}` on {owner}");
            Unresolved {
                segment: segment.to_string(),
                position,
                owner,
            }
        })
}

/// Returns the handle to continue the walk in. An `Option<struct>` is
/// entered, materializing it if empty. Anything else is returned untouched:
/// a struct is entered as is, and other kinds fail the next lookup.
fn step_into(member: Poke<'_>) -> Result<Poke<'_>, ReflectError> {
    match member.shape().def {
        Def::Option(od) if od.t().struct_type().is_some() => {
            member.into_option_inner_or_default()
        }
        _ => Ok(member),
    }
}
