use core::fmt;

use settings_core::{Settings, Shape};
use settings_reflect::{Poke, Unresolved, resolve};

use crate::{DeserializeError, DeserializeErrorKind, Locale, SettingsSource, convert};

/// Builds typed values out of flat dot-path settings.
///
/// ```
/// use settings::{Locale, Settings, SettingsDeserializer};
///
/// #[derive(Settings, Default)]
/// #[settings(rename_all = "PascalCase")]
/// struct Address {
///     street: String,
/// }
///
/// #[derive(Settings, Default)]
/// #[settings(rename_all = "PascalCase")]
/// struct Person {
///     name: String,
///     address: Option<Address>,
/// }
///
/// let settings = [("Name", "Kalle"), ("Address.Street", "Storgatan 10")];
/// let person: Person = SettingsDeserializer::new()
///     .with_locale(Locale::SV_SE)
///     .deserialize(Some(&settings))
///     .unwrap();
/// assert_eq!(person.address.unwrap().street, "Storgatan 10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsDeserializer {
    locale: Locale,
}

impl Default for SettingsDeserializer {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsDeserializer {
    /// A deserializer that reads numbers and dates with the host's locale
    /// (see [`Locale::current`]).
    pub fn new() -> Self {
        Self {
            locale: Locale::current(),
        }
    }

    /// Reads numbers and dates with `locale` instead
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// The locale numbers and dates are read with
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Builds a `T` from `settings`.
    ///
    /// Starts from `T::default()` and applies every entry: keys that don't
    /// name a member are skipped, values that can't be converted abort the
    /// whole call. `None` fails with [`DeserializeErrorKind::MissingSettings`].
    pub fn deserialize<T, M>(&self, settings: Option<&M>) -> Result<T, DeserializeError>
    where
        T: Settings + Default,
        M: SettingsSource + ?Sized,
    {
        self.apply(settings, |_, _| {})
    }

    /// Like [`deserialize`](Self::deserialize), and also returns the keys
    /// that were skipped because they don't name a member.
    pub fn deserialize_with_report<T, M>(
        &self,
        settings: Option<&M>,
    ) -> Result<Deserialized<T>, DeserializeError>
    where
        T: Settings + Default,
        M: SettingsSource + ?Sized,
    {
        let mut skipped = Vec::new();
        let value = self.apply(settings, |key, unresolved| {
            skipped.push(SkippedSetting::new(key, unresolved));
        })?;
        Ok(Deserialized { value, skipped })
    }

    fn apply<T, M>(
        &self,
        settings: Option<&M>,
        mut on_skip: impl FnMut(&str, Unresolved),
    ) -> Result<T, DeserializeError>
    where
        T: Settings + Default,
        M: SettingsSource + ?Sized,
    {
        let Some(settings) = settings else {
            return Err(DeserializeErrorKind::MissingSettings.into());
        };

        let mut value = T::default();
        for (key, raw) in settings.entries() {
            let resolved = match resolve(Poke::new(&mut value), key) {
                Ok(resolved) => resolved,
                Err(unresolved) => {
                    tracing::debug!("Skipping `{key}`: {unresolved}");
                    on_skip(key, unresolved);
                    continue;
                }
            };

            let mut target = resolved.value;
            let Some(kind) = target.leaf_scalar_type() else {
                return Err(DeserializeErrorKind::Unsupported {
                    key: key.to_string(),
                    value: raw.to_string(),
                    shape: target.shape(),
                }
                .into());
            };
            let converted = convert(kind, raw, &self.locale)
                .map_err(|err| DeserializeError::invalid_value(key, err))?;
            tracing::trace!("{key} = {converted:?}");
            target.set_scalar(converted)?;
        }
        Ok(value)
    }
}

/// Builds a `T` from `settings` with the host's locale.
///
/// Shorthand for `SettingsDeserializer::new().deserialize(Some(settings))`.
pub fn from_settings<T, M>(settings: &M) -> Result<T, DeserializeError>
where
    T: Settings + Default,
    M: SettingsSource + ?Sized,
{
    SettingsDeserializer::new().deserialize(Some(settings))
}

/// A deserialized value, and the keys that did not contribute to it
#[derive(Debug, Clone)]
pub struct Deserialized<T> {
    /// The deserialized value
    pub value: T,
    /// Keys that did not resolve to a member, in the order they were seen
    pub skipped: Vec<SkippedSetting>,
}

/// A key that was skipped because it does not name a member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSetting {
    /// The full dot-path
    pub key: String,
    /// The first segment that did not match
    pub segment: String,
    /// Zero-based index of that segment
    pub position: usize,
    /// Shape the segment was looked up on
    pub owner: &'static Shape,
    /// The closest member name of `owner`, if any is close enough
    pub suggestion: Option<&'static str>,
}

impl SkippedSetting {
    fn new(key: &str, unresolved: Unresolved) -> Self {
        let suggestion = suggest(&unresolved.segment, unresolved.known_names());
        Self {
            key: key.to_string(),
            segment: unresolved.segment,
            position: unresolved.position,
            owner: unresolved.owner,
            suggestion,
        }
    }
}

impl fmt::Display for SkippedSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`: no member `{}` on {}", self.key, self.segment, self.owner)?;
        if let Some(suggestion) = self.suggestion {
            write!(f, " (did you mean `{suggestion}`?)")?;
        }
        Ok(())
    }
}

/// Picks the known name most similar to `unknown`, if any scores at least
/// 0.6 (Jaro-Winkler).
fn suggest(
    unknown: &str,
    known: impl IntoIterator<Item = &'static str>,
) -> Option<&'static str> {
    const SIMILARITY_THRESHOLD: f64 = 0.6;

    let mut best_match: Option<(&'static str, f64)> = None;
    for known in known {
        let similarity = strsim::jaro_winkler(unknown, known);
        if similarity >= SIMILARITY_THRESHOLD
            && best_match.is_none_or(|(_, best_sim)| similarity > best_sim)
        {
            best_match = Some((known, similarity));
        }
    }
    best_match.map(|(name, _)| name)
}
