//! The phrase resolver.
//!
//! Resolution is a pure function of its arguments. For a requested flavour
//! the resolver walks the flavour's fallback chain ([`Flavour::fallbacks`]),
//! and within each flavour the candidate units for the request; the first
//! template that answers the direction and plural category wins and is
//! rendered with the magnitude.

use std::slice;

use tracing::debug;

use crate::engine::error::ResolveError;
use crate::engine::locale::Locale;
use crate::engine::style::Style;
use crate::types::{Direction, Flavour, TimeUnit};

/// Produces the display string for one relative-time reference.
///
/// `magnitude` must be finite and non-negative; the sign of a distance is
/// carried by `direction`. Period directions (`Previous`, `Current`,
/// `Next`) ignore the magnitude.
///
/// # Errors
///
/// [`ResolveError::InvalidMagnitude`] for negative, NaN or infinite
/// magnitudes, and [`ResolveError::Unsupported`] when neither the requested
/// flavour nor `long` has a phrase for the unit and direction.
///
/// # Example
///
/// ```
/// use reltime::{Direction, Flavour, TimeUnit, builtin, resolve};
///
/// let en = builtin::locale("en").unwrap();
/// let phrase = resolve(en, TimeUnit::Day, 3.0, Direction::Past, Flavour::Long).unwrap();
/// assert_eq!(phrase, "3 days ago");
/// ```
pub fn resolve(
    locale: &Locale,
    unit: TimeUnit,
    magnitude: f64,
    direction: Direction,
    flavour: Flavour,
) -> Result<String, ResolveError> {
    if !magnitude.is_finite() || magnitude < 0.0 {
        return Err(ResolveError::InvalidMagnitude { value: magnitude });
    }
    // Normalizes -0.0.
    let magnitude = magnitude.abs();
    let category = locale.categorize(magnitude);

    let candidates: &[TimeUnit] = match unit {
        TimeUnit::Now => &[TimeUnit::Now, TimeUnit::Second],
        TimeUnit::Second if magnitude == 0.0 => &[TimeUnit::Now, TimeUnit::Second],
        _ => slice::from_ref(&unit),
    };

    for &candidate_flavour in flavour.fallbacks() {
        let Some(table) = locale.table(candidate_flavour) else {
            debug!(
                locale = locale.tag(),
                requested = %flavour,
                missing = %candidate_flavour,
                "flavour not defined"
            );
            continue;
        };
        for &candidate in candidates {
            let Some(entry) = table.get(candidate) else {
                continue;
            };
            if let Some(template) = entry.template(direction, category) {
                if candidate_flavour != flavour || candidate != unit {
                    debug!(
                        locale = locale.tag(),
                        requested = %flavour,
                        used = %candidate_flavour,
                        unit = %candidate,
                        "resolved through fallback"
                    );
                }
                return Ok(template.render(magnitude));
            }
        }
    }

    debug!(
        locale = locale.tag(),
        %flavour,
        %unit,
        %direction,
        "no phrase available"
    );
    Err(ResolveError::Unsupported {
        locale: locale.tag().to_string(),
        flavour,
        unit,
        direction,
    })
}

/// Resolves a signed distance: negative and zero values are in the past,
/// positive values in the future.
///
/// ```
/// use reltime::{Flavour, TimeUnit, builtin, resolve_signed};
///
/// let en = builtin::locale("en").unwrap();
/// assert_eq!(resolve_signed(en, TimeUnit::Week, 2.0, Flavour::Long).unwrap(), "in 2 weeks");
/// ```
pub fn resolve_signed(
    locale: &Locale,
    unit: TimeUnit,
    value: f64,
    flavour: Flavour,
) -> Result<String, ResolveError> {
    if !value.is_finite() {
        return Err(ResolveError::InvalidMagnitude { value });
    }
    resolve(locale, unit, value.abs(), Direction::from_signed(value), flavour)
}

/// Resolves with the first flavour of `style` that `locale` defines, or
/// `long` if it defines none of them.
pub fn resolve_styled(
    locale: &Locale,
    unit: TimeUnit,
    magnitude: f64,
    direction: Direction,
    style: &Style,
) -> Result<String, ResolveError> {
    resolve(locale, unit, magnitude, direction, style_flavour(locale, style))
}

fn style_flavour(locale: &Locale, style: &Style) -> Flavour {
    style
        .flavours
        .iter()
        .copied()
        .find(|flavour| locale.has_flavour(*flavour))
        .unwrap_or(Flavour::Long)
}

/// A locale paired with a style.
///
/// # Example
///
/// ```
/// use reltime::{Direction, Resolver, TimeUnit, builtin};
///
/// let en = builtin::locale("en").unwrap();
/// let resolver = Resolver::new(en);
/// assert_eq!(resolver.resolve(TimeUnit::Day, 1.0, Direction::Past).unwrap(), "a day ago");
/// assert_eq!(resolver.resolve_signed(TimeUnit::Day, 1.0).unwrap(), "in a day");
/// ```
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    locale: &'a Locale,
    style: Style,
}

impl<'a> Resolver<'a> {
    /// A resolver using [`Style::default`].
    pub fn new(locale: &'a Locale) -> Self {
        Resolver {
            locale,
            style: Style::default(),
        }
    }

    pub fn with_style(locale: &'a Locale, style: Style) -> Self {
        Resolver { locale, style }
    }

    pub fn locale(&self) -> &'a Locale {
        self.locale
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The flavour this resolver's style selects for its locale.
    pub fn flavour(&self) -> Flavour {
        style_flavour(self.locale, &self.style)
    }

    pub fn resolve(
        &self,
        unit: TimeUnit,
        magnitude: f64,
        direction: Direction,
    ) -> Result<String, ResolveError> {
        resolve(self.locale, unit, magnitude, direction, self.flavour())
    }

    pub fn resolve_signed(&self, unit: TimeUnit, value: f64) -> Result<String, ResolveError> {
        resolve_signed(self.locale, unit, value, self.flavour())
    }
}
