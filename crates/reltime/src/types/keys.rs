//! Table keys: time units, directions, flavours and plural categories.
//!
//! Every key type maps one-to-one onto the snake_case names used in `.rlt`
//! table files, so parsing a table and parsing a CLI argument share the same
//! `FromStr` implementation and the same "did you mean" suggestions.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::Serialize;

use crate::engine::UnknownKey;

/// Declares a fieldless key enum together with its table-file names.
macro_rules! table_key {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $key)] $variant, )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The name used for this value in table files.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownKey;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str() == s)
                    .ok_or_else(|| {
                        UnknownKey::new($kind, s, $name::ALL.iter().copied().map($name::as_str))
                    })
            }
        }
    };
}

table_key! {
    /// Calendar granularity of a relative reference.
    ///
    /// Ordered from the largest unit to the smallest; `Now` is the
    /// instantaneous reference ("now", "just now").
    pub enum TimeUnit as "unit" {
        Year => "year",
        Quarter => "quarter",
        Month => "month",
        Week => "week",
        Day => "day",
        Hour => "hour",
        Minute => "minute",
        Second => "second",
        Now => "now",
    }
}

table_key! {
    /// Which side of a unit entry is consulted.
    ///
    /// `Past` and `Future` carry a numeric distance ("3 days ago"); the
    /// period directions refer to a whole adjacent period ("yesterday",
    /// "today", "tomorrow") and never take a magnitude.
    pub enum Direction as "direction" {
        Previous => "previous",
        Current => "current",
        Next => "next",
        Past => "past",
        Future => "future",
    }
}

table_key! {
    /// Named verbosity/style variant of a locale's phrase set.
    pub enum Flavour as "flavour" {
        Long => "long",
        LongConvenient => "long_convenient",
        LongTime => "long_time",
        Short => "short",
        ShortConvenient => "short_convenient",
        ShortTime => "short_time",
        Narrow => "narrow",
        Tiny => "tiny",
    }
}

table_key! {
    /// CLDR grammatical-number tag.
    pub enum PluralCategory as "plural category" {
        Zero => "zero",
        One => "one",
        Two => "two",
        Few => "few",
        Many => "many",
        Other => "other",
    }
}

impl Direction {
    /// Whether this direction refers to a whole period rather than a distance.
    pub fn is_period(self) -> bool {
        matches!(
            self,
            Direction::Previous | Direction::Current | Direction::Next
        )
    }

    /// Direction of a signed distance: zero and negative values are in the
    /// past, positive values in the future.
    pub fn from_signed(value: f64) -> Direction {
        if value > 0.0 {
            Direction::Future
        } else {
            Direction::Past
        }
    }
}

impl Flavour {
    /// Flavours consulted, in order, when this flavour is requested.
    ///
    /// `long` is the most complete table of every locale and always closes
    /// the chain.
    pub fn fallbacks(self) -> &'static [Flavour] {
        match self {
            Flavour::Long => &[Flavour::Long],
            Flavour::LongConvenient => &[Flavour::LongConvenient, Flavour::Long],
            Flavour::LongTime => &[Flavour::LongTime, Flavour::Long],
            Flavour::Short => &[Flavour::Short, Flavour::Long],
            Flavour::ShortConvenient => &[Flavour::ShortConvenient, Flavour::Long],
            Flavour::ShortTime => &[Flavour::ShortTime, Flavour::Long],
            Flavour::Narrow => &[Flavour::Narrow, Flavour::Long],
            Flavour::Tiny => &[Flavour::Tiny, Flavour::Long],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_their_names() {
        for unit in TimeUnit::ALL {
            assert_eq!(unit.as_str().parse::<TimeUnit>().unwrap(), *unit);
        }
        assert_eq!("long_convenient".parse::<Flavour>().unwrap(), Flavour::LongConvenient);
        assert_eq!("few".parse::<PluralCategory>().unwrap(), PluralCategory::Few);
    }

    #[test]
    fn unknown_key_suggests_close_names() {
        let err = "yaer".parse::<TimeUnit>().unwrap_err();
        assert_eq!(err.kind, "unit");
        assert_eq!(err.suggestions, vec!["year"]);
    }

    #[test]
    fn zero_distance_reads_as_past() {
        assert_eq!(Direction::from_signed(0.0), Direction::Past);
        assert_eq!(Direction::from_signed(-2.0), Direction::Past);
        assert_eq!(Direction::from_signed(2.0), Direction::Future);
    }

    #[test]
    fn every_flavour_falls_back_to_long() {
        for flavour in Flavour::ALL {
            let chain = flavour.fallbacks();
            assert_eq!(chain.first(), Some(flavour));
            assert_eq!(chain.last(), Some(&Flavour::Long));
        }
    }
}
