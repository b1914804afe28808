//! Filter options for relationship queries.
//!
//! Each relationship accepts a closed set of filter values. Callers pass
//! `None` to get the relationship's default.

use std::fmt;
use std::str::FromStr;

use crate::trello::error::TrelloError;

/// A closed set of values accepted by one relationship's filter parameter.
pub trait FilterOption: Copy + Default + fmt::Display {
    /// Query parameter carrying the filter.
    const PARAMETER: &'static str = "filter";

    /// Query string value of this option.
    fn as_str(&self) -> &'static str;

    /// Resolve an optional caller choice into a query pair, falling back to
    /// the default.
    fn resolve(option: Option<Self>) -> (&'static str, &'static str) {
        (Self::PARAMETER, option.unwrap_or_default().as_str())
    }
}

macro_rules! filter_option {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($relationship:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),*
        }

        impl $name {
            /// Every accepted value.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl FilterOption for $name {
            fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $value ),*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TrelloError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $( $value => Ok($name::$variant), )*
                    _ => Err(TrelloError::InvalidFilter {
                        relationship: $relationship,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

filter_option! {
    /// Restricts the boards a member belongs to.
    pub enum BoardFilter("boards") {
        None => "none",
        Members => "members",
        Organization => "organization",
        Public => "public",
        Open => "open",
        Closed => "closed",
        #[default]
        All => "all",
    }
}

filter_option! {
    /// Restricts cards by state.
    pub enum CardFilter("cards") {
        None => "none",
        #[default]
        Open => "open",
        Closed => "closed",
        All => "all",
    }
}

filter_option! {
    /// Restricts the organizations a member belongs to.
    pub enum OrganizationFilter("organizations") {
        None => "none",
        Members => "members",
        Public => "public",
        #[default]
        All => "all",
    }
}
