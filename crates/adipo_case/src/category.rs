//! Tagged-variant types for the categorical answers of a case.
//!
//! Every type maps one-to-one onto the literal spelling used by the
//! historical dataset (`as_str` / `FromStr`), and serializes as that literal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CaseError;

macro_rules! category {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $literal:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Literal spelling used by the dataset.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $literal),+
                }
            }

            /// Parse a literal, reporting `field` when it is not recognised.
            pub fn parse_for(field: &'static str, value: &str) -> Result<Self, CaseError> {
                match value {
                    $($literal => Ok($name::$variant),)+
                    other => Err(CaseError::UnknownCategoryValue {
                        field,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl FromStr for $name {
            type Err = CaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse_for($kind, s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

category! {
    /// Biological sex as recorded by the dataset.
    Gender, "Gender" {
        Female => "Female",
        Male => "Male",
    }
}

category! {
    /// Two-valued answer used by family_history, FAVC, SMOKE and SCC.
    YesNo, "yes/no" {
        No => "no",
        Yes => "yes",
    }
}

category! {
    /// Frequency answer used by CAEC (snacking) and CALC (alcohol).
    Frequency, "frequency" {
        No => "no",
        Sometimes => "Sometimes",
        Frequently => "Frequently",
        Always => "Always",
    }
}

category! {
    /// Usual transport mode (MTRANS).
    Transport, "MTRANS" {
        Automobile => "Automobile",
        Motorbike => "Motorbike",
        Bike => "Bike",
        PublicTransportation => "Public_Transportation",
        Walking => "Walking",
    }
}

category! {
    /// Daily device usage bins offered by the intake form, stored as TUE 0/1/2.
    DeviceUsage, "device usage" {
        UpTo2h => "up-to-2h",
        UpTo5h => "up-to-5h",
        Over5h => "over-5h",
    }
}

impl Gender {
    /// Binary encoding: Female → 0, Male → 1.
    pub fn code(self) -> f64 {
        match self {
            Gender::Female => 0.0,
            Gender::Male => 1.0,
        }
    }
}

impl YesNo {
    /// Binary encoding: no → 0, yes → 1.
    pub fn code(self) -> f64 {
        match self {
            YesNo::No => 0.0,
            YesNo::Yes => 1.0,
        }
    }

    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }
}

impl DeviceUsage {
    /// TUE value for this bin.
    pub fn code(self) -> f64 {
        match self {
            DeviceUsage::UpTo2h => 0.0,
            DeviceUsage::UpTo5h => 1.0,
            DeviceUsage::Over5h => 2.0,
        }
    }
}
