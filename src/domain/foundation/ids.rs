//! Strongly-typed identifier value objects.
//!
//! All ledger tables use generated BIGINT keys, so every id wraps an `i64`.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! ledger_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw database key.
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw database key.
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

ledger_id!(
    /// Identifier of a billed client.
    ClientId
);

ledger_id!(
    /// Identifier of a single work log entry.
    LogId
);

ledger_id!(
    /// Identifier of a payment cycle.
    CycleId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&ClientId::new(42)).unwrap();
        assert_eq!(json, "42");
        let id: LogId = serde_json::from_str("7").unwrap();
        assert_eq!(id.value(), 7);
    }

    #[test]
    fn ids_convert_from_raw_keys() {
        let id: CycleId = 12.into();
        assert_eq!(id, CycleId::new(12));
        assert_eq!(id.to_string(), "12");
    }
}
