//! # Identity Newtypes
//!
//! Domain-primitive newtypes for identifiers throughout the Vigil stack.
//! Each identifier is a distinct type — you cannot pass a [`SystemId`]
//! where a [`HealthSystemId`] is expected.
//!
//! All identifiers are UUID-based and always valid by construction.
//! [`ViolationId`] deserves a note: it is the stable synthetic key that
//! action generation groups by, so downstream persistence can attribute
//! each action to the violation that produced it without relying on
//! reference identity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! uuid_newtype {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an identifier from an existing UUID.
            pub fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Access the underlying UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

uuid_newtype!(
    /// A unique identifier for a monitored AI system.
    SystemId
);

uuid_newtype!(
    /// A unique identifier for a health system (hospital network) that
    /// owns one or more monitored AI systems.
    HealthSystemId
);

uuid_newtype!(
    /// A unique identifier for an AI vendor.
    VendorId
);

uuid_newtype!(
    /// A stable synthetic identifier assigned to each violation at
    /// construction time, used to group generated actions by cause.
    ViolationId
);
