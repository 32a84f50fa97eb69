#![deny(unsafe_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub fn value(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

record_id!(
    /// Owner of a specialization and of user-scoped records.
    UserId
);
record_id!(SpecializationId);
record_id!(
    /// Module within a specialization (basic or specialistic).
    ModuleId
);
record_id!(InternshipId);
record_id!(ShiftId);
record_id!(ProcedureId);
record_id!(CourseId);
record_id!(SelfEducationId);
record_id!(AbsenceId);
record_id!(RecognitionId);
record_id!(PublicationId);
