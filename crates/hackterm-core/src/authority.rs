//! Access levels and the authorization check.
//!
//! Every file, folder and computer session carries an [`Authority`]. A
//! requester may touch a resource when its own level is at least the
//! resource's required level.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Access level, ordered `Guest < User < Admin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Authority {
    Guest,
    User,
    Admin,
}

impl Authority {
    /// All levels, lowest first.
    pub const ALL: [Authority; 3] = [Authority::Guest, Authority::User, Authority::Admin];

    /// Lowercase word used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Authority::Guest => "guest",
            Authority::User => "user",
            Authority::Admin => "admin",
        }
    }

    /// Upper-case tag shown in the prompt.
    pub fn label(self) -> &'static str {
        match self {
            Authority::Guest => "GUEST",
            Authority::User => "USER",
            Authority::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a word is not one of `guest`, `user`, `admin`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownAuthority;

impl FromStr for Authority {
    type Err = UnknownAuthority;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guest" => Ok(Authority::Guest),
            "user" => Ok(Authority::User),
            "admin" => Ok(Authority::Admin),
            _ => Err(UnknownAuthority),
        }
    }
}

/// Check whether `have` may access a resource that requires `required`.
pub fn is_authorized(have: Authority, required: Authority) -> bool {
    match required {
        Authority::Guest => true,
        Authority::User => matches!(have, Authority::User | Authority::Admin),
        Authority::Admin => have == Authority::Admin,
    }
}
