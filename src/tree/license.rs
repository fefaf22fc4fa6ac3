use serde::{Deserialize, Serialize};
use std::fmt;

/// License attached to published content
///
/// The serialized names are the ones the content platform expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum License {
    #[serde(rename = "CC BY")]
    CcBy,
    #[serde(rename = "CC BY-SA")]
    CcBySa,
    #[serde(rename = "CC BY-ND")]
    CcByNd,
    #[serde(rename = "CC BY-NC")]
    CcByNc,
    #[serde(rename = "CC BY-NC-SA")]
    CcByNcSa,
    #[serde(rename = "CC BY-NC-ND")]
    CcByNcNd,
    #[serde(rename = "All Rights Reserved")]
    AllRightsReserved,
    #[default]
    #[serde(rename = "Public Domain")]
    PublicDomain,
    #[serde(rename = "Special Permissions")]
    SpecialPermissions,
}

impl License {
    /// Returns the platform name of this license
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CcBy => "CC BY",
            Self::CcBySa => "CC BY-SA",
            Self::CcByNd => "CC BY-ND",
            Self::CcByNc => "CC BY-NC",
            Self::CcByNcSa => "CC BY-NC-SA",
            Self::CcByNcNd => "CC BY-NC-ND",
            Self::AllRightsReserved => "All Rights Reserved",
            Self::PublicDomain => "Public Domain",
            Self::SpecialPermissions => "Special Permissions",
        }
    }

    /// Returns true if the license requires a named copyright holder
    pub fn requires_copyright_holder(&self) -> bool {
        !matches!(self, Self::PublicDomain)
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
