//! Page roles and the menu capabilities each role grants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Permission level of the current user on a page.
///
/// The backend sends roles as upper-case strings. Anything that is not one of
/// the known roles is treated as [`PageRole::Viewer`], which belongs to none
/// of the privileged role sets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PageRole {
    Owner,
    Maintainer,
    Editor,
    #[default]
    Viewer,
}

pub const ALL_ROLES: &[PageRole] = &[
    PageRole::Owner,
    PageRole::Maintainer,
    PageRole::Editor,
    PageRole::Viewer,
];

impl PageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageRole::Owner => "OWNER",
            PageRole::Maintainer => "MAINTAINER",
            PageRole::Editor => "EDITOR",
            PageRole::Viewer => "VIEWER",
        }
    }

    /// Lenient parse: unknown strings fall back to `Viewer`.
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }

    /// Member of the EDITOR set (may open page settings).
    pub fn is_editor(&self) -> bool {
        matches!(
            self,
            PageRole::Owner | PageRole::Maintainer | PageRole::Editor
        )
    }

    /// Member of the MAINTAINER set (may delete the page).
    pub fn is_maintainer(&self) -> bool {
        matches!(self, PageRole::Owner | PageRole::Maintainer)
    }

    /// Member of the OWNER set (may not leave the page).
    pub fn is_owner(&self) -> bool {
        matches!(self, PageRole::Owner)
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            can_configure: self.is_editor(),
            can_leave: !self.is_owner(),
            can_delete: self.is_maintainer(),
        }
    }
}

impl fmt::Display for PageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown page role '{}'", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for PageRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OWNER" => Ok(PageRole::Owner),
            "MAINTAINER" => Ok(PageRole::Maintainer),
            "EDITOR" => Ok(PageRole::Editor),
            "VIEWER" => Ok(PageRole::Viewer),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// What the page option menu offers for a given role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub can_configure: bool,
    pub can_leave: bool,
    pub can_delete: bool,
}
