//! Code tables for the numeric columns of the inventory tables.
//!
//! Every table is a total mapping: codes outside the known set decode to `Unknown`
//! and render as `"Unknown"`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SystemMode {
    Source,
    Target,
    Recovery,
    Vsm,
    #[default]
    Unknown,
}

impl SystemMode {
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Source,
            2 => Self::Target,
            3 => Self::Recovery,
            10 => Self::Vsm,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Source => "Source",
            Self::Target => "Target",
            Self::Recovery => "Recovery",
            Self::Vsm => "VSM",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OsType {
    Windows,
    Linux,
    Cloud,
    #[default]
    Unknown,
}

impl OsType {
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Windows,
            2 => Self::Linux,
            3 => Self::Cloud,
            _ => Self::Unknown,
        }
    }

    /// Maps the `os` query value to an OS type; only `win` and `lin` are filterable.
    pub fn from_filter(value: &str) -> Option<Self> {
        match value {
            "win" => Some(Self::Windows),
            "lin" => Some(Self::Linux),
            _ => None,
        }
    }

    /// Stored column code, `None` for `Unknown`.
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::Windows => Some(1),
            Self::Linux => Some(2),
            Self::Cloud => Some(3),
            Self::Unknown => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Windows => "Window",
            Self::Linux => "Linux",
            Self::Cloud => "Cloud",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiskType {
    Bios,
    Gpt,
    #[default]
    Unknown,
}

impl DiskType {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Bios,
            1 => Self::Gpt,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Bios => "Bios",
            Self::Gpt => "Gpt",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepositoryType {
    Source,
    Target,
    Vsm,
    Network,
    CloudStorage,
    #[default]
    Unknown,
}

impl RepositoryType {
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Source,
            2 => Self::Target,
            10 => Self::Vsm,
            20 => Self::Network,
            30 => Self::CloudStorage,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Source => "Source",
            Self::Target => "Target",
            Self::Vsm => "VSM",
            Self::Network => "Network",
            Self::CloudStorage => "Cloud Storage",
            Self::Unknown => "Unknown",
        }
    }
}

/// Connection states accepted by the `state` filter.
pub const VALID_STATES: [&str; 2] = ["connect", "disconnect"];

/// License filter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseFilter {
    /// `license_id > 0`
    Assigned,
    /// `license_id == 0`
    Unassigned,
}

impl LicenseFilter {
    pub fn from_filter(value: &str) -> Option<Self> {
        match value {
            "assign" => Some(Self::Assigned),
            "unassign" => Some(Self::Unassigned),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_have_labels() {
        assert_eq!(SystemMode::from_code(1).label(), "Source");
        assert_eq!(SystemMode::from_code(10).label(), "VSM");
        assert_eq!(OsType::from_code(1).label(), "Window");
        assert_eq!(OsType::from_code(2).label(), "Linux");
        assert_eq!(DiskType::from_code(0).label(), "Bios");
        assert_eq!(DiskType::from_code(1).label(), "Gpt");
        assert_eq!(RepositoryType::from_code(30).label(), "Cloud Storage");
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(SystemMode::from_code(7).label(), "Unknown");
        assert_eq!(OsType::from_code(0).label(), "Unknown");
        assert_eq!(DiskType::from_code(-1).label(), "Unknown");
        assert_eq!(RepositoryType::from_code(99).label(), "Unknown");
    }

    #[test]
    fn os_filter_maps_to_codes() {
        assert_eq!(OsType::from_filter("win").and_then(|os| os.code()), Some(1));
        assert_eq!(OsType::from_filter("lin").and_then(|os| os.code()), Some(2));
        assert_eq!(OsType::from_filter("mac"), None);
    }

    #[test]
    fn license_filter_values() {
        assert_eq!(LicenseFilter::from_filter("assign"), Some(LicenseFilter::Assigned));
        assert_eq!(LicenseFilter::from_filter("unassign"), Some(LicenseFilter::Unassigned));
        assert_eq!(LicenseFilter::from_filter("any"), None);
    }
}
