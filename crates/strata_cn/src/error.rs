//! Error types for strata_cn

use thiserror::Error;

/// A required combobox option missing from a configuration
///
/// Violations are reported, never raised: rendering continues with a
/// fallback for each missing option.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigViolation {
    #[error("missing required option `dropdown`")]
    MissingDropdown,

    #[error("missing required option `dropdown_type` (expected \"listbox\" or \"dialog\")")]
    MissingDropdownType,

    #[error("missing required option `addon` for a combobox group")]
    MissingAddon,

    #[error("missing required option `addon_position` for a combobox group (expected \"start\" or \"end\")")]
    MissingAddonPosition,

    #[error("missing required option `combobox_position` for a combobox group (expected \"start\" or \"end\")")]
    MissingComboboxPosition,
}

impl ConfigViolation {
    /// Name of the option this violation is about
    pub fn option(&self) -> &'static str {
        match self {
            ConfigViolation::MissingDropdown => "dropdown",
            ConfigViolation::MissingDropdownType => "dropdown_type",
            ConfigViolation::MissingAddon => "addon",
            ConfigViolation::MissingAddonPosition => "addon_position",
            ConfigViolation::MissingComboboxPosition => "combobox_position",
        }
    }
}
