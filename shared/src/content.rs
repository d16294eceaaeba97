//! Static copy and asset references of the rule list empty state.

pub const ILLUSTRATION_SRC: &str = "/assets/illustrations/empty-notepad.svg";
pub const ILLUSTRATION_ALT: &str = "Empty Notepad illustration";
pub const ILLUSTRATION_HEIGHT_PX: u32 = 300;

pub const HEADING: &str = "No rules found";
pub const BODY: &str =
    "Writing rules will allow you to get alerts about suspicious activity in your system";

/// where the create-rule flow lives
pub const CREATE_RULE_PATH: &str = "/log-analysis/rules/new/";
pub const CREATE_RULE_LABEL: &str = "Create New";
