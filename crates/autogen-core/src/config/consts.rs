//! Constants shared across the generator

/// Numbering of generated identifiers
pub mod ids {
    /// First id handed out to configuration items
    pub const CONFIG_ITEM_BASE: u32 = 1;

    /// First id handed out to message keys
    ///
    /// Both id spaces end up in one message dictionary, so configuration
    /// items must stay below this value.
    pub const MESSAGE_KEY_BASE: u32 = 100;
}

/// Inline region markers
pub mod markers {
    /// Comment sentinel that starts every marker and template line
    pub const SENTINEL: &str = "// --";

    /// Word following the sentinel on a start marker
    pub const START: &str = "autogen";

    /// Words following the sentinel on an end marker
    pub const END: &str = "end autogen";
}

/// Prefix prepended to every message key name
pub const MESSAGE_KEY_PREFIX: &str = "MSG_KEY_";

/// Configuration keys ending in this suffix are flagged as local
pub const LOCAL_SUFFIX: &str = "LOCAL";

/// Type used for configuration items that do not declare one
pub const DEFAULT_ITEM_TYPE: &str = "uint8_t";

/// Control-line prefix understood by the template engine
pub const DEFAULT_LINE_STATEMENT_PREFIX: &str = "##";

/// Manifest looked up in the project root
pub const MANIFEST_FILE: &str = "autogen.toml";

/// Settings store written by the configure step
pub const DEFAULT_SETTINGS_FILE: &str = ".autogen_config";

/// Setting holding the space separated list of target platforms
pub const DEFAULT_PLATFORMS_KEY: &str = "SUPPORTED_PLATFORMS";

/// File name marker of whole-file templates (`package.template.json`)
pub const TEMPLATE_MARKER: &str = ".template";
