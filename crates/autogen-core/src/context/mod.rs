//! Rendering context built once per run from the manifest and settings store

mod item;

pub use item::{rewrite_color_literal, script_default, ConfigItem, MessageKey, Sequenced};

use crate::config::consts::ids;
use crate::config::Manifest;
use crate::error::Result;
use crate::settings::SettingsStore;
use crate::template::TemplateContext;
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything templates can refer to
///
/// Constants from the manifest are exposed as top-level variables next to
/// the named fields.
#[derive(Debug, Clone, Serialize)]
pub struct Context {
    version: String,
    config_version: String,
    supported_platforms: Vec<String>,
    configuration: Vec<ConfigItem>,
    num_config_items: usize,
    message_keys: Vec<MessageKey>,
    #[serde(flatten)]
    constants: BTreeMap<String, toml::Value>,
}

impl Context {
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn config_version(&self) -> &str {
        &self.config_version
    }

    pub fn supported_platforms(&self) -> &[String] {
        &self.supported_platforms
    }

    pub fn configuration(&self) -> &[ConfigItem] {
        &self.configuration
    }

    pub fn message_keys(&self) -> &[MessageKey] {
        &self.message_keys
    }

    pub fn constant(&self, name: &str) -> Option<&toml::Value> {
        self.constants.get(name)
    }

    /// Every id-carrying entry, configuration items first
    pub fn sequenced(&self) -> impl Iterator<Item = &dyn Sequenced> {
        self.configuration
            .iter()
            .map(|item| item as &dyn Sequenced)
            .chain(self.message_keys.iter().map(|key| key as &dyn Sequenced))
    }

    /// Convert into the value templates are rendered against
    pub fn to_template_context(&self) -> TemplateContext {
        TemplateContext::from_serialize(self)
    }
}

/// Builds the [`Context`] from declarations and external settings
pub struct ContextBuilder<'a> {
    manifest: &'a Manifest,
    settings: &'a SettingsStore,
}

impl<'a> ContextBuilder<'a> {
    pub fn new(manifest: &'a Manifest, settings: &'a SettingsStore) -> Self {
        Self { manifest, settings }
    }

    /// Assemble the context
    ///
    /// Fails with `MissingExternalSetting` when the platform list is not in
    /// the settings store.
    pub fn build(&self) -> Result<Context> {
        let supported_platforms = self
            .settings
            .get_list(&self.manifest.settings.platforms_key)?;

        let configuration = sequence(
            &self.manifest.configuration,
            ids::CONFIG_ITEM_BASE,
            ConfigItem::from_decl,
        );
        let message_keys = sequence(&self.manifest.messages.keys, ids::MESSAGE_KEY_BASE, |name, id| {
            MessageKey::new(name, id)
        });

        log::debug!(
            "built context with {} configuration items, {} message keys, platforms [{}]",
            configuration.len(),
            message_keys.len(),
            supported_platforms.join(", ")
        );

        Ok(Context {
            version: self.manifest.project.version.clone(),
            config_version: self.manifest.project.config_version.clone(),
            supported_platforms,
            num_config_items: configuration.len(),
            configuration,
            message_keys,
            constants: self.manifest.constants.clone(),
        })
    }
}

/// Hand out consecutive ids starting at `base`, in declaration order
fn sequence<D, T, F>(decls: &[D], base: u32, make: F) -> Vec<T>
where
    T: Sequenced,
    F: Fn(&D, u32) -> T,
{
    decls.iter().zip(base..).map(|(decl, id)| make(decl, id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AutogenError;
    use crate::template::render;

    fn builtin_context() -> Context {
        let manifest = Manifest::builtin().unwrap();
        let settings = SettingsStore::parse(
            ".redshift_config",
            "SUPPORTED_PLATFORMS=\"aplite basalt chalk\"\n",
        );
        ContextBuilder::new(&manifest, &settings).build().unwrap()
    }

    #[test]
    fn test_build_scalar_fields() {
        let context = builtin_context();
        assert_eq!(context.version(), "1.0");
        assert_eq!(context.config_version(), "1");
        assert_eq!(context.supported_platforms(), ["aplite", "basalt", "chalk"]);
        assert_eq!(context.constant("perc_max_len"), Some(&toml::Value::Integer(30)));
    }

    #[test]
    fn test_config_ids_start_at_one_without_gaps() {
        let context = builtin_context();
        let ids: Vec<u32> = context.configuration().iter().map(|c| c.id).collect();
        let expected: Vec<u32> = (1..=context.configuration().len() as u32).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_message_ids_start_at_hundred_without_gaps() {
        let context = builtin_context();
        let ids: Vec<u32> = context.message_keys().iter().map(|k| k.id).collect();
        let expected: Vec<u32> = (100..100 + context.message_keys().len() as u32).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_id_spaces_disjoint() {
        let context = builtin_context();
        let mut ids: Vec<u32> = context.sequenced().map(|entry| entry.id()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_sequenced_keys_are_qualified() {
        let context = builtin_context();
        let id_of = |key: &str| {
            context
                .sequenced()
                .find(|entry| entry.key() == key)
                .map(|entry| entry.id())
        };
        assert_eq!(id_of("CONFIG_VIBRATE_DISCONNECT"), Some(1));
        assert_eq!(id_of("MSG_KEY_WEATHER_TEMP_LOW"), Some(100));
        assert_eq!(id_of("WEATHER_TEMP_LOW"), None);
    }

    #[test]
    fn test_missing_platforms_setting() {
        let manifest = Manifest::builtin().unwrap();
        let settings = SettingsStore::parse(".redshift_config", "OTHER=1\n");
        let result = ContextBuilder::new(&manifest, &settings).build();
        match result {
            Err(AutogenError::MissingExternalSetting { key, .. }) => {
                assert_eq!(key, "SUPPORTED_PLATFORMS");
            }
            other => panic!("Expected MissingExternalSetting, got {:?}", other),
        }
    }

    #[test]
    fn test_template_context_exposes_fields() {
        let context = builtin_context().to_template_context();
        let template = "{{ num_config_items }} {{ perc_max_len }} {{ configuration[0].type }} {{ message_keys[0].key }} {{ supported_platforms | join(',') }}";
        let result = render(template, &context).unwrap();
        assert_eq!(result, "11 30 uint8_t MSG_KEY_WEATHER_TEMP_LOW aplite,basalt,chalk");
    }

    #[test]
    fn test_template_context_exposes_derived_fields() {
        let context = builtin_context().to_template_context();
        let template = "## for item in configuration\n## if item.local\n{{ item.key }}={{ item.script_default }}\n## endif\n## endfor";
        let result = render(template, &context).unwrap();
        assert!(result.contains("CONFIG_WEATHER_UNIT_LOCAL=+1"));
        assert!(result.contains("CONFIG_WEATHER_APIKEY_LOCAL=\"\""));
        assert!(!result.contains("CONFIG_WEATHER_REFRESH"));
    }
}
