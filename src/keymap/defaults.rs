//! Default keyboard configuration
//!
//! This is the record written to `key-config.json` on first start and
//! whenever the file is missing or unreadable.

use std::collections::BTreeMap;

use super::action::{Action, ActionCategory};

/// Raw keyboard section of the config: category -> action -> chord string.
///
/// Kept as nested maps so absent categories and actions stay absent.
pub type KeyboardConfig = BTreeMap<String, BTreeMap<String, String>>;

/// The shipped bindings, grouped by category
pub fn default_keyboard_config() -> KeyboardConfig {
    ActionCategory::ALL
        .into_iter()
        .map(|category| {
            let actions = category
                .actions()
                .map(|a| (a.config_key().to_string(), a.default_spec().to_string()))
                .collect();
            (category.config_key().to_string(), actions)
        })
        .collect()
}

/// Overlay `overrides` on top of `base`, action by action
pub fn merge_keyboard_config(mut base: KeyboardConfig, overrides: &KeyboardConfig) -> KeyboardConfig {
    for (category, actions) in overrides {
        let entry = base.entry(category.clone()).or_default();
        for (action, spec) in actions {
            entry.insert(action.clone(), spec.clone());
        }
    }
    base
}

/// Config entries that name no known category or action
pub fn unknown_entries(config: &KeyboardConfig) -> Vec<String> {
    let mut unknown = Vec::new();
    for (category_key, actions) in config {
        let Some(category) = ActionCategory::from_config_key(category_key) else {
            unknown.push(category_key.clone());
            continue;
        };
        for action_key in actions.keys() {
            if Action::from_config_key(category, action_key).is_none() {
                unknown.push(format!("{}.{}", category_key, action_key));
            }
        }
    }
    unknown
}
