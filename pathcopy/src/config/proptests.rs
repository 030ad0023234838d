//! Property-based tests for configuration merging and validation.

use super::merger::ConfigMerger;
use super::schema::{Config, NetworkConfig};
use super::validator::ConfigValidator;
use crate::codec::{encode_plugin_ids, DEFAULT_SEPARATOR};
use crate::plugin::PluginId;
use crate::settings::Settings;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn order_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<u128>(), 0..6).prop_map(|raw| {
        let ids: Vec<PluginId> = raw.into_iter().map(PluginId::from_u128).collect();
        encode_plugin_ids(&ids, DEFAULT_SEPARATOR)
    })
}

fn alias_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[A-Z]:\\\\[a-z]{1,8}", "[A-Z]{1,6}~1", 0..4)
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(order_strategy()),
        prop::option::of(order_strategy()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        prop::option::of("[a-z]{1,12}"),
        prop::option::of(alias_strategy()),
    )
        .prop_map(
            |(main_menu_order, submenu_order, drop_words, hidden, fqdn, computer_name, aliases)| {
                Config {
                    main_menu_order,
                    submenu_order,
                    drop_redundant_words: drop_words,
                    use_hidden_shares: hidden,
                    use_fqdn: fqdn,
                    computer_name,
                    short_names: aliases,
                    ..Default::default()
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Higher precedence wins wherever it is set
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(
            &result.main_menu_order,
            if high.main_menu_order.is_some() { &high.main_menu_order } else { &low.main_menu_order }
        );
        prop_assert_eq!(result.use_fqdn, high.use_fqdn.or(low.use_fqdn));
        prop_assert_eq!(result.use_hidden_shares, high.use_hidden_shares.or(low.use_hidden_shares));
        prop_assert_eq!(
            result.drop_redundant_words,
            high.drop_redundant_words.or(low.drop_redundant_words)
        );
        prop_assert_eq!(
            &result.computer_name,
            if high.computer_name.is_some() { &high.computer_name } else { &low.computer_name }
        );
    }

    // Empty config is identity element for merge
    #[test]
    fn config_merge_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(config, merged);
    }

    // Aliases from both sides survive, the higher side wins on conflicts
    #[test]
    fn short_names_union(low in alias_strategy(), high in alias_strategy()) {
        let mut result = Config { short_names: Some(low.clone()), ..Default::default() };
        ConfigMerger::merge_into(&mut result, &Config { short_names: Some(high.clone()), ..Default::default() });

        let merged = result.short_names.unwrap_or_default();
        for (key, value) in &high {
            prop_assert_eq!(merged.get(key), Some(value));
        }
        for key in low.keys() {
            prop_assert!(merged.contains_key(key));
        }
    }

    // Encoded order lists always validate and decode back
    #[test]
    fn generated_orders_validate(order in order_strategy()) {
        let config = Config { submenu_order: Some(order.clone()), ..Default::default() };
        prop_assert!(ConfigValidator::validate(&config).is_ok());
        let decoded = config.submenu_display_order().unwrap_or_default();
        prop_assert_eq!(encode_plugin_ids(&decoded, DEFAULT_SEPARATOR), order);
    }

    // Merging never drops the offline flag once set
    #[test]
    fn offline_flag_sticks(low in prop::option::of(any::<bool>()), high in prop::option::of(any::<bool>())) {
        let mut result = Config {
            network: Some(NetworkConfig { offline: low, ..Default::default() }),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut result, &Config {
            network: Some(NetworkConfig { offline: high, ..Default::default() }),
            ..Default::default()
        });
        prop_assert_eq!(result.network.and_then(|n| n.offline), high.or(low));
    }
}
