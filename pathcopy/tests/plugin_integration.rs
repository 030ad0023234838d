//! Integration tests for plugins, visibility and menu layout working
//! together through the configuration layer.

use pathcopy::codec::{encode_plugin_ids, DEFAULT_SEPARATOR};
use pathcopy::plugin::{builtin, AliasForms, Capability, Plugin, PluginId};
use pathcopy::{
    visibility, BuiltinRegistry, Config, MenuLayout, NetworkResolver, PluginContext,
    PluginRegistry, Settings,
};

// ============================================================================
// Test Utilities
// ============================================================================

fn order(ids: &[PluginId]) -> Option<String> {
    Some(encode_plugin_ids(ids, DEFAULT_SEPARATOR))
}

/// Owns every collaborator a plugin call borrows.
struct Harness {
    config: Config,
    registry: BuiltinRegistry,
    network: NetworkResolver,
    forms: AliasForms,
}

impl Harness {
    fn new(config: Config) -> Self {
        Self::with_registry(config, BuiltinRegistry::new())
    }

    fn with_registry(config: Config, registry: BuiltinRegistry) -> Self {
        let network = config.network_resolver();
        let forms = config.path_forms();
        Self {
            config,
            registry,
            network,
            forms,
        }
    }

    fn ctx(&self) -> PluginContext<'_> {
        PluginContext::new(&self.config, &self.registry, &self.network, &self.forms)
    }

    fn plugin(&self, id: PluginId) -> &Plugin {
        self.registry.plugin(id).unwrap()
    }

    fn description(&self, id: PluginId) -> String {
        self.plugin(id).description(&self.ctx()).to_string()
    }
}

// ============================================================================
// Androgynous descriptions
// ============================================================================

#[test]
fn test_counterpart_in_submenu_keeps_normal_description() {
    let harness = Harness::new(Config {
        drop_redundant_words: Some(true),
        main_menu_order: order(&[builtin::LONG_UNC_FOLDER]),
        submenu_order: order(&[builtin::SHORT_UNC_FOLDER]),
        ..Config::default()
    });

    assert!(!harness.plugin(builtin::LONG_UNC_FOLDER).is_androgynous(&harness.ctx()));
    assert_eq!(
        harness.description(builtin::LONG_UNC_FOLDER),
        "Copy Long UNC Parent Folder Path"
    );
}

#[test]
fn test_hidden_counterpart_merges_description() {
    let harness = Harness::new(Config {
        drop_redundant_words: Some(true),
        main_menu_order: order(&[builtin::LONG_UNC_FOLDER]),
        submenu_order: Some(String::new()),
        ..Config::default()
    });

    assert!(harness.plugin(builtin::LONG_UNC_FOLDER).is_androgynous(&harness.ctx()));
    assert_eq!(
        harness.description(builtin::LONG_UNC_FOLDER),
        "Copy UNC Parent Folder Path"
    );
}

#[test]
fn test_redundant_words_kept_when_setting_off() {
    let harness = Harness::new(Config {
        drop_redundant_words: Some(false),
        main_menu_order: order(&[builtin::SHORT_NAME]),
        submenu_order: Some(String::new()),
        ..Config::default()
    });

    assert_eq!(harness.description(builtin::SHORT_NAME), "Copy Short Name");
}

#[test]
fn test_absent_submenu_order_shows_every_counterpart() {
    let harness = Harness::new(Config {
        drop_redundant_words: Some(true),
        main_menu_order: order(&[builtin::LONG_PATH]),
        ..Config::default()
    });

    for plugin in harness.registry.plugins() {
        if plugin.supports(Capability::Androgynous) {
            assert!(!plugin.is_androgynous(&harness.ctx()), "{}", plugin.name());
        }
    }
}

#[test]
fn test_plugins_without_counterpart_never_merge() {
    let harness = Harness::new(Config {
        drop_redundant_words: Some(true),
        main_menu_order: Some(String::new()),
        submenu_order: Some(String::new()),
        ..Config::default()
    });

    let unix = harness.plugin(builtin::UNIX_PATH);
    assert!(!unix.supports(Capability::Androgynous));
    assert!(!unix.is_androgynous(&harness.ctx()));
    assert!(harness.plugin(builtin::SEPARATOR).description(&harness.ctx()).is_empty());
}

// ============================================================================
// Visibility and menu layout
// ============================================================================

#[test]
fn test_absent_orders_use_registry_defaults() {
    let harness = Harness::new(Config::default());
    let main = visibility::main_menu_order(&harness.config, &harness.registry);
    assert_eq!(main, vec![builtin::DEFAULT_PLUGIN]);

    let sub = visibility::submenu_order(&harness.config, &harness.registry);
    let defaults: Vec<_> = harness
        .registry
        .default_order_plugins(&harness.config)
        .iter()
        .map(|p| p.id())
        .collect();
    assert_eq!(sub, defaults);
}

#[test]
fn test_configured_empty_orders_hide_everything() {
    let harness = Harness::new(Config {
        main_menu_order: Some(String::new()),
        submenu_order: Some(String::new()),
        ..Config::default()
    });
    assert_eq!(harness.config.main_menu_display_order(), Some(vec![]));
    for plugin in harness.registry.plugins() {
        assert!(!visibility::is_shown(&harness.config, &harness.registry, plugin.id()));
    }
    assert!(MenuLayout::compute(&harness.config, &harness.registry).is_empty());
}

#[test]
fn test_layout_with_extra_plugin() {
    let extra = Plugin::builder(PluginId::from_u128(0xF00D), "quoted-path")
        .description("Copy Quoted Path")
        .group(10, 0)
        .transform(|path, _| format!("\"{path}\""))
        .build();
    let registry = BuiltinRegistry::with_plugins([extra]);
    let harness = Harness::with_registry(
        Config {
            main_menu_order: order(&[
                builtin::SEPARATOR,
                PluginId::from_u128(0xF00D),
                builtin::SEPARATOR,
                builtin::SEPARATOR,
                builtin::LONG_PATH,
                PluginId::from_u128(0xBAD),
                PluginId::from_u128(0xF00D),
                builtin::SEPARATOR,
            ]),
            ..Config::default()
        },
        registry,
    );

    let layout = MenuLayout::compute(&harness.config, &harness.registry);
    let names: Vec<_> = layout.main_menu.iter().map(|p| p.name()).collect();
    assert_eq!(names, ["quoted-path", "separator", "long-path"]);
    assert_eq!(
        layout.main_menu[0].transform_path(r"C:\a b.txt", &harness.ctx()),
        "\"C:\\a b.txt\""
    );
    assert_eq!(layout.submenu.last().unwrap().name(), "quoted-path");
}

// ============================================================================
// Transformations through configuration
// ============================================================================

#[test]
fn test_short_unc_path_compacts_network_result() {
    let yaml = r#"
computer_name: PC
short_names:
  '\\files\team\Long Folder Name': '\\files\team\LONGFO~1'
network:
  mapped_drives:
    "Z:": '\\files\team'
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    let harness = Harness::new(config);
    let ctx = harness.ctx();

    let long = harness.plugin(builtin::LONG_UNC_PATH);
    let short = harness.plugin(builtin::SHORT_UNC_PATH);
    let file = r"Z:\Long Folder Name\report.docx";
    assert_eq!(
        long.transform_path(file, &ctx),
        r"\\files\team\Long Folder Name\report.docx"
    );
    assert_eq!(
        short.transform_path(file, &ctx),
        r"\\files\team\LONGFO~1\report.docx"
    );
    assert!(short.is_enabled_for(r"Z:\Long Folder Name", file, &ctx));
    assert!(!short.is_enabled_for(r"C:\", r"C:\local.txt", &ctx));
}

#[test]
fn test_every_transform_is_total() {
    let harness = Harness::new(Config {
        use_hidden_shares: Some(true),
        use_fqdn: Some(true),
        append_separator_for_directories: Some(true),
        ..Config::default()
    });
    let ctx = harness.ctx();
    let inputs = [
        "",
        "x",
        r"C:\",
        r"\\",
        r"\\host",
        r"\\host\share\f",
        "C:/mixed\\seps/f",
        "/usr/bin",
        r"中:\x",
        r"é:\x",
        r"\\hôst\s\f",
        r"C:\日本\ファイル.txt",
    ];

    for plugin in harness.registry.plugins() {
        for input in inputs {
            let _ = plugin.transform_path(input, &ctx);
            let _ = plugin.is_enabled_for("", input, &ctx);
        }
    }
}
