//! The built-in plugin family.
//!
//! Every short-form plugin is its long counterpart's transform followed by
//! a compaction step, and each short/long pair describes itself with the
//! merged wording when only one of the two is visible.

use std::sync::Arc;

use crate::path::{
    ends_with_separator, extract_folder_from_path, file_name, is_directory, is_unc_path,
    separator_for,
};
use crate::plugin::model::{PluginContext, TransformFn};
use crate::plugin::{Plugin, PluginBuilder, PluginId};

/// `{9A1E4B2C-7D3F-4E81-B6A0-5C2D8E9F1A34}`
pub const LONG_NAME: PluginId = PluginId::from_u128(0x9A1E_4B2C_7D3F_4E81_B6A0_5C2D_8E9F_1A34);
/// `{2F6B8C41-AE5D-4B97-8C13-D4E7F0A2B659}`
pub const SHORT_NAME: PluginId = PluginId::from_u128(0x2F6B_8C41_AE5D_4B97_8C13_D4E7_F0A2_B659);
/// `{331A3B60-AF49-44F4-B30D-56ADFF6D25E8}`
pub const LONG_PATH: PluginId = PluginId::from_u128(0x331A_3B60_AF49_44F4_B30D_56AD_FF6D_25E8);
/// `{C7D2E913-4A6B-4F08-9E25-7B1A3C8D6E42}`
pub const SHORT_PATH: PluginId = PluginId::from_u128(0xC7D2_E913_4A6B_4F08_9E25_7B1A_3C8D_6E42);
/// `{5E8A1F37-B2C4-4D69-A7E1-0F3B6D9C2A85}`
pub const LONG_FOLDER: PluginId = PluginId::from_u128(0x5E8A_1F37_B2C4_4D69_A7E1_0F3B_6D9C_2A85);
/// `{E1B94D26-83F7-4A5C-9D08-6C2E7A1B4F93}`
pub const SHORT_FOLDER: PluginId = PluginId::from_u128(0xE1B9_4D26_83F7_4A5C_9D08_6C2E_7A1B_4F93);
/// `{4C7E2A95-1D8B-4F36-B9E4-A3F0C6D17B28}`
pub const LONG_UNC_PATH: PluginId = PluginId::from_u128(0x4C7E_2A95_1D8B_4F36_B9E4_A3F0_C6D1_7B28);
/// `{891F9E3E-0B70-49FD-A86C-53B21C6193C7}`
pub const SHORT_UNC_PATH: PluginId = PluginId::from_u128(0x891F_9E3E_0B70_49FD_A86C_53B2_1C61_93C7);
/// `{B3F61C08-9E2D-4A75-8F4B-1D7E5C3A9062}`
pub const LONG_UNC_FOLDER: PluginId = PluginId::from_u128(0xB3F6_1C08_9E2D_4A75_8F4B_1D7E_5C3A_9062);
/// `{73188FB3-8E14-409C-95EF-BA608FDC1274}`
pub const SHORT_UNC_FOLDER: PluginId = PluginId::from_u128(0x7318_8FB3_8E14_409C_95EF_BA60_8FDC_1274);
/// `{6D2A9E4F-C15B-4873-A0D9-E8B4F27C3156}`
pub const UNIX_PATH: PluginId = PluginId::from_u128(0x6D2A_9E4F_C15B_4873_A0D9_E8B4_F27C_3156);
/// `{8E5C3B71-4F9A-4D2E-B6C8-2A7F1E0D9B43}`
pub const MSYS_PATH: PluginId = PluginId::from_u128(0x8E5C_3B71_4F9A_4D2E_B6C8_2A7F_1E0D_9B43);
/// `{0A9F3D62-E47B-4C18-95A3-F6D1B8E2C470}`
pub const SEPARATOR: PluginId = PluginId::from_u128(0x0A9F_3D62_E47B_4C18_95A3_F6D1_B8E2_C470);

/// The plugin shown in the main menu when no order is configured.
pub const DEFAULT_PLUGIN: PluginId = LONG_PATH;

/// Group of plugins producing local paths.
pub const LOCAL_GROUP: u32 = 1;
/// Group of plugins producing network paths.
pub const NETWORK_GROUP: u32 = 2;
/// Group of plugins producing POSIX-style paths.
pub const POSIX_GROUP: u32 = 3;

fn long_path(path: &str, ctx: &PluginContext<'_>) -> String {
    let mut long = ctx
        .forms
        .long_form(path)
        .unwrap_or_else(|| path.to_string());
    if !long.is_empty()
        && ctx.settings.append_separator_for_directories()
        && !ends_with_separator(&long)
        && is_directory(&long)
    {
        long.push(separator_for(&long));
    }
    long
}

fn long_folder(path: &str, ctx: &PluginContext<'_>) -> String {
    let folder = extract_folder_from_path(path).unwrap_or_else(|| path.to_string());
    long_path(&folder, ctx)
}

fn long_name(path: &str, ctx: &PluginContext<'_>) -> String {
    let long = ctx
        .forms
        .long_form(path)
        .unwrap_or_else(|| path.to_string());
    file_name(&long).to_string()
}

fn short_name(path: &str, ctx: &PluginContext<'_>) -> String {
    let long = ctx
        .forms
        .long_form(path)
        .unwrap_or_else(|| path.to_string());
    let short = ctx.forms.short_form(&long).unwrap_or(long);
    file_name(&short).to_string()
}

/// Follows `base` with the short-form compaction.
fn compacted(base: TransformFn) -> TransformFn {
    Arc::new(move |path, ctx| {
        let long = base(path, ctx);
        if long.is_empty() {
            return long;
        }
        ctx.forms.short_form(&long).unwrap_or(long)
    })
}

/// Follows `base` with the network chain; falls back to `base`'s result.
fn networked(base: TransformFn) -> TransformFn {
    Arc::new(move |path, ctx| {
        let local = base(path, ctx);
        ctx.network
            .network_path(
                &local,
                ctx.settings.use_hidden_shares(),
                ctx.settings.use_fqdn(),
            )
            .unwrap_or(local)
    })
}

fn unix_path(path: &str, ctx: &PluginContext<'_>) -> String {
    long_path(path, ctx).replace('\\', "/")
}

fn msys_path(path: &str, ctx: &PluginContext<'_>) -> String {
    let unix = unix_path(path, ctx);
    let mut chars = unix.chars();
    match (chars.next(), chars.next()) {
        (Some(drive), Some(':')) if drive.is_ascii_alphabetic() => {
            let rest = &unix[2..];
            if rest.is_empty() || rest.starts_with('/') {
                format!("/{}{rest}", drive.to_ascii_lowercase())
            } else {
                unix
            }
        }
        _ => unix,
    }
}

#[allow(clippy::too_many_arguments)]
fn paired(
    id: PluginId,
    name: &str,
    description: &str,
    merged: &str,
    counterpart: PluginId,
    help: &str,
    group: (u32, u32),
    transform: TransformFn,
) -> PluginBuilder {
    Plugin::builder(id, name)
        .description(description)
        .androgynous(counterpart, merged)
        .help(help)
        .group(group.0, group.1)
        .shared_transform(transform)
}

/// Enabled only when `transform` yields a UNC path for the file.
fn yields_unc(
    transform: TransformFn,
) -> impl Fn(&str, &str, &PluginContext<'_>) -> bool + Send + Sync + 'static {
    move |_parent, file, ctx| is_unc_path(&transform(file, ctx))
}

/// All built-in plugins in canonical default order, separators excluded.
#[must_use]
pub fn plugins() -> Vec<Plugin> {
    let long_path_fn: TransformFn = Arc::new(long_path);
    let long_folder_fn: TransformFn = Arc::new(long_folder);
    let long_unc_path_fn = networked(long_path_fn.clone());
    let long_unc_folder_fn = networked(long_folder_fn.clone());
    let short_unc_path_fn = compacted(long_unc_path_fn.clone());
    let short_unc_folder_fn = compacted(long_unc_folder_fn.clone());

    vec![
        paired(
            SHORT_NAME,
            "short-name",
            "Copy Short Name",
            "Copy Name",
            LONG_NAME,
            "Copies the short name of the selected file or folder.",
            (LOCAL_GROUP, 0),
            Arc::new(short_name),
        )
        .build(),
        paired(
            LONG_NAME,
            "long-name",
            "Copy Long Name",
            "Copy Name",
            SHORT_NAME,
            "Copies the long name of the selected file or folder.",
            (LOCAL_GROUP, 1),
            Arc::new(long_name),
        )
        .build(),
        paired(
            SHORT_PATH,
            "short-path",
            "Copy Short Path",
            "Copy Path",
            LONG_PATH,
            "Copies the short path of the selected file or folder.",
            (LOCAL_GROUP, 2),
            compacted(long_path_fn.clone()),
        )
        .build(),
        paired(
            LONG_PATH,
            "long-path",
            "Copy Long Path",
            "Copy Path",
            SHORT_PATH,
            "Copies the full path of the selected file or folder.",
            (LOCAL_GROUP, 3),
            long_path_fn,
        )
        .build(),
        paired(
            SHORT_FOLDER,
            "short-folder",
            "Copy Short Parent Folder Path",
            "Copy Parent Folder Path",
            LONG_FOLDER,
            "Copies the short path of the parent folder.",
            (LOCAL_GROUP, 4),
            compacted(long_folder_fn.clone()),
        )
        .build(),
        paired(
            LONG_FOLDER,
            "long-folder",
            "Copy Long Parent Folder Path",
            "Copy Parent Folder Path",
            SHORT_FOLDER,
            "Copies the full path of the parent folder.",
            (LOCAL_GROUP, 5),
            long_folder_fn,
        )
        .build(),
        paired(
            SHORT_UNC_PATH,
            "short-unc-path",
            "Copy Short UNC Path",
            "Copy UNC Path",
            LONG_UNC_PATH,
            "Copies the short network path of the selected file or folder.",
            (NETWORK_GROUP, 0),
            short_unc_path_fn.clone(),
        )
        .enabled_when(yields_unc(short_unc_path_fn))
        .build(),
        paired(
            LONG_UNC_PATH,
            "long-unc-path",
            "Copy Long UNC Path",
            "Copy UNC Path",
            SHORT_UNC_PATH,
            "Copies the network path of the selected file or folder.",
            (NETWORK_GROUP, 1),
            long_unc_path_fn.clone(),
        )
        .enabled_when(yields_unc(long_unc_path_fn))
        .build(),
        paired(
            SHORT_UNC_FOLDER,
            "short-unc-folder",
            "Copy Short UNC Parent Folder Path",
            "Copy UNC Parent Folder Path",
            LONG_UNC_FOLDER,
            "Copies the short network path of the parent folder.",
            (NETWORK_GROUP, 2),
            short_unc_folder_fn.clone(),
        )
        .enabled_when(yields_unc(short_unc_folder_fn))
        .build(),
        paired(
            LONG_UNC_FOLDER,
            "long-unc-folder",
            "Copy Long UNC Parent Folder Path",
            "Copy UNC Parent Folder Path",
            SHORT_UNC_FOLDER,
            "Copies the network path of the parent folder.",
            (NETWORK_GROUP, 3),
            long_unc_folder_fn.clone(),
        )
        .enabled_when(yields_unc(long_unc_folder_fn))
        .build(),
        Plugin::builder(UNIX_PATH, "unix-path")
            .description("Copy Unix Path")
            .help("Copies the path with forward slashes.")
            .group(POSIX_GROUP, 0)
            .transform(unix_path)
            .build(),
        Plugin::builder(MSYS_PATH, "msys-path")
            .description("Copy MSYS Path")
            .help("Copies the path in MSYS form, e.g. /c/Windows/notepad.exe.")
            .group(POSIX_GROUP, 1)
            .transform(msys_path)
            .build(),
    ]
}

/// The shared separator placeholder.
#[must_use]
pub fn separator() -> Plugin {
    Plugin::separator(SEPARATOR)
}
