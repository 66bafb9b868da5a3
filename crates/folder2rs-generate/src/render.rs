//! Rendering of the asset map into source code.
//!
//! The templates live in `templates/` and are compiled in by askama. Each one
//! receives the same context: the package name, the assets in key order and
//! whether to emit the HTTP handler.

use crate::assets::AssetMap;
use crate::error::GenerateError;
use crate::language::TargetLanguage;
use askama::Template;

/// Version stamped into generated files. Bump it when template output changes.
pub const TEMPLATE_VERSION: u32 = 1;

/// One entry of the asset table as the templates see it.
struct AssetEntry<'a> {
    key_literal: String,
    fragment: &'a str,
}

/// Template for a Rust module
#[derive(Template)]
#[template(path = "rust.rs.jinja", escape = "none")]
struct RustModuleTemplate<'a> {
    version: u32,
    package: &'a str,
    assets: Vec<AssetEntry<'a>>,
    handler: bool,
}

/// Template for a Go package
#[derive(Template)]
#[template(path = "go.go.jinja", escape = "none")]
struct GoPackageTemplate<'a> {
    version: u32,
    package: &'a str,
    assets: Vec<AssetEntry<'a>>,
    handler: bool,
}

/// Renders the generated source file for `assets`.
///
/// Fragments are inserted verbatim, so they must have been encoded with
/// [`TargetLanguage::fragment_indent`] of the same `language`.
pub fn render(
    language: TargetLanguage,
    package: &str,
    assets: &AssetMap,
    handler: bool,
) -> Result<String, GenerateError> {
    let entries: Vec<AssetEntry<'_>> = assets
        .iter()
        .map(|(key, asset)| AssetEntry {
            key_literal: language.string_literal(key),
            fragment: asset.fragment(),
        })
        .collect();

    let mut rendered = match language {
        TargetLanguage::Rust => RustModuleTemplate {
            version: TEMPLATE_VERSION,
            package,
            assets: entries,
            handler,
        }
        .render()?,
        TargetLanguage::Go => GoPackageTemplate {
            version: TEMPLATE_VERSION,
            package,
            assets: entries,
            handler,
        }
        .render()?,
    };

    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}
