//! Shared utilities for arbor procedural macros.

use syn::{Attribute, Ident, LitStr, Path, ext::IdentExt};

/// Options from `#[arbor(...)]` on the deriving type.
pub(crate) struct ContainerAttrs {
    /// Path of the crate that provides the conversion API.
    pub krate: Path,
}

/// Options from `#[arbor(...)]` on a field or an enum variant.
#[derive(Default)]
pub(crate) struct MemberAttrs {
    pub rename: Option<String>,
    pub skip: bool,
}

impl MemberAttrs {
    /// The object key for a member named `ident`.
    pub fn key(&self, ident: &Ident) -> String {
        self.rename
            .clone()
            .unwrap_or_else(|| ident.unraw().to_string())
    }
}

/// Parse `#[arbor(crate = "path")]` from the item's attributes.
///
/// The crate path defaults to `::arbor`.
pub(crate) fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut krate: Option<Path> = None;

    for attr in arbor_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let lit: LitStr = meta.value()?.parse()?;
                if krate.replace(lit.parse()?).is_some() {
                    return Err(meta.error("[arbor] duplicate `crate` option"));
                }
                Ok(())
            } else if meta.path.is_ident("rename") || meta.path.is_ident("skip") {
                Err(meta.error(
                    "[arbor] `rename` and `skip` apply to fields and variants, not to the type",
                ))
            } else {
                Err(meta.error("[arbor] unknown option, expected `crate = \"path\"`"))
            }
        })?;
    }

    Ok(ContainerAttrs {
        krate: krate.unwrap_or_else(|| syn::parse_quote!(::arbor)),
    })
}

/// Parse `#[arbor(rename = "key")]` and `#[arbor(skip)]`.
///
/// `allow_skip` is false for enum variants: a variant cannot be left out of a
/// match.
pub(crate) fn parse_member_attrs(
    attrs: &[Attribute],
    allow_skip: bool,
) -> syn::Result<MemberAttrs> {
    let mut parsed = MemberAttrs::default();

    for attr in arbor_attrs(attrs) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                if parsed.rename.replace(lit.value()).is_some() {
                    return Err(meta.error("[arbor] duplicate `rename` option"));
                }
                Ok(())
            } else if meta.path.is_ident("skip") {
                if !allow_skip {
                    return Err(meta.error("[arbor] enum variants cannot be skipped"));
                }
                parsed.skip = true;
                Ok(())
            } else {
                Err(meta.error(
                    "[arbor] unknown option, expected `rename = \"key\"` or `skip`",
                ))
            }
        })?;
    }

    Ok(parsed)
}

fn arbor_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|a| a.path().is_ident("arbor"))
}
