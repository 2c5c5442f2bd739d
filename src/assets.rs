//! Resolution of certificate references to servable image URLs.
//!
//! Content records name images by filename, but the data files and the
//! shipped assets disagree on extensions often enough that matching is done
//! on the file stem alone.  Only the name index is embedded; the files
//! themselves are served from the site root.

use std::sync::LazyLock;

use dashmap::DashMap;
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "public/images/certificates"]
#[metadata_only = true]
pub struct CertificateImages;

const CERTIFICATE_IMAGE_ROOT: &str = "/images/certificates";

/// Outcome of resolving one certificate reference.  A miss is a normal,
/// renderable state, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetBinding {
    Resolved(String),
    Unresolved,
}

impl AssetBinding {
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Resolved(url) => Some(url),
            Self::Unresolved => None,
        }
    }
}

static RESOLVE_CACHE: LazyLock<DashMap<String, Option<String>>> = LazyLock::new(DashMap::new);

fn file_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

fn stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) if i > 0 => &name[..i],
        _ => name,
    }
}

/// Maps one reference from the content data to a servable URL, matching
/// stored images by stem so `cert.png` in the data finds a shipped
/// `cert.jpg`.  Misses are cached and logged once.
pub fn resolve(reference: &str) -> AssetBinding {
    let want = stem(file_name(reference));
    if let Some(cached) = RESOLVE_CACHE.get(want) {
        return match cached.value() {
            Some(url) => AssetBinding::Resolved(url.clone()),
            None => AssetBinding::Unresolved,
        };
    }

    let found = CertificateImages::iter()
        .find(|name| stem(file_name(name.as_ref())) == want)
        .map(|name| format!("{CERTIFICATE_IMAGE_ROOT}/{name}"));
    if found.is_none() {
        log::warn!("no certificate image matches {reference}");
    }
    RESOLVE_CACHE.insert(want.to_owned(), found.clone());

    match found {
        Some(url) => AssetBinding::Resolved(url),
        None => AssetBinding::Unresolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_strips_final_extension_only() {
        assert_eq!(stem("cert.png"), "cert");
        assert_eq!(stem("cert.badge.png"), "cert.badge");
        assert_eq!(stem("no-extension"), "no-extension");
        assert_eq!(stem(".hidden"), ".hidden");
    }

    #[test]
    fn test_resolve_matches_across_extensions() {
        // data says .jpg, the shipped file is .svg
        let binding = resolve("nptel-java.jpg");
        assert_eq!(
            binding.url(),
            Some("/images/certificates/nptel-java.svg")
        );
    }

    #[test]
    fn test_resolve_ignores_path_prefix() {
        let binding = resolve("src/images/courses/nptel-java.png");
        assert_eq!(
            binding.url(),
            Some("/images/certificates/nptel-java.svg")
        );
    }

    #[test]
    fn test_unknown_reference_is_unresolved() {
        let binding = resolve("definitely-not-shipped.jpg");
        assert_eq!(binding, AssetBinding::Unresolved);
        assert_eq!(binding.url(), None);
    }

    #[test]
    fn test_every_shipped_reference_resolves() {
        use crate::content::{self, CertificateSource};

        let refs = content::courses()
            .iter()
            .flat_map(|c| c.certificate_refs())
            .chain(content::events().iter().flat_map(|e| e.certificate_refs()))
            .chain(
                content::experience()
                    .iter()
                    .flat_map(|x| x.certificate_refs()),
            );
        for reference in refs {
            assert!(
                resolve(&reference).url().is_some(),
                "unmatched reference {reference}"
            );
        }
    }
}
