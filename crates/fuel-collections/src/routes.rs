//! Route Construction
//!
//! Pure functions deriving canonical routes from the client configuration.
//! No network or state access: the same inputs always produce the same URL,
//! regardless of call order. Path segments and query values containing
//! reserved characters are percent-encoded.

use url::Url;
use url::form_urlencoded;

use fuel_domain::constants::SEARCH_FILTER_PREFIX;
use fuel_domain::value_objects::{FuelResource, ResourceKind};
use fuel_domain::{Error, Result};

use crate::config::ClientConfig;

/// `{base}/collections`
pub fn collections(config: &ClientConfig) -> Result<Url> {
    join(config, &["collections"])
}

/// `{base}/{owner}/collections`
pub fn owner_collections(config: &ClientConfig, owner: &str) -> Result<Url> {
    join(config, &[owner, "collections"])
}

/// `{base}/{owner}/collections/{name}`
pub fn collection(config: &ClientConfig, owner: &str, name: &str) -> Result<Url> {
    join(config, &[owner, "collections", name])
}

/// `{base}/{owner}/collections/{name}/models`
pub fn collection_models(config: &ClientConfig, owner: &str, name: &str) -> Result<Url> {
    collection_assets(config, owner, name, ResourceKind::Models)
}

/// `{base}/{owner}/collections/{name}/worlds`
pub fn collection_worlds(config: &ClientConfig, owner: &str, name: &str) -> Result<Url> {
    collection_assets(config, owner, name, ResourceKind::Worlds)
}

/// `{base}/{owner}/collections/{name}/{kind}` - asset-membership route.
pub fn collection_assets(
    config: &ClientConfig,
    owner: &str,
    name: &str,
    kind: ResourceKind,
) -> Result<Url> {
    join(config, &[owner, "collections", name, kind.as_str()])
}

/// Asset-removal route: the membership route with the asset's identity
/// passed as query parameters (`?n={name}&o={owner}`), not in the path.
pub fn collection_asset_removal(
    config: &ClientConfig,
    owner: &str,
    name: &str,
    resource: &FuelResource,
) -> Result<Url> {
    let mut url = collection_assets(config, owner, name, resource.kind)?;
    url.query_pairs_mut()
        .append_pair("n", &resource.name)
        .append_pair("o", &resource.owner);
    Ok(url)
}

/// `{base}/{owner}/{kind}/{name}/collections` - collections containing the
/// given asset; keyed by resource identity, not collection identity.
pub fn resource_collections(config: &ClientConfig, resource: &FuelResource) -> Result<Url> {
    join(
        config,
        &[
            &resource.owner,
            resource.kind.as_str(),
            &resource.name,
            "collections",
        ],
    )
}

/// Append the full-text search filter (`q=:noft:{term}`).
///
/// The filter prefix is part of the route grammar and stays literal; only
/// the caller's term is encoded.
pub fn apply_search(url: &mut Url, term: &str) {
    let term: String = form_urlencoded::byte_serialize(term.as_bytes()).collect();
    append_raw_query(url, &format!("q={SEARCH_FILTER_PREFIX}{term}"));
}

/// Append the `extend=true` flag selecting extensible collections.
pub fn apply_extend(url: &mut Url) {
    append_raw_query(url, "extend=true");
}

fn join(config: &ClientConfig, segments: &[&str]) -> Result<Url> {
    let mut url = config.base_url().clone();
    {
        let mut parts = url
            .path_segments_mut()
            .map_err(|()| Error::config("base URL cannot carry path segments"))?;
        parts.pop_if_empty();
        for segment in segments {
            parts.push(segment);
        }
    }
    Ok(url)
}

fn append_raw_query(url: &mut Url, pair: &str) {
    let joined = match url.query() {
        Some(existing) if !existing.is_empty() => format!("{existing}&{pair}"),
        _ => pair.to_string(),
    };
    url.set_query(Some(&joined));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ClientConfig {
        ClientConfig::new("https://fuel.example.org", "1.0").expect("valid config")
    }

    #[test]
    fn routes_follow_the_canonical_layout() -> Result<()> {
        let config = config();
        let base = "https://fuel.example.org/1.0";

        assert_eq!(collections(&config)?.as_str(), format!("{base}/collections"));
        assert_eq!(
            owner_collections(&config, "alice")?.as_str(),
            format!("{base}/alice/collections")
        );
        assert_eq!(
            collection(&config, "alice", "box")?.as_str(),
            format!("{base}/alice/collections/box")
        );
        assert_eq!(
            collection_models(&config, "alice", "box")?.as_str(),
            format!("{base}/alice/collections/box/models")
        );
        assert_eq!(
            collection_worlds(&config, "alice", "box")?.as_str(),
            format!("{base}/alice/collections/box/worlds")
        );
        Ok(())
    }

    #[test]
    fn builders_are_pure() -> Result<()> {
        let config = config();
        let first = collection(&config, "alice", "box")?;
        let _ = owner_collections(&config, "bob")?;
        let second = collection(&config, "alice", "box")?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn reserved_characters_in_segments_are_encoded() -> Result<()> {
        let config = config();
        let url = collection(&config, "team rocket", "box/crate")?;
        assert_eq!(
            url.as_str(),
            "https://fuel.example.org/1.0/team%20rocket/collections/box%2Fcrate"
        );
        Ok(())
    }

    #[test]
    fn search_filter_keeps_the_prefix_literal() -> Result<()> {
        let config = config();
        let mut url = collections(&config)?;
        apply_search(&mut url, "robot");
        assert_eq!(
            url.as_str(),
            "https://fuel.example.org/1.0/collections?q=:noft:robot"
        );
        Ok(())
    }

    #[test]
    fn search_terms_are_encoded() -> Result<()> {
        let config = config();
        let mut url = collections(&config)?;
        apply_search(&mut url, "robot&arm");
        assert_eq!(
            url.as_str(),
            "https://fuel.example.org/1.0/collections?q=:noft:robot%26arm"
        );
        Ok(())
    }

    #[test]
    fn extend_flag_combines_with_search() -> Result<()> {
        let config = config();
        let mut url = collections(&config)?;
        apply_extend(&mut url);
        apply_search(&mut url, "robot");
        assert_eq!(
            url.as_str(),
            "https://fuel.example.org/1.0/collections?extend=true&q=:noft:robot"
        );
        Ok(())
    }

    #[test]
    fn asset_removal_passes_identity_in_the_query() -> Result<()> {
        let config = config();
        let resource = FuelResource::model("bob the builder", "Crane");
        let url = collection_asset_removal(&config, "alice", "box", &resource)?;
        assert_eq!(
            url.as_str(),
            "https://fuel.example.org/1.0/alice/collections/box/models?n=Crane&o=bob+the+builder"
        );
        Ok(())
    }

    #[test]
    fn resource_collections_is_keyed_by_asset_identity() -> Result<()> {
        let config = config();
        let resource = FuelResource::world("alice", "Pit");
        let url = resource_collections(&config, &resource)?;
        assert_eq!(
            url.as_str(),
            "https://fuel.example.org/1.0/alice/worlds/Pit/collections"
        );
        Ok(())
    }
}
