//! Images as reported by `GET /images/json`.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// One top-level image known to the daemon.
///
/// Field names follow the Docker Engine API. Lists and maps may come back
/// as `null`, and newer daemons leave out `VirtualSize` altogether, so all
/// of those default to empty. Empty fields are skipped when we serialize,
/// which means encoding and decoding again gives back the same `Image`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct Image {
    pub Id: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub RepoTags: Vec<String>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub Created: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub Size: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub VirtualSize: i64,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub ParentId: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub RepoDigests: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub Labels: BTreeMap<String, String>,
}

fn is_zero(n: &i64) -> bool {
    *n == 0
}

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_lists_and_missing_sizes_default() {
        let json = r#"{
            "Id": "sha256:abc",
            "ParentId": "",
            "RepoTags": null,
            "RepoDigests": null,
            "Created": 1000,
            "Size": 10,
            "SharedSize": -1,
            "Labels": null,
            "Containers": -1
        }"#;
        let image: Image = serde_json::from_str(json).unwrap();
        assert_eq!(image.Id, "sha256:abc");
        assert!(image.RepoTags.is_empty());
        assert!(image.RepoDigests.is_empty());
        assert!(image.Labels.is_empty());
        assert_eq!(image.VirtualSize, 0);
        assert_eq!(image.Created, 1000);
    }

    #[test]
    fn empty_fields_are_not_serialized() {
        let image = Image {
            Id: "sha256:abc".to_owned(),
            Created: 1000,
            ..Image::default()
        };
        let json = serde_json::to_string(&image).unwrap();
        assert_eq!(json, r#"{"Id":"sha256:abc","Created":1000}"#);
    }

    #[test]
    fn json_and_yaml_round_trip() {
        let mut labels = BTreeMap::new();
        labels.insert("maintainer".to_owned(), "ops@example.com".to_owned());
        let images = vec![
            Image {
                Id: "sha256:abc".to_owned(),
                RepoTags: vec!["x:latest".to_owned(), "x:1.0".to_owned()],
                Created: 1000,
                Size: 10,
                VirtualSize: 20,
                ParentId: "sha256:def".to_owned(),
                RepoDigests: vec!["x@sha256:123".to_owned()],
                Labels: labels,
            },
            Image {
                Id: "sha256:fed".to_owned(),
                ..Image::default()
            },
        ];

        let json = serde_json::to_string(&images).unwrap();
        assert_eq!(serde_json::from_str::<Vec<Image>>(&json).unwrap(), images);

        let yaml = serde_yaml::to_string(&images).unwrap();
        assert_eq!(serde_yaml::from_str::<Vec<Image>>(&yaml).unwrap(), images);
    }
}
