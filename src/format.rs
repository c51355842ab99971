//! Output formats and the encoders behind them.

use serde::Serialize;

use crate::age::AgeMap;
use crate::errors::*;
use crate::image::Image;

/// Width of a bare sha256 image ID, used to line up the age table.
const ID_WIDTH: usize = 64;

/// How we print our results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Pick an output format from the `--json`, `--yaml` and `--text` flags.
///
/// Setting none of them means plain text. Setting more than one is an
/// error.
pub fn select_format(json: bool, yaml: bool, text: bool) -> Result<OutputFormat> {
    match (json, yaml, text) {
        (false, false, _) => Ok(OutputFormat::Text),
        (true, false, false) => Ok(OutputFormat::Json),
        (false, true, false) => Ok(OutputFormat::Yaml),
        _ => Err(ErrorKind::ConflictingFormats.into()),
    }
}

/// Values that know how to print themselves for humans.
pub trait PlainText {
    fn to_plain_text(&self) -> Result<String>;
}

impl PlainText for [Image] {
    fn to_plain_text(&self) -> Result<String> {
        if self.is_empty() {
            return Err(ErrorKind::EmptyImageList.into());
        }
        let mut out = String::new();
        for image in self {
            out.push_str(&format!("ID:  {}\n", image.Id));
            out.push_str(&format!("RepoTags:  [{}]\n", image.RepoTags.join(" ")));
            out.push_str(&format!("Created:  {}\n", image.Created));
            out.push_str(&format!("Size:  {}\n", image.Size));
            out.push_str(&format!("VirtualSize:  {}\n", image.VirtualSize));
            out.push_str(&format!("ParentID:  {}\n", image.ParentId));
            out.push_str(&format!("RepoDigests:  [{}]\n", image.RepoDigests.join(" ")));
            let labels: Vec<String> = image
                .Labels
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            out.push_str(&format!("Labels:  [{}]\n", labels.join(" ")));
            out.push('\n');
        }
        Ok(out)
    }
}

impl PlainText for AgeMap {
    fn to_plain_text(&self) -> Result<String> {
        let mut out = format!("{:<width$}  {}\n", "IMAGE ID", "AGE", width = ID_WIDTH);
        for (id, created) in self {
            out.push_str(&format!("{:<width$}  {}\n", id, created, width = ID_WIDTH));
        }
        Ok(out)
    }
}

/// Serialize `value` as compact JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).chain_err(|| ErrorKind::Encoding("JSON"))
}

/// Serialize `value` as YAML.
pub fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_yaml::to_string(value).chain_err(|| ErrorKind::Encoding("YAML"))
}

/// Encode `value` in the requested format.
pub fn encode<T>(value: &T, format: OutputFormat) -> Result<String>
where
    T: PlainText + Serialize + ?Sized,
{
    match format {
        OutputFormat::Text => value.to_plain_text(),
        OutputFormat::Json => to_json(value),
        OutputFormat::Yaml => to_yaml(value),
    }
}
