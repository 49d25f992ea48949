//! File descriptors.
//!
//! Input is a JSON object `{ "name": ..., "size": ..., "type": ... }`
//! describing an upload; the bytes themselves are never inspected.
//!
//! Rule order: MIME type → extension allowlist → extension blocklist →
//! `minSize` → `maxSize` → name length.

use serde::{Deserialize, Serialize};

use crate::combinators::{Rules, rule_fn};
use crate::foundation::{MessageKey, Validate, ValidationError};
use crate::pipeline::{Common, Field, FieldKind, Prepared, impl_common_options};

/// Metadata of an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type", default)]
    pub mime_type: String,
}

impl FileInfo {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    /// Lower-cased extension without the dot; empty when the name has none.
    #[must_use]
    pub fn extension(&self) -> String {
        self.name
            .rsplit_once('.')
            .filter(|(stem, _)| !stem.is_empty())
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FileOptions {
    #[serde(flatten)]
    pub common: Common<FileInfo>,
    /// MIME types; `image/*` matches every subtype.
    pub accept: Vec<String>,
    pub extensions: Vec<String>,
    pub blocked_extensions: Vec<String>,
    pub min_size: Option<u64>,
    pub max_size: Option<u64>,
    pub max_name_length: Option<usize>,
}

impl FileOptions {
    #[must_use = "builder methods must be chained or built"]
    pub fn accept(mut self, types: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.accept = types.into_iter().map(Into::into).collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn extensions(mut self, extensions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn blocked_extensions(mut self, extensions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.blocked_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn min_size(mut self, bytes: u64) -> Self {
        self.min_size = Some(bytes);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max_size(mut self, bytes: u64) -> Self {
        self.max_size = Some(bytes);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max_name_length(mut self, chars: usize) -> Self {
        self.max_name_length = Some(chars);
        self
    }
}

impl_common_options!(FileOptions => FileInfo);

fn mime_matches(pattern: &str, mime: &str) -> bool {
    match pattern.strip_suffix("/*") {
        Some(family) => mime
            .split_once('/')
            .is_some_and(|(top, _)| top.eq_ignore_ascii_case(family)),
        None => pattern.eq_ignore_ascii_case(mime),
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_ascii_lowercase()
}

#[derive(Debug)]
pub struct FileKind {
    options: FileOptions,
    rules: Rules<FileInfo>,
}

impl FieldKind for FileKind {
    type Value = FileInfo;
    type Output = FileInfo;
    type Options = FileOptions;

    const KIND: &'static str = "file";
    const TEXTUAL: bool = false;

    fn options(&self) -> &FileOptions {
        &self.options
    }

    fn common(&self) -> &Common<FileInfo> {
        &self.options.common
    }

    fn coerce(&self, input: Prepared) -> Result<FileInfo, ValidationError> {
        match input {
            Prepared::Native(value @ serde_json::Value::Object(_)) => {
                serde_json::from_value(value).map_err(|_| ValidationError::invalid())
            }
            _ => Err(ValidationError::invalid()),
        }
    }

    fn check(&self, value: &FileInfo) -> Result<(), ValidationError> {
        self.rules.validate(value)
    }

    fn finish(&self, value: FileInfo) -> FileInfo {
        value
    }
}

/// Builds a file field.
pub fn file(required: bool, mut options: FileOptions) -> Field<FileKind> {
    options.common.required = required;

    let accept = options.accept.clone();
    let allowed: Vec<String> = options.extensions.iter().map(|e| normalize_extension(e)).collect();
    let blocked: Vec<String> = options.blocked_extensions.iter().map(|e| normalize_extension(e)).collect();

    let rules = Rules::new()
        .push_if(!accept.is_empty(), || {
            rule_fn(move |f: &FileInfo| {
                if accept.iter().any(|pattern| mime_matches(pattern, &f.mime_type)) {
                    Ok(())
                } else {
                    Err(ValidationError::new(MessageKey::FileType).with_param("accept", &accept[..]))
                }
            })
        })
        .push_if(!allowed.is_empty(), || {
            rule_fn(move |f: &FileInfo| {
                let ext = f.extension();
                if allowed.contains(&ext) {
                    Ok(())
                } else {
                    Err(ValidationError::new(MessageKey::FileExtension).with_param("extension", ext))
                }
            })
        })
        .push_if(!blocked.is_empty(), || {
            rule_fn(move |f: &FileInfo| {
                let ext = f.extension();
                if blocked.contains(&ext) {
                    Err(ValidationError::new(MessageKey::FileExtension).with_param("extension", ext))
                } else {
                    Ok(())
                }
            })
        })
        .push_opt(options.min_size.map(|min| {
            rule_fn(move |f: &FileInfo| {
                if f.size >= min {
                    Ok(())
                } else {
                    Err(ValidationError::new(MessageKey::MinSize).with_param("minSize", min))
                }
            })
        }))
        .push_opt(options.max_size.map(|max| {
            rule_fn(move |f: &FileInfo| {
                if f.size <= max {
                    Ok(())
                } else {
                    Err(ValidationError::new(MessageKey::MaxSize).with_param("maxSize", max))
                }
            })
        }))
        .push_opt(options.max_name_length.map(|max| {
            rule_fn(move |f: &FileInfo| {
                let len = f.name.chars().count();
                if len <= max {
                    Ok(())
                } else {
                    Err(ValidationError::max_length(max, len))
                }
            })
        }));

    Field::new(FileKind { options, rules })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;

    fn upload(name: &str, size: u64, mime: &str) -> Value {
        json!({ "name": name, "size": size, "type": mime })
    }

    fn code(field: &Field<FileKind>, input: Value) -> Option<MessageKey> {
        field.parse(input).err().and_then(|e| e.code())
    }

    #[test]
    fn descriptor_round_trips() {
        let field = file(true, FileOptions::default());
        assert_eq!(
            field.parse(upload("a.png", 10, "image/png")).unwrap(),
            Some(FileInfo::new("a.png", 10, "image/png"))
        );
        assert_eq!(code(&field, json!("a.png")), Some(MessageKey::Invalid));
        assert_eq!(code(&field, json!({ "name": "a.png" })), Some(MessageKey::Invalid));
    }

    #[rstest]
    #[case("image/*", "image/png", true)]
    #[case("image/*", "IMAGE/JPEG", true)]
    #[case("image/*", "application/pdf", false)]
    #[case("application/pdf", "application/pdf", true)]
    #[case("application/pdf", "application/json", false)]
    fn mime_patterns(#[case] pattern: &str, #[case] mime: &str, #[case] expected: bool) {
        assert_eq!(mime_matches(pattern, mime), expected);
    }

    #[rstest]
    #[case("photo.JPG", "jpg")]
    #[case("archive.tar.gz", "gz")]
    #[case(".bashrc", "")]
    #[case("README", "")]
    fn extensions(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(FileInfo::new(name, 0, "").extension(), expected);
    }

    #[test]
    fn rule_order() {
        let field = file(
            true,
            FileOptions::default()
                .accept(["image/*"])
                .extensions([".png", "jpg"])
                .blocked_extensions(["jpg"])
                .min_size(10)
                .max_size(100)
                .max_name_length(8),
        );
        assert_eq!(code(&field, upload("a.pdf", 50, "application/pdf")), Some(MessageKey::FileType));
        assert_eq!(code(&field, upload("a.gif", 50, "image/gif")), Some(MessageKey::FileExtension));
        assert_eq!(code(&field, upload("a.jpg", 50, "image/jpeg")), Some(MessageKey::FileExtension));
        assert_eq!(code(&field, upload("a.png", 5, "image/png")), Some(MessageKey::MinSize));
        assert_eq!(code(&field, upload("a.png", 500, "image/png")), Some(MessageKey::MaxSize));
        assert_eq!(code(&field, upload("abcdefgh.png", 50, "image/png")), Some(MessageKey::MaxLength));
        assert_eq!(code(&field, upload("ab.png", 50, "image/png")), None);
    }
}
