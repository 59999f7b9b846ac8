//! Gist models.

use serde::{Serialize, Serializer};
use serde_json::Value;

use ghr_core::error::GhrResult;

use super::user::SimpleUser;
use crate::json::{self, FromJson};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GistFile {
    pub filename: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub language: Option<String>,
    pub raw_url: String,
    pub size: i64,
    /// Only present on single-gist responses.
    pub content: Option<String>,
    pub truncated: bool,
}

impl FromJson for GistFile {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "GistFile")?;
        Ok(Self {
            filename: json::str_field(value, "filename"),
            file_type: json::str_field(value, "type"),
            language: json::opt_str(value, "language"),
            raw_url: json::str_field(value, "raw_url"),
            size: json::i64_field(value, "size"),
            content: json::opt_str(value, "content"),
            truncated: json::bool_field(value, "truncated"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Gist {
    pub id: String,
    pub node_id: String,
    pub description: Option<String>,
    pub public: bool,
    pub owner: Option<SimpleUser>,
    /// Files in upstream key order; written back keyed by file name.
    #[serde(serialize_with = "serialize_files")]
    pub files: Vec<GistFile>,
    pub comments: i64,
    pub html_url: String,
    pub git_pull_url: String,
    pub truncated: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl FromJson for Gist {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "Gist")?;

        // `files` is keyed by file name; the key wins when the entry omits it
        let mut files = Vec::new();
        if let Some(map) = json::object_field(value, "files").as_object() {
            for (name, entry) in map {
                let mut file = GistFile::from_json(entry)?;
                if file.filename.is_empty() {
                    file.filename = name.clone();
                }
                files.push(file);
            }
        }

        Ok(Self {
            id: json::required_str(value, "Gist", "id")?,
            node_id: json::str_field(value, "node_id"),
            description: json::opt_str(value, "description"),
            public: json::bool_field(value, "public"),
            owner: json::opt_object(value, "owner")?,
            files,
            comments: json::i64_field(value, "comments"),
            html_url: json::str_field(value, "html_url"),
            git_pull_url: json::str_field(value, "git_pull_url"),
            truncated: json::bool_field(value, "truncated"),
            created_at: json::str_field(value, "created_at"),
            updated_at: json::str_field(value, "updated_at"),
        })
    }
}

fn serialize_files<S: Serializer>(files: &[GistFile], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(files.iter().map(|f| (f.filename.as_str(), f)))
}

impl Gist {
    pub fn created_timestamp(&self) -> Option<i64> {
        json::timestamp_of(&self.created_at)
    }

    pub fn updated_timestamp(&self) -> Option<i64> {
        json::timestamp_of(&self.updated_at)
    }

    pub fn file(&self, filename: &str) -> Option<&GistFile> {
        self.files.iter().find(|f| f.filename == filename)
    }

    pub fn total_size(&self) -> i64 {
        self.files.iter().map(|f| f.size).sum()
    }
}
