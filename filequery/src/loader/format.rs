// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Supported data file formats

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of file formats the loader dispatches over.
///
/// Selection is by exact, case-sensitive extension match: `data.CSV` or a
/// typo'd `data.paraquet` are simply outside the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    Csv,
    Json,
    Xlsx,
    Parquet,
}

impl FileFormat {
    /// Dispatch on a file name's extension.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, extension) = file_name.rsplit_once('.')?;
        match extension {
            "csv" => Some(FileFormat::Csv),
            "json" => Some(FileFormat::Json),
            "xlsx" => Some(FileFormat::Xlsx),
            "parquet" => Some(FileFormat::Parquet),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Csv => "csv",
            FileFormat::Json => "json",
            FileFormat::Xlsx => "xlsx",
            FileFormat::Parquet => "parquet",
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_extensions() {
        assert_eq!(FileFormat::from_file_name("a.csv"), Some(FileFormat::Csv));
        assert_eq!(FileFormat::from_file_name("a.json"), Some(FileFormat::Json));
        assert_eq!(FileFormat::from_file_name("a.xlsx"), Some(FileFormat::Xlsx));
        assert_eq!(
            FileFormat::from_file_name("a.parquet"),
            Some(FileFormat::Parquet)
        );
        // Only the final extension counts.
        assert_eq!(
            FileFormat::from_file_name("backup.tar.csv"),
            Some(FileFormat::Csv)
        );
    }

    #[test]
    fn test_unsupported_extensions() {
        assert_eq!(FileFormat::from_file_name("a.txt"), None);
        assert_eq!(FileFormat::from_file_name("a.paraquet"), None);
        assert_eq!(FileFormat::from_file_name("noextension"), None);
        assert_eq!(FileFormat::from_file_name("trailingdot."), None);
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        assert_eq!(FileFormat::from_file_name("a.CSV"), None);
        assert_eq!(FileFormat::from_file_name("a.Csv"), None);
        assert_eq!(FileFormat::from_file_name("a.PARQUET"), None);
    }
}
