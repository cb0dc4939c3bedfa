//! CSV archive client
//!
//! Read-only client for the fixed-host archive service that stores
//! historical summary CSV exports. Files are listed newest first:
//! by date descending, then by the trailing `_N.csv` sequence number
//! within the same date.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::{ClientConfig, ClientError, ClientResult};

static SEQUENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(\d+)\.csv$").expect("valid regex literal"));

/// One archived CSV file entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CsvFile {
    #[serde(rename = "fileName")]
    pub file_name: String,
    /// Calendar date label, ISO `YYYY-MM-DD`
    pub date: String,
}

#[derive(Debug, Deserialize)]
struct CsvFileList {
    files: Vec<CsvFile>,
}

/// HTTP client for the archive service
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    client: reqwest::Client,
    base_url: String,
}

impl ArchiveClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.archive_url.trim_end_matches('/').to_string(),
        })
    }

    /// List archived CSV files, newest first.
    pub async fn list_files(&self) -> ClientResult<Vec<CsvFile>> {
        let url = format!("{}/api/csv-files", self.base_url);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::InvalidResponse(format!(
                "HTTP {} from archive service",
                response.status()
            )));
        }
        let list: CsvFileList = response.json().await?;
        let mut files = list.files;
        sort_files(&mut files);
        Ok(files)
    }

    /// Download URL for a file, suitable for handing to the user.
    pub fn download_url(&self, file_name: &str) -> String {
        format!("{}/api/csv-files/download?file={}", self.base_url, file_name)
    }

    /// Fetch the raw bytes of one archived file.
    pub async fn download(&self, file_name: &str) -> ClientResult<Vec<u8>> {
        let response = self.client.get(self.download_url(file_name)).send().await?;
        if !response.status().is_success() {
            return Err(ClientError::NotFound(format!(
                "archive file `{}` ({})",
                file_name,
                response.status()
            )));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Trailing `_N.csv` sequence number, 0 when absent.
fn sequence_number(file_name: &str) -> u32 {
    SEQUENCE
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

fn sort_files(files: &mut [CsvFile]) {
    files.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| sequence_number(&b.file_name).cmp(&sequence_number(&a.file_name)))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, date: &str) -> CsvFile {
        CsvFile {
            file_name: name.to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn sorts_by_date_then_sequence_descending() {
        let mut files = vec![
            file("Game_Summary_1.csv", "2025-02-01"),
            file("Game_Summary_3.csv", "2025-02-02"),
            file("Game_Summary_12.csv", "2025-02-02"),
            file("Game_Summary_2.csv", "2025-02-01"),
        ];
        sort_files(&mut files);
        let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Game_Summary_12.csv",
                "Game_Summary_3.csv",
                "Game_Summary_2.csv",
                "Game_Summary_1.csv",
            ]
        );
    }

    #[test]
    fn missing_sequence_sorts_last_within_date() {
        let mut files = vec![
            file("summary.csv", "2025-02-02"),
            file("summary_5.csv", "2025-02-02"),
        ];
        sort_files(&mut files);
        assert_eq!(files[0].file_name, "summary_5.csv");
    }

    #[test]
    fn download_url_includes_file_name() {
        let config = ClientConfig::new("http://localhost:4000/graphql")
            .with_archive_url("https://archive.example:10000/");
        let client = ArchiveClient::new(&config).unwrap();
        assert_eq!(
            client.download_url("a.csv"),
            "https://archive.example:10000/api/csv-files/download?file=a.csv"
        );
    }
}
