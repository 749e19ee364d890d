//! Reading a CSV source from disk or over HTTP.

use anyhow::Context;
use log::info;

/// Whether `source` should be fetched over HTTP rather than read from disk.
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Read the full text of `source`, a file path or an `http(s)://` URL.
pub async fn read_source(source: &str) -> anyhow::Result<String> {
    if is_remote(source) {
        info!("Fetching {}", source);
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()?;
        let response = client
            .get(source)
            .send()
            .await
            .with_context(|| format!("failed to fetch {}", source))?
            .error_for_status()
            .with_context(|| format!("bad response from {}", source))?;
        Ok(response.text().await?)
    } else {
        info!("Reading {}", source);
        tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("failed to read {}", source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_remote() {
        assert!(is_remote("https://example.com/data/merged_rental_weather.csv"));
        assert!(is_remote("http://localhost:8080/data.csv"));
        assert!(!is_remote("public/data/merged_rental_weather.csv"));
        assert!(!is_remote("/tmp/http.csv"));
    }

    #[tokio::test]
    async fn test_read_local_file() {
        let path = std::env::temp_dir().join(format!("rental-cmd-source-{}.csv", std::process::id()));
        std::fs::write(&path, "machine,rental_date,count\n이앙기,2023-03-15,5\n").unwrap();
        let body = read_source(path.to_str().unwrap()).await.unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(body.contains("이앙기"));
    }

    #[tokio::test]
    async fn test_missing_file_names_path() {
        let err = read_source("/nonexistent/rental.csv").await.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/rental.csv"));
    }
}
