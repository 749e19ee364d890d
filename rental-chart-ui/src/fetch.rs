//! CSV download through the browser `fetch` API.

use anyhow::{anyhow, bail};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Directory the apps serve their CSV files from (`public/data/`).
pub const DATA_DIR: &str = "/data";

/// URL of a data file served from [`DATA_DIR`].
pub fn data_url(file_name: &str) -> String {
    format!("{}/{}", DATA_DIR, file_name)
}

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}

/// GET `url` and return the response body as text.
pub async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no global window"))?;
    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    if !response.ok() {
        bail!("GET {} returned HTTP {}", url, response.status());
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    body.as_string()
        .ok_or_else(|| anyhow!("response body of {} is not text", url))
}

/// Fetch `url` and parse it with `parse`.
///
/// Any network or parse failure is logged and yields an empty vector, so
/// charts fall back to their zero-valued series.
pub async fn load_csv<T>(url: &str, parse: fn(&str) -> anyhow::Result<Vec<T>>) -> Vec<T> {
    let result = match fetch_text(url).await {
        Ok(body) => parse(&body),
        Err(e) => Err(e),
    };
    match result {
        Ok(records) => {
            log::info!("Loaded {} records from {}", records.len(), url);
            records
        }
        Err(e) => {
            log::warn!("Failed to load {}: {}", url, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::data_url;
    use rental_core::{MACHINE_MONTHLY_PREDICTIONS_CSV, MERGED_RENTAL_WEATHER_CSV};

    #[test]
    fn data_urls_point_at_served_files() {
        assert_eq!(data_url(MERGED_RENTAL_WEATHER_CSV), "/data/merged_rental_weather.csv");
        assert_eq!(
            data_url(MACHINE_MONTHLY_PREDICTIONS_CSV),
            "/data/machine_monthly_predictions.csv"
        );
    }
}
