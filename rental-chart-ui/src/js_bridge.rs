//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are embedded at compile
//! time. They are evaluated as globals (no ES modules) and exposed via
//! `window.*`. This module provides Rust wrappers that pass serialized data
//! and chart specifications to those globals.

use rental_data::chart::ChartSpec;
use serde::Serialize;

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static COMBO_CHART_JS: &str = include_str!("../assets/js/combo-chart.js");

/// D3 bundle injected when the page did not load one itself.
const D3_CDN_URL: &str = "https://cdn.jsdelivr.net/npm/d3@7";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Rental chart JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Initialize chart scripts once D3 is available.
///
/// The chart scripts define `function` declarations. They are evaluated at
/// global scope with an indirect `eval` from inside the polling callback and
/// then promoted to `window.*` explicitly. Calling this more than once is a
/// no-op after the first call.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, COMBO_CHART_JS].join("\n");

    let store_js = format!(
        "if (!window.__rentalChartsInit) {{ window.__rentalChartsInit = true; window.__rentalChartScripts = {}; }}",
        js_string(&all_js)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (!window.__rentalChartScripts) return;
            if (typeof d3 === 'undefined' && !document.getElementById('rental-d3-script')) {{
                var script = document.createElement('script');
                script.id = 'rental-d3-script';
                script.src = {d3_url};
                document.head.appendChild(script);
            }}
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__rentalChartScripts);
                    delete window.__rentalChartScripts;
                    if (typeof renderComboChart !== 'undefined') window.renderComboChart = renderComboChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__rentalChartsReady = true;
                    console.log('Rental charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        d3_url = js_string(D3_CDN_URL),
    );
    let _ = js_sys::eval(&init_js);
}

/// Polling attempts (100 ms apart) before a pending render is abandoned.
const RENDER_MAX_ATTEMPTS: u32 = 300;

/// Render a bar + line combo chart into `container_id`.
///
/// Polls until D3.js is loaded, the chart scripts are initialized and the
/// container element exists, then draws. A later call for the same container
/// replaces the previous drawing and cancels its pending poll, so at most one
/// poll per container is alive. Polling stops after `RENDER_MAX_ATTEMPTS`.
pub fn render_combo_chart(container_id: &str, data_json: &str, spec_json: &str) {
    call_js(&combo_chart_script(container_id, data_json, spec_json));
}

fn combo_chart_script(container_id: &str, data_json: &str, spec_json: &str) -> String {
    format!(
        r#"
        (function() {{
            var id = {id};
            var data = {data};
            var spec = {spec};
            var pending = window.__rentalPendingRenders = window.__rentalPendingRenders || {{}};
            if (pending[id]) clearInterval(pending[id]);
            var attempts = 0;
            var poll = setInterval(function() {{
                attempts++;
                if (window.__rentalChartsReady &&
                    typeof window.renderComboChart !== 'undefined' &&
                    document.getElementById(id)) {{
                    clearInterval(poll);
                    delete pending[id];
                    try {{
                        window.renderComboChart(id, data, spec);
                    }} catch(e) {{ console.error('[Rental] renderComboChart error:', e); }}
                }} else if (attempts >= {max_attempts}) {{
                    clearInterval(poll);
                    delete pending[id];
                    console.warn('[Rental] gave up rendering ' + id + ': D3.js or container not ready');
                }}
            }}, 100);
            pending[id] = poll;
        }})();
        "#,
        id = js_string(container_id),
        data = js_string(data_json),
        spec = js_string(spec_json),
        max_attempts = RENDER_MAX_ATTEMPTS,
    )
}

/// Serialize `series` and `spec`, then render them with [`render_combo_chart`].
pub fn render_series<T: Serialize>(container_id: &str, series: &[T], spec: &ChartSpec) {
    let data_json = match serde_json::to_string(series) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Failed to serialize series for {}: {}", container_id, e);
            return;
        }
    };
    let spec_json = match spec.to_json() {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Failed to serialize chart spec for {}: {}", container_id, e);
            return;
        }
    };
    render_combo_chart(container_id, &data_json, &spec_json);
}

/// Destroy/clean up a chart in the given container, cancelling any pending render.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var id = {}; var pending = window.__rentalPendingRenders; \
         if (pending && pending[id]) {{ clearInterval(pending[id]); delete pending[id]; }} \
         var el = document.getElementById(id); if (el) el.innerHTML = '';",
        js_string(container_id)
    ));
}
