//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js renderers live in `assets/js/*.js` and are embedded at compile
//! time. They are evaluated as globals (no ES modules) and exposed via
//! `window.*`. Every chart goes through one entry point,
//! `window.renderMobilityChart(containerId, chartJson)`, which switches on the
//! chart `kind` produced by `hmd_analysis::Chart`.

use hmd_analysis::Chart;

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static HEATMAP_JS: &str = include_str!("../assets/js/heatmap.js");
static MOBILITY_CHART_JS: &str = include_str!("../assets/js/mobility-chart.js");

/// D3 build loaded when the host page does not provide one.
const D3_SRC: &str = "https://cdn.jsdelivr.net/npm/d3@7";

fn eval(code: &str) {
    if let Err(e) = js_sys::eval(code) {
        log::warn!("[HMD] js_bridge: eval failed: {:?}", e);
    }
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('HMD JS call failed:', e); }}",
        code
    );
    eval(&wrapped);
}

/// Quote `text` as a JS string literal.
fn js_string(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| "''".to_string())
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are stored on `window` and evaluated at global scope once D3
/// is available, then their entry points are promoted to `window.*`. Safe to
/// call more than once; later calls are no-ops.
pub fn init_charts() {
    let all_js = [
        TOOLTIP_JS,
        LINE_CHART_JS,
        BAR_CHART_JS,
        HEATMAP_JS,
        MOBILITY_CHART_JS,
    ]
    .join("\n");

    let store_js = format!(
        "if (!window.__hmdChartsInit) {{ window.__hmdChartsInit = true; window.__hmdChartScripts = {}; }}",
        js_string(&all_js)
    );
    eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (!window.__hmdChartScripts) return;
            if (typeof d3 === 'undefined' && !document.getElementById('hmd-d3')) {{
                var s = document.createElement('script');
                s.id = 'hmd-d3';
                s.src = {d3_src};
                document.head.appendChild(s);
            }}
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined' && window.__hmdChartScripts) {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__hmdChartScripts);
                    delete window.__hmdChartScripts;
                    if (typeof renderMobilityChart !== 'undefined') window.renderMobilityChart = renderMobilityChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__hmdChartsReady = true;
                    console.log('HMD charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        d3_src = js_string(D3_SRC),
    );
    eval(&init_js);
}

/// Render one chart description into the element with `container_id`.
///
/// Polls until D3, the chart scripts and the container element all exist.
pub fn render_chart(container_id: &str, chart: &Chart) {
    let json = match serde_json::to_string(chart) {
        Ok(s) => s,
        Err(e) => {
            log::error!("[HMD] js_bridge: cannot serialize chart: {}", e);
            return;
        }
    };
    log::info!(
        "[HMD] js_bridge: rendering {} into #{}",
        chart.title().unwrap_or("untitled chart"),
        container_id
    );
    call_js(&format!(
        r#"
        (function() {{
            var id = {id};
            var json = {json};
            var poll = setInterval(function() {{
                if (window.__hmdChartsReady &&
                    typeof window.renderMobilityChart !== 'undefined' &&
                    document.getElementById(id)) {{
                    clearInterval(poll);
                    try {{
                        window.renderMobilityChart(id, json);
                    }} catch(e) {{ console.error('[HMD] renderMobilityChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
        id = js_string(container_id),
        json = js_string(&json),
    ));
}

/// Clear whatever is drawn in the given container.
pub fn destroy_chart(container_id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id));
    match element {
        Some(el) => el.set_inner_html(""),
        None => log::info!("[HMD] js_bridge: #{} not mounted, nothing to clear", container_id),
    }
}

