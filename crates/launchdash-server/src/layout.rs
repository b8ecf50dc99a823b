//! Page layout: the control model sent to the client and the HTML page.

use std::fmt::Write;

use serde::Serialize;

use launchdash_analysis::OutputId;
use launchdash_core::config::SliderConfig;
use launchdash_core::constants::DASHBOARD_TITLE;
use launchdash_core::{PayloadRange, Selection, SiteFilter};
use launchdash_storage::{SelectionOptions, SiteOption};

/// Range control: fixed display bounds plus a data-derived default value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
    pub value: PayloadRange,
}

/// Everything the page needs to draw its controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub title: String,
    pub site_options: Vec<SiteOption>,
    pub default_site: SiteFilter,
    pub slider: SliderSpec,
    pub outputs: Vec<OutputId>,
}

impl DashboardLayout {
    pub fn build(options: &SelectionOptions, slider: &SliderConfig) -> Self {
        let (min, max) = (slider.effective_min(), slider.effective_max());
        // Default selection spans the observed payloads, kept inside the
        // control's bounds. An empty dataset falls back to the full control.
        let value = options
            .payload_bounds()
            .map(|bounds| bounds.clamp_to(min, max))
            .unwrap_or(PayloadRange::new(min, max));

        Self {
            title: DASHBOARD_TITLE.to_string(),
            site_options: options.site_options(),
            default_site: SiteFilter::All,
            slider: SliderSpec {
                min,
                max,
                step: slider.effective_step(),
                marks: slider.marks(),
                value,
            },
            outputs: OutputId::ALL.to_vec(),
        }
    }

    /// The selection the page starts with.
    pub fn default_selection(&self) -> Selection {
        Selection::new(self.default_site.clone(), self.slider.value)
    }
}

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const PAGE_SCRIPT: &str = r#"
const siteEl = document.getElementById('site-dropdown');
const lowEl = document.getElementById('payload-low');
const highEl = document.getElementById('payload-high');
const rangeLabel = document.getElementById('payload-range-label');

// Range inputs snap to the step; the data-derived default lives here until a
// handle moves.
let payloadRange = initialRange.slice();

function currentSelection() {
  return { site: siteEl.value, payload_range: payloadRange };
}

function slide() {
  payloadRange = [Number(lowEl.value), Number(highEl.value)];
  fire('payload-slider');
}

async function fire(input) {
  const sel = currentSelection();
  rangeLabel.textContent = sel.payload_range[0] + ' - ' + sel.payload_range[1];
  const resp = await fetch('/api/callback', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ input: input, site: sel.site, payload_range: sel.payload_range }),
  });
  if (!resp.ok) { return; }
  const body = await resp.json();
  for (const [id, figure] of Object.entries(body.outputs)) {
    Plotly.react(id, figure.data, figure.layout);
  }
}

siteEl.addEventListener('change', () => fire('site-dropdown'));
lowEl.addEventListener('input', slide);
highEl.addEventListener('input', slide);
fire('site-dropdown');
"#;

/// Render the dashboard page. Charts are drawn client-side from the figures
/// the callback endpoint returns.
pub fn render_page(layout: &DashboardLayout) -> String {
    let mut html = String::with_capacity(4096);
    let title = escape_html(&layout.title);

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<script src=\"{PLOTLY_CDN}\"></script>\n</head>\n<body>\n\
         <h1 style=\"text-align: center; color: #503D36; font-size: 40px\">{title}</h1>\n"
    );

    html.push_str("<select id=\"site-dropdown\">\n");
    for option in &layout.site_options {
        let selected = if option.value == layout.default_site.as_value() {
            " selected"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "  <option value=\"{}\"{selected}>{}</option>",
            escape_html(&option.value),
            escape_html(&option.label)
        );
    }
    html.push_str("</select>\n<br>\n");

    let _ = writeln!(html, "<div id=\"{}\"></div>\n<br>", OutputId::SuccessPieChart);

    let slider = &layout.slider;
    html.push_str("<p>Payload range (Kg):</p>\n<datalist id=\"payload-marks\">\n");
    for mark in &slider.marks {
        let _ = writeln!(html, "  <option value=\"{mark}\" label=\"{mark}\"></option>");
    }
    html.push_str("</datalist>\n");
    for (id, value) in [("payload-low", slider.value.low), ("payload-high", slider.value.high)] {
        let _ = writeln!(
            html,
            "<input type=\"range\" id=\"{id}\" min=\"{}\" max=\"{}\" step=\"{}\" \
             value=\"{value}\" list=\"payload-marks\">",
            slider.min, slider.max, slider.step
        );
    }
    html.push_str("<span id=\"payload-range-label\"></span>\n<br>\n");

    let _ = writeln!(html, "<div id=\"{}\"></div>", OutputId::SuccessPayloadScatterChart);

    let _ = write!(
        html,
        "<script>\nconst initialRange = [{}, {}];{PAGE_SCRIPT}</script>\n</body>\n</html>\n",
        slider.value.low, slider.value.high
    );
    html
}

/// Escape text for HTML element content and quoted attribute values.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
