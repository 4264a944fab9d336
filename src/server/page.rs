//! Dashboard HTML shell.
//!
//! The page fetches `/api/layout`, builds the dropdown and the two-handle
//! payload slider from it, and posts every control change to
//! `/api/update`. Plotly.js draws the figures it gets back.

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{TITLE}}</title>
<script src="{{PLOTLY}}"></script>
<style>
  body { font-family: system-ui, -apple-system, sans-serif; margin: 0 auto; max-width: 1100px; padding: 16px; }
  h1 { text-align: center; color: #503D36; font-size: 40px; }
  select { width: 100%; padding: 8px; font-size: 15px; }
  .slider { position: relative; height: 48px; margin-top: 8px; }
  .slider input[type=range] { position: absolute; width: 100%; pointer-events: none; background: none; }
  .slider input[type=range]::-webkit-slider-thumb { pointer-events: all; }
  .slider input[type=range]::-moz-range-thumb { pointer-events: all; }
  .marks { display: flex; justify-content: space-between; color: #6b7280; font-size: 12px; }
  .readout { text-align: center; font-weight: 600; }
</style>
</head>
<body>
<h1>{{TITLE}}</h1>
<select id="site-dropdown"></select>
<br>
<div id="success-pie-chart"></div>
<br>
<p>Payload range (Kg):</p>
<div class="slider" id="payload-slider">
  <input type="range" id="payload-low">
  <input type="range" id="payload-high">
</div>
<div class="marks" id="payload-marks"></div>
<div class="readout" id="payload-readout"></div>
<div id="success-payload-scatter-chart"></div>
<script>
let controls = null;

async function dispatch(event) {
  const response = await fetch("/api/update", {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify({ controls, event }),
  });
  if (!response.ok) {
    console.error("update failed", response.status, await response.text());
    return;
  }
  const update = await response.json();
  controls = update.controls;
  Plotly.react(update.target, update.figure.data, update.figure.layout);
}

function showRange(range) {
  document.getElementById("payload-readout").textContent = range[0] + " – " + range[1] + " kg";
}

async function init() {
  const layout = await (await fetch("/api/layout")).json();
  controls = { site: layout.dropdown.value, payload_range: layout.slider.value };

  const dropdown = document.getElementById(layout.dropdown.id);
  const placeholder = document.createElement("option");
  placeholder.textContent = layout.dropdown.placeholder;
  placeholder.disabled = true;
  dropdown.appendChild(placeholder);
  for (const option of layout.dropdown.options) {
    const el = document.createElement("option");
    el.value = option.value;
    el.textContent = option.label;
    dropdown.appendChild(el);
  }
  dropdown.value = layout.dropdown.value;
  dropdown.addEventListener("change", () =>
    dispatch({ control: layout.dropdown.id, value: dropdown.value }));

  const low = document.getElementById("payload-low");
  const high = document.getElementById("payload-high");
  for (const input of [low, high]) {
    input.min = layout.slider.min;
    input.max = layout.slider.max;
    input.step = layout.slider.step;
  }
  low.value = layout.slider.value[0];
  high.value = layout.slider.value[1];
  showRange(layout.slider.value);

  const marks = document.getElementById("payload-marks");
  for (const mark of layout.slider.marks) {
    const el = document.createElement("span");
    el.textContent = mark.label;
    marks.appendChild(el);
  }

  const onSlide = () => {
    const range = [Number(low.value), Number(high.value)].sort((a, b) => a - b);
    showRange(range);
    dispatch({ control: layout.slider.id, value: range });
  };
  low.addEventListener("input", onSlide);
  high.addEventListener("input", onSlide);

  Plotly.newPlot(layout.pie.id, layout.pie.figure.data, layout.pie.figure.layout);
  Plotly.newPlot(layout.scatter.id, layout.scatter.figure.data, layout.scatter.figure.layout);
}

init();
</script>
</body>
</html>
"##;

/// Render the page with the given heading.
pub fn render(title: &str) -> String {
    TEMPLATE
        .replace("{{PLOTLY}}", PLOTLY_CDN)
        .replace("{{TITLE}}", &escape_html(title))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
