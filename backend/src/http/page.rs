//! Dashboard HTML page.
//!
//! The page is static: it fetches `/v1/layout` to build the controls, draws
//! `/v1/charts` with plotly.js, and posts every control change to
//! `/v1/controls/{control_id}`, redrawing only the outputs that come back.

pub const DASHBOARD_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Launch Records Dashboard</title>
    <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
    <style>
        body { font-family: Helvetica, Arial, sans-serif; margin: 0 auto; max-width: 1100px; padding: 1.5rem; }
        h1 { text-align: center; }
        select { width: 100%; padding: 0.4rem; font-size: 1rem; }
        .slider { display: flex; gap: 1rem; align-items: center; }
        .slider input[type=range] { flex: 1; }
        .slider output { min-width: 5rem; text-align: right; font-variant-numeric: tabular-nums; }
        .chart { min-height: 420px; }
    </style>
</head>
<body>
    <h1 id="title"></h1>
    <select id="site-dropdown"></select>
    <br>
    <div id="success-pie-chart" class="chart"></div>
    <br>
    <p id="payload-label"></p>
    <div class="slider">
        <input type="range" id="payload-lower">
        <output id="payload-lower-value"></output>
    </div>
    <div class="slider">
        <input type="range" id="payload-upper">
        <output id="payload-upper-value"></output>
    </div>
    <br>
    <div id="success-payload-scatter-chart" class="chart"></div>

<script>
function toFigure(spec) {
    if (spec.kind === "pie") {
        return {
            data: [{
                type: "pie",
                labels: spec.slices.map(s => s.label),
                values: spec.slices.map(s => s.value),
            }],
            layout: { title: { text: spec.title } },
        };
    }
    return {
        data: spec.series.map(series => ({
            type: "scatter",
            mode: "markers",
            name: series.category,
            x: series.points.map(p => p.x),
            y: series.points.map(p => p.y),
        })),
        layout: {
            title: { text: spec.title },
            xaxis: { title: { text: spec.x_label } },
            yaxis: { title: { text: spec.y_label } },
            legend: { title: { text: "Booster Version Category" } },
        },
    };
}

function draw(update) {
    for (const [outputId, spec] of Object.entries(update.outputs)) {
        const figure = toFigure(spec);
        Plotly.react(outputId, figure.data, figure.layout);
    }
}

async function sendControl(controlId, value) {
    const response = await fetch(`/v1/controls/${controlId}`, {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify({ value }),
    });
    if (response.ok) {
        draw(await response.json());
    } else {
        console.error(await response.json());
    }
}

async function init() {
    const layout = await (await fetch("/v1/layout")).json();
    document.getElementById("title").textContent = layout.title;
    document.getElementById("payload-label").textContent = layout.payload_slider.label;

    const dropdown = document.getElementById("site-dropdown");
    for (const option of layout.site_dropdown.options) {
        const element = document.createElement("option");
        element.value = option.value;
        element.textContent = option.label;
        dropdown.appendChild(element);
    }
    dropdown.title = layout.site_dropdown.placeholder;
    dropdown.value = layout.initial_selection.site;
    dropdown.addEventListener("change", () => sendControl("site-dropdown", dropdown.value));

    const slider = layout.payload_slider;
    const lower = document.getElementById("payload-lower");
    const upper = document.getElementById("payload-upper");
    for (const input of [lower, upper]) {
        input.min = slider.min;
        input.max = slider.max;
        input.step = slider.step;
    }
    lower.value = layout.initial_selection.payload_range.lower;
    upper.value = layout.initial_selection.payload_range.upper;

    const showRange = () => {
        document.getElementById("payload-lower-value").textContent = lower.value;
        document.getElementById("payload-upper-value").textContent = upper.value;
    };
    const sendRange = () => {
        showRange();
        sendControl("payload-slider", [Number(lower.value), Number(upper.value)]);
    };
    lower.addEventListener("change", sendRange);
    upper.addEventListener("change", sendRange);
    showRange();

    draw(await (await fetch("/v1/charts")).json());
}

init();
</script>
</body>
</html>
"#;
