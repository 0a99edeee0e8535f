//! HTML rendering of the dashboard view.
//!
//! Produces a single self-contained page. Chart drawing is left to Chart.js
//! in the browser; the page only embeds the datasets as JSON.

use super::view::{DashboardView, GroupView};
use crate::utils::config::{BOOTSTRAP_CSS_URL, CHART_JS_URL};
use crate::utils::error::RenderError;
use std::fmt::Write;

const STYLE: &str = r#"
        .chart-container { display: flex; flex-wrap: wrap; justify-content: space-between; gap: 20px; }
        .chart-item { width: 48%; margin-bottom: 40px; }
        table { width: 100%; margin-top: 3px; border-collapse: collapse; }
        th, td { border: 1px solid #ddd; padding: 3px; }
        th { background-color: #f2f2f2; text-align: left; }
        td.num { text-align: right; font-variant-numeric: tabular-nums; }
        canvas { width: 100% !important; height: auto !important; }
"#;

const CHART_OPTIONS: &str = r#"{
                        scales: { y: { beginAtZero: false } },
                        plugins: {
                            tooltip: {
                                mode: 'index',
                                intersect: false,
                                callbacks: {
                                    label: function(item) { return item.dataset.label + ': ' + item.raw; }
                                }
                            },
                            legend: { display: true, position: 'bottom' }
                        }
                    }"#;

/// Render the complete dashboard page
///
/// **Public** - called by the HTTP handler on every request
///
/// # Errors
/// * `RenderError::Serialization` - chart data could not be encoded
/// * `RenderError::Format` - writing into the output buffer failed
pub fn render_dashboard(view: &DashboardView) -> Result<String, RenderError> {
    let mut html = String::with_capacity(16 * 1024);
    let title = escape_html(&view.title);

    write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link href="{css}" rel="stylesheet">
    <script src="{js}"></script>
    <style>{style}    </style>
</head>
<body>
    <div class="container mt-5">
        <h1 class="text-center">{title}</h1>
"#,
        title = title,
        css = BOOTSTRAP_CSS_URL,
        js = CHART_JS_URL,
        style = STYLE,
    )?;

    write!(html, r#"        <p class="text-center text-muted">"#)?;
    if let Some(range) = &view.time_range {
        write!(html, "Snapshots {} &middot; ", escape_html(range))?;
    }
    writeln!(
        html,
        "{} &middot; generated {}</p>",
        escape_html(&view.summary),
        escape_html(&view.generated_at)
    )?;

    writeln!(html, r#"        <div class="chart-container">"#)?;
    for group in &view.groups {
        render_group(&mut html, group)?;
    }
    writeln!(html, "        </div>\n    </div>\n</body>\n</html>")?;

    Ok(html)
}

/// Heading, canvas, statistics table and chart script for one group
///
/// **Private** - internal helper for render_dashboard
fn render_group(html: &mut String, group: &GroupView) -> Result<(), RenderError> {
    let canvas_id = escape_html(&group.canvas_id);

    writeln!(html, r#"            <div class="chart-item">"#)?;
    writeln!(html, "                <h2>{}</h2>", escape_html(&group.heading))?;
    writeln!(
        html,
        r#"                <canvas id="{}" width="400" height="200"></canvas>"#,
        canvas_id
    )?;
    writeln!(html, "                <table>")?;
    writeln!(
        html,
        "                    <tr><th>Name</th><th>Max</th><th>Min</th><th>Avg</th></tr>"
    )?;
    for row in &group.rows {
        writeln!(
            html,
            r#"                    <tr><td>{}</td><td class="num">{}</td><td class="num">{}</td><td class="num">{}</td></tr>"#,
            escape_html(&row.name),
            row.max,
            row.min,
            escape_html(&row.avg)
        )?;
    }
    writeln!(html, "                </table>")?;
    writeln!(html, "            </div>")?;

    let labels = script_json(&group.labels)?;
    let datasets = script_json(&group.datasets)?;
    let id = script_json(&group.canvas_id)?;

    write!(
        html,
        r#"            <script>
                new Chart(document.getElementById({id}).getContext('2d'), {{
                    type: 'line',
                    data: {{ labels: {labels}, datasets: {datasets} }},
                    options: {options}
                }});
            </script>
"#,
        id = id,
        labels = labels,
        datasets = datasets,
        options = CHART_OPTIONS,
    )?;

    Ok(())
}

/// Serialize a value for embedding inside a `<script>` element
fn script_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, RenderError> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace("</", "<\\/"))
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
