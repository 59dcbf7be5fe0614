//! Static page assembly.
//!
//! One self-contained HTML file: CDN tags for Leaflet, Leaflet.markercluster
//! and D3, the rendered control row, empty pane containers, the embedded
//! artifact bundle, and the page script that swaps artifacts in as the
//! controls move. Rendering is delegated to the CDN libraries; nothing else
//! is fetched at view time.

use crate::export::ExportBundle;
use crate::widgets::{all_widgets, Widget, WidgetKind};
use anyhow::Result;
use std::io::Write;
use usm_data::selection::Selection;

/// Page script, embedded at compile time.
static DASHBOARD_JS: &str = include_str!("../assets/js/dashboard.js");

/// Exported page canvas.
pub const PAGE_WIDTH: u32 = 1920;
pub const PAGE_HEIGHT: u32 = 1080;

pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
pub const MARKERCLUSTER_CSS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css";
pub const MARKERCLUSTER_DEFAULT_CSS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css";
pub const MARKERCLUSTER_JS: &str =
    "https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js";
pub const D3_JS: &str = "https://d3js.org/d3.v7.min.js";

/// A closing tag inside a script body would end the script early; JSON
/// strings read `<\/` back as `</`, so the replacement is lossless.
fn escape_script_body(body: &str) -> String {
    body.replace("</", "<\\/")
}

fn write_widget<W: Write>(writer: &mut W, widget: &Widget) -> Result<()> {
    match widget.kind {
        WidgetKind::Select => {
            write!(
                writer,
                r#"            <label class="control"><span>{label}</span>
                <select id="{name}-control">
"#,
                label = widget.label,
                name = widget.name
            )?;
            for option in &widget.options {
                let selected = if option.value == widget.selected {
                    " selected"
                } else {
                    ""
                };
                write!(
                    writer,
                    "                    <option value=\"{}\"{}>{}</option>\n",
                    option.value, selected, option.label
                )?;
            }
            write!(writer, "                </select>\n            </label>\n")?;
        }
        WidgetKind::Radio => {
            write!(
                writer,
                r#"            <fieldset class="control radio-group">
                <legend>{label}</legend>
"#,
                label = widget.label
            )?;
            for option in &widget.options {
                let checked = if option.value == widget.selected {
                    " checked"
                } else {
                    ""
                };
                write!(
                    writer,
                    "                <label><input type=\"radio\" name=\"{}\" value=\"{}\"{}> {}</label>\n",
                    widget.name, option.value, checked, option.label
                )?;
            }
            write!(writer, "            </fieldset>\n")?;
        }
    }
    Ok(())
}

/// Write the full dashboard page.
pub fn write_page<W: Write>(writer: &mut W, bundle: &ExportBundle, initial: Selection) -> Result<()> {
    let json_data = escape_script_body(&serde_json::to_string(bundle)?);

    write!(
        writer,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>US State Mortality Dashboard</title>
    <link rel="stylesheet" href="{leaflet_css}">
    <link rel="stylesheet" href="{markercluster_css}">
    <link rel="stylesheet" href="{markercluster_default_css}">
    <script src="{leaflet_js}"></script>
    <script src="{markercluster_js}"></script>
    <script src="{d3_js}"></script>
    <style>
        * {{ box-sizing: border-box; margin: 0; padding: 0; }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif;
            background: #f5f6f8;
            color: #1f2328;
        }}
        .page {{
            width: {page_width}px;
            height: {page_height}px;
            margin: 0 auto;
            display: flex;
            flex-direction: column;
            padding: 12px 16px;
        }}
        .header {{
            display: flex;
            align-items: baseline;
            gap: 12px;
            padding-bottom: 8px;
            border-bottom: 1px solid #d0d7de;
        }}
        .header h1 {{ font-size: 1.4rem; }}
        .header .subtitle {{ color: #57606a; font-size: 0.9rem; }}
        .controls {{
            display: flex;
            align-items: flex-start;
            gap: 24px;
            padding: 10px 0;
        }}
        .control span, .control legend {{
            display: block;
            font-size: 0.8rem;
            font-weight: 600;
            color: #57606a;
            margin-bottom: 4px;
        }}
        .control select {{
            font-size: 0.95rem;
            padding: 4px 8px;
            min-width: 200px;
        }}
        .radio-group {{ border: none; }}
        .radio-group label {{
            display: block;
            font-size: 0.9rem;
            margin-bottom: 2px;
        }}
        .panes {{
            display: flex;
            gap: 16px;
            flex: 1;
            min-height: 0;
        }}
        .left-column {{
            display: flex;
            flex-direction: column;
            gap: 12px;
        }}
        #map-pane {{ width: 1200px; height: 520px; border: 1px solid #d0d7de; }}
        #chart-pane {{
            width: 1200px;
            height: 380px;
            background: #ffffff;
            border: 1px solid #d0d7de;
        }}
        #rankings-pane {{
            flex: 1;
            background: #ffffff;
            border: 1px solid #d0d7de;
            overflow-y: auto;
        }}
        #rankings-pane table {{ width: 100%; border-collapse: collapse; }}
        #rankings-pane th, #rankings-pane td {{
            text-align: left;
            padding: 5px 12px;
            border-bottom: 1px solid #eaeef2;
            font-size: 0.9rem;
        }}
        #rankings-pane th {{
            position: sticky;
            top: 0;
            background: #f6f8fa;
        }}
        .map-legend {{
            background: #ffffff;
            padding: 8px 10px;
            border-radius: 4px;
            box-shadow: 0 1px 4px rgba(0,0,0,0.3);
            font-size: 0.8rem;
            line-height: 1.4;
        }}
        .map-legend .swatch {{
            display: inline-block;
            width: 14px;
            height: 14px;
            margin-right: 6px;
            vertical-align: middle;
        }}
        .footer {{
            padding-top: 6px;
            color: #57606a;
            font-size: 0.75rem;
        }}
    </style>
</head>
<body>
    <div class="page">
        <div class="header">
            <h1>US State Mortality Dashboard</h1>
            <span class="subtitle">NCHS firearm, homicide and drug overdose tables</span>
        </div>
        <div class="controls">
"#,
        leaflet_css = LEAFLET_CSS,
        markercluster_css = MARKERCLUSTER_CSS,
        markercluster_default_css = MARKERCLUSTER_DEFAULT_CSS,
        leaflet_js = LEAFLET_JS,
        markercluster_js = MARKERCLUSTER_JS,
        d3_js = D3_JS,
        page_width = PAGE_WIDTH,
        page_height = PAGE_HEIGHT,
    )?;

    for widget in all_widgets(initial) {
        write_widget(writer, &widget)?;
    }

    write!(
        writer,
        r#"        </div>
        <div class="panes">
            <div class="left-column">
                <div id="map-pane"></div>
                <div id="chart-pane"></div>
            </div>
            <div id="rankings-pane"></div>
        </div>
        <div class="footer">Generated {generated_at}</div>
    </div>
    <script>window.DASHBOARD_DATA = {json_data};</script>
    <script>
{dashboard_js}
    </script>
</body>
</html>
"#,
        generated_at = bundle.generated_at,
        json_data = json_data,
        dashboard_js = DASHBOARD_JS,
    )?;
    Ok(())
}
