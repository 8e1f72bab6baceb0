//! HTML page hosting the heatmap.
//!
//! The page embeds both SVG surfaces inline, a hidden `#tooltip` element
//! and a small script that registers the hover handlers: `mouseover` on a
//! `.cell` copies its `data-tooltip` and `data-year` into the tooltip and
//! shows it, `mouseout` hides it.

use std::fmt::Write;

use quick_xml::escape::escape;

use crate::tooltip::format_number;

/// Inline hover adapter. Uses event delegation on the canvas so one pair
/// of listeners serves every cell.
const HOVER_SCRIPT: &str = r#"(function () {
  var canvas = document.getElementById('canvas');
  var tooltip = document.getElementById('tooltip');
  if (!canvas || !tooltip) { return; }
  canvas.addEventListener('mouseover', function (e) {
    var cell = e.target.closest('.cell');
    if (!cell) { return; }
    tooltip.textContent = cell.getAttribute('data-tooltip');
    tooltip.setAttribute('data-year', cell.getAttribute('data-year'));
    tooltip.style.left = (e.pageX + 12) + 'px';
    tooltip.style.top = (e.pageY - 28) + 'px';
    tooltip.style.visibility = 'visible';
  });
  canvas.addEventListener('mouseout', function (e) {
    if (e.target.closest('.cell')) { tooltip.style.visibility = 'hidden'; }
  });
})();"#;

const STYLE: &str = r#"body { font-family: sans-serif; margin: 24px; color: #222; }
    #title { margin-bottom: 4px; }
    #description { margin-top: 0; color: #555; }
    .cell:hover { stroke: #000; stroke-width: 1; }
    #tooltip {
      position: absolute; visibility: hidden; pointer-events: none;
      padding: 6px 10px; background: rgba(34, 34, 34, 0.85); color: #fff;
      border-radius: 4px; font-size: 13px;
    }"#;

/// Text around the embedded surfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct PageText {
    pub title: String,
    pub description: String,
}

impl PageText {
    /// Standard heading: dataset year range and base temperature.
    pub fn for_dataset(year_bounds: Option<(i32, i32)>, base_temperature: f64) -> Self {
        let range = match year_bounds {
            Some((min, max)) => format!("{} - {}", min, max),
            None => "no data".to_string(),
        };
        Self {
            title: "Monthly Global Land-Surface Temperature".to_string(),
            description: format!(
                "{}: base temperature {}℃",
                range,
                format_number(base_temperature)
            ),
        }
    }
}

/// Assemble the page around already-rendered SVG documents.
pub fn render_page(text: &PageText, heatmap_svg: &str, legend_svg: &str) -> String {
    let mut html = String::with_capacity(heatmap_svg.len() + legend_svg.len() + 2048);
    let title = escape(text.title.as_str());

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    let _ = writeln!(html, "  <title>{}</title>", title);
    let _ = writeln!(html, "  <style>\n    {}\n  </style>", STYLE);
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "  <h1 id=\"title\">{}</h1>", title);
    let _ = writeln!(
        html,
        "  <h3 id=\"description\">{}</h3>",
        escape(text.description.as_str())
    );
    html.push_str(heatmap_svg);
    html.push_str(legend_svg);
    html.push_str("  <div id=\"tooltip\"></div>\n");
    let _ = writeln!(html, "  <script>\n{}\n  </script>", HOVER_SCRIPT);
    html.push_str("</body>\n</html>\n");
    html
}
