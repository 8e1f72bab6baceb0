//! Tests for the serialized SVG and HTML documents.

use heatmap_common::{Dataset, MonthlyVariance};
use renderer::svg::SvgOptions;
use renderer::{render_heatmap, RenderOptions};
use test_utils::{create_published_shape_dataset, degenerate, sample_dataset};

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn test_one_rect_per_record() {
    let dataset = sample_dataset();
    let rendered = render_heatmap(&dataset, &RenderOptions::default());

    assert_eq!(count(&rendered.svg, "class=\"cell\""), dataset.len());
    assert_eq!(rendered.cell_count(), dataset.len());
}

#[test]
fn test_published_shape_cell_count() {
    let dataset = create_published_shape_dataset();
    let rendered = render_heatmap(&dataset, &RenderOptions::default());
    assert_eq!(count(&rendered.svg, "class=\"cell\""), dataset.len());
}

#[test]
fn test_canvas_dimensions() {
    let rendered = render_heatmap(&sample_dataset(), &RenderOptions::default());
    assert!(rendered.svg.contains("id=\"canvas\" width=\"1200\" height=\"600\""));
    assert!(rendered
        .legend_svg
        .contains("id=\"legend\" width=\"300\" height=\"155\""));
}

#[test]
fn test_axis_groups_present() {
    let rendered = render_heatmap(&sample_dataset(), &RenderOptions::default());
    let svg = &rendered.svg;

    assert!(svg.contains("<g id=\"x-axis\" class=\"axis\" transform=\"translate(0, 540)\""));
    assert!(svg.contains("<g id=\"y-axis\" class=\"axis\" transform=\"translate(60, 0)\""));
    assert!(svg.contains("<g id=\"y-axis-right\" class=\"axis\" transform=\"translate(1140, 0)\""));
    assert_eq!(count(svg, "class=\"domain\""), 3);
}

#[test]
fn test_month_labels_rendered_on_both_sides() {
    let rendered = render_heatmap(&sample_dataset(), &RenderOptions::default());
    assert_eq!(count(&rendered.svg, ">January</text>"), 2);
    assert_eq!(count(&rendered.svg, ">December</text>"), 2);
}

#[test]
fn test_cell_attributes() {
    let dataset = Dataset::new(8.0, vec![MonthlyVariance::new(2000, 12, 1.2)]);
    let rendered = render_heatmap(&dataset, &RenderOptions::default());
    let svg = &rendered.svg;

    assert!(svg.contains("fill=\"#dc143c\""));
    assert!(svg.contains("data-year=\"2000\""));
    assert!(svg.contains("data-month=\"11\""));
    assert!(svg.contains("data-temp=\"9.2\""));
    assert!(svg.contains("data-band=\"warm\""));
    assert!(svg.contains("data-tooltip=\"2000 December - 9.2 (1.2)\""));
    assert!(svg.contains("<title>2000 December - 9.2 (1.2)</title>"));
}

#[test]
fn test_cell_titles_can_be_disabled() {
    let options = RenderOptions {
        svg: SvgOptions {
            cell_titles: false,
            ..SvgOptions::default()
        },
        ..RenderOptions::default()
    };
    let rendered = render_heatmap(&sample_dataset(), &options);
    assert!(!rendered.svg.contains("<title>"));
    assert_eq!(count(&rendered.svg, "class=\"cell\""), sample_dataset().len());
}

#[test]
fn test_axis_labels_are_opt_in() {
    let plain = render_heatmap(&sample_dataset(), &RenderOptions::default());
    assert!(!plain.svg.contains("axis-label"));

    let options = RenderOptions {
        svg: SvgOptions {
            axis_labels: true,
            ..SvgOptions::default()
        },
        ..RenderOptions::default()
    };
    let labelled = render_heatmap(&sample_dataset(), &options);
    assert!(labelled.svg.contains("id=\"x-axis-label\""));
    assert!(labelled.svg.contains(">Month</text>"));
}

#[test]
fn test_transparent_background() {
    let options = RenderOptions {
        svg: SvgOptions {
            background: None,
            ..SvgOptions::default()
        },
        ..RenderOptions::default()
    };
    let rendered = render_heatmap(&sample_dataset(), &options);
    assert!(!rendered.svg.contains("class=\"background\""));
}

#[test]
fn test_legend_lists_every_band() {
    let rendered = render_heatmap(&sample_dataset(), &RenderOptions::default());
    let legend = &rendered.legend_svg;

    for band in ["cold", "mild-cold", "mild-warm", "warm"] {
        assert!(
            legend.contains(&format!("data-band=\"{}\"", band)),
            "legend missing {}",
            band
        );
    }
    assert!(legend.contains("Variance from 8.66℃"));
}

#[test]
fn test_empty_dataset_renders_axes_only() {
    let rendered = render_heatmap(&degenerate::empty(), &RenderOptions::default());
    assert_eq!(count(&rendered.svg, "class=\"cell\""), 0);
    assert!(rendered.svg.contains("id=\"x-axis\""));
    assert!(rendered.html.contains("no data"));
}

#[test]
fn test_single_year_renders_degenerate_width() {
    let rendered = render_heatmap(&degenerate::single_year(), &RenderOptions::default());
    assert_eq!(count(&rendered.svg, "width=\"Infinity\""), 12);
}

#[test]
fn test_html_page_structure() {
    let rendered = render_heatmap(&sample_dataset(), &RenderOptions::default());
    let html = &rendered.html;

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1 id=\"title\">"));
    assert!(html.contains("<h3 id=\"description\">1753 - 1754: base temperature 8.66℃</h3>"));
    assert!(html.contains("<div id=\"tooltip\"></div>"));
    assert!(html.contains(&rendered.svg));
    assert!(html.contains(&rendered.legend_svg));
    assert!(html.contains("addEventListener('mouseover'"));
    assert!(html.contains("addEventListener('mouseout'"));
}
