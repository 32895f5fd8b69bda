//! Report export: wraps a rendered report snapshot into a standalone HTML
//! document and hands it to the browser as a download.
//!
//! The embedded stylesheet carries A4 print rules, so opening the exported
//! file and printing it to PDF paginates cleanly.

use chrono::NaiveDate;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Inline stylesheet for the exported document: the report section of the
/// app stylesheet plus print pagination rules. Kept self-contained so the
/// file renders without the app being reachable.
const REPORT_CSS: &str = "\
:root { color-scheme: light; }
* { box-sizing: border-box; }
body { margin: 0; font-family: 'Segoe UI', system-ui, sans-serif; color: #1f2937; background: #ffffff; }
.report-page { max-width: 960px; margin: 0 auto; padding: 24px; }
.report__section { border: 1px solid #e5e7eb; border-radius: 12px; padding: 24px; margin-bottom: 24px; }
.report__section-title { margin: 0 0 16px; font-size: 20px; }
.report__cards { display: grid; grid-template-columns: repeat(2, 1fr); gap: 16px; }
.stat-card { border: 1px solid transparent; border-radius: 12px; padding: 16px; }
.stat-card--green { background: #f0fdf4; border-color: #bbf7d0; }
.stat-card--blue { background: #eff6ff; border-color: #bfdbfe; }
.stat-card--purple { background: #faf5ff; border-color: #e9d5ff; }
.stat-card--total { background: linear-gradient(90deg, #2563eb, #9333ea); color: #ffffff; }
.stat-card__label { font-size: 13px; font-weight: 600; margin-bottom: 6px; }
.stat-card--green .stat-card__label { color: #15803d; }
.stat-card--blue .stat-card__label { color: #1d4ed8; }
.stat-card--purple .stat-card__label { color: #7e22ce; }
.stat-card--total .stat-card__label { color: rgba(255, 255, 255, 0.9); }
.stat-card__value, .animated-number { font-size: 22px; font-weight: 700; }
.stat-card--green .stat-card__value { color: #166534; }
.stat-card--blue .stat-card__value { color: #1e40af; }
.stat-card--purple .stat-card__value { color: #6b21a8; }
.report__roi { margin-top: 20px; padding: 14px; border-radius: 12px; text-align: center; font-size: 17px; font-weight: 600; background: linear-gradient(90deg, #dcfce7, #dbeafe); }
.report__charts { display: grid; grid-template-columns: 1fr 1fr; gap: 24px; margin-bottom: 24px; }
.chart-panel { background: #ffffff; border: 1px solid #e5e7eb; border-radius: 12px; padding: 20px; }
.chart-panel__title { margin: 0 0 12px; font-size: 16px; }
.chart-panel svg { width: 100%; height: auto; }
.chart-legend { display: flex; justify-content: center; gap: 16px; margin-top: 8px; font-size: 12px; }
.chart-legend__dot { display: inline-block; width: 10px; height: 10px; border-radius: 50%; margin-right: 4px; }
.report__recap { display: grid; grid-template-columns: repeat(4, 1fr); gap: 12px; font-size: 13px; }
.report__recap-item { background: #f9fafb; border-radius: 8px; padding: 10px 12px; }
.report__recap-label { font-weight: 600; margin-right: 6px; }
@page { size: A4; margin: 14mm; }
@media print {
  .report-page { max-width: none; padding: 0; }
  .report__section, .chart-panel { break-inside: avoid; }
}
";

/// Builds a self-contained HTML document around a report snapshot.
/// `report_html` is trusted markup lifted straight from the rendered modal.
pub fn printable_document(title: &str, report_html: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n{REPORT_CSS}</style>\n</head>\n<body>\n\
         <main class=\"report-page\">\n{report_html}\n</main>\n</body>\n</html>\n"
    )
}

/// Report filename for the given day: `ROI-Report-2026-08-23.html`.
pub fn report_filename(today: NaiveDate) -> String {
    format!("ROI-Report-{}.html", today.format("%Y-%m-%d"))
}

/// Packs the document into a Blob and initiates a browser download.
pub fn download_report(content: &str, filename: &str) -> Result<(), String> {
    let blob = create_html_blob(content)?;
    download_blob(&blob, filename)
}

fn create_html_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/html;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_document_structure() {
        let doc = printable_document("AI ROI Report", "<section>body</section>");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>AI ROI Report</title>"));
        assert!(doc.contains("<section>body</section>"));
        assert!(doc.contains("@page { size: A4;"));
        assert!(doc.ends_with("</html>\n"));
    }

    #[test]
    fn test_report_filename() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        assert_eq!(report_filename(date), "ROI-Report-2026-08-23.html");
        let padded = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(report_filename(padded), "ROI-Report-2026-01-05.html");
    }
}
