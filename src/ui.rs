use crate::page::{Page, ReadingForm, ResultPanel, SubmitButton};
use crate::stats::{StatCard, StatsSection};

pub fn render_page(page: &Page) -> String {
    INDEX_HTML
        .replace("{{STATS}}", &render_stats(&page.stats))
        .replace("{{FORM}}", &render_form(&page.form, &page.button))
        .replace("{{RESULT}}", &render_result(&page.result))
}

pub fn render_stats(stats: &StatsSection) -> String {
    let mut out = String::from(r#"<section class="stats-section">"#);
    if let Some(grid) = &stats.grid {
        out.push_str(r#"<div class="stats-grid">"#);
        for card in &grid.cards {
            out.push_str(&render_card(card));
        }
        out.push_str("</div>");
    }
    if let Some(reading) = &stats.last_reading {
        out.push_str(&format!(
            r#"<p class="last-reading">Last reading: {}/{} mmHg, pulse {} bpm ({})</p>"#,
            reading.systolic,
            reading.diastolic,
            reading.pulse,
            escape(&reading.classification)
        ));
    }
    out.push_str("</section>");
    out
}

fn render_card(card: &StatCard) -> String {
    format!(
        r#"<div class="stat-card" data-period="{}"><h3>{}</h3><p>{}</p><p>{}</p></div>"#,
        card.period.key(),
        escape(card.period.title()),
        escape(&card.pressure_line),
        escape(&card.pulse_line)
    )
}

pub fn render_form(form: &ReadingForm, button: &SubmitButton) -> String {
    let mut out = String::from(r#"<form id="readingForm">"#);
    for field in form.fields() {
        out.push_str(&format!(
            r#"<label>{name}<input type="number" name="{name}" value="{value}" required /></label>"#,
            name = escape(&field.name),
            value = escape(&field.value)
        ));
    }
    let disabled = if button.disabled { " disabled" } else { "" };
    out.push_str(&format!(
        r#"<button type="submit" class="submit-btn"{disabled}>{}</button></form>"#,
        escape(&button.label)
    ));
    out
}

pub fn render_result(result: &ResultPanel) -> String {
    let hidden = if result.hidden { " hidden" } else { "" };
    let class = match &result.category {
        Some(category) => format!("classification {}", escape(category)),
        None => "classification".to_string(),
    };
    format!(
        r#"<div id="result" class="result{hidden}"><p class="{class}">{}</p><p class="recommendation">{}</p></div>"#,
        escape(&result.classification_text),
        escape(&result.recommendation)
    )
}

/// Also encodes braces so text can never form a `{{...}}` placeholder.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '{' => out.push_str("&#123;"),
            '}' => out.push_str("&#125;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Blood Pressure Tracker</title>
  <style>
    :root {
      --ink: #1f2a33;
      --muted: #6b7780;
      --card: #ffffff;
      --normal: #2e8b57;
      --elevated: #d4a017;
      --stage: #e0702b;
      --crisis: #c0392b;
    }

    body {
      margin: 0;
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      color: var(--ink);
      background: #f3f6f8;
      padding: 32px 18px;
    }

    .stats-grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat-card {
      background: var(--card);
      border-radius: 14px;
      padding: 16px;
    }

    .last-reading {
      color: var(--muted);
    }

    .hidden {
      display: none;
    }

    .classification.normal { color: var(--normal); }
    .classification.elevated { color: var(--elevated); }
    .classification.crisis,
    .classification.hypertensivecrisis { color: var(--crisis); }
    .classification.hypertensionstage { color: var(--stage); }

    .submit-btn[disabled] {
      opacity: 0.6;
      cursor: progress;
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>Blood Pressure Tracker</h1>
    {{STATS}}
    {{FORM}}
    {{RESULT}}
  </main>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Average, StatsSnapshot};
    use crate::page::ReadingForm;

    #[test]
    fn fresh_page_hides_result_and_has_no_grid() {
        let html = render_page(&Page::default());
        assert!(html.contains(r#"<form id="readingForm">"#));
        assert!(html.contains(r#"class="submit-btn">Save Readings</button>"#));
        assert!(html.contains(r#"<div id="result" class="result hidden">"#));
        assert!(html.contains(r#"<section class="stats-section"></section>"#));
        assert!(!html.contains("stats-grid"));
    }

    #[test]
    fn stat_cards_render_heading_and_two_lines() {
        let mut page = Page::new(ReadingForm::new(["systolic"]));
        page.stats.update_stats_display(&StatsSnapshot {
            seven_day_avg: Some(Average { systolic: 118, diastolic: 79, pulse: 72 }),
            ..StatsSnapshot::default()
        });

        let html = render_stats(&page.stats);
        assert!(html.contains(
            r#"<div class="stat-card" data-period="seven-day"><h3>7-Day Average</h3><p>118/79 mmHg</p><p>Pulse: 72 bpm</p></div>"#
        ));
        assert_eq!(html.matches(r#"class="stat-card""#).count(), 3);
    }

    #[test]
    fn text_is_escaped() {
        let mut page = Page::default();
        page.result.hidden = false;
        page.result.classification_text = "Error: <script>".to_string();
        page.result.category = Some("crisis".to_string());

        let html = render_result(&page.result);
        assert!(html.contains(r#"<p class="classification crisis">Error: &lt;script&gt;</p>"#));
        assert!(html.starts_with(r#"<div id="result" class="result">"#));
    }

    #[test]
    fn placeholder_text_in_values_stays_literal() {
        let mut page = Page::default();
        page.form.set("systolic1", "{{RESULT}}");
        page.stats.last_reading = Some(crate::models::Reading {
            id: 1,
            timestamp: None,
            systolic: 120,
            diastolic: 80,
            pulse: 70,
            classification: "{{FORM}}".to_string(),
        });

        let html = render_page(&page);
        assert!(html.contains(r#"name="systolic1" value="&#123;&#123;RESULT&#125;&#125;""#));
        assert!(html.contains("(&#123;&#123;FORM&#125;&#125;)</p>"));
        assert_eq!(html.matches(r#"id="result""#).count(), 1);
        assert_eq!(html.matches(r#"id="readingForm""#).count(), 1);
    }

    #[test]
    fn busy_button_is_disabled() {
        let button = SubmitButton {
            disabled: true,
            label: "Saving...".to_string(),
        };
        let html = render_form(&ReadingForm::new(["pulse1"]), &button);
        assert!(html.contains(r#"name="pulse1" value="""#));
        assert!(html.contains(r#"class="submit-btn" disabled>Saving...</button>"#));
    }
}
