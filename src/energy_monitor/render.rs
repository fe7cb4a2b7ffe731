use std::fmt::{ Result as FmtResult, Write };
use crate::prelude::*;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn text(out: &mut String, pos: &TextPosition, dy: f32, class: &str, content: &str) -> FmtResult {
    if content.is_empty() { return Ok(()) }

    write!(
        out,
        r#"<text class="{class}" x="{}" y="{}" text-anchor="{}" font-size="{}">{}</text>"#,
        fmt_num(pos.x),
        fmt_num(pos.y + dy),
        pos.anchor.as_str(),
        fmt_num(pos.font_size),
        escape(content),
    )
}

fn section(out: &mut String, view: &SectionView) -> FmtResult {
    let name = view.name;
    let color = view.color.to_hex();

    write!(out, r#"<g class="section {name}">"#)?;
    write!(out, r#"<path class="outline" d="{}" fill="none" stroke="{color}"/>"#, view.outline_path)?;
    write!(out, r#"<path class="value" d="{}" fill="{color}"/>"#, view.value_path)?;
    write!(out, r#"<polygon class="flow {}" points="{}" fill="url(#flow-{name})"/>"#, view.flow_state, view.flow_points)?;

    let square = &view.square;
    write!(
        out,
        r#"<g class="square" transform="translate({},{})">"#,
        fmt_num(view.square_position.x),
        fmt_num(view.square_position.y),
    )?;
    write!(
        out,
        r#"<image href="{}" x="{}" y="{}" width="{len}" height="{len}"/>"#,
        escape(view.image_path),
        fmt_num(square.image.x),
        fmt_num(square.image.y),
        len = fmt_num(square.image.length),
    )?;
    text(out, &square.value_ratio, 0.0, "label", view.label)?;
    text(out, &square.value_text, 0.0, "value", &view.value_text)?;
    // storage puts its state of charge on the line below the power
    text(out, &square.value_text, square.value_text.font_size, "secondary", &view.secondary_text)?;
    out.push_str("</g></g>");
    Ok(())
}

fn write_svg(out: &mut String, chart: &EnergyMonitorChart) -> FmtResult {
    let size = chart.size();
    let views = chart.views();

    write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        fmt_num(-size.x / 2.0),
        fmt_num(-size.y / 2.0),
        fmt_num(size.x),
        fmt_num(size.y),
    )?;

    out.push_str("<defs>");
    for view in views.iter() {
        let g = view.gradient;
        let color = view.color.to_hex();
        write!(
            out,
            r#"<linearGradient id="flow-{}" x1="{}" y1="{}" x2="{}" y2="{}"><stop offset="0%" stop-color="{color}" stop-opacity="0.1"/><stop offset="100%" stop-color="{color}" stop-opacity="0.8"/></linearGradient>"#,
            view.name, g.x1, g.y1, g.x2, g.y2,
        )?;
    }
    out.push_str("</defs>");

    for view in views.iter() {
        section(out, view)?;
    }

    out.push_str("</svg>");
    Ok(())
}

/// draw the whole chart as a standalone svg document, centered on the middle of the circle
pub fn render_svg(chart: &EnergyMonitorChart) -> String {
    let mut out = String::new();
    if let Err(e) = write_svg(&mut out, chart) {
        error!("error rendering energy monitor: {e}");
    }
    out
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn writes_into_existing_buffer() {
        let mut chart = EnergyMonitorChart::default();
        chart.on_resize(Vector2::new(300.0, 300.0));

        let mut out = String::from("<!-- energy -->");
        assert!(write_svg(&mut out, &chart).is_ok());
        assert_eq!(out, format!("<!-- energy -->{}", render_svg(&chart)));
    }

    #[test]
    fn escapes_text() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn renders_every_section() {
        let mut chart = EnergyMonitorChart::default();
        chart.on_resize(Vector2::new(300.0, 200.0));
        chart.on_sample_json(r#"{
            "production": { "activePower": 800 },
            "storage": { "soc": 42, "dischargeActivePower": 300 },
            "system": { "inPower": 1100, "outPower": 1100 }
        }"#);

        let svg = render_svg(&chart);
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="-150 -100 300 200">"#));
        assert!(svg.ends_with("</svg>"));

        for name in ["production", "consumption", "grid", "storage"] {
            assert!(svg.contains(&format!(r#"<g class="section {name}">"#)), "{name}");
            assert!(svg.contains(&format!(r#"<linearGradient id="flow-{name}""#)), "{name}");
        }

        assert!(svg.contains(">800 W</text>"));
        assert!(svg.contains(">42 %</text>"));
        assert!(svg.contains(">Storage discharge</text>"));
        assert!(svg.contains(r#"href="assets/img/storage_60.png""#));
        assert!(svg.contains(&chart.production().value_path().to_owned()));
    }

    #[test]
    fn empty_labels_are_skipped() {
        let mut chart = EnergyMonitorChart::default();
        chart.on_resize(Vector2::new(300.0, 300.0));
        chart.on_new_sample(None);

        let svg = render_svg(&chart);
        assert!(!svg.contains(r#"<text class="value""#));
        assert!(!svg.contains(r#"<text class="secondary""#));
        // labels are still there
        assert!(svg.contains(">Production</text>"));
        assert!(svg.contains(&format!(r#"points="{HIDDEN_POINTS}""#)));
    }
}
