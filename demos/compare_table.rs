use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use log::{error, info};
use table_compare::{map_matrix_with, to_hex, Baseline, ColorMap, Options};

type Err = Box<dyn Error>;

fn escape(text: &str) -> String {
    let mut s = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            '\'' => s.push_str("&#39;"),
            c => s.push(c),
        }
    }
    s
}

/// CSS property of a DOM style attribute, e.g. `backgroundColor`.
fn css_property(attr: &str) -> String {
    let mut s = String::with_capacity(attr.len() + 2);
    for c in attr.chars() {
        if c.is_ascii_uppercase() {
            s.push('-');
            s.push(c.to_ascii_lowercase());
        } else { s.push(c) }
    }
    s
}

fn table(fh: &mut impl Write, headers: &[&str], data: &[Vec<f64>],
         map: &ColorMap, style_attribute: &str) -> Result<(), Err> {
    let prop = escape(&css_property(style_attribute));
    writeln!(fh, "<table class=\"table-compare-widget\">")?;
    writeln!(fh, "<thead><tr>")?;
    for (i, h) in headers.iter().enumerate() {
        writeln!(fh, "  <th col-number=\"{i}\">{}</th>", escape(h))?;
    }
    writeln!(fh, "</tr></thead>\n<tbody>")?;
    for (i, row) in data.iter().enumerate() {
        writeln!(fh, "<tr row-number=\"{i}\">")?;
        for (j, v) in row.iter().enumerate() {
            let c = map.get(i, j).map_or(String::new(), to_hex);
            let fg = match map.text_shade(i, j) {
                Some(t) if prop != "color" =>
                    format!("; color: {}", to_hex(t.color())),
                _ => String::new() };
            writeln!(fh, "  <td row-number=\"{i}\" col-number=\"{j}\" \
                          style=\"{prop}: {c}{fg}\">{v}</td>")?;
        }
        writeln!(fh, "</tr>")?;
    }
    writeln!(fh, "</tbody></table><br/>")?;
    Ok(())
}

fn section(fh: &mut impl Write, title: &str, headers: &[&str],
           data: &[Vec<f64>], baseline: &[Vec<Baseline>],
           opts: &str) -> Result<(), Err> {
    let opts: Options = serde_json::from_str(opts)?;
    writeln!(fh, "<h3>{}</h3>", escape(title))?;
    match map_matrix_with(data, baseline, &opts) {
        Ok(map) => table(fh, headers, data, &map, &opts.style_attribute)?,
        Err(e) => {
            error!("{title}: {e}");
            writeln!(fh, "<p>{}</p>", escape(&e.to_string()))?;
        }
    }
    Ok(())
}

fn main() -> Result<(), Err> {
    env_logger::init();
    let path = env::args().nth(1).unwrap_or("compare_table.html".into());
    let mut fh = BufWriter::new(File::create(&path)?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Table compare</title>\n\
                  </head>\n\
                  <body>")?;
    let headers = ["Q1", "Q2", "Q3 <est.>"];
    let data = vec![vec![5., 1., 3.], vec![2., 8., 4.5]];

    let points: Vec<Vec<Baseline>> =
        serde_json::from_str("[[3, 3, null], [3, 3, 4]]")?;
    section(&mut fh, "Binary", &headers, &data, &points, "{}")?;
    section(&mut fh, "Binary, named colors", &headers, &data, &points,
            r#"{"highColor": "salmon", "lowColor": "lightgreen",
                "nullColor": "silver", "dynamicTextColor": true}"#)?;

    let ranges: Vec<Vec<Baseline>> =
        serde_json::from_str("[[[3, 4], [3, 4], null], [[3, 2], [3, 2], [4, 1]]]")?;
    section(&mut fh, "Linear interpolation", &headers, &data, &ranges,
            r##"{"mode": "linear", "highColor": "#c00",
                 "lowColor": "#06c", "dynamicTextColor": true}"##)?;
    section(&mut fh, "Linear interpolation, text color", &headers, &data,
            &ranges, r#"{"mode": "linear", "styleAttribute": "color"}"#)?;
    section(&mut fh, "Linear interpolation, point baseline", &headers,
            &data, &points, r#"{"mode": "linear"}"#)?;

    writeln!(fh, "</body>\n\
                  </html>")?;
    info!("wrote {path}");
    Ok(())
}
