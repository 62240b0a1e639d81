use std::io;

use tschart::{
    backend::{HtmlPageBackend, PageConfig},
    parse_measures, Renderer,
};

// Prints a standalone HTML page charting a few hours of measures.
fn main() -> anyhow::Result<()> {
    let measures = parse_measures(
        r#"[
            ["2017-01-01T12:00:00+00:00", 3600.0, 69.0],
            ["2017-01-01T13:00:00+00:00", 3600.0, 42.3],
            ["2017-01-01T14:00:00+00:00", 3600.0, 4.0],
            ["2017-01-01T15:00:00+00:00", 3600.0, 44.0]
        ]"#,
    )?;

    let backend = HtmlPageBackend::new(
        io::stdout(),
        PageConfig {
            title: String::from("cpu_util"),
            ..Default::default()
        },
    );
    let mut renderer = Renderer::new(backend);
    renderer.render("#chart", &measures)?;
    Ok(())
}
