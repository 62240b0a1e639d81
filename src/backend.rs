use crate::config::ChartConfig;
use anyhow::Result;
use maud::{html, PreEscaped, DOCTYPE};
use std::io::{BufWriter, Write};

// The charting engine. Receives one configuration per rendered chart; how a
// chart is drawn, and how that fails, is entirely up to the implementation.
pub trait ChartBackend {
    fn generate(&mut self, config: &ChartConfig) -> Result<()>;
}

impl<B: ChartBackend + ?Sized> ChartBackend for &mut B {
    fn generate(&mut self, config: &ChartConfig) -> Result<()> {
        (**self).generate(config)
    }
}

impl<B: ChartBackend + ?Sized> ChartBackend for Box<B> {
    fn generate(&mut self, config: &ChartConfig) -> Result<()> {
        (**self).generate(config)
    }
}

// Keeps every configuration it is handed, in call order.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    configs: Vec<ChartConfig>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configs(&self) -> &[ChartConfig] {
        &self.configs
    }

    pub fn last(&self) -> Option<&ChartConfig> {
        self.configs.last()
    }

    pub fn into_configs(self) -> Vec<ChartConfig> {
        self.configs
    }
}

impl ChartBackend for RecordingBackend {
    fn generate(&mut self, config: &ChartConfig) -> Result<()> {
        self.configs.push(config.clone());
        Ok(())
    }
}

// Emits the engine call `c3.generate({...});` for inclusion in a page.
pub struct ScriptBackend<W: Write> {
    pub writer: BufWriter<W>,
}

impl<W: Write> ScriptBackend<W> {
    pub fn new(writeable: W) -> Self {
        Self {
            writer: BufWriter::new(writeable),
        }
    }
}

impl<W: Write> ChartBackend for ScriptBackend<W> {
    fn generate(&mut self, config: &ChartConfig) -> Result<()> {
        writeln!(self.writer, "{}", generate_call(config)?)?;
        self.writer.flush()?;
        Ok(())
    }
}

fn generate_call(config: &ChartConfig) -> Result<String> {
    let json = serde_json::to_string(config)?;
    // Keep a "</script>" inside string values from closing the element.
    Ok(format!("c3.generate({});", json.replace("</", "<\\/")))
}

pub struct PageConfig {
    pub title: String,
    pub d3_url: String,
    pub c3_url: String,
    pub c3_css_url: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: String::from("Measures"),
            d3_url: String::from("https://cdnjs.cloudflare.com/ajax/libs/d3/5.16.0/d3.min.js"),
            c3_url: String::from("https://cdnjs.cloudflare.com/ajax/libs/c3/0.7.20/c3.min.js"),
            c3_css_url: String::from(
                "https://cdnjs.cloudflare.com/ajax/libs/c3/0.7.20/c3.min.css",
            ),
        }
    }
}

// Writes a standalone HTML document per chart: engine assets, a container
// for `#id` mount points, and the generate call.
pub struct HtmlPageBackend<W: Write> {
    pub writer: BufWriter<W>,
    page: PageConfig,
}

impl<W: Write> HtmlPageBackend<W> {
    pub fn new(writeable: W, page: PageConfig) -> Self {
        Self {
            writer: BufWriter::new(writeable),
            page,
        }
    }
}

impl<W: Write> ChartBackend for HtmlPageBackend<W> {
    fn generate(&mut self, config: &ChartConfig) -> Result<()> {
        let call = generate_call(config)?;
        let page = &self.page;
        let markup = html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    title { (page.title) }
                    link rel="stylesheet" href=(page.c3_css_url);
                    script src=(page.d3_url) {}
                    script src=(page.c3_url) {}
                }
                body {
                    // Other selectors are expected to match something the caller provides.
                    @if let Some(id) = config.bindto.strip_prefix('#') {
                        div id=(id) {}
                    }
                    script { (PreEscaped(call)) }
                }
            }
        };
        writeln!(self.writer, "{}", markup.into_string())?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
pub mod tests {
    use super::{ChartBackend, HtmlPageBackend, PageConfig, RecordingBackend, ScriptBackend};
    use crate::{measure::Measure, render::build_config};

    fn sample_config() -> crate::config::ChartConfig {
        build_config(
            "#chart",
            &[Measure::new("2020-01-01T00:00:00Z", 300.0, 5.0)],
        )
    }

    #[test]
    fn test_recording_backend() {
        let mut backend = RecordingBackend::new();
        assert!(backend.last().is_none());
        backend.generate(&sample_config()).unwrap();
        backend.generate(&sample_config()).unwrap();
        assert_eq!(backend.configs().len(), 2);
        assert_eq!(backend.last().unwrap().bindto, "#chart");
    }

    #[test]
    fn test_script_backend() {
        let mut backend = ScriptBackend::new(Vec::new());
        backend.generate(&sample_config()).unwrap();
        let out = String::from_utf8(backend.writer.into_inner().unwrap()).unwrap();
        assert!(out.starts_with("c3.generate({"));
        assert!(out.ends_with("});\n"));

        let json = out
            .trim_start_matches("c3.generate(")
            .trim_end_matches(");\n");
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["bindto"], "#chart");
        assert_eq!(
            value["data"]["columns"],
            serde_json::json!([["x", 1_577_836_800_000_i64], ["Measure", 5.0]])
        );
    }

    #[test]
    fn test_script_backend_escapes_closing_tags() {
        let mut backend = ScriptBackend::new(Vec::new());
        let config = build_config("</script><b>", &[]);
        backend.generate(&config).unwrap();
        let out = String::from_utf8(backend.writer.into_inner().unwrap()).unwrap();
        assert!(!out.contains("</script>"));
        assert!(out.contains(r#""bindto":"<\/script><b>""#));
    }

    #[test]
    fn test_html_page_backend() {
        let mut backend = HtmlPageBackend::new(Vec::new(), PageConfig::default());
        backend.generate(&sample_config()).unwrap();
        let out = String::from_utf8(backend.writer.into_inner().unwrap()).unwrap();
        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("<title>Measures</title>"));
        assert!(out.contains("c3.min.js"));
        assert!(out.contains("<div id=\"chart\"></div>"));
        assert!(out.contains("c3.generate({\"bindto\":\"#chart\""));
    }

    #[test]
    fn test_html_page_backend_class_selector() {
        let mut backend = HtmlPageBackend::new(Vec::new(), PageConfig::default());
        backend.generate(&build_config(".chart", &[])).unwrap();
        let out = String::from_utf8(backend.writer.into_inner().unwrap()).unwrap();
        assert!(!out.contains("<div"));
    }

    #[test]
    fn test_html_page_backend_escapes_page_fields() {
        let mut backend = HtmlPageBackend::new(
            Vec::new(),
            PageConfig {
                title: String::from("cpu <util> & load"),
                ..Default::default()
            },
        );
        backend.generate(&build_config("#a\"b", &[])).unwrap();
        let out = String::from_utf8(backend.writer.into_inner().unwrap()).unwrap();
        assert!(out.contains("<title>cpu &lt;util&gt; &amp; load</title>"));
        assert!(out.contains("<div id=\"a&quot;b\"></div>"));
    }

    #[test]
    fn test_html_page_backend_script_not_closed_early() {
        let mut backend = HtmlPageBackend::new(Vec::new(), PageConfig::default());
        backend.generate(&build_config("</script>", &[])).unwrap();
        let out = String::from_utf8(backend.writer.into_inner().unwrap()).unwrap();
        assert_eq!(out.matches("</script>").count(), 3);
        assert!(out.contains(r#""bindto":"<\/script>""#));
    }
}
