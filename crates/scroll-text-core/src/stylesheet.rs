use crate::config::ScrollTextConfig;

pub const FONT_IMPORT_URL: &str =
    "https://fonts.googleapis.com/css2?family=Roboto:wght@400;700&display=swap";

// Class names shared with the DOM builder.
pub const CONTAINER_CLASS: &str = "headline-container";
pub const HEADING_CLASS: &str = "headline";

/// Shadow-root stylesheet for a resolved configuration. The heading starts
/// fully visible; scroll updates take over from there.
pub fn stylesheet(config: &ScrollTextConfig) -> String {
    format!(
        r#"@import url('{import}');

:host {{
  width: 100vw;
  height: 100vh;
  margin: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: linear-gradient(90deg, {start}, {end});
  overflow: hidden;
}}

.{container} {{
  position: relative;
  text-align: {align};
  max-width: 80vw;
}}

.{heading} {{
  margin: 0;
  font-weight: 700;
  color: {color};
  text-transform: uppercase;
  display: inline-block;
  opacity: 1;
}}

.{heading} span {{
  display: inline-block;
  box-sizing: border-box;
  padding: 0 0.2vw;
  font-size: {size}vw;
  font-family: {family}, sans-serif;
  transition: opacity 0.2s ease, transform 0.2s ease;
}}
"#,
        import = FONT_IMPORT_URL,
        start = config.background_start,
        end = config.background_end,
        container = CONTAINER_CLASS,
        align = config.text_alignment,
        heading = HEADING_CLASS,
        color = config.font_color,
        size = config.font_size_vw,
        family = config.font_family,
    )
}
