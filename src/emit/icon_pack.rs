//! `icon_pack.xml` - string arrays consumed by the icon-pack app
//!
//! The file starts with template content (preview and filter arrays),
//! normally read from `templates/icon_pack_template.xml`, with a built-in
//! default for installs that ship no template.

use crate::store::Record;

pub const DEFAULT_TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8"?><!--suppress CheckTagEmptyBody -->
<resources xmlns:tools="http://schemas.android.com/tools" tools:ignore="ExtraTranslation">

    <string-array name="icons_preview">
        <item>dialer</item>
        <item>contacts</item>
        <item>messaging</item>
        <item>fossify_camera</item>
        <item>breezy_weather</item>
        <item>fossify_gallery</item>
        <item>calculator</item>
        <item>pyroscape</item>
        <item>settings</item>
    </string-array>

    <string-array name="icon_filters">
        <item>all</item>
    </string-array>

    <!-- The following content is automatically generated, please do not modify. -->
"#;

pub fn render(template: &str, records: &[Record]) -> String {
    let mut out = String::from(template);
    out.push_str("    <string-array name=\"all\">\n");
    for r in records {
        out.push_str(&format!("        <item>{}</item>\n", r.icon_name));
    }
    out.push_str("    </string-array>\n");
    out.push_str("</resources>");
    out
}
