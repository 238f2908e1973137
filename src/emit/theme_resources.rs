//! `theme_resources.xml` - launcher theme resource list
//!
//! Template-prefixed like `icon_pack.xml`; the override lives at
//! `templates/theme_resources_template.xml`.

use crate::store::Record;

pub const DEFAULT_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Theme version="1">
    <Label value="Blueprint" />
    <Wallpaper image="wallpaper_01" />
    <LockScreenWallpaper image="wallpaper_02" />
    <ThemePreview image="preview1" />
    <ThemePreviewWork image="preview1" />
    <ThemePreviewMenu image="preview1" />
    <DockMenuAppIcon selector="drawer" />

    <!-- The following content is automatically generated, please do not modify. -->
"#;

pub fn render(template: &str, records: &[Record]) -> String {
    let mut out = String::from(template);
    for r in records {
        out.push_str(&format!(
            "    <AppIcon name=\"{}/{}\" image=\"{}\"/>\n",
            r.package_name, r.launcher_activity, r.icon_name
        ));
    }
    out.push_str("</Theme>");
    out
}
