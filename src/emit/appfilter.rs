//! `appfilter.xml` - the launcher component filter list

use crate::store::Record;

pub fn render(records: &[Record]) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<resources>\n");
    out.push('\n');
    for r in records {
        out.push_str("    <item\n");
        out.push_str(&format!(
            "        component=\"ComponentInfo{{{}/{}}}\"\n",
            r.package_name, r.launcher_activity
        ));
        out.push_str(&format!("        drawable=\"{}\" />\n", r.icon_name));
        out.push_str("\t\n");
    }
    out.push('\n');
    out.push_str("</resources>");
    out
}
