//! `appmap.xml` - activity class to icon name map

use crate::store::Record;

pub fn render(records: &[Record]) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" ?>\n");
    out.push_str("<appmap>\n");
    for r in records {
        out.push_str(&format!(
            "    <item class=\"{}\" name=\"{}\"/>\n",
            r.launcher_activity, r.icon_name
        ));
    }
    out.push_str("</appmap>\n");
    out
}
