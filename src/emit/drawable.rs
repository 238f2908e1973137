//! `drawable.xml` - the drawable list shown by icon-pack pickers

use crate::store::Record;

pub fn render(records: &[Record]) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" ?>\n");
    out.push_str("<resources>\n");
    out.push_str("    <version>1</version>\n");
    out.push_str("    <category title=\"icons\"/>\n");
    for r in records {
        out.push_str(&format!("    <item drawable=\"{}\"/>\n", r.icon_name));
    }
    out.push_str("</resources>\n");
    out
}
