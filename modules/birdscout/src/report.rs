//! Markdown rendering of the aggregate, in the original report format:
//! dates newest first, species alphabetically, one bullet per
//! (location, source) with its count.

use std::collections::HashMap;

use birdscout_common::types::NameEntry;

use crate::aggregate::Aggregate;

pub const NO_NEW_SPECIES: &str = "无新增鸟种记录。";

pub fn render(
    aggregate: &Aggregate,
    names: &HashMap<String, NameEntry>,
    num_days: u32,
) -> String {
    let mut lines = vec![format!("# 最近{num_days}天观测到但未收录的鸟种：")];

    if aggregate.is_empty() {
        lines.push(NO_NEW_SPECIES.to_string());
        return lines.join("\n");
    }

    for (date_key, species) in aggregate.by_date.iter().rev() {
        lines.push(format!("\n## {date_key}"));
        for (sci, entry) in species {
            let name = names.get(sci);
            let chinese = name.map(|n| n.chinese.as_str()).unwrap_or("");
            // Japanese falls back to the name the site displayed
            let japanese = name
                .map(|n| n.japanese.as_str())
                .filter(|s| !s.is_empty())
                .unwrap_or(&entry.observed_name);

            lines.push(format!("\n### {chinese}，{japanese}，{sci} ({})", entry.total));
            for ((location, source), loc) in &entry.locations {
                lines.push(format!("- {location} ({}, {source})", loc.count));
            }
        }
    }

    lines.join("\n")
}
