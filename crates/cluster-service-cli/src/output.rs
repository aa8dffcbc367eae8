use cluster_service_core::{Report, ReportItem};

/// One line per item plus a status summary.
pub fn render_table(report: &Report) -> String {
    if report.is_empty() {
        return "no matching resources\n".to_string();
    }

    let status = |item: &ReportItem| match item.action_status.as_str() {
        "" => "-",
        s => s,
    };

    let status_width = report.iter().map(|i| status(i).len()).max().unwrap_or(0).max(6);
    let name_width = report.iter().map(|i| i.name.len()).max().unwrap_or(0).max(4);

    let mut out = format!(
        "{:<6}  {:<status_width$}  {:<name_width$}  ID\n",
        "ACTION", "STATUS", "NAME"
    );
    for item in report {
        out.push_str(&format!(
            "{:<6}  {:<status_width$}  {:<name_width$}  {}\n",
            item.action.as_str(),
            status(item),
            item.name,
            item.id
        ));
    }

    let summary: Vec<String> = report
        .count_by_status()
        .into_iter()
        .map(|(s, n)| match s.as_str() {
            "" => format!("{n} pending"),
            label => format!("{n} {label}"),
        })
        .collect();
    out.push_str(&format!("\n{} item(s): {}\n", report.len(), summary.join(", ")));
    out
}
