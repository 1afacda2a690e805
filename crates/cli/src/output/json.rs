use emaildefense_domain::Report;

pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

pub fn print_json(report: &Report) -> anyhow::Result<()> {
    println!("{}", render_json(report)?);
    Ok(())
}
