use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let rendered = inferaflow_theme::run().context("failed to render the InferaFlow theme")?;
    print!("{}", rendered.stylesheet);
    println!("{}", rendered.framework_theme);
    Ok(())
}
