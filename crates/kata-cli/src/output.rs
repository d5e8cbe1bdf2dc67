//! Output formatting module

use kata_app::report::{render_report, DrillReport};
use kata_types::{OutputFormat, Result};

pub fn output_report(output_format: OutputFormat, report: &DrillReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(report)?;
        println!("{}", content);
    } else {
        print!("{}", render_report(report));
    }

    Ok(())
}
