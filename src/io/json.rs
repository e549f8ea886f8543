use std::io::Write;

use crate::analysis::ConvergenceStudy;
use crate::error::Result;

/// Write a convergence study as JSON to a writer.
pub fn write_study<W: Write>(writer: &mut W, study: &ConvergenceStudy) -> Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"method\": {{")?;
    writeln!(writer, "    \"name\": \"{}\",", study.method.name())?;
    writeln!(writer, "    \"order\": {},", study.method.order())?;
    writeln!(
        writer,
        "    \"evaluations_per_step\": {}",
        study.method.evaluations_per_step()
    )?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"span\": [{}, {}],", number(study.t0), number(study.t_end))?;

    writeln!(writer, "  \"levels\": [")?;
    for (i, row) in study.rows.iter().enumerate() {
        let sep = if i + 1 < study.rows.len() { "," } else { "" };
        writeln!(
            writer,
            "    {{ \"h\": {}, \"steps\": {}, \"error\": {} }}{}",
            number(row.h),
            row.steps,
            number(row.error),
            sep
        )?;
    }
    writeln!(writer, "  ],")?;

    let orders: Vec<String> = study.observed_orders().into_iter().map(number).collect();
    writeln!(writer, "  \"observed_orders\": [{}]", orders.join(", "))?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write a convergence study JSON to a file.
pub fn write_study_file(path: &str, study: &ConvergenceStudy) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_study(&mut file, study)
}

/// JSON has no NaN/inf literals.
fn number(x: f64) -> String {
    if x.is_finite() {
        format!("{:e}", x)
    } else {
        "null".to_string()
    }
}
