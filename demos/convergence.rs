use odestep::analysis::ConvergenceStudy;
use odestep::io::json;
use odestep::solvers::Method;

fn main() -> odestep::Result<()> {
    // dy/dt = -y on [0, 1], exact y = e^-t
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for method in Method::ALL {
        let decay = |_: f64, y: &f64| -y;
        let study = ConvergenceStudy::run(method, decay, 1.0, |t| (-t).exp(), 0.0, 1.0, 10, 5)?;
        let orders: Vec<String> = study
            .observed_orders()
            .iter()
            .map(|p| format!("{:.2}", p))
            .collect();
        eprintln!("{:<16} observed order: {}", method.name(), orders.join(" "));
        json::write_study(&mut out, &study)?;
    }

    Ok(())
}
