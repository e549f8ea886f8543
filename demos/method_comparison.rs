use odestep::solvers::{solve, Method};
use odestep::StepConfig;

fn main() {
    // -----------------------------------------------------------------------
    // Problem: exponential growth y' = y, y(0) = 1, exact y = e^t
    // -----------------------------------------------------------------------
    let config = StepConfig::over_span(0.0, 2.0, 20).expect("non-zero step count");

    println!();
    println!("====================================================================");
    println!("  FIXED-STEP INTEGRATOR COMPARISON — y' = y, y(0) = 1");
    println!("====================================================================");
    println!();
    println!("  h = {}   steps = {}   t_end = {}", config.h, config.steps, config.t_end());
    println!();
    println!(
        "  {:<16}  {:>5}  {:>6}  {:>14}  {:>12}",
        "method", "order", "f/step", "y(t_end)", "abs error"
    );
    println!("  {}", "─".repeat(60));

    for method in Method::ALL {
        let traj = solve(method, |_, y: &f64| *y, 1.0, &config);
        let (t, y) = traj.last().expect("trajectory holds the initial sample");
        let error = (y - t.exp()).abs();
        println!(
            "  {:<16}  {:>5}  {:>6}  {:>14.10}  {:>12.3e}",
            method.name(),
            method.order(),
            method.evaluations_per_step(),
            y,
            error
        );
    }

    println!();
    println!("  exact e^{} = {:.10}", config.t_end(), config.t_end().exp());
    println!("====================================================================");
    println!();
}
