use nalgebra::Vector2;

use odestep::io::csv;
use odestep::solvers::verlet;

fn main() -> odestep::Result<()> {
    // Drag-free projectile, 45 degree launch at 50 m/s
    let g = Vector2::new(0.0, -9.80665);
    let speed = 50.0_f64;
    let angle = 45.0_f64.to_radians();
    let v0 = Vector2::new(speed * angle.cos(), speed * angle.sin());

    let gravity = |_: f64, _: &Vector2<f64>, _: &Vector2<f64>| g;
    let traj = verlet(gravity, Vector2::zeros(), v0, 0.0, 0.05, 100);

    let apex = traj
        .positions
        .iter()
        .map(|p| p.y)
        .fold(f64::NEG_INFINITY, f64::max);
    eprintln!("apex height: {:.2} m (exact {:.2} m)", apex, v0.y * v0.y / (2.0 * -g.y));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    csv::write_second_order(&mut out, &traj)
}
