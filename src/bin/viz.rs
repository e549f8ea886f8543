use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use nalgebra::Vector2;

use odestep::solvers::{solve, verlet, Method};
use odestep::{StepConfig, Trajectory};

/// Harmonic oscillator x'' = -x from x = 1, v = 0, as (x, v) phase state.
fn oscillator(_t: f64, s: &Vector2<f64>) -> Vector2<f64> {
    Vector2::new(s.y, -s.x)
}

struct Run {
    label: String,
    times: Vec<f64>,
    positions: Vec<f64>,
}

impl Run {
    fn from_phase(label: &str, traj: &Trajectory<Vector2<f64>>) -> Self {
        Self {
            label: label.to_string(),
            times: traj.times.clone(),
            positions: traj.states.iter().map(|s| s.x).collect(),
        }
    }
}

fn main() -> eframe::Result {
    let config = StepConfig::over_span(0.0, 40.0, 200).expect("non-zero step count");

    let mut runs: Vec<Run> = Method::ALL
        .iter()
        .map(|&m| {
            let traj = solve(m, oscillator, Vector2::new(1.0, 0.0), &config);
            Run::from_phase(m.name(), &traj)
        })
        .collect();

    let second = verlet(|_, x: &f64, _: &f64| -x, 1.0, 0.0, config.t0, config.h, config.steps);
    runs.push(Run {
        label: "verlet".into(),
        times: second.times,
        positions: second.positions,
    });

    let app = IntegratorViz { runs, config };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Fixed-step integrators", options, Box::new(|_| Ok(Box::new(app))))
}

struct IntegratorViz {
    runs: Vec<Run>,
    config: StepConfig,
}

impl eframe::App for IntegratorViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Harmonic oscillator x'' = -x");
            ui.label(format!(
                "h = {:.3}  |  steps = {}  |  span = [{:.1}, {:.1}]",
                self.config.h,
                self.config.steps,
                self.config.t0,
                self.config.t_end(),
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_h = available.y / 2.0 - 8.0;

            // Position vs Time
            ui.label("Position x(t)");
            Plot::new("position")
                .height(half_h)
                .x_axis_label("Time")
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    let exact: PlotPoints = self.runs[0]
                        .times
                        .iter()
                        .map(|&t| [t, t.cos()])
                        .collect();
                    plot_ui.line(Line::new("exact", exact));
                    for run in &self.runs {
                        let points: PlotPoints = run
                            .times
                            .iter()
                            .zip(&run.positions)
                            .map(|(&t, &x)| [t, x])
                            .collect();
                        plot_ui.line(Line::new(run.label.clone(), points));
                    }
                });

            // Absolute error vs Time
            ui.label("|x(t) - cos t|");
            Plot::new("error")
                .height(half_h)
                .x_axis_label("Time")
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    for run in &self.runs {
                        let points: PlotPoints = run
                            .times
                            .iter()
                            .zip(&run.positions)
                            .map(|(&t, &x)| [t, (x - t.cos()).abs()])
                            .collect();
                        plot_ui.line(Line::new(run.label.clone(), points));
                    }
                });
        });
    }
}
