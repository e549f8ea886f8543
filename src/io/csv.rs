use std::io::Write;

use crate::error::{Error, Result};
use crate::state::State;
use crate::trajectory::{SecondOrderTrajectory, Trajectory};

/// Write a first-order trajectory as CSV.
///
/// Columns: time, y0, y1, ... (one per state component). Every row must
/// have the same component count as the first.
pub fn write_trajectory<W: Write, S: State>(writer: &mut W, trajectory: &Trajectory<S>) -> Result<()> {
    let width = trajectory.states.first().map_or(0, |s| s.components().len());

    let mut header = String::from("time");
    for i in 0..width {
        header.push_str(&format!(",y{}", i));
    }
    writeln!(writer, "{}", header)?;

    for (row, (t, y)) in trajectory.iter().enumerate() {
        let comps = y.components();
        check_width(row, width, comps.len())?;
        write_row(writer, t, &comps)?;
    }

    Ok(())
}

/// Write a second-order trajectory as CSV.
///
/// Columns: time, x0, x1, ..., v0, v1, ...
pub fn write_second_order<W: Write, S: State>(
    writer: &mut W,
    trajectory: &SecondOrderTrajectory<S>,
) -> Result<()> {
    let (nx, nv) = match trajectory.initial() {
        Some((_, y, v)) => (y.components().len(), v.components().len()),
        None => (0, 0),
    };

    let mut header = String::from("time");
    for i in 0..nx {
        header.push_str(&format!(",x{}", i));
    }
    for i in 0..nv {
        header.push_str(&format!(",v{}", i));
    }
    writeln!(writer, "{}", header)?;

    for (row, (t, y, v)) in trajectory.iter().enumerate() {
        let mut comps = y.components();
        check_width(row, nx, comps.len())?;
        let vel = v.components();
        check_width(row, nv, vel.len())?;
        comps.extend(vel);
        write_row(writer, t, &comps)?;
    }

    Ok(())
}

/// Write a first-order trajectory to a CSV file at the given path.
pub fn write_trajectory_file<S: State>(path: &str, trajectory: &Trajectory<S>) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, trajectory)
}

/// Write a second-order trajectory to a CSV file at the given path.
pub fn write_second_order_file<S: State>(
    path: &str,
    trajectory: &SecondOrderTrajectory<S>,
) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_second_order(&mut file, trajectory)
}

fn check_width(row: usize, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(Error::RaggedState {
            row,
            expected,
            found,
        });
    }
    Ok(())
}

fn write_row<W: Write>(writer: &mut W, t: f64, comps: &[f64]) -> Result<()> {
    write!(writer, "{}", t)?;
    for c in comps {
        write!(writer, ",{}", c)?;
    }
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::{euler, verlet};
    use nalgebra::Vector2;

    #[test]
    fn csv_output_has_header_and_rows() {
        let traj = euler(|_, y: &f64| *y, 1.0, 0.0, 0.1, 2);
        let mut buf = Vec::new();
        write_trajectory(&mut buf, &traj).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "time,y0");
        assert_eq!(lines.len(), 4); // header + 3 samples
        assert_eq!(lines[1], "0,1");
        assert_eq!(lines[2], "0.1,1.1");
    }

    #[test]
    fn second_order_columns() {
        let traj = verlet(
            |_, _: &Vector2<f64>, _: &Vector2<f64>| Vector2::new(0.0, -1.0),
            Vector2::zeros(),
            Vector2::new(1.0, 0.0),
            0.0,
            1.0,
            1,
        );
        let mut buf = Vec::new();
        write_second_order(&mut buf, &traj).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "time,x0,x1,v0,v1");
        assert_eq!(lines[2], "1,1,-0.5,1,-1");
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let traj = Trajectory {
            times: vec![0.0, 1.0],
            states: vec![vec![1.0, 2.0], vec![3.0]],
        };
        let mut buf = Vec::new();
        let err = write_trajectory(&mut buf, &traj).unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedState {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }
}
