// Reference scenario dy/dx = x² + y, y(0) = 1, solved with fixed-step RK4.
// Prints the step listing to stderr and a JSON figure to stdout:
//   {"title":..., "x_label":"x", "y_label":"y", "grid":true, "x":[...], "y":[...]}
// Optional positional args override the defaults: x0 y0 h n
//   cargo run --example plot_rk4 --features serde -- 0 1 0.05 200
// Set RUST_LOG=debug (or trace) to see the solver log.

use rungekutta::ode::{step_count, Rk4Settings};

fn parse_arg(args: &[String], i: usize, default: f64) -> f64 {
    match args.get(i) {
        Some(s) => s.parse().unwrap_or_else(|e| {
            eprintln!("argument {}: cannot parse {s:?}: {e}", i + 1);
            std::process::exit(2);
        }),
        None => default,
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let defaults = Rk4Settings::<f64>::default();

    let steps = match step_count(parse_arg(&args, 3, defaults.steps as f64)) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    let settings = Rk4Settings {
        x0: parse_arg(&args, 0, defaults.x0),
        y0: parse_arg(&args, 1, defaults.y0),
        h: parse_arg(&args, 2, defaults.h),
        steps,
    };
    log::info!("solving with {settings:?}");

    let traj = settings.solve(|x, y| x * x + y);

    eprint!("{}", traj.report());
    println!(
        "{}",
        serde_json::to_string(&traj.figure()).expect("figure serialization failed")
    );
}
