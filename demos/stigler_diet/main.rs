// The Stigler diet problem: the cheapest daily selection of foods that meets
// nine nutrient minimums.

mod nutrition_data;

use kortools::{create_solver, ResultStatus, SolverId, Variable};
use nutrition_data::{FOODS, NUTRIENTS};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut foods: Vec<Variable> = Vec::with_capacity(FOODS.len());
    let solver = create_solver(SolverId::Glop, |s| {
        // Dollars spent on each food per day
        foods = FOODS
            .iter()
            .map(|food| s.make_num_var(0.0, f64::INFINITY, food.name))
            .collect();

        for (i, &(nutrient, minimum)) in NUTRIENTS.iter().enumerate() {
            let ct = s.make_constraint(minimum, f64::INFINITY, nutrient);
            for (food, &var) in FOODS.iter().zip(&foods) {
                s.set_coefficient(ct, var, food.nutrients[i]);
            }
        }

        println!("Number of variables = {}", s.num_variables());
        println!("Number of constraints = {}", s.num_constraints());

        let objective = s.objective();
        for &var in &foods {
            objective.set_coefficient(var, 1.0);
        }
        objective.set_minimization();
    });

    let solver = match solver {
        Ok(solver) => solver,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let status = solver.solve();
    if status != ResultStatus::Optimal {
        eprintln!("The problem does not have an optimal solution!");
        if status == ResultStatus::Feasible {
            eprintln!("A potentially suboptimal solution was found.");
        } else {
            eprintln!("The solver could not solve the problem.");
            return ExitCode::FAILURE;
        }
    }

    let mut nutrients_result = [0.0; NUTRIENTS.len()];
    println!("\nAnnual Foods:");
    for (food, &var) in FOODS.iter().zip(&foods) {
        let daily = solver.value(var);
        if daily > 0.0 {
            let units = daily * 100.0 / food.price_cents;
            println!(
                "{}: ${:.2} ({:.2} x {} per day)",
                food.name,
                365.0 * daily,
                units,
                food.unit
            );
            for (total, amount) in nutrients_result.iter_mut().zip(food.nutrients) {
                *total += amount * daily;
            }
        }
    }
    println!("\nOptimal annual price: ${:.4}", 365.0 * solver.objective().value());

    println!("\nNutrients per day:");
    for (&(nutrient, minimum), total) in NUTRIENTS.iter().zip(nutrients_result) {
        println!("{nutrient}: {total:.2} (min {minimum})");
    }

    println!("\nAdvanced usage:");
    println!("Problem solved in {} milliseconds", solver.wall_time().as_millis());
    println!("Problem solved in {} iterations", solver.iterations());

    ExitCode::SUCCESS
}
