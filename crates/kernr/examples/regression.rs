//! Least-Squares Regression Examples
//!
//! This example demonstrates the regression kernel:
//! - Fitting an affine model by the closed-form normal equations
//! - Reusing the immutable fitted model for predictions
//! - Two-decimal prediction formatting at the presentation boundary
//! - Singularity reported as an error instead of NaN

use kernr::prelude::*;

fn main() -> Result<(), KernelError> {
    println!("{}", "=".repeat(80));
    println!("kernr Least-Squares Regression Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_fit_and_predict()?;
    example_2_diagnostics()?;
    example_3_singularity()?;

    Ok(())
}

/// Example 1: Fit and Predict
/// Fits y = 2 + 3*x1 + 0.5*x2 from exact data and predicts on new inputs
fn example_1_fit_and_predict() -> Result<(), KernelError> {
    println!("Example 1: Fit and Predict");
    println!("{}", "-".repeat(80));

    let features = vec![
        vec![1.0, 2.0],
        vec![2.0, 1.0],
        vec![3.0, 4.0],
        vec![4.0, 3.0],
        vec![5.0, 5.0],
    ];
    let labels: Vec<f64> = features
        .iter()
        .map(|row| 2.0 + 3.0 * row[0] + 0.5 * row[1])
        .collect();

    let fit = LeastSquares::new().build()?.fit(&features, &labels)?;

    let queries = vec![vec![6.0, 2.0], vec![0.0, 10.0]];
    for (query, prediction) in queries.iter().zip(fit.predict_many(&queries)?) {
        println!("{:?} -> {:.2}", query, prediction);
    }

    println!();
    Ok(())
}

/// Example 2: Diagnostics
/// Requests residuals and fit-quality metrics alongside the model
fn example_2_diagnostics() -> Result<(), KernelError> {
    println!("Example 2: Diagnostics");
    println!("{}", "-".repeat(80));

    let features: Vec<Vec<f64>> = (0..8).map(|i| vec![i as f64]).collect();
    let labels: Vec<f64> = features
        .iter()
        .enumerate()
        .map(|(i, row)| 1.5 + 2.0 * row[0] + if i % 2 == 0 { 0.1 } else { -0.1 })
        .collect();

    let fit = LeastSquares::new()
        .return_diagnostics()
        .return_residuals()
        .build()?
        .fit(&features, &labels)?;

    println!("{}", fit);

    println!();
    Ok(())
}

/// Example 3: Singularity
/// Collinear feature columns fail with a named cause, never NaN
fn example_3_singularity() -> Result<(), KernelError> {
    println!("Example 3: Singularity");
    println!("{}", "-".repeat(80));

    let features = vec![vec![1.0, 2.0], vec![2.0, 4.0], vec![3.0, 6.0]];
    let labels = vec![1.0, 2.0, 3.0];

    match LeastSquares::new().build()?.fit(&features, &labels) {
        Ok(_) => println!("unexpected: fit succeeded"),
        Err(e) => println!("fit failed: {}", e),
    }

    println!();
    Ok(())
}
