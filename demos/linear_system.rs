// ============================================================================
// Linear System Example
// ============================================================================

use numeric_kernel::prelude::*;

fn print_solution(label: &str, solution: &[f64]) {
    let rendered: Vec<String> = solution
        .iter()
        .map(|&v| match fixed(v, 4) {
            Ok(f) => f.to_string(),
            Err(e) => format!("<{}>", e),
        })
        .collect();
    println!("  {}: [{}]", label, rendered.join(", "));
}

fn main() -> Result<(), NumericError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(true)
        .with_line_number(true)
        .init();

    println!("=== Numeric Kernel Example ===\n");

    // Unique solution: 2x + y - z = 8, -3x - y + 2z = -11, -2x + y + 2z = -3
    let system = [
        [2.0, 1.0, -1.0, 8.0],
        [-3.0, -1.0, 2.0, -11.0],
        [-2.0, 1.0, 2.0, -3.0],
    ];
    println!("Coefficients:\n{}\n", Matrix::from_array(&system)?);

    let exact = LinearSolverBuilder::new().laplace().with_max_order(8).build()?;
    let fast = LinearSolverBuilder::new().lu().build()?;
    let augmented = Matrix::from_array(&system)?;

    println!("Unique system");
    print_solution(exact.algorithm_name(), &exact.solve(&augmented)?);
    print_solution(fast.algorithm_name(), &fast.solve(&augmented)?);

    // Singular systems report through the values
    println!("\nDependent system (x + 2y = 3, 4x + 8y = 12)");
    print_solution("Laplace", &solve(&[[1.0, 2.0, 3.0], [4.0, 8.0, 12.0]])?);

    println!("\nInconsistent system (x + 2y = 3, x + 2y = 0)");
    print_solution("Laplace", &solve(&[[1.0, 2.0, 3.0], [1.0, 2.0, 0.0]])?);

    // Snap a solution component to a rational grid
    let x = solve(&[[3.0, 1.0, 1.0], [1.0, 2.0, 0.0]])?;
    let sixtieths = Fraction::new(1, 60)?;
    println!("\nOn a 1/60 grid");
    for (i, v) in x.iter().enumerate() {
        println!("  x{} = {} ~ {}", i, v, Fraction::round(*v, sixtieths)?);
    }

    // Orders above the cap are rejected
    let capped = create_from_config(SolverConfig::bounded(2))?;
    match capped.solve(&augmented) {
        Ok(_) => println!("\nunexpected solution"),
        Err(e) => println!("\nBounded solver: {}", e),
    }

    Ok(())
}
