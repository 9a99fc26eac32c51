use ratmat::{
    domains::rational::Rational,
    printer::{PolynomialPrinter, PrintOptions},
    solve::find_polynomial,
    tensors::matrix::{EliminationMode, Matrix},
};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

fn fit() {
    let samples = [
        [Rational::from(-3), Rational::from((-33, 8))],
        [Rational::from(-1), Rational::from((17, 8))],
        [Rational::from(0), Rational::from(3)],
        [Rational::from(1), Rational::from((27, 8))],
        [Rational::from(2), Rational::from(4)],
        [Rational::from(3), Rational::from((45, 8))],
        [Rational::from(4), Rational::from(9)],
    ];

    let c = find_polynomial(&samples).unwrap();

    println!(
        "> Coefficients = [{}]",
        c.iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!(
        "\t{}",
        PolynomialPrinter::new(&c, "x", "g", PrintOptions::latex())
    );
}

fn reduce() {
    let a = Matrix::from_f64(&[[1., -1., -1.], [2., -1., -1.], [2., 2., 1.]]).unwrap();
    let b = Matrix::from_f64(&[[4.], [5.], [-2.]]).unwrap();

    let (r, rhs) = a
        .reduced_row_echelon(Some(&b), EliminationMode::Permissive)
        .unwrap();

    println!("> Reduced row-echelon form of\n{}=\n{}", a, r);
    println!("> Solution =\n{}", rhs.unwrap());
    println!("> Determinant = {}", a.determinant().unwrap());
    println!("> Inverse =\n{}", a.inverse().unwrap());
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("RATMAT_LOG"))
        .init();

    fit();
    reduce();
}
