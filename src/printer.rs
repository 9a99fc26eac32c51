use std::fmt::{self, Write};

use smartstring::alias::String;

use crate::{domains::rational::Rational, tensors::matrix::Matrix};

/// Options that control how coefficients are rendered.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Render fractions as `\frac{n}{d}` and wrap function arguments in `\left(` `\right)`.
    pub latex: bool,
}

impl PrintOptions {
    /// Print output suitable for LaTeX and Desmos.
    pub const fn latex() -> PrintOptions {
        PrintOptions { latex: true }
    }

    /// Print fractions as `n/d`.
    pub const fn plain() -> PrintOptions {
        PrintOptions { latex: false }
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::plain()
    }
}

/// Renders a matrix one row per line. Every cell is right-aligned to the
/// widest cell of its column.
pub struct MatrixPrinter<'a> {
    pub matrix: &'a Matrix,
}

impl<'a> MatrixPrinter<'a> {
    pub fn new(matrix: &'a Matrix) -> MatrixPrinter<'a> {
        MatrixPrinter { matrix }
    }
}

impl<'a> fmt::Display for MatrixPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cells: Vec<String> = self
            .matrix
            .data
            .iter()
            .map(|c| {
                let mut s = String::new();
                write!(s, "{}", c).map(|_| s)
            })
            .collect::<Result<_, _>>()?;

        let ncols = self.matrix.ncols();
        let mut widths = vec![0; ncols];
        for (i, c) in cells.iter().enumerate() {
            let w = &mut widths[i % ncols];
            *w = (*w).max(c.chars().count());
        }

        // a matrix without columns still prints one empty row per row
        for r in 0..self.matrix.nrows() {
            let row = &cells[r * ncols..(r + 1) * ncols];
            f.write_char('[')?;
            for (i, (c, width)) in row.iter().zip(&widths).enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{:>width$}", c.as_str(), width = *width)?;
            }
            f.write_str("]\n")?;
        }

        Ok(())
    }
}

/// Renders a coefficient list, where index `k` holds the coefficient of `x^k`,
/// as a function definition such as `f(x)=1-\frac{1}{2}x^2`.
pub struct PolynomialPrinter<'a> {
    pub coefficients: &'a [Rational],
    pub variable: String,
    pub function: String,
    pub opts: PrintOptions,
}

impl<'a> PolynomialPrinter<'a> {
    pub fn new(
        coefficients: &'a [Rational],
        variable: &str,
        function: &str,
        opts: PrintOptions,
    ) -> PolynomialPrinter<'a> {
        PolynomialPrinter {
            coefficients,
            variable: variable.into(),
            function: function.into(),
            opts,
        }
    }

    fn fmt_name(&self, name: &str, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.opts.latex {
            return f.write_str(name);
        }

        let mut chars = name.chars();
        match chars.next() {
            Some(c) if chars.as_str().is_empty() => f.write_char(c),
            Some(c) => write!(f, "{}_{{{}}}", c, chars.as_str()),
            None => Ok(()),
        }
    }

    /// Write the absolute value of a finite coefficient.
    fn fmt_coefficient(
        &self,
        numerator: u64,
        denominator: i64,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        if denominator == 1 {
            write!(f, "{}", numerator)
        } else if self.opts.latex {
            write!(f, "\\frac{{{}}}{{{}}}", numerator, denominator)
        } else {
            write!(f, "{}/{}", numerator, denominator)
        }
    }
}

impl<'a> fmt::Display for PolynomialPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_name(&self.function, f)?;
        f.write_str(if self.opts.latex { "\\left(" } else { "(" })?;
        self.fmt_name(&self.variable, f)?;
        f.write_str(if self.opts.latex { "\\right)=" } else { ")=" })?;

        let mut first = true;
        for (power, c) in self.coefficients.iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            let c = c.reduce().map_err(|_| fmt::Error)?;
            if c.is_negative() {
                f.write_char('-')?;
            } else if !first {
                f.write_char('+')?;
            }
            first = false;

            let numerator = c.numerator().unsigned_abs();
            let written = if c.is_nan() {
                f.write_str("NaN")?;
                true
            } else if power == 0 || numerator != 1 || c.denominator() != 1 {
                self.fmt_coefficient(numerator, c.denominator(), f)?;
                true
            } else {
                false
            };

            if power > 0 {
                // plain text needs an explicit product
                if written && !self.opts.latex {
                    f.write_char('*')?;
                }
                self.fmt_name(&self.variable, f)?;
                if power > 9 && self.opts.latex {
                    write!(f, "^{{{}}}", power)?;
                } else if power > 1 {
                    write!(f, "^{}", power)?;
                }
            }
        }

        if first {
            f.write_char('0')?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::{
        domains::rational::Rational,
        printer::{PolynomialPrinter, PrintOptions},
        tensors::matrix::Matrix,
    };

    #[test]
    fn matrix() {
        let m = Matrix::from_nested_vec(vec![
            vec![Rational::from(1), Rational::from((-1, 2))],
            vec![Rational::from(10), Rational::from(3)],
        ])
        .unwrap();

        assert_eq!(m.to_string(), "[ 1, -1/2]\n[10,    3]\n");

        let mut m = Matrix::new(1, 2);
        m[(0, 0)] = Rational::from((2, 4));
        m[(0, 1)] = Rational::nan();
        assert_eq!(m.to_string(), "[2/4, NaN]\n");

        assert_eq!(Matrix::new(0, 0).to_string(), "");
        assert_eq!(Matrix::new(3, 0).to_string(), "[]\n[]\n[]\n");
    }

    #[test]
    fn polynomial() {
        let c = [
            Rational::from(3),
            Rational::from((1, 2)),
            Rational::from((-1, 4)),
            Rational::from((1, 8)),
            Rational::zero(),
        ];

        assert_eq!(
            PolynomialPrinter::new(&c, "x", "g", PrintOptions::latex()).to_string(),
            "g\\left(x\\right)=3+\\frac{1}{2}x-\\frac{1}{4}x^2+\\frac{1}{8}x^3"
        );
        assert_eq!(
            PolynomialPrinter::new(&c, "x", "g", PrintOptions::plain()).to_string(),
            "g(x)=3+1/2*x-1/4*x^2+1/8*x^3"
        );
        assert_eq!(
            PolynomialPrinter::new(&c, "x1", "fit", PrintOptions::latex()).to_string(),
            "f_{it}\\left(x_{1}\\right)=3+\\frac{1}{2}x_{1}-\\frac{1}{4}x_{1}^2+\\frac{1}{8}x_{1}^3"
        );
    }

    #[test]
    fn polynomial_signs() {
        let c = [
            Rational::zero(),
            Rational::from(-1),
            Rational::from((6, 3)),
            Rational::one(),
        ];
        assert_eq!(
            PolynomialPrinter::new(&c, "x", "f", PrintOptions::latex()).to_string(),
            "f\\left(x\\right)=-x+2x^2+x^3"
        );
        assert_eq!(
            PolynomialPrinter::new(&c, "x", "f", PrintOptions::plain()).to_string(),
            "f(x)=-x+2*x^2+x^3"
        );

        let c = [Rational::from(-5)];
        assert_eq!(
            PolynomialPrinter::new(&c, "t", "h", PrintOptions::plain()).to_string(),
            "h(t)=-5"
        );

        let c = [Rational::zero(), Rational::from((0, 7))];
        assert_eq!(
            PolynomialPrinter::new(&c, "x", "f", PrintOptions::plain()).to_string(),
            "f(x)=0"
        );

        let mut c = vec![Rational::zero(); 12];
        c[11] = Rational::one();
        assert_eq!(
            PolynomialPrinter::new(&c, "x", "f", PrintOptions::latex()).to_string(),
            "f\\left(x\\right)=x^{11}"
        );
    }

    #[test]
    fn polynomial_nan() {
        let c = [Rational::one(), Rational::new(-3, 0).unwrap()];
        assert_eq!(
            PolynomialPrinter::new(&c, "x", "f", PrintOptions::plain()).to_string(),
            "f(x)=1-NaN*x"
        );
    }
}
