/// Evaluates `sum(coefficients[i] * x^i)`, accumulating each term
/// against a running power of `x`.
pub fn evaluate<const N: usize>(coefficients: &[f64; N], x: f64) -> f64 {
    let mut power = 1.0;
    let mut sum = 0.0;

    for coefficient in coefficients {
        sum += power * coefficient;
        power *= x;
    }

    sum
}
