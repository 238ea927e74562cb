use tracing::warn;

use crate::{FieldElement, PrimeField, ShamirError};

/// Calculate the lagrange basis coefficient for point `i` of the lagrange
/// polynomial defined by the x coordinates `xs`, at the value `x`:
///
/// ```text
///              ---     (x-xs[j])
///   l[i](x) =  | |   -------------
///            j != i  (xs[i]-xs[j])
/// ```
///
/// Fails with `DivisionByZero` if two x coordinates coincide.
pub fn lagrange_basis(
    field: &PrimeField,
    xs: &[FieldElement],
    i: usize,
    x: &FieldElement,
) -> Result<FieldElement, ShamirError> {
    let mut numerator = field.one();
    let mut denominator = field.one();
    for (j, xj) in xs.iter().enumerate() {
        if j == i {
            continue;
        }
        numerator = field.mul(&numerator, &field.sub(x, xj));
        denominator = field.mul(&denominator, &field.sub(&xs[i], xj));
    }
    field.div(&numerator, &denominator).inspect_err(|_| {
        warn!(point = i, "interpolation points share an x coordinate");
    })
}

/// Evaluates at `x` the unique polynomial of degree `xs.len() - 1` passing
/// through the points `(xs[i], ys[i])`.
pub fn interpolate(
    field: &PrimeField,
    xs: &[FieldElement],
    ys: &[FieldElement],
    x: &FieldElement,
) -> Result<FieldElement, ShamirError> {
    if xs.is_empty() || xs.len() != ys.len() {
        return Err(ShamirError::ShareCountMismatch { expected: xs.len(), actual: ys.len() });
    }
    let mut result = field.zero();
    for (i, y) in ys.iter().enumerate() {
        let basis = lagrange_basis(field, xs, i, x)?;
        result = field.add(&result, &field.mul(y, &basis));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    fn field() -> PrimeField {
        PrimeField::new(BigUint::from(257u32)).unwrap()
    }

    fn elements(f: &PrimeField, values: &[u64]) -> Vec<FieldElement> {
        values.iter().map(|v| f.from_u64(*v)).collect()
    }

    #[test]
    fn test_basis_sums_to_one() {
        let f = field();
        let xs = elements(&f, &[1, 4, 9, 200]);
        let mut sum = f.zero();
        for i in 0..xs.len() {
            sum = f.add(&sum, &lagrange_basis(&f, &xs, i, &f.zero()).unwrap());
        }
        assert_eq!(sum, f.one());
    }

    #[test]
    fn test_basis_is_indicator_at_nodes() {
        let f = field();
        let xs = elements(&f, &[2, 3, 5]);
        for i in 0..3 {
            for j in 0..3 {
                let l = lagrange_basis(&f, &xs, i, &xs[j]).unwrap();
                assert_eq!(l, if i == j { f.one() } else { f.zero() });
            }
        }
    }

    #[test]
    fn test_interpolate_line() {
        let f = field();
        // y = 5x + 7
        let xs = elements(&f, &[1, 2]);
        let ys = elements(&f, &[12, 17]);
        assert_eq!(interpolate(&f, &xs, &ys, &f.zero()).unwrap(), f.from_u64(7));
        assert_eq!(interpolate(&f, &xs, &ys, &f.from_u64(10)).unwrap(), f.from_u64(57));
    }

    #[test]
    fn test_interpolate_single_point() {
        let f = field();
        let xs = elements(&f, &[3]);
        let ys = elements(&f, &[99]);
        assert_eq!(interpolate(&f, &xs, &ys, &f.zero()).unwrap(), f.from_u64(99));
    }

    #[test]
    fn test_duplicate_x_divides_by_zero() {
        let f = field();
        let xs = elements(&f, &[1, 1, 3]);
        let ys = elements(&f, &[4, 4, 6]);
        assert!(matches!(
            interpolate(&f, &xs, &ys, &f.zero()),
            Err(ShamirError::DivisionByZero)
        ));
    }

    #[test]
    fn test_length_mismatch() {
        let f = field();
        assert!(matches!(
            interpolate(&f, &elements(&f, &[1, 2]), &elements(&f, &[1]), &f.zero()),
            Err(ShamirError::ShareCountMismatch { expected: 2, actual: 1 })
        ));
        assert!(interpolate(&f, &[], &[], &f.zero()).is_err());
    }
}
