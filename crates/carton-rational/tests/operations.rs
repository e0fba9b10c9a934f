//! Operation and comparison sequence over `i8` components, where every
//! result must stay within the narrow type.

use carton_rational::{Rational, RationalError};

fn q(num: i8, den: i8) -> Rational<i8> {
    Rational::new(num, den).unwrap()
}

#[test]
fn operations_sequence() {
    let mut n = q(94, -64);
    assert_eq!(n.to_string(), "-47 / 32");

    n -= Rational::one();
    assert_eq!(n.to_string(), "-79 / 32");
    assert_eq!((-n).to_string(), "79 / 32");

    assert_eq!((q(3, 1) + q(1, 1)).to_string(), "4 / 1");
    assert_eq!((q(3, 2) - q(8, 4)).to_string(), "-1 / 2");
    assert_eq!((q(1, 2) * q(6, 1)).to_string(), "3 / 1");
    assert_eq!((q(1, 2) / q(6, 1)).to_string(), "1 / 12");
}

#[test]
fn comparisons_sequence() {
    assert!(q(1, 2) != q(6, 1));
    assert!(q(1, 2) == q(2, 4));
    assert!(q(1, 2) > q(1, 4));
    assert!(q(-1, -2) >= q(1, 98));
    assert!(q(1, 3) >= q(1, 98));
    assert!(q(1, 3) <= q(1, 3));
}

#[test]
fn invalid_rational() {
    let err = Rational::<i8>::new(1, 0).unwrap_err();
    assert!(matches!(err, RationalError::InvalidArgument { .. }));
    assert_eq!(err.to_string(), "invalid argument: denominator can't be 0");
}

#[test]
fn compound_assignment() {
    let mut acc = Rational::<i32>::zero();
    for den in 1..=6 {
        acc += Rational::new(1, den).unwrap();
    }
    assert_eq!(acc, Rational::new(49, 20).unwrap());
    acc *= Rational::new(20, 49).unwrap();
    assert_eq!(acc, Rational::one());
    acc /= Rational::from(4);
    assert_eq!(acc.to_f64(), 0.25);
}
