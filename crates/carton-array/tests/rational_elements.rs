//! The array holding a non-trivial value type.

use carton_array::DynamicArray;
use carton_rational::Rational;

fn halves(n: i32) -> Vec<Rational> {
    (1..=n).map(|d| Rational::new(1, d).unwrap()).collect()
}

#[test]
fn stores_and_displays_rationals() {
    let mut array = DynamicArray::from_slice(&halves(3)).unwrap();
    assert_eq!(array.to_string(), "1 / 1; 1 / 2; 1 / 3; ");

    array.push_back(Rational::new(94, -64).unwrap()).unwrap();
    assert_eq!(array[3].to_string(), "-47 / 32");

    let sum = array
        .data()
        .iter()
        .fold(Rational::zero(), |acc, q| acc + *q);
    assert_eq!(sum, Rational::new(35, 96).unwrap());
}

#[test]
fn default_construction_yields_zeros() {
    let array = DynamicArray::<Rational<i16>>::with_len(5).unwrap();
    assert!(array.data().iter().all(Rational::is_zero));
    assert_eq!(array.capacity(), 10);
}

#[test]
fn sort_in_place_through_mutable_view() {
    let mut array = DynamicArray::from_slice(&halves(6)).unwrap();
    array.insert(2, Rational::new(-3, 4).unwrap()).unwrap();
    array.data_mut().sort();
    assert_eq!(array[0], Rational::new(-3, 4).unwrap());
    assert_eq!(array[6], Rational::one());
    assert!(array.data().windows(2).all(|w| w[0] <= w[1]));
}
