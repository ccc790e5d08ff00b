use metatree::Numeric;

#[test]
fn integer_arithmetic_stays_integral() {
    let a = Numeric::Int(10);
    let b = Numeric::Int(5);
    assert_eq!(a.add(&b).unwrap(), Numeric::Int(15));
    assert_eq!(a.sub(&b).unwrap(), Numeric::Int(5));
    assert_eq!(a.mul(&b).unwrap(), Numeric::Int(50));
    assert_eq!(a.div(&b).unwrap(), Numeric::Int(2));
}

#[test]
fn overflow_promotes_to_big() {
    let result = Numeric::Int(i64::MAX).add(&Numeric::Int(1)).unwrap();
    assert!(matches!(result, Numeric::Big(_)), "got {result:?}");

    let result = Numeric::Int(i64::MIN).sub(&Numeric::Int(1)).unwrap();
    assert!(matches!(result, Numeric::Big(_)), "got {result:?}");
}

#[test]
fn division_overflow_promotes_to_big() {
    use num_bigint::BigInt;
    // i64::MIN / -1 is the one integer quotient out of machine range
    let result = Numeric::Int(i64::MIN).div(&Numeric::Int(-1)).unwrap();
    assert_eq!(result, Numeric::Big(-BigInt::from(i64::MIN)));
}

#[test]
fn big_results_fold_back_into_machine_range() {
    // MAX + 1 - 1 lands back in i64
    let big = Numeric::Int(i64::MAX).add(&Numeric::Int(1)).unwrap();
    assert_eq!(big.sub(&Numeric::Int(1)).unwrap(), Numeric::Int(i64::MAX));
}

#[test]
fn uneven_division_is_exact() {
    let five = Numeric::Int(5);
    let two = Numeric::Int(2);
    assert_eq!(five.div(&two).unwrap(), Numeric::Ratio(5, 2));
}

#[test]
fn ratios_reduce_on_construction() {
    assert_eq!(Numeric::make_ratio(6, 4).unwrap(), Numeric::Ratio(3, 2));
    assert_eq!(Numeric::make_ratio(6, 2).unwrap(), Numeric::Int(3));
    assert_eq!(Numeric::make_ratio(1, -2).unwrap(), Numeric::Ratio(-1, 2));
    assert!(Numeric::make_ratio(1, 0).is_err());
    // Sign normalization at the edge of machine range promotes
    {
        use num_bigint::BigInt;
        assert_eq!(
            Numeric::make_ratio(i64::MIN, -1).unwrap(),
            Numeric::Big(-BigInt::from(i64::MIN))
        );
        assert_eq!(
            Numeric::make_ratio(i64::MIN, 2).unwrap(),
            Numeric::Int(i64::MIN / 2)
        );
    }
}

#[test]
fn ratio_arithmetic() {
    let half = Numeric::make_ratio(1, 2).unwrap();
    let third = Numeric::make_ratio(1, 3).unwrap();
    assert_eq!(half.add(&third).unwrap(), Numeric::Ratio(5, 6));
    // 1/2 * 2 collapses back to an integer
    assert_eq!(half.mul(&Numeric::Int(2)).unwrap(), Numeric::Int(1));
}

#[test]
fn floats_contaminate() {
    let result = Numeric::Int(1).add(&Numeric::Float(0.5)).unwrap();
    assert_eq!(result, Numeric::Float(1.5));
}

#[test]
fn division_by_zero_is_an_error() {
    assert!(Numeric::Int(1).div(&Numeric::Int(0)).is_err());
    assert!(Numeric::make_ratio(1, 2).unwrap().div(&Numeric::Int(0)).is_err());
}

#[test]
fn cross_representation_equality() {
    use num_bigint::BigInt;
    assert_eq!(Numeric::Int(2), Numeric::Big(BigInt::from(2)));
    assert_eq!(Numeric::Float(2.0), Numeric::Int(2));
    assert_ne!(Numeric::Ratio(1, 2), Numeric::Int(0));
}

#[test]
fn ordering_spans_representations() {
    assert!(Numeric::Ratio(1, 2) < Numeric::Int(1));
    assert!(Numeric::Float(0.9) < Numeric::Int(1));
    assert!(Numeric::Int(3) > Numeric::Ratio(5, 2));
}
