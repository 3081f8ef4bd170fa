use tempors::{Error, TimeSeries};

fn aligned_pair() -> (TimeSeries<f64>, TimeSeries<f64>) {
    let a = TimeSeries::new(vec![1.0, 2.0, 3.0], Some(vec![0.0, 1.0, 2.0])).unwrap();
    let b = TimeSeries::new(vec![10.0, 20.0, 30.0], Some(vec![0.0, 1.0, 2.0])).unwrap();
    (a, b)
}

#[test]
fn test_elementwise_add() {
    let (a, b) = aligned_pair();
    let sum = a.checked_add(&b).unwrap();
    assert_eq!(sum.values().to_vec(), vec![11.0, 22.0, 33.0]);
    assert_eq!(sum.times().to_vec(), vec![0.0, 1.0, 2.0]);

    // operands are never mutated
    assert_eq!(a.values().to_vec(), vec![1.0, 2.0, 3.0]);
    assert_eq!(b.values().to_vec(), vec![10.0, 20.0, 30.0]);
}

#[test]
fn test_elementwise_sub() {
    let (a, b) = aligned_pair();
    let diff = b.checked_sub(&a).unwrap();
    assert_eq!(diff.values().to_vec(), vec![9.0, 18.0, 27.0]);
    assert_eq!(diff.times().to_vec(), vec![0.0, 1.0, 2.0]);
}

#[test]
fn test_elementwise_mul() {
    let (a, b) = aligned_pair();
    let prod = a.checked_mul(&b).unwrap();
    assert_eq!(prod.values().to_vec(), vec![10.0, 40.0, 90.0]);
}

#[test]
fn test_misaligned_domains_rejected() {
    let a = TimeSeries::new(vec![1, 2], Some(vec![0, 1])).unwrap();
    let b = TimeSeries::new(vec![1, 2], Some(vec![0, 2])).unwrap();
    assert!(matches!(a.checked_add(&b), Err(Error::DomainMismatch(_))));
    assert!(matches!(a.checked_sub(&b), Err(Error::DomainMismatch(_))));
    assert!(matches!(a.checked_mul(&b), Err(Error::DomainMismatch(_))));
    assert!(matches!(a.equals(&b), Err(Error::DomainMismatch(_))));
}

#[test]
fn test_length_mismatch_is_a_domain_mismatch() {
    let a = TimeSeries::new(vec![1, 2, 3], None).unwrap();
    let b = TimeSeries::new(vec![1, 2], None).unwrap();
    assert!(matches!(a.checked_add(&b), Err(Error::DomainMismatch(_))));
}

#[test]
fn test_mismatch_message_names_both_operands() {
    let a = TimeSeries::new(vec![1, 2], Some(vec![0, 1])).unwrap();
    let b = TimeSeries::new(vec![3, 4], Some(vec![0, 2])).unwrap();
    let msg = a.checked_add(&b).unwrap_err().to_string();
    assert!(msg.contains("TimeSeries[(0, 1), (1, 2)]"));
    assert!(msg.contains("TimeSeries[(0, 3), (2, 4)]"));
    assert!(msg.contains("must share the same time points"));
}

#[test]
fn test_equality() {
    let a = TimeSeries::new(vec![1, 2], Some(vec![0, 1])).unwrap();
    let b = TimeSeries::new(vec![1, 2], Some(vec![0, 1])).unwrap();
    assert!(a.equals(&b).unwrap());

    let c = TimeSeries::new(vec![1, 3], Some(vec![0, 1])).unwrap();
    assert!(!a.equals(&c).unwrap());
}

#[test]
fn test_negation() {
    let a = TimeSeries::new(vec![1.0, -2.0, 3.0], Some(vec![0.0, 1.0, 2.0])).unwrap();
    let neg = -&a;
    assert_eq!(neg.values().to_vec(), vec![-1.0, 2.0, -3.0]);
    assert_eq!(neg.times().to_vec(), vec![0.0, 1.0, 2.0]);

    // consuming form behaves the same
    let neg2 = -a.clone();
    assert!(neg.equals(&neg2).unwrap());
}

#[test]
fn test_positive_is_a_fresh_copy() {
    let a = TimeSeries::new(vec![1, 2], Some(vec![0, 1])).unwrap();
    let mut copy = a.positive();
    assert!(a.equals(&copy).unwrap());

    copy.set(0, 99).unwrap();
    assert_eq!(a.get(0).unwrap(), (0, 1));
    assert_eq!(copy.get(0).unwrap(), (0, 99));
}

#[test]
fn test_magnitude() {
    let a: TimeSeries<f64> = TimeSeries::new(vec![3.0, 4.0], Some(vec![0.0, 1.0])).unwrap();
    assert!((a.magnitude() - 5.0).abs() < 1e-12);
}

#[test]
fn test_truthiness_tracks_magnitude() {
    let zero = TimeSeries::new(vec![0.0, 0.0], None).unwrap();
    assert!(!zero.is_nonzero());

    let tiny = TimeSeries::new(vec![0.0, 1e-9], None).unwrap();
    assert!(tiny.is_nonzero());

    let empty: TimeSeries<f64> = TimeSeries::new(vec![], None).unwrap();
    assert!(!empty.is_nonzero());
}

#[test]
fn test_randomized_add_matches_pairwise_sum() {
    use rand::Rng;

    let mut rng = rand::rng();
    let n = 64;
    let times: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let xs: Vec<f64> = (0..n).map(|_| rng.random_range(-100.0..100.0)).collect();
    let ys: Vec<f64> = (0..n).map(|_| rng.random_range(-100.0..100.0)).collect();

    let a = TimeSeries::new(xs.clone(), Some(times.clone())).unwrap();
    let b = TimeSeries::new(ys.clone(), Some(times)).unwrap();
    let sum = a.checked_add(&b).unwrap();
    for i in 0..n {
        let (_, v) = sum.get(i as isize).unwrap();
        assert_eq!(v, xs[i] + ys[i]);
    }
}
