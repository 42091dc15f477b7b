use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex};

use primes::{
    product, CalculationState, Calculator, FactorizationCalculator, HasErrorLog, HasValue,
    PrimeFactor, PrimesError, ProgressReporting, SieveCalculator,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn is_prime(n: u64) -> bool {
    n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

fn factorize(value: u64) -> Vec<PrimeFactor> {
    let mut calculator = FactorizationCalculator::new();
    calculator.set_value(value).unwrap();
    calculator.calculate().unwrap();
    calculator.collect_prime_factors().unwrap()
}

fn sieve(value: u64) -> Vec<u64> {
    let mut calculator = SieveCalculator::new();
    calculator.set_value(value).unwrap();
    calculator.calculate().unwrap();
    calculator.collect_primes().unwrap()
}

/// Shared list of reported fractions
fn recording_callback() -> (Arc<Mutex<Vec<f32>>>, impl FnMut(f32, &mut bool) + Send + 'static) {
    let reports = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&reports);
    (reports, move |fraction: f32, _abort: &mut bool| {
        sink.lock().unwrap().push(fraction)
    })
}

#[test]
fn factorize_known_scenarios() {
    assert_eq!(
        factorize(9 * 17 * 17),
        vec![PrimeFactor::new(3, 2), PrimeFactor::new(17, 2)]
    );
    assert_eq!(factorize(1), vec![]);
    assert_eq!(factorize(0), vec![]);
    assert_eq!(factorize(2), vec![PrimeFactor::new(2, 1)]);
}

#[test]
fn sieve_known_scenarios() {
    assert_eq!(sieve(10), vec![2, 3, 5, 7]);
    assert_eq!(sieve(2), vec![2]);
    assert_eq!(sieve(1), vec![]);
    assert_eq!(sieve(100).len(), 25);
}

#[test]
fn factorization_product_equals_value() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let value = rng.gen_range(2..100_000u64);
        let factors = factorize(value);
        assert_eq!(product(&factors), Some(value), "value {value}");
        assert!(factors.iter().all(|f| is_prime(f.prime) && f.multiplicity >= 1));
        assert!(factors.windows(2).all(|w| w[0].prime < w[1].prime));
    }
}

#[test]
fn sieve_lists_exactly_the_primes() {
    let mut rng = StdRng::seed_from_u64(0xc0ffee);
    for _ in 0..50 {
        let value = rng.gen_range(0..5_000u64);
        let expected: Vec<u64> = (0..=value).filter(|&n| is_prime(n)).collect();
        assert_eq!(sieve(value), expected, "value {value}");
    }
}

#[test]
fn results_before_calculate_are_unavailable() {
    let factorization = FactorizationCalculator::new();
    assert_eq!(
        factorization.get_prime_factors(&mut []),
        Err(PrimesError::NoResultAvailable)
    );
    let sieve = SieveCalculator::new();
    assert_eq!(sieve.get_primes(&mut []), Err(PrimesError::NoResultAvailable));
    assert_eq!(sieve.state(), CalculationState::Uninitialized);
}

#[test]
fn zero_capacity_reports_size_without_writing() {
    let mut calculator = SieveCalculator::new();
    calculator.set_value(30).unwrap();
    calculator.calculate().unwrap();

    let mut empty: [u64; 0] = [];
    assert_eq!(calculator.get_primes(&mut empty), Ok(10));

    let mut short = [0u64; 9];
    assert_eq!(calculator.get_primes(&mut short), Ok(10));
    assert_eq!(short, [0; 9]);

    let mut exact = [0u64; 10];
    assert_eq!(calculator.get_primes(&mut exact), Ok(10));
    assert_eq!(exact, [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
}

#[test]
fn factorization_abort_after_half_leaves_no_result() {
    let mut calculator = FactorizationCalculator::new();
    calculator.set_value(2601).unwrap();
    calculator.set_progress_callback(|progress, abort| *abort = progress > 0.5);

    assert_eq!(calculator.calculate(), Err(PrimesError::CalculationAborted));
    assert_eq!(calculator.state(), CalculationState::Aborted);
    assert_eq!(
        calculator.get_prime_factors(&mut []),
        Err(PrimesError::NoResultAvailable)
    );
    assert_eq!(
        calculator.last_error_message().as_deref(),
        Some("No result available")
    );
}

#[test]
fn abort_discards_previous_result() {
    let mut calculator = SieveCalculator::new();
    calculator.set_value(10_000).unwrap();
    calculator.calculate().unwrap();
    assert_eq!(calculator.get_primes(&mut []), Ok(1229));

    calculator.set_progress_callback(|progress, abort| *abort = progress >= 0.25);
    assert_eq!(calculator.calculate(), Err(PrimesError::CalculationAborted));
    assert_eq!(calculator.primes(), Err(PrimesError::NoResultAvailable));

    // Cancelling at the very first report still leaves nothing behind
    calculator.set_progress_callback(|_, abort| *abort = true);
    assert_eq!(calculator.calculate(), Err(PrimesError::CalculationAborted));
    assert_eq!(calculator.primes(), Err(PrimesError::NoResultAvailable));
}

#[test]
fn rerun_replaces_instead_of_accumulating() {
    let mut calculator = FactorizationCalculator::new();
    calculator.set_value(12).unwrap();
    calculator.calculate().unwrap();
    calculator.calculate().unwrap();
    assert_eq!(
        calculator.collect_prime_factors(),
        Ok(vec![PrimeFactor::new(2, 2), PrimeFactor::new(3, 1)])
    );

    calculator.set_value(49).unwrap();
    assert_eq!(calculator.state(), CalculationState::ValueSet);
    calculator.calculate().unwrap();
    assert_eq!(calculator.prime_factors(), Ok(&[PrimeFactor::new(7, 2)][..]));
}

#[test]
fn progress_fractions_are_ordered_and_bounded() {
    let (reports, callback) = recording_callback();
    let mut calculator = SieveCalculator::new();
    calculator.set_progress_callback(callback);
    calculator.set_value(1_000_000).unwrap();
    calculator.calculate().unwrap();

    let reports = reports.lock().unwrap();
    // bound 1000 in 20 steps of 50
    assert_eq!(reports.len(), 20);
    assert!(reports.windows(2).all(|w| w[0] < w[1]));
    assert!(reports.iter().all(|f| (0.0..=1.0).contains(f)));

    let (reports, callback) = recording_callback();
    let mut calculator = FactorizationCalculator::new();
    calculator.set_progress_callback(callback);
    calculator.set_value(2 * 2 * 3 * 1009).unwrap();
    calculator.calculate().unwrap();

    let reports = reports.lock().unwrap();
    assert_eq!(reports.first(), Some(&0.0));
    assert!(reports.windows(2).all(|w| w[0] <= w[1]));
    assert!(reports.iter().all(|f| (0.0..1.0).contains(f)));
}

#[test]
fn callback_can_be_cleared() {
    let (reports, callback) = recording_callback();
    let mut calculator = FactorizationCalculator::new();
    calculator.set_progress_callback(callback);
    assert!(calculator.has_progress_callback());
    calculator.clear_progress_callback();
    assert!(!calculator.has_progress_callback());

    calculator.set_value(360).unwrap();
    calculator.calculate().unwrap();
    assert!(reports.lock().unwrap().is_empty());
}

#[test]
fn calculate_without_value_fails() {
    let mut calculator = FactorizationCalculator::new();
    assert_eq!(calculator.calculate(), Err(PrimesError::ValueNotSet));
    assert_eq!(calculator.value(), None);
}

#[test]
fn panicking_callback_leaves_calculator_computing() {
    let mut calculator = SieveCalculator::new();
    calculator.set_value(10_000).unwrap();
    calculator.set_progress_callback(|_, _| panic!("callback failure"));

    let outcome = catch_unwind(AssertUnwindSafe(|| calculator.calculate()));
    assert!(outcome.is_err());
    assert_eq!(calculator.state(), CalculationState::Computing);

    // New values and reruns are refused until reset
    assert_eq!(
        calculator.set_value(10),
        Err(PrimesError::CalculationInProgress)
    );
    assert_eq!(
        calculator.calculate(),
        Err(PrimesError::CalculationInProgress)
    );

    calculator.reset();
    calculator.clear_progress_callback();
    calculator.set_value(10).unwrap();
    calculator.calculate().unwrap();
    assert_eq!(calculator.collect_primes(), Ok(vec![2, 3, 5, 7]));
}

#[test]
fn calculators_are_send() {
    fn assert_send<T: Send>() {}
    assert_send::<FactorizationCalculator>();
    assert_send::<SieveCalculator>();
}
