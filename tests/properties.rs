use super::*;

fn samples() -> Vec<f64> {
    let mut samples = Vec::new();
    let mut num = 1.7e-40;
    while num < 1e40 {
        samples.push(num);
        num *= 3.1;
    }
    samples.extend([1.0, 999.0, 1000.0, 1e-24, 1e24, 0.3, 161261.0]);
    samples
}

#[test]
fn scaling_round_trips() {
    for num in samples() {
        let scaled = scale(num);
        let restored = scaled.value * scaled.prefix.threshold;
        assert!(
            ((restored - num) / num).abs() < 1e-12,
            "{num} scaled to {} {} restores as {restored}",
            scaled.value,
            scaled.symbol()
        );
    }
}

#[test]
fn unit_range_has_empty_prefix() {
    for num in [1.0, 1.5, 10.0, 123.456, 999.0, 999.999] {
        assert_eq!(format_si(num, "W").unwrap().unit, "W");
        assert_eq!(format_si(-num, "W").unwrap().unit, "W");
    }
}

#[test]
fn sign_symmetry() {
    for num in samples() {
        let positive = format_si(num, "W").unwrap();
        let negative = format_si(-num, "W").unwrap();
        assert_eq!(negative.value, -positive.value, "{num}");
        assert_eq!(negative.unit, positive.unit, "{num}");
    }
}

#[test]
fn scaled_values_stay_below_a_thousand_within_the_table() {
    for num in samples()
        .into_iter()
        .filter(|num| (1e-24..1e27).contains(num))
    {
        let value = format_si(num, "").unwrap().value;
        assert!((1.0..1000.0).contains(&value), "{num} scaled to {value}");
    }
}

#[test]
fn zero_identities() {
    let expected = Si::new(0.0, "W");
    for zero in [
        format_si(0, "W"),
        format_si("0", "W"),
        format_si(-0.0, "W"),
        format_si("-0", "W"),
    ] {
        pretty_assert_eq!(zero.unwrap(), expected);
    }
}

#[test]
fn deterministic() {
    for num in samples() {
        assert_eq!(
            format_precision_si(num, "B", 4, 2).unwrap(),
            format_precision_si(num, "B", 4, 2).unwrap()
        );
    }
}

#[test]
fn exponential_only_above_threshold() {
    for num in samples() {
        let si = format_si(num, "").unwrap();
        let fixed = format_fixed_si(num, "", 2, 1).unwrap();
        assert_eq!(
            fixed.value.contains('e'),
            si.value.abs() > 1000.0,
            "{num} rendered as {}",
            fixed.value
        );
    }
}

#[test]
fn formatting_is_thread_safe() {
    std::thread::scope(|scope| {
        let handles = (0..4)
            .map(|offset| {
                scope.spawn(move || {
                    (0..100)
                        .map(|step| format_si(f64::from(offset * 100 + step) * 1e3, "W"))
                        .filter(Result::is_ok)
                        .count()
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 100);
        }
    });
}
