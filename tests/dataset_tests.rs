// Integration tests for dataset presets

use sortstep::constants::{VALUE_MAX, VALUE_MIN};
use sortstep::dataset::{DatasetGenerator, Preset};
use std::collections::BTreeSet;

#[test]
fn test_every_preset_respects_size_and_range() {
    let mut generator = DatasetGenerator::seeded(17);
    for preset in Preset::ALL {
        for size in [0, 1, 10, 60, 200] {
            let values = generator.generate(size, preset);
            assert_eq!(values.len(), size, "{}", preset);
            assert!(
                values.iter().all(|v| (VALUE_MIN..=VALUE_MAX).contains(v)),
                "{} produced {:?}",
                preset,
                values
            );
        }
    }
}

#[test]
fn test_random_values_are_whole_numbers() {
    let values = DatasetGenerator::seeded(3).generate(200, Preset::Random);
    assert!(values.iter().all(|v| v.fract() == 0.0));
}

#[test]
fn test_reversed_is_strictly_descending() {
    let values = DatasetGenerator::seeded(0).generate(50, Preset::Reversed);
    assert!(values.windows(2).all(|w| w[0] > w[1]));
    assert_eq!(values[49], VALUE_MIN);
    assert!(values[0] < VALUE_MAX);
}

#[test]
fn test_nearly_sorted_is_a_permutation_of_the_ramp() {
    let mut generator = DatasetGenerator::seeded(21);
    let ramp: Vec<f64> = {
        let mut reversed = generator.generate(80, Preset::Reversed);
        reversed.reverse();
        reversed
    };

    let mut values = generator.generate(80, Preset::NearlySorted);
    let displaced = values.iter().zip(&ramp).filter(|(a, b)| a != b).count();
    // At most two positions move per swap, and there are size/5 swaps
    assert!(displaced <= 2 * 16);

    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(values, ramp);
}

#[test]
fn test_low_cardinality_uses_five_levels() {
    let values = DatasetGenerator::seeded(99).generate(500, Preset::LowCardinality);
    let levels: BTreeSet<u64> = values.iter().map(|&v| v as u64).collect();
    assert_eq!(levels, BTreeSet::from([20, 40, 60, 80, 100]));
    assert!(values.iter().all(|v| v.fract() == 0.0));
}

#[test]
fn test_same_seed_same_dataset() {
    for preset in Preset::ALL {
        let a = DatasetGenerator::seeded(1234).generate(64, preset);
        let b = DatasetGenerator::seeded(1234).generate(64, preset);
        assert_eq!(a, b, "{}", preset);
    }
}

#[test]
fn test_preset_names_parse() {
    for preset in Preset::ALL {
        assert_eq!(preset.id().parse::<Preset>().unwrap(), preset);
    }
    assert!("sorted".parse::<Preset>().is_err());
}
