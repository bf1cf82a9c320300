#![feature(test)]

extern crate test;

use rs_wordle_filter::*;

use rand::rngs::StdRng;
use rand::SeedableRng;
use test::Bencher;

fn all_words() -> WordBank {
    let letters = ['a', 'e', 'i', 'o', 'r', 's', 't', 'l'];
    let mut words = Vec::new();
    for first in letters {
        for second in letters {
            for third in letters {
                for fourth in letters {
                    words.push(format!("{}{}{}{}s", first, second, third, fourth));
                }
            }
        }
    }
    WordBank::from_iterator(words)
}

#[bench]
fn bench_get_possible_words_no_specs(b: &mut Bencher) {
    let bank = all_words();
    let specs = SpecSet::default();

    b.iter(|| get_possible_words(&specs, &bank));
}

#[bench]
fn bench_get_possible_words_two_specs(b: &mut Bencher) {
    let bank = all_words();
    let specs = SpecSet::from_specs(["ra?i!s?e", "a?l!o!ts!"]).unwrap();

    b.iter(|| get_possible_words(&specs, &bank));
}

#[bench]
fn bench_choose_display_sample(b: &mut Bencher) {
    let bank = all_words();
    let mut rng = StdRng::seed_from_u64(1);

    b.iter(|| choose_display_sample(bank.to_vec(), 10, &mut rng));
}
