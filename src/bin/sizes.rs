//! This file produces a binary that prints the serialized sizes of the
//! system's artifacts (MPK, MSK, USK and CT) for several hierarchy bounds.

use group::Group;
use irmaseal_curve::Scalar;
use wibe::bbg::{BonehBoyenGoh, Msg};
use wibe::{Compress, Params, Pattern, Slot};

fn print_sizes(depth: usize) {
    let mut rng = rand::thread_rng();

    let params = Params::new(depth).unwrap();
    let (pk, msk) = BonehBoyenGoh::setup(&params, &mut rng);

    let ids: Vec<Scalar> = (1..=depth).map(|i| Scalar::from(i as u64)).collect();

    let mut sk = msk.clone();
    for id in &ids {
        sk = BonehBoyenGoh::derive(&pk, &sk, id, &mut rng).unwrap();
    }

    let slots: Vec<Slot> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            if i % 2 == 0 {
                Slot::Fixed(*id)
            } else {
                Slot::Wildcard
            }
        })
        .collect();

    let m = Msg::random(&mut rng);
    let ct = BonehBoyenGoh::encrypt(&pk, Pattern::from(slots), &m, &mut rng).unwrap();

    println!("bbg, L = {}", depth);
    println!("MPK:\t{}", pk.to_bytes().len());
    println!("MSK:\t{}", msk.to_bytes().len());
    println!("USK:\t{}", sk.to_bytes().len());
    println!("CT:\t{}\n", ct.to_bytes().len());
}

fn main() {
    println!("Serialized sizes in bytes:\n");
    for &depth in &[2usize, 4, 8] {
        print_sizes(depth);
    }
}
