//! Driver exercising the heap and list transformations on a file of
//! whitespace-separated integers.
//!
//! ```sh
//! cargo run --features binaries --bin arity-heap-demo -- input.txt --arity 4 --pivot 10 --drop-odd
//! ```

use std::fs;

use arity_heap::{list, DaryHeap};
use log::info;

fn main() {
    drop(env_logger::try_init());

    let matches = clap::Command::new("arity-heap-demo")
        .about("Sorts a file of whitespace-separated integers through an M-ary heap")
        .arg(
            clap::Arg::new("path")
                .index(1)
                .value_name("FILE")
                .required(true)
                .help("File containing whitespace-separated integers"),
        )
        .arg(
            clap::Arg::new("arity")
                .long("arity")
                .value_name("M")
                .default_value("2")
                .help("Arity of the heap tree"),
        )
        .arg(
            clap::Arg::new("pivot")
                .long("pivot")
                .value_name("N")
                .help("Also partition the values around this pivot"),
        )
        .arg(
            clap::Arg::new("drop-odd")
                .long("drop-odd")
                .action(clap::ArgAction::SetTrue)
                .help("Also print the values with odd ones filtered out"),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let arity: usize = matches
        .get_one::<String>("arity")
        .expect("arity has a default")
        .parse()
        .expect("arity wasn't a positive integer");

    let contents = fs::read_to_string(path).expect("could not read input file");
    let values: Vec<i64> = contents
        .split_whitespace()
        .map(|tok| tok.parse().expect("input wasn't an integer"))
        .collect();
    info!("read {} integers from {}", values.len(), path);

    println!("original: {}", join(values.iter()));

    let mut heap = DaryHeap::with_arity(arity);
    for &v in &values {
        heap.push(v);
    }
    info!("heap of arity {} holds {} elements", arity, heap.len());
    println!("sorted:   {}", join(heap.into_sorted_vec().iter()));

    if let Some(pivot) = matches.get_one::<String>("pivot") {
        let pivot: i64 = pivot.parse().expect("pivot wasn't an integer");
        let (le, gt) = list::partition(list::build(values.iter().copied()), &pivot);
        println!("<= {}:    {}", pivot, join(list::iter(&le)));
        println!(">  {}:    {}", pivot, join(list::iter(&gt)));
    }

    if matches.get_flag("drop-odd") {
        let kept = list::remove_if(list::build(values.iter().copied()), |v| v % 2 != 0);
        println!("even:     {}", join(list::iter(&kept)));
    }
}

fn join<'a>(values: impl Iterator<Item = &'a i64>) -> String {
    values
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
