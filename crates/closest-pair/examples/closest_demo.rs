//! Print the closest-pair distance of a small fixed point set.
//!
//! Usage:
//!   cargo run -p closest-pair --example closest_demo
//!   cargo run -p closest-pair --example closest_demo -- 0 0 3 4 1 1
//!
//! Extra arguments are read as a flat `x y x y ...` list.

use closest_pair::prelude::*;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let points = if args.is_empty() {
        points_from_tuples(&[
            (2.0, 3.0),
            (12.0, 30.0),
            (40.0, 50.0),
            (5.0, 1.0),
            (12.0, 10.0),
            (3.0, 4.0),
        ])
    } else {
        let coords: Result<Vec<f64>, _> = args.iter().map(|a| a.parse::<f64>()).collect();
        match coords {
            Ok(c) if c.len() % 2 == 0 => c.chunks(2).map(|xy| Pt2::new(xy[0], xy[1])).collect(),
            _ => {
                eprintln!("usage: closest_demo [x y x y ...]");
                return;
            }
        }
    };
    match closest_pair_distance(&points) {
        Ok(d) => println!("Distance: {d}"),
        Err(e) => eprintln!("error: {e}"),
    }
}
