use clist_rs::{Ring, EMPTY};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut rings = Ring::new();
    let mut list = EMPTY;
    for word in ["alpha", "beta", "gamma", "delta"] {
        list = Some(rings.insert(list, word).unwrap());
    }
    // last insertion -> first element
    let list = list.map(|last| rings.next(last));

    let beta = rings.find(list, Some(&mut |w: &&str| *w == "beta"));
    println!("found {:?}", rings.item(beta));

    let list = rings
        .clear_cb(list, Some(&mut |w: &'static str| println!("released {}", w)))
        .unwrap();
    assert!(clist_rs::is_empty(list));
}
